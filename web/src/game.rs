use crate::theme::Theme;
use crate::utils::*;
use suraido_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    TileClick(game::SlotIndex),
    NewGame,
    CycleTheme,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Forced shuffle seed, random when absent.
    #[prop_or_default]
    pub(crate) forced_seed: Option<u64>,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    index: game::SlotIndex,
    cell: game::Cell,
    #[prop_or_default]
    movable: bool,
    callback: Callback<game::SlotIndex>,
}

#[function_component(TileView)]
fn tile_view(props: &TileProps) -> Html {
    let TileProps {
        index,
        cell,
        movable,
        callback,
    } = props.clone();

    let class = classes!(
        "tile",
        match cell {
            game::Cell::Empty => classes!("empty"),
            game::Cell::Tile(_) => classes!(),
        },
        movable.then_some("movable"),
    );

    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        log::trace!("slot {} clicked", index);
        callback.emit(index);
    });

    let label = match cell {
        game::Cell::Empty => String::new(),
        game::Cell::Tile(value) => value.to_string(),
    };

    html! {
        <td {class} {onclick}>{label}</td>
    }
}

fn format_for_counter(num: game::MoveCount) -> String {
    match num {
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

pub(crate) struct GameView {
    engine: game::PlayEngine,
    theme: Theme,
    forced_seed: Option<u64>,
}

impl GameView {
    fn next_seed(&self) -> u64 {
        self.forced_seed.unwrap_or_else(js_random_seed)
    }

    fn state_class(&self) -> Classes {
        use game::EngineState::*;
        classes!(match self.engine.state() {
            Playing => "in-progress",
            Won => "won",
        })
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let forced_seed = ctx.props().forced_seed;
        let theme = Theme::init();
        let seed = forced_seed.unwrap_or_else(js_random_seed);
        log::debug!("shuffle seed: {}", seed);
        Self {
            engine: game::PlayEngine::new_shuffled(game::RandomWalkGenerator::new(seed)),
            theme,
            forced_seed,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            TileClick(index) => match self.engine.click(index) {
                Ok(outcome) => {
                    log::trace!("click on slot {}: {:?}", index, outcome);
                    outcome.has_update()
                }
                Err(err) => {
                    log::error!("rejected click on slot {}: {}", index, err);
                    false
                }
            },
            NewGame => {
                self.engine
                    .reset(game::RandomWalkGenerator::new(self.next_seed()));
                true
            }
            CycleTheme => {
                self.theme = self.theme.next();
                self.theme.apply();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        // moves are a pure function of the empty slot, compute them once per
        // render instead of per tile
        let movable_slots = self.engine.valid_moves();
        let move_counter = format_for_counter(self.engine.move_count());
        let state_class = self.state_class();
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_cycle_theme = ctx.link().callback(|_| CycleTheme);

        html! {
            <div class="suraido">
                <small onclick={cb_cycle_theme}>{self.theme.label()}</small>
                <nav>
                    <aside>{move_counter}</aside>
                    <span><button class={state_class} onclick={cb_new_game}/></span>
                </nav>
                <table>
                    {
                        for (0..game::GRID_SIZE).map(|row| html! {
                            <tr>
                                {
                                    for (0..game::GRID_SIZE).map(|col| {
                                        let index = row * game::GRID_SIZE + col;
                                        let cell = self.engine.board().cell_at(index);
                                        let movable = movable_slots.contains(&index);
                                        let callback = ctx.link().callback(Msg::TileClick);
                                        html! {
                                            <TileView {index} {cell} {movable} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                if self.engine.is_won() {
                    <p class="win-message">{"Congratulations, you solved it!"}</p>
                }
            </div>
        }
    }
}
