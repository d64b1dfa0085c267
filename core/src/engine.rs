use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won, on the first move that leaves the board solved
/// - Won is terminal until an external reset
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One play-through: the board, the move counter, and the won flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    move_count: Saturating<MoveCount>,
    state: EngineState,
}

impl PlayEngine {
    /// A shuffle may (rarely) hand back the solved board, in which case the
    /// session starts out already won.
    pub fn new(board: Board) -> Self {
        let state = if board.is_solved() {
            EngineState::Won
        } else {
            EngineState::Playing
        };
        Self {
            board,
            move_count: Saturating(0),
            state,
        }
    }

    pub fn new_shuffled<G: BoardGenerator>(generator: G) -> Self {
        Self::new(generator.generate())
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_count(&self) -> MoveCount {
        self.move_count.0
    }

    pub fn valid_moves(&self) -> MoveSet {
        self.board.valid_moves()
    }

    /// Applies a click on `index`. Clicks on slots that are not adjacent to
    /// the empty slot, and any click after the session is won, are silently
    /// ignored. An out-of-range index is a caller bug and is an error.
    pub fn click(&mut self, index: SlotIndex) -> Result<MoveOutcome> {
        use MoveOutcome::*;

        let index = self.board.validate_index(index)?;

        if self.state.is_won() {
            return Ok(NoChange);
        }

        let empty_index = self.board.empty_index();
        if !valid_moves(empty_index).contains(&index) {
            return Ok(NoChange);
        }

        self.board.swap(empty_index, index);
        self.move_count += 1;
        log::debug!(
            "slid tile from slot {} into slot {}, move {}",
            index,
            empty_index,
            self.move_count.0
        );

        Ok(if self.board.is_solved() {
            self.state = EngineState::Won;
            log::debug!("board solved after {} moves", self.move_count.0);
            Won
        } else {
            Moved
        })
    }

    /// Discards this session and starts a fresh one from a new shuffle.
    pub fn reset<G: BoardGenerator>(&mut self, generator: G) {
        *self = Self::new_shuffled(generator);
    }
}
