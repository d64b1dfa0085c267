use super::*;

/// Number of random legal swaps applied when shuffling a fresh board.
pub const SHUFFLE_STEPS: u32 = 1000;

/// Generation strategy that walks the empty slot through a long sequence of
/// uniformly random legal moves starting from the solved board. Every
/// intermediate board is reachable by legal play, so the result is always
/// solvable. The walk may (rarely) end back on the solved board itself,
/// which is a valid outcome and is deliberately not re-rolled.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomWalkGenerator {
    seed: u64,
    steps: u32,
}

impl RandomWalkGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            steps: SHUFFLE_STEPS,
        }
    }

    pub fn with_steps(seed: u64, steps: u32) -> Self {
        Self { seed, steps }
    }
}

impl BoardGenerator for RandomWalkGenerator {
    fn generate(self) -> Board {
        use rand::prelude::*;

        let mut board = Board::solved();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..self.steps {
            let empty_index = board.empty_index();
            let moves = valid_moves(empty_index);
            let chosen = moves[rng.random_range(0..moves.len())];
            board.swap(empty_index, chosen);
        }

        if board.is_solved() {
            log::debug!("random walk returned to the solved board, keeping it");
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_preserves_the_tile_multiset() {
        for seed in 0..32 {
            let board = RandomWalkGenerator::new(seed).generate();
            let mut sorted = board.values();
            sorted.sort_unstable();
            assert_eq!(sorted, core::array::from_fn::<u8, 16, _>(|i| i as u8));
        }
    }

    #[test]
    fn same_seed_same_board() {
        let a = RandomWalkGenerator::new(0xdead_beef).generate();
        let b = RandomWalkGenerator::new(0xdead_beef).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_steps_is_the_solved_board() {
        let board = RandomWalkGenerator::with_steps(99, 0).generate();
        assert!(board.is_solved());
    }

    #[test]
    fn every_step_is_a_legal_swap() {
        // replay a short walk by hand and check each intermediate board
        use rand::prelude::*;

        let mut board = Board::solved();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let empty_index = board.empty_index();
            let moves = valid_moves(empty_index);
            let chosen = moves[rng.random_range(0..moves.len())];
            assert!(board.valid_moves().contains(&chosen));
            board.swap(empty_index, chosen);
            assert_eq!(Board::from_values(board.values()).unwrap(), board);
        }

        assert_eq!(board, RandomWalkGenerator::with_steps(42, 50).generate());
    }
}
