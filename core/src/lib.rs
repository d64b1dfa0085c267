#![no_std]

extern crate alloc;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Ordered sequence of the 16 board slots, always a permutation of the 15
/// tiles plus the empty slot. Slot `i` sits at row `i / 4`, column `i % 4`.
/// Serialized as the raw slot values and re-validated on deserialization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 16]", into = "[u8; 16]")]
pub struct Board {
    cells: [Cell; SLOT_COUNT as usize],
}

impl Board {
    /// The solved ordering: tiles `1..=15` ascending, empty slot last.
    pub fn solved() -> Self {
        let mut cells = [Cell::Empty; SLOT_COUNT as usize];
        for (i, cell) in cells.iter_mut().take(usize::from(SLOT_COUNT) - 1).enumerate() {
            *cell = Cell::Tile(i as u8 + 1);
        }
        Self { cells }
    }

    /// Builds a board from raw slot values, rejecting anything that is not a
    /// permutation of `{0, 1, ..., 15}`.
    pub fn from_values(values: [u8; SLOT_COUNT as usize]) -> Result<Self> {
        let mut seen = [false; SLOT_COUNT as usize];
        let mut cells = [Cell::Empty; SLOT_COUNT as usize];

        for (cell, &value) in cells.iter_mut().zip(values.iter()) {
            *cell = Cell::from_value(value)?;
            if core::mem::replace(&mut seen[usize::from(value)], true) {
                return Err(GameError::InvalidBoard);
            }
        }

        Ok(Self { cells })
    }

    /// Raw snapshot for rendering, `0` marking the empty slot.
    pub fn values(&self) -> [u8; SLOT_COUNT as usize] {
        core::array::from_fn(|i| self.cells[i].to_value())
    }

    pub fn cell_at(&self, index: SlotIndex) -> Cell {
        self.cells[usize::from(index)]
    }

    pub fn empty_index(&self) -> SlotIndex {
        self.cells
            .iter()
            .position(|cell| cell.is_empty())
            .expect("board always holds exactly one empty slot") as SlotIndex
    }

    pub fn valid_moves(&self) -> MoveSet {
        valid_moves(self.empty_index())
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().enumerate().all(|(i, &cell)| match cell {
            Cell::Tile(value) => usize::from(value) == i + 1,
            Cell::Empty => i + 1 == usize::from(SLOT_COUNT),
        })
    }

    pub fn validate_index(&self, index: SlotIndex) -> Result<SlotIndex> {
        if index < SLOT_COUNT {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub(crate) fn swap(&mut self, a: SlotIndex, b: SlotIndex) {
        self.cells.swap(usize::from(a), usize::from(b));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl TryFrom<[u8; SLOT_COUNT as usize]> for Board {
    type Error = GameError;

    fn try_from(values: [u8; SLOT_COUNT as usize]) -> Result<Self> {
        Self::from_values(values)
    }
}

impl From<Board> for [u8; SLOT_COUNT as usize] {
    fn from(board: Board) -> Self {
        board.values()
    }
}

impl Index<SlotIndex> for Board {
    type Output = Cell;

    fn index(&self, index: SlotIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Won,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the session
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];

    #[test]
    fn solved_board_is_solved() {
        assert!(Board::solved().is_solved());
        assert_eq!(Board::solved().values(), SOLVED);
        assert_eq!(Board::solved().empty_index(), 15);
    }

    #[test]
    fn single_transposition_is_not_solved() {
        let mut values = SOLVED;
        values.swap(0, 1);
        assert!(!Board::from_values(values).unwrap().is_solved());

        let mut values = SOLVED;
        values.swap(6, 13);
        assert!(!Board::from_values(values).unwrap().is_solved());
    }

    #[test]
    fn from_values_accepts_any_permutation() {
        let values = [15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let board = Board::from_values(values).unwrap();
        assert_eq!(board.values(), values);
        assert_eq!(board.empty_index(), 15);
        assert_eq!(board[15], Cell::Empty);
        assert_eq!(board[0], Cell::Tile(15));
    }

    #[test]
    fn from_values_rejects_duplicates() {
        let mut values = SOLVED;
        values[0] = 2;
        assert_eq!(Board::from_values(values), Err(GameError::InvalidBoard));
    }

    #[test]
    fn from_values_rejects_out_of_range_values() {
        let mut values = SOLVED;
        values[3] = 16;
        assert_eq!(Board::from_values(values), Err(GameError::InvalidTileValue));
    }

    #[test]
    fn snapshots_are_raw_values() {
        let board = Board::solved();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,0]");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn invalid_snapshots_are_rejected() {
        // no empty slot
        let duplicated = "[1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,15]";
        assert!(serde_json::from_str::<Board>(duplicated).is_err());

        let out_of_range = "[1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16]";
        assert!(serde_json::from_str::<Board>(out_of_range).is_err());
    }

    #[test]
    fn valid_moves_follow_the_empty_slot() {
        let mut values = SOLVED;
        values.swap(11, 15);
        let board = Board::from_values(values).unwrap();
        assert_eq!(board.empty_index(), 11);
        let moves = board.valid_moves();
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&7));
        assert!(moves.contains(&10));
        assert!(moves.contains(&15));
    }
}
