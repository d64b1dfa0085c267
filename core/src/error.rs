use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Slot index out of range")]
    InvalidIndex,
    #[error("Tile value out of range")]
    InvalidTileValue,
    #[error("Board is not a permutation of the solved tiles")]
    InvalidBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
