use crate::{GameError, Result, SLOT_COUNT};

/// One slot of the board: the empty slot tiles slide into, or a numbered tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Tile(u8),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Raw value as rendered or exchanged with a caller, `0` for the empty slot.
    pub const fn to_value(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Tile(value) => value,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Empty),
            value if value < SLOT_COUNT => Ok(Self::Tile(value)),
            _ => Err(GameError::InvalidTileValue),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_trip_through_cells() {
        assert_eq!(Cell::from_value(0).unwrap(), Cell::Empty);
        assert_eq!(Cell::from_value(15).unwrap(), Cell::Tile(15));
        assert_eq!(Cell::Tile(7).to_value(), 7);
        assert_eq!(Cell::Empty.to_value(), 0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(Cell::from_value(16), Err(GameError::InvalidTileValue));
        assert_eq!(Cell::from_value(255), Err(GameError::InvalidTileValue));
    }
}
