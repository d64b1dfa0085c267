use smallvec::SmallVec;

/// Linear dimension of the board, fixed at 4x4.
pub const GRID_SIZE: u8 = 4;

/// Number of slots on the board, one of which is always empty.
pub const SLOT_COUNT: u8 = GRID_SIZE * GRID_SIZE;

/// Flat index into the board, row-major.
pub type SlotIndex = u8;

/// Count type used for the per-session move counter.
pub type MoveCount = u32;

/// Set of slots the empty slot may swap with, at most its 4-neighborhood.
pub type MoveSet = SmallVec<[SlotIndex; 4]>;

pub const fn row_of(index: SlotIndex) -> u8 {
    index / GRID_SIZE
}

pub const fn col_of(index: SlotIndex) -> u8 {
    index % GRID_SIZE
}

/// Slots that may legally swap with the empty slot when it sits at `index`:
/// the orthogonal neighbors of `index`, clipped at the grid edges.
pub fn valid_moves(index: SlotIndex) -> MoveSet {
    NeighborIter::new(index).collect()
}

const DISPLACEMENTS: [(isize, isize); 4] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Applies `delta` to `index`, returning a value only when it remains in bounds.
fn apply_delta(index: SlotIndex, delta: (isize, isize)) -> Option<SlotIndex> {
    let (dr, dc) = delta;

    let next_row = row_of(index).checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= GRID_SIZE {
        return None;
    }

    let next_col = col_of(index).checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= GRID_SIZE {
        return None;
    }

    Some(next_row * GRID_SIZE + next_col)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: SlotIndex,
    index: u8,
}

impl NeighborIter {
    fn new(center: SlotIndex) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = SlotIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
