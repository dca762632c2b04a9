use super::{board::CellIndex, player::PlayerId};

/// Number of cells that make up a scored line.
pub const LINE_LEN: usize = 3;

/// One of the four directions a line can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Row,
    Column,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Self; 4] = [
        Self::Row,
        Self::Column,
        Self::Diagonal,
        Self::AntiDiagonal,
    ];

    /// Unit step as `(row delta, column delta)`.
    #[must_use]
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::Row => (0, 1),
            Self::Column => (1, 0),
            Self::Diagonal => (1, 1),
            Self::AntiDiagonal => (1, -1),
        }
    }
}

/// A scored run of exactly [`LINE_LEN`] same-owner cells.
///
/// Recorded once, on the move that completes it; the member cells are retired
/// at the same time and their membership is permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    owner: PlayerId,
    direction: Direction,
    cells: [CellIndex; LINE_LEN],
}

impl Line {
    pub(crate) fn new(owner: PlayerId, direction: Direction, cells: [CellIndex; LINE_LEN]) -> Self {
        Self {
            owner,
            direction,
            cells,
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Member cells in increasing scan order.
    #[must_use]
    pub fn cells(&self) -> &[CellIndex; LINE_LEN] {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, index: CellIndex) -> bool {
        self.cells.contains(&index)
    }
}
