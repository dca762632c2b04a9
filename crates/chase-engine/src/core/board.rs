use super::player::PlayerId;

/// Width and height of the board in cells.
pub const BOARD_SIZE: usize = 10;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Position of a single cell on the board.
///
/// Indices run `0..100` in row-major order: `row = index / 10`,
/// `column = index % 10`. The cell's hidden number is always `index + 1`;
/// the mapping is fixed and never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct CellIndex(u8);

impl CellIndex {
    /// The top-left cell.
    pub const FIRST: Self = Self(0);

    /// Creates a cell index, returning `None` when out of range.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        u8::try_from(index).ok().filter(|&i| usize::from(i) < CELL_COUNT).map(Self)
    }

    /// Creates a cell index from board coordinates.
    #[must_use]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self::at(row * BOARD_SIZE + col))
    }

    #[expect(clippy::cast_possible_truncation)]
    fn at(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self(index as u8)
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    #[must_use]
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// The number a player must guess to claim this cell.
    #[must_use]
    pub fn hidden_number(self) -> u8 {
        self.0 + 1
    }

    /// All cell indices in increasing order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).filter_map(Self::new)
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Unclaimed; its hidden number has not been guessed yet.
    #[default]
    Empty,
    /// Claimed by a player. `retired` marks cells consumed by a scored line.
    Claimed { owner: PlayerId, retired: bool },
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Claimed { owner, .. } => Some(owner),
        }
    }

    #[must_use]
    pub fn is_retired(self) -> bool {
        matches!(self, Cell::Claimed { retired: true, .. })
    }
}

/// The 10×10 playing field: exactly [`CELL_COUNT`] cells, row-major.
///
/// The board is pure data; claim validation and line scoring live in the
/// engine layer. Cells only ever go from empty to claimed, and from claimed
/// to retired.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; CELL_COUNT],
    };

    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Cell {
        self.cells[index.index()]
    }

    pub(crate) fn claim(&mut self, index: CellIndex, owner: PlayerId) {
        debug_assert!(self.cell(index).is_empty());
        self.cells[index.index()] = Cell::Claimed {
            owner,
            retired: false,
        };
    }

    pub(crate) fn retire(&mut self, index: CellIndex) {
        if let Cell::Claimed { retired, .. } = &mut self.cells[index.index()] {
            *retired = true;
        }
    }

    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns an iterator over the board's rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_row_col_round_trip() {
        for index in CellIndex::all() {
            assert_eq!(
                index.row() * BOARD_SIZE + index.col(),
                index.index(),
                "row/col mapping broken at {index}",
            );
            assert_eq!(
                CellIndex::from_row_col(index.row(), index.col()),
                Some(index),
            );
        }
    }

    #[test]
    fn test_hidden_number_is_index_plus_one() {
        for index in CellIndex::all() {
            assert_eq!(usize::from(index.hidden_number()), index.index() + 1);
        }
    }

    #[test]
    fn test_out_of_range_positions_rejected() {
        assert_eq!(CellIndex::new(CELL_COUNT), None);
        assert_eq!(CellIndex::from_row_col(BOARD_SIZE, 0), None);
        assert_eq!(CellIndex::from_row_col(0, BOARD_SIZE), None);
        assert_eq!(CellIndex::new(CELL_COUNT - 1).map(CellIndex::index), Some(99));
    }

    #[test]
    fn test_claim_and_retire() {
        let mut board = Board::EMPTY;
        let index = CellIndex::new(42).unwrap();
        let owner = PlayerId::new(1);

        assert!(board.cell(index).is_empty());
        board.claim(index, owner);
        assert_eq!(board.cell(index).owner(), Some(owner));
        assert!(!board.cell(index).is_retired());

        board.retire(index);
        assert!(board.cell(index).is_retired());
        assert_eq!(board.cell(index).owner(), Some(owner));
    }

    #[test]
    fn test_retire_empty_cell_is_a_no_op() {
        let mut board = Board::EMPTY;
        let index = CellIndex::new(0).unwrap();
        board.retire(index);
        assert!(board.cell(index).is_empty());
    }

    #[test]
    fn test_is_full_counts_every_cell() {
        let mut board = Board::EMPTY;
        assert_eq!(board.occupied_cells(), 0);
        for index in CellIndex::all() {
            assert!(!board.is_full());
            board.claim(index, PlayerId::new(0));
        }
        assert!(board.is_full());
        assert_eq!(board.occupied_cells(), CELL_COUNT);
    }

    #[test]
    fn test_rows_are_board_size_chunks() {
        let board = Board::EMPTY;
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows.len(), BOARD_SIZE);
        for row in rows {
            assert_eq!(row.len(), BOARD_SIZE);
        }
    }
}
