use arrayvec::ArrayVec;

use crate::core::{Board, Cell, CellIndex, Direction, LINE_LEN, Line, PlayerId};

/// Offsets checked on either side of the placed cell.
///
/// A new line must include the placed cell, so only cells within two steps of
/// it can be part of one; anything further out cannot have been completed by
/// this move.
#[expect(clippy::cast_possible_wrap)]
const SCAN_REACH: i32 = (LINE_LEN as i32) - 1;

/// Lines completed by a single placement.
///
/// At most one line per direction: emitting a line consumes the streak, and
/// the five-cell scan window cannot hold a second disjoint triple.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    lines: ArrayVec<Line, { Direction::ALL.len() }>,
}

impl ScanOutcome {
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every cell consumed by the detected lines, to be marked retired.
    pub fn cells_to_retire(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.lines.iter().flat_map(|line| line.cells().iter().copied())
    }
}

/// Run-length scanner state for a single direction.
enum Streak {
    Idle,
    Building(ArrayVec<CellIndex, LINE_LEN>),
}

impl Streak {
    /// Feeds one eligible cell, returning a completed triple at length three.
    fn advance(self, index: CellIndex) -> (Self, Option<[CellIndex; LINE_LEN]>) {
        let mut run = match self {
            Self::Idle => ArrayVec::new(),
            Self::Building(run) => run,
        };
        run.push(index);
        match run.into_inner() {
            Ok(cells) => (Self::Idle, Some(cells)),
            Err(run) => (Self::Building(run), None),
        }
    }
}

/// Detects runs completed by the cell just placed at `placed`.
///
/// For each direction the offsets `-2..=2` along its unit step are visited in
/// order. Candidates off the board are skipped; an in-range candidate that is
/// neither the placed cell nor an unretired cell of `owner` resets the
/// streak. Reaching three eligible cells emits a line and resets the streak,
/// so a four- or five-cell run still yields a single line in that direction.
#[must_use]
pub fn scan(board: &Board, placed: CellIndex, owner: PlayerId) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for direction in Direction::ALL {
        let (dr, dc) = direction.step();
        let mut streak = Streak::Idle;
        for k in -SCAN_REACH..=SCAN_REACH {
            let Some(candidate) = offset_from(placed, k * dr, k * dc) else {
                continue;
            };
            if !is_eligible(board, candidate, placed, owner) {
                streak = Streak::Idle;
                continue;
            }
            let (next, completed) = streak.advance(candidate);
            streak = next;
            if let Some(cells) = completed {
                outcome.lines.push(Line::new(owner, direction, cells));
            }
        }
    }
    outcome
}

/// A candidate counts toward a run if it is the placed cell itself, or an
/// unretired cell already owned by the mover.
fn is_eligible(board: &Board, candidate: CellIndex, placed: CellIndex, owner: PlayerId) -> bool {
    candidate == placed
        || matches!(
            board.cell(candidate),
            Cell::Claimed { owner: o, retired: false } if o == owner
        )
}

fn offset_from(origin: CellIndex, dr: i32, dc: i32) -> Option<CellIndex> {
    let row = usize::try_from(i32::try_from(origin.row()).ok()? + dr).ok()?;
    let col = usize::try_from(i32::try_from(origin.col()).ok()? + dc).ok()?;
    CellIndex::from_row_col(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(index: usize) -> CellIndex {
        CellIndex::new(index).unwrap()
    }

    fn board_with(owner: PlayerId, claimed: &[usize]) -> Board {
        let mut board = Board::EMPTY;
        for &index in claimed {
            board.claim(cell(index), owner);
        }
        board
    }

    #[test]
    fn test_detects_horizontal_run() {
        let owner = PlayerId::new(0);
        let board = board_with(owner, &[10, 11, 12]);
        let outcome = scan(&board, cell(12), owner);

        assert_eq!(outcome.lines().len(), 1);
        let line = &outcome.lines()[0];
        assert_eq!(line.direction(), Direction::Row);
        assert_eq!(line.cells(), &[cell(10), cell(11), cell(12)]);
        assert_eq!(line.owner(), owner);
    }

    #[test]
    fn test_detects_vertical_run() {
        let owner = PlayerId::new(1);
        let board = board_with(owner, &[5, 15, 25]);
        let outcome = scan(&board, cell(15), owner);

        assert_eq!(outcome.lines().len(), 1);
        assert_eq!(outcome.lines()[0].direction(), Direction::Column);
        assert_eq!(outcome.lines()[0].cells(), &[cell(5), cell(15), cell(25)]);
    }

    #[test]
    fn test_detects_diagonal_runs() {
        let owner = PlayerId::new(0);
        // 0, 11, 22 runs down-right; 2, 11, 20 runs down-left.
        let board = board_with(owner, &[0, 11, 22, 2, 20]);
        let outcome = scan(&board, cell(11), owner);

        let directions: Vec<_> = outcome.lines().iter().map(Line::direction).collect();
        assert!(directions.contains(&Direction::Diagonal));
        assert!(directions.contains(&Direction::AntiDiagonal));
        assert_eq!(outcome.lines().len(), 2);
    }

    #[test]
    fn test_placed_cell_counts_before_board_claim() {
        // The scanner must accept the placed index even if the caller has not
        // written it to the board yet.
        let owner = PlayerId::new(0);
        let board = board_with(owner, &[30, 31]);
        let outcome = scan(&board, cell(32), owner);

        assert_eq!(outcome.lines().len(), 1);
        assert_eq!(outcome.lines()[0].cells(), &[cell(30), cell(31), cell(32)]);
    }

    #[test]
    fn test_opponent_cell_breaks_streak() {
        let owner = PlayerId::new(0);
        let mut board = board_with(owner, &[40, 41, 43, 44]);
        board.claim(cell(42), PlayerId::new(1));
        // 40 41 [42: opponent] 43 44 - placing either side never completes.
        assert!(scan(&board, cell(41), owner).is_empty());
        assert!(scan(&board, cell(43), owner).is_empty());
    }

    #[test]
    fn test_retired_cell_breaks_streak() {
        let owner = PlayerId::new(0);
        let mut board = board_with(owner, &[60, 61, 62, 63]);
        for index in [60, 61, 62] {
            board.retire(cell(index));
        }
        // 63 plus two retired neighbours must not form a line.
        let outcome = scan(&board, cell(63), owner);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_four_in_window_yields_single_line() {
        let owner = PlayerId::new(0);
        let board = board_with(owner, &[70, 71, 72, 73]);
        // Window around 72 sees 70..=74; the streak emits at [70,71,72] and
        // the remaining cells cannot reach three again.
        let outcome = scan(&board, cell(72), owner);

        assert_eq!(outcome.lines().len(), 1);
        assert_eq!(outcome.lines()[0].cells(), &[cell(70), cell(71), cell(72)]);
    }

    #[test]
    fn test_window_is_clipped_at_board_edges() {
        let owner = PlayerId::new(0);
        // Top-left corner: offsets -2 and -1 fall off the board in every
        // direction and must be skipped, not treated as breaks.
        let board = board_with(owner, &[0, 1, 2]);
        let outcome = scan(&board, cell(0), owner);

        assert_eq!(outcome.lines().len(), 1);
        assert_eq!(outcome.lines()[0].cells(), &[cell(0), cell(1), cell(2)]);
    }

    #[test]
    fn test_row_runs_do_not_wrap_between_rows() {
        let owner = PlayerId::new(0);
        // 8, 9 end row 0; 10 starts row 1. Adjacent indices, not a line.
        let board = board_with(owner, &[8, 9, 10]);
        let outcome = scan(&board, cell(9), owner);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_gap_resets_streak() {
        let owner = PlayerId::new(0);
        // 50 _ 52 53: placing 52 or 53 leaves no triple.
        let board = board_with(owner, &[50, 52, 53]);
        assert!(scan(&board, cell(53), owner).is_empty());
    }

    #[test]
    fn test_cells_to_retire_is_union_of_line_members() {
        let owner = PlayerId::new(0);
        let board = board_with(owner, &[0, 11, 22, 2, 20]);
        let outcome = scan(&board, cell(11), owner);

        let mut retire: Vec<_> = outcome.cells_to_retire().collect();
        retire.sort_unstable();
        assert_eq!(retire, vec![cell(0), cell(2), cell(11), cell(11), cell(20), cell(22)]);
    }
}
