use arrayvec::ArrayVec;

use crate::{
    MoveError,
    core::{Board, CellIndex, Direction, Line, MAX_PLAYERS, Player, PlayerId},
    engine::line_scanner,
};

/// Authoritative state of one match: board, seated players, whose turn it
/// is, and every line scored so far.
///
/// There is exactly one writer: [`commit_move`](Self::commit_move). A move
/// either fully commits (claim, scoring, retirement, turn advance) or is
/// rejected before any mutation.
#[derive(Debug, Clone)]
pub struct MatchState {
    board: Board,
    players: ArrayVec<Player, MAX_PLAYERS>,
    current_player: usize,
    lines: Vec<Line>,
}

/// What a committed move did.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    placed: CellIndex,
    completed_lines: ArrayVec<Line, { Direction::ALL.len() }>,
    finished: bool,
}

impl MoveOutcome {
    #[must_use]
    pub fn placed(&self) -> CellIndex {
        self.placed
    }

    /// Lines completed by this move, at most one per direction.
    #[must_use]
    pub fn completed_lines(&self) -> &[Line] {
        &self.completed_lines
    }

    /// True when this move filled the last empty cell and ended the game.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }
}

impl MatchState {
    pub(crate) fn new(players: ArrayVec<Player, MAX_PLAYERS>) -> Self {
        debug_assert!(!players.is_empty());
        Self {
            board: Board::EMPTY,
            players,
            current_player: 0,
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Every line scored so far, in detection order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Players currently holding the highest score, in seat order.
    #[must_use]
    pub fn leaders(&self) -> Vec<&Player> {
        let Some(top) = self.players.iter().map(Player::score).max() else {
            return Vec::new();
        };
        self.players
            .iter()
            .filter(|player| player.score() == top)
            .collect()
    }

    /// Applies one move for `player` at `index`.
    ///
    /// Callers must have passed the guess gate first; this method only checks
    /// the structural preconditions (it is `player`'s turn, the cell is
    /// empty) and rejects the move before touching anything if they fail.
    pub fn commit_move(
        &mut self,
        index: CellIndex,
        player: PlayerId,
    ) -> Result<MoveOutcome, MoveError> {
        let expected = self.current_player().id();
        if player != expected {
            return Err(MoveError::NotPlayersTurn { player, expected });
        }
        if !self.board.cell(index).is_empty() {
            return Err(MoveError::CellOccupied { index });
        }

        self.board.claim(index, player);
        let scan = line_scanner::scan(&self.board, index, player);
        for cell in scan.cells_to_retire() {
            self.board.retire(cell);
        }
        let mut completed_lines = ArrayVec::new();
        for line in scan.lines() {
            self.players[self.current_player].increment_score();
            self.lines.push(*line);
            completed_lines.push(*line);
        }

        let finished = self.board.is_full();
        if !finished {
            self.current_player = (self.current_player + 1) % self.players.len();
        }

        Ok(MoveOutcome {
            placed: index,
            completed_lines,
            finished,
        })
    }
}
