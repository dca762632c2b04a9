use arrayvec::ArrayVec;

use crate::{
    MoveError, SetupError,
    core::{CellIndex, MAX_PLAYERS, MIN_PLAYERS, Player, PlayerConfig, PlayerId},
    engine::match_state::{MatchState, MoveOutcome},
};

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Phase {
    /// No match yet; the setup form is collecting players.
    #[default]
    Setup,
    /// A match is in progress.
    Playing,
    /// Every cell is occupied; scores are final.
    Finished,
}

/// Outcome of a guess at a cell's hidden number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Guess {
    Correct,
    Incorrect,
}

/// The guess gate: correct iff the guessed value is the cell's hidden number.
///
/// Never mutates anything; callers re-prompt on [`Guess::Incorrect`] for as
/// long as they like. Non-numeric input never reaches this function - the
/// caller maps it to `Incorrect` at the parse step.
#[must_use]
pub fn validate_guess(index: CellIndex, value: u8) -> Guess {
    if value == index.hidden_number() {
        Guess::Correct
    } else {
        Guess::Incorrect
    }
}

/// Owns the match state for one sitting and guards every mutation behind the
/// move transaction.
///
/// Presentation components hold a `GameSession`, read its state between
/// events, and mutate it only through [`start_game`](Self::start_game),
/// [`commit_move`](Self::commit_move), and [`restart`](Self::restart).
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    phase: Phase,
    match_state: Option<MatchState>,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the current match, `None` during setup.
    #[must_use]
    pub fn match_state(&self) -> Option<&MatchState> {
        self.match_state.as_ref()
    }

    /// Starts a fresh match from the setup form's output.
    ///
    /// Seats are assigned sequential ids in list order. Starting over an
    /// existing match discards it, the same as [`restart`](Self::restart)
    /// followed by `start_game`.
    pub fn start_game(&mut self, configs: &[PlayerConfig]) -> Result<(), SetupError> {
        let count = configs.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount { count });
        }
        if let Some(seat) = configs.iter().position(|config| config.name.trim().is_empty()) {
            return Err(SetupError::EmptyName { seat });
        }

        let players: ArrayVec<Player, MAX_PLAYERS> = configs
            .iter()
            .zip(0u8..)
            .map(|(config, id)| Player::new(PlayerId::new(id), config.clone()))
            .collect();
        self.match_state = Some(MatchState::new(players));
        self.phase = Phase::Playing;
        Ok(())
    }

    /// Checks whether `index` can be offered to the guess dialog.
    ///
    /// Selection never mutates the session; only a committed move does.
    pub fn select_cell(&self, index: CellIndex) -> Result<(), MoveError> {
        let state = self.playing_state()?;
        if !state.board().cell(index).is_empty() {
            return Err(MoveError::CellOccupied { index });
        }
        Ok(())
    }

    /// Commits a validated move and advances or finishes the game.
    ///
    /// Only called after [`validate_guess`] returned [`Guess::Correct`] (or
    /// from the bulk-fill harness, which bypasses the guess gate).
    pub fn commit_move(
        &mut self,
        index: CellIndex,
        player: PlayerId,
    ) -> Result<MoveOutcome, MoveError> {
        if !self.phase.is_playing() {
            return Err(MoveError::NotPlaying);
        }
        let state = self.match_state.as_mut().ok_or(MoveError::NotPlaying)?;
        let outcome = state.commit_move(index, player)?;
        if outcome.finished() {
            self.phase = Phase::Finished;
        }
        Ok(outcome)
    }

    /// Discards the match and returns to setup.
    pub fn restart(&mut self) {
        self.match_state = None;
        self.phase = Phase::Setup;
    }

    /// Deterministic exhaustive fill: commits every remaining empty cell in
    /// index order, round-robin from the current player, bypassing the guess
    /// gate. Ends with the session finished.
    pub fn fill_remaining(&mut self) -> Result<(), MoveError> {
        if !self.phase.is_playing() {
            return Err(MoveError::NotPlaying);
        }
        for index in CellIndex::all() {
            if !self.phase.is_playing() {
                break;
            }
            let state = self.playing_state()?;
            if !state.board().cell(index).is_empty() {
                continue;
            }
            let player = state.current_player().id();
            self.commit_move(index, player)?;
        }
        Ok(())
    }

    fn playing_state(&self) -> Result<&MatchState, MoveError> {
        if !self.phase.is_playing() {
            return Err(MoveError::NotPlaying);
        }
        self.match_state.as_ref().ok_or(MoveError::NotPlaying)
    }
}
