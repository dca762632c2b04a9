//! Game orchestration on top of the core data model.
//!
//! - [`scan`](line_scanner::scan) - detects lines completed by a placement
//! - [`MatchState`] - board, players, turn order, and the move transaction
//! - [`GameSession`] - phase machine and the public API presentation uses
//!
//! A move enters through [`GameSession::commit_move`], which validates the
//! preconditions, claims the cell, runs the line scanner, applies scores and
//! retirements, and either advances the turn or finishes the game. The whole
//! step is atomic: a rejected move leaves no trace.

pub use self::{line_scanner::*, match_state::*, session::*};

mod line_scanner;
mod match_state;
mod session;
