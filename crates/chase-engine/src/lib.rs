pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("cell {index} is already occupied")]
    CellOccupied { index: CellIndex },
    #[display("player {player} moved out of turn (current player is {expected})")]
    NotPlayersTurn { player: PlayerId, expected: PlayerId },
    #[display("no match is in progress")]
    NotPlaying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    #[display("player count {count} is outside the supported range {MIN_PLAYERS}..={MAX_PLAYERS}")]
    PlayerCount { count: usize },
    #[display("player at seat {seat} has an empty name")]
    EmptyName { seat: usize },
}
