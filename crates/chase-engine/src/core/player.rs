use serde::{Deserialize, Serialize};

/// Smallest number of players a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Largest number of players a game supports.
pub const MAX_PLAYERS: usize = 5;

/// Stable identifier of a player within one game.
///
/// Ids are assigned sequentially in seat order at game start and never change
/// for the game's duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct PlayerId(u8);

impl PlayerId {
    pub(crate) const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The player's seat position, usable as an index into the player list.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Display colors offered by the setup form, one per seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Amber,
    Violet,
}

impl PlayerColor {
    pub const ALL: [Self; MAX_PLAYERS] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Amber,
        Self::Violet,
    ];
}

/// Output of the setup form: the name and color for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: PlayerColor,
}

impl PlayerConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// One participant in a running match.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: PlayerColor,
    score: u32,
}

impl Player {
    pub(crate) fn new(id: PlayerId, config: PlayerConfig) -> Self {
        Self {
            id,
            name: config.name,
            color: config.color,
            score: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// The player's score. Monotonically non-decreasing during a game.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn increment_score(&mut self) {
        self.score += 1;
    }
}
