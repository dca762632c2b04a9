use chase_engine::{MatchState, Player, PlayerColor};
use serde::Serialize;

/// Final standings of a match, written by `play --save-summary` and
/// `fill --output`.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub players: Vec<PlayerStanding>,
    pub line_count: usize,
    pub winners: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStanding {
    pub name: String,
    pub color: PlayerColor,
    pub score: u32,
}

impl GameSummary {
    pub fn from_match(state: &MatchState) -> Self {
        Self {
            players: state.players().iter().map(PlayerStanding::from_player).collect(),
            line_count: state.lines().len(),
            winners: state
                .leaders()
                .into_iter()
                .map(|player| player.name().to_string())
                .collect(),
        }
    }
}

impl PlayerStanding {
    fn from_player(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            color: player.color(),
            score: player.score(),
        }
    }
}
