use std::path::PathBuf;

use anyhow::Context as _;
use chase_engine::{CELL_COUNT, GameSession, PlayerColor, PlayerConfig};

use crate::{summary::GameSummary, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FillArg {
    /// Number of players to rotate through
    #[clap(long, default_value_t = 2)]
    players: usize,
    /// Also write the standings as JSON to this path
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &FillArg) -> anyhow::Result<()> {
    let FillArg { players, output } = arg;

    let configs: Vec<_> = (0..*players)
        .map(|seat| {
            PlayerConfig::new(
                format!("Player {}", seat + 1),
                PlayerColor::ALL[seat % PlayerColor::ALL.len()],
            )
        })
        .collect();

    let mut session = GameSession::new();
    session
        .start_game(&configs)
        .context("could not start the game")?;
    session.fill_remaining().context("bulk fill failed")?;

    let state = session
        .match_state()
        .context("finished session has no match state")?;
    println!(
        "Filled all {CELL_COUNT} cells; {} lines scored.",
        state.lines().len()
    );
    for player in state.players() {
        println!("  {:<14} {:>3} pts", player.name(), player.score());
    }
    let winners: Vec<_> = state
        .leaders()
        .into_iter()
        .map(|player| player.name().to_string())
        .collect();
    println!("Winner: {}", winners.join(", "));

    if let Some(path) = output {
        let summary = GameSummary::from_match(state);
        util::save_json_file(&summary, path)?;
        println!("Saved standings to {}", path.display());
    }

    Ok(())
}
