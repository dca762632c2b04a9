use std::{fs, path::PathBuf};

use anyhow::Context as _;

use crate::{command::play::app::PlayApp, tui, util};

mod app;
mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Save a JSON summary of the final standings when the game ends
    #[clap(long)]
    save_summary: bool,
    /// Directory to save summary files
    #[clap(long, default_value = "./data/summaries/")]
    summary_dir: PathBuf,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        save_summary,
        summary_dir,
    } = arg;

    let mut app = PlayApp::new();
    tui::run(&mut app)?;

    if *save_summary && let Some(summary) = app.into_summary() {
        fs::create_dir_all(summary_dir)
            .with_context(|| format!("failed to create {}", summary_dir.display()))?;
        let path = util::summary_path(summary_dir);
        util::save_json_file(&summary, &path)?;
        println!("Saved game summary to {}", path.display());
    }

    Ok(())
}
