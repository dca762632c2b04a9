use clap::{Parser, Subcommand};

use self::{fill::FillArg, play::PlayArg};

mod fill;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play an interactive game in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Fill the whole board without the guess gate and print the standings
    Fill(#[clap(flatten)] FillArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Fill(arg) => fill::run(&arg)?,
    }
    Ok(())
}
