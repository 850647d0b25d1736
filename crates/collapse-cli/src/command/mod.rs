use clap::{Parser, Subcommand};

use self::{
    achievements::AchievementsArg, leaderboard::LeaderboardArg, play::PlayArg, rename::RenameArg,
    replay::ReplayArg, validate::ValidateArg,
};

mod achievements;
mod leaderboard;
mod play;
mod rename;
mod replay;
mod validate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play interactively in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Replay a recorded game and print its outcome
    Replay(#[clap(flatten)] ReplayArg),
    /// Check a claimed score against its seed and move log
    Validate(#[clap(flatten)] ValidateArg),
    /// Show the achievement catalog and unlock state
    Achievements(#[clap(flatten)] AchievementsArg),
    /// Show the score rankings
    Leaderboard(#[clap(flatten)] LeaderboardArg),
    /// Change the display name on the local profile
    Rename(#[clap(flatten)] RenameArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Replay(arg) => replay::run(&arg)?,
        Mode::Validate(arg) => validate::run(&arg)?,
        Mode::Achievements(arg) => achievements::run(&arg)?,
        Mode::Leaderboard(arg) => leaderboard::run(&arg)?,
        Mode::Rename(arg) => rename::run(&arg)?,
    }
    Ok(())
}
