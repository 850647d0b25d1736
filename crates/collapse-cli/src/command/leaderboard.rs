use std::path::PathBuf;

use crate::{leaderboard::Scope, store::DataStore};

#[derive(Debug, Clone, clap::Args)]
pub struct LeaderboardArg {
    /// Directory holding the autosave, profile, and ranking files
    #[clap(long, default_value = "./data")]
    data_dir: PathBuf,
    /// Rank every stored game instead of only today's
    #[clap(long)]
    all_time: bool,
}

pub fn run(arg: &LeaderboardArg) -> anyhow::Result<()> {
    let LeaderboardArg { data_dir, all_time } = arg;

    let store = DataStore::new(data_dir.clone());
    let leaderboard = store.load_leaderboard()?;

    let scope = if *all_time {
        Scope::AllTime
    } else {
        Scope::Daily
    };
    match scope {
        Scope::Daily => println!("Today's ranking"),
        Scope::AllTime => println!("All-time ranking"),
    }

    if leaderboard.is_empty() {
        println!("  (no scores yet)");
        return Ok(());
    }
    let top = leaderboard.top(scope);
    if top.is_empty() {
        println!("  (no scores today - try --all-time)");
        return Ok(());
    }

    for (index, record) in top.iter().enumerate() {
        println!(
            "  {:>2}. {:<20} {:>6}  {}",
            index + 1,
            record.display_name,
            record.score,
            record.date
        );
    }

    Ok(())
}
