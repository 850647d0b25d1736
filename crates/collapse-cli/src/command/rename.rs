use std::path::PathBuf;

use anyhow::ensure;

use crate::store::DataStore;

#[derive(Debug, Clone, clap::Args)]
pub struct RenameArg {
    /// New display name
    name: String,
    /// Directory holding the autosave, profile, and ranking files
    #[clap(long, default_value = "./data")]
    data_dir: PathBuf,
}

pub fn run(arg: &RenameArg) -> anyhow::Result<()> {
    let RenameArg { name, data_dir } = arg;

    let name = name.trim();
    ensure!(!name.is_empty(), "the display name cannot be empty");

    let store = DataStore::new(data_dir.clone());
    let mut profile = store.ensure_profile()?;
    let old_name = std::mem::replace(&mut profile.display_name, name.to_string());
    store.save_profile(&profile)?;

    // Past submissions carry the display name, so rewrite them too.
    let mut leaderboard = store.load_leaderboard()?;
    let renamed = leaderboard.rename_user(&profile.user_id, name);
    if renamed > 0 {
        store.save_leaderboard(&leaderboard)?;
    }

    println!("Renamed {old_name} to {name} ({renamed} past scores updated)");
    Ok(())
}
