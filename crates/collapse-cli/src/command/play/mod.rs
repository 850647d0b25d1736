use std::path::PathBuf;

use crate::{command::play::app::PlayApp, store::DataStore};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub struct PlayArg {
    /// Directory holding the autosave, profile, and ranking files
    #[clap(long, default_value = "./data")]
    data_dir: PathBuf,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

pub fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { data_dir } = arg;

    let store = DataStore::new(data_dir.clone());
    let mut app = PlayApp::load(store)?;

    ratatui::run(|terminal| app.run(terminal))?;

    Ok(())
}
