use std::path::PathBuf;

use anyhow::Context;
use collapse_engine::AchievementLog;

use crate::{
    leaderboard::Leaderboard,
    schema::{
        profile::Profile,
        record::{DailyRecord, SavedGame},
    },
    util,
};

/// On-disk persistence for everything the game keeps between launches.
///
/// Each concern lives in its own JSON file under the data directory so a
/// corrupt or missing file only loses that one concern.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    const AUTOSAVE: &'static str = "autosave";
    const ACHIEVEMENTS: &'static str = "achievements";
    const DAILY_RECORD: &'static str = "daily_record";
    const LEADERBOARD: &'static str = "leaderboard";
    const PROFILE: &'static str = "profile";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn load<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        util::read_json_file(key, path).map(Some)
    }

    fn save<T>(&self, key: &str, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        util::write_json_file(key, self.path(key), value)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let path = self.path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {} file: {}", key, path.display()))?;
        }
        Ok(())
    }

    pub fn load_autosave(&self) -> anyhow::Result<Option<SavedGame>> {
        self.load(Self::AUTOSAVE)
    }

    pub fn save_autosave(&self, saved: &SavedGame) -> anyhow::Result<()> {
        self.save(Self::AUTOSAVE, saved)
    }

    pub fn clear_autosave(&self) -> anyhow::Result<()> {
        self.remove(Self::AUTOSAVE)
    }

    /// Loads the unlock log, folding in any catalog entries added since
    /// the file was written.
    pub fn load_achievements(&self) -> anyhow::Result<AchievementLog> {
        let mut log: AchievementLog = self
            .load(Self::ACHIEVEMENTS)?
            .unwrap_or_else(AchievementLog::for_catalog);
        log.merge_catalog();
        Ok(log)
    }

    pub fn save_achievements(&self, log: &AchievementLog) -> anyhow::Result<()> {
        self.save(Self::ACHIEVEMENTS, log)
    }

    /// Loads the daily record, discarding it if it belongs to an earlier
    /// UTC day.
    pub fn load_daily_record(&self) -> anyhow::Result<Option<DailyRecord>> {
        let record: Option<DailyRecord> = self.load(Self::DAILY_RECORD)?;
        Ok(record.filter(|record| record.date == util::today_utc_string()))
    }

    pub fn save_daily_record(&self, record: &DailyRecord) -> anyhow::Result<()> {
        self.save(Self::DAILY_RECORD, record)
    }

    pub fn load_leaderboard(&self) -> anyhow::Result<Leaderboard> {
        Ok(self.load(Self::LEADERBOARD)?.unwrap_or_default())
    }

    pub fn save_leaderboard(&self, leaderboard: &Leaderboard) -> anyhow::Result<()> {
        self.save(Self::LEADERBOARD, leaderboard)
    }

    /// Loads the local profile, creating and persisting one on first use.
    pub fn ensure_profile(&self) -> anyhow::Result<Profile> {
        if let Some(profile) = self.load(Self::PROFILE)? {
            return Ok(profile);
        }
        let profile = Profile::generate();
        self.save(Self::PROFILE, &profile)?;
        Ok(profile)
    }

    pub fn save_profile(&self, profile: &Profile) -> anyhow::Result<()> {
        self.save(Self::PROFILE, profile)
    }
}
