use anyhow::ensure;
use chrono::Utc;
use collapse_engine::validate_score;
use serde::{Deserialize, Serialize};

use crate::{schema::profile::Profile, schema::record::ScoreRecord, util};

/// Which slice of the stored records a ranking covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Games finished on the current UTC day.
    Daily,
    AllTime,
}

const RANKING_SIZE: usize = 10;

/// Append-only score table with validation at the submission boundary.
///
/// Every record keeps its seed and move log, so a submission is accepted
/// only if the claimed score replays from them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Validates and stores one finished game.
    ///
    /// # Errors
    ///
    /// Fails if replaying the move log against the seed does not reproduce
    /// the claimed score.
    pub fn submit(
        &mut self,
        profile: &Profile,
        score: u64,
        seed: u64,
        moves: &str,
    ) -> anyhow::Result<()> {
        ensure!(
            validate_score(seed, moves, score),
            "claimed score {score} does not replay from its move log"
        );
        self.records.push(ScoreRecord {
            user_id: profile.user_id.clone(),
            display_name: profile.display_name.clone(),
            score,
            seed,
            moves: moves.into(),
            date: util::today_utc_string(),
            submitted_at: Utc::now(),
        });
        Ok(())
    }

    /// Top ranking for the scope: one row per display name (their best
    /// score), highest first, at most ten rows.
    pub fn top(&self, scope: Scope) -> Vec<&ScoreRecord> {
        let today = util::today_utc_string();
        let mut best: Vec<&ScoreRecord> = Vec::new();
        for record in &self.records {
            if scope == Scope::Daily && record.date != today {
                continue;
            }
            match best
                .iter_mut()
                .find(|kept| kept.display_name == record.display_name)
            {
                Some(kept) => {
                    if record.score > kept.score {
                        *kept = record;
                    }
                }
                None => best.push(record),
            }
        }
        best.sort_by(|a, b| b.score.cmp(&a.score));
        best.truncate(RANKING_SIZE);
        best
    }

    /// Rewrites the display name on every record owned by `user_id`.
    /// Returns how many records changed.
    pub fn rename_user(&mut self, user_id: &str, new_name: &str) -> usize {
        let mut renamed = 0;
        for record in &mut self.records {
            if record.user_id == user_id && record.display_name != new_name {
                record.display_name = new_name.to_string();
                renamed += 1;
            }
        }
        renamed
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN_MOVES: &str = "ckpwpkrrhcvvaesaugfmqhrqvdwvsbbcarqlxvrqiixhrsrwvum";

    fn profile(name: &str) -> Profile {
        Profile {
            user_id: format!("id-{name}"),
            display_name: name.to_string(),
        }
    }

    fn record(name: &str, score: u64, date: &str) -> ScoreRecord {
        ScoreRecord {
            user_id: format!("id-{name}"),
            display_name: name.to_string(),
            score,
            seed: 0,
            moves: "".into(),
            date: date.to_string(),
            submitted_at: Utc::now(),
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn accepts_a_score_that_replays() {
            let mut board = Leaderboard::default();
            board
                .submit(&profile("ada"), 400, 0, GOLDEN_MOVES)
                .unwrap();
            assert_eq!(board.top(Scope::AllTime).len(), 1);
            assert_eq!(board.top(Scope::AllTime)[0].score, 400);
        }

        #[test]
        fn rejects_an_inflated_score() {
            let mut board = Leaderboard::default();
            let result = board.submit(&profile("ada"), 9999, 0, GOLDEN_MOVES);
            assert!(result.is_err());
            assert!(board.is_empty());
        }

        #[test]
        fn stamps_the_submission_with_todays_date() {
            let mut board = Leaderboard::default();
            board.submit(&profile("ada"), 0, 7, "").unwrap();
            assert_eq!(board.top(Scope::Daily).len(), 1);
        }
    }

    mod top {
        use super::*;

        #[test]
        fn keeps_one_row_per_display_name() {
            let mut board = Leaderboard::default();
            board.records.push(record("ada", 100, "2026-8-30"));
            board.records.push(record("ada", 250, "2026-8-29"));
            board.records.push(record("bo", 200, "2026-8-30"));

            let top = board.top(Scope::AllTime);
            let rows: Vec<_> = top
                .iter()
                .map(|r| (r.display_name.as_str(), r.score))
                .collect();
            assert_eq!(rows, [("ada", 250), ("bo", 200)]);
        }

        #[test]
        fn daily_scope_ignores_other_days() {
            let mut board = Leaderboard::default();
            let today = util::today_utc_string();
            board.records.push(record("ada", 250, "2020-1-1"));
            board.records.push(record("bo", 100, &today));

            let top = board.top(Scope::Daily);
            assert_eq!(top.len(), 1);
            assert_eq!(top[0].display_name, "bo");
        }

        #[test]
        fn caps_the_ranking_at_ten_rows() {
            let mut board = Leaderboard::default();
            for i in 0..15 {
                board
                    .records
                    .push(record(&format!("p{i}"), i, "2026-8-30"));
            }
            let top = board.top(Scope::AllTime);
            assert_eq!(top.len(), 10);
            assert_eq!(top[0].score, 14);
            assert_eq!(top[9].score, 5);
        }
    }

    mod rename_user {
        use super::*;

        #[test]
        fn rewrites_only_the_owners_records() {
            let mut board = Leaderboard::default();
            board.records.push(record("ada", 100, "2026-8-30"));
            board.records.push(record("ada", 200, "2026-8-30"));
            board.records.push(record("bo", 300, "2026-8-30"));

            assert_eq!(board.rename_user("id-ada", "grace"), 2);
            let top = board.top(Scope::AllTime);
            let names: Vec<_> = top.iter().map(|r| r.display_name.as_str()).collect();
            assert_eq!(names, ["bo", "grace"]);
        }
    }
}
