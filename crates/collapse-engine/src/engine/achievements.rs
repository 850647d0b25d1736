use std::{collections::BTreeMap, sync::LazyLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        grid::Grid,
        shape::{self, PENTOMINOES, Shape},
    },
    engine::event::GameEvent,
};

/// What a player must do to unlock an achievement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// A single accepted move gains exactly this score.
    SingleMoveScore(u64),
    /// Total score reaches this threshold by game over.
    TotalScore(u64),
    /// The move counter hits this value with at least one shape completed.
    ShapeOnMove(usize),
    /// Score reaches this threshold with zero shapes completed.
    ScoreWithoutShapes(u64),
    /// The completed-shape list covers every template, one to one.
    Shapes(Vec<Shape>),
}

/// One catalog entry. The catalog is constant data; unlock state lives in
/// the separately persisted [`AchievementLog`].
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: &'static str,
    pub description: &'static str,
    pub requirement: Requirement,
}

static CATALOG: LazyLock<Vec<Achievement>> = LazyLock::new(|| {
    let cross = || Shape::new(vec![(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
    let straight = || Shape::new(vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    let domino = || Shape::new(vec![(0, 0), (1, 0)]);
    vec![
        Achievement {
            id: "single_move_51",
            description: "Gain exactly 51 points with one move",
            requirement: Requirement::SingleMoveScore(51),
        },
        Achievement {
            id: "shape_on_move_6",
            description: "Create a shape tile on the 6th move",
            requirement: Requirement::ShapeOnMove(6),
        },
        Achievement {
            id: "score_1000_no_shapes",
            description: "Score 1000+ points without any shape tiles",
            requirement: Requirement::ScoreWithoutShapes(1000),
        },
        Achievement {
            id: "single_move_100",
            description: "Gain exactly 100 points with one move",
            requirement: Requirement::SingleMoveScore(100),
        },
        Achievement {
            id: "score_5000",
            description: "Score 5000+ points",
            requirement: Requirement::TotalScore(5000),
        },
        Achievement {
            id: "tetrominoes",
            description: "Tetrominoes",
            requirement: Requirement::Shapes(vec![
                Shape::new(vec![(0, 0), (1, 0), (2, 0), (3, 0)]),
                Shape::new(vec![(0, 0), (1, 0), (0, 1), (1, 1)]),
                Shape::new(vec![(1, 0), (0, 1), (1, 1), (2, 1)]),
                Shape::new(vec![(0, 0), (1, 0), (1, 1), (2, 1)]),
                Shape::new(vec![(0, 0), (0, 1), (1, 1), (2, 1)]),
            ]),
        },
        Achievement {
            id: "six_crosses",
            description: "Crosses",
            requirement: Requirement::Shapes(vec![cross(); 6]),
        },
        Achievement {
            id: "six_straights",
            description: "Straights",
            requirement: Requirement::Shapes(vec![straight(); 6]),
        },
        Achievement {
            id: "twelve_dominoes",
            description: "Dominoes",
            requirement: Requirement::Shapes(vec![domino(); 12]),
        },
        Achievement {
            id: "pentominoes",
            description: "Pentominoes",
            requirement: Requirement::Shapes(
                PENTOMINOES.iter().map(|(_, base)| base.clone()).collect(),
            ),
        },
    ]
});

/// The achievement catalog, in display order.
#[must_use]
pub fn catalog() -> &'static [Achievement] {
    &CATALOG
}

/// Unlock state of one achievement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRecord {
    pub unlocked: bool,
    pub unlocked_at: Option<DateTime<Utc>>,
}

/// Persisted unlock state, keyed by achievement id.
///
/// Seeded with all-false entries for the catalog on first run; loading an
/// older log merges in entries for any achievements added since.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementLog {
    records: BTreeMap<String, UnlockRecord>,
}

impl AchievementLog {
    /// A fresh log with one locked entry per catalog achievement.
    #[must_use]
    pub fn for_catalog() -> Self {
        let mut log = Self::default();
        log.merge_catalog();
        log
    }

    /// Adds locked entries for catalog achievements this log predates.
    pub fn merge_catalog(&mut self) {
        for achievement in catalog() {
            self.records
                .entry(achievement.id.to_owned())
                .or_default();
        }
    }

    #[must_use]
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.records.get(id).is_some_and(|record| record.unlocked)
    }

    #[must_use]
    pub fn record(&self, id: &str) -> Option<&UnlockRecord> {
        self.records.get(id)
    }

    /// Unlocks an achievement, timestamping the first unlock. Returns false
    /// if it was already unlocked (a no-op).
    pub fn unlock(&mut self, id: &str) -> bool {
        let record = self.records.entry(id.to_owned()).or_default();
        if record.unlocked {
            return false;
        }
        record.unlocked = true;
        record.unlocked_at = Some(Utc::now());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnlockRecord)> {
        self.records
            .iter()
            .map(|(id, record)| (id.as_str(), record))
    }
}

/// Grid facts the evaluator reads, detached from the grid so predicates are
/// trivially testable.
#[derive(Debug, Clone, Copy)]
pub struct GameProgress<'a> {
    pub score: u64,
    pub moves_made: usize,
    pub shapes: &'a [Shape],
}

impl<'a> GameProgress<'a> {
    #[must_use]
    pub fn from_grid(grid: &'a Grid) -> Self {
        Self {
            score: grid.score(),
            moves_made: grid.moves().len(),
            shapes: grid.shapes(),
        }
    }
}

/// Evaluates the catalog against one event and unlocks whatever newly
/// qualifies. Returns the ids unlocked by this event; re-qualifying an
/// already-unlocked achievement is a no-op.
pub fn check_event(
    event: &GameEvent,
    progress: &GameProgress<'_>,
    log: &mut AchievementLog,
) -> Vec<&'static str> {
    catalog()
        .iter()
        .filter(|achievement| satisfied(&achievement.requirement, event, progress))
        .filter(|achievement| log.unlock(achievement.id))
        .map(|achievement| achievement.id)
        .collect()
}

fn satisfied(requirement: &Requirement, event: &GameEvent, progress: &GameProgress<'_>) -> bool {
    match (requirement, event) {
        (Requirement::SingleMoveScore(target), GameEvent::MoveMade { score_gain }) => {
            score_gain == target
        }
        (Requirement::TotalScore(threshold), GameEvent::GameOver { score }) => score >= threshold,
        (Requirement::ShapeOnMove(move_number), _) => {
            progress.moves_made == *move_number && !progress.shapes.is_empty()
        }
        (Requirement::ScoreWithoutShapes(threshold), _) => {
            progress.score >= *threshold && progress.shapes.is_empty()
        }
        (
            Requirement::Shapes(required),
            GameEvent::ShapeCreated | GameEvent::GameOver { .. },
        ) => shape::match_all(progress.shapes, required),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_progress() -> GameProgress<'static> {
        GameProgress {
            score: 0,
            moves_made: 0,
            shapes: &[],
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids = std::collections::BTreeSet::new();
        for achievement in catalog() {
            assert!(ids.insert(achievement.id), "duplicate id {}", achievement.id);
        }
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn exact_single_move_scores_unlock() {
        let mut log = AchievementLog::for_catalog();
        let progress = no_progress();

        let unlocked = check_event(&GameEvent::MoveMade { score_gain: 51 }, &progress, &mut log);
        assert_eq!(unlocked, ["single_move_51"]);

        let unlocked = check_event(&GameEvent::MoveMade { score_gain: 100 }, &progress, &mut log);
        assert_eq!(unlocked, ["single_move_100"]);
    }

    #[test]
    fn near_miss_single_move_scores_do_not_unlock() {
        let mut log = AchievementLog::for_catalog();
        for gain in [50, 52, 99, 101, 151] {
            let unlocked =
                check_event(&GameEvent::MoveMade { score_gain: gain }, &no_progress(), &mut log);
            assert!(unlocked.is_empty(), "gain {gain} unlocked {unlocked:?}");
        }
    }

    #[test]
    fn unlocking_is_idempotent() {
        let mut log = AchievementLog::for_catalog();
        let event = GameEvent::MoveMade { score_gain: 51 };
        assert_eq!(check_event(&event, &no_progress(), &mut log).len(), 1);
        assert!(check_event(&event, &no_progress(), &mut log).is_empty());
        assert!(log.is_unlocked("single_move_51"));
        assert!(log.record("single_move_51").unwrap().unlocked_at.is_some());
    }

    #[test]
    fn previously_unlocked_achievements_are_not_reported_again() {
        let mut log = AchievementLog::for_catalog();
        assert!(log.unlock("single_move_51"));

        let event = GameEvent::MoveMade { score_gain: 51 };
        let unlocked = check_event(&event, &no_progress(), &mut log);
        assert!(unlocked.is_empty());
        assert!(log.is_unlocked("single_move_51"));
    }

    #[test]
    fn total_score_only_counts_at_game_over() {
        let mut log = AchievementLog::for_catalog();
        let shapes = [Shape::new(vec![(0, 0), (1, 0)])];
        let progress = GameProgress {
            score: 6000,
            moves_made: 700,
            shapes: &shapes,
        };
        let unlocked = check_event(&GameEvent::MoveMade { score_gain: 8 }, &progress, &mut log);
        assert!(!unlocked.contains(&"score_5000"));

        let unlocked = check_event(&GameEvent::GameOver { score: 6000 }, &progress, &mut log);
        assert!(unlocked.contains(&"score_5000"));
    }

    #[test]
    fn score_without_shapes_requires_an_empty_shape_list() {
        let mut log = AchievementLog::for_catalog();
        let progress = GameProgress {
            score: 1200,
            moves_made: 150,
            shapes: &[],
        };
        let unlocked = check_event(&GameEvent::MoveMade { score_gain: 8 }, &progress, &mut log);
        assert_eq!(unlocked, ["score_1000_no_shapes"]);

        let mut log = AchievementLog::for_catalog();
        let shapes = [Shape::new(vec![(0, 0), (1, 0)])];
        let progress = GameProgress {
            score: 1200,
            moves_made: 150,
            shapes: &shapes,
        };
        let unlocked = check_event(&GameEvent::MoveMade { score_gain: 8 }, &progress, &mut log);
        assert!(unlocked.is_empty());
    }

    #[test]
    fn shape_on_sixth_move_needs_both_conditions() {
        let mut log = AchievementLog::for_catalog();
        let shapes = [Shape::new(vec![(0, 0), (1, 0)])];
        let on_move_6 = GameProgress {
            score: 120,
            moves_made: 6,
            shapes: &shapes,
        };
        let unlocked = check_event(&GameEvent::ShapeCreated, &on_move_6, &mut log);
        assert_eq!(unlocked, ["shape_on_move_6"]);

        let mut log = AchievementLog::for_catalog();
        let on_move_7 = GameProgress {
            score: 120,
            moves_made: 7,
            shapes: &shapes,
        };
        assert!(check_event(&GameEvent::ShapeCreated, &on_move_7, &mut log).is_empty());
    }

    #[test]
    fn twelve_dominoes_unlocks_at_the_twelfth() {
        let mut log = AchievementLog::for_catalog();
        // Vertical dominoes; orientation must not matter.
        let eleven = vec![Shape::new(vec![(0, 0), (0, 1)]); 11];
        let progress = GameProgress {
            score: 500,
            moves_made: 60,
            shapes: &eleven,
        };
        assert!(check_event(&GameEvent::ShapeCreated, &progress, &mut log).is_empty());

        let twelve = vec![Shape::new(vec![(0, 0), (0, 1)]); 12];
        let progress = GameProgress {
            score: 520,
            moves_made: 65,
            shapes: &twelve,
        };
        let unlocked = check_event(&GameEvent::ShapeCreated, &progress, &mut log);
        assert_eq!(unlocked, ["twelve_dominoes"]);
    }

    #[test]
    fn tetrominoes_accept_any_orientation() {
        let mut log = AchievementLog::for_catalog();
        // I, O, T, S, L - each rotated or reflected from the catalog form.
        let created = vec![
            Shape::new(vec![(0, 0), (0, 1), (0, 2), (0, 3)]),
            Shape::new(vec![(0, 0), (1, 0), (0, 1), (1, 1)]),
            Shape::new(vec![(0, 0), (0, 1), (0, 2), (1, 1)]),
            Shape::new(vec![(1, 0), (2, 0), (0, 1), (1, 1)]),
            Shape::new(vec![(0, 0), (1, 0), (2, 0), (2, 1)]),
        ];
        let progress = GameProgress {
            score: 900,
            moves_made: 90,
            shapes: &created,
        };
        let unlocked = check_event(&GameEvent::ShapeCreated, &progress, &mut log);
        assert!(unlocked.contains(&"tetrominoes"));
    }

    #[test]
    fn merge_catalog_adds_missing_entries() {
        let mut log = AchievementLog::default();
        assert!(log.record("pentominoes").is_none());
        log.merge_catalog();
        assert!(log.record("pentominoes").is_some());
        assert!(!log.is_unlocked("pentominoes"));
    }

    #[test]
    fn log_round_trips_through_serde() {
        let mut log = AchievementLog::for_catalog();
        log.unlock("six_crosses");
        let json = serde_json::to_string(&log).unwrap();
        let back: AchievementLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
        assert!(back.is_unlocked("six_crosses"));
    }
}
