use crate::{
    core::grid::{ClickOutcome, DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid},
    core::shape::Shape,
    engine::{
        achievements::{AchievementLog, GameProgress, check_event},
        event::GameEvent,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Active,
    Over,
}

/// Everything one click changed, for the caller to display and persist.
#[derive(Debug, Clone)]
pub struct ClickReport {
    /// Zero when the click was a no-op.
    pub score_gain: u64,
    /// The polyomino completed by this move, if it reached the terminal
    /// value.
    pub completed_shape: Option<Shape>,
    /// Whether this move ended the game.
    pub game_over: bool,
    /// Achievement ids newly unlocked by this move.
    pub unlocked: Vec<&'static str>,
}

/// One live game: the grid plus the cross-game state that reacts to it.
///
/// The session is the explicit context object for a running game - it owns
/// the grid, the achievement unlock log, and the daily-best splits it
/// compares against. It performs no I/O; [`click`](Self::click) reports
/// what happened and the caller persists or submits as it sees fit.
///
/// Replay (via [`resume`](Self::resume)) rebuilds grid state without firing
/// achievement events: achievements react to live play only.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    achievements: AchievementLog,
    daily_splits: Vec<u64>,
    split_delta: Option<i64>,
}

impl GameSession {
    /// Starts a fresh canonical 5x5 game.
    #[must_use]
    pub fn new(seed: u64, achievements: AchievementLog, daily_splits: Vec<u64>) -> Self {
        Self::resume(seed, "", achievements, daily_splits)
    }

    /// Restores a game by replaying its move log against its seed.
    #[must_use]
    pub fn resume(
        seed: u64,
        moves: &str,
        achievements: AchievementLog,
        daily_splits: Vec<u64>,
    ) -> Self {
        let grid = Grid::with_moves(DEFAULT_WIDTH, DEFAULT_HEIGHT, seed, moves)
            .expect("canonical grid dimensions fit the move alphabet");
        Self {
            grid,
            achievements,
            daily_splits,
            split_delta: None,
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn achievements(&self) -> &AchievementLog {
        &self.achievements
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.grid.is_game_over() {
            SessionState::Over
        } else {
            SessionState::Active
        }
    }

    /// Current score minus the daily-best split at the same checkpoint.
    /// Present only between a shape completion and the next move.
    #[must_use]
    pub const fn split_delta(&self) -> Option<i64> {
        self.split_delta
    }

    /// Resolves a click and runs the achievement evaluator over whatever
    /// events it produced.
    pub fn click(&mut self, col: usize, row: usize) -> ClickReport {
        let outcome = self.grid.resolve_click(col, row);
        let ClickOutcome::Merged {
            score_gain,
            completed_shape,
        } = outcome
        else {
            return ClickReport {
                score_gain: 0,
                completed_shape: None,
                game_over: self.grid.is_game_over(),
                unlocked: Vec::new(),
            };
        };

        self.split_delta = None;
        let mut unlocked = self.evaluate(&GameEvent::MoveMade { score_gain });

        if completed_shape.is_some() {
            self.split_delta = self.current_split_delta();
            unlocked.extend(self.evaluate(&GameEvent::ShapeCreated));
        }

        let game_over = self.grid.is_game_over();
        if game_over {
            self.split_delta = None;
            unlocked.extend(self.evaluate(&GameEvent::GameOver {
                score: self.grid.score(),
            }));
        }

        ClickReport {
            score_gain,
            completed_shape,
            game_over,
            unlocked,
        }
    }

    fn evaluate(&mut self, event: &GameEvent) -> Vec<&'static str> {
        check_event(
            event,
            &GameProgress::from_grid(&self.grid),
            &mut self.achievements,
        )
    }

    /// Compares the split just recorded against the daily best, falling
    /// back to the daily run's final split once past its length.
    fn current_split_delta(&self) -> Option<i64> {
        let completed = self.grid.score_splits().len();
        let reference = self
            .daily_splits
            .get(completed.checked_sub(1)?)
            .or_else(|| self.daily_splits.last())?;
        let score = i64::try_from(self.grid.score()).unwrap_or(i64::MAX);
        let reference = i64::try_from(*reference).unwrap_or(i64::MAX);
        Some(score - reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::move_code;

    const GOLDEN_MOVES: &str = "ckpwpkrrhcvvaesaugfmqhrqvdwvsbbcarqlxvrqiixhrsrwvum";

    fn play_golden(daily_splits: Vec<u64>) -> (GameSession, Vec<(usize, Option<i64>)>) {
        let mut session = GameSession::new(0, AchievementLog::for_catalog(), daily_splits);
        let mut deltas = Vec::new();
        for (index, symbol) in GOLDEN_MOVES.chars().enumerate() {
            let (col, row) = move_code::decode_move(symbol, 5).unwrap();
            let report = session.click(col, row);
            assert!(report.score_gain > 0, "golden move {index} was rejected");
            if report.completed_shape.is_some() {
                deltas.push((index + 1, session.split_delta()));
            }
        }
        (session, deltas)
    }

    #[test]
    fn golden_game_plays_to_the_recorded_score() {
        let (session, _) = play_golden(Vec::new());
        assert_eq!(session.grid().score(), 400);
        assert_eq!(session.grid().shapes().len(), 4);
        assert!(session.state().is_over());
    }

    #[test]
    fn split_deltas_track_the_daily_best() {
        let (session, deltas) = play_golden(vec![100, 200, 300, 400]);
        assert_eq!(
            deltas,
            [
                (19, Some(78)),
                (24, Some(18)),
                (47, Some(70)),
                (50, Some(-3)),
            ]
        );
        // The last move ends the game, which clears the delta.
        assert_eq!(session.split_delta(), None);
    }

    #[test]
    fn split_delta_falls_back_to_the_final_daily_split() {
        // Two recorded daily splits; the third completion compares against
        // the last one.
        let (_, deltas) = play_golden(vec![100, 200]);
        assert_eq!(
            deltas,
            [
                (19, Some(78)),
                (24, Some(18)),
                (47, Some(170)),
                (50, Some(197)),
            ]
        );
    }

    #[test]
    fn no_daily_record_means_no_delta() {
        let (_, deltas) = play_golden(Vec::new());
        assert!(deltas.iter().all(|&(_, delta)| delta.is_none()));
    }

    #[test]
    fn split_delta_clears_on_the_next_move() {
        let mut session = GameSession::new(0, AchievementLog::for_catalog(), vec![100]);
        for symbol in GOLDEN_MOVES[..19].chars() {
            let (col, row) = move_code::decode_move(symbol, 5).unwrap();
            let _ = session.click(col, row);
        }
        assert_eq!(session.split_delta(), Some(78));
        let symbol = GOLDEN_MOVES.chars().nth(19).unwrap();
        let (col, row) = move_code::decode_move(symbol, 5).unwrap();
        let _ = session.click(col, row);
        assert_eq!(session.split_delta(), None);
    }

    #[test]
    fn rejected_clicks_report_zero_and_change_nothing() {
        let mut session = GameSession::new(0, AchievementLog::for_catalog(), Vec::new());
        // Seed 0 cell (2, 4) is a lone 1.
        let report = session.click(2, 4);
        assert_eq!(report.score_gain, 0);
        assert!(report.completed_shape.is_none());
        assert!(report.unlocked.is_empty());
        assert_eq!(session.grid().score(), 0);
        assert!(session.grid().moves().is_empty());
    }

    #[test]
    fn golden_game_unlocks_no_achievements() {
        // Score 400, shapes are an L tetromino and three dominoes: nothing
        // in the catalog qualifies.
        let (session, _) = play_golden(Vec::new());
        assert!(session.achievements().iter().all(|(_, record)| !record.unlocked));
    }

    #[test]
    fn resume_reconstructs_a_finished_game() {
        let session = GameSession::resume(
            0,
            GOLDEN_MOVES,
            AchievementLog::for_catalog(),
            Vec::new(),
        );
        assert_eq!(session.grid().score(), 400);
        assert!(session.state().is_over());
        // Replay fires no live events, so nothing unlocks retroactively.
        assert!(session.achievements().iter().all(|(_, record)| !record.unlocked));
    }

    #[test]
    fn resume_continues_an_unfinished_game() {
        let mut session = GameSession::resume(
            0,
            &GOLDEN_MOVES[..5],
            AchievementLog::for_catalog(),
            Vec::new(),
        );
        assert_eq!(session.grid().score(), 45);
        assert!(session.state().is_active());
        for symbol in GOLDEN_MOVES[5..].chars() {
            let (col, row) = move_code::decode_move(symbol, 5).unwrap();
            let _ = session.click(col, row);
        }
        assert_eq!(session.grid().score(), 400);
        assert!(session.state().is_over());
    }
}
