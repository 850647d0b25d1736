//! Game orchestration on top of the core board.
//!
//! The core modules know nothing beyond one grid; this layer adds the parts
//! a running game needs:
//!
//! - [`GameEvent`] - tagged grid events consumed by the achievement evaluator
//! - [`Achievement`] / [`AchievementLog`] - the catalog and its persisted
//!   unlock state
//! - [`GameSession`] - one live game: grid, unlock log, daily-split deltas
//! - [`replay`] / [`validate_score`] - deterministic reconstruction from a
//!   `(seed, moves)` pair
//!
//! The engine performs no I/O. Persistence and leaderboard traffic belong to
//! external collaborators; a session only reports what happened and the
//! caller decides what to store or submit.

pub use self::{achievements::*, event::*, replay::*, session::*};

mod achievements;
mod event;
mod replay;
mod session;
