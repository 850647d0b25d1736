use crate::core::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid};

/// Reconstructs the canonical 5x5 game a `(seed, moves)` pair describes.
///
/// Replay is the sole trusted representation of a game: the returned grid's
/// score and contents are byte-for-byte reproducible from the inputs alone,
/// so a leaderboard (or any auditor) never has to trust a claimed score.
#[must_use]
pub fn replay(seed: u64, moves: &str) -> Grid {
    Grid::with_moves(DEFAULT_WIDTH, DEFAULT_HEIGHT, seed, moves)
        .expect("canonical grid dimensions fit the move alphabet")
}

/// Checks a claimed score by replaying its game.
///
/// Truncated, extended, or otherwise altered move logs simply replay to a
/// different score; there is nothing to bypass.
#[must_use]
pub fn validate_score(seed: u64, moves: &str, score: u64) -> bool {
    replay(seed, moves).score() == score
}
