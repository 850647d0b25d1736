/// A grid event fed to the achievement evaluator.
///
/// One variant per occurrence the catalog can react to. Events carry only
/// what the grid snapshot cannot answer (the per-move gain, the final
/// score); everything else is read from the grid at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A click was accepted and scored.
    MoveMade { score_gain: u64 },
    /// A merge reached the terminal value and recorded a shape.
    ShapeCreated,
    /// The grid ran out of legal moves.
    GameOver { score: u64 },
}
