use serde::{Deserialize, Serialize};

/// Fixed symbol alphabet for the move-log wire format.
///
/// Each accepted move is one character; symbol index `row * width + col`
/// identifies the clicked cell. This mapping is the only persisted artifact
/// that must stay bit-compatible across versions, since leaderboard
/// validation replays stored move strings.
pub const MOVE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Encodes a clicked cell as a move symbol.
///
/// Returns `None` if the cell index does not fit the alphabet; grids are
/// size-checked at construction so this cannot happen for cells of a live
/// grid.
#[must_use]
pub fn encode_move(col: usize, row: usize, width: usize) -> Option<char> {
    MOVE_ALPHABET.chars().nth(row * width + col)
}

/// Decodes a move symbol back into `(col, row)` for a grid of `width`.
///
/// Unknown symbols decode to `None`. The decoded row may lie outside the
/// grid (the alphabet has 26 symbols, a 5x5 grid only 25 cells); callers
/// rely on ordinary click bounds checks to discard those.
#[must_use]
pub fn decode_move(symbol: char, width: usize) -> Option<(usize, usize)> {
    let index = MOVE_ALPHABET.find(symbol)?;
    Some((index % width, index / width))
}

/// An ordered log of accepted moves, one symbol per move.
///
/// The move log plus the original seed fully determines the resulting grid
/// state; it is the sole replayable representation of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveLog(String);

impl MoveLog {
    #[must_use]
    pub const fn new() -> Self {
        Self(String::new())
    }

    pub fn push(&mut self, symbol: char) {
        self.0.push(symbol);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

impl std::fmt::Display for MoveLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MoveLog {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
