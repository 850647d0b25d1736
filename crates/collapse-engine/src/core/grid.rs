use arrayvec::ArrayVec;

use crate::{
    GridSizeError,
    core::{
        generator::ValueGenerator,
        move_code::{self, MOVE_ALPHABET, MoveLog},
        shape::Shape,
    },
};

/// Canonical board dimensions.
pub const DEFAULT_WIDTH: usize = 5;
/// Canonical board dimensions.
pub const DEFAULT_HEIGHT: usize = 5;

/// The value at which a tile stops merging and carries its completed shape.
/// Values `1..TERMINAL_VALUE` are mergeable.
pub const TERMINAL_VALUE: u8 = 6;

/// Tile values are generated in `[1, max_gen]`; `max_gen` starts here and
/// steps to 4 the first time a merge produces a value-4 tile.
const STARTING_MAX_GEN: u8 = 3;

/// A single numbered tile.
///
/// Owned exclusively by the grid; cleared tiles are filtered out during
/// refill and replaced, never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    value: u8,
    shape: Option<Shape>,
    show_shape: bool,
}

impl Tile {
    const fn new(value: u8) -> Self {
        Self {
            value,
            shape: None,
            show_shape: false,
        }
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Whether this tile has reached the terminal value and no longer
    /// participates in chains.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.value >= TERMINAL_VALUE
    }

    /// The polyomino that produced this tile, present once it reaches the
    /// terminal value.
    #[must_use]
    pub const fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Display-only flag toggled by clicking a terminal tile.
    #[must_use]
    pub const fn shows_shape(&self) -> bool {
        self.show_shape
    }
}

/// What a click did to the grid.
///
/// Only [`Merged`](ClickOutcome::Merged) changes game state; everything else
/// is a silent no-op, since clicking is a normal exploratory action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The cell lies outside the grid.
    OutOfBounds,
    /// The tile is terminal; its display flag was toggled instead.
    ShapeToggled,
    /// The tile's equal-value chain has size 1, so no merge is legal.
    NoChain,
    /// A chain was merged into the clicked tile.
    Merged {
        score_gain: u64,
        /// Present when the merge reached the terminal value.
        completed_shape: Option<Shape>,
    },
}

impl ClickOutcome {
    /// The score gained by this click; zero signals that no move occurred.
    #[must_use]
    pub const fn score_gain(&self) -> u64 {
        match self {
            ClickOutcome::Merged { score_gain, .. } => *score_gain,
            _ => 0,
        }
    }
}

/// The w×h tile board with its deterministic generator and move log.
///
/// Columns hold exactly `height` tiles after every completed operation;
/// index 0 is the bottom of the column, and refill appends new tiles on
/// top. All mutation goes through [`resolve_click`](Self::resolve_click),
/// which appends one symbol to the move log per accepted move, so the final
/// state is always a pure function of `(seed, moves)`.
///
/// # Example
///
/// ```
/// use collapse_engine::Grid;
///
/// let mut grid = Grid::new(5, 5, 0).unwrap();
/// let outcome = grid.resolve_click(0, 2);
/// assert_eq!(outcome.score_gain(), 6);
/// assert_eq!(grid.score(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    columns: Vec<Vec<Tile>>,
    generator: ValueGenerator,
    seed: u64,
    score: u64,
    max_gen: u8,
    moves: MoveLog,
    shapes: Vec<Shape>,
    score_splits: Vec<u64>,
    game_over: bool,
}

impl Grid {
    /// Creates a grid and performs the initial refill.
    ///
    /// Construction never regenerates an unplayable layout: the board must
    /// stay a pure function of the seed for replay validation, so a
    /// dead-on-arrival board is simply already game over.
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self, GridSizeError> {
        Self::with_moves(width, height, seed, "")
    }

    /// Creates a grid and replays a move log against it.
    ///
    /// Symbols outside the alphabet and cells outside the grid are silent
    /// no-ops; a malformed log simply produces a different terminal score,
    /// which is how score validation detects tampering.
    pub fn with_moves(
        width: usize,
        height: usize,
        seed: u64,
        moves: &str,
    ) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 || width * height > MOVE_ALPHABET.len() {
            return Err(GridSizeError { width, height });
        }
        let mut grid = Self {
            width,
            height,
            columns: vec![Vec::with_capacity(height); width],
            generator: ValueGenerator::new(seed),
            seed,
            score: 0,
            max_gen: STARTING_MAX_GEN,
            moves: MoveLog::new(),
            shapes: Vec::new(),
            score_splits: Vec::new(),
            game_over: false,
        };
        grid.refill();
        for symbol in moves.chars() {
            if let Some((col, row)) = move_code::decode_move(symbol, width) {
                let _ = grid.resolve_click(col, row);
            }
        }
        grid.game_over = !grid.has_legal_move();
        Ok(grid)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// The log of accepted moves so far.
    #[must_use]
    pub const fn moves(&self) -> &MoveLog {
        &self.moves
    }

    /// Completed shapes, in creation order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Score checkpoints recorded at each shape completion.
    #[must_use]
    pub fn score_splits(&self) -> &[u64] {
        &self.score_splits
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The tile at `(col, row)`, row 0 at the bottom of the column.
    #[must_use]
    pub fn tile(&self, col: usize, row: usize) -> Option<&Tile> {
        self.columns.get(col)?.get(row)
    }

    /// Resolves a click on `(col, row)`.
    ///
    /// A merge requires a connected chain of at least 2 equal tiles; the
    /// clicked tile takes `value + 1`, the rest are cleared and refilled,
    /// and the score grows by `value * chain_size`. Terminal tiles toggle
    /// their display flag instead.
    pub fn resolve_click(&mut self, col: usize, row: usize) -> ClickOutcome {
        if col >= self.width || row >= self.height {
            return ClickOutcome::OutOfBounds;
        }
        let value = self.columns[col][row].value;
        if value >= TERMINAL_VALUE {
            let tile = &mut self.columns[col][row];
            tile.show_shape = !tile.show_shape;
            return ClickOutcome::ShapeToggled;
        }

        let chain = self.chain_cells(col, row);
        if chain.len() < 2 {
            return ClickOutcome::NoChain;
        }

        let symbol = move_code::encode_move(col, row, self.width)
            .expect("cell index fits the move alphabet");
        self.moves.push(symbol);

        let chain_size = u64::try_from(chain.len()).expect("chain size is bounded by the cell count");
        let score_gain = u64::from(value) * chain_size;
        self.score += score_gain;

        for &(chain_col, chain_row) in &chain {
            self.columns[chain_col][chain_row].value = 0;
        }
        let merged = value + 1;
        self.columns[col][row] = Tile::new(merged);
        if merged == 4 {
            self.max_gen = 4;
        }

        let completed_shape = (merged == TERMINAL_VALUE).then(|| {
            // Capture the chain relative to the clicked cell, y growing
            // downward on screen (rows count up from the bottom).
            let coord = |value: usize| i32::try_from(value).expect("cell indices fit the move alphabet");
            let shape = Shape::new(
                chain
                    .iter()
                    .map(|&(chain_col, chain_row)| {
                        (
                            coord(chain_col) - coord(col),
                            coord(row) - coord(chain_row),
                        )
                    })
                    .collect(),
            );
            self.shapes.push(shape.clone());
            self.score_splits.push(self.score);
            let tile = &mut self.columns[col][row];
            tile.shape = Some(shape.clone());
            tile.show_shape = true;
            shape
        });

        self.refill();
        self.game_over = !self.has_legal_move();

        ClickOutcome::Merged {
            score_gain,
            completed_shape,
        }
    }

    /// Returns false iff no click anywhere would produce a score. This is
    /// the authoritative terminal test.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        (0..self.width).any(|col| {
            (0..self.height).any(|row| {
                !self.columns[col][row].is_terminal() && self.chain_cells(col, row).len() > 1
            })
        })
    }

    /// Drops out cleared tiles and tops every column back up to `height`
    /// with freshly generated values, preserving survivor order.
    fn refill(&mut self) {
        for column in &mut self.columns {
            column.retain(|tile| tile.value != 0);
            while column.len() < self.height {
                column.push(Tile::new(self.generator.next_value(self.max_gen)));
            }
        }
    }

    /// The maximal connected chain of orthogonal neighbors sharing the
    /// value at `(col, row)`, found by iterative depth-first search.
    fn chain_cells(&self, col: usize, row: usize) -> Vec<(usize, usize)> {
        let target = self.columns[col][row].value;
        let mut visited = vec![false; self.width * self.height];
        visited[col * self.height + row] = true;
        let mut stack = vec![(col, row)];
        let mut cells = vec![(col, row)];
        while let Some((current_col, current_row)) = stack.pop() {
            for (next_col, next_row) in self.neighbors(current_col, current_row) {
                let index = next_col * self.height + next_row;
                if !visited[index] && self.columns[next_col][next_row].value == target {
                    visited[index] = true;
                    stack.push((next_col, next_row));
                    cells.push((next_col, next_row));
                }
            }
        }
        cells
    }

    fn neighbors(&self, col: usize, row: usize) -> ArrayVec<(usize, usize), 4> {
        let mut neighbors = ArrayVec::new();
        if col > 0 {
            neighbors.push((col - 1, row));
        }
        if col + 1 < self.width {
            neighbors.push((col + 1, row));
        }
        if row > 0 {
            neighbors.push((col, row - 1));
        }
        if row + 1 < self.height {
            neighbors.push((col, row + 1));
        }
        neighbors
    }
}
