use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// The 8 symmetries of the square: 4 rotations and their reflections.
const TRANSFORMS: [fn((i32, i32)) -> (i32, i32); 8] = [
    |(x, y)| (x, y),   // identity
    |(x, y)| (-y, x),  // rotate 90
    |(x, y)| (-x, -y), // rotate 180
    |(x, y)| (y, -x),  // rotate 270
    |(x, y)| (-x, y),  // flip horizontal
    |(x, y)| (y, x),   // flip diagonal
    |(x, y)| (x, -y),  // flip vertical
    |(x, y)| (-y, -x), // flip anti-diagonal
];

/// A polyomino: an unordered set of cell coordinates.
///
/// Shapes are captured when a merge reaches the terminal tile value, with
/// coordinates relative to the clicked cell (`x` rightward, `y` downward on
/// screen). Comparison is up to translation and the 8 symmetries of the
/// square, so the capture origin and orientation never matter.
///
/// # Example
///
/// ```
/// use collapse_engine::Shape;
///
/// let domino = Shape::new(vec![(0, 0), (1, 0)]);
/// let upright = Shape::new(vec![(4, 2), (4, 3)]);
/// assert!(domino.matches(&upright));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(Vec<(i32, i32)>);

impl Shape {
    /// Creates a shape from cell coordinates. Cells are kept sorted so that
    /// equal captures compare and serialize identically.
    #[must_use]
    pub fn new(mut cells: Vec<(i32, i32)>) -> Self {
        cells.sort_unstable();
        Self(cells)
    }

    #[must_use]
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical form: translated so the bounding-box origin is `(0, 0)`
    /// and sorted lexicographically. Invariant under translation only; use
    /// [`matches`](Self::matches) for symmetry-aware comparison.
    #[must_use]
    pub fn canonical(&self) -> Vec<(i32, i32)> {
        canonicalize(self.0.iter().copied())
    }

    /// Canonical forms of all 8 orientations of this shape.
    fn orientations(&self) -> [Vec<(i32, i32)>; 8] {
        TRANSFORMS.map(|transform| canonicalize(self.0.iter().map(|&cell| transform(cell))))
    }

    /// Tests congruence under the square's symmetry group, reflections
    /// included.
    #[must_use]
    pub fn matches(&self, other: &Shape) -> bool {
        let canonical = self.canonical();
        other
            .orientations()
            .iter()
            .any(|orientation| *orientation == canonical)
    }

    /// Renders the shape as text art, one `#` per cell, top row first.
    #[must_use]
    pub fn ascii_art(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let cells = self.canonical();
        let width = cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        let mut rows = vec![vec![' '; usize::try_from(width).unwrap()]; usize::try_from(height).unwrap()];
        for (x, y) in cells {
            rows[usize::try_from(y).unwrap()][usize::try_from(x).unwrap()] = '#';
        }
        rows.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn canonicalize(cells: impl Iterator<Item = (i32, i32)>) -> Vec<(i32, i32)> {
    let mut cells: Vec<_> = cells.collect();
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
    for (x, y) in &mut cells {
        *x -= min_x;
        *y -= min_y;
    }
    cells.sort_unstable();
    cells
}

/// Greedy one-to-one matching of created shapes against required templates.
///
/// Each created shape consumes the first not-yet-consumed template it
/// matches; succeeds iff every template gets consumed. Which pairing is
/// consumed depends on iteration order, but for an exact multiset cover the
/// overall outcome does not.
#[must_use]
pub fn match_all(created: &[Shape], required: &[Shape]) -> bool {
    let mut remaining: Vec<&Shape> = required.iter().collect();
    for shape in created {
        if let Some(index) = remaining.iter().position(|template| shape.matches(template)) {
            remaining.swap_remove(index);
        }
        if remaining.is_empty() {
            return true;
        }
    }
    remaining.is_empty()
}

/// The 12 pentominoes, one base orientation each.
pub static PENTOMINOES: LazyLock<Vec<(char, Shape)>> = LazyLock::new(|| {
    vec![
        ('F', Shape::new(vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])),
        ('I', Shape::new(vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)])),
        ('L', Shape::new(vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)])),
        ('N', Shape::new(vec![(1, 0), (0, 0), (1, 1), (2, 1), (3, 1)])),
        ('P', Shape::new(vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)])),
        ('T', Shape::new(vec![(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)])),
        ('U', Shape::new(vec![(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)])),
        ('V', Shape::new(vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)])),
        ('W', Shape::new(vec![(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)])),
        ('X', Shape::new(vec![(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)])),
        ('Y', Shape::new(vec![(1, 0), (0, 1), (1, 1), (2, 1), (3, 1)])),
        ('Z', Shape::new(vec![(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)])),
    ]
});

/// Names the pentomino a 5-cell shape is congruent to, if any.
#[must_use]
pub fn identify_pentomino(shape: &Shape) -> Option<char> {
    if shape.len() != 5 {
        return None;
    }
    PENTOMINOES
        .iter()
        .find(|(_, base)| shape.matches(base))
        .map(|&(letter, _)| letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_pentomino() -> Shape {
        Shape::new(vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)])
    }

    fn i_pentomino() -> Shape {
        Shape::new(vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)])
    }

    #[test]
    fn shape_matches_itself_under_all_8_symmetries() {
        let shape = l_pentomino();
        for transform in TRANSFORMS {
            let transformed = Shape::new(shape.cells().iter().map(|&cell| transform(cell)).collect());
            assert!(shape.matches(&transformed));
            assert!(transformed.matches(&shape));
        }
    }

    #[test]
    fn translation_is_immaterial() {
        let shape = l_pentomino();
        let shifted = Shape::new(shape.cells().iter().map(|&(x, y)| (x - 7, y + 3)).collect());
        assert!(shape.matches(&shifted));
        assert_eq!(shape.canonical(), shifted.canonical());
    }

    #[test]
    fn different_pentominoes_do_not_match() {
        assert!(!i_pentomino().matches(&l_pentomino()));
        assert!(!l_pentomino().matches(&i_pentomino()));
    }

    #[test]
    fn different_sizes_do_not_match() {
        let domino = Shape::new(vec![(0, 0), (1, 0)]);
        let triomino = Shape::new(vec![(0, 0), (1, 0), (2, 0)]);
        assert!(!domino.matches(&triomino));
    }

    #[test]
    fn flipped_y_capture_convention_is_immaterial() {
        // Two engine variants captured coordinates with opposite y signs;
        // canonicalization absorbs the difference.
        let shape = Shape::new(vec![(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
        let flipped = Shape::new(shape.cells().iter().map(|&(x, y)| (x, -y)).collect());
        assert!(shape.matches(&flipped));
    }

    mod match_all {
        use super::*;

        #[test]
        fn succeeds_when_every_template_is_covered() {
            let created = vec![i_pentomino(), l_pentomino()];
            let required = vec![l_pentomino(), i_pentomino()];
            assert!(match_all(&created, &required));
        }

        #[test]
        fn fails_when_a_template_is_missing() {
            let created = vec![i_pentomino(), i_pentomino()];
            let required = vec![l_pentomino(), i_pentomino()];
            assert!(!match_all(&created, &required));
        }

        #[test]
        fn duplicate_templates_need_duplicate_creations() {
            let required = vec![i_pentomino(), i_pentomino()];
            assert!(!match_all(&[i_pentomino()], &required));
            assert!(match_all(&[i_pentomino(), i_pentomino()], &required));
        }

        #[test]
        fn extra_created_shapes_are_ignored() {
            let created = vec![
                Shape::new(vec![(0, 0), (1, 0)]),
                i_pentomino(),
                Shape::new(vec![(0, 0), (1, 0)]),
            ];
            assert!(match_all(&created, &[i_pentomino()]));
        }

        #[test]
        fn empty_requirement_is_trivially_satisfied() {
            assert!(match_all(&[], &[]));
            assert!(match_all(&[i_pentomino()], &[]));
        }
    }

    mod pentomino_identification {
        use super::*;

        #[test]
        fn identifies_every_base_shape() {
            for (letter, base) in PENTOMINOES.iter() {
                assert_eq!(identify_pentomino(base), Some(*letter));
            }
        }

        #[test]
        fn identifies_rotated_and_reflected_shapes() {
            // W pentomino rotated 90 degrees
            let rotated = Shape::new(vec![(0, 0), (-1, 0), (-1, 1), (-2, 1), (-2, 2)]);
            assert_eq!(identify_pentomino(&rotated), Some('W'));
        }

        #[test]
        fn rejects_non_pentominoes() {
            assert_eq!(identify_pentomino(&Shape::new(vec![(0, 0), (1, 0)])), None);
            // 5 cells but disconnected lump that is no catalog pentomino:
            // the 2x2 square plus a detached cell
            let odd = Shape::new(vec![(0, 0), (1, 0), (0, 1), (1, 1), (3, 3)]);
            assert_eq!(identify_pentomino(&odd), None);
        }
    }

    #[test]
    fn ascii_art_renders_the_bounding_box() {
        let shape = Shape::new(vec![(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]);
        assert_eq!(shape.ascii_art(), " # \n###\n # ");
    }
}
