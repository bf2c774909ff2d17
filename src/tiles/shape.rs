//! Polyomino shapes and geometry operations.
//!
//! A `Shape` is a binary matrix with an exact bounding box: no fully-empty
//! border row or column. All geometry (rotation, mirroring, the symmetry
//! test) operates on shapes; tiles delegate to them.
//!
//! ## Shape pools
//!
//! The base pool of 9 shapes (1 to 4 cells) is always available. Pentominoes
//! join the pool once the grid reaches 8, hexominoes at 9, so bigger boards
//! deal bigger pieces.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Coord;

/// A polyomino shape: rows of filled/empty cells with a tight bounding box.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
}

impl Shape {
    /// Build a shape from a 0/1 matrix.
    ///
    /// Panics if the matrix is empty or ragged; shape literals are
    /// program constants, so this is a programming error, not input.
    #[must_use]
    pub fn from_matrix(matrix: &[&[u8]]) -> Self {
        assert!(!matrix.is_empty(), "shape must have at least one row");
        let width = matrix[0].len();
        assert!(width > 0, "shape must have at least one column");

        let rows = matrix
            .iter()
            .map(|row| {
                assert_eq!(row.len(), width, "shape rows must have equal width");
                row.iter().map(|&v| v != 0).collect()
            })
            .collect();

        Self { rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether the cell at `(row, col)` is filled.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    /// All filled cells as shape-local coordinates.
    #[must_use]
    pub fn filled_cells(&self) -> SmallVec<[Coord; 6]> {
        let mut cells = SmallVec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    cells.push(Coord::new(r, c));
                }
            }
        }
        cells
    }

    /// Number of filled cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&f| f).count())
            .sum()
    }

    /// Anchor cell for pointer-relative placement previews:
    /// `(height / 2, width / 2)`, flooring.
    #[must_use]
    pub fn barycenter(&self) -> Coord {
        Coord::new(self.height() / 2, self.width() / 2)
    }

    /// The shape rotated 90 degrees clockwise: `(r, c)` maps to
    /// `(c, height - 1 - r)`. Four rotations return the original.
    #[must_use]
    pub fn rotated_cw(&self) -> Self {
        let height = self.height();
        let width = self.width();
        let mut rows = vec![vec![false; height]; width];

        for r in 0..height {
            for c in 0..width {
                rows[c][height - 1 - r] = self.rows[r][c];
            }
        }

        Self { rows }
    }

    /// The shape mirrored horizontally: `(r, c)` maps to
    /// `(r, width - 1 - c)`. Dimensions are unchanged.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let width = self.width();
        let rows = self
            .rows
            .iter()
            .map(|row| (0..width).map(|c| row[width - 1 - c]).collect())
            .collect();

        Self { rows }
    }

    /// Whether the shape equals its own horizontal mirror.
    ///
    /// Symmetric shapes are never dealt mirrored and the mirror command is
    /// a no-op for them.
    #[must_use]
    pub fn is_horizontally_symmetric(&self) -> bool {
        let width = self.width();
        self.rows
            .iter()
            .all(|row| (0..width / 2).all(|c| row[c] == row[width - 1 - c]))
    }

    /// Structural check for deserialized shapes: non-empty, rectangular,
    /// and a tight bounding box (every border row/column has a filled cell).
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let width = self.rows[0].len();
        if width == 0 || self.rows.iter().any(|row| row.len() != width) {
            return false;
        }

        let row_filled = |r: usize| self.rows[r].iter().any(|&f| f);
        let col_filled = |c: usize| self.rows.iter().any(|row| row[c]);

        row_filled(0) && row_filled(self.rows.len() - 1) && col_filled(0) && col_filled(width - 1)
    }
}

/// The 9 always-available shapes (1 to 4 cells).
#[must_use]
pub fn base_shapes() -> Vec<Shape> {
    vec![
        // 1x1
        Shape::from_matrix(&[&[1]]),
        // 1x2
        Shape::from_matrix(&[&[1, 1]]),
        // 1x3
        Shape::from_matrix(&[&[1, 1, 1]]),
        // L-3
        Shape::from_matrix(&[&[1, 0], &[1, 1]]),
        // O-4
        Shape::from_matrix(&[&[1, 1], &[1, 1]]),
        // I-4
        Shape::from_matrix(&[&[1, 1, 1, 1]]),
        // T-4
        Shape::from_matrix(&[&[0, 1, 0], &[1, 1, 1]]),
        // L-4
        Shape::from_matrix(&[&[1, 0, 0], &[1, 1, 1]]),
        // S-4
        Shape::from_matrix(&[&[0, 1, 1], &[1, 1, 0]]),
    ]
}

/// The 5 pentominoes, dealt once the grid reaches 8.
#[must_use]
pub fn pentomino_shapes() -> Vec<Shape> {
    vec![
        // I-5
        Shape::from_matrix(&[&[1, 1, 1, 1, 1]]),
        // L-5
        Shape::from_matrix(&[&[1, 0], &[1, 0], &[1, 0], &[1, 1]]),
        // T-5
        Shape::from_matrix(&[&[1, 1, 1], &[0, 1, 0]]),
        // P-5
        Shape::from_matrix(&[&[1, 1], &[1, 1], &[1, 0]]),
        // X-5 (plus)
        Shape::from_matrix(&[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]]),
    ]
}

/// The 4 hexominoes, dealt once the grid reaches 9.
#[must_use]
pub fn hexomino_shapes() -> Vec<Shape> {
    vec![
        // I-6
        Shape::from_matrix(&[&[1, 1, 1, 1, 1, 1]]),
        // 2x3
        Shape::from_matrix(&[&[1, 1, 1], &[1, 1, 1]]),
        // C-6
        Shape::from_matrix(&[&[1, 1], &[1, 0], &[1, 1]]),
        // Stairs
        Shape::from_matrix(&[&[1, 0, 0], &[1, 1, 0], &[0, 1, 1]]),
    ]
}

/// The shape pool available at a given grid size.
#[must_use]
pub fn shape_pool(grid_size: usize) -> Vec<Shape> {
    let mut pool = base_shapes();
    if grid_size >= 8 {
        pool.extend(pentomino_shapes());
    }
    if grid_size >= 9 {
        pool.extend(hexomino_shapes());
    }
    pool
}
