//! The resize direction cycle.
//!
//! Every resize (expand or shrink) preserves one corner of the board and
//! works on the opposite side, then rotates to the next corner. The cycle is
//! shared between expansions and shrinks: four consecutive resize events of
//! either kind visit all four corners.

use serde::{Deserialize, Serialize};

/// The corner preserved by the next resize.
///
/// | index | corner preserved on expand | growth direction |
/// |-------|----------------------------|------------------|
/// | 0     | top-left                   | down/right       |
/// | 1     | top-right                  | down/left        |
/// | 2     | bottom-right               | up/left          |
/// | 3     | bottom-left                | up/right         |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Direction {
    /// All directions in cycle order.
    pub const ALL: [Direction; 4] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::BottomLeft,
    ];

    /// Numeric index in the 0..3 cycle.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Direction::TopLeft => 0,
            Direction::TopRight => 1,
            Direction::BottomRight => 2,
            Direction::BottomLeft => 3,
        }
    }

    /// Direction for a cycle index, if valid.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Direction::TopLeft),
            1 => Some(Direction::TopRight),
            2 => Some(Direction::BottomRight),
            3 => Some(Direction::BottomLeft),
            _ => None,
        }
    }

    /// The next direction in the cycle: `(index + 1) % 4`.
    #[must_use]
    pub const fn advanced(self) -> Self {
        match self {
            Direction::TopLeft => Direction::TopRight,
            Direction::TopRight => Direction::BottomRight,
            Direction::BottomRight => Direction::BottomLeft,
            Direction::BottomLeft => Direction::TopLeft,
        }
    }

    /// Row/column offset of the preserved content inside the larger grid.
    ///
    /// On expand, old cell `(r, c)` lands at `(r + dr, c + dc)` in the new
    /// grid. On shrink, new cell `(r, c)` comes from `(r + dr, c + dc)` in
    /// the old grid; old cells outside that window are destroyed.
    #[must_use]
    pub const fn offset(self) -> (usize, usize) {
        match self {
            Direction::TopLeft => (0, 0),
            Direction::TopRight => (0, 1),
            Direction::BottomRight => (1, 1),
            Direction::BottomLeft => (1, 0),
        }
    }
}
