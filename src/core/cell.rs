//! Grid cells and tile identity.
//!
//! ## TileId
//!
//! Every generated tile gets a unique, monotonically increasing id. Ids are
//! never reused within a process; they exist for placement-highlight cues and
//! for persistence recovery (the counter resumes past the highest id seen in
//! a restored snapshot).
//!
//! ## Cell
//!
//! A grid cell carries its occupant (color + tile id) plus three flags:
//! - `clearing` / `shrinking`: transient animation intent, set and cleared by
//!   the engine at defined pipeline points, never persisted
//! - `validated`: protective mark from group validation, persisted

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Unique identifier for a generated tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Monotonic allocator for tile ids.
///
/// Owned by the engine and handed to whichever `TileSource` is installed.
/// `resume_past` is called on snapshot restore so future tiles never collide
/// with ids already on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileIds {
    next: u32,
}

impl Default for TileIds {
    fn default() -> Self {
        Self::new()
    }
}

impl TileIds {
    /// Start allocating from 1 (matching a fresh game).
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next tile id.
    pub fn alloc(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }

    /// Ensure future allocations come strictly after `seen`.
    pub fn resume_past(&mut self, seen: TileId) {
        if seen.0 >= self.next {
            self.next = seen.0 + 1;
        }
    }
}

/// A coordinate on the grid (row, column), both in `[0, grid_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Occupant color, `None` for an empty cell.
    pub color: Option<Color>,

    /// Id of the tile that filled this cell.
    pub tile_id: Option<TileId>,

    /// Transient: cell is part of a clear in flight.
    pub clearing: bool,

    /// Transient: cell will be destroyed by the imminent shrink.
    pub shrinking: bool,

    /// Cell belongs to a validated (shrink-protected) group.
    pub validated: bool,
}

impl Cell {
    /// An empty cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            color: None,
            tile_id: None,
            clearing: false,
            shrinking: false,
            validated: false,
        }
    }

    /// A cell freshly stamped by a tile.
    #[must_use]
    pub const fn filled(color: Color, tile_id: TileId) -> Self {
        Self {
            color: Some(color),
            tile_id: Some(tile_id),
            clearing: false,
            shrinking: false,
            validated: false,
        }
    }

    /// Whether the cell holds tile content.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.color.is_some()
    }
}
