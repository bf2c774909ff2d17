//! Tile instances.

use serde::{Deserialize, Serialize};

use super::shape::Shape;
use crate::core::{Color, Coord, TileId};

/// A dealt tile: a shape in one of the five colors, with a unique id.
///
/// Width, height, and barycenter are derived from the shape so they can
/// never drift out of sync under rotation or mirroring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub shape: Shape,
    pub color: Color,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub fn new(id: TileId, shape: Shape, color: Color) -> Self {
        Self { id, shape, color }
    }

    /// Bounding-box width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.shape.width()
    }

    /// Bounding-box height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.shape.height()
    }

    /// Anchor cell for placement previews.
    #[must_use]
    pub fn barycenter(&self) -> Coord {
        self.shape.barycenter()
    }

    /// Rotate the tile 90 degrees clockwise in place.
    pub fn rotate_cw(&mut self) {
        self.shape = self.shape.rotated_cw();
    }

    /// Mirror the tile horizontally in place.
    pub fn mirror_horizontal(&mut self) {
        self.shape = self.shape.mirrored();
    }

    /// Whether mirroring would change the tile at all.
    #[must_use]
    pub fn can_mirror(&self) -> bool {
        !self.shape.is_horizontally_symmetric()
    }
}
