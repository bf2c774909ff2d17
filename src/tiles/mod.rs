//! Tiles: shapes, geometry, and generation.

pub mod generator;
pub mod shape;
pub mod tile;

pub use generator::{ScriptedTileSource, TileGenerator, TileSource};
pub use shape::{base_shapes, hexomino_shapes, pentomino_shapes, shape_pool, Shape};
pub use tile::Tile;
