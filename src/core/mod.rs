//! Core types: colors, cells, tile ids, game state, RNG, configuration.

pub mod cell;
pub mod color;
pub mod config;
pub mod rng;
pub mod state;

pub use cell::{Cell, Coord, TileId, TileIds};
pub use color::Color;
pub use rng::GameRng;
pub use state::GameState;
