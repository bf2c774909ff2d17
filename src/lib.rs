//! # tileburst
//!
//! Rules engine for a single-player tile-placement puzzle on a square grid
//! that grows when the player clears lines and shrinks when they get stuck.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: No rendering, audio, or timers. The engine emits
//!    [`engine::GameEvent`]s and parks [`engine::Pending`] continuations;
//!    the host animates, waits, and calls [`engine::GameEngine::settle`].
//!
//! 2. **Deterministic**: Tile generation runs on a seeded RNG behind the
//!    [`tiles::TileSource`] trait, so whole games replay from a seed and
//!    tests script exact tile sequences.
//!
//! 3. **Crash-Safe**: State snapshots to a pluggable [`persist::GameStore`]
//!    after every change; a corrupt snapshot falls back to a fresh game.
//!
//! ## Modules
//!
//! - `core`: Cells, colors, tile ids, game state, RNG, configuration
//! - `tiles`: Shapes, tile geometry, and tile generation
//! - `grid`: The board and its pure rules (placement, lines, groups)
//! - `engine`: The command/settle engine and the resize state machine
//! - `persist`: Snapshots and the storage contract

pub mod core;
pub mod engine;
pub mod grid;
pub mod persist;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{Cell, Color, Coord, GameRng, GameState, TileId, TileIds};

pub use crate::tiles::{ScriptedTileSource, Shape, Tile, TileGenerator, TileSource};

pub use crate::grid::{Grid, LineScan};

pub use crate::engine::{Direction, GameEngine, GameEvent, Pending};

pub use crate::persist::{GameStore, MemoryStore, Snapshot, StoreError};
