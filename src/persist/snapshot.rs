//! Persisted game snapshots.
//!
//! A snapshot is everything a game needs to resume: the board (occupants
//! and `validated` marks only; the transient `clearing`/`shrinking` flags
//! never persist), score, the tile pair, the game-over flag, and the resize
//! direction. The byte format is bincode.
//!
//! Snapshots come from an external collaborator, so they are treated as
//! untrusted: structural validation failures surface as `None` and the
//! engine falls back to a fresh game instead of propagating a crash.

use serde::{Deserialize, Serialize};

use crate::core::{config, Cell, Color, GameState, TileId};
use crate::engine::Direction;
use crate::tiles::Tile;

use super::store::StoreError;

/// One persisted cell: occupant plus the protective mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCell {
    pub color: Option<Color>,
    pub tile_id: Option<TileId>,
    #[serde(default)]
    pub validated: bool,
}

/// A persisted game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Vec<Vec<SavedCell>>,
    pub grid_size: usize,
    pub score: u32,
    pub current_tile: Option<Tile>,
    pub next_tile: Option<Tile>,
    pub is_game_over: bool,
    pub direction: Direction,
}

impl Snapshot {
    /// Capture the persistable parts of a state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let size = state.grid_size();
        let grid = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| {
                        let cell = state.grid.cell(row, col);
                        SavedCell {
                            color: cell.color,
                            tile_id: cell.tile_id,
                            validated: cell.validated,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            grid,
            grid_size: size,
            score: state.score,
            current_tile: state.current_tile.clone(),
            next_tile: state.next_tile.clone(),
            is_game_over: state.is_game_over,
            direction: state.direction,
        }
    }

    /// The highest tile id anywhere in the snapshot (grid cells and the
    /// pending tile pair). The id counter resumes past this on restore.
    #[must_use]
    pub fn max_tile_id(&self) -> Option<TileId> {
        let grid_ids = self
            .grid
            .iter()
            .flatten()
            .filter_map(|cell| cell.tile_id);
        let pending_ids = [&self.current_tile, &self.next_tile]
            .into_iter()
            .filter_map(|tile| tile.as_ref().map(|t| t.id));

        grid_ids.chain(pending_ids).max()
    }

    /// Whether the snapshot is structurally consistent: square grid of the
    /// declared size, size within the legal range, well-formed tile shapes.
    #[must_use]
    pub fn is_structurally_valid(&self) -> bool {
        if self.grid_size < config::MIN_GRID_SIZE || self.grid_size > config::MAX_GRID_SIZE {
            return false;
        }
        if self.grid.len() != self.grid_size
            || self.grid.iter().any(|row| row.len() != self.grid_size)
        {
            return false;
        }

        let tiles_ok = [&self.current_tile, &self.next_tile]
            .into_iter()
            .flatten()
            .all(|tile| tile.shape.is_well_formed());
        tiles_ok
    }

    /// Rebuild a live state, or `None` if the snapshot is corrupt.
    ///
    /// Transient flags start cleared; `validated` is taken from the
    /// snapshot as-is.
    #[must_use]
    pub fn into_state(self) -> Option<GameState> {
        if !self.is_structurally_valid() {
            return None;
        }

        let mut state = GameState::new(self.grid_size);
        for (row, saved_row) in self.grid.iter().enumerate() {
            for (col, saved) in saved_row.iter().enumerate() {
                *state.grid.cell_mut(row, col) = Cell {
                    color: saved.color,
                    tile_id: saved.tile_id,
                    clearing: false,
                    shrinking: false,
                    validated: saved.validated,
                };
            }
        }
        state.score = self.score;
        state.current_tile = self.current_tile;
        state.next_tile = self.next_tile;
        state.is_game_over = self.is_game_over;
        state.direction = self.direction;

        Some(state)
    }

    /// Serialize to the persisted byte format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StoreError> {
        bincode::serialize(self).map_err(|e| StoreError::new(format!("encode snapshot: {e}")))
    }

    /// Deserialize from the persisted byte format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        bincode::deserialize(bytes).map_err(|e| StoreError::new(format!("decode snapshot: {e}")))
    }
}
