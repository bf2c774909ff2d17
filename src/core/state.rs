//! The game state object.
//!
//! One plain struct owns everything a game in progress is: the grid, the
//! score, the pending tile pair, and the resize bookkeeping. The engine
//! mutates it through commands; derived values (multiplier, thresholds,
//! salvage points) are computed on demand from `core::config`.

use serde::{Deserialize, Serialize};

use super::cell::TileId;
use super::config;
use crate::engine::Direction;
use crate::grid::Grid;
use crate::tiles::Tile;

/// Complete state of a game in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// The board. Always square; its side length is the grid size.
    pub grid: Grid,

    /// Accumulated score for this game.
    pub score: u32,

    /// The tile the player is placing, `None` while a settle is in flight.
    pub current_tile: Option<Tile>,

    /// The on-deck tile.
    pub next_tile: Option<Tile>,

    /// Terminal flag. Once set, no command mutates score or grid.
    pub is_game_over: bool,

    /// Id of the most recently placed tile, held for one settle cycle.
    /// Placement-highlight cue for the presentation layer.
    pub last_placed_tile_id: Option<TileId>,

    /// A shrink choreography is in flight.
    pub is_shrinking: bool,

    /// Which corner the next resize preserves. Cycles 0..3, one step per
    /// resize event in either direction.
    pub direction: Direction,

    /// The stuck-check failed and a shrink (or game over) is imminent.
    pub is_shrink_imminent: bool,
}

impl GameState {
    /// Fresh state with an empty grid and no tiles dealt.
    #[must_use]
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid: Grid::empty(grid_size),
            score: 0,
            current_tile: None,
            next_tile: None,
            is_game_over: false,
            last_placed_tile_id: None,
            is_shrinking: false,
            direction: Direction::TopLeft,
            is_shrink_imminent: false,
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    /// Score multiplier at the current grid size.
    #[must_use]
    pub fn score_multiplier(&self) -> u32 {
        config::score_multiplier(self.grid_size())
    }

    /// Group-validation threshold at the current grid size.
    #[must_use]
    pub fn min_validated_group_size(&self) -> usize {
        config::min_validated_group_size(self.grid_size())
    }

    /// Points the currently validated cells would salvage in a shrink.
    #[must_use]
    pub fn shrink_points_available(&self) -> u32 {
        config::shrink_points(self.grid.validated_count(), self.grid_size())
    }
}
