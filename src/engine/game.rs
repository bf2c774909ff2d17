//! The game engine.
//!
//! ## Overview
//!
//! `GameEngine` owns the full game: state, tile source, id counter, event
//! queue, and the storage backend. Hosts drive it with commands
//! (`place_current_tile`, `rotate_current_tile`, ...) and with `settle`,
//! which resumes whatever pipeline a command left parked behind a delay.
//!
//! ## Pipelines
//!
//! A placement runs one of two pipelines. With completed lines: mark the
//! union `clearing`, score, park `ClearSettle`; on settle the cells empty,
//! groups revalidate, the grid grows, and the next tile is dealt. Without:
//! revalidate groups immediately and park `PlaceSettle`, which only drops
//! the placement highlight before dealing.
//!
//! Dealing ends with the stuck-check. If neither pending tile fits in any
//! rotation, `ShrinkDecision` is parked: on settle the grid shrinks by one
//! (salvaging validated cells for points first) or the game ends at the
//! minimum size. A board still stuck right after a shrink ends the game
//! outright.
//!
//! ## Persistence
//!
//! The engine saves a snapshot after every state change and restores it on
//! construction. Storage failures are logged and ignored; a corrupt or
//! finished snapshot falls back to a fresh game. The best score is a
//! separate record that survives restarts.

use std::mem;
use std::time::Duration;

use rustc_hash::FxHashSet;

use crate::core::{config, Cell, Coord, GameState, TileId, TileIds};
use crate::grid::{
    can_place, can_place_at_least_one, lines, update_validated_groups, Grid,
};
use crate::persist::{GameStore, Snapshot};
use crate::tiles::{Tile, TileGenerator, TileSource};

use super::direction::Direction;
use super::events::GameEvent;
use super::resize;
use super::schedule::Pending;

/// The rules engine for one game.
pub struct GameEngine {
    state: GameState,
    ids: TileIds,
    tiles: Box<dyn TileSource>,
    store: Box<dyn GameStore>,
    best_score: u32,
    pending: Option<Pending>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Engine with a seeded random tile generator.
    ///
    /// Restores the saved game from `store` if one exists and is still in
    /// progress; otherwise starts fresh.
    #[must_use]
    pub fn new(seed: u64, store: Box<dyn GameStore>) -> Self {
        Self::with_source(Box::new(TileGenerator::new(seed)), store)
    }

    /// Engine with an arbitrary tile source.
    #[must_use]
    pub fn with_source(tiles: Box<dyn TileSource>, store: Box<dyn GameStore>) -> Self {
        let mut engine = Self {
            state: GameState::new(config::STARTING_GRID_SIZE),
            ids: TileIds::new(),
            tiles,
            store,
            best_score: 0,
            pending: None,
            events: Vec::new(),
        };

        engine.best_score = match engine.store.load_best_score() {
            Ok(best) => best.unwrap_or(0),
            Err(e) => {
                log::warn!("load best score failed: {e}");
                0
            }
        };

        if !engine.load_saved_game() {
            engine.start_game();
        }
        engine
    }

    fn load_saved_game(&mut self) -> bool {
        let bytes = match self.store.load_snapshot() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return false,
            Err(e) => {
                log::warn!("load snapshot failed: {e}");
                return false;
            }
        };
        let snapshot = match Snapshot::from_bytes(&bytes) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("snapshot unreadable, starting fresh: {e}");
                return false;
            }
        };
        self.restore_snapshot(snapshot)
    }

    /// Resume play from a snapshot.
    ///
    /// Returns `false` (leaving the engine unchanged) if the snapshot is
    /// corrupt or records a finished game. Missing tiles are re-dealt, and
    /// the id counter resumes past every id the snapshot mentions.
    pub fn restore_snapshot(&mut self, snapshot: Snapshot) -> bool {
        if snapshot.is_game_over {
            return false;
        }
        let max_id = snapshot.max_tile_id();
        let Some(state) = snapshot.into_state() else {
            log::warn!("snapshot failed validation, starting fresh");
            return false;
        };

        if let Some(id) = max_id {
            self.ids.resume_past(id);
        }
        self.state = state;
        self.pending = None;

        // A snapshot captured mid-settle may lack one or both tiles
        let size = self.state.grid_size();
        if self.state.current_tile.is_none() {
            self.state.current_tile = self.state.next_tile.take();
        }
        if self.state.current_tile.is_none() {
            self.state.current_tile = Some(self.tiles.next_tile(size, &mut self.ids));
        }
        if self.state.next_tile.is_none() {
            self.state.next_tile = Some(self.tiles.next_tile(size, &mut self.ids));
        }

        if self.state.score > self.best_score {
            self.update_best_score();
        }
        log::info!(
            "restored game: size {size}, score {}",
            self.state.score
        );

        if !self.stuck_check_passes() {
            self.state.is_shrink_imminent = true;
            self.events.push(GameEvent::ShrinkWarning);
            self.pending = Some(Pending::ShrinkDecision);
        }
        self.persist();
        true
    }

    /// Abandon any game in progress and start a new one.
    ///
    /// Drops the parked continuation, so a settle belonging to the old game
    /// can never fire into the new one. The best score is kept.
    pub fn start_game(&mut self) {
        self.pending = None;
        if let Err(e) = self.store.clear_snapshot() {
            log::warn!("clear snapshot failed: {e}");
        }

        self.state = GameState::new(config::STARTING_GRID_SIZE);
        let size = self.state.grid_size();
        self.state.current_tile = Some(self.tiles.next_tile(size, &mut self.ids));
        self.state.next_tile = Some(self.tiles.next_tile(size, &mut self.ids));
        log::info!("new game at size {size}");

        if !self.stuck_check_passes() {
            self.end_game();
        }
        self.persist();
    }

    // ---- commands -------------------------------------------------------

    /// Place the current tile with its top-left corner at `(row, col)`.
    ///
    /// Returns whether the placement happened. Invalid positions, a missing
    /// current tile, a shrink in flight, and a finished game are all
    /// rejected without touching state.
    pub fn place_current_tile(&mut self, row: i32, col: i32) -> bool {
        if self.state.is_game_over || self.state.is_shrinking {
            return false;
        }
        let Some(tile) = self.state.current_tile.clone() else {
            return false;
        };
        if !can_place(&self.state.grid, &tile, row, col) {
            return false;
        }

        for cell in tile.shape.filled_cells() {
            let r = (row + cell.row as i32) as usize;
            let c = (col + cell.col as i32) as usize;
            *self.state.grid.cell_mut(r, c) = Cell::filled(tile.color, tile.id);
        }
        self.state.current_tile = None;
        self.state.last_placed_tile_id = Some(tile.id);
        self.events.push(GameEvent::TilePlaced { tile_id: tile.id });
        log::debug!("placed {} at ({row}, {col})", tile.id);

        let scan = lines::find_completed_lines(&self.state.grid);
        if scan.lines > 0 {
            let points = scan.points(self.state.grid_size());
            for coord in &scan.cells {
                self.state.grid.at_mut(*coord).clearing = true;
            }
            self.state.score += points;
            self.update_best_score();
            self.events.push(GameEvent::LinesCleared {
                lines: scan.lines,
                points,
            });
            self.pending = Some(Pending::ClearSettle);
        } else {
            self.revalidate_groups();
            self.pending = Some(Pending::PlaceSettle);
        }
        self.persist();
        true
    }

    /// Rotate the current tile 90 degrees clockwise.
    pub fn rotate_current_tile(&mut self) {
        if self.state.is_game_over {
            return;
        }
        if let Some(tile) = self.state.current_tile.as_mut() {
            tile.rotate_cw();
            self.events.push(GameEvent::TileRotated);
            self.persist();
        }
    }

    /// Mirror the current tile horizontally. Symmetric tiles are left alone.
    pub fn mirror_current_tile(&mut self) {
        if self.state.is_game_over {
            return;
        }
        if let Some(tile) = self.state.current_tile.as_mut() {
            if !tile.can_mirror() {
                return;
            }
            tile.mirror_horizontal();
            self.events.push(GameEvent::TileMirrored);
            self.persist();
        }
    }

    /// Swap the current and next tiles. Requires both to be present.
    pub fn swap_tiles(&mut self) {
        if self.state.is_game_over {
            return;
        }
        if self.state.current_tile.is_some() && self.state.next_tile.is_some() {
            mem::swap(&mut self.state.current_tile, &mut self.state.next_tile);
            self.events.push(GameEvent::TilesSwapped);
            self.persist();
        }
    }

    /// Forget the best score.
    pub fn reset_best_score(&mut self) {
        self.best_score = 0;
        if let Err(e) = self.store.clear_best_score() {
            log::warn!("clear best score failed: {e}");
        }
    }

    // ---- settling -------------------------------------------------------

    /// Resume the parked pipeline, if any.
    ///
    /// The host calls this after `Pending::delay` has elapsed. Calling it
    /// with nothing parked is a no-op.
    pub fn settle(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        log::debug!("settling {pending:?}");

        match pending {
            Pending::ClearSettle => {
                self.state.grid.remove_clearing_cells();
                self.revalidate_groups();
                self.state.last_placed_tile_id = None;
                self.expand_grid();
                self.advance_to_next_tile();
            }
            Pending::PlaceSettle => {
                self.state.last_placed_tile_id = None;
                self.advance_to_next_tile();
            }
            Pending::ShrinkDecision => {
                self.state.is_shrink_imminent = false;
                if self.state.grid_size() > config::MIN_GRID_SIZE {
                    self.begin_shrink();
                } else {
                    self.end_game();
                    self.persist();
                }
            }
            Pending::ValidatedClearSettle => {
                self.state.grid.remove_clearing_cells();
                self.start_shrink_warning();
            }
            Pending::ShrinkSettle => {
                self.finish_shrink();
            }
        }
    }

    /// Run every parked continuation to quiescence.
    ///
    /// Convenience for hosts that do not animate. Terminates because every
    /// chain either deals a placeable tile or shrinks toward the minimum
    /// size, where the game ends.
    pub fn settle_all(&mut self) {
        while self.pending.is_some() {
            self.settle();
        }
    }

    fn expand_grid(&mut self) {
        if self.state.grid_size() >= config::MAX_GRID_SIZE {
            return;
        }
        self.state.grid = resize::expanded(&self.state.grid, self.state.direction);
        // Threshold changed with the size; recompute marks
        update_validated_groups(&mut self.state.grid);
        self.state.direction = self.state.direction.advanced();

        let new_size = self.state.grid_size();
        self.events.push(GameEvent::GridExpanded { new_size });
        log::info!("grid expanded to {new_size}");
        self.persist();
    }

    fn advance_to_next_tile(&mut self) {
        let size = self.state.grid_size();
        self.state.current_tile = self.state.next_tile.take();
        if self.state.current_tile.is_none() {
            self.state.current_tile = Some(self.tiles.next_tile(size, &mut self.ids));
        }
        self.state.next_tile = Some(self.tiles.next_tile(size, &mut self.ids));

        if self.stuck_check_passes() {
            // A placement during the warning window may have resolved the
            // stuck state; the warning must not outlive it
            self.state.is_shrink_imminent = false;
        } else {
            self.state.is_shrink_imminent = true;
            self.events.push(GameEvent::ShrinkWarning);
            self.pending = Some(Pending::ShrinkDecision);
            log::info!("stuck at size {size}: neither pending tile fits");
        }
        self.persist();
    }

    fn begin_shrink(&mut self) {
        self.state.is_shrinking = true;

        let validated: Vec<Coord> = self
            .state
            .grid
            .coords()
            .filter(|coord| self.state.grid.at(*coord).validated)
            .collect();

        if validated.is_empty() {
            self.start_shrink_warning();
            return;
        }

        let points = config::shrink_points(validated.len(), self.state.grid_size());
        for coord in &validated {
            let cell = self.state.grid.at_mut(*coord);
            cell.clearing = true;
            cell.validated = false;
        }
        self.state.score += points;
        self.update_best_score();
        self.events.push(GameEvent::ValidatedCellsScored {
            cells: validated.len(),
            points,
        });
        log::info!("salvaged {} validated cells for {points}", validated.len());
        self.pending = Some(Pending::ValidatedClearSettle);
        self.persist();
    }

    fn start_shrink_warning(&mut self) {
        if self.state.grid_size() - 1 < config::MIN_GRID_SIZE {
            self.state.is_shrinking = false;
            self.end_game();
            self.persist();
            return;
        }

        for coord in resize::doomed_border(&self.state.grid, self.state.direction) {
            self.state.grid.at_mut(coord).shrinking = true;
        }
        self.pending = Some(Pending::ShrinkSettle);
        self.persist();
    }

    fn finish_shrink(&mut self) {
        self.state.grid = resize::shrunk(&self.state.grid, self.state.direction);
        update_validated_groups(&mut self.state.grid);
        self.state.is_shrinking = false;
        self.state.direction = self.state.direction.advanced();

        let new_size = self.state.grid_size();
        self.events.push(GameEvent::GridShrunk { new_size });
        log::info!("grid shrunk to {new_size}");

        // Still stuck on the smaller board: the game is over, no second
        // shrink is attempted
        if !self.stuck_check_passes() {
            self.end_game();
        }
        self.persist();
    }

    fn end_game(&mut self) {
        self.state.is_game_over = true;
        self.update_best_score();
        self.events.push(GameEvent::GameOver {
            score: self.state.score,
        });
        log::info!("game over with score {}", self.state.score);
    }

    fn stuck_check_passes(&self) -> bool {
        can_place_at_least_one(
            &self.state.grid,
            self.state.current_tile.as_ref(),
            self.state.next_tile.as_ref(),
        )
    }

    /// Recompute group marks, reporting newly validated groups as an event.
    fn revalidate_groups(&mut self) {
        let before = self.state.grid.validated_count();
        let groups = update_validated_groups(&mut self.state.grid);
        if groups > 0 && self.state.grid.validated_count() > before {
            self.events.push(GameEvent::GroupsValidated { groups });
        }
    }

    // ---- persistence ----------------------------------------------------

    fn persist(&mut self) {
        match Snapshot::capture(&self.state).to_bytes() {
            Ok(bytes) => {
                if let Err(e) = self.store.save_snapshot(&bytes) {
                    log::warn!("save snapshot failed: {e}");
                }
            }
            Err(e) => log::warn!("encode snapshot failed: {e}"),
        }
    }

    fn update_best_score(&mut self) {
        if self.state.score > self.best_score {
            self.best_score = self.state.score;
            if let Err(e) = self.store.save_best_score(self.best_score) {
                log::warn!("save best score failed: {e}");
            }
        }
    }

    // ---- queries --------------------------------------------------------

    /// The full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Best score across games.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// The tile the player is placing.
    #[must_use]
    pub fn current_tile(&self) -> Option<&Tile> {
        self.state.current_tile.as_ref()
    }

    /// The on-deck tile.
    #[must_use]
    pub fn next_tile(&self) -> Option<&Tile> {
        self.state.next_tile.as_ref()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    /// Side length of the grid.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.state.grid_size()
    }

    /// Corner preserved by the next resize.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// A shrink choreography is in flight.
    #[must_use]
    pub fn is_shrinking(&self) -> bool {
        self.state.is_shrinking
    }

    /// The stuck warning is showing.
    #[must_use]
    pub fn is_shrink_imminent(&self) -> bool {
        self.state.is_shrink_imminent
    }

    /// Id of the most recently placed tile, until its settle.
    #[must_use]
    pub fn last_placed_tile_id(&self) -> Option<TileId> {
        self.state.last_placed_tile_id
    }

    /// Score multiplier at the current grid size.
    #[must_use]
    pub fn score_multiplier(&self) -> u32 {
        self.state.score_multiplier()
    }

    /// Group-validation threshold at the current grid size.
    #[must_use]
    pub fn min_validated_group_size(&self) -> usize {
        self.state.min_validated_group_size()
    }

    /// Points the validated cells would salvage in a shrink right now.
    #[must_use]
    pub fn shrink_points_available(&self) -> u32 {
        self.state.shrink_points_available()
    }

    /// The parked continuation, if a pipeline is waiting to settle.
    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// How long the host should wait before calling `settle`, if anything
    /// is parked.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        self.pending.map(Pending::delay)
    }

    /// Whether the current tile fits at `(row, col)`.
    #[must_use]
    pub fn can_place_tile(&self, row: i32, col: i32) -> bool {
        self.state
            .current_tile
            .as_ref()
            .is_some_and(|tile| can_place(&self.state.grid, tile, row, col))
    }

    /// Whether mirroring the current tile would change it.
    #[must_use]
    pub fn can_mirror_tile(&self) -> bool {
        self.state
            .current_tile
            .as_ref()
            .is_some_and(Tile::can_mirror)
    }

    /// Cells that would clear if the current tile were placed at
    /// `(row, col)`. Pure preview.
    #[must_use]
    pub fn preview_line_clears(&self, row: i32, col: i32) -> FxHashSet<Coord> {
        match self.state.current_tile.as_ref() {
            Some(tile) => lines::preview_line_clears(&self.state.grid, tile, row, col),
            None => FxHashSet::default(),
        }
    }

    /// Points the current tile would score at `(row, col)`, 0 if invalid.
    #[must_use]
    pub fn placement_points(&self, row: i32, col: i32) -> u32 {
        match self.state.current_tile.as_ref() {
            Some(tile) => lines::placement_points(&self.state.grid, tile, row, col),
            None => 0,
        }
    }

    /// Take every event pushed since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }
}
