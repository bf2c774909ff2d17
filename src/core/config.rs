//! Game-wide constants and derived-value functions.
//!
//! All tuning values live here: grid-size bounds, settle delays, and the
//! scoring formulas. Derived values are plain functions computed on demand,
//! never cached.

use std::time::Duration;

/// Smallest grid the game ever shrinks to. Being stuck at this size ends
/// the game.
pub const MIN_GRID_SIZE: usize = 4;

/// Largest grid the game ever expands to. Expansion at this size is a no-op.
pub const MAX_GRID_SIZE: usize = 10;

/// Grid size at the start of a fresh game.
pub const STARTING_GRID_SIZE: usize = 6;

/// Settle delay after a placement or a line clear, before the pipeline
/// resumes (cells emptied, grid grown, next tile dealt).
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Warning period between the stuck-check failing and the shrink starting.
pub const PRE_SHRINK_DELAY: Duration = Duration::from_millis(1000);

/// How long border cells stay marked before the grid actually shrinks.
pub const SHRINK_WARNING_DURATION: Duration = Duration::from_millis(1500);

/// Score multiplier for the current grid size: `grid_size - 3`.
///
/// A 6x6 grid scores x3, a 10x10 grid scores x7.
#[must_use]
pub const fn score_multiplier(grid_size: usize) -> u32 {
    (grid_size as u32) - (MIN_GRID_SIZE as u32 - 1)
}

/// Points awarded for clearing `lines` complete lines at `grid_size`.
#[must_use]
pub const fn line_clear_points(lines: usize, grid_size: usize) -> u32 {
    (lines as u32) * (grid_size as u32) * 25 * score_multiplier(grid_size)
}

/// Points awarded for `validated_cells` protected cells salvaged during a
/// shrink.
#[must_use]
pub const fn shrink_points(validated_cells: usize, grid_size: usize) -> u32 {
    (validated_cells as u32) * 15 * score_multiplier(grid_size)
}

/// Minimum connected same-color group size that gets validated.
#[must_use]
pub const fn min_validated_group_size(grid_size: usize) -> usize {
    match grid_size {
        6 => 6,
        7 => 8,
        8 => 10,
        9 => 12,
        10 => 12,
        other => other + 2,
    }
}
