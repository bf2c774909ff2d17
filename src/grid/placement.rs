//! Placement predicates.
//!
//! Placement is atomic: a tile fits only if every filled cell of its shape
//! maps onto an empty in-bounds cell. Offsets are signed because the
//! brute-force "fits anywhere" scan starts at `-height + 1` so a shape can
//! hang over the top/left edge during the scan (such positions simply fail
//! the per-cell bounds check for the cells that stick out).
//!
//! The stuck-check deliberately tries only the four rotations of a tile,
//! never its mirror: mirroring is a separate player-invoked action, and
//! folding it into the check would change game balance.

use super::board::Grid;
use crate::tiles::{Shape, Tile};

/// Whether `shape` fits with its top-left corner at `(start_row, start_col)`.
fn shape_fits(grid: &Grid, shape: &Shape, start_row: i32, start_col: i32) -> bool {
    shape.filled_cells().iter().all(|cell| {
        let row = start_row + cell.row as i32;
        let col = start_col + cell.col as i32;
        grid.in_bounds(row, col) && !grid.cell(row as usize, col as usize).is_occupied()
    })
}

/// Whether `tile` can be placed with its top-left corner at
/// `(start_row, start_col)`.
#[must_use]
pub fn can_place(grid: &Grid, tile: &Tile, start_row: i32, start_col: i32) -> bool {
    shape_fits(grid, &tile.shape, start_row, start_col)
}

/// Whether `tile` fits somewhere on the grid in its current orientation.
#[must_use]
pub fn can_place_anywhere(grid: &Grid, tile: &Tile) -> bool {
    shape_fits_anywhere(grid, &tile.shape)
}

fn shape_fits_anywhere(grid: &Grid, shape: &Shape) -> bool {
    let size = grid.size() as i32;
    let row_start = 1 - shape.height() as i32;
    let col_start = 1 - shape.width() as i32;

    for row in row_start..size {
        for col in col_start..size {
            if shape_fits(grid, shape, row, col) {
                return true;
            }
        }
    }
    false
}

/// Whether `tile` fits somewhere in any of its four rotations.
///
/// Works on a copy of the shape; the caller's tile is untouched.
#[must_use]
pub fn can_place_in_any_rotation(grid: &Grid, tile: &Tile) -> bool {
    let mut shape = tile.shape.clone();
    for _ in 0..4 {
        if shape_fits_anywhere(grid, &shape) {
            return true;
        }
        shape = shape.rotated_cw();
    }
    false
}

/// The stuck-check: can the player place at least one of the two pending
/// tiles, in some rotation, somewhere? A missing tile contributes `false`.
#[must_use]
pub fn can_place_at_least_one(grid: &Grid, current: Option<&Tile>, next: Option<&Tile>) -> bool {
    let current_fits = current.is_some_and(|t| can_place_in_any_rotation(grid, t));
    let next_fits = next.is_some_and(|t| can_place_in_any_rotation(grid, t));
    current_fits || next_fits
}
