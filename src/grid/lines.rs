//! Line-clear detection and placement previews.
//!
//! A row is complete when all of its cells share the same non-null color;
//! columns are checked independently, so a placement can clear a row and a
//! column at once and both count (their intersection cell is collected only
//! once, but the line count is 2).

use rustc_hash::FxHashSet;

use super::board::Grid;
use super::placement;
use crate::core::{config, Cell, Coord};
use crate::tiles::Tile;

/// Result of scanning a grid for completed lines.
#[derive(Clone, Debug, Default)]
pub struct LineScan {
    /// Union of all cells belonging to completed lines.
    pub cells: FxHashSet<Coord>,
    /// Number of completed lines (rows + columns).
    pub lines: usize,
}

impl LineScan {
    /// Points this scan is worth at the given grid size.
    #[must_use]
    pub fn points(&self, grid_size: usize) -> u32 {
        config::line_clear_points(self.lines, grid_size)
    }
}

/// Scan the grid for completed single-color rows and columns.
#[must_use]
pub fn find_completed_lines(grid: &Grid) -> LineScan {
    let size = grid.size();
    let mut scan = LineScan::default();

    for row in 0..size {
        let Some(first) = grid.cell(row, 0).color else {
            continue;
        };
        if (0..size).all(|col| grid.cell(row, col).color == Some(first)) {
            scan.lines += 1;
            for col in 0..size {
                scan.cells.insert(Coord::new(row, col));
            }
        }
    }

    for col in 0..size {
        let Some(first) = grid.cell(0, col).color else {
            continue;
        };
        if (0..size).all(|row| grid.cell(row, col).color == Some(first)) {
            scan.lines += 1;
            for row in 0..size {
                scan.cells.insert(Coord::new(row, col));
            }
        }
    }

    scan
}

/// Copy of `grid` with `tile` stamped at `(start_row, start_col)`.
///
/// Cells that fall outside the grid are ignored, so this is safe for
/// previewing a placement that partially overhangs the edge.
#[must_use]
pub fn stamped(grid: &Grid, tile: &Tile, start_row: i32, start_col: i32) -> Grid {
    let mut out = grid.clone();
    for cell in tile.shape.filled_cells() {
        let row = start_row + cell.row as i32;
        let col = start_col + cell.col as i32;
        if out.in_bounds(row, col) {
            *out.cell_mut(row as usize, col as usize) = Cell::filled(tile.color, tile.id);
        }
    }
    out
}

/// Cells that would clear if `tile` were placed at `(start_row, start_col)`.
///
/// Pure preview: neither `grid` nor `tile` is modified.
#[must_use]
pub fn preview_line_clears(
    grid: &Grid,
    tile: &Tile,
    start_row: i32,
    start_col: i32,
) -> FxHashSet<Coord> {
    find_completed_lines(&stamped(grid, tile, start_row, start_col)).cells
}

/// Points the player would score by placing `tile` at
/// `(start_row, start_col)`, or 0 if the placement is invalid.
#[must_use]
pub fn placement_points(grid: &Grid, tile: &Tile, start_row: i32, start_col: i32) -> u32 {
    if !placement::can_place(grid, tile, start_row, start_col) {
        return 0;
    }
    find_completed_lines(&stamped(grid, tile, start_row, start_col)).points(grid.size())
}
