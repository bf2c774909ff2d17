//! Grid resize rebuilds.
//!
//! Pure helpers for the resize state machine: rebuild the grid one step
//! larger or smaller around the preserved corner, and compute the border
//! cells a shrink will destroy. The engine owns sequencing (warnings,
//! validated-cell salvage, direction advancement); these functions only
//! move cells.

use super::direction::Direction;
use crate::core::Coord;
use crate::grid::Grid;

/// The grid grown by one, content anchored at the corner `dir` preserves.
#[must_use]
pub fn expanded(grid: &Grid, dir: Direction) -> Grid {
    let old_size = grid.size();
    let mut out = Grid::empty(old_size + 1);
    let (dr, dc) = dir.offset();

    for row in 0..old_size {
        for col in 0..old_size {
            *out.cell_mut(row + dr, col + dc) = *grid.cell(row, col);
        }
    }
    out
}

/// The grid shrunk by one, keeping the window anchored at the corner `dir`
/// preserves. Cells outside the window are dropped.
#[must_use]
pub fn shrunk(grid: &Grid, dir: Direction) -> Grid {
    let new_size = grid.size() - 1;
    let mut out = Grid::empty(new_size);
    let (dr, dc) = dir.offset();

    for row in 0..new_size {
        for col in 0..new_size {
            *out.cell_mut(row, col) = *grid.cell(row + dr, col + dc);
        }
    }
    out
}

/// Occupied cells that a shrink in direction `dir` would destroy: everything
/// outside the surviving `size - 1` window.
#[must_use]
pub fn doomed_border(grid: &Grid, dir: Direction) -> Vec<Coord> {
    let new_size = grid.size() - 1;
    let (dr, dc) = dir.offset();

    grid.coords()
        .filter(|coord| {
            let survives = coord.row >= dr
                && coord.col >= dc
                && coord.row < dr + new_size
                && coord.col < dc + new_size;
            !survives && grid.at(*coord).is_occupied()
        })
        .collect()
}
