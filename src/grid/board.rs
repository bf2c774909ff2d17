//! The square board of cells.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Coord};

/// A square grid of cells, side length `size`.
///
/// Stored row-major in a flat `Vec`. The engine rebuilds grids wholesale on
/// resize; within a size, cells are mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty grid of the given side length.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::empty(); size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.size + col]
    }

    /// Mutable cell at `(row, col)`.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row * self.size + col]
    }

    /// Cell at a coordinate.
    #[must_use]
    pub fn at(&self, coord: Coord) -> &Cell {
        self.cell(coord.row, coord.col)
    }

    /// Mutable cell at a coordinate.
    pub fn at_mut(&mut self, coord: Coord) -> &mut Cell {
        self.cell_mut(coord.row, coord.col)
    }

    /// Whether signed coordinates fall inside the grid.
    #[must_use]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Iterate over all coordinates, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Number of validated cells.
    #[must_use]
    pub fn validated_count(&self) -> usize {
        self.cells.iter().filter(|c| c.validated).count()
    }

    /// Empty every cell currently flagged `clearing`.
    pub fn remove_clearing_cells(&mut self) {
        for cell in &mut self.cells {
            if cell.clearing {
                *cell = Cell::empty();
            }
        }
    }
}
