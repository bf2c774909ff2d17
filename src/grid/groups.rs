//! Group validation: connected-component analysis.
//!
//! A full recompute every time: flood-fill the whole grid over 4-directional
//! adjacency among same-colored cells, mark every component that meets the
//! size threshold `validated`, and strip the flag from everything else.
//! Validation grants no score by itself; it only exempts cells from
//! destruction during a future shrink, where they are salvaged for points.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::board::Grid;
use crate::core::{config, Coord};

/// Recompute `validated` flags for the whole grid.
///
/// Returns the number of validated groups found.
pub fn update_validated_groups(grid: &mut Grid) -> usize {
    let size = grid.size();
    let min_size = config::min_validated_group_size(size);

    for coord in grid.coords().collect::<Vec<_>>() {
        grid.at_mut(coord).validated = false;
    }

    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut validated_groups = 0;

    for start in grid.coords().collect::<Vec<_>>() {
        if visited.contains(&start) {
            continue;
        }
        let Some(color) = grid.at(start).color else {
            continue;
        };

        let mut group = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited.insert(start);

        while let Some(coord) = queue.pop_front() {
            group.push(coord);

            let row = coord.row as i32;
            let col = coord.col as i32;
            let neighbors = [
                (row - 1, col),
                (row + 1, col),
                (row, col - 1),
                (row, col + 1),
            ];
            for (nr, nc) in neighbors {
                if !grid.in_bounds(nr, nc) {
                    continue;
                }
                let next = Coord::new(nr as usize, nc as usize);
                if !visited.contains(&next) && grid.at(next).color == Some(color) {
                    visited.insert(next);
                    queue.push_back(next);
                }
            }
        }

        if group.len() >= min_size {
            validated_groups += 1;
            for coord in group {
                grid.at_mut(coord).validated = true;
            }
        }
    }

    validated_groups
}
