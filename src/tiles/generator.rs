//! Tile production.
//!
//! The engine pulls tiles through the `TileSource` trait so randomness stays
//! injectable: production games install a seeded `TileGenerator`, tests
//! install a `ScriptedTileSource` with a fixed sequence. Either way the
//! engine owns the id counter and hands it in per call, which keeps ids
//! unique across restores.

use super::shape::{shape_pool, Shape};
use super::tile::Tile;
use crate::core::{Color, GameRng, TileIds};

/// Produces the next tile for a given grid size.
pub trait TileSource {
    /// Deal the next tile. `grid_size` selects the shape pool; `ids`
    /// allocates the tile's unique id.
    fn next_tile(&mut self, grid_size: usize, ids: &mut TileIds) -> Tile;
}

/// Random tile generator.
///
/// Uniform-random shape from the pool for the current grid size,
/// uniform-random color, and a 50% horizontal flip for shapes that are not
/// horizontally symmetric (symmetric shapes are left alone since the flip
/// would be invisible).
#[derive(Clone, Debug)]
pub struct TileGenerator {
    rng: GameRng,
}

impl TileGenerator {
    /// Seeded generator: same seed, same tile sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl TileSource for TileGenerator {
    fn next_tile(&mut self, grid_size: usize, ids: &mut TileIds) -> Tile {
        let pool = shape_pool(grid_size);
        let index = self.rng.gen_range(0..pool.len());
        let mut shape = pool[index].clone();

        let color_index = self.rng.gen_range(0..Color::ALL.len());
        let color = Color::ALL[color_index];

        if !shape.is_horizontally_symmetric() && self.rng.gen_bool(0.5) {
            shape = shape.mirrored();
        }

        Tile::new(ids.alloc(), shape, color)
    }
}

/// Deterministic tile source fed from a fixed script.
///
/// Deals the scripted tiles in order and cycles back to the start when the
/// script runs out, so a short script can drive an arbitrarily long game.
#[derive(Clone, Debug)]
pub struct ScriptedTileSource {
    script: Vec<(Shape, Color)>,
    cursor: usize,
}

impl ScriptedTileSource {
    /// Create a source from a non-empty script.
    #[must_use]
    pub fn new(script: Vec<(Shape, Color)>) -> Self {
        assert!(!script.is_empty(), "script must contain at least one tile");
        Self { script, cursor: 0 }
    }
}

impl TileSource for ScriptedTileSource {
    fn next_tile(&mut self, _grid_size: usize, ids: &mut TileIds) -> Tile {
        let (shape, color) = self.script[self.cursor % self.script.len()].clone();
        self.cursor += 1;
        Tile::new(ids.alloc(), shape, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    #[test]
    fn test_generator_is_deterministic() {
        let mut gen1 = TileGenerator::new(7);
        let mut gen2 = TileGenerator::new(7);
        let mut ids1 = TileIds::new();
        let mut ids2 = TileIds::new();

        for _ in 0..50 {
            assert_eq!(gen1.next_tile(6, &mut ids1), gen2.next_tile(6, &mut ids2));
        }
    }

    #[test]
    fn test_generator_allocates_monotonic_ids() {
        let mut gen = TileGenerator::new(1);
        let mut ids = TileIds::new();

        let a = gen.next_tile(6, &mut ids);
        let b = gen.next_tile(6, &mut ids);
        assert_eq!(a.id, TileId::new(1));
        assert_eq!(b.id, TileId::new(2));
    }

    #[test]
    fn test_generated_shapes_come_from_pool() {
        let mut gen = TileGenerator::new(99);
        let mut ids = TileIds::new();
        let pool = shape_pool(6);

        for _ in 0..200 {
            let tile = gen.next_tile(6, &mut ids);
            let in_pool = pool
                .iter()
                .any(|s| *s == tile.shape || *s == tile.shape.mirrored());
            assert!(in_pool, "dealt shape not in pool: {:?}", tile.shape);
            // Small-grid pools never deal more than 4 cells
            assert!(tile.shape.cell_count() <= 4);
        }
    }

    #[test]
    fn test_big_grid_deals_big_shapes() {
        let mut gen = TileGenerator::new(3);
        let mut ids = TileIds::new();

        let mut max_cells = 0;
        for _ in 0..500 {
            let tile = gen.next_tile(9, &mut ids);
            max_cells = max_cells.max(tile.shape.cell_count());
        }
        // Pentominoes and hexominoes are in the pool at size 9
        assert!(max_cells >= 5, "expected large shapes, got max {max_cells}");
    }

    #[test]
    fn test_symmetric_shapes_never_dealt_mirrored() {
        // The O-4 square is symmetric; its mirror equals itself, so every
        // dealt square must equal the pool entry exactly.
        let square = Shape::from_matrix(&[&[1, 1], &[1, 1]]);
        let mut gen = TileGenerator::new(11);
        let mut ids = TileIds::new();

        for _ in 0..300 {
            let tile = gen.next_tile(6, &mut ids);
            if tile.shape.cell_count() == 4 && tile.shape.width() == 2 && tile.shape.height() == 2 {
                assert_eq!(tile.shape, square);
            }
        }
    }

    #[test]
    fn test_scripted_source_cycles() {
        let script = vec![
            (Shape::from_matrix(&[&[1]]), Color::Blue),
            (Shape::from_matrix(&[&[1, 1]]), Color::Red),
        ];
        let mut source = ScriptedTileSource::new(script);
        let mut ids = TileIds::new();

        let a = source.next_tile(6, &mut ids);
        let b = source.next_tile(6, &mut ids);
        let c = source.next_tile(6, &mut ids);

        assert_eq!(a.color, Color::Blue);
        assert_eq!(b.color, Color::Red);
        assert_eq!(c.color, Color::Blue);
        assert_eq!(c.id, TileId::new(3));
    }
}
