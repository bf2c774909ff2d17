//! Tile placement tests.
//!
//! Placement through the engine:
//! - Stamping color and tile id onto the grid
//! - Rejection of out-of-bounds, occupied, and mid-settle placements
//! - Rotation changing what fits
//! - The scoring preview queries

use tileburst::core::Color;
use tileburst::engine::{Direction, GameEngine, GameEvent};
use tileburst::persist::{MemoryStore, SavedCell, Snapshot};
use tileburst::tiles::{ScriptedTileSource, Shape};

fn engine(script: Vec<(Shape, Color)>) -> GameEngine {
    GameEngine::with_source(
        Box::new(ScriptedTileSource::new(script)),
        Box::new(MemoryStore::new()),
    )
}

fn snapshot(grid: Vec<Vec<SavedCell>>) -> Snapshot {
    let grid_size = grid.len();
    Snapshot {
        grid,
        grid_size,
        score: 0,
        current_tile: None,
        next_tile: None,
        is_game_over: false,
        direction: Direction::TopLeft,
    }
}

fn filled(color: Color) -> SavedCell {
    SavedCell {
        color: Some(color),
        tile_id: None,
        validated: false,
    }
}

/// Test that placing a tile stamps its color and id onto exactly the
/// filled cells of its shape.
#[test]
fn test_tile_stamps_color_and_id() {
    let l3 = Shape::from_matrix(&[&[1, 0], &[1, 1]]);
    let mut engine = engine(vec![(l3, Color::Red)]);
    let id = engine.current_tile().unwrap().id;

    assert!(engine.place_current_tile(2, 2));

    for (row, col) in [(2, 2), (3, 2), (3, 3)] {
        let cell = engine.grid().cell(row, col);
        assert_eq!(cell.color, Some(Color::Red));
        assert_eq!(cell.tile_id, Some(id));
    }
    // The empty corner of the L was not stamped
    assert!(!engine.grid().cell(2, 3).is_occupied());
    assert_eq!(engine.last_placed_tile_id(), Some(id));
    assert!(engine
        .drain_events()
        .contains(&GameEvent::TilePlaced { tile_id: id }));
}

/// Test that out-of-bounds and occupied positions are rejected without
/// touching state.
#[test]
fn test_rejects_out_of_bounds_and_occupied() {
    let i4 = Shape::from_matrix(&[&[1, 1, 1, 1]]);
    let mut engine = engine(vec![(i4, Color::Blue)]);

    assert!(engine.can_place_tile(0, 2));
    assert!(!engine.can_place_tile(0, 3));
    assert!(!engine.place_current_tile(0, 3));
    assert!(!engine.place_current_tile(-1, 0));
    assert_eq!(engine.grid().occupied_count(), 0);

    assert!(engine.place_current_tile(0, 0));
    engine.settle_all();

    // The next I-4 cannot overlap the first
    assert!(!engine.place_current_tile(0, 0));
    assert!(engine.place_current_tile(1, 0));
}

/// Test that rotating the current tile changes where it fits.
#[test]
fn test_rotation_changes_fit() {
    let i3 = Shape::from_matrix(&[&[1, 1, 1]]);
    let mut engine = engine(vec![(i3, Color::Green)]);

    // Horizontal I-3 sticks out of the right edge from column 5
    assert!(!engine.can_place_tile(3, 5));

    engine.rotate_current_tile();
    assert!(engine.can_place_tile(3, 5));
    assert!(engine.place_current_tile(3, 5));

    for row in [3, 4, 5] {
        assert!(engine.grid().cell(row, 5).is_occupied());
    }
}

/// Test that no placement is accepted while a settle is in flight.
#[test]
fn test_no_placement_while_settling() {
    let mut engine = engine(vec![(Shape::from_matrix(&[&[1]]), Color::Blue)]);

    assert!(engine.place_current_tile(0, 0));
    assert!(engine.pending().is_some());
    assert!(!engine.place_current_tile(1, 1));

    engine.settle_all();
    assert!(engine.place_current_tile(1, 1));
}

/// Test the pure preview queries: points and clearing cells for a
/// hypothetical placement, with nothing mutated.
#[test]
fn test_placement_preview_queries() {
    let mut grid = vec![vec![SavedCell::default(); 6]; 6];
    for col in 0..5 {
        grid[0][col] = filled(Color::Blue);
    }

    let mut engine = engine(vec![(Shape::from_matrix(&[&[1]]), Color::Blue)]);
    assert!(engine.restore_snapshot(snapshot(grid)));

    // Completing the row: 1 line at size 6 is worth 450
    assert_eq!(engine.placement_points(0, 5), 450);
    assert_eq!(engine.preview_line_clears(0, 5).len(), 6);

    // Occupied target scores nothing
    assert_eq!(engine.placement_points(0, 0), 0);
    // Valid placement that completes nothing scores nothing
    assert_eq!(engine.placement_points(3, 3), 0);

    // Previews are pure
    assert_eq!(engine.score(), 0);
    assert!(!engine.grid().cell(0, 5).is_occupied());
}
