//! Shrink state-machine tests.
//!
//! The stuck-check and shrink choreography through the engine:
//! - A stuck board warns, marks the doomed border, then shrinks
//! - Validated cells are salvaged for points before the shrink
//! - Being stuck at (or immediately after shrinking to) the minimum size
//!   ends the game
//! - Resolving the warning by placing a tile drops the imminent flag
//! - A finished game accepts no further commands

use std::time::Duration;

use tileburst::core::Color;
use tileburst::engine::{Direction, GameEngine, GameEvent, Pending};
use tileburst::persist::{MemoryStore, SavedCell, Snapshot};
use tileburst::tiles::{ScriptedTileSource, Shape};

fn o4_engine_with_store() -> (GameEngine, MemoryStore) {
    let store = MemoryStore::new();
    let engine = GameEngine::with_source(
        Box::new(ScriptedTileSource::new(vec![(
            Shape::from_matrix(&[&[1, 1], &[1, 1]]),
            Color::Purple,
        )])),
        Box::new(store.clone()),
    );
    (engine, store)
}

fn filled(color: Color) -> SavedCell {
    SavedCell {
        color: Some(color),
        tile_id: None,
        validated: false,
    }
}

/// Red/green checkerboard cell: never forms a single-color line or a
/// validatable group.
fn checker(row: usize, col: usize) -> SavedCell {
    if (row + col) % 2 == 0 {
        filled(Color::Red)
    } else {
        filled(Color::Green)
    }
}

fn snapshot(grid: Vec<Vec<SavedCell>>, score: u32) -> Snapshot {
    let grid_size = grid.len();
    Snapshot {
        grid,
        grid_size,
        score,
        current_tile: None,
        next_tile: None,
        is_game_over: false,
        direction: Direction::TopLeft,
    }
}

/// Test the full stuck pipeline on a board with no salvage: warning, border
/// marks, shrink, and the post-shrink stuck-check ending the game without a
/// second shrink.
#[test]
fn test_stuck_board_warns_then_shrinks() {
    // Full 6x6 except one cell: no 2x2 square fits in any rotation
    let mut grid = vec![vec![SavedCell::default(); 6]; 6];
    for row in 0..6 {
        for col in 0..6 {
            grid[row][col] = checker(row, col);
        }
    }
    grid[0][0] = SavedCell::default();

    let (mut engine, _) = o4_engine_with_store();
    assert!(engine.restore_snapshot(snapshot(grid, 0)));

    assert!(engine.is_shrink_imminent());
    assert_eq!(engine.pending(), Some(Pending::ShrinkDecision));
    assert_eq!(
        engine.pending().unwrap().delay(),
        Duration::from_millis(1000)
    );
    assert!(engine.drain_events().contains(&GameEvent::ShrinkWarning));

    engine.settle();
    assert!(engine.is_shrinking());
    assert!(!engine.is_shrink_imminent());
    assert_eq!(engine.pending(), Some(Pending::ShrinkSettle));
    // Top-left preserved: the doomed border is row 5 plus column 5
    let marked = engine
        .grid()
        .coords()
        .filter(|c| engine.grid().at(*c).shrinking)
        .count();
    assert_eq!(marked, 11);

    engine.settle();
    assert_eq!(engine.grid_size(), 5);
    assert_eq!(engine.direction(), Direction::TopRight);
    assert!(!engine.is_shrinking());

    // The smaller board is still stuck, so the game ends outright
    assert!(engine.is_game_over());
    let events = engine.drain_events();
    assert!(events.contains(&GameEvent::GridShrunk { new_size: 5 }));
    assert!(events.contains(&GameEvent::GameOver { score: 0 }));
}

/// Test that validated cells are cleared for points at the start of a
/// shrink, freeing enough room for the game to continue afterward.
#[test]
fn test_shrink_salvages_validated_cells() {
    let mut grid = vec![vec![SavedCell::default(); 6]; 6];
    for row in 0..6 {
        for col in 0..6 {
            grid[row][col] = checker(row, col);
        }
    }
    for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)] {
        grid[row][col] = filled(Color::Blue);
        grid[row][col].validated = true;
    }

    let (mut engine, _) = o4_engine_with_store();
    assert!(engine.restore_snapshot(snapshot(grid, 0)));
    // 6 cells * 15 * multiplier 3
    assert_eq!(engine.shrink_points_available(), 270);
    assert_eq!(engine.pending(), Some(Pending::ShrinkDecision));

    engine.settle();
    assert_eq!(engine.score(), 270);
    assert_eq!(engine.pending(), Some(Pending::ValidatedClearSettle));
    assert!(engine.drain_events().contains(&GameEvent::ValidatedCellsScored {
        cells: 6,
        points: 270
    }));

    engine.settle();
    // Salvaged cells are gone; border warning is up
    assert!(!engine.grid().cell(0, 0).is_occupied());
    assert_eq!(engine.pending(), Some(Pending::ShrinkSettle));

    engine.settle();
    assert_eq!(engine.grid_size(), 5);
    // The freed block leaves room for the 2x2, so play continues
    assert!(!engine.is_game_over());
    assert_eq!(engine.pending(), None);
    assert_eq!(engine.grid().validated_count(), 0);
}

/// Test that being stuck at the minimum size ends the game instead of
/// shrinking, and the final score feeds the best score.
#[test]
fn test_stuck_at_min_size_ends_game() {
    let mut grid = vec![vec![SavedCell::default(); 4]; 4];
    for row in 0..4 {
        for col in 0..4 {
            grid[row][col] = checker(row, col);
        }
    }

    let (mut engine, store) = o4_engine_with_store();
    assert!(engine.restore_snapshot(snapshot(grid, 120)));
    assert_eq!(engine.pending(), Some(Pending::ShrinkDecision));

    engine.settle();
    assert!(engine.is_game_over());
    assert!(!engine.is_shrink_imminent());
    assert_eq!(engine.grid_size(), 4);
    assert!(engine
        .drain_events()
        .contains(&GameEvent::GameOver { score: 120 }));
    assert_eq!(engine.best_score(), 120);
    assert_eq!(store.best_score(), Some(120));
}

/// Test that mirroring the current tile into a fit during the warning
/// window resolves the stuck state: the placement supersedes the parked
/// shrink, and the imminent flag drops once the next deal fits somewhere.
#[test]
fn test_resolved_warning_drops_imminent_flag() {
    let mut grid = vec![vec![SavedCell::default(); 6]; 6];
    for row in 0..6 {
        for col in 0..6 {
            grid[row][col] = checker(row, col);
        }
    }
    // Free cells shaped exactly like the mirrored S, plus one isolated cell
    for (row, col) in [(0, 0), (0, 1), (1, 1), (1, 2), (5, 5)] {
        grid[row][col] = SavedCell::default();
    }

    let s4 = Shape::from_matrix(&[&[0, 1, 1], &[1, 1, 0]]);
    // The constructor's start_game deals the first two entries before the
    // snapshot is restored; the second pair is the restored deal.
    let mut engine = GameEngine::with_source(
        Box::new(ScriptedTileSource::new(vec![
            (s4.clone(), Color::Purple),
            (s4.clone(), Color::Purple),
            (s4.clone(), Color::Purple),
            (s4, Color::Purple),
            (Shape::from_matrix(&[&[1]]), Color::Blue),
        ])),
        Box::new(MemoryStore::new()),
    );
    assert!(engine.restore_snapshot(snapshot(grid, 0)));
    // No rotation of the S reaches the mirrored hole, so the warning is up
    assert!(engine.is_shrink_imminent());
    assert_eq!(engine.pending(), Some(Pending::ShrinkDecision));

    engine.mirror_current_tile();
    assert!(engine.place_current_tile(0, 0));
    assert_eq!(engine.pending(), Some(Pending::PlaceSettle));

    // The freshly dealt single cell fits at (5, 5): the warning resolves
    engine.settle();
    assert!(!engine.is_shrink_imminent());
    assert!(engine.pending().is_none());
    assert!(!engine.is_game_over());
}

/// Test that once the game is over, no command mutates score, grid, or the
/// tile pair, and nothing new is emitted.
#[test]
fn test_game_over_freezes_state() {
    let mut grid = vec![vec![SavedCell::default(); 4]; 4];
    for row in 0..4 {
        for col in 0..4 {
            grid[row][col] = checker(row, col);
        }
    }

    let mut engine = GameEngine::with_source(
        Box::new(ScriptedTileSource::new(vec![(
            Shape::from_matrix(&[&[1, 0], &[1, 1]]),
            Color::Purple,
        )])),
        Box::new(MemoryStore::new()),
    );
    assert!(engine.restore_snapshot(snapshot(grid, 77)));
    engine.settle_all();
    assert!(engine.is_game_over());

    let grid_before = engine.grid().clone();
    let tiles_before = (
        engine.current_tile().cloned(),
        engine.next_tile().cloned(),
    );
    engine.drain_events();

    assert!(!engine.place_current_tile(0, 0));
    engine.rotate_current_tile();
    engine.mirror_current_tile();
    engine.swap_tiles();
    engine.settle();
    engine.settle_all();

    assert_eq!(engine.score(), 77);
    assert_eq!(engine.grid(), &grid_before);
    assert_eq!(
        (engine.current_tile().cloned(), engine.next_tile().cloned()),
        tiles_before
    );
    assert!(engine.drain_events().is_empty());
    assert!(engine.is_game_over());
}
