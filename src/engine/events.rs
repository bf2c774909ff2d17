//! Engine events for presentation and audio collaborators.
//!
//! The engine pushes an event at every point where a host would play a
//! sound or start an animation; the host drains the queue after each
//! command and reacts however it likes. The engine never depends on what
//! consumers do with them.

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Something observable happened inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile was stamped onto the grid.
    TilePlaced { tile_id: TileId },

    /// Completed lines were detected and scored. `lines` scales the clear
    /// cue (one chord per line, say).
    LinesCleared { lines: usize, points: u32 },

    /// Group validation marked new groups. `groups` scales the cue.
    GroupsValidated { groups: usize },

    /// The current tile was rotated 90 degrees clockwise.
    TileRotated,

    /// The current tile was mirrored horizontally.
    TileMirrored,

    /// Current and next tile traded places.
    TilesSwapped,

    /// The grid grew by one after a clear.
    GridExpanded { new_size: usize },

    /// The grid shrank by one after a failed stuck-check.
    GridShrunk { new_size: usize },

    /// The stuck-check failed; a shrink (or game over) is imminent.
    ShrinkWarning,

    /// Validated cells were salvaged for points at the start of a shrink.
    ValidatedCellsScored { cells: usize, points: u32 },

    /// The game ended.
    GameOver { score: u32 },
}
