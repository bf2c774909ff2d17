//! Pending continuations.
//!
//! The pipeline's settle delays are modeled as explicit parked
//! continuations instead of timers racing state resets: after a command,
//! the engine may leave a `Pending` value behind, and the host calls
//! `GameEngine::settle` once `Pending::delay` has elapsed. `start_game`
//! drops any parked continuation, so a stale timer can never mutate a
//! superseded game.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config;

/// The parked continuation of a pipeline in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pending {
    /// Cleared cells are animating out; on settle they are emptied, groups
    /// revalidated, the grid grown, and the next tile dealt.
    ClearSettle,

    /// A clear-less placement is settling; on settle the placement
    /// highlight drops and the next tile is dealt.
    PlaceSettle,

    /// The stuck warning is showing; on settle the grid shrinks by one, or
    /// the game ends if it is already at the minimum size.
    ShrinkDecision,

    /// Salvaged validated cells are animating out ahead of a shrink; on
    /// settle they are emptied and the border warning begins.
    ValidatedClearSettle,

    /// Border cells are marked for destruction; on settle the grid is
    /// rebuilt one size smaller.
    ShrinkSettle,
}

impl Pending {
    /// How long the host should wait before calling `settle`.
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Pending::ClearSettle | Pending::PlaceSettle | Pending::ValidatedClearSettle => {
                config::SETTLE_DELAY
            }
            Pending::ShrinkDecision => config::PRE_SHRINK_DELAY,
            Pending::ShrinkSettle => config::SHRINK_WARNING_DURATION,
        }
    }
}
