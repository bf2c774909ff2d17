//! The engine: commands, pipelines, resize state machine, events.

pub mod direction;
pub mod events;
pub mod game;
pub mod resize;
pub mod schedule;

pub use direction::Direction;
pub use events::GameEvent;
pub use game::GameEngine;
pub use resize::{doomed_border, expanded, shrunk};
pub use schedule::Pending;
