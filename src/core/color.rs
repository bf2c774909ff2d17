//! Tile colors.
//!
//! The game uses exactly five colors. Line clears and group validation
//! both compare colors for equality; the engine never interprets them
//! beyond that, so presentation layers are free to theme them.

use serde::{Deserialize, Serialize};

/// One of the five tile colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
}

impl Color {
    /// All colors, in selection order.
    pub const ALL: [Color; 5] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Purple,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
        };
        write!(f, "{name}")
    }
}
