//! The board and the pure rules that read it: placement, lines, groups.

pub mod board;
pub mod groups;
pub mod lines;
pub mod placement;

pub use board::Grid;
pub use groups::update_validated_groups;
pub use lines::{find_completed_lines, placement_points, preview_line_clears, LineScan};
pub use placement::{
    can_place, can_place_anywhere, can_place_at_least_one, can_place_in_any_rotation,
};
