//! Small helpers shared by engine subsystems.

mod color_index;
mod pow2;
mod direction;

pub use color_index::{color_from_index, index_from_color};
pub use direction::direction_vector;
pub use pow2::{nearest_pow2, next_pow2};
