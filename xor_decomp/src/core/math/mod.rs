//! Core/common math functions for working with 2D points, turning direction, and cyclic indexes.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{vec2, Vector2};
