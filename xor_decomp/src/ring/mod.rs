//! Point ring type: the ordered, implicitly closed vertex list that gets decomposed.
mod point_ring;

pub use point_ring::*;
