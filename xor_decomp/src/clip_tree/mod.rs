//! Hierarchical half-plane tree answering point in polygon queries for a decomposed ring.
mod clip_plane;
mod node;
mod tree;

#[cfg(feature = "serde")]
mod aabb_serde;

pub use clip_plane::*;
pub use node::*;
pub use tree::*;
