//! Convex XOR decomposition of arbitrary closed polygons and a clip plane tree for classifying
//! points against them.
//!
//! A [PointRing](ring::PointRing) (which may be self intersecting or wound more than once) is
//! decomposed into convex fragments recorded in a sentinel encoded
//! [IndexTrace](decompose::IndexTrace). The fragments combine by even-odd parity into the ring's
//! even-odd interior, and the [ClipPlaneTree](clip_tree::ClipPlaneTree) built alongside answers
//! point in polygon queries using only the fragment half-planes.
//!
//! # Examples
//!
//! ```
//! use xor_decomp::{core::math::Vector2, ring};
//!
//! let ring = ring![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (5.0, 2.0), (0.0, 10.0)];
//! let result = ring.xor_decompose();
//! assert_eq!(result.trace.fragment_count(), result.tree.node_count());
//! assert!(result.tree.is_point_in_or_on(Vector2::new(5.0, 1.0)));
//! assert!(!result.tree.is_point_in_or_on(Vector2::new(5.0, 5.0)));
//! ```
extern crate static_aabb2d_index;

#[macro_use]
mod macros;
pub mod clip_tree;
pub mod core;
pub mod decompose;
pub mod error;
pub mod ring;

pub use static_aabb2d_index::AABB;

pub use crate::clip_tree::ClipPlaneTree;
pub use crate::decompose::{decompose, decompose_opt, DecomposeOptions, XorDecomposition};
pub use crate::error::TraceError;
