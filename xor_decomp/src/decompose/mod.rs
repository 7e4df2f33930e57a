//! XOR decomposition of a ring into convex fragments.
//!
//! A ring is swept from its lowest vertex into a convex chain, every shortcut the chain takes
//! across the ring is swept again with the opposite turning direction, and so on. The fragments
//! found combine by even-odd parity into the ring's even-odd interior. The fragments are recorded
//! in a sentinel encoded [IndexTrace] and the matching half-planes in a
//! [ClipPlaneTree](crate::clip_tree::ClipPlaneTree).
mod decomposer;
mod index_trace;
mod options;
mod sweep;

pub use decomposer::*;
pub use index_trace::*;
pub use options::*;
pub use sweep::*;
