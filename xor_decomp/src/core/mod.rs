//! Core module has the numeric traits and the small vector/orientation math shared by the ring,
//! decomposition, and clip plane tree modules.
pub mod math;
pub mod traits;
