use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold the tolerance parameters used when decomposing a ring.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DecomposeOptions<T> {
    /// Fuzzy comparison epsilon used when testing orientation signs during the sweep. Turns
    /// within this tolerance of zero are treated as collinear and do not pop the chain.
    pub collinear_eps: T,
    /// Fuzzy comparison epsilon used by the clip planes. A point is inside-or-on a plane if its
    /// signed distance is no less than `-plane_eps`, and fragment edges shorter than this are
    /// given no plane.
    pub plane_eps: T,
}

impl<T> DecomposeOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            collinear_eps: T::fuzzy_epsilon(),
            plane_eps: T::fuzzy_epsilon(),
        }
    }
}

impl<T> Default for DecomposeOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
