use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// The [IndexableNum] bound allows any real to be used in the [AABB](crate::AABB) extents that
/// rings and clip plane tree nodes carry.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
