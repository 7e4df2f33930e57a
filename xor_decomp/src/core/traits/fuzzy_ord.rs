use super::FuzzyEq;

/// Fuzzy ordering used for the sign tests of the decomposition.
///
/// A value that is within epsilon of zero counts as both non-negative and non-positive, this is
/// what lets collinear triples pass the convexity checks in either turning direction.
pub trait FuzzyOrd: FuzzyEq {
    /// Returns `true` if `self` is not negative beyond `fuzzy_epsilon`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use xor_decomp::core::traits::*;
    /// assert!(0.0f64.fuzzy_non_negative_eps(1e-8));
    /// assert!((-1e-9f64).fuzzy_non_negative_eps(1e-8));
    /// assert!(!(-1e-3f64).fuzzy_non_negative_eps(1e-8));
    /// ```
    fn fuzzy_non_negative_eps(&self, fuzzy_epsilon: Self) -> bool;
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_non_negative_eps(&self, fuzzy_epsilon: $ty) -> bool {
                *self >= -fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
