use crate::{
    core::{math::next_wrapping_index, traits::Real},
    error::TraceError,
    ring::PointRing,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel value terminating a counter clockwise fragment in an [IndexTrace].
pub const CCW_SENTINEL: i32 = -1;
/// Sentinel value terminating a clockwise fragment in an [IndexTrace].
pub const CW_SENTINEL: i32 = -2;

/// Turning direction of a convex fragment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FragmentOrientation {
    CounterClockwise,
    Clockwise,
}

impl FragmentOrientation {
    /// Orientation for a turning sign, positive (or zero) is counter clockwise.
    #[inline]
    pub fn from_sign<T>(sign: T) -> Self
    where
        T: Real,
    {
        if sign < T::zero() {
            FragmentOrientation::Clockwise
        } else {
            FragmentOrientation::CounterClockwise
        }
    }

    /// Returns `1` for counter clockwise and `-1` for clockwise.
    #[inline]
    pub fn sign<T>(self) -> T
    where
        T: Real,
    {
        match self {
            FragmentOrientation::CounterClockwise => T::one(),
            FragmentOrientation::Clockwise => -T::one(),
        }
    }

    /// Sentinel value that terminates a fragment with this orientation in an [IndexTrace].
    #[inline]
    pub fn sentinel(self) -> i32 {
        match self {
            FragmentOrientation::CounterClockwise => CCW_SENTINEL,
            FragmentOrientation::Clockwise => CW_SENTINEL,
        }
    }

    /// Orientation encoded by `sentinel`, `None` if the value is not a sentinel.
    #[inline]
    pub fn from_sentinel(sentinel: i32) -> Option<Self> {
        match sentinel {
            CCW_SENTINEL => Some(FragmentOrientation::CounterClockwise),
            CW_SENTINEL => Some(FragmentOrientation::Clockwise),
            _ => None,
        }
    }

    #[inline]
    pub fn inverted(self) -> Self {
        match self {
            FragmentOrientation::CounterClockwise => FragmentOrientation::Clockwise,
            FragmentOrientation::Clockwise => FragmentOrientation::CounterClockwise,
        }
    }
}

/// Sentinel encoded sequence of convex fragments produced by decomposition.
///
/// Non-negative entries are ring indexes, each run of indexes is terminated by [CCW_SENTINEL] or
/// [CW_SENTINEL] giving the turning direction of the fragment. Fragments list each index once
/// with no repeated closing index and appear in the pre-order of the decomposition recursion,
/// so fragment `i` corresponds to node `i` of the
/// [ClipPlaneTree::iter_preorder](crate::clip_tree::ClipPlaneTree::iter_preorder) iteration.
///
/// # Examples
///
/// ```
/// # use xor_decomp::decompose::*;
/// let trace = IndexTrace::try_from_raw(vec![0, 2, 3, -1, 0, 1, 2, -2], 4).unwrap();
/// assert_eq!(trace.fragment_count(), 2);
/// let second = trace.iter_fragments().nth(1).unwrap();
/// assert_eq!(second.orientation(), FragmentOrientation::Clockwise);
/// assert_eq!(second.indexes().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexTrace {
    data: Vec<i32>,
}

impl IndexTrace {
    #[inline]
    pub fn new() -> Self {
        IndexTrace { data: Vec::new() }
    }

    /// Validate raw sentinel encoded data against a ring with `vertex_count` vertexes.
    ///
    /// Every fragment must hold at least one index, every index must be less than
    /// `vertex_count`, every negative value must be a sentinel, and the data must end with a
    /// sentinel (empty data is a valid empty trace). Convexity of the fragments is not checked.
    pub fn try_from_raw(data: Vec<i32>, vertex_count: usize) -> Result<Self, TraceError> {
        let mut run_length = 0;
        for (position, &value) in data.iter().enumerate() {
            if value >= 0 {
                if value as usize >= vertex_count {
                    return Err(TraceError::IndexOutOfRange {
                        index: value,
                        vertex_count,
                    });
                }
                run_length += 1;
                continue;
            }

            if FragmentOrientation::from_sentinel(value).is_none() {
                return Err(TraceError::InvalidSentinel(value));
            }

            if run_length == 0 {
                return Err(TraceError::EmptyFragment { position });
            }

            run_length = 0;
        }

        if run_length != 0 {
            return Err(TraceError::UnterminatedFragment);
        }

        Ok(IndexTrace { data })
    }

    /// Append a fragment run terminated by the sentinel for `orientation`.
    pub(crate) fn push_fragment(&mut self, indexes: &[usize], orientation: FragmentOrientation) {
        debug_assert!(!indexes.is_empty(), "fragment must hold at least one index");
        self.data.extend(indexes.iter().map(|&i| i as i32));
        self.data.push(orientation.sentinel());
    }

    /// Raw sentinel encoded data.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Consume the trace returning the raw sentinel encoded data.
    #[inline]
    pub fn into_raw(self) -> Vec<i32> {
        self.data
    }

    /// Total number of entries, indexes and sentinels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of fragments (equal to the number of sentinels).
    pub fn fragment_count(&self) -> usize {
        self.data.iter().filter(|&&v| v < 0).count()
    }

    /// Iterate over the fragments in trace order.
    #[inline]
    pub fn iter_fragments(&self) -> FragmentIter<'_> {
        FragmentIter {
            remaining: &self.data,
        }
    }

    /// Signed area of every fragment in trace order, see [Fragment::signed_area].
    pub fn fragment_areas<T>(&self, ring: &PointRing<T>) -> Vec<T>
    where
        T: Real,
    {
        self.iter_fragments()
            .map(|fragment| fragment.signed_area(ring))
            .collect()
    }

    /// Sum of all the fragment signed areas.
    ///
    /// For a decomposition this equals [PointRing::signed_area] of the ring decomposed (up to
    /// floating point error) since each fragment subtracts exactly the area its shortcuts cut off.
    pub fn total_signed_area<T>(&self, ring: &PointRing<T>) -> T
    where
        T: Real,
    {
        self.iter_fragments()
            .fold(T::zero(), |acc, fragment| acc + fragment.signed_area(ring))
    }
}

/// Single fragment of an [IndexTrace].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    indexes: &'a [i32],
    orientation: FragmentOrientation,
}

impl<'a> Fragment<'a> {
    #[inline]
    pub fn orientation(&self) -> FragmentOrientation {
        self.orientation
    }

    /// Number of indexes in the fragment.
    #[inline]
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Ring indexes of the fragment in order.
    #[inline]
    pub fn indexes(&self) -> impl Iterator<Item = usize> + 'a {
        self.indexes.iter().map(|&i| i as usize)
    }

    /// Ring index at `position` within the fragment.
    #[inline]
    pub fn index_at(&self, position: usize) -> usize {
        self.indexes[position] as usize
    }

    /// Fan triangulation of the fragment about its first index.
    ///
    /// Yields `len - 2` triangles (none for fragments with fewer than 3 indexes). Since the
    /// fragment is convex every triangle has the fragment's orientation (or is degenerate).
    ///
    /// # Examples
    ///
    /// ```
    /// # use xor_decomp::decompose::*;
    /// let trace = IndexTrace::try_from_raw(vec![4, 5, 6, 7, -1], 8).unwrap();
    /// let fragment = trace.iter_fragments().next().unwrap();
    /// let triangles: Vec<_> = fragment.fan_triangles().collect();
    /// assert_eq!(triangles, vec![[4, 5, 6], [4, 6, 7]]);
    /// ```
    pub fn fan_triangles(&self) -> impl Iterator<Item = [usize; 3]> + 'a {
        let indexes = self.indexes;
        let count = indexes.len().saturating_sub(2);
        (0..count).map(move |i| {
            [
                indexes[0] as usize,
                indexes[i + 1] as usize,
                indexes[i + 2] as usize,
            ]
        })
    }

    /// Signed area of the fragment polygon using the shoelace formula, positive if counter
    /// clockwise.
    pub fn signed_area<T>(&self, ring: &PointRing<T>) -> T
    where
        T: Real,
    {
        let n = self.indexes.len();
        if n < 3 {
            return T::zero();
        }

        let mut double_area = T::zero();
        for i in 0..n {
            let v1 = ring[self.index_at(i)];
            let v2 = ring[self.index_at(next_wrapping_index(i, n))];
            double_area = double_area + v1.x * v2.y - v1.y * v2.x;
        }

        double_area / T::two()
    }
}

/// Iterator over the fragments of an [IndexTrace].
#[derive(Debug, Clone)]
pub struct FragmentIter<'a> {
    remaining: &'a [i32],
}

impl<'a> Iterator for FragmentIter<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.remaining.iter().position(|&v| v < 0)?;
        let orientation = FragmentOrientation::from_sentinel(self.remaining[end])?;
        let fragment = Fragment {
            indexes: &self.remaining[..end],
            orientation,
        };
        self.remaining = &self.remaining[end + 1..];
        Some(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_round_trip() {
        for orientation in [
            FragmentOrientation::CounterClockwise,
            FragmentOrientation::Clockwise,
        ] {
            assert_eq!(
                FragmentOrientation::from_sentinel(orientation.sentinel()),
                Some(orientation)
            );
            assert_eq!(orientation.inverted().inverted(), orientation);
        }
        assert_eq!(FragmentOrientation::from_sentinel(-3), None);
        assert_eq!(FragmentOrientation::from_sentinel(0), None);
    }

    #[test]
    fn sign_mapping() {
        assert_eq!(FragmentOrientation::CounterClockwise.sign::<f64>(), 1.0);
        assert_eq!(FragmentOrientation::Clockwise.sign::<f64>(), -1.0);
        assert_eq!(
            FragmentOrientation::from_sign(-1.0f64),
            FragmentOrientation::Clockwise
        );
        assert_eq!(
            FragmentOrientation::from_sign(0.0f64),
            FragmentOrientation::CounterClockwise
        );
    }

    #[test]
    fn push_fragment_appends_sentinel() {
        let mut trace = IndexTrace::new();
        trace.push_fragment(&[0, 1, 2], FragmentOrientation::CounterClockwise);
        trace.push_fragment(&[2, 3, 0], FragmentOrientation::Clockwise);
        assert_eq!(trace.as_slice(), &[0, 1, 2, -1, 2, 3, 0, -2]);
        assert_eq!(trace.fragment_count(), 2);
        assert_eq!(trace.len(), 8);
    }

    #[test]
    fn fan_of_short_fragment_is_empty() {
        let trace = IndexTrace::try_from_raw(vec![0, 1, -1, 2, -2], 3).unwrap();
        assert!(trace.iter_fragments().all(|f| f.fan_triangles().count() == 0));
    }
}
