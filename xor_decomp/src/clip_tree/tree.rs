use super::{ClipTreeNode, PreorderIter};
use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clip plane tree built by decomposing a ring, classifies points against the ring's even-odd
/// interior using only the half-planes of the fragments.
///
/// The tree is empty (no root) when the ring decomposed had fewer than 3 vertexes.
///
/// # Examples
///
/// ```
/// # use xor_decomp::ring;
/// # use xor_decomp::core::math::Vector2;
/// let ring = ring![(0.0, 0.0), (4.0, 4.0), (4.0, 0.0), (0.0, 4.0)];
/// let tree = ring.xor_decompose().tree;
/// assert!(tree.is_point_in_or_on(Vector2::new(1.0, 2.0)));
/// assert!(tree.is_point_in_or_on(Vector2::new(3.0, 2.0)));
/// assert!(!tree.is_point_in_or_on(Vector2::new(2.0, 1.0)));
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        rename_all = "camelCase",
        bound(
            serialize = "T: Real + Serialize",
            deserialize = "T: Real + Deserialize<'de>"
        )
    )
)]
#[derive(Debug, Clone)]
pub struct ClipPlaneTree<T = f64> {
    root: Option<ClipTreeNode<T>>,
    plane_eps: T,
}

impl<T> ClipPlaneTree<T>
where
    T: Real,
{
    /// Create a tree from a `root` node, `plane_eps` is the tolerance used by queries.
    #[inline]
    pub fn new(root: Option<ClipTreeNode<T>>, plane_eps: T) -> Self {
        ClipPlaneTree { root, plane_eps }
    }

    /// Create an empty tree that contains no points.
    #[inline]
    pub fn empty(plane_eps: T) -> Self {
        Self::new(None, plane_eps)
    }

    #[inline]
    pub fn root(&self) -> Option<&ClipTreeNode<T>> {
        self.root.as_ref()
    }

    #[inline]
    pub fn plane_eps(&self) -> T {
        self.plane_eps
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if `point` is inside (or on the boundary of) the even-odd interior of the
    /// ring decomposed.
    ///
    /// For points not on a ring edge this matches [PointRing::even_odd_contains]. Points on an
    /// edge may classify either way. An empty tree returns `false`.
    ///
    /// [PointRing::even_odd_contains]: crate::ring::PointRing::even_odd_contains
    #[inline]
    pub fn is_point_in_or_on(&self, point: Vector2<T>) -> bool {
        self.root
            .as_ref()
            .map_or(false, |root| root.is_point_in_or_on(point, self.plane_eps))
    }

    /// Total number of nodes (equal to the number of fragments in the matching trace).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.node_count())
    }

    /// Number of levels in the tree, 0 if empty.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.max_depth())
    }

    /// Iterate over all nodes in pre-order, node `i` corresponds to fragment `i` of the trace.
    #[inline]
    pub fn iter_preorder(&self) -> PreorderIter<'_, T> {
        PreorderIter {
            stack: self.root.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_contains_nothing() {
        let tree = ClipPlaneTree::<f64>::empty(1e-8);
        assert!(tree.is_empty());
        assert!(!tree.is_point_in_or_on(Vector2::new(0.0, 0.0)));
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.max_depth(), 0);
        assert_eq!(tree.iter_preorder().count(), 0);
    }
}
