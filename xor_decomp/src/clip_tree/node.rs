use super::ClipPlane;
use crate::{
    core::{
        math::{next_wrapping_index, Vector2},
        traits::Real,
    },
    decompose::FragmentOrientation,
    ring::PointRing,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boolean role of a clip tree node relative to its parent.
///
/// Children of even depth fragments are `Difference` (pockets cut out of the parent), children of
/// odd depth fragments are `Union` (islands added back). The root is always `Difference`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    Union,
    Difference,
}

/// Node of a [ClipPlaneTree](super::ClipPlaneTree), one per decomposition fragment.
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
pub struct ClipTreeNode<T = f64> {
    /// Half-planes of the fragment edges (including the closing edge), inside is the fragment
    /// interior.
    pub planes: Vec<ClipPlane<T>>,
    pub node_type: NodeType,
    /// Child nodes in the order their fragments appear in the trace.
    pub children: Vec<ClipTreeNode<T>>,
    /// Extents of this node's fragment and all of its descendants.
    #[cfg_attr(feature = "serde", serde(with = "crate::clip_tree::aabb_serde"))]
    pub extents: AABB<T>,
}

impl<T> ClipTreeNode<T>
where
    T: Real,
{
    /// Create a childless node from the fragment `indexes` of `ring`.
    ///
    /// One plane is created per fragment edge including the closing edge from the last index
    /// back to the first, edges shorter than `plane_eps` are skipped. A fragment of two indexes
    /// gets two opposing planes (a band of zero width), a single index fragment gets none.
    ///
    /// # Panics
    ///
    /// Panics if `indexes` is empty or holds an index out of bounds for `ring`.
    pub fn from_fragment(
        ring: &PointRing<T>,
        indexes: &[usize],
        orientation: FragmentOrientation,
        node_type: NodeType,
        plane_eps: T,
    ) -> Self {
        let n = indexes.len();
        let first = ring[indexes[0]];
        let mut extents = AABB::new(first.x, first.y, first.x, first.y);
        let mut planes = Vec::with_capacity(n);
        for i in 0..n {
            let start = ring[indexes[i]];
            expand_to_point(&mut extents, start);
            if n < 2 {
                continue;
            }

            let end = ring[indexes[next_wrapping_index(i, n)]];
            if let Some(plane) = ClipPlane::from_edge(start, end, orientation, plane_eps) {
                planes.push(plane);
            }
        }

        ClipTreeNode {
            planes,
            node_type,
            children: Vec::new(),
            extents,
        }
    }

    /// Add `child` to the end of the children, growing the extents to cover it.
    pub fn add_child(&mut self, child: ClipTreeNode<T>) {
        expand_to_aabb(&mut self.extents, &child.extents);
        self.children.push(child);
    }

    /// Returns `true` if `point` is inside or on every plane of this node's fragment, ignoring
    /// children. A node with no planes contains nothing.
    pub fn fragment_contains(&self, point: Vector2<T>, plane_eps: T) -> bool {
        !self.planes.is_empty() && self.planes.iter().all(|p| p.contains_eps(point, plane_eps))
    }

    /// Even-odd classification of `point` against the subtree rooted at this node.
    ///
    /// The result is the fragment test toggled once for every child subtree that reports
    /// inside. With pockets that lie within their parent and do not overlap each other this is
    /// the same as "inside the fragment and not inside any `Difference` child" (or "inside the
    /// fragment" for `Union` islands), the toggling form also holds when fragments overlap in
    /// self intersecting rings. Subtrees whose extents do not hold `point` are skipped.
    pub fn is_point_in_or_on(&self, point: Vector2<T>, plane_eps: T) -> bool {
        if !extents_contain(&self.extents, point, plane_eps) {
            return false;
        }

        let mut inside = self.fragment_contains(point, plane_eps);
        for child in &self.children {
            if child.is_point_in_or_on(point, plane_eps) {
                inside = !inside;
            }
        }

        inside
    }

    /// Number of nodes in the subtree rooted at this node (including this node).
    pub fn node_count(&self) -> usize {
        self.iter_preorder().count()
    }

    /// Number of levels in the subtree rooted at this node, a node with no children has depth 1.
    pub fn max_depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| c.max_depth())
            .max()
            .unwrap_or(0)
    }

    /// Iterate over the subtree rooted at this node in pre-order (node, then each child subtree
    /// in order). This is the same order the fragments appear in the trace.
    #[inline]
    pub fn iter_preorder(&self) -> PreorderIter<'_, T> {
        PreorderIter { stack: vec![self] }
    }
}

/// Pre-order iterator over clip tree nodes.
#[derive(Debug, Clone)]
pub struct PreorderIter<'a, T> {
    pub(super) stack: Vec<&'a ClipTreeNode<T>>,
}

impl<'a, T> Iterator for PreorderIter<'a, T> {
    type Item = &'a ClipTreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[inline]
fn expand_to_point<T>(extents: &mut AABB<T>, point: Vector2<T>)
where
    T: Real,
{
    if point.x < extents.min_x {
        extents.min_x = point.x;
    }
    if point.x > extents.max_x {
        extents.max_x = point.x;
    }
    if point.y < extents.min_y {
        extents.min_y = point.y;
    }
    if point.y > extents.max_y {
        extents.max_y = point.y;
    }
}

#[inline]
fn expand_to_aabb<T>(extents: &mut AABB<T>, other: &AABB<T>)
where
    T: Real,
{
    expand_to_point(extents, Vector2::new(other.min_x, other.min_y));
    expand_to_point(extents, Vector2::new(other.max_x, other.max_y));
}

#[inline]
fn extents_contain<T>(extents: &AABB<T>, point: Vector2<T>, eps: T) -> bool
where
    T: Real,
{
    point.x >= extents.min_x - eps
        && point.x <= extents.max_x + eps
        && point.y >= extents.min_y - eps
        && point.y <= extents.max_y + eps
}
