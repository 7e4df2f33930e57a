use super::{sweep_fragment, DecomposeOptions, FragmentOrientation, IndexTrace, SweepMode};
use crate::{
    clip_tree::{ClipPlaneTree, ClipTreeNode, NodeType},
    core::traits::Real,
    ring::PointRing,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of decomposing a ring, the fragment trace and the clip plane tree built with it.
///
/// Fragment `i` of `trace` is node `i` of `tree` in pre-order.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(
        serialize = "T: Real + Serialize",
        deserialize = "T: Real + Deserialize<'de>"
    ))
)]
#[derive(Debug, Clone)]
pub struct XorDecomposition<T = f64> {
    pub trace: IndexTrace,
    pub tree: ClipPlaneTree<T>,
}

impl<T> XorDecomposition<T>
where
    T: Real,
{
    /// Decomposition of a ring with fewer than 3 vertexes, no fragments and an empty tree.
    #[inline]
    pub fn empty(plane_eps: T) -> Self {
        XorDecomposition {
            trace: IndexTrace::new(),
            tree: ClipPlaneTree::empty(plane_eps),
        }
    }
}

/// Decompose `ring` using default options, see [decompose_opt].
#[inline]
pub fn decompose<T>(ring: &PointRing<T>) -> XorDecomposition<T>
where
    T: Real,
{
    decompose_opt(ring, &DecomposeOptions::default())
}

/// Decompose `ring` into convex fragments whose even-odd union is the ring's even-odd interior.
///
/// The sweep starts at [PointRing::start_index] turning in the direction of the ring at that
/// vertex (falling back to the sign of the ring's area when the start vertex is collinear). This
/// never fails, rings with fewer than 3 vertexes give an empty result and degenerate geometry
/// gives zero area fragments.
///
/// # Examples
///
/// ```
/// # use xor_decomp::ring;
/// # use xor_decomp::decompose::*;
/// # use xor_decomp::core::math::Vector2;
/// // self intersecting bowtie
/// let ring = ring![(0.0, 0.0), (4.0, 4.0), (4.0, 0.0), (0.0, 4.0)];
/// let result = decompose_opt(&ring, &DecomposeOptions::new());
/// assert_eq!(result.trace.as_slice(), &[0, 2, 3, -1, 0, 1, 2, -2]);
/// assert_eq!(result.tree.node_count(), 2);
/// assert!(result.tree.is_point_in_or_on(Vector2::new(3.0, 2.0)));
/// ```
pub fn decompose_opt<T>(ring: &PointRing<T>, options: &DecomposeOptions<T>) -> XorDecomposition<T>
where
    T: Real,
{
    let start = match ring.start_index() {
        Some(start) if ring.len() >= 3 => start,
        _ => {
            log::debug!("ring with {} vertexes has no interior", ring.len());
            return XorDecomposition::empty(options.plane_eps);
        }
    };

    debug_assert!(
        ring.len() <= i32::MAX as usize,
        "ring indexes must fit in the trace"
    );

    let depth = initial_depth(ring, start, options.collinear_eps);
    let mut decomposer = Decomposer {
        ring,
        options,
        trace: IndexTrace::new(),
    };

    let root = decomposer.visit(start, start, depth, NodeType::Difference);
    let trace = decomposer.trace;
    log::debug!(
        "decomposed ring with {} vertexes into {} fragments",
        ring.len(),
        trace.fragment_count()
    );

    XorDecomposition {
        trace,
        tree: ClipPlaneTree::new(Some(root), options.plane_eps),
    }
}

/// Depth parity of the outermost fragment, 0 for counter clockwise and 1 for clockwise.
fn initial_depth<T>(ring: &PointRing<T>, start: usize, eps: T) -> usize
where
    T: Real,
{
    let turn = ring.orientation(
        ring.prev_wrapping_index(start),
        start,
        ring.next_wrapping_index(start),
    );

    if turn > eps {
        0
    } else if turn < -eps {
        1
    } else if ring.signed_area() < T::zero() {
        1
    } else {
        0
    }
}

struct Decomposer<'a, T> {
    ring: &'a PointRing<T>,
    options: &'a DecomposeOptions<T>,
    trace: IndexTrace,
}

impl<'a, T> Decomposer<'a, T>
where
    T: Real,
{
    /// Sweep `i0 -> i1` at `depth`, record the fragment, then recurse on each shortcut.
    fn visit(&mut self, i0: usize, i1: usize, depth: usize, node_type: NodeType) -> ClipTreeNode<T> {
        let requested = if depth % 2 == 0 {
            FragmentOrientation::CounterClockwise
        } else {
            FragmentOrientation::Clockwise
        };

        let chain = sweep_fragment(self.ring, i0, i1, requested, self.options.collinear_eps);
        match chain.mode {
            SweepMode::Relaxed => {}
            SweepMode::Strict => {
                log::debug!("interval {i0} -> {i1} at depth {depth} needed the strict sweep")
            }
            SweepMode::Triangle => log::debug!(
                "interval {i0} -> {i1} at depth {depth} collapsed, using triangle {:?}",
                chain.indexes
            ),
        }

        log::trace!(
            "fragment {:?} {:?} at depth {depth}",
            chain.indexes,
            chain.orientation
        );

        self.trace.push_fragment(&chain.indexes, chain.orientation);
        let mut node = ClipTreeNode::from_fragment(
            self.ring,
            &chain.indexes,
            chain.orientation,
            node_type,
            self.options.plane_eps,
        );

        let child_type = if depth % 2 == 0 {
            NodeType::Difference
        } else {
            NodeType::Union
        };

        let m = chain.indexes.len();
        // full revolution also closes back to the start
        let pair_count = if i0 == i1 { m } else { m - 1 };
        for a in 0..pair_count {
            let j0 = chain.indexes[a];
            let j1 = chain.indexes[(a + 1) % m];
            if self.ring.next_wrapping_index(j0) != j1 {
                let child = self.visit(j0, j1, depth + 1, child_type);
                node.add_child(child);
            }
        }

        node
    }
}
