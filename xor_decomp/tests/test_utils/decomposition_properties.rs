use xor_decomp::{
    core::math::{dist_squared, line_seg_closest_point, Vector2},
    decompose::{FragmentOrientation, IndexTrace},
    ring::PointRing,
    XorDecomposition,
};

/// Distance from an edge within which sample points are not classified, points on edges may go
/// either way.
pub const EDGE_CLEARANCE: f64 = 1e-5;

/// Tolerance used when checking fragment convexity.
pub const TURN_EPS: f64 = 1e-6;

/// Crossing number point in polygon test, independent of the winding number code in the crate.
pub fn reference_even_odd(ring: &PointRing, point: Vector2) -> bool {
    let n = ring.len();
    let mut inside = false;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x {
                inside = !inside;
            }
        }
    }

    inside
}

/// Every edge of the ring plus every edge of every fragment (shortcuts included).
pub fn all_edges(ring: &PointRing, trace: &IndexTrace) -> Vec<(Vector2, Vector2)> {
    let mut edges: Vec<_> = ring.iter_edges().collect();
    for fragment in trace.iter_fragments() {
        let m = fragment.len();
        for i in 0..m {
            edges.push((
                ring[fragment.index_at(i)],
                ring[fragment.index_at((i + 1) % m)],
            ));
        }
    }

    edges
}

pub fn near_any_edge(edges: &[(Vector2, Vector2)], point: Vector2, clearance: f64) -> bool {
    edges.iter().any(|&(a, b)| {
        dist_squared(line_seg_closest_point(a, b, point), point) < clearance * clearance
    })
}

/// Grid of sample points covering the ring extents (padded by one cell), offset so sample points
/// rarely land on integer coordinates.
pub fn sample_grid(ring: &PointRing, steps: usize) -> Vec<Vector2> {
    let extents = match ring.extents() {
        Some(e) => e,
        None => return Vec::new(),
    };

    let w = (extents.max_x - extents.min_x).max(1.0);
    let h = (extents.max_y - extents.min_y).max(1.0);
    let dx = w / steps as f64;
    let dy = h / steps as f64;
    let mut result = Vec::with_capacity((steps + 3) * (steps + 3));
    for i in 0..steps + 3 {
        for j in 0..steps + 3 {
            result.push(Vector2::new(
                extents.min_x - dx + (i as f64 + 0.3137) * dx,
                extents.min_y - dy + (j as f64 + 0.5711) * dy,
            ));
        }
    }

    result
}

/// Asserts the tree classifies every sample point (clear of all edges) the same as the even-odd
/// reference test.
pub fn assert_xor_equivalence(ring: &PointRing, result: &XorDecomposition, steps: usize) {
    let edges = all_edges(ring, &result.trace);
    for point in sample_grid(ring, steps) {
        if near_any_edge(&edges, point, EDGE_CLEARANCE) {
            continue;
        }

        let expected = reference_even_odd(ring, point);
        assert_eq!(
            result.tree.is_point_in_or_on(point),
            expected,
            "point: {:?}, trace: {:?}",
            point,
            result.trace.as_slice()
        );
    }
}

/// Asserts every ring index is listed without being inherited by exactly one fragment.
///
/// The root fragment owns all of its indexes, every other fragment inherits its first and last
/// index from the shortcut of its parent.
pub fn assert_ownership(ring: &PointRing, trace: &IndexTrace) {
    let mut owners = vec![0usize; ring.len()];
    for (fragment_index, fragment) in trace.iter_fragments().enumerate() {
        let m = fragment.len();
        let owned = if fragment_index == 0 {
            0..m
        } else {
            1..m.saturating_sub(1)
        };

        for position in owned {
            owners[fragment.index_at(position)] += 1;
        }
    }

    for (i, &count) in owners.iter().enumerate() {
        assert_eq!(
            count,
            1,
            "index {} owned {} times, trace: {:?}",
            i,
            count,
            trace.as_slice()
        );
    }
}

/// Asserts every fragment is convex and turns in the direction of its sentinel.
pub fn assert_orientation_consistency(ring: &PointRing, trace: &IndexTrace) {
    for fragment in trace.iter_fragments() {
        let m = fragment.len();
        if m < 3 {
            continue;
        }

        let sign = match fragment.orientation() {
            FragmentOrientation::CounterClockwise => 1.0,
            FragmentOrientation::Clockwise => -1.0,
        };

        let p = |i: usize| ring[fragment.index_at(i % m)];
        let turn = |a: Vector2, b: Vector2, c: Vector2| sign * (b - a).perp_dot(c - a);
        for i in 0..m {
            assert!(
                turn(p(i), p(i + 1), p(i + 2)) >= -TURN_EPS,
                "fragment {:?} turns against {:?}",
                fragment.indexes().collect::<Vec<_>>(),
                fragment.orientation()
            );
        }

        for i in 1..m - 1 {
            assert!(
                turn(p(0), p(i), p(i + 1)) >= -TURN_EPS,
                "fragment {:?} wraps around its first index",
                fragment.indexes().collect::<Vec<_>>()
            );
        }

        assert!(
            sign * fragment.signed_area(ring) >= -TURN_EPS,
            "fragment {:?} area has the wrong sign",
            fragment.indexes().collect::<Vec<_>>()
        );
    }
}

/// Asserts trace fragments and tree nodes line up one to one in pre-order.
pub fn assert_structural_symmetry(result: &XorDecomposition) {
    assert_eq!(result.trace.fragment_count(), result.tree.node_count());
    for (fragment, node) in result
        .trace
        .iter_fragments()
        .zip(result.tree.iter_preorder())
    {
        // a plane per edge unless the edge is degenerate
        assert!(node.planes.len() <= fragment.len().max(2));
    }
}

/// Runs all of the decomposition property checks on `ring`.
pub fn assert_decomposition_properties(ring: &PointRing, steps: usize) {
    let result = ring.xor_decompose();
    if ring.len() < 3 {
        assert!(result.trace.is_empty());
        assert!(result.tree.is_empty());
        return;
    }

    assert_ownership(ring, &result.trace);
    assert_orientation_consistency(ring, &result.trace);
    assert_structural_symmetry(&result);
    assert_xor_equivalence(ring, &result, steps);

    let area_sum = result.trace.total_signed_area(ring);
    let area = ring.signed_area();
    assert!(
        (area_sum - area).abs() <= 1e-6 * area.abs().max(1.0),
        "fragment area sum {} does not match ring area {}",
        area_sum,
        area
    );
}
