use super::FragmentOrientation;
use crate::{
    core::{math::Vector2, traits::Real},
    ring::PointRing,
};

/// Rule set that produced a fragment chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SweepMode {
    /// Monotone chain scan popping only on reversed turns.
    Relaxed,
    /// Scan that also keeps every candidate within the fan about the start index.
    Strict,
    /// Triangle of the start index, its successor, and the end index.
    Triangle,
}

/// Convex chain found by sweeping one ring interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentChain {
    /// Ring indexes of the fragment, starting at the interval start.
    pub indexes: Vec<usize>,
    /// Turning direction of the fragment.
    pub orientation: FragmentOrientation,
    pub mode: SweepMode,
}

/// Sweep the ring interval `i0 -> i1` (`i0 == i1` for one full revolution) for a convex chain
/// turning in the `orientation` direction.
///
/// The chain always starts at `i0`. For an interval it also ends at `i1` and holds at least one
/// interior index whenever the interval has one, so every shortcut left in the chain spans a
/// strictly shorter interval. Chains that fail [is_convex_chain] are swept again in strict mode,
/// and if that also fails the fragment is the triangle of `i0`, its successor, and the last
/// index of the interval.
pub fn sweep_fragment<T>(
    ring: &PointRing<T>,
    i0: usize,
    i1: usize,
    orientation: FragmentOrientation,
    collinear_eps: T,
) -> FragmentChain
where
    T: Real,
{
    let sign = orientation.sign::<T>();
    let full_revolution = i0 == i1;
    let has_interior = full_revolution || ring.next_wrapping_index(i0) != i1;
    let usable = |chain: &[usize]| {
        let collapsed = has_interior && !full_revolution && chain.len() == 2;
        !collapsed && is_convex_chain(ring, chain, sign, collinear_eps)
    };

    let relaxed = sweep_chain(ring, i0, i1, sign, collinear_eps, false);
    if usable(&relaxed) {
        return FragmentChain {
            indexes: relaxed,
            orientation,
            mode: SweepMode::Relaxed,
        };
    }

    let strict = sweep_chain(ring, i0, i1, sign, collinear_eps, true);
    if usable(&strict) {
        return FragmentChain {
            indexes: strict,
            orientation,
            mode: SweepMode::Strict,
        };
    }

    let j = ring.next_wrapping_index(i0);
    let last = if full_revolution {
        ring.prev_wrapping_index(i0)
    } else {
        i1
    };

    let turn = ring.orientation(i0, j, last);
    let orientation = if turn > collinear_eps {
        FragmentOrientation::CounterClockwise
    } else if turn < -collinear_eps {
        FragmentOrientation::Clockwise
    } else {
        orientation
    };

    FragmentChain {
        indexes: vec![i0, j, last],
        orientation,
        mode: SweepMode::Triangle,
    }
}

/// Stack scan of the interval `i0 -> i1`.
///
/// Candidates are visited in ring order. Before a candidate is pushed the stack top is popped
/// while it makes a turn against `sign`. In `strict` mode the top is also popped while the
/// candidate lies behind it as seen from `i0`, and the stack is cut back to `i0` when the
/// candidate lies behind the first chain edge. For a full revolution `i0` is the last candidate,
/// it is only used to pop the stack.
fn sweep_chain<T>(
    ring: &PointRing<T>,
    i0: usize,
    i1: usize,
    sign: T,
    eps: T,
    strict: bool,
) -> Vec<usize>
where
    T: Real,
{
    let full_revolution = i0 == i1;
    let reversed = |a: usize, b: usize, c: usize| sign * ring.orientation(a, b, c) < -eps;

    let mut stack = vec![i0, ring.next_wrapping_index(i0)];
    if !full_revolution && stack[1] == i1 {
        return stack;
    }

    let mut k = ring.next_wrapping_index(stack[1]);
    loop {
        let closing = full_revolution && k == i0;
        if strict && !closing && reversed(i0, stack[1], k) {
            stack.truncate(1);
        }

        while stack.len() >= 2 {
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            if !(reversed(below, top, k) || (strict && reversed(i0, top, k))) {
                break;
            }
            stack.pop();
        }

        if closing {
            break;
        }

        stack.push(k);
        if k == i1 {
            break;
        }

        k = ring.next_wrapping_index(k);
    }

    stack
}

/// Returns `true` if `chain` is a closed convex polygon turning with `sign`.
///
/// Edges shorter than `eps` are ignored. Every turn between consecutive remaining edges must
/// agree with `sign` (within `eps`), a turn within `eps` of zero must not reverse direction, and
/// the edge directions must make exactly one revolution. Collinear and repeated points pass,
/// spikes and chains that wind around more than once do not. Chains with fewer than 3 distinct
/// edge directions are degenerate and always pass.
///
/// # Examples
///
/// ```
/// # use xor_decomp::ring;
/// # use xor_decomp::decompose::is_convex_chain;
/// let r = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
/// assert!(is_convex_chain(&r, &[0, 1, 2, 3], 1.0, 1e-8));
/// assert!(!is_convex_chain(&r, &[0, 1, 2, 3], -1.0, 1e-8));
/// assert!(!is_convex_chain(&r, &[0, 2, 1, 3], 1.0, 1e-8));
/// ```
pub fn is_convex_chain<T>(ring: &PointRing<T>, chain: &[usize], sign: T, eps: T) -> bool
where
    T: Real,
{
    let m = chain.len();
    let directions: Vec<Vector2<T>> = (0..m)
        .map(|a| ring[chain[(a + 1) % m]] - ring[chain[a]])
        .filter(|d| d.length() >= eps)
        .collect();

    let r = directions.len();
    if r < 3 {
        return true;
    }

    let mut total_turn = T::zero();
    for a in 0..r {
        let d1 = directions[a];
        let d2 = directions[(a + 1) % r];
        let cross = sign * d1.perp_dot(d2);
        let dot = d1.dot(d2);
        if !cross.fuzzy_non_negative_eps(eps) || (cross <= eps && dot < T::zero()) {
            return false;
        }
        total_turn = total_turn + cross.atan2(dot);
    }

    let pi = T::from(std::f64::consts::PI).unwrap();
    (total_turn - T::two() * pi).abs() < pi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring;

    const EPS: f64 = 1e-8;

    #[test]
    fn convex_ring_is_one_chain() {
        let r = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        let chain = sweep_fragment(&r, 0, 0, FragmentOrientation::CounterClockwise, EPS);
        assert_eq!(chain.indexes, vec![0, 1, 2, 3]);
        assert_eq!(chain.mode, SweepMode::Relaxed);
    }

    #[test]
    fn reflex_vertex_is_skipped() {
        // square with a notch at index 2
        let r = ring![(0.0, 0.0), (4.0, 0.0), (2.0, 1.0), (4.0, 4.0), (0.0, 4.0)];
        let chain = sweep_fragment(&r, 0, 0, FragmentOrientation::CounterClockwise, EPS);
        assert_eq!(chain.indexes, vec![0, 1, 3, 4]);
        assert_eq!(chain.orientation, FragmentOrientation::CounterClockwise);
    }

    #[test]
    fn interval_keeps_end_points() {
        let r = ring![(0.0, 0.0), (4.0, 0.0), (2.0, 1.0), (4.0, 4.0), (0.0, 4.0)];
        let chain = sweep_fragment(&r, 1, 3, FragmentOrientation::Clockwise, EPS);
        assert_eq!(chain.indexes, vec![1, 2, 3]);
        assert!(is_convex_chain(&r, &chain.indexes, -1.0, EPS));
    }

    #[test]
    fn collapsed_interval_falls_back_to_triangle() {
        // interval 1 -> 3 turns counter clockwise but a clockwise fragment is requested
        let r = ring![(0.0, 0.0), (4.0, 0.0), (6.0, 2.0), (4.0, 4.0), (0.0, 4.0)];
        let chain = sweep_fragment(&r, 1, 3, FragmentOrientation::Clockwise, EPS);
        assert_eq!(chain.indexes, vec![1, 2, 3]);
        assert_eq!(chain.mode, SweepMode::Triangle);
        assert_eq!(chain.orientation, FragmentOrientation::CounterClockwise);
    }

    #[test]
    fn collinear_points_are_kept() {
        let r = ring![(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0)];
        let chain = sweep_fragment(&r, 0, 0, FragmentOrientation::CounterClockwise, EPS);
        assert_eq!(chain.indexes, vec![0, 1, 2, 3]);
        assert!(is_convex_chain(&r, &chain.indexes, 1.0, EPS));
    }

    #[test]
    fn double_loop_is_not_convex() {
        let r = ring![
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0)
        ];
        assert!(is_convex_chain(&r, &[0, 1, 2, 3], 1.0, EPS));
        assert!(!is_convex_chain(&r, &[0, 1, 2, 3, 4, 5, 6, 7], 1.0, EPS));
        let chain = sweep_fragment(&r, 0, 0, FragmentOrientation::CounterClockwise, EPS);
        assert!(is_convex_chain(&r, &chain.indexes, 1.0, EPS));
        assert_ne!(chain.mode, SweepMode::Relaxed);
    }

    #[test]
    fn spike_is_not_convex() {
        let r = ring![(0.0, 0.0), (4.0, 0.0), (2.0, 0.0), (2.0, 3.0)];
        assert!(!is_convex_chain(&r, &[0, 1, 2, 3], 1.0, EPS));
        // repeated point is ignored
        let r = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 0.0), (2.0, 3.0)];
        assert!(is_convex_chain(&r, &[0, 1, 2, 3], 1.0, EPS));
    }

    #[test]
    fn segment_chain_is_degenerate() {
        let r = ring![(0.0, 0.0), (4.0, 0.0), (2.0, 0.0)];
        assert!(is_convex_chain(&r, &[0, 1], 1.0, EPS));
        assert!(is_convex_chain(&r, &[0, 1, 0], -1.0, EPS));
    }
}
