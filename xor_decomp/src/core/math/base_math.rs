use super::Vector2;
use crate::core::traits::Real;

/// Returns twice the signed area of the triangle (`p0`, `p1`, `p2`).
///
/// Positive when the path `p0 -> p1 -> p2` turns counter clockwise at `p1`, negative when it
/// turns clockwise, and zero when the points are collinear. Only the x and y components are used.
///
/// # Examples
///
/// ```
/// # use xor_decomp::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(4.0, 0.0);
/// assert_eq!(orientation(p0, p1, Vector2::new(4.0, 4.0)), 16.0);
/// assert_eq!(orientation(p0, p1, Vector2::new(4.0, -4.0)), -16.0);
/// assert_eq!(orientation(p0, p1, Vector2::new(8.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn orientation<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> T
where
    T: Real,
{
    (p1 - p0).perp_dot(p2 - p0)
}

/// Returns true if `point` is left of a direction vector.
///
/// Direction vector is defined as `p1 - p0`.
///
/// # Examples
///
/// ```
/// # use xor_decomp::core::math::*;
/// let p0 = Vector2::new(1.0, 1.0);
/// let p1 = Vector2::new(2.0, 2.0);
/// assert!(is_left(p0, p1, Vector2::new(0.0, 1.0)));
/// assert!(!is_left(p0, p1, Vector2::new(1.0, 0.0)));
/// ```
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    orientation(p0, p1, point) > T::zero()
}

/// Returns `(i + 1) mod n`, the next index around a ring of `n` vertexes.
///
/// Assumes `i < n`, debug asserts it.
///
/// # Examples
///
/// ```
/// # use xor_decomp::core::math::*;
/// assert_eq!(next_wrapping_index(0, 4), 1);
/// assert_eq!(next_wrapping_index(3, 4), 0);
/// assert_eq!(next_wrapping_index(0, 1), 0);
/// ```
#[inline]
pub fn next_wrapping_index(i: usize, n: usize) -> usize {
    debug_assert!(i < n, "index is out of ring range bounds");
    let next = i + 1;
    if next >= n {
        0
    } else {
        next
    }
}

/// Returns `(i - 1 + n) mod n`, the previous index around a ring of `n` vertexes.
///
/// Assumes `i < n`, debug asserts it.
///
/// # Examples
///
/// ```
/// # use xor_decomp::core::math::*;
/// assert_eq!(prev_wrapping_index(1, 4), 0);
/// assert_eq!(prev_wrapping_index(0, 4), 3);
/// assert_eq!(prev_wrapping_index(0, 1), 0);
/// ```
#[inline]
pub fn prev_wrapping_index(i: usize, n: usize) -> usize {
    debug_assert!(i < n, "index is out of ring range bounds");
    if i == 0 {
        n - 1
    } else {
        i - 1
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}
