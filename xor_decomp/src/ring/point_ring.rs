use crate::{
    core::{
        math::{is_left, next_wrapping_index, orientation, prev_wrapping_index, Vector2},
        traits::Real,
    },
    decompose::{decompose_opt, DecomposeOptions, XorDecomposition},
};
use static_aabb2d_index::AABB;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered sequence of 2D points forming an implicitly closed polygon.
///
/// Indexes run `0..n`, the segment from the last point back to the first is implied and no
/// duplicate closing point is stored. The ring may be self intersecting or wound more than once,
/// every operation here is defined for any input.
///
/// # Examples
///
/// ```
/// # use xor_decomp::ring::*;
/// let mut ring = PointRing::new();
/// ring.add(0.0, 0.0);
/// ring.add(4.0, 0.0);
/// ring.add(4.0, 4.0);
/// ring.add(0.0, 4.0);
/// assert_eq!(ring.len(), 4);
/// assert_eq!(ring.signed_area(), 16.0);
/// assert_eq!(ring.next_wrapping_index(3), 0);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone)]
pub struct PointRing<T = f64> {
    /// Contiguous sequence of points.
    pub points: Vec<Vector2<T>>,
}

impl<T> Default for PointRing<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PointRing<T>
where
    T: Real,
{
    /// Create a new empty [PointRing].
    #[inline]
    pub fn new() -> Self {
        PointRing { points: Vec::new() }
    }

    /// Create a new empty [PointRing] with `capacity` reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        PointRing {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a ring taking ownership of the `points` given.
    #[inline]
    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        PointRing { points }
    }

    /// Create a ring from (x, y) pairs.
    pub fn from_xy<I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        PointRing {
            points: coordinates
                .into_iter()
                .map(|(x, y)| Vector2::new(x, y))
                .collect(),
        }
    }

    /// Add a point to the end of the ring.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Vector2::new(x, y));
    }

    /// Add a point to the end of the ring.
    #[inline]
    pub fn add_point(&mut self, point: Vector2<T>) {
        self.points.push(point);
    }

    /// Number of points in the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, panics if out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> Vector2<T> {
        self.points[index]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vector2<T>> {
        self.points.get(index).copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<T>> {
        self.points.iter()
    }

    /// Iterate over the ring edges as point pairs, including the closing edge.
    pub fn iter_edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.len();
        (0..n).map(move |i| (self.points[i], self.points[next_wrapping_index(i, n)]))
    }

    /// Returns the next wrapping index, after the last index this wraps around to 0.
    #[inline]
    pub fn next_wrapping_index(&self, i: usize) -> usize {
        next_wrapping_index(i, self.len())
    }

    /// Returns the previous wrapping index, before index 0 this wraps around to the last index.
    #[inline]
    pub fn prev_wrapping_index(&self, i: usize) -> usize {
        prev_wrapping_index(i, self.len())
    }

    /// Twice the signed area of the triangle formed by the points at `i0`, `i1`, and `i2`.
    ///
    /// Positive for a counter clockwise turn at `i1`, negative for clockwise, zero if collinear.
    #[inline]
    pub fn orientation(&self, i0: usize, i1: usize, i2: usize) -> T {
        orientation(self.points[i0], self.points[i1], self.points[i2])
    }

    /// Index of the point with the smallest y value, ties broken by the smallest x value.
    ///
    /// This does not depend on where the ring happens to start so it is used as the canonical
    /// start vertex for decomposition. Returns `None` if the ring is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use xor_decomp::ring::*;
    /// let ring = PointRing::from_xy([(4.0, 4.0), (4.0, 0.0), (0.0, 0.0), (0.0, 4.0)]);
    /// assert_eq!(ring.start_index(), Some(2));
    /// ```
    pub fn start_index(&self) -> Option<usize> {
        let mut iter = self.points.iter().enumerate();
        let (mut best_index, mut best) = iter.next()?;
        for (i, p) in iter {
            if p.y < best.y || (p.y == best.y && p.x < best.x) {
                best_index = i;
                best = p;
            }
        }

        Some(best_index)
    }

    /// Signed area of the ring using the shoelace formula.
    ///
    /// Positive for counter clockwise rings. For self intersecting rings this is the sum of the
    /// areas weighted by winding number.
    pub fn signed_area(&self) -> T {
        let double_area = self
            .iter_edges()
            .fold(T::zero(), |acc, (v1, v2)| acc + v1.x * v2.y - v1.y * v2.x);
        double_area / T::two()
    }

    /// Compute the XY extents of the ring.
    ///
    /// Returns `None` if the ring is empty.
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.points.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for p in self.points.iter().skip(1) {
            if p.x < result.min_x {
                result.min_x = p.x;
            } else if p.x > result.max_x {
                result.max_x = p.x;
            }

            if p.y < result.min_y {
                result.min_y = p.y;
            } else if p.y > result.max_y {
                result.max_y = p.y;
            }
        }

        Some(result)
    }

    /// Winding number of the ring around `point`.
    ///
    /// Positive for counter clockwise windings, negative for clockwise. Points on the boundary
    /// may count either way.
    pub fn winding_number(&self, point: Vector2<T>) -> i32 {
        if self.len() < 3 {
            return 0;
        }

        let mut winding = 0;
        for (v1, v2) in self.iter_edges() {
            if v1.y <= point.y {
                if v2.y > point.y && is_left(v1, v2, point) {
                    // left and upward crossing
                    winding += 1;
                }
            } else if v2.y <= point.y && !is_left(v1, v2, point) {
                // right and downward crossing
                winding -= 1;
            }
        }

        winding
    }

    /// Even-odd (XOR) interior test, `true` if the winding number around `point` is odd.
    ///
    /// This scans every edge, [ClipPlaneTree::is_point_in_or_on] answers the same question
    /// without touching the ring once the ring has been decomposed.
    ///
    /// [ClipPlaneTree::is_point_in_or_on]: crate::clip_tree::ClipPlaneTree::is_point_in_or_on
    #[inline]
    pub fn even_odd_contains(&self, point: Vector2<T>) -> bool {
        self.winding_number(point) % 2 != 0
    }

    /// Decompose the ring into convex XOR fragments using default options.
    ///
    /// See [decompose_opt] for details.
    #[inline]
    pub fn xor_decompose(&self) -> XorDecomposition<T> {
        self.xor_decompose_opt(&DecomposeOptions::default())
    }

    /// Decompose the ring into convex XOR fragments using the `options` given.
    #[inline]
    pub fn xor_decompose_opt(&self, options: &DecomposeOptions<T>) -> XorDecomposition<T> {
        decompose_opt(self, options)
    }
}

impl<T> Index<usize> for PointRing<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> FromIterator<Vector2<T>> for PointRing<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        PointRing {
            points: iter.into_iter().collect(),
        }
    }
}
