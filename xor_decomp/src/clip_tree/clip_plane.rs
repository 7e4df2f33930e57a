use crate::{
    core::{math::Vector2, traits::Real},
    decompose::FragmentOrientation,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Oriented half-plane `normal · p >= distance`.
///
/// Clip planes are built from fragment edges with a unit normal pointing toward the fragment
/// interior, so a point is inside the fragment when it is inside (or on) all of its planes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipPlane<T = f64> {
    /// Unit normal pointing to the inside of the plane.
    pub normal: Vector2<T>,
    /// Offset of the plane along `normal` from the origin.
    pub distance: T,
}

impl<T> ClipPlane<T>
where
    T: Real,
{
    #[inline]
    pub fn new(normal: Vector2<T>, distance: T) -> Self {
        ClipPlane { normal, distance }
    }

    /// Plane for the fragment edge `start -> end` anchored at `start`.
    ///
    /// The inside is the left of the edge for counter clockwise fragments and the right for
    /// clockwise fragments. Returns `None` if the edge is shorter than `plane_eps`, there is no
    /// usable direction in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use xor_decomp::clip_tree::*;
    /// # use xor_decomp::core::math::*;
    /// # use xor_decomp::decompose::FragmentOrientation;
    /// let start = Vector2::new(0.0, 0.0);
    /// let end = Vector2::new(4.0, 0.0);
    /// let plane =
    ///     ClipPlane::from_edge(start, end, FragmentOrientation::CounterClockwise, 1e-8).unwrap();
    /// assert_eq!(plane.normal, Vector2::new(0.0, 1.0));
    /// assert!(plane.contains_eps(Vector2::new(2.0, 1.0), 1e-8));
    /// assert!(!plane.contains_eps(Vector2::new(2.0, -1.0), 1e-8));
    /// ```
    pub fn from_edge(
        start: Vector2<T>,
        end: Vector2<T>,
        orientation: FragmentOrientation,
        plane_eps: T,
    ) -> Option<Self> {
        let dir = end - start;
        if dir.length() < plane_eps {
            return None;
        }

        let left_normal = dir.unit_perp();
        let normal = match orientation {
            FragmentOrientation::CounterClockwise => left_normal,
            FragmentOrientation::Clockwise => -left_normal,
        };

        Some(ClipPlane::new(normal, normal.dot(start)))
    }

    /// Signed distance from the plane to `point`, positive on the inside.
    #[inline]
    pub fn signed_distance(&self, point: Vector2<T>) -> T {
        self.normal.dot(point) - self.distance
    }

    /// Returns `true` if `point` is inside or within `eps` of the plane.
    #[inline]
    pub fn contains_eps(&self, point: Vector2<T>, eps: T) -> bool {
        self.signed_distance(point).fuzzy_non_negative_eps(eps)
    }
}
