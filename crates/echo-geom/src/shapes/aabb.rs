// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Convention, Matrix4, Real, Vec3};

/// Axis-aligned bounding box stored as a center and half-extents.
///
/// Invariants:
/// - every half-extent is non-negative;
/// - faces are inclusive: points on the boundary are inside.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<T: Real = f32> {
    center: Vec3<T>,
    half_extents: Vec3<T>,
}

impl<T: Real> Aabb<T> {
    /// Builds a box from its center and half-extents (taken by magnitude).
    #[must_use]
    pub fn new(center: Vec3<T>, half_extents: Vec3<T>) -> Self {
        Self {
            center,
            half_extents: half_extents.map(Real::abs),
        }
    }

    /// Builds the box spanned by two opposite corners, in any order.
    #[must_use]
    pub fn from_min_max(a: Vec3<T>, b: Vec3<T>) -> Self {
        let two = T::one() + T::one();
        Self::new((a + b) / two, (b - a) / two)
    }

    /// Smallest box containing every point, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Vec3<T>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(mut lo, mut hi), p| {
            for k in 0..3 {
                lo[k] = lo[k].min(p[k]);
                hi[k] = hi[k].max(p[k]);
            }
            (lo, hi)
        });
        Some(Self::from_min_max(min, max))
    }

    /// Center point.
    pub fn center(&self) -> Vec3<T> {
        self.center
    }

    /// Half-extents along x, y and z.
    pub fn half_extents(&self) -> Vec3<T> {
        self.half_extents
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3<T> {
        self.center - self.half_extents
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3<T> {
        self.center + self.half_extents
    }

    /// Returns `true` if `point` is inside or on the boundary.
    pub fn contains(&self, point: &Vec3<T>) -> bool {
        let d = *point - self.center;
        (0..3).all(|k| d[k].abs() <= self.half_extents[k])
    }

    /// Returns `true` if this box overlaps another (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        let d = other.center - self.center;
        let reach = self.half_extents + other.half_extents;
        (0..3).all(|k| d[k].abs() <= reach[k])
    }

    /// Smallest box containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        let mut min = a_min;
        let mut max = a_max;
        for k in 0..3 {
            min[k] = a_min[k].min(b_min[k]);
            max[k] = a_max[k].max(b_max[k]);
        }
        Self::from_min_max(min, max)
    }

    /// Grows the box by `margin` on every side.
    #[must_use]
    pub fn inflate(&self, margin: T) -> Self {
        Self::new(self.center, self.half_extents + Vec3::splat(margin))
    }

    /// Box bounding the eight corners after the affine transform `mat`.
    #[must_use]
    pub fn transformed<V: Convention>(&self, mat: &Matrix4<T, V>) -> Self {
        let (lo, hi) = (self.min(), self.max());
        let corners: [Vec3<T>; 8] = core::array::from_fn(|i| {
            Vec3::new([
                if i & 1 == 0 { lo[0] } else { hi[0] },
                if i & 2 == 0 { lo[1] } else { hi[1] },
                if i & 4 == 0 { lo[2] } else { hi[2] },
            ])
        });
        let moved = corners.map(|c| mat.transform_point(&c));
        Self::from_points(&moved).unwrap_or(*self)
    }

    /// Point of the box closest to `point` (the point itself when inside).
    pub fn closest_point(&self, point: &Vec3<T>) -> Vec3<T> {
        let mut out = *point;
        let (lo, hi) = (self.min(), self.max());
        for k in 0..3 {
            out[k] = out[k].clamp(lo[k], hi[k]);
        }
        out
    }

    /// Distance from `point` to the box; zero inside.
    pub fn distance_to_point(&self, point: &Vec3<T>) -> T {
        (*point - self.closest_point(point)).length()
    }
}
