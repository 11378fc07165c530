// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Real, Vec3};

use super::{Cylinder, InfiniteCylinder, Segment, Sphere};

/// Sphere of `radius` swept along a [`Segment`].
///
/// The capsule decomposes into a body cylinder and two end spheres; the
/// intersection engine tests those pieces separately.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capsule<T: Real = f32> {
    segment: Segment<T>,
    radius: T,
}

impl<T: Real> Capsule<T> {
    /// Builds a capsule around `segment`.
    #[must_use]
    pub fn new(segment: Segment<T>, radius: T) -> Self {
        Self {
            segment,
            radius: radius.abs(),
        }
    }

    /// Capsule of axis length `height` centred at `center` along the unit
    /// `normal`.
    #[must_use]
    pub fn from_center(center: Vec3<T>, normal: Vec3<T>, height: T, radius: T) -> Self {
        let half = normal * (height / (T::one() + T::one()));
        Self::new(Segment::new(center - half, center + half), radius)
    }

    /// Axis segment.
    pub fn segment(&self) -> &Segment<T> {
        &self.segment
    }

    /// Radius.
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Midpoint of the axis.
    pub fn center(&self) -> Vec3<T> {
        self.segment.center()
    }

    /// Unbounded cylinder around the axis line.
    pub fn infinite_cylinder(&self) -> InfiniteCylinder<T> {
        InfiniteCylinder::new(self.segment.to_line(), self.radius)
    }

    /// Capped cylinder between the two sphere centres.
    pub fn body_cylinder(&self) -> Cylinder<T> {
        Cylinder::new(self.segment.pt1(), self.segment.pt2(), self.radius)
    }

    /// End sphere at `pt1`.
    pub fn left_sphere(&self) -> Sphere<T> {
        Sphere::new(self.segment.pt1(), self.radius)
    }

    /// End sphere at `pt2`.
    pub fn right_sphere(&self) -> Sphere<T> {
        Sphere::new(self.segment.pt2(), self.radius)
    }

    /// Returns `true` if `point` is inside or on the surface.
    pub fn is_inside(&self, point: &Vec3<T>) -> bool {
        self.segment.distance_to_point(point) <= self.radius
    }

    /// Distance from `point` to the surface; zero inside.
    pub fn distance_to_point(&self, point: &Vec3<T>) -> T {
        (self.segment.distance_to_point(point) - self.radius).max(T::zero())
    }
}
