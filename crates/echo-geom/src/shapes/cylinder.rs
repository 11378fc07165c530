// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Real, Vec3};

use super::{Line, Plane, Segment};

/// Cylinder of unbounded length around a [`Line`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfiniteCylinder<T: Real = f32> {
    axis: Line<T>,
    radius: T,
}

impl<T: Real> InfiniteCylinder<T> {
    /// Builds a cylinder around `axis`.
    #[must_use]
    pub fn new(axis: Line<T>, radius: T) -> Self {
        Self {
            axis,
            radius: radius.abs(),
        }
    }

    /// The axis line.
    pub fn axis(&self) -> &Line<T> {
        &self.axis
    }

    /// Radius.
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Distance from `point` to the axis.
    pub fn distance_to_axis(&self, point: &Vec3<T>) -> T {
        self.axis.distance_to_point(point)
    }

    /// Returns `true` if `point` is within `radius` of the axis.
    pub fn contains(&self, point: &Vec3<T>) -> bool {
        self.distance_to_axis(point) <= self.radius
    }
}

/// Capped cylinder between the cap centres `pt1` and `pt2`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cylinder<T: Real = f32> {
    pt1: Vec3<T>,
    pt2: Vec3<T>,
    radius: T,
}

impl<T: Real> Cylinder<T> {
    /// Builds a cylinder from its cap centres.
    #[must_use]
    pub fn new(pt1: Vec3<T>, pt2: Vec3<T>, radius: T) -> Self {
        Self {
            pt1,
            pt2,
            radius: radius.abs(),
        }
    }

    /// Center of the left cap.
    pub fn pt1(&self) -> Vec3<T> {
        self.pt1
    }

    /// Center of the right cap.
    pub fn pt2(&self) -> Vec3<T> {
        self.pt2
    }

    /// Radius.
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Distance between the caps.
    pub fn height(&self) -> T {
        self.axis().length()
    }

    /// Axis segment from `pt1` to `pt2`.
    pub fn axis(&self) -> Segment<T> {
        Segment::new(self.pt1, self.pt2)
    }

    /// The unbounded cylinder sharing this axis and radius.
    pub fn infinite_cylinder(&self) -> InfiniteCylinder<T> {
        InfiniteCylinder::new(self.axis().to_line(), self.radius)
    }

    /// Plane of the left cap, facing away from the body.
    pub fn left_plane(&self) -> Plane<T> {
        Plane::from_point_normal(self.pt1, self.pt1 - self.pt2)
    }

    /// Plane of the right cap, facing away from the body.
    pub fn right_plane(&self) -> Plane<T> {
        Plane::from_point_normal(self.pt2, self.pt2 - self.pt1)
    }

    /// Returns `true` if `point` is inside or on the surface.
    pub fn contains(&self, point: &Vec3<T>) -> bool {
        let axis = self.axis();
        let len_sq = axis.squared_length();
        if len_sq <= T::EPSILON {
            return false;
        }
        let t = (*point - self.pt1).dot(&axis.direction()) / len_sq;
        t >= T::zero() && t <= T::one() && (*point - axis.point_at(t)).length() <= self.radius
    }
}
