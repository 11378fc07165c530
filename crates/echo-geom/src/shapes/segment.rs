// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Real, Vec3};

use super::Line;

/// Line segment between `pt1` (parameter `t = 0`) and `pt2` (`t = 1`).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<T: Real = f32> {
    pt1: Vec3<T>,
    pt2: Vec3<T>,
}

impl<T: Real> Segment<T> {
    /// Builds a segment from its endpoints.
    #[must_use]
    pub fn new(pt1: Vec3<T>, pt2: Vec3<T>) -> Self {
        Self { pt1, pt2 }
    }

    /// Start point.
    pub fn pt1(&self) -> Vec3<T> {
        self.pt1
    }

    /// End point.
    pub fn pt2(&self) -> Vec3<T> {
        self.pt2
    }

    /// Midpoint.
    pub fn center(&self) -> Vec3<T> {
        (self.pt1 + self.pt2) / (T::one() + T::one())
    }

    /// Unnormalised direction `pt2 - pt1`.
    pub fn direction(&self) -> Vec3<T> {
        self.pt2 - self.pt1
    }

    /// Segment length.
    pub fn length(&self) -> T {
        self.direction().length()
    }

    /// Squared segment length.
    pub fn squared_length(&self) -> T {
        self.direction().square_length()
    }

    /// `pt1 + (pt2 - pt1) * t`; `t` is not clamped.
    pub fn point_at(&self, t: T) -> Vec3<T> {
        self.pt1 + self.direction() * t
    }

    /// Parameter in `[0, 1]` of the point of the segment closest to `point`.
    pub fn closest_t(&self, point: &Vec3<T>) -> T {
        let d = self.direction();
        let len_sq = d.square_length();
        if len_sq <= T::EPSILON {
            return T::zero();
        }
        ((*point - self.pt1).dot(&d) / len_sq).clamp(T::zero(), T::one())
    }

    /// Point of the segment closest to `point`.
    pub fn closest_point(&self, point: &Vec3<T>) -> Vec3<T> {
        self.point_at(self.closest_t(point))
    }

    /// Distance from `point` to the segment.
    pub fn distance_to_point(&self, point: &Vec3<T>) -> T {
        (*point - self.closest_point(point)).length()
    }

    /// The supporting line, starting at `pt1`.
    pub fn to_line(&self) -> Line<T> {
        Line::new(self.pt1, self.direction())
    }
}

impl<T: Real> From<Segment<T>> for Line<T> {
    fn from(segment: Segment<T>) -> Self {
        segment.to_line()
    }
}
