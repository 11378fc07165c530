// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Real, Vec3};

/// Infinite line through `origin` along a unit `direction`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line<T: Real = f32> {
    origin: Vec3<T>,
    direction: Vec3<T>,
}

impl<T: Real> Line<T> {
    /// Builds a line; `direction` is normalised (a zero direction stays zero
    /// and describes a degenerate line).
    #[must_use]
    pub fn new(origin: Vec3<T>, direction: Vec3<T>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// A point on the line.
    pub fn origin(&self) -> Vec3<T> {
        self.origin
    }

    /// Unit direction.
    pub fn direction(&self) -> Vec3<T> {
        self.direction
    }

    /// `origin + direction * t`.
    pub fn point_at(&self, t: T) -> Vec3<T> {
        self.origin + self.direction * t
    }

    /// Parameter of the orthogonal projection of `point` onto the line.
    pub fn closest_t(&self, point: &Vec3<T>) -> T {
        (*point - self.origin).dot(&self.direction)
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn closest_point(&self, point: &Vec3<T>) -> Vec3<T> {
        self.point_at(self.closest_t(point))
    }

    /// Distance from `point` to the line.
    pub fn distance_to_point(&self, point: &Vec3<T>) -> T {
        (*point - self.closest_point(point)).length()
    }
}
