// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Real, Vec3};

/// Solid sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<T: Real = f32> {
    center: Vec3<T>,
    radius: T,
}

impl<T: Real> Sphere<T> {
    /// Builds a sphere; a negative `radius` is taken by magnitude.
    #[must_use]
    pub fn new(center: Vec3<T>, radius: T) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Center point.
    pub fn center(&self) -> Vec3<T> {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Returns `true` when `point` lies inside or on the surface.
    pub fn contains(&self, point: &Vec3<T>) -> bool {
        (*point - self.center).square_length() <= self.radius * self.radius
    }

    /// Distance from `point` to the surface; zero for interior points.
    pub fn distance_to_point(&self, point: &Vec3<T>) -> T {
        ((*point - self.center).length() - self.radius).max(T::zero())
    }
}
