// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Real, Vec3};

/// Plane `{ p | dot(p, normal) == distance }` with a unit normal.
///
/// The side the normal points to is "forward"; signed distances are positive
/// there.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T: Real = f32> {
    normal: Vec3<T>,
    distance: T,
}

impl<T: Real> Plane<T> {
    /// Builds a plane from a normal and its offset along that normal.
    ///
    /// The normal is normalised and `distance` rescaled so the described
    /// plane is unchanged.
    #[must_use]
    pub fn new(normal: Vec3<T>, distance: T) -> Self {
        let len = normal.length();
        if len <= T::EPSILON {
            return Self {
                normal: Vec3::zero(),
                distance,
            };
        }
        Self {
            normal: normal / len,
            distance: distance / len,
        }
    }

    /// Plane through `point` facing `normal`.
    #[must_use]
    pub fn from_point_normal(point: Vec3<T>, normal: Vec3<T>) -> Self {
        let normal = normal.normalize();
        Self {
            normal,
            distance: point.dot(&normal),
        }
    }

    /// Unit normal.
    pub fn normal(&self) -> Vec3<T> {
        self.normal
    }

    /// Offset from the origin along the normal.
    pub fn distance(&self) -> T {
        self.distance
    }

    /// Signed distance of `point`; positive in front of the plane.
    pub fn signed_distance(&self, point: &Vec3<T>) -> T {
        point.dot(&self.normal) - self.distance
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project(&self, point: &Vec3<T>) -> Vec3<T> {
        *point - self.normal * self.signed_distance(point)
    }
}
