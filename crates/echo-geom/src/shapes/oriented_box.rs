// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Real, Vec3};

use super::{Aabb, Referential};

/// Box aligned with an arbitrary [`Referential`], centred on its origin.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientedBox<T: Real = f32> {
    referential: Referential<T>,
    ext_i: T,
    ext_j: T,
    ext_k: T,
}

impl<T: Real> OrientedBox<T> {
    /// Builds a box from its frame and half-extents along `i`, `j`, `k`.
    #[must_use]
    pub fn new(referential: Referential<T>, ext_i: T, ext_j: T, ext_k: T) -> Self {
        Self {
            referential,
            ext_i: ext_i.abs(),
            ext_j: ext_j.abs(),
            ext_k: ext_k.abs(),
        }
    }

    /// The local frame.
    pub fn referential(&self) -> &Referential<T> {
        &self.referential
    }

    /// Half-extent along `i`.
    pub fn ext_i(&self) -> T {
        self.ext_i
    }

    /// Half-extent along `j`.
    pub fn ext_j(&self) -> T {
        self.ext_j
    }

    /// Half-extent along `k`.
    pub fn ext_k(&self) -> T {
        self.ext_k
    }

    /// Half-extents as a local vector.
    pub fn extents(&self) -> Vec3<T> {
        Vec3::new([self.ext_i, self.ext_j, self.ext_k])
    }

    /// World-space center.
    pub fn center(&self) -> Vec3<T> {
        self.referential.origin()
    }

    /// The box expressed in its own frame.
    pub fn local_aabb(&self) -> Aabb<T> {
        Aabb::new(Vec3::zero(), self.extents())
    }

    /// Returns `true` if the world point lies inside or on the box.
    pub fn contains(&self, point: &Vec3<T>) -> bool {
        self.local_aabb()
            .contains(&self.referential.global_to_local_position(point))
    }

    /// World point of the box closest to `point`.
    pub fn closest_point(&self, point: &Vec3<T>) -> Vec3<T> {
        let local = self.referential.global_to_local_position(point);
        self.referential
            .local_to_global_position(&self.local_aabb().closest_point(&local))
    }

    /// Distance from `point` to the box; zero inside.
    pub fn distance_to_point(&self, point: &Vec3<T>) -> T {
        (*point - self.closest_point(point)).length()
    }
}

impl<T: Real> From<Aabb<T>> for OrientedBox<T> {
    fn from(aabb: Aabb<T>) -> Self {
        let e = aabb.half_extents();
        Self::new(Referential::axis_aligned(aabb.center()), e.x(), e.y(), e.z())
    }
}
