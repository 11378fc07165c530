// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use echo_math::{Quaternion, Real, Vec3};

/// Right-handed orthonormal frame: an origin and three unit axes `i`, `j`, `k`.
///
/// Conversions assume the axes are orthonormal; the constructors do not
/// re-orthogonalise their input.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Referential<T: Real = f32> {
    origin: Vec3<T>,
    i: Vec3<T>,
    j: Vec3<T>,
    k: Vec3<T>,
}

impl<T: Real> Referential<T> {
    /// Builds a frame from explicit axes (each normalised).
    #[must_use]
    pub fn new(origin: Vec3<T>, i: Vec3<T>, j: Vec3<T>, k: Vec3<T>) -> Self {
        Self {
            origin,
            i: i.normalize(),
            j: j.normalize(),
            k: k.normalize(),
        }
    }

    /// World axes translated to `origin`.
    #[must_use]
    pub fn axis_aligned(origin: Vec3<T>) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self {
            origin,
            i: Vec3::new([l, o, o]),
            j: Vec3::new([o, l, o]),
            k: Vec3::new([o, o, l]),
        }
    }

    /// World axes rotated by a unit quaternion, placed at `origin`.
    #[must_use]
    pub fn from_rotation(origin: Vec3<T>, rotation: &Quaternion<T>) -> Self {
        let base = Self::axis_aligned(origin);
        Self {
            origin,
            i: rotation.rotate_vector(&base.i),
            j: rotation.rotate_vector(&base.j),
            k: rotation.rotate_vector(&base.k),
        }
    }

    /// Frame origin.
    pub fn origin(&self) -> Vec3<T> {
        self.origin
    }

    /// First axis.
    pub fn i(&self) -> Vec3<T> {
        self.i
    }

    /// Second axis.
    pub fn j(&self) -> Vec3<T> {
        self.j
    }

    /// Third axis.
    pub fn k(&self) -> Vec3<T> {
        self.k
    }

    /// Coordinates of a world point in this frame.
    pub fn global_to_local_position(&self, point: &Vec3<T>) -> Vec3<T> {
        self.global_to_local_direction(&(*point - self.origin))
    }

    /// World position of a point given in this frame.
    pub fn local_to_global_position(&self, point: &Vec3<T>) -> Vec3<T> {
        self.origin + self.local_to_global_direction(point)
    }

    /// Components of a world direction along the frame axes.
    pub fn global_to_local_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        Vec3::new([
            direction.dot(&self.i),
            direction.dot(&self.j),
            direction.dot(&self.k),
        ])
    }

    /// World direction of a vector given in frame components.
    pub fn local_to_global_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        self.i * direction.x() + self.j * direction.y() + self.k * direction.z()
    }
}

impl<T: Real> Default for Referential<T> {
    fn default() -> Self {
        Self::axis_aligned(Vec3::zero())
    }
}
