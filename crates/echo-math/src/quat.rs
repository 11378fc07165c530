// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::angle::Radians;
use crate::matrix::{Convention, Matrix};
use crate::scalar::Real;
use crate::vector::Vec3;

/// Quaternion stored as `(x, y, z, w)`: vector part `xyz`, scalar part `w`.
///
/// * Angles are radians unless an [`Angle`](crate::Angle) says otherwise.
/// * Only unit quaternions represent rotations; see [`Quaternion::is_rotation`].
///
/// # Examples
/// ```
/// use core::f32::consts::FRAC_PI_2;
/// use echo_math::{Quaternion, Radians, Vec3};
/// let q = Quaternion::from_axis_angle(Vec3::<f32>::new([0.0, 0.0, 1.0]), Radians::new(FRAC_PI_2));
/// let v = q.rotate_vector(&Vec3::new([1.0, 0.0, 0.0]));
/// assert!((v.y() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T: Real = f32> {
    data: [T; 4],
}

impl<T: Real> Quaternion<T> {
    /// Creates a quaternion from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates a quaternion from its vector and scalar parts.
    pub fn from_parts(xyz: Vec3<T>, w: T) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// Rotation of `angle` around `unit_axis`.
    ///
    /// The axis is NOT normalised: a non-unit axis yields a non-unit
    /// quaternion (debug builds assert unit length).
    pub fn from_axis_angle(unit_axis: Vec3<T>, angle: impl Into<Radians<T>>) -> Self {
        debug_assert!(
            (unit_axis.square_length() - T::one()).abs() <= T::TOLERANCE,
            "rotation axis must be unit length: {unit_axis:?}"
        );
        let half = angle.into().value() / (T::one() + T::one());
        let (sin_half, cos_half) = half.sin_cos();
        Self::from_parts(unit_axis * sin_half, cos_half)
    }

    /// The identity rotation `(0, 0, 0, 1)`.
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// `x` component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// `y` component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// `z` component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Scalar part.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Vector part.
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new([self.data[0], self.data[1], self.data[2]])
    }

    /// Returns the components as `[x, y, z, w]`.
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// Sum of squared components.
    pub fn square_magnitude(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &c| acc + c * c)
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> T {
        self.square_magnitude().sqrt()
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        let mut out = *self;
        out.conjugate_mut();
        out
    }

    /// In-place form of [`Quaternion::conjugate`].
    pub fn conjugate_mut(&mut self) -> &mut Self {
        for c in &mut self.data[..3] {
            *c = -*c;
        }
        self
    }

    /// Unit quaternion with the same orientation; zero stays zero.
    pub fn normalize(&self) -> Self {
        let mut out = *self;
        out.normalize_mut();
        out
    }

    /// In-place form of [`Quaternion::normalize`].
    pub fn normalize_mut(&mut self) -> &mut Self {
        let len = self.magnitude();
        if len != T::zero() {
            for c in &mut self.data {
                *c = *c / len;
            }
        }
        self
    }

    /// True when the squared magnitude is within `epsilon` of one.
    pub fn is_rotation(&self, epsilon: T) -> bool {
        (self.square_magnitude() - T::one()).abs() <= epsilon
    }

    /// Rotation angle `2 * acos(w)`, in `[0, 2π]`.
    pub fn angle(&self) -> Radians<T> {
        Radians::new((T::one() + T::one()) * self.w().acos())
    }

    /// Rotation axis `xyz / sin(angle / 2)`.
    ///
    /// Returns the zero vector when the angle is (near) zero and the axis is
    /// undefined.
    pub fn axis(&self) -> Vec3<T> {
        let sin_half = (self.angle().value() / (T::one() + T::one())).sin();
        if sin_half.abs() <= T::TOLERANCE {
            return Vec3::zero();
        }
        self.xyz() / sin_half
    }

    /// Rotates `v` by this (unit) quaternion: `q v q*`.
    pub fn rotate_vector(&self, v: &Vec3<T>) -> Vec3<T> {
        let u = self.xyz();
        let t = u.cross(v) * (T::one() + T::one());
        *v + t * self.w() + u.cross(&t)
    }

    /// 4×4 rotation matrix (normalises first).
    pub fn to_matrix4<V: Convention>(&self) -> Matrix<4, 4, T, V> {
        let q = self.normalize();
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let (o, l) = (T::zero(), T::one());
        let two = l + l;
        Matrix::from_rows([
            [
                l - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
                o,
            ],
            [
                two * (x * y + w * z),
                l - two * (x * x + z * z),
                two * (y * z - w * x),
                o,
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                l - two * (x * x + y * y),
                o,
            ],
            [o, o, o, l],
        ])
    }
}

impl<T: Real> From<[T; 4]> for Quaternion<T> {
    fn from(value: [T; 4]) -> Self {
        Self { data: value }
    }
}

impl<T: Real> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a = *a + b;
        }
    }
}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Real> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.data.iter_mut().zip(rhs.data) {
            *a = *a - b;
        }
    }
}

impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

/// Hamilton product: `self` composed with `rhs` (non-commutative).
impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (v1, w1) = (self.xyz(), self.w());
        let (v2, w2) = (rhs.xyz(), rhs.w());
        Self::from_parts(v2 * w1 + v1 * w2 + v1.cross(&v2), w1 * w2 - v1.dot(&v2))
    }
}

impl<T: Real> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;
    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Real> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: T) {
        for c in &mut self.data {
            *c = *c * rhs;
        }
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;
    fn neg(self) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(-x, -y, -z, -w)
    }
}

impl<T: Real + fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "({x}, {y}, {z}, {w})")
    }
}
