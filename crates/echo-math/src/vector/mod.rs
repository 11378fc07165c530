// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-length vectors over any [`Scalar`].
//!
//! `Vector<N, T>` owns `N` contiguous scalars. Arithmetic, bitwise, and shift
//! operators come in two shapes:
//!
//! * vector ∘ scalar broadcasts the scalar across every lane (both operand
//!   orders are provided for each primitive scalar type);
//! * vector ∘ vector combines lane by lane up to `min(N, M)` and leaves the
//!   left operand's remaining lanes untouched, so a `Vec3` and a `Vec4` can be
//!   mixed without truncation errors.
//!
//! Geometric helpers that need a square root (`length`, `normalize`, ...)
//! require a [`Real`] scalar. `cross` and the area helpers only exist on
//! three-component vectors.
//!
//! # Examples
//! ```
//! use echo_math::{Vec3, Vec4};
//! let mut a = Vec4::<f32>::new([1.0, 1.0, 1.0, 1.0]);
//! a += Vec3::<f32>::new([1.0, 2.0, 3.0]);
//! assert_eq!(a.to_array(), [2.0, 3.0, 4.0, 1.0]);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::angle::Radians;
use crate::error::MathError;
use crate::scalar::{CastFrom, Real, Scalar};

mod equality;
mod ops;

pub use equality::{ComponentWise, DefaultEquality, EqualityPolicy, SquaredLength};
pub(crate) use ops::{map_in_place, zip_in_place};

/// Fixed-length vector of `N` scalars.
///
/// Invariant: `N >= 1`. A zero-length vector fails to compile as soon as any
/// constructor is instantiated for it.
#[derive(Copy, Clone, Debug)]
pub struct Vector<const N: usize, T: Scalar = f32> {
    data: [T; N],
}

/// Two-component vector.
pub type Vec2<T = f32> = Vector<2, T>;
/// Three-component vector.
pub type Vec3<T = f32> = Vector<3, T>;
/// Four-component vector.
pub type Vec4<T = f32> = Vector<4, T>;

impl<const N: usize, T: Scalar> Vector<N, T> {
    const NON_EMPTY: () = assert!(N > 0, "zero-length vectors are ill-formed");

    /// Creates a vector from its components.
    pub const fn new(data: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data }
    }

    /// Creates a vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Number of components (`N`).
    pub const fn dimension() -> usize {
        N
    }

    /// Overwrites every component with `value`.
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.data = [value; N];
        self
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Borrows the components as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrows the components as a slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the components.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Bounds-checked read.
    ///
    /// # Errors
    /// [`MathError::VectorIndex`] when `index >= N`.
    pub fn at(&self, index: usize) -> Result<T, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::VectorIndex { index, len: N })
    }

    /// Bounds-checked write.
    ///
    /// # Errors
    /// [`MathError::VectorIndex`] when `index >= N`.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<&mut Self, MathError> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or(MathError::VectorIndex { index, len: N })?;
        *slot = value;
        Ok(self)
    }

    /// Applies `f` to every component.
    pub fn map(mut self, f: impl Fn(T) -> T) -> Self {
        map_in_place(&mut self.data, f);
        self
    }

    /// Sum of squared components. Preferred over [`Vector::length`] for
    /// comparisons: no square root, no rounding from it.
    pub fn square_length(&self) -> T {
        self.dot(self)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Linear blend `(1 - t) * self + t * other`, component-wise.
    ///
    /// `t == 0` yields `self` and `t == 1` yields `other` exactly.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        let mut out = *self;
        out.lerp_mut(other, t);
        out
    }

    /// In-place form of [`Vector::lerp`].
    pub fn lerp_mut(&mut self, other: &Self, t: T) -> &mut Self {
        let keep = T::one() - t;
        zip_in_place(&mut self.data, &other.data, |a, b| keep * a + t * b);
        self
    }

    /// Reflects `self` about `normal`: `v - 2 * dot(v, n) * n`.
    ///
    /// `normal` must already be unit length; it is not normalised here.
    pub fn reflect(&self, normal: &Self) -> Self {
        let mut out = *self;
        out.reflect_mut(normal);
        out
    }

    /// In-place form of [`Vector::reflect`].
    pub fn reflect_mut(&mut self, normal: &Self) -> &mut Self {
        let twice = (T::one() + T::one()) * self.dot(normal);
        zip_in_place(&mut self.data, &normal.data, |v, n| v - twice * n);
        self
    }

    /// Divides every component by the last one (projective to Euclidean).
    ///
    /// The last component must be non-zero; nothing checks it.
    pub fn homogenize(&self) -> Self {
        let mut out = *self;
        out.homogenize_mut();
        out
    }

    /// In-place form of [`Vector::homogenize`].
    pub fn homogenize_mut(&mut self) -> &mut Self {
        let last = self.data[N - 1];
        map_in_place(&mut self.data, |c| c / last);
        self
    }

    /// Compares squared lengths.
    pub fn cmp_length<const M: usize>(&self, other: &Vector<M, T>) -> Option<Ordering> {
        self.square_length().partial_cmp(&other.square_length())
    }

    /// Compares the length against `length` (via squares).
    pub fn cmp_length_to(&self, length: T) -> Option<Ordering> {
        self.square_length().partial_cmp(&(length * length))
    }

    /// Equality under an explicit [`EqualityPolicy`].
    pub fn eq_with<P: EqualityPolicy>(&self, other: &Self) -> bool {
        <P as EqualityPolicy>::eq(self, other)
    }

    /// Widening/narrowing conversion: copies the first `min(N, M)` components
    /// and zero-fills the rest.
    pub fn resize<const M: usize>(&self) -> Vector<M, T> {
        let mut out = Vector::<M, T>::zero();
        out.data
            .iter_mut()
            .zip(&self.data)
            .for_each(|(dst, &src)| *dst = src);
        out
    }

    /// Converts every component to another scalar type (`as` semantics).
    pub fn cast<U: CastFrom<T>>(&self) -> Vector<N, U> {
        Vector {
            data: self.data.map(U::cast_from),
        }
    }
}

impl<const N: usize, T: Real> Vector<N, T> {
    /// Euclidean length.
    pub fn length(&self) -> T {
        self.square_length().sqrt()
    }

    /// Returns the unit vector with the same direction.
    ///
    /// A null vector stays null (no NaN).
    pub fn normalize(&self) -> Self {
        let mut out = *self;
        out.normalize_mut();
        out
    }

    /// In-place form of [`Vector::normalize`].
    pub fn normalize_mut(&mut self) -> &mut Self {
        let len = self.length();
        if len != T::zero() {
            map_in_place(&mut self.data, |c| c / len);
        }
        self
    }

    /// Scales the vector to `new_length`, keeping its direction.
    pub fn set_length(&mut self, new_length: T) -> &mut Self {
        self.normalize_mut();
        map_in_place(&mut self.data, |c| c * new_length);
        self
    }

    /// Non-mutating form of [`Vector::set_length`].
    pub fn with_length(&self, new_length: T) -> Self {
        let mut out = *self;
        out.set_length(new_length);
        out
    }

    /// Shortens the vector to `max_length` if it is longer.
    pub fn clamp_length(&self, max_length: T) -> Self {
        let mut out = *self;
        out.clamp_length_mut(max_length);
        out
    }

    /// In-place form of [`Vector::clamp_length`].
    pub fn clamp_length_mut(&mut self, max_length: T) -> &mut Self {
        if self.square_length() > max_length * max_length {
            self.set_length(max_length);
        }
        self
    }

    /// True when the vectors are parallel or anti-parallel.
    ///
    /// Uses Lagrange's identity `|a|²|b|² - (a·b)² = |a × b|²`, so it holds
    /// for any `N`; the cross-product magnitude is compared to zero with a
    /// tolerance relative to the operands' magnitudes.
    pub fn is_colinear_to(&self, other: &Self) -> bool {
        let lengths = self.square_length() * other.square_length();
        let dot = self.dot(other);
        (lengths - dot * dot).abs() <= T::TOLERANCE * lengths
    }

    /// True when the dot product is zero within tolerance.
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.dot(other).abs() <= T::TOLERANCE * self.length() * other.length()
    }

    /// Length of the projection of `self` onto `other`.
    pub fn scalar_projection_on(&self, other: &Self) -> T {
        self.dot(other) / other.length()
    }

    /// Length of the component of `self` orthogonal to `other`.
    pub fn scalar_rejection_on(&self, other: &Self) -> T {
        self.vector_rejection_on(other).length()
    }

    /// Projection of `self` onto `other`.
    pub fn vector_projection_on(&self, other: &Self) -> Self {
        *other * (self.dot(other) / other.square_length())
    }

    /// Component of `self` orthogonal to `other`.
    pub fn vector_rejection_on(&self, other: &Self) -> Self {
        *self - self.vector_projection_on(other)
    }
}

impl<T: Scalar> Vector<2, T> {
    /// First component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Appends a third component.
    pub fn extend(self, z: T) -> Vector<3, T> {
        Vector::new([self.data[0], self.data[1], z])
    }
}

impl<T: Scalar> Vector<3, T> {
    /// First component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Third component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Appends a fourth component.
    pub fn extend(self, w: T) -> Vector<4, T> {
        Vector::new([self.data[0], self.data[1], self.data[2], w])
    }

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// In-place form of [`Vector::cross`].
    pub fn cross_mut(&mut self, other: &Self) -> &mut Self {
        *self = self.cross(other);
        self
    }
}

impl<T: Real> Vector<3, T> {
    /// Area of the parallelogram spanned by `self` and `other`.
    pub fn parallelogram_area(&self, other: &Self) -> T {
        self.cross(other).length()
    }

    /// Area of the triangle spanned by `self` and `other`.
    pub fn triangle_area(&self, other: &Self) -> T {
        self.parallelogram_area(other) / (T::one() + T::one())
    }

    /// Area of the parallelogram with corners `p1`, `p2`, `p3` (and the
    /// implied fourth).
    pub fn parallelogram_area_of(p1: &Self, p2: &Self, p3: &Self) -> T {
        (*p2 - *p1).parallelogram_area(&(*p3 - *p1))
    }

    /// Area of the triangle `p1 p2 p3`.
    pub fn triangle_area_of(p1: &Self, p2: &Self, p3: &Self) -> T {
        (*p2 - *p1).triangle_area(&(*p3 - *p1))
    }

    /// Rotates `self` around `unit_axis` by `angle` (Rodrigues' formula).
    ///
    /// `unit_axis` must be unit length; debug builds assert it.
    pub fn rotate_around_axis(&self, unit_axis: &Self, angle: impl Into<Radians<T>>) -> Self {
        debug_assert!(
            (unit_axis.square_length() - T::one()).abs() <= T::TOLERANCE,
            "rotation axis must be unit length: {unit_axis:?}"
        );
        let (sin, cos) = angle.into().value().sin_cos();
        let along = *unit_axis * (unit_axis.dot(self) * (T::one() - cos));
        *self * cos + unit_axis.cross(self) * sin + along
    }

    /// In-place form of [`Vector::rotate_around_axis`].
    pub fn rotate_around_axis_mut(
        &mut self,
        unit_axis: &Self,
        angle: impl Into<Radians<T>>,
    ) -> &mut Self {
        *self = self.rotate_around_axis(unit_axis, angle);
        self
    }
}

impl<T: Scalar> Vector<4, T> {
    /// First component.
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Second component.
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Third component.
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Fourth component.
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Drops the fourth component.
    pub fn truncate(self) -> Vector<3, T> {
        Vector::new([self.data[0], self.data[1], self.data[2]])
    }
}

impl<const N: usize, T: Scalar> Default for Vector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T: Scalar> From<[T; N]> for Vector<N, T> {
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize, T: Scalar> From<Vector<N, T>> for [T; N] {
    fn from(value: Vector<N, T>) -> Self {
        value.data
    }
}

impl<const N: usize, T: Scalar> AsRef<[T]> for Vector<N, T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<const N: usize, T: Scalar> AsMut<[T]> for Vector<N, T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<const N: usize, T: Scalar> Index<usize> for Vector<N, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < N, "vector index {index} out of range (length {N})");
        &self.data[index]
    }
}

impl<const N: usize, T: Scalar> IndexMut<usize> for Vector<N, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "vector index {index} out of range (length {N})");
        &mut self.data[index]
    }
}

impl<const N: usize, T: Scalar> PartialEq for Vector<N, T> {
    fn eq(&self, other: &Self) -> bool {
        <DefaultEquality as EqualityPolicy>::eq(self, other)
    }
}

impl<const N: usize, T: Scalar + fmt::Display> fmt::Display for Vector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(c, f)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_and_unchecked_reads_agree() {
        let v = Vec3::<i32>::new([4, 5, 6]);
        assert_eq!(v.at(2), Ok(v[2]));
        assert_eq!(v.at(3), Err(MathError::VectorIndex { index: 3, len: 3 }));
    }

    #[test]
    fn resize_zero_fills_and_truncates() {
        let v = Vec3::<f32>::new([1.0, 2.0, 3.0]);
        assert_eq!(v.resize::<5>().to_array(), [1.0, 2.0, 3.0, 0.0, 0.0]);
        assert_eq!(v.resize::<2>().to_array(), [1.0, 2.0]);
    }

    #[test]
    fn display_lists_components() {
        assert_eq!(Vec2::<i32>::new([1, -2]).to_string(), "(1, -2)");
    }
}
