// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric capability traits for Echo math.
//!
//! Every generic type in this crate is gated on [`Scalar`], the "is this an
//! arithmetic type" predicate. The trait is sealed: it is implemented for the
//! primitive integers and floats and nothing else, so instantiating a
//! `Vector<3, String>` is rejected at compile time rather than at run time.
//!
//! [`Real`] narrows the set to floating-point types and adds the
//! transcendental surface (`sqrt`, `sin`, `cos`, `acos`). Those are routed
//! through `libm` so identical inputs produce identical bits on every target.

use core::fmt::Debug;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

mod sealed {
    pub trait Sealed {}
}

/// Arithmetic scalar accepted by vectors, matrices, and quaternions.
///
/// Implemented for `i8..=i128`, `isize`, `u8..=u128`, `usize`, `f32`, and
/// `f64`. The trait cannot be implemented outside this crate.
pub trait Scalar:
    sealed::Sealed
    + Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
{
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns the multiplicative identity.
    fn one() -> Self;

    /// Numeric equality used by component-wise vector comparison.
    ///
    /// Exact for integers. Floats compare equal when the difference is within
    /// machine epsilon scaled by the larger magnitude (and never below one
    /// epsilon, so values around zero still compare sensibly).
    fn approx_eq(self, other: Self) -> bool;

    /// Lossy conversion to `f64` (`as` semantics).
    fn to_f64(self) -> f64;
}

/// Direct `as` conversion from another primitive scalar.
///
/// Implemented for every pair of primitives, so `i64 -> i128` and
/// `i64 -> i64` stay exact instead of passing through `f64`.
pub trait CastFrom<U: Scalar>: Scalar {
    /// Converts `value` with `as` semantics (truncating floats toward zero,
    /// saturating float-to-integer, wrapping integer narrowing).
    fn cast_from(value: U) -> Self;
}

/// Floating-point scalar with the transcendental operations geometry needs.
pub trait Real: Scalar + Neg<Output = Self> {
    /// Machine epsilon.
    const EPSILON: Self;
    /// Geometric tolerance used by degeneracy checks and contact tests.
    const TOLERANCE: Self;
    /// Archimedes' constant.
    const PI: Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Returns `(sin, cos)` of `self` (radians).
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Arc cosine; the argument is clamped to `[-1, 1]` first so rounding
    /// noise on unit values never yields NaN.
    fn acos(self) -> Self;

    /// Converts an `f64` literal into this type.
    fn from_f64(value: f64) -> Self;

    /// Returns the larger of two values.
    fn max(self, other: Self) -> Self {
        if self >= other {
            self
        } else {
            other
        }
    }

    /// Returns the smaller of two values.
    fn min(self, other: Self) -> Self {
        if self <= other {
            self
        } else {
            other
        }
    }

    /// Clamps `self` into `[lo, hi]`.
    fn clamp(self, lo: Self, hi: Self) -> Self {
        debug_assert!(lo <= hi, "invalid clamp range: {lo:?} > {hi:?}");
        self.max(lo).min(hi)
    }
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_scalar {
    ($ty:ident, $tolerance:expr, $sqrt:path, $abs:path, $sin:path, $cos:path, $acos:path) => {
        impl sealed::Sealed for $ty {}

        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                if self == other {
                    return true;
                }
                let scale = $abs(self).max($abs(other)).max(1.0);
                $abs(self - other) <= $ty::EPSILON * scale
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }

        impl Real for $ty {
            const EPSILON: Self = $ty::EPSILON;
            const TOLERANCE: Self = $tolerance;
            const PI: Self = core::$ty::consts::PI;

            #[inline]
            fn sqrt(self) -> Self {
                $sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $abs(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $cos(self)
            }

            #[inline]
            fn acos(self) -> Self {
                $acos(Real::clamp(self, -1.0, 1.0))
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }
    };
}

impl_float_scalar!(f32, 1e-5, libm::sqrtf, libm::fabsf, libm::sinf, libm::cosf, libm::acosf);
impl_float_scalar!(f64, 1e-9, libm::sqrt, libm::fabs, libm::sin, libm::cos, libm::acos);

macro_rules! impl_cast_from {
    (@into $dst:ty; $($src:ty),*) => {$(
        impl CastFrom<$src> for $dst {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn cast_from(value: $src) -> Self {
                value as $dst
            }
        }
    )*};
    ($($dst:ty),* $(,)?) => {$(
        impl_cast_from!(@into $dst;
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
    )*};
}

impl_cast_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_equality_is_exact() {
        assert!(3_i32.approx_eq(3));
        assert!(!3_u8.approx_eq(4));
    }

    #[test]
    fn float_equality_tolerates_rounding() {
        assert!((0.1_f32 + 0.2).approx_eq(0.3));
        assert!(!1.0_f64.approx_eq(1.0 + 1e-9));
        assert!(1e10_f64.approx_eq(1e10 + 1e-7));
    }

    #[test]
    fn cast_from_skips_the_f64_detour() {
        let wide: i64 = 9_007_199_254_740_993;
        assert_eq!(i64::cast_from(wide), wide);
        assert_eq!(u128::cast_from(u64::MAX), u128::from(u64::MAX));
        assert_eq!(u8::cast_from(300_i32), 44);
        assert_eq!(i32::cast_from(-2.9_f32), -2);
    }

    #[test]
    fn acos_clamps_out_of_domain_noise() {
        assert_eq!(Real::acos(1.000_000_1_f32), 0.0);
        assert!(Real::acos(-1.000_000_1_f64).is_finite());
    }
}
