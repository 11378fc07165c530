// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Unit-tagged angles.
//!
//! An [`Angle`] carries its unit in the type so radians and degrees cannot be
//! mixed by accident. Conversions are explicit (`to_radians`, `to_degrees`,
//! or `From`).

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use crate::scalar::Real;

/// Converts degrees to radians.
pub fn deg_to_rad<T: Real>(value: T) -> T {
    value * (T::PI / T::from_f64(180.0))
}

/// Converts radians to degrees.
pub fn rad_to_deg<T: Real>(value: T) -> T {
    value * (T::from_f64(180.0) / T::PI)
}

/// Marker for an angle unit.
pub trait AngleUnit: Copy + fmt::Debug + Default + Send + Sync + 'static {
    /// Short unit suffix used by `Display`.
    const SUFFIX: &'static str;

    /// Converts a value in this unit to radians.
    fn to_radians<T: Real>(value: T) -> T;

    /// Converts a value in radians to this unit.
    fn from_radians<T: Real>(value: T) -> T;
}

/// Radian unit marker.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radian;

/// Degree unit marker.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree;

impl AngleUnit for Radian {
    const SUFFIX: &'static str = "rad";

    fn to_radians<T: Real>(value: T) -> T {
        value
    }

    fn from_radians<T: Real>(value: T) -> T {
        value
    }
}

impl AngleUnit for Degree {
    const SUFFIX: &'static str = "deg";

    fn to_radians<T: Real>(value: T) -> T {
        deg_to_rad(value)
    }

    fn from_radians<T: Real>(value: T) -> T {
        rad_to_deg(value)
    }
}

/// A scalar angle tagged with its unit.
///
/// Serialises as the bare number; the unit lives in the type.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Angle<U: AngleUnit, T: Real = f32> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

/// Angle in radians.
pub type Radians<T = f32> = Angle<Radian, T>;

/// Angle in degrees.
pub type Degrees<T = f32> = Angle<Degree, T>;

impl<U: AngleUnit, T: Real> Angle<U, T> {
    /// Wraps `value`, interpreted in unit `U`.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the raw value in unit `U`.
    pub fn value(self) -> T {
        self.value
    }

    /// Converts to radians.
    pub fn to_radians(self) -> Angle<Radian, T> {
        Angle::new(U::to_radians(self.value))
    }

    /// Converts to degrees.
    pub fn to_degrees(self) -> Angle<Degree, T> {
        Angle::new(Degree::from_radians(U::to_radians(self.value)))
    }
}

impl<T: Real> From<Angle<Degree, T>> for Angle<Radian, T> {
    fn from(angle: Angle<Degree, T>) -> Self {
        angle.to_radians()
    }
}

impl<T: Real> From<Angle<Radian, T>> for Angle<Degree, T> {
    fn from(angle: Angle<Radian, T>) -> Self {
        angle.to_degrees()
    }
}

impl<U: AngleUnit, T: Real> Add for Angle<U, T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<U: AngleUnit, T: Real> Sub for Angle<U, T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<U: AngleUnit, T: Real> Neg for Angle<U, T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: AngleUnit, T: Real> Mul<T> for Angle<U, T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U: AngleUnit, T: Real + fmt::Display> fmt::Display for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, U::SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deg_rad_roundtrip_basic_angles() {
        for deg in [0.0_f64, 45.0, 90.0, 180.0, -90.0] {
            let back = Degrees::<f64>::new(deg).to_radians().to_degrees().value();
            assert!((back - deg).abs() < 1e-12, "{deg} -> {back}");
        }
    }

    #[test]
    fn from_conversion_is_explicit_unit_change() {
        let r: Radians<f32> = Degrees::<f32>::new(180.0).into();
        assert!((r.value() - core::f32::consts::PI).abs() < 1e-6);
        assert_eq!(format!("{}", Radians::<f32>::new(1.5)), "1.5rad");
    }
}
