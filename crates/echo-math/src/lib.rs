// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Compile-time-sized linear algebra for Echo.

This crate provides:
- Scalar capability traits (`Scalar`, `Real`) gating every generic type.
- Fixed-length vectors (`Vector<N, T>`, `Vec2`/`Vec3`/`Vec4`).
- Fixed-size matrices with a compile-time storage convention
  (`Matrix<R, C, T, ColumnMajor | RowMajor>`, `Matrix4` transform helpers).
- Quaternions and unit-tagged angles (`Radians`, `Degrees`).

Design notes:
- Sizes are const generics; zero-sized vectors and matrices do not compile.
- Operators are generated from two element-wise helpers; vector ∘ vector
  walks the shorter length and leaves the rest of the left operand alone.
- Checked accessors return `Result<_, MathError>`; indexing is unchecked
  (debug-asserted) for hot loops.
- Transcendentals go through `libm` so results are bit-identical across
  targets.
"]

mod angle;
mod error;
mod matrix;
mod quat;
mod scalar;
#[cfg(feature = "serde")]
mod serde_impls;
mod vector;

pub use angle::{deg_to_rad, rad_to_deg, Angle, AngleUnit, Degree, Degrees, Radian, Radians};
pub use error::MathError;
pub use matrix::{
    ColumnMajor, Convention, LaneArray, Matrix, Matrix2, Matrix3, Matrix4, MatrixConvention,
    RowMajor,
};
pub use quat::Quaternion;
pub use scalar::{CastFrom, Real, Scalar};
pub use vector::{
    ComponentWise, DefaultEquality, EqualityPolicy, SquaredLength, Vec2, Vec3, Vec4, Vector,
};
