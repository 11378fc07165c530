// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-size matrices stored as arrays of vector lanes.
//!
//! A `Matrix<R, C, T, V>` holds `R * C` scalars grouped into lanes. The
//! storage [`Convention`] `V` decides what a lane is:
//!
//! * [`ColumnMajor`] (default): lanes are the `C` columns, each `R` long;
//! * [`RowMajor`]: lanes are the `R` rows, each `C` long.
//!
//! The same storage is addressable three ways, and all three agree:
//! `m[lane][offset]` / [`Matrix::at`] by lane, [`Matrix::get_data`] by flat
//! index (`lane * vector_length() + offset`), and [`Matrix::element`] by
//! `(row, col)` regardless of convention.
//!
//! Operators (`+ - * / % & | ^ << >>`) are element-wise, exactly like
//! vectors: matrix ∘ scalar broadcasts, matrix ∘ matrix combines lane by lane
//! and leaves lanes (and lane tails) the right operand does not cover
//! untouched. The algebraic product is [`Matrix::multiply`].
//!
//! # Examples
//! ```
//! use echo_math::{Matrix, RowMajor};
//! let m = Matrix::<2, 3, i32>::from_rows([[1, 2, 3], [4, 5, 6]]);
//! // column-major: lane 1 is the second column
//! assert_eq!(m[1].to_array(), [2, 5]);
//! assert_eq!(m.get_data(2), Ok(2));
//!
//! let r: Matrix<2, 3, i32, RowMajor> = m.convert();
//! assert_eq!(r[1].to_array(), [4, 5, 6]);
//! assert_eq!(r.element(1, 2), m.element(1, 2));
//! ```

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::MathError;
use crate::scalar::Scalar;
use crate::vector::{map_in_place, Vector};

mod mat4;
mod ops;

pub use mat4::Matrix4;

/// Storage convention tag.
///
/// A lane is one stored vector. Under [`ColumnMajor`] lanes are columns, so
/// `number_of_lanes() == C` and `vector_length() == R`; [`RowMajor`] swaps
/// both.
pub trait Convention: Copy + fmt::Debug + Default + Send + Sync + 'static {
    /// Lane storage for an `R x C` matrix of `T` under this convention.
    type Lanes<T: Scalar, const R: usize, const C: usize>: LaneArray<T>;

    /// Runtime name of the convention.
    const KIND: MatrixConvention;

    /// Maps `(row, col)` to `(lane, offset)`.
    fn locate(row: usize, col: usize) -> (usize, usize);
}

/// Runtime reflection of a [`Convention`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MatrixConvention {
    /// Lanes are rows.
    RowMajor,
    /// Lanes are columns.
    ColumnMajor,
}

/// Lanes are rows.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RowMajor;

/// Lanes are columns.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl Convention for RowMajor {
    type Lanes<T: Scalar, const R: usize, const C: usize> = [Vector<C, T>; R];

    const KIND: MatrixConvention = MatrixConvention::RowMajor;

    #[inline]
    fn locate(row: usize, col: usize) -> (usize, usize) {
        (row, col)
    }
}

impl Convention for ColumnMajor {
    type Lanes<T: Scalar, const R: usize, const C: usize> = [Vector<R, T>; C];

    const KIND: MatrixConvention = MatrixConvention::ColumnMajor;

    #[inline]
    fn locate(row: usize, col: usize) -> (usize, usize) {
        (col, row)
    }
}

/// An array of equally long vector lanes; the backing store of [`Matrix`].
///
/// Implemented for `[Vector<L, T>; K]` only.
pub trait LaneArray<T: Scalar>: Copy + fmt::Debug + Send + Sync + 'static {
    /// One lane.
    type Lane: Copy
        + fmt::Debug
        + AsRef<[T]>
        + AsMut<[T]>
        + Index<usize, Output = T>
        + IndexMut<usize, Output = T>;

    /// Number of lanes.
    const LANES: usize;

    /// Scalars per lane.
    const LANE_LEN: usize;

    /// Every scalar set to `value`.
    fn filled(value: T) -> Self;

    /// Borrows the lanes.
    fn lanes(&self) -> &[Self::Lane];

    /// Mutably borrows the lanes.
    fn lanes_mut(&mut self) -> &mut [Self::Lane];
}

impl<T: Scalar, const L: usize, const K: usize> LaneArray<T> for [Vector<L, T>; K] {
    type Lane = Vector<L, T>;

    const LANES: usize = K;
    const LANE_LEN: usize = L;

    fn filled(value: T) -> Self {
        [Vector::splat(value); K]
    }

    fn lanes(&self) -> &[Vector<L, T>] {
        self
    }

    fn lanes_mut(&mut self) -> &mut [Vector<L, T>] {
        self
    }
}

/// `R x C` matrix of `T` stored under convention `V`.
///
/// Invariant: `R >= 1` and `C >= 1`, enforced at compile time by every
/// constructor.
#[derive(Copy, Clone, Debug)]
pub struct Matrix<const R: usize, const C: usize, T: Scalar = f32, V: Convention = ColumnMajor>
{
    lanes: V::Lanes<T, R, C>,
}

/// 2x2 matrix.
pub type Matrix2<T = f32, V = ColumnMajor> = Matrix<2, 2, T, V>;
/// 3x3 matrix.
pub type Matrix3<T = f32, V = ColumnMajor> = Matrix<3, 3, T, V>;

impl<const R: usize, const C: usize, T: Scalar, V: Convention> Matrix<R, C, T, V> {
    const NON_EMPTY: () = assert!(R > 0 && C > 0, "zero-sized matrices are ill-formed");

    /// Wraps already-built lanes (columns for [`ColumnMajor`], rows for
    /// [`RowMajor`]).
    pub fn from_lanes(lanes: V::Lanes<T, R, C>) -> Self {
        let () = Self::NON_EMPTY;
        Self { lanes }
    }

    /// Every element set to `value`.
    pub fn splat(value: T) -> Self {
        Self::from_lanes(LaneArray::filled(value))
    }

    /// The zero matrix.
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Builds a matrix from row arrays, whatever the storage convention.
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        let mut out = Self::zero();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out.put(r, c, value);
            }
        }
        out
    }

    /// Builds a matrix from column arrays, whatever the storage convention.
    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        let mut out = Self::zero();
        for (c, column) in columns.iter().enumerate() {
            for (r, &value) in column.iter().enumerate() {
                out.put(r, c, value);
            }
        }
        out
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.lanes = LaneArray::filled(value);
        self
    }

    /// Storage convention of this matrix type.
    pub const fn convention() -> MatrixConvention {
        V::KIND
    }

    /// Row count (`R`).
    pub const fn rows() -> usize {
        R
    }

    /// Column count (`C`).
    pub const fn columns() -> usize {
        C
    }

    /// Number of lanes: `C` under [`ColumnMajor`], `R` under [`RowMajor`].
    pub const fn number_of_lanes() -> usize {
        <V::Lanes<T, R, C> as LaneArray<T>>::LANES
    }

    /// Scalars per lane: `R` under [`ColumnMajor`], `C` under [`RowMajor`].
    pub const fn vector_length() -> usize {
        <V::Lanes<T, R, C> as LaneArray<T>>::LANE_LEN
    }

    /// Total scalar count (`R * C`).
    pub const fn number_of_data() -> usize {
        R * C
    }

    /// Borrows the lanes.
    pub fn lanes(&self) -> &[<V::Lanes<T, R, C> as LaneArray<T>>::Lane] {
        self.lanes.lanes()
    }

    /// Mutably borrows the lanes.
    pub fn lanes_mut(&mut self) -> &mut [<V::Lanes<T, R, C> as LaneArray<T>>::Lane] {
        self.lanes.lanes_mut()
    }

    /// Iterates over every scalar in storage order (flat index order).
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.lanes()
            .iter()
            .flat_map(|lane| AsRef::<[T]>::as_ref(lane).iter())
    }

    /// Bounds-checked lane read.
    ///
    /// # Errors
    /// [`MathError::MatrixLane`] when `index >= number_of_lanes()`.
    pub fn at(
        &self,
        index: usize,
    ) -> Result<&<V::Lanes<T, R, C> as LaneArray<T>>::Lane, MathError> {
        self.lanes().get(index).ok_or(MathError::MatrixLane {
            index,
            lanes: Self::number_of_lanes(),
        })
    }

    /// Bounds-checked mutable lane access.
    ///
    /// # Errors
    /// [`MathError::MatrixLane`] when `index >= number_of_lanes()`.
    pub fn at_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut <V::Lanes<T, R, C> as LaneArray<T>>::Lane, MathError> {
        self.lanes_mut().get_mut(index).ok_or(MathError::MatrixLane {
            index,
            lanes: Self::number_of_lanes(),
        })
    }

    /// Bounds-checked read by flat index (storage order).
    ///
    /// # Errors
    /// [`MathError::MatrixData`] when `index >= R * C`.
    pub fn get_data(&self, index: usize) -> Result<T, MathError> {
        let len = Self::vector_length();
        self.lanes()
            .get(index / len)
            .and_then(|lane| AsRef::<[T]>::as_ref(lane).get(index % len))
            .copied()
            .ok_or(MathError::MatrixData {
                index,
                len: Self::number_of_data(),
            })
    }

    /// Bounds-checked write by flat index (storage order).
    ///
    /// # Errors
    /// [`MathError::MatrixData`] when `index >= R * C`.
    pub fn set_data(&mut self, index: usize, value: T) -> Result<&mut Self, MathError> {
        let len = Self::vector_length();
        let slot = self
            .lanes_mut()
            .get_mut(index / len)
            .and_then(|lane| AsMut::<[T]>::as_mut(lane).get_mut(index % len))
            .ok_or(MathError::MatrixData {
                index,
                len: Self::number_of_data(),
            })?;
        *slot = value;
        Ok(self)
    }

    /// Bounds-checked read by `(row, col)`.
    ///
    /// # Errors
    /// [`MathError::MatrixElement`] when `row >= R` or `col >= C`.
    pub fn element(&self, row: usize, col: usize) -> Result<T, MathError> {
        Self::check_element(row, col)?;
        Ok(self.get(row, col))
    }

    /// Bounds-checked write by `(row, col)`.
    ///
    /// # Errors
    /// [`MathError::MatrixElement`] when `row >= R` or `col >= C`.
    pub fn set_element(
        &mut self,
        row: usize,
        col: usize,
        value: T,
    ) -> Result<&mut Self, MathError> {
        Self::check_element(row, col)?;
        self.put(row, col, value);
        Ok(self)
    }

    /// Row `row` as a vector.
    ///
    /// # Errors
    /// [`MathError::MatrixElement`] when `row >= R`.
    pub fn row(&self, row: usize) -> Result<Vector<C, T>, MathError> {
        Self::check_element(row, 0)?;
        let mut out = Vector::<C, T>::zero();
        for (c, slot) in out.as_mut_slice().iter_mut().enumerate() {
            *slot = self.get(row, c);
        }
        Ok(out)
    }

    /// Column `col` as a vector.
    ///
    /// # Errors
    /// [`MathError::MatrixElement`] when `col >= C`.
    pub fn column(&self, col: usize) -> Result<Vector<R, T>, MathError> {
        Self::check_element(0, col)?;
        let mut out = Vector::<R, T>::zero();
        for (r, slot) in out.as_mut_slice().iter_mut().enumerate() {
            *slot = self.get(r, col);
        }
        Ok(out)
    }

    /// Returns the `C x R` transpose (same convention).
    pub fn transposed(&self) -> Matrix<C, R, T, V> {
        let mut out = Matrix::<C, R, T, V>::zero();
        for r in 0..R {
            for c in 0..C {
                out.put(c, r, self.get(r, c));
            }
        }
        out
    }

    /// Algebraic product `self * rhs`.
    pub fn multiply<const K: usize>(&self, rhs: &Matrix<C, K, T, V>) -> Matrix<R, K, T, V> {
        let mut out = Matrix::<R, K, T, V>::zero();
        for r in 0..R {
            for k in 0..K {
                let sum = (0..C).fold(T::zero(), |acc, c| acc + self.get(r, c) * rhs.get(c, k));
                out.put(r, k, sum);
            }
        }
        out
    }

    /// Matrix-vector product `self * v` (v as a column).
    pub fn transform_vector(&self, v: &Vector<C, T>) -> Vector<R, T> {
        let mut out = Vector::<R, T>::zero();
        for (r, slot) in out.as_mut_slice().iter_mut().enumerate() {
            *slot = v
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (c, &x)| acc + self.get(r, c) * x);
        }
        out
    }

    /// Narrowing/widening conversion to any size and convention: copies the
    /// overlapping `(row, col)` region and zero-fills the rest.
    pub fn convert<const R2: usize, const C2: usize, V2: Convention>(
        &self,
    ) -> Matrix<R2, C2, T, V2> {
        let mut out = Matrix::<R2, C2, T, V2>::zero();
        for r in 0..R.min(R2) {
            for c in 0..C.min(C2) {
                out.put(r, c, self.get(r, c));
            }
        }
        out
    }

    /// Applies `f` to every element.
    pub fn map(mut self, f: impl Fn(T) -> T) -> Self {
        for lane in self.lanes_mut() {
            map_in_place(AsMut::<[T]>::as_mut(lane), &f);
        }
        self
    }

    fn check_element(row: usize, col: usize) -> Result<(), MathError> {
        if row < R && col < C {
            Ok(())
        } else {
            Err(MathError::MatrixElement {
                row,
                col,
                rows: R,
                cols: C,
            })
        }
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> T {
        let (lane, offset) = V::locate(row, col);
        self.lanes()[lane][offset]
    }

    #[inline]
    pub(crate) fn put(&mut self, row: usize, col: usize, value: T) {
        let (lane, offset) = V::locate(row, col);
        self.lanes_mut()[lane][offset] = value;
    }
}

impl<const N: usize, T: Scalar, V: Convention> Matrix<N, N, T, V> {
    /// The identity matrix.
    pub fn identity() -> Self {
        let mut out = Self::zero();
        for i in 0..N {
            out.put(i, i, T::one());
        }
        out
    }
}

impl<const R: usize, const C: usize, T: Scalar, V: Convention> Default for Matrix<R, C, T, V> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const R: usize, const C: usize, T: Scalar, V: Convention> PartialEq for Matrix<R, C, T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(&a, &b)| a.approx_eq(b))
    }
}

impl<const R: usize, const C: usize, T: Scalar, V: Convention> Index<usize> for Matrix<R, C, T, V> {
    type Output = <V::Lanes<T, R, C> as LaneArray<T>>::Lane;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(
            index < Self::number_of_lanes(),
            "matrix lane {index} out of range ({} lanes)",
            Self::number_of_lanes()
        );
        &self.lanes()[index]
    }
}

impl<const R: usize, const C: usize, T: Scalar, V: Convention> IndexMut<usize>
    for Matrix<R, C, T, V>
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(
            index < Self::number_of_lanes(),
            "matrix lane {index} out of range ({} lanes)",
            Self::number_of_lanes()
        );
        &mut self.lanes_mut()[index]
    }
}

impl<const R: usize, const C: usize, T: Scalar + fmt::Display, V: Convention> fmt::Display
    for Matrix<R, C, T, V>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for r in 0..R {
            if r > 0 {
                f.write_str("; ")?;
            }
            for c in 0..C {
                if c > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(&self.get(r, c), f)?;
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_and_flat_views_agree_column_major() {
        let m = Matrix::<3, 3, i32>::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.get_data(0), Ok(m[0][0]));
        assert_eq!(m.get_data(1), Ok(m[0][1]));
        assert_eq!(m.get_data(3), Ok(m[1][0]));
        assert_eq!(m[1][0], 2);
        let flat: Vec<i32> = m.iter().copied().collect();
        assert_eq!(flat, [1, 4, 7, 2, 5, 8, 3, 6, 9]);
    }

    #[test]
    fn lane_shape_follows_convention() {
        type Col = Matrix<2, 3, f32, ColumnMajor>;
        type Row = Matrix<2, 3, f32, RowMajor>;
        assert_eq!((Col::number_of_lanes(), Col::vector_length()), (3, 2));
        assert_eq!((Row::number_of_lanes(), Row::vector_length()), (2, 3));
        assert_eq!(Col::convention(), MatrixConvention::ColumnMajor);
    }

    #[test]
    fn checked_accessors_report_bounds() {
        let mut m = Matrix::<2, 2, f64>::identity();
        assert_eq!(m.at(2).err(), Some(MathError::MatrixLane { index: 2, lanes: 2 }));
        assert_eq!(m.get_data(4), Err(MathError::MatrixData { index: 4, len: 4 }));
        assert!(m.set_element(0, 1, 3.0).is_ok());
        assert_eq!(m.element(0, 1), Ok(3.0));
        assert_eq!(
            m.element(2, 0),
            Err(MathError::MatrixElement { row: 2, col: 0, rows: 2, cols: 2 })
        );
    }
}
