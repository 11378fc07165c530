// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised by the checked accessors of vectors and matrices.
///
/// Unchecked indexing (`v[i]`, `m[i]`) never produces these; it is a
/// programmer error to index out of range there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// `Vector::at`/`Vector::set_at` index was not below the vector length.
    #[error("vector index {index} out of range (length {len})")]
    VectorIndex {
        /// Requested index.
        index: usize,
        /// Vector length.
        len: usize,
    },
    /// `Matrix::at` lane index was not below the number of lanes.
    #[error("matrix lane {index} out of range ({lanes} lanes)")]
    MatrixLane {
        /// Requested lane.
        index: usize,
        /// Number of lanes in the matrix.
        lanes: usize,
    },
    /// `Matrix::get_data` flat index was not below `rows * columns`.
    #[error("matrix data index {index} out of range ({len} scalars)")]
    MatrixData {
        /// Requested flat index.
        index: usize,
        /// Number of scalars in the matrix.
        len: usize,
    },
    /// `Matrix::element` row/column pair was outside the matrix.
    #[error("matrix element ({row}, {col}) out of range ({rows}x{cols})")]
    MatrixElement {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
}
