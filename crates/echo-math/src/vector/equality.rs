// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Pluggable vector equality.
//!
//! `==` on vectors uses [`DefaultEquality`], which is [`ComponentWise`] unless
//! the `eq_squared_length` feature is enabled. Either policy is always
//! reachable explicitly through [`Vector::eq_with`].

use super::Vector;
use crate::scalar::Scalar;

/// A strategy for deciding whether two vectors are equal.
pub trait EqualityPolicy {
    /// Returns true when `lhs` and `rhs` are equal under this policy.
    fn eq<const N: usize, T: Scalar>(lhs: &Vector<N, T>, rhs: &Vector<N, T>) -> bool;
}

/// Every component pair compares equal ([`Scalar::approx_eq`]).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ComponentWise;

/// The squared lengths compare equal ([`Scalar::approx_eq`]).
///
/// Under this policy `(1, 0)` equals `(0, 1)`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SquaredLength;

impl EqualityPolicy for ComponentWise {
    fn eq<const N: usize, T: Scalar>(lhs: &Vector<N, T>, rhs: &Vector<N, T>) -> bool {
        lhs.iter().zip(rhs.iter()).all(|(&a, &b)| a.approx_eq(b))
    }
}

impl EqualityPolicy for SquaredLength {
    fn eq<const N: usize, T: Scalar>(lhs: &Vector<N, T>, rhs: &Vector<N, T>) -> bool {
        lhs.square_length().approx_eq(rhs.square_length())
    }
}

/// Policy used by `==` on vectors.
#[cfg(not(feature = "eq_squared_length"))]
pub type DefaultEquality = ComponentWise;

/// Policy used by `==` on vectors.
#[cfg(feature = "eq_squared_length")]
pub type DefaultEquality = SquaredLength;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;

    #[test]
    fn policies_disagree_on_rotated_unit_vectors() {
        let a = Vec2::<f32>::new([1.0, 0.0]);
        let b = Vec2::<f32>::new([0.0, 1.0]);
        assert!(!a.eq_with::<ComponentWise>(&b));
        assert!(a.eq_with::<SquaredLength>(&b));
    }

    #[test]
    fn component_wise_tolerates_float_rounding() {
        let a = Vec2::<f64>::new([0.1 + 0.2, 1.0]);
        let b = Vec2::<f64>::new([0.3, 1.0]);
        assert!(a.eq_with::<ComponentWise>(&b));
    }
}
