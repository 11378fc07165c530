// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Operator impls for [`Vector`].
//!
//! All element-wise work funnels through [`zip_in_place`] and
//! [`map_in_place`]; matrices reuse the same two helpers lane by lane.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use super::Vector;
use crate::scalar::Scalar;

/// Combines `dst[i] = op(dst[i], src[i])` for `i < min(dst.len(), src.len())`.
///
/// Elements of `dst` past the shorter length are left untouched.
#[inline]
pub(crate) fn zip_in_place<T: Copy>(dst: &mut [T], src: &[T], op: impl Fn(T, T) -> T) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = op(*d, s);
    }
}

/// Applies `dst[i] = op(dst[i])` to every element.
#[inline]
pub(crate) fn map_in_place<T: Copy>(dst: &mut [T], op: impl Fn(T) -> T) {
    for d in dst {
        *d = op(*d);
    }
}

// vector ∘ vector (lane-wise, lhs length wins) and vector ∘ scalar.
macro_rules! vector_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $sym:tt;)*) => {$(
        impl<const N: usize, const M: usize, T: Scalar + $Op<Output = T>> $OpAssign<Vector<M, T>>
            for Vector<N, T>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector<M, T>) {
                zip_in_place(self.as_mut_slice(), rhs.as_slice(), |a, b| a $sym b);
            }
        }

        impl<const N: usize, const M: usize, T: Scalar + $Op<Output = T>> $Op<Vector<M, T>>
            for Vector<N, T>
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: Vector<M, T>) -> Self {
                <Self as $OpAssign<Vector<M, T>>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<const N: usize, T: Scalar + $Op<Output = T>> $OpAssign<T> for Vector<N, T> {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                map_in_place(self.as_mut_slice(), |a| a $sym rhs);
            }
        }

        impl<const N: usize, T: Scalar + $Op<Output = T>> $Op<T> for Vector<N, T> {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: T) -> Self {
                <Self as $OpAssign<T>>::$op_assign(&mut self, rhs);
                self
            }
        }
    )*};
}

vector_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
    Rem::rem, RemAssign::rem_assign, %;
    BitAnd::bitand, BitAndAssign::bitand_assign, &;
    BitOr::bitor, BitOrAssign::bitor_assign, |;
    BitXor::bitxor, BitXorAssign::bitxor_assign, ^;
    Shl::shl, ShlAssign::shl_assign, <<;
    Shr::shr, ShrAssign::shr_assign, >>;
}

// scalar ∘ vector needs one impl per primitive (orphan rules).
macro_rules! scalar_lhs_ops {
    ([$($ty:ty),* $(,)?] $ops:tt) => {
        $(scalar_lhs_ops!(@one $ty, $ops);)*
    };
    (@one $ty:ty, [$($Op:ident::$op:ident, $sym:tt;)*]) => {$(
        impl<const N: usize> $Op<Vector<N, $ty>> for $ty {
            type Output = Vector<N, $ty>;

            #[inline]
            fn $op(self, rhs: Vector<N, $ty>) -> Vector<N, $ty> {
                rhs.map(|b| self $sym b)
            }
        }
    )*};
}

scalar_lhs_ops!(
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64]
    [Add::add, +; Sub::sub, -; Mul::mul, *; Div::div, /; Rem::rem, %;]
);

scalar_lhs_ops!(
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
    [BitAnd::bitand, &; BitOr::bitor, |; BitXor::bitxor, ^; Shl::shl, <<; Shr::shr, >>;]
);

impl<const N: usize, T: Scalar + Neg<Output = T>> Neg for Vector<N, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const N: usize, T: Scalar + Not<Output = T>> Not for Vector<N, T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|c| !c)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Vec2, Vec3, Vec4};

    #[test]
    fn shorter_rhs_leaves_tail_untouched() {
        let mut a = Vec4::<i32>::new([1, 1, 1, 1]);
        a *= Vec2::<i32>::new([5, 6]);
        assert_eq!(a.to_array(), [5, 6, 1, 1]);
    }

    #[test]
    fn longer_rhs_is_truncated_to_lhs() {
        let a = Vec2::<f32>::new([1.0, 2.0]) - Vec4::<f32>::new([1.0, 1.0, 9.0, 9.0]);
        assert_eq!(a.to_array(), [0.0, 1.0]);
    }

    #[test]
    fn scalar_on_either_side_broadcasts() {
        let v = Vec3::<f64>::new([1.0, 2.0, 4.0]);
        assert_eq!((v * 2.0).to_array(), [2.0, 4.0, 8.0]);
        assert_eq!((8.0_f64 / v).to_array(), [8.0, 4.0, 2.0]);
        assert_eq!((1.0_f64 - v).to_array(), [0.0, -1.0, -3.0]);
    }

    #[test]
    fn integer_vectors_support_bitwise_and_shifts() {
        let v = Vec3::<u8>::new([0b1010, 0b1100, 0xFF]);
        assert_eq!((v & 0b1000).to_array(), [0b1000, 0b1000, 0b1000]);
        assert_eq!((v << 1).to_array(), [0b10100, 0b11000, 0xFE]);
        assert_eq!((!v).to_array(), [0xF5, 0xF3, 0x00]);
        assert_eq!((1_u8 << Vec2::<u8>::new([1, 3])).to_array(), [2, 8]);
    }

    #[test]
    fn negation_flips_every_component() {
        assert_eq!((-Vec2::<i16>::new([3, -4])).to_array(), [-3, 4]);
    }
}
