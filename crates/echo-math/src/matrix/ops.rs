// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Element-wise operators for [`Matrix`], built on the vector helpers.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use super::{Convention, Matrix};
use crate::scalar::Scalar;
use crate::vector::{map_in_place, zip_in_place};

macro_rules! matrix_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $sym:tt;)*) => {$(
        impl<
                const R: usize,
                const C: usize,
                const R2: usize,
                const C2: usize,
                T: Scalar + $Op<Output = T>,
                V: Convention,
            > $OpAssign<Matrix<R2, C2, T, V>> for Matrix<R, C, T, V>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Matrix<R2, C2, T, V>) {
                for (dst, src) in self.lanes_mut().iter_mut().zip(rhs.lanes()) {
                    zip_in_place(
                        AsMut::<[T]>::as_mut(dst),
                        AsRef::<[T]>::as_ref(src),
                        |a, b| a $sym b,
                    );
                }
            }
        }

        impl<
                const R: usize,
                const C: usize,
                const R2: usize,
                const C2: usize,
                T: Scalar + $Op<Output = T>,
                V: Convention,
            > $Op<Matrix<R2, C2, T, V>> for Matrix<R, C, T, V>
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: Matrix<R2, C2, T, V>) -> Self {
                <Self as $OpAssign<Matrix<R2, C2, T, V>>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<const R: usize, const C: usize, T: Scalar + $Op<Output = T>, V: Convention>
            $OpAssign<T> for Matrix<R, C, T, V>
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                for lane in self.lanes_mut() {
                    map_in_place(AsMut::<[T]>::as_mut(lane), |a| a $sym rhs);
                }
            }
        }

        impl<const R: usize, const C: usize, T: Scalar + $Op<Output = T>, V: Convention> $Op<T>
            for Matrix<R, C, T, V>
        {
            type Output = Self;

            #[inline]
            fn $op(mut self, rhs: T) -> Self {
                <Self as $OpAssign<T>>::$op_assign(&mut self, rhs);
                self
            }
        }
    )*};
}

matrix_ops! {
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

macro_rules! scalar_lhs_ops {
    ([$($ty:ty),* $(,)?] $ops:tt) => {
        $(scalar_lhs_ops!(@one $ty, $ops);)*
    };
    (@one $ty:ty, [$($Op:ident::$op:ident, $sym:tt;)*]) => {$(
        impl<const R: usize, const C: usize, V: Convention> $Op<Matrix<R, C, $ty, V>> for $ty {
            type Output = Matrix<R, C, $ty, V>;

            #[inline]
            fn $op(self, rhs: Matrix<R, C, $ty, V>) -> Matrix<R, C, $ty, V> {
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

impl<const R: usize, const C: usize, T: Scalar + Neg<Output = T>, V: Convention> Neg
    for Matrix<R, C, T, V>
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const R: usize, const C: usize, T: Scalar + Not<Output = T>, V: Convention> Not
    for Matrix<R, C, T, V>
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|c| !c)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, RowMajor};

    #[test]
    fn scalar_ops_touch_every_element() {
        let m = Matrix::<2, 2, i32>::from_rows([[1, 2], [3, 4]]);
        assert_eq!((m * 2).iter().copied().collect::<Vec<_>>(), [2, 6, 4, 8]);
        assert_eq!((10_i32 - m).element(1, 0), Ok(7));
    }

    #[test]
    fn smaller_rhs_only_touches_the_overlap() {
        let mut big = Matrix::<3, 3, i32, RowMajor>::splat(1);
        big += Matrix::<2, 2, i32, RowMajor>::splat(10);
        assert_eq!(big.row(0).map(|r| r.to_array()), Ok([11, 11, 1]));
        assert_eq!(big.row(1).map(|r| r.to_array()), Ok([11, 11, 1]));
        assert_eq!(big.row(2).map(|r| r.to_array()), Ok([1, 1, 1]));
    }

    #[test]
    fn star_is_element_wise_not_the_product() {
        let a = Matrix::<2, 2, f32>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let hadamard = a * a;
        assert_eq!(hadamard.element(0, 1), Ok(4.0));
        assert_eq!(a.multiply(&a).element(0, 1), Ok(10.0));
    }
}
