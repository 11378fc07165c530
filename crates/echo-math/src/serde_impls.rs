// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Serde support for the const-generic containers.
//!
//! Vectors serialise as a sequence of `N` scalars, matrices as the flat
//! sequence of `R * C` scalars in storage order (what `Matrix::iter` yields).
//! Deserialisation demands the exact length.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Expected, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MathError;
use crate::matrix::{Convention, Matrix};
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Reads exactly `len` scalars from `seq`, handing each to `put`.
fn fill_from_seq<'de, A, T>(
    mut seq: A,
    len: usize,
    expected: &dyn Expected,
    mut put: impl FnMut(usize, T) -> Result<(), MathError>,
) -> Result<(), A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
{
    for index in 0..len {
        let value = seq
            .next_element::<T>()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(index, expected))?;
        put(index, value).map_err(<A::Error as de::Error>::custom)?;
    }
    if seq.next_element::<de::IgnoredAny>()?.is_some() {
        return Err(de::Error::invalid_length(len + 1, expected));
    }
    Ok(())
}

impl<const N: usize, T: Scalar + Serialize> Serialize for Vector<N, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct VectorVisitor<const N: usize, T>(PhantomData<T>);

impl<'de, const N: usize, T: Scalar + Deserialize<'de>> Visitor<'de> for VectorVisitor<N, T> {
    type Value = Vector<N, T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {N} scalars")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vector::<N, T>::zero();
        fill_from_seq(seq, N, &self, |index, value| {
            out.set_at(index, value).map(|_| ())
        })?;
        Ok(out)
    }
}

impl<'de, const N: usize, T: Scalar + Deserialize<'de>> Deserialize<'de> for Vector<N, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(VectorVisitor::<N, T>(PhantomData))
    }
}

impl<const R: usize, const C: usize, T: Scalar + Serialize, V: Convention> Serialize
    for Matrix<R, C, T, V>
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct MatrixVisitor<const R: usize, const C: usize, T, V>(PhantomData<(T, V)>);

impl<'de, const R: usize, const C: usize, T: Scalar + Deserialize<'de>, V: Convention> Visitor<'de>
    for MatrixVisitor<R, C, T, V>
{
    type Value = Matrix<R, C, T, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a flat sequence of {} scalars", R * C)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Matrix::<R, C, T, V>::zero();
        fill_from_seq(seq, R * C, &self, |index, value| {
            out.set_data(index, value).map(|_| ())
        })?;
        Ok(out)
    }
}

impl<'de, const R: usize, const C: usize, T: Scalar + Deserialize<'de>, V: Convention>
    Deserialize<'de> for Matrix<R, C, T, V>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(MatrixVisitor::<R, C, T, V>(PhantomData))
    }
}
