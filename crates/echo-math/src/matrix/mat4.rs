// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::{ColumnMajor, Convention, Matrix};
use crate::angle::Radians;
use crate::quat::Quaternion;
use crate::scalar::Real;
use crate::vector::Vec3;

/// 4×4 matrix for affine transforms.
///
/// A plain alias: every generic matrix operation applies. The helpers below
/// build and apply transforms with the usual column-vector convention
/// (`p' = M * p`), independent of the storage convention `V`.
///
/// # Examples
/// ```
/// use echo_math::{Matrix4, Vec3};
/// let t = Matrix4::<f32>::translation(Vec3::new([5.0, -3.0, 2.0]));
/// let p = Vec3::<f32>::new([2.0, 4.0, -1.0]);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
pub type Matrix4<T = f32, V = ColumnMajor> = Matrix<4, 4, T, V>;

impl<T: Real, V: Convention> Matrix<4, 4, T, V> {
    /// Translation by `offset`; it occupies the last column.
    pub fn translation(offset: Vec3<T>) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([
            [l, o, o, offset.x()],
            [o, l, o, offset.y()],
            [o, o, l, offset.z()],
            [o, o, o, l],
        ])
    }

    /// Non-uniform scale.
    pub fn scale(factors: Vec3<T>) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([
            [factors.x(), o, o, o],
            [o, factors.y(), o, o],
            [o, o, factors.z(), o],
            [o, o, o, l],
        ])
    }

    /// Rotation around +X.
    pub fn rotation_x(angle: impl Into<Radians<T>>) -> Self {
        let (s, c) = angle.into().value().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[l, o, o, o], [o, c, -s, o], [o, s, c, o], [o, o, o, l]])
    }

    /// Rotation around +Y.
    pub fn rotation_y(angle: impl Into<Radians<T>>) -> Self {
        let (s, c) = angle.into().value().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, o, s, o], [o, l, o, o], [-s, o, c, o], [o, o, o, l]])
    }

    /// Rotation around +Z.
    pub fn rotation_z(angle: impl Into<Radians<T>>) -> Self {
        let (s, c) = angle.into().value().sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::from_rows([[c, -s, o, o], [s, c, o, o], [o, o, l, o], [o, o, o, l]])
    }

    /// Rotation around `unit_axis`; agrees with [`Quaternion::from_axis_angle`].
    pub fn rotation_axis_angle(unit_axis: Vec3<T>, angle: impl Into<Radians<T>>) -> Self {
        Self::from_quaternion(&Quaternion::from_axis_angle(unit_axis, angle))
    }

    /// Rotation matrix of `q` (normalised first).
    pub fn from_quaternion(q: &Quaternion<T>) -> Self {
        q.to_matrix4()
    }

    /// Transforms a point (`w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vec3<T>) -> Vec3<T> {
        self.apply(point, T::one())
    }

    /// Transforms a direction (`w = 0`: translation is ignored).
    pub fn transform_direction(&self, direction: &Vec3<T>) -> Vec3<T> {
        self.apply(direction, T::zero())
    }

    fn apply(&self, v: &Vec3<T>, w: T) -> Vec3<T> {
        let row = |r| {
            self.get(r, 0) * v.x()
                + self.get(r, 1) * v.y()
                + self.get(r, 2) * v.z()
                + self.get(r, 3) * w
        };
        Vec3::new([row(0), row(1), row(2)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RowMajor;

    fn approx(a: Vec3<f64>, b: [f64; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn direction_ignores_translation() {
        let t = Matrix4::<f64>::translation(Vec3::new([1.0, 2.0, 3.0]));
        let d = Vec3::<f64>::new([0.0, 0.0, 1.0]);
        assert!(approx(t.transform_direction(&d), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn rotation_z_quarter_turn_maps_x_to_y() {
        let r = Matrix4::<f64, RowMajor>::rotation_z(Radians::<f64>::new(
            core::f64::consts::FRAC_PI_2,
        ));
        let p = Vec3::<f64>::new([1.0, 0.0, 0.0]);
        assert!(approx(r.transform_point(&p), [0.0, 1.0, 0.0]));
    }

    #[test]
    fn axis_angle_matches_elementary_rotation() {
        let angle = Radians::<f64>::new(0.7);
        let a = Matrix4::<f64>::rotation_axis_angle(Vec3::new([0.0, 1.0, 0.0]), angle);
        let b = Matrix4::<f64>::rotation_y(angle);
        assert!(a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-12));
    }
}
