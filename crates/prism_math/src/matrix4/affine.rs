//! Constructors for affine transforms.

use super::Matrix4;
use crate::{
    angle::Radians,
    axis_angle::AxisAngle,
    quaternion::UnitQuaternion,
    vector::Vector3,
};

impl Matrix4 {
    /// Creates a matrix translating by the given vector.
    #[inline]
    pub const fn from_translation(translation: &Vector3) -> Self {
        let mut m = Self::identity();
        m.m30 = translation.x();
        m.m31 = translation.y();
        m.m32 = translation.z();
        m
    }

    /// Creates a matrix scaling each axis by the corresponding component of
    /// the given vector.
    #[inline]
    pub const fn from_nonuniform_scaling(scaling: &Vector3) -> Self {
        let mut m = Self::identity();
        m.m00 = scaling.x();
        m.m11 = scaling.y();
        m.m22 = scaling.z();
        m
    }

    /// Creates a matrix scaling uniformly by the given factor.
    #[inline]
    pub const fn from_scaling(scaling: f64) -> Self {
        Self::from_nonuniform_scaling(&Vector3::new(scaling, scaling, scaling))
    }

    /// Creates a matrix rotating by the given angle around the x-axis.
    pub fn rotation_x(angle: Radians) -> Self {
        let (sin_angle, cos_angle) = angle.0.sin_cos();
        let mut m = Self::identity();
        m.m11 = cos_angle;
        m.m12 = sin_angle;
        m.m21 = -sin_angle;
        m.m22 = cos_angle;
        m
    }

    /// Creates a matrix rotating by the given angle around the y-axis.
    pub fn rotation_y(angle: Radians) -> Self {
        let (sin_angle, cos_angle) = angle.0.sin_cos();
        let mut m = Self::identity();
        m.m00 = cos_angle;
        m.m02 = -sin_angle;
        m.m20 = sin_angle;
        m.m22 = cos_angle;
        m
    }

    /// Creates a matrix rotating by the given angle around the z-axis.
    pub fn rotation_z(angle: Radians) -> Self {
        let (sin_angle, cos_angle) = angle.0.sin_cos();
        let mut m = Self::identity();
        m.m00 = cos_angle;
        m.m01 = sin_angle;
        m.m10 = -sin_angle;
        m.m11 = cos_angle;
        m
    }

    /// Creates a rotation matrix from the given unit quaternion.
    pub fn from_unit_quaternion(rotation: &UnitQuaternion) -> Self {
        let (x, y, z, w) = (rotation.x(), rotation.y(), rotation.z(), rotation.w());

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        let mut m = Self::identity();
        m.m00 = 1.0 - 2.0 * (yy + zz);
        m.m01 = 2.0 * (xy + wz);
        m.m02 = 2.0 * (xz - wy);
        m.m10 = 2.0 * (xy - wz);
        m.m11 = 1.0 - 2.0 * (xx + zz);
        m.m12 = 2.0 * (yz + wx);
        m.m20 = 2.0 * (xz + wy);
        m.m21 = 2.0 * (yz - wx);
        m.m22 = 1.0 - 2.0 * (xx + yy);
        m
    }

    /// Creates a rotation matrix from the given axis-angle rotation, using
    /// Rodrigues' formula.
    pub fn from_axis_angle(rotation: &AxisAngle) -> Self {
        let (sin_angle, cos_angle) = rotation.angle().0.sin_cos();
        let one_minus_cos = 1.0 - cos_angle;
        let axis = rotation.axis().as_vector();
        let (x, y, z) = (axis.x(), axis.y(), axis.z());

        let mut m = Self::identity();
        m.m00 = cos_angle + x * x * one_minus_cos;
        m.m01 = x * y * one_minus_cos + z * sin_angle;
        m.m02 = x * z * one_minus_cos - y * sin_angle;
        m.m10 = x * y * one_minus_cos - z * sin_angle;
        m.m11 = cos_angle + y * y * one_minus_cos;
        m.m12 = y * z * one_minus_cos + x * sin_angle;
        m.m20 = x * z * one_minus_cos + y * sin_angle;
        m.m21 = y * z * one_minus_cos - x * sin_angle;
        m.m22 = cos_angle + z * z * one_minus_cos;
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::UnitVector3;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn rotation_around_z_axis_rotates_x_towards_y() {
        let m = Matrix4::rotation_z(Radians(0.5 * PI));
        assert_abs_diff_eq!(
            m.transform_vector(&Vector3::unit_x()),
            Vector3::unit_y(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotation_around_x_axis_rotates_y_towards_z() {
        let m = Matrix4::rotation_x(Radians(0.5 * PI));
        assert_abs_diff_eq!(
            m.transform_vector(&Vector3::unit_y()),
            Vector3::unit_z(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotation_around_y_axis_rotates_z_towards_x() {
        let m = Matrix4::rotation_y(Radians(0.5 * PI));
        assert_abs_diff_eq!(
            m.transform_vector(&Vector3::unit_z()),
            Vector3::unit_x(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn matrix_from_quaternion_rotates_like_the_quaternion() {
        let rotation = UnitQuaternion::from_axis_angle(
            &UnitVector3::new_normalize(Vector3::new(1.0, 2.0, 3.0)),
            Radians(1.1),
        );
        let m = Matrix4::from_unit_quaternion(&rotation);
        let v = Vector3::new(-0.3, 2.0, 0.7);
        assert_abs_diff_eq!(
            m.transform_vector(&v),
            rotation.rotate_vector(&v),
            epsilon = 1e-12
        );
    }

    #[test]
    fn matrix_from_axis_angle_matches_matrix_from_equivalent_quaternion() {
        let axis_angle = AxisAngle::new(
            UnitVector3::new_normalize(Vector3::new(-1.0, 0.5, 2.0)),
            Radians(0.8),
        );
        assert_abs_diff_eq!(
            Matrix4::from_axis_angle(&axis_angle),
            Matrix4::from_unit_quaternion(&axis_angle.to_unit_quaternion()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn scaling_matrix_scales_each_axis() {
        let m = Matrix4::from_nonuniform_scaling(&Vector3::new(2.0, 3.0, 4.0));
        assert_abs_diff_eq!(
            m.transform_vector(&Vector3::new(1.0, 1.0, 1.0)),
            Vector3::new(2.0, 3.0, 4.0)
        );
    }
}
