//! Extraction of transform components from a matrix.

use super::Matrix4;
use crate::{
    angle::Radians,
    matrix3::Matrix3,
    point::Point3,
    quaternion::{Quaternion, UnitQuaternion},
    vector::Vector3,
};

impl Matrix4 {
    /// Extracts the scaling factors applied along the three axes, as the
    /// Euclidean norms of the columns of the upper-left 3x3 block.
    ///
    /// This assumes the transform has no shear; a sheared matrix contaminates
    /// the extracted factors.
    pub fn scaling(&self) -> Vector3 {
        Vector3::new(
            Vector3::new(self.m00, self.m01, self.m02).norm(),
            Vector3::new(self.m10, self.m11, self.m12).norm(),
            Vector3::new(self.m20, self.m21, self.m22).norm(),
        )
    }

    /// Extracts the rotation angles around the x-, y- and z-axis, assuming
    /// the upper-left 3x3 block is the rotation `Rx * Ry * Rz`.
    ///
    /// The closed form is valid away from gimbal lock (a y-angle of ±90
    /// degrees); no singularity detection is performed.
    pub fn euler_angles_xyz(&self) -> (Radians, Radians, Radians) {
        (
            Radians((-self.m21).atan2(self.m22)),
            Radians(self.m20.atan2((1.0 - self.m20 * self.m20).sqrt())),
            Radians((-self.m10).atan2(self.m00)),
        )
    }

    /// Extracts the rotation angles around the x-, y- and z-axis, assuming
    /// the upper-left 3x3 block is the rotation `Rz * Ry * Rx`.
    ///
    /// The closed form is valid away from gimbal lock (a y-angle of ±90
    /// degrees); no singularity detection is performed.
    pub fn euler_angles_zyx(&self) -> (Radians, Radians, Radians) {
        (
            Radians(self.m12.atan2(self.m22)),
            Radians((-self.m02).atan2((1.0 - self.m02 * self.m02).sqrt())),
            Radians(self.m01.atan2(self.m00)),
        )
    }

    /// Extracts the rotation of the upper-left 3x3 block as a unit
    /// quaternion, branching on the largest diagonal element for numerical
    /// stability. The block is assumed to be orthonormal; scaling or shear
    /// contaminates the result.
    pub fn rotation_to_unit_quaternion(&self) -> UnitQuaternion {
        let trace = self.m00 + self.m11 + self.m22;

        let quaternion = if trace >= 0.0 {
            let s = (trace + 1.0).sqrt();
            let inverse_s = 0.5 / s;
            Quaternion::new(
                (self.m12 - self.m21) * inverse_s,
                (self.m20 - self.m02) * inverse_s,
                (self.m01 - self.m10) * inverse_s,
                0.5 * s,
            )
        } else if self.m00 >= self.m11 && self.m00 >= self.m22 {
            let s = (1.0 + self.m00 - self.m11 - self.m22).sqrt();
            let inverse_s = 0.5 / s;
            Quaternion::new(
                0.5 * s,
                (self.m01 + self.m10) * inverse_s,
                (self.m20 + self.m02) * inverse_s,
                (self.m12 - self.m21) * inverse_s,
            )
        } else if self.m11 >= self.m22 {
            let s = (1.0 + self.m11 - self.m00 - self.m22).sqrt();
            let inverse_s = 0.5 / s;
            Quaternion::new(
                (self.m01 + self.m10) * inverse_s,
                0.5 * s,
                (self.m12 + self.m21) * inverse_s,
                (self.m20 - self.m02) * inverse_s,
            )
        } else {
            let s = (1.0 + self.m22 - self.m00 - self.m11).sqrt();
            let inverse_s = 0.5 / s;
            Quaternion::new(
                (self.m20 + self.m02) * inverse_s,
                (self.m12 + self.m21) * inverse_s,
                0.5 * s,
                (self.m01 - self.m10) * inverse_s,
            )
        };

        UnitQuaternion::new_unchecked(quaternion)
    }

    /// Computes the cofactor matrix of the upper-left 3x3 block. Dividing it
    /// by the block's determinant gives the transpose of the block's inverse.
    pub fn cofactor_matrix(&self) -> Matrix3 {
        Matrix3 {
            m00: self.m11 * self.m22 - self.m21 * self.m12,
            m01: self.m20 * self.m12 - self.m10 * self.m22,
            m02: self.m10 * self.m21 - self.m20 * self.m11,
            m10: self.m21 * self.m02 - self.m01 * self.m22,
            m11: self.m00 * self.m22 - self.m20 * self.m02,
            m12: self.m20 * self.m01 - self.m00 * self.m21,
            m20: self.m01 * self.m12 - self.m11 * self.m02,
            m21: self.m10 * self.m02 - self.m00 * self.m12,
            m22: self.m00 * self.m11 - self.m10 * self.m01,
        }
    }

    /// Computes the matrix for transforming normal vectors alongside this
    /// transform: the transpose of the inverse of the upper-left 3x3 block.
    /// When the block is classified as orthonormal the transpose of the
    /// inverse equals the block itself and a copy is returned.
    pub fn normal_matrix(&self) -> Matrix3 {
        if self.is_orthonormal() {
            self.upper_left()
        } else {
            let inverse_det = self.upper_left().determinant().recip();
            self.cofactor_matrix() * inverse_det
        }
    }

    /// Computes the position that this matrix transforms to the origin.
    pub fn origin(&self) -> Point3 {
        if self.is_affine() {
            let inverse_linear = self.upper_left().inverted();
            Point3::from_vector(-inverse_linear.transform_vector(&self.translation()))
        } else {
            self.inverted().project_point(&Point3::origin())
        }
    }

    /// Computes the direction in the untransformed space that this matrix
    /// maps onto the positive x-axis direction.
    pub fn positive_x_axis(&self) -> Vector3 {
        Vector3::new(
            self.m11 * self.m22 - self.m12 * self.m21,
            self.m02 * self.m21 - self.m01 * self.m22,
            self.m01 * self.m12 - self.m02 * self.m11,
        )
        .normalized()
    }

    /// Computes the direction in the untransformed space that this matrix
    /// maps onto the positive y-axis direction.
    pub fn positive_y_axis(&self) -> Vector3 {
        Vector3::new(
            self.m12 * self.m20 - self.m10 * self.m22,
            self.m00 * self.m22 - self.m02 * self.m20,
            self.m02 * self.m10 - self.m00 * self.m12,
        )
        .normalized()
    }

    /// Computes the direction in the untransformed space that this matrix
    /// maps onto the positive z-axis direction.
    pub fn positive_z_axis(&self) -> Vector3 {
        Vector3::new(
            self.m10 * self.m21 - self.m11 * self.m20,
            self.m20 * self.m01 - self.m21 * self.m00,
            self.m00 * self.m11 - self.m01 * self.m10,
        )
        .normalized()
    }
}
