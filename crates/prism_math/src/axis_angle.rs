//! Axis-angle representation of rotations.

use crate::{
    angle::Radians,
    quaternion::UnitQuaternion,
    vector::{UnitVector3, Vector3},
};
use bytemuck::{Pod, Zeroable};

/// A rotation represented by a unit axis and an angle around it.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct AxisAngle {
    axis: UnitVector3,
    angle: Radians,
}

impl AxisAngle {
    /// Creates a new axis-angle rotation with the given unit axis and angle.
    #[inline]
    pub const fn new(axis: UnitVector3, angle: Radians) -> Self {
        Self { axis, angle }
    }

    /// Creates the axis-angle representation of the given rotation quaternion.
    /// An identity rotation maps to a zero angle around the z-axis.
    pub fn from_unit_quaternion(quaternion: &UnitQuaternion) -> Self {
        let imag = quaternion.as_quaternion().imag();
        let imag_norm = imag.norm();
        if imag_norm == 0.0 {
            Self::new(UnitVector3::unit_z(), Radians(0.0))
        } else {
            Self::new(
                UnitVector3::from_vector_unchecked(imag / imag_norm),
                Radians(2.0 * imag_norm.atan2(quaternion.w())),
            )
        }
    }

    /// The rotation axis.
    #[inline]
    pub const fn axis(&self) -> &UnitVector3 {
        &self.axis
    }

    /// The rotation angle.
    #[inline]
    pub const fn angle(&self) -> Radians {
        self.angle
    }

    /// Returns the rotation as a unit quaternion.
    #[inline]
    pub fn to_unit_quaternion(&self) -> UnitQuaternion {
        UnitQuaternion::from_axis_angle(&self.axis, self.angle)
    }

    /// Returns the inverse rotation.
    #[inline]
    pub const fn inverted(&self) -> Self {
        Self::new(self.axis, Radians(-self.angle.0))
    }

    /// Rotates the given vector by this rotation, using Rodrigues' formula.
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        let (sin_angle, cos_angle) = self.angle.0.sin_cos();
        let axis = self.axis.as_vector();
        vector * cos_angle
            + axis.cross(vector) * sin_angle
            + axis * (axis.dot(vector) * (1.0 - cos_angle))
    }
}

impl From<AxisAngle> for UnitQuaternion {
    #[inline]
    fn from(axis_angle: AxisAngle) -> Self {
        axis_angle.to_unit_quaternion()
    }
}

impl From<UnitQuaternion> for AxisAngle {
    #[inline]
    fn from(quaternion: UnitQuaternion) -> Self {
        Self::from_unit_quaternion(&quaternion)
    }
}

impl_abs_diff_eq!(AxisAngle, |a, b, epsilon| {
    a.axis.abs_diff_eq(&b.axis, epsilon) && a.angle.abs_diff_eq(&b.angle, epsilon)
});
