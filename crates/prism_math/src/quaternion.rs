//! Quaternions.

use crate::{
    angle::Radians,
    vector::{UnitVector3, Vector3},
};
use bytemuck::{Pod, Zeroable};

/// A quaternion with components `x`, `y`, `z` (imaginary) and `w` (real).
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

/// A quaternion of unit norm, representing a rotation.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct UnitQuaternion {
    inner: Quaternion,
}

impl Quaternion {
    /// Creates a new quaternion with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from the given real part and imaginary vector.
    #[inline]
    pub const fn from_parts(real: f64, imag: Vector3) -> Self {
        Self::new(imag.x(), imag.y(), imag.z(), real)
    }

    /// Creates a purely imaginary quaternion from the given vector.
    #[inline]
    pub const fn from_imag(imag: Vector3) -> Self {
        Self::from_parts(0.0, imag)
    }

    /// The x-component of the quaternion.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component of the quaternion.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component of the quaternion.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The w-component of the quaternion.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// The real part of the quaternion.
    #[inline]
    pub const fn real(&self) -> f64 {
        self.w
    }

    /// The imaginary part of the quaternion.
    #[inline]
    pub const fn imag(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the norm of the quaternion.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.squared_norm().sqrt()
    }

    /// Computes the squared norm of the quaternion.
    #[inline]
    pub fn squared_norm(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Returns the conjugate of the quaternion.
    #[inline]
    pub const fn conjugated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Returns the negated quaternion.
    #[inline]
    pub const fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl UnitQuaternion {
    /// Creates the identity rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::new_unchecked(Quaternion::new(0.0, 0.0, 0.0, 1.0))
    }

    /// Creates a unit quaternion by normalizing the given quaternion. If the
    /// quaternion is zero, the components will be non-finite.
    #[inline]
    pub fn normalized_from(quaternion: Quaternion) -> Self {
        let inverse_norm = quaternion.norm().recip();
        Self::new_unchecked(Quaternion::new(
            quaternion.x * inverse_norm,
            quaternion.y * inverse_norm,
            quaternion.z * inverse_norm,
            quaternion.w * inverse_norm,
        ))
    }

    /// Creates a unit quaternion from the given quaternion, which is assumed
    /// to have unit norm.
    #[inline]
    pub const fn new_unchecked(quaternion: Quaternion) -> Self {
        Self { inner: quaternion }
    }

    /// Creates the unit quaternion representing a rotation by the given angle
    /// around the given axis.
    #[inline]
    pub fn from_axis_angle(axis: &UnitVector3, angle: Radians) -> Self {
        let (sin_half_angle, cos_half_angle) = (0.5 * angle.0).sin_cos();
        Self::new_unchecked(Quaternion::from_parts(
            cos_half_angle,
            axis.as_vector() * sin_half_angle,
        ))
    }

    /// Returns the underlying quaternion.
    #[inline]
    pub const fn as_quaternion(&self) -> &Quaternion {
        &self.inner
    }

    /// The x-component of the quaternion.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.inner.x
    }

    /// The y-component of the quaternion.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.inner.y
    }

    /// The z-component of the quaternion.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.inner.z
    }

    /// The w-component of the quaternion.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.inner.w
    }

    /// Returns the inverse rotation.
    #[inline]
    pub const fn inverted(&self) -> Self {
        Self::new_unchecked(self.inner.conjugated())
    }

    /// Rotates the given vector by this rotation.
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        // v' = v + 2 w (q x v) + 2 q x (q x v)
        let imag = self.inner.imag();
        let t = imag.cross(vector);
        vector + t * (2.0 * self.inner.w) + imag.cross(&t) * 2.0
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
    )
});

impl_binop!(Mul, mul, Quaternion, f64, Quaternion, |a, b| {
    Quaternion::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(
    Mul,
    mul,
    UnitQuaternion,
    UnitQuaternion,
    UnitQuaternion,
    |a, b| { UnitQuaternion::new_unchecked(a.inner * b.inner) }
);

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl_abs_diff_eq!(UnitQuaternion, |a, b, epsilon| {
    a.inner.abs_diff_eq(&b.inner, epsilon)
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn identity_rotation_leaves_vector_unchanged() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        assert_abs_diff_eq!(UnitQuaternion::identity().rotate_vector(&v), v);
    }

    #[test]
    fn rotating_around_z_axis_works() {
        let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_z(), Radians(0.5 * PI));
        let rotated = rotation.rotate_vector(&Vector3::unit_x());
        assert_abs_diff_eq!(rotated, Vector3::unit_y(), epsilon = 1e-12);
    }

    #[test]
    fn composing_rotation_with_inverse_gives_identity() {
        let rotation = UnitQuaternion::from_axis_angle(
            &UnitVector3::new_normalize(Vector3::new(1.0, 2.0, -1.0)),
            Radians(1.2),
        );
        let composed = rotation * rotation.inverted();
        assert_abs_diff_eq!(
            composed.as_quaternion(),
            UnitQuaternion::identity().as_quaternion(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn quaternion_product_matches_rotation_composition() {
        let a = UnitQuaternion::from_axis_angle(&UnitVector3::unit_x(), Radians(0.7));
        let b = UnitQuaternion::from_axis_angle(&UnitVector3::unit_y(), Radians(-0.3));
        let v = Vector3::new(0.5, 1.5, -2.0);
        assert_abs_diff_eq!(
            (a * b).rotate_vector(&v),
            a.rotate_vector(&b.rotate_vector(&v)),
            epsilon = 1e-12
        );
    }
}
