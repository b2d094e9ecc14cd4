//! Vectors.

use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut, Mul},
};

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 3]", from = "[f64; 3]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

/// A 3-dimensional vector of unit length.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 3]", from = "[f64; 3]")
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct UnitVector3 {
    x: f64,
    y: f64,
    z: f64,
}

/// A 4-dimensional vector.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 4]", from = "[f64; 4]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates the unit vector along the x-axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Creates the unit vector along the y-axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Creates the unit vector along the z-axis.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component of the vector.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component of the vector.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component of the vector.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// A mutable reference to the x-component of the vector.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    /// A mutable reference to the y-component of the vector.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    /// A mutable reference to the z-component of the vector.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f64 {
        &mut self.z
    }

    /// Returns the vector as an array of components.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Computes the dot product with the given vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with the given vector.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the Euclidean norm of the vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.squared_norm().sqrt()
    }

    /// Computes the squared Euclidean norm of the vector.
    #[inline]
    pub fn squared_norm(&self) -> f64 {
        self.dot(self)
    }

    /// Returns the normalized version of the vector. If the vector is zero,
    /// the result will be non-finite.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Returns the vector extended with the given w-component.
    #[inline]
    pub const fn extended(&self, w: f64) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl UnitVector3 {
    /// Creates the unit vector along the x-axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new_unchecked(1.0, 0.0, 0.0)
    }

    /// Creates the unit vector along the y-axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new_unchecked(0.0, 1.0, 0.0)
    }

    /// Creates the unit vector along the z-axis.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new_unchecked(0.0, 0.0, 1.0)
    }

    /// Creates a unit vector by normalizing the given vector. If the vector is
    /// zero, the components will be non-finite.
    #[inline]
    pub fn new_normalize(vector: Vector3) -> Self {
        Self::from_vector_unchecked(vector.normalized())
    }

    /// Creates a unit vector by normalizing the given vector, returning the
    /// norm of the original vector along with it.
    #[inline]
    pub fn new_and_get(vector: Vector3) -> (Self, f64) {
        let norm = vector.norm();
        (Self::from_vector_unchecked(vector / norm), norm)
    }

    /// Creates a unit vector with the given components, which are assumed to
    /// have unit norm.
    #[inline]
    pub const fn new_unchecked(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a unit vector from the given vector, which is assumed to have
    /// unit norm.
    #[inline]
    pub const fn from_vector_unchecked(vector: Vector3) -> Self {
        Self::new_unchecked(vector.x, vector.y, vector.z)
    }

    /// The x-component of the vector.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component of the vector.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component of the vector.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the unit vector as a [`Vector3`].
    #[inline]
    pub const fn as_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the dot product with the given vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.as_vector().dot(&other.as_vector())
    }

    /// Returns the unit vector pointing in the opposite direction.
    #[inline]
    pub const fn negated(&self) -> Self {
        Self::new_unchecked(-self.x, -self.y, -self.z)
    }
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Creates the unit vector along the x-axis.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates the unit vector along the y-axis.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// Creates the unit vector along the z-axis.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// Creates the unit vector along the w-axis.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The x-component of the vector.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component of the vector.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component of the vector.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The w-component of the vector.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Returns the vector as an array of components.
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Returns the x-, y- and z-components as a [`Vector3`].
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Computes the dot product with the given vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the Euclidean norm of the vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        vector.to_array()
    }
}

impl From<[f64; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f64; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.to_array()
    }
}

impl From<[f64; 3]> for UnitVector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new_normalize(Vector3::new(x, y, z))
    }
}

impl From<UnitVector3> for [f64; 3] {
    #[inline]
    fn from(vector: UnitVector3) -> Self {
        vector.as_vector().to_array()
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    /// # Panics
    /// If the index is outside `0..3`.
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    /// # Panics
    /// If the index is outside `0..3`.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds"),
        }
    }
}

impl Index<usize> for Vector4 {
    type Output = f64;

    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3, f64, Vector3, |a, b| {
    Vector3::new(a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector3, f64, Vector3, |a, b| {
    a.mul(b.recip())
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f64, |a, b| {
    a.x *= b;
    a.y *= b;
    a.z *= b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Vector4, f64, Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w * b)
});

impl_binop!(Mul, mul, f64, Vector4, Vector4, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector4, f64, Vector4, |a, b| {
    a.mul(b.recip())
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl_abs_diff_eq!(UnitVector3, |a, b, epsilon| {
    a.as_vector().abs_diff_eq(&b.as_vector(), epsilon)
});

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn computing_vector3_dot_product_works() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_abs_diff_eq!(a.dot(&b), 4.0 - 10.0 + 18.0);
    }

    #[test]
    fn computing_vector3_cross_product_works() {
        let x = Vector3::unit_x();
        let y = Vector3::unit_y();
        assert_abs_diff_eq!(x.cross(&y), Vector3::unit_z());
        assert_abs_diff_eq!(y.cross(&x), -Vector3::unit_z());
    }

    #[test]
    fn normalizing_vector3_works() {
        let v = Vector3::new(3.0, 0.0, 4.0);
        let n = v.normalized();
        assert_abs_diff_eq!(n.norm(), 1.0);
        assert_abs_diff_eq!(n, Vector3::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn normalizing_zero_vector3_gives_non_finite_components() {
        let n = Vector3::zeros().normalized();
        assert!(n.x().is_nan() && n.y().is_nan() && n.z().is_nan());
    }

    #[test]
    fn creating_unit_vector_and_getting_norm_works() {
        let (unit, norm) = UnitVector3::new_and_get(Vector3::new(0.0, 0.0, -2.5));
        assert_abs_diff_eq!(norm, 2.5);
        assert_abs_diff_eq!(unit.as_vector(), -Vector3::unit_z());
    }

    #[test]
    fn vector4_dot_product_includes_w() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        assert_abs_diff_eq!(a.dot(&b), 5.0 + 12.0 + 21.0 + 32.0);
    }

    #[test]
    #[should_panic]
    fn indexing_vector3_out_of_bounds_panics() {
        let v = Vector3::zeros();
        let _ = v[3];
    }

    #[test]
    #[should_panic]
    fn indexing_vector4_out_of_bounds_panics() {
        let v = Vector4::zeros();
        let _ = v[4];
    }
}
