//! Points.

use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, IndexMut};

/// A point in 3D space.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 3]", from = "[f64; 3]")
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates the point at the origin.
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates the point displaced from the origin by the given vector.
    #[inline]
    pub const fn from_vector(vector: Vector3) -> Self {
        Self::new(vector.x(), vector.y(), vector.z())
    }

    /// The x-coordinate of the point.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-coordinate of the point.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-coordinate of the point.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns the displacement of the point from the origin.
    #[inline]
    pub const fn as_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the point with the componentwise minimum of this and the given
    /// point.
    #[inline]
    pub fn min_with(&self, other: &Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Returns the point with the componentwise maximum of this and the given
    /// point.
    #[inline]
    pub fn max_with(&self, other: &Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Computes the point halfway between this and the given point.
    #[inline]
    pub fn center_of(point_a: &Self, point_b: &Self) -> Self {
        Self::new(
            0.5 * (point_a.x + point_b.x),
            0.5 * (point_a.y + point_b.y),
            0.5 * (point_a.z + point_b.z),
        )
    }
}

impl From<[f64; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for [f64; 3] {
    #[inline]
    fn from(point: Point3) -> Self {
        [point.x, point.y, point.z]
    }
}

impl Index<usize> for Point3 {
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

impl IndexMut<usize> for Point3 {
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

impl_binop!(Add, add, Point3, Vector3, Point3, |a, b| {
    Point3::new(a.x + b.x(), a.y + b.y(), a.z + b.z())
});

impl_binop!(Sub, sub, Point3, Vector3, Point3, |a, b| {
    Point3::new(a.x - b.x(), a.y - b.y(), a.z - b.z())
});

impl_binop!(Sub, sub, Point3, Point3, Vector3, |a, b| {
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_abs_diff_eq!(Point3, |a, b, epsilon| {
    a.as_vector().abs_diff_eq(&b.as_vector(), epsilon)
});

impl_relative_eq!(Point3, |a, b, epsilon, max_relative| {
    a.as_vector().relative_eq(&b.as_vector(), epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn displacing_point_by_vector_works() {
        let point = Point3::new(1.0, 2.0, 3.0);
        let displaced = point + Vector3::new(0.5, -1.0, 2.0);
        assert_abs_diff_eq!(displaced, Point3::new(1.5, 1.0, 5.0));
    }

    #[test]
    fn subtracting_points_gives_displacement_vector() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(0.0, 4.0, 1.0);
        assert_abs_diff_eq!(a - b, Vector3::new(1.0, -2.0, 2.0));
    }

    #[test]
    fn componentwise_point_extrema_work() {
        let a = Point3::new(1.0, 5.0, -2.0);
        let b = Point3::new(3.0, 2.0, -1.0);
        assert_abs_diff_eq!(a.min_with(&b), Point3::new(1.0, 2.0, -2.0));
        assert_abs_diff_eq!(a.max_with(&b), Point3::new(3.0, 5.0, -1.0));
    }
}
