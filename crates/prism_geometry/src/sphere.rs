//! Representation of spheres.

use crate::AxisAlignedBox;
use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use prism_math::{point::Point3, vector::Vector3};

/// A sphere represented by the center point and the radius.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Zeroable, Pod)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius.
    ///
    /// # Panics
    /// If `radius` is negative.
    #[inline]
    pub const fn new(center: Point3, radius: f64) -> Self {
        assert!(radius >= 0.0);
        Self { center, radius }
    }

    /// Returns the center point of the sphere.
    #[inline]
    pub const fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the sphere.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the sphere translated by the given displacement.
    #[inline]
    pub fn translated(&self, displacement: &Vector3) -> Self {
        Self::new(&self.center + displacement, self.radius)
    }

    /// Whether the given point lies inside or on the boundary of the sphere.
    #[inline]
    pub fn contains_point(&self, point: &Point3) -> bool {
        (point - &self.center).squared_norm() <= self.radius * self.radius
    }

    /// Computes the sphere's axis-aligned bounding box.
    pub fn compute_aabb(&self) -> AxisAlignedBox {
        let extent = Vector3::new(self.radius, self.radius, self.radius);
        AxisAlignedBox::new(&self.center - extent, &self.center + extent)
    }
}

impl AbsDiffEq for Sphere {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}
