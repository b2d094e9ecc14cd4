//! Representation of planes.

use approx::AbsDiffEq;
use bytemuck::{Pod, Zeroable};
use prism_math::{
    point::Point3,
    vector::{UnitVector3, Vector3},
};

/// A plane in 3D, represented by a unit normal and a displacement.
///
/// The displacement `d` can be determined from the normal `n` and any point
/// `p` lying on the plane as `d = n.dot(p)`. By storing the displacement
/// instead of the point, we remove redundant degrees of freedom.
///
/// The plane divides space into two halfspaces, the positive and negative
/// halfspace. The positive one is defined as the halfspace the unit normal is
/// pointing into.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Zeroable, Pod)]
pub struct Plane {
    unit_normal: UnitVector3,
    displacement: f64,
}

impl Plane {
    /// The xy-coordinate plane, with the positive halfspace being the space
    /// of positive z-coordinates.
    pub const XY_PLANE: Self = Self::new(UnitVector3::unit_z(), 0.0);

    /// The yz-coordinate plane, with the positive halfspace being the space
    /// of positive x-coordinates.
    pub const YZ_PLANE: Self = Self::new(UnitVector3::unit_x(), 0.0);

    /// The xz-coordinate plane, with the positive halfspace being the space
    /// of positive y-coordinates.
    pub const XZ_PLANE: Self = Self::new(UnitVector3::unit_y(), 0.0);

    /// Creates a new plane defined by the given unit normal vector and
    /// displacement.
    #[inline]
    pub const fn new(unit_normal: UnitVector3, displacement: f64) -> Self {
        Self {
            unit_normal,
            displacement,
        }
    }

    /// Creates a new plane defined by the given unit normal vector and point
    /// in the plane.
    #[inline]
    pub fn from_normal_and_point(unit_normal: UnitVector3, point_in_plane: &Point3) -> Self {
        let displacement = unit_normal.as_vector().dot(&point_in_plane.as_vector());
        Self::new(unit_normal, displacement)
    }

    /// Creates a new plane from the coefficients `(a, b, c, d)` of the plane
    /// equation `a x + b y + c z = d`, normalizing the normal vector and
    /// scaling the displacement accordingly.
    pub fn from_unnormalized_coefficients(
        normal_x: f64,
        normal_y: f64,
        normal_z: f64,
        displacement: f64,
    ) -> Self {
        let (unit_normal, magnitude) =
            UnitVector3::new_and_get(Vector3::new(normal_x, normal_y, normal_z));
        Self::new(unit_normal, displacement / magnitude)
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub const fn unit_normal(&self) -> &UnitVector3 {
        &self.unit_normal
    }

    /// Returns the displacement of the plane.
    #[inline]
    pub const fn displacement(&self) -> f64 {
        self.displacement
    }

    /// Deconstructs the plane into its unit normal and displacement.
    #[inline]
    pub const fn into_normal_and_displacement(self) -> (UnitVector3, f64) {
        (self.unit_normal, self.displacement)
    }

    /// Computes the signed distance from the plane to the given point. The
    /// distance is positive in the positive halfspace of the plane.
    #[inline]
    pub fn compute_signed_distance(&self, point: &Point3) -> f64 {
        self.unit_normal.as_vector().dot(&point.as_vector()) - self.displacement
    }

    /// Whether the given point lies strictly inside the positive halfspace of
    /// the plane.
    #[inline]
    pub fn point_lies_in_positive_halfspace(&self, point: &Point3) -> bool {
        self.compute_signed_distance(point) > 0.0
    }

    /// Returns the plane with its normal flipped, so the positive and
    /// negative halfspaces swap.
    #[inline]
    pub const fn flipped(&self) -> Self {
        Self::new(self.unit_normal.negated(), -self.displacement)
    }

    /// Computes the projection of the given point onto the plane.
    pub fn project_point(&self, point: &Point3) -> Point3 {
        point - self.unit_normal.as_vector() * self.compute_signed_distance(point)
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.unit_normal.abs_diff_eq(&other.unit_normal, epsilon)
            && self.displacement.abs_diff_eq(&other.displacement, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn signed_distance_is_positive_in_the_normal_direction() {
        let plane = Plane::XY_PLANE;
        assert_abs_diff_eq!(
            plane.compute_signed_distance(&Point3::new(2.0, -1.0, 3.0)),
            3.0
        );
        assert_abs_diff_eq!(
            plane.compute_signed_distance(&Point3::new(2.0, -1.0, -3.0)),
            -3.0
        );
    }

    #[test]
    fn displaced_plane_measures_distance_from_its_surface() {
        let plane = Plane::from_normal_and_point(UnitVector3::unit_x(), &Point3::new(2.0, 0.0, 0.0));
        assert_abs_diff_eq!(plane.displacement(), 2.0);
        assert_abs_diff_eq!(
            plane.compute_signed_distance(&Point3::new(5.0, 1.0, 1.0)),
            3.0
        );
        assert!(!plane.point_lies_in_positive_halfspace(&Point3::origin()));
    }

    #[test]
    fn unnormalized_coefficients_are_scaled_consistently() {
        let plane = Plane::from_unnormalized_coefficients(0.0, 0.0, 2.0, 4.0);
        assert_abs_diff_eq!(plane.unit_normal().as_vector(), Vector3::unit_z());
        assert_abs_diff_eq!(plane.displacement(), 2.0);
    }

    #[test]
    fn projecting_point_lands_on_the_plane() {
        let plane = Plane::from_unnormalized_coefficients(1.0, 1.0, 0.0, 3.0);
        let projected = plane.project_point(&Point3::new(4.0, -2.0, 1.0));
        assert_abs_diff_eq!(plane.compute_signed_distance(&projected), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn flipping_plane_negates_signed_distances() {
        let plane = Plane::from_unnormalized_coefficients(0.5, -1.0, 2.0, 1.5);
        let point = Point3::new(1.0, 2.0, -0.5);
        assert_abs_diff_eq!(
            plane.flipped().compute_signed_distance(&point),
            -plane.compute_signed_distance(&point),
            epsilon = 1e-12
        );
    }
}
