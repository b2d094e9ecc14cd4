//! View matrix builders.

use super::Matrix4;
use crate::{point::Point3, vector::Vector3};

impl Matrix4 {
    /// Creates a right-handed view matrix for a camera at `eye` looking
    /// towards `center`, with `up` selecting the camera roll.
    ///
    /// If `up` is parallel to the view direction, the constructed basis is
    /// degenerate and the result is non-finite.
    pub fn look_at(eye: &Point3, center: &Point3, up: &Vector3) -> Self {
        Self::view_from_z_axis(&(eye - center).normalized(), up, eye)
    }

    /// Creates a left-handed view matrix for a camera at `eye` looking
    /// towards `center`, with `up` selecting the camera roll.
    ///
    /// If `up` is parallel to the view direction, the constructed basis is
    /// degenerate and the result is non-finite.
    pub fn look_at_lh(eye: &Point3, center: &Point3, up: &Vector3) -> Self {
        Self::view_from_z_axis(&(center - eye).normalized(), up, eye)
    }

    /// Creates a right-handed view matrix for a camera at the origin looking
    /// along `direction`.
    ///
    /// If `up` is parallel to `direction`, the constructed basis is
    /// degenerate and the result is non-finite.
    pub fn look_along(direction: &Vector3, up: &Vector3) -> Self {
        Self::view_from_z_axis(&-direction.normalized(), up, &Point3::origin())
    }

    /// Creates a left-handed view matrix for a camera at the origin looking
    /// along `direction`.
    ///
    /// If `up` is parallel to `direction`, the constructed basis is
    /// degenerate and the result is non-finite.
    pub fn look_along_lh(direction: &Vector3, up: &Vector3) -> Self {
        Self::view_from_z_axis(&direction.normalized(), up, &Point3::origin())
    }

    /// Post-multiplies this matrix with a right-handed view matrix, as if by
    /// `self * Matrix4::look_at(..)`.
    pub fn apply_look_at(&mut self, eye: &Point3, center: &Point3, up: &Vector3) {
        self.multiply(&Self::look_at(eye, center, up));
    }

    /// Post-multiplies this matrix with a left-handed view matrix, as if by
    /// `self * Matrix4::look_at_lh(..)`.
    pub fn apply_look_at_lh(&mut self, eye: &Point3, center: &Point3, up: &Vector3) {
        self.multiply(&Self::look_at_lh(eye, center, up));
    }

    /// Post-multiplies this matrix with a right-handed rotation looking along
    /// the given direction, as if by `self * Matrix4::look_along(..)`.
    pub fn apply_look_along(&mut self, direction: &Vector3, up: &Vector3) {
        self.multiply(&Self::look_along(direction, up));
    }

    /// Post-multiplies this matrix with a left-handed rotation looking along
    /// the given direction, as if by `self * Matrix4::look_along_lh(..)`.
    pub fn apply_look_along_lh(&mut self, direction: &Vector3, up: &Vector3) {
        self.multiply(&Self::look_along_lh(direction, up));
    }

    /// Builds the view matrix whose camera-space z-axis is the given unit
    /// vector: the x-axis is `up x z` renormalized, the y-axis recomputed as
    /// `z x x`, and the rows of the upper-left block hold the basis so the
    /// matrix transforms world space into camera space.
    fn view_from_z_axis(z_axis: &Vector3, up: &Vector3, eye: &Point3) -> Self {
        let x_axis = up.cross(z_axis).normalized();
        let y_axis = z_axis.cross(&x_axis);
        let eye = eye.as_vector();

        Self {
            m00: x_axis.x(),
            m01: y_axis.x(),
            m02: z_axis.x(),
            m03: 0.0,
            m10: x_axis.y(),
            m11: y_axis.y(),
            m12: z_axis.y(),
            m13: 0.0,
            m20: x_axis.z(),
            m21: y_axis.z(),
            m22: z_axis.z(),
            m23: 0.0,
            m30: -x_axis.dot(&eye),
            m31: -y_axis.dot(&eye),
            m32: -z_axis.dot(&eye),
            m33: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn look_at_basis_is_orthonormal() {
        let m = Matrix4::look_at(
            &Point3::new(0.0, 0.0, 5.0),
            &Point3::origin(),
            &Vector3::unit_y(),
        );

        for i in 0..3 {
            let column = m.column(i).xyz();
            assert_abs_diff_eq!(column.norm(), 1.0, epsilon = 1e-12);
            for j in (i + 1)..3 {
                assert_abs_diff_eq!(column.dot(&m.column(j).xyz()), 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eye = Point3::new(1.0, 2.0, 3.0);
        let m = Matrix4::look_at(&eye, &Point3::new(-4.0, 0.0, 1.0), &Vector3::unit_y());
        assert_abs_diff_eq!(m.transform_point(&eye), Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn look_at_maps_center_onto_negative_z_axis() {
        let eye = Point3::new(0.0, 1.0, 4.0);
        let center = Point3::new(0.5, -1.0, -2.0);
        let m = Matrix4::look_at(&eye, &center, &Vector3::unit_y());

        let mapped = m.transform_point(&center);
        let distance = (&center - &eye).norm();
        assert_abs_diff_eq!(mapped, Point3::new(0.0, 0.0, -distance), epsilon = 1e-12);
    }

    #[test]
    fn left_handed_look_at_maps_center_onto_positive_z_axis() {
        let eye = Point3::new(2.0, 0.0, -1.0);
        let center = Point3::new(-1.0, 1.0, 3.0);
        let m = Matrix4::look_at_lh(&eye, &center, &Vector3::unit_y());

        let mapped = m.transform_point(&center);
        let distance = (&center - &eye).norm();
        assert_abs_diff_eq!(mapped, Point3::new(0.0, 0.0, distance), epsilon = 1e-12);
    }

    #[test]
    fn look_along_equals_look_at_from_origin() {
        let direction = Vector3::new(0.3, -0.5, -1.0);
        let up = Vector3::unit_y();
        assert_abs_diff_eq!(
            Matrix4::look_along(&direction, &up),
            Matrix4::look_at(
                &Point3::origin(),
                &Point3::from_vector(direction),
                &up
            ),
            epsilon = 1e-12
        );
    }

    #[test]
    fn up_parallel_to_view_direction_gives_non_finite_matrix() {
        let m = Matrix4::look_at(
            &Point3::new(0.0, 5.0, 0.0),
            &Point3::origin(),
            &Vector3::unit_y(),
        );
        assert!(m.to_array().iter().any(|element| !element.is_finite()));
    }

    #[test]
    fn view_matrix_is_rigid_so_orthonormal_inverse_applies() {
        let m = Matrix4::look_at(
            &Point3::new(1.0, -2.0, 4.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Vector3::unit_y(),
        );
        assert_abs_diff_eq!(
            m.inverted_orthonormal().multiplied(&m),
            Matrix4::identity(),
            epsilon = 1e-12
        );
    }
}
