//! Representation of frustums.

use crate::{AxisAlignedBox, Plane, Sphere};
use approx::AbsDiffEq;
use prism_math::{DepthRange, Matrix4, point::Point3, vector::Vector3};

/// A frustum, which in general is a pyramid truncated at the top. It is here
/// represented by the six planes making up the faces of the truncated
/// pyramid.
///
/// The planes are created in such a way that their negative halfspaces
/// correspond to the space outside the frustum.
#[derive(Clone, Debug, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
    largest_signed_dist_aab_corner_indices_for_planes: [usize; 6],
    transform_matrix: Matrix4,
    inverse_transform_matrix: Matrix4,
    depth_range: DepthRange,
}

impl Frustum {
    /// Creates the frustum representing the clip space of the given view
    /// projection matrix, whose depth output spans the given range.
    ///
    /// This function uses the method of Gribb and Hartmann (2001) "Fast
    /// Extraction of Viewing Frustum Planes from the World-View-Projection
    /// Matrix".
    pub fn from_matrix(transform_matrix: &Matrix4, depth_range: DepthRange) -> Self {
        Self::from_matrix_with_inverse(*transform_matrix, transform_matrix.inverted(), depth_range)
    }

    /// Creates the frustum representing the clip space of the given transform
    /// matrix, using the given matrix inverse rather than computing it.
    pub fn from_matrix_with_inverse(
        transform_matrix: Matrix4,
        inverse_transform_matrix: Matrix4,
        depth_range: DepthRange,
    ) -> Self {
        let planes = Self::planes_from_transform_matrix(&transform_matrix, depth_range);

        let largest_signed_dist_aab_corner_indices_for_planes =
            Self::determine_largest_signed_dist_aab_corner_indices_for_all_planes(&planes);

        Self {
            planes,
            largest_signed_dist_aab_corner_indices_for_planes,
            transform_matrix,
            inverse_transform_matrix,
            depth_range,
        }
    }

    /// Returns the planes defining the faces of the frustum.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Returns the plane defining the left face of the frustum.
    pub fn left_plane(&self) -> &Plane {
        &self.planes[0]
    }

    /// Returns the plane defining the right face of the frustum.
    pub fn right_plane(&self) -> &Plane {
        &self.planes[1]
    }

    /// Returns the plane defining the bottom face of the frustum.
    pub fn bottom_plane(&self) -> &Plane {
        &self.planes[2]
    }

    /// Returns the plane defining the top face of the frustum.
    pub fn top_plane(&self) -> &Plane {
        &self.planes[3]
    }

    /// Returns the near plane of the frustum.
    pub fn near_plane(&self) -> &Plane {
        &self.planes[4]
    }

    /// Returns the far plane of the frustum.
    pub fn far_plane(&self) -> &Plane {
        &self.planes[5]
    }

    /// Returns the matrix of the transform into the clip space that this
    /// frustum represents.
    pub fn transform_matrix(&self) -> &Matrix4 {
        &self.transform_matrix
    }

    /// Returns the inverse of the transform into the clip space that this
    /// frustum represents.
    pub fn inverse_transform_matrix(&self) -> &Matrix4 {
        &self.inverse_transform_matrix
    }

    /// Returns the range the near and far plane are mapped into by the
    /// frustum's transform.
    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// Returns the distance from the frustum apex to the near plane.
    pub fn near_distance(&self) -> f64 {
        self.near_plane().displacement()
    }

    /// Returns the distance from the frustum apex to the far plane.
    pub fn far_distance(&self) -> f64 {
        -self.far_plane().displacement()
    }

    /// Whether the given point is strictly inside the frustum.
    pub fn contains_point(&self, point: &Point3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.point_lies_in_positive_halfspace(point))
    }

    /// Whether any part of the given sphere could be inside the frustum. If
    /// the sphere lies close to an edge or a corner, this method may return
    /// `true` even if the sphere is really outside. However, this method will
    /// always return `true` if the sphere is really inside. If the boundaries
    /// exactly touch each other, the sphere is considered inside.
    pub fn could_contain_part_of_sphere(&self, sphere: &Sphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.compute_signed_distance(sphere.center()) >= -sphere.radius())
    }

    /// Whether any part of the given axis-aligned box could be inside the
    /// frustum. If the box lies close to an edge or a corner, this method may
    /// return `true` even if the box is really outside. However, this method
    /// will always return `true` if the box is really inside. If the
    /// boundaries exactly touch each other, the box is considered inside.
    pub fn could_contain_part_of_axis_aligned_box(
        &self,
        axis_aligned_box: &AxisAlignedBox,
    ) -> bool {
        self.planes
            .iter()
            .zip(
                self.largest_signed_dist_aab_corner_indices_for_planes
                    .iter(),
            )
            .all(|(plane, &largest_signed_dist_corner_idx)| {
                plane.compute_signed_distance(
                    &axis_aligned_box.corner(largest_signed_dist_corner_idx),
                ) >= 0.0
            })
    }

    /// Computes the corner of the frustum with the given index. The index
    /// follows the convention of [`AxisAlignedBox::corner`] applied to the
    /// clip-space cube.
    ///
    /// # Panics
    /// If the index is outside `0..8`.
    pub fn corner(&self, corner_idx: usize) -> Point3 {
        let near_depth = self.near_clip_space_depth();
        let clip_space_corners =
            AxisAlignedBox::new(Point3::new(-1.0, -1.0, near_depth), Point3::new(1.0, 1.0, 1.0));
        self.inverse_transform_matrix
            .project_point(&clip_space_corners.corner(corner_idx))
    }

    /// Computes the 8 corners of the frustum, ordered by corner index.
    pub fn compute_corners(&self) -> [Point3; 8] {
        std::array::from_fn(|corner_idx| self.corner(corner_idx))
    }

    /// Computes the center point of the frustum.
    pub fn compute_center(&self) -> Point3 {
        let corners = self.compute_corners();
        let n_corners = corners.len();

        let summed = corners
            .into_iter()
            .map(|corner| corner.as_vector())
            .reduce(|accum, corner| accum + corner)
            .unwrap();

        Point3::from_vector(summed / (n_corners as f64))
    }

    /// Computes the frustum's axis-aligned bounding box.
    pub fn compute_aabb(&self) -> AxisAlignedBox {
        AxisAlignedBox::aabb_for_points(&self.compute_corners())
    }

    /// Computes the direction of the ray from the frustum apex through the
    /// point parametrized by `(x, y)` on the far plane, where `(0, 0)` is the
    /// lower left and `(1, 1)` the upper right far-plane corner. Useful for
    /// generating per-pixel camera rays.
    pub fn ray_direction(&self, x: f64, y: f64) -> Vector3 {
        let ndc_x = 2.0 * x - 1.0;
        let ndc_y = 2.0 * y - 1.0;

        let on_near = self
            .inverse_transform_matrix
            .project_point(&Point3::new(ndc_x, ndc_y, self.near_clip_space_depth()));
        let on_far = self
            .inverse_transform_matrix
            .project_point(&Point3::new(ndc_x, ndc_y, 1.0));

        (&on_far - &on_near).normalized()
    }

    fn near_clip_space_depth(&self) -> f64 {
        match self.depth_range {
            DepthRange::NegativeOneToOne => -1.0,
            DepthRange::ZeroToOne => 0.0,
        }
    }

    fn planes_from_transform_matrix(
        transform_matrix: &Matrix4,
        depth_range: DepthRange,
    ) -> [Plane; 6] {
        let m = transform_matrix;

        let left = Plane::from_unnormalized_coefficients(
            m.m03 + m.m00,
            m.m13 + m.m10,
            m.m23 + m.m20,
            -(m.m33 + m.m30),
        );
        let right = Plane::from_unnormalized_coefficients(
            m.m03 - m.m00,
            m.m13 - m.m10,
            m.m23 - m.m20,
            -(m.m33 - m.m30),
        );

        let bottom = Plane::from_unnormalized_coefficients(
            m.m03 + m.m01,
            m.m13 + m.m11,
            m.m23 + m.m21,
            -(m.m33 + m.m31),
        );
        let top = Plane::from_unnormalized_coefficients(
            m.m03 - m.m01,
            m.m13 - m.m11,
            m.m23 - m.m21,
            -(m.m33 - m.m31),
        );

        // With depth mapped to [0, 1] the near plane is the w-scaled z-row
        // itself; with [-1, 1] it is the w+z row combination.
        let near = match depth_range {
            DepthRange::ZeroToOne => {
                Plane::from_unnormalized_coefficients(m.m02, m.m12, m.m22, -m.m32)
            }
            DepthRange::NegativeOneToOne => Plane::from_unnormalized_coefficients(
                m.m03 + m.m02,
                m.m13 + m.m12,
                m.m23 + m.m22,
                -(m.m33 + m.m32),
            ),
        };
        let far = Plane::from_unnormalized_coefficients(
            m.m03 - m.m02,
            m.m13 - m.m12,
            m.m23 - m.m22,
            -(m.m33 - m.m32),
        );

        [left, right, bottom, top, near, far]
    }

    /// Determines the corner of any axis-aligned bounding box that will have
    /// the largest signed distance in the space of the given plane. The
    /// corner is represented by an index following the convention of
    /// [`AxisAlignedBox::corner`].
    fn determine_largest_signed_dist_aab_corner_index_for_plane(plane: &Plane) -> usize {
        let normal = plane.unit_normal();
        match (
            normal.x().is_sign_negative(),
            normal.y().is_sign_negative(),
            normal.z().is_sign_negative(),
        ) {
            (true, true, true) => 0,
            (true, true, false) => 1,
            (true, false, true) => 2,
            (true, false, false) => 3,
            (false, true, true) => 4,
            (false, true, false) => 5,
            (false, false, true) => 6,
            (false, false, false) => 7,
        }
    }

    fn determine_largest_signed_dist_aab_corner_indices_for_all_planes(
        planes: &[Plane; 6],
    ) -> [usize; 6] {
        planes.map(|plane| Self::determine_largest_signed_dist_aab_corner_index_for_plane(&plane))
    }
}

impl AbsDiffEq for Frustum {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.planes
            .iter()
            .zip(&other.planes)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            && self
                .transform_matrix
                .abs_diff_eq(&other.transform_matrix, epsilon)
            && self
                .inverse_transform_matrix
                .abs_diff_eq(&other.inverse_transform_matrix, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use prism_math::Radians;

    fn perspective_frustum(depth_range: DepthRange) -> Frustum {
        Frustum::from_matrix(
            &Matrix4::perspective(Radians(1.0), 1.3, 0.21, 160.2, depth_range),
            depth_range,
        )
    }

    #[test]
    fn near_and_far_distances_match_the_projection_parameters() {
        for depth_range in [DepthRange::ZeroToOne, DepthRange::NegativeOneToOne] {
            let frustum = perspective_frustum(depth_range);
            assert_abs_diff_eq!(frustum.near_distance(), 0.21, epsilon = 1e-9);
            assert_abs_diff_eq!(frustum.far_distance(), 160.2, epsilon = 1e-6);
        }
    }

    #[test]
    fn points_on_the_view_axis_inside_the_depth_interval_are_contained() {
        let frustum = perspective_frustum(DepthRange::ZeroToOne);
        assert!(frustum.contains_point(&Point3::new(0.0, 0.0, -1.0)));
        assert!(frustum.contains_point(&Point3::new(0.0, 0.0, -100.0)));
        assert!(!frustum.contains_point(&Point3::new(0.0, 0.0, -0.1)));
        assert!(!frustum.contains_point(&Point3::new(0.0, 0.0, -200.0)));
        assert!(!frustum.contains_point(&Point3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn frustum_corners_lie_on_their_three_defining_planes() {
        let frustum = perspective_frustum(DepthRange::NegativeOneToOne);
        let corners = frustum.compute_corners();

        // Corner index bits select (x: left/right, y: bottom/top, z: near/far).
        for (corner_idx, corner) in corners.iter().enumerate() {
            let x_plane = if corner_idx & 0b100 == 0 {
                frustum.left_plane()
            } else {
                frustum.right_plane()
            };
            let y_plane = if corner_idx & 0b010 == 0 {
                frustum.bottom_plane()
            } else {
                frustum.top_plane()
            };
            let z_plane = if corner_idx & 0b001 == 0 {
                frustum.near_plane()
            } else {
                frustum.far_plane()
            };

            assert_abs_diff_eq!(x_plane.compute_signed_distance(corner), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(y_plane.compute_signed_distance(corner), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(z_plane.compute_signed_distance(corner), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn contained_sphere_is_accepted_and_separated_sphere_rejected() {
        let frustum = perspective_frustum(DepthRange::ZeroToOne);
        assert!(frustum.could_contain_part_of_sphere(&Sphere::new(
            Point3::new(0.0, 0.0, -10.0),
            1.0
        )));
        assert!(!frustum.could_contain_part_of_sphere(&Sphere::new(
            Point3::new(0.0, 0.0, 10.0),
            1.0
        )));
        assert!(!frustum.could_contain_part_of_sphere(&Sphere::new(
            Point3::new(500.0, 0.0, -10.0),
            1.0
        )));
    }

    #[test]
    fn contained_box_is_accepted_and_separated_box_rejected() {
        let frustum = perspective_frustum(DepthRange::ZeroToOne);
        let inside = AxisAlignedBox::new(
            Point3::new(-1.0, -1.0, -12.0),
            Point3::new(1.0, 1.0, -10.0),
        );
        let behind_camera = AxisAlignedBox::new(
            Point3::new(-1.0, -1.0, 10.0),
            Point3::new(1.0, 1.0, 12.0),
        );
        assert!(frustum.could_contain_part_of_axis_aligned_box(&inside));
        assert!(!frustum.could_contain_part_of_axis_aligned_box(&behind_camera));
    }

    #[test]
    fn box_straddling_a_face_is_accepted() {
        let frustum = perspective_frustum(DepthRange::NegativeOneToOne);
        let straddling = AxisAlignedBox::new(
            Point3::new(-1.0, -1.0, -0.5),
            Point3::new(1.0, 1.0, -0.1),
        );
        assert!(frustum.could_contain_part_of_axis_aligned_box(&straddling));
    }

    #[test]
    fn frustum_aabb_contains_all_corners() {
        let frustum = perspective_frustum(DepthRange::ZeroToOne);
        let aabb = frustum.compute_aabb();
        for corner in frustum.compute_corners() {
            assert!(aabb.contains_point(&corner));
        }
    }

    #[test]
    fn central_ray_points_along_the_view_direction() {
        for depth_range in [DepthRange::ZeroToOne, DepthRange::NegativeOneToOne] {
            let frustum = perspective_frustum(depth_range);
            assert_abs_diff_eq!(
                frustum.ray_direction(0.5, 0.5),
                -Vector3::unit_z(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn corner_rays_pass_through_the_frustum_corners() {
        let frustum = perspective_frustum(DepthRange::ZeroToOne);

        // (0, 0) is the lower left corner of the far plane; corner index
        // 0b001 is (left, bottom, far).
        let direction = frustum.ray_direction(0.0, 0.0);
        let expected = frustum.corner(0b001).as_vector().normalized();
        assert_abs_diff_eq!(direction, expected, epsilon = 1e-9);
    }

    #[test]
    fn orthographic_frustum_recovers_the_view_box() {
        let matrix = Matrix4::orthographic(
            -2.0,
            2.0,
            -1.0,
            1.0,
            0.5,
            20.0,
            DepthRange::NegativeOneToOne,
        );
        let frustum = Frustum::from_matrix(&matrix, DepthRange::NegativeOneToOne);

        let aabb = frustum.compute_aabb();
        assert_abs_diff_eq!(
            aabb.lower_corner(),
            &Point3::new(-2.0, -1.0, -20.0),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            aabb.upper_corner(),
            &Point3::new(2.0, 1.0, -0.5),
            epsilon = 1e-9
        );
    }

    #[test]
    fn world_space_frustum_from_view_projection_culls_around_the_camera() {
        let projection = Matrix4::perspective(Radians(1.2), 1.0, 0.1, 100.0, DepthRange::ZeroToOne);
        let view = Matrix4::look_at(
            &Point3::new(0.0, 0.0, 10.0),
            &Point3::origin(),
            &Vector3::unit_y(),
        );
        let frustum = Frustum::from_matrix(&projection.multiplied(&view), DepthRange::ZeroToOne);

        assert!(frustum.contains_point(&Point3::origin()));
        assert!(!frustum.contains_point(&Point3::new(0.0, 0.0, 20.0)));
        assert!(frustum.could_contain_part_of_sphere(&Sphere::new(Point3::origin(), 1.0)));
        assert!(!frustum.could_contain_part_of_sphere(&Sphere::new(
            Point3::new(0.0, 0.0, 15.0),
            1.0
        )));
    }

    #[test]
    fn equal_frusta_from_matrix_and_explicit_inverse_match() {
        let matrix = Matrix4::perspective(Radians(0.9), 1.0, 0.1, 50.0, DepthRange::ZeroToOne);
        let from_matrix = Frustum::from_matrix(&matrix, DepthRange::ZeroToOne);
        let with_inverse = Frustum::from_matrix_with_inverse(
            matrix,
            matrix.inverted_perspective(),
            DepthRange::ZeroToOne,
        );
        assert_abs_diff_eq!(&from_matrix, &with_inverse, epsilon = 1e-9);
    }
}
