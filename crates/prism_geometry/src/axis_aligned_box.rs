//! Representation of axis-aligned boxes.

use Corner::{Lower, Upper};
use approx::AbsDiffEq;
use prism_math::{point::Point3, vector::Vector3};

/// A box with orientation aligned with the coordinate system axes. The width,
/// height and depth axes are aligned with the x-, y- and z-axis respectively.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisAlignedBox {
    corners: [Point3; 2],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Corner {
    Lower = 0,
    Upper = 1,
}

const ALL_CORNER_COMPONENTS: [[Corner; 3]; 8] = [
    [Lower, Lower, Lower],
    [Lower, Lower, Upper],
    [Lower, Upper, Lower],
    [Lower, Upper, Upper],
    [Upper, Lower, Lower],
    [Upper, Lower, Upper],
    [Upper, Upper, Lower],
    [Upper, Upper, Upper],
];

impl AxisAlignedBox {
    /// Creates a new box with the given lower and upper corner points.
    pub const fn new(lower_corner: Point3, upper_corner: Point3) -> Self {
        Self {
            corners: [lower_corner, upper_corner],
        }
    }

    /// Creates the axis-aligned bounding box for the set of points in the
    /// given slice.
    ///
    /// # Panics
    /// If the point slice is empty.
    pub fn aabb_for_points(points: &[Point3]) -> Self {
        assert!(
            !points.is_empty(),
            "Tried to create AABB for empty point slice"
        );

        let first_point = points[0];

        let lower_corner = points
            .iter()
            .skip(1)
            .fold(first_point, |lower_corner, point| {
                lower_corner.min_with(point)
            });

        let upper_corner = points
            .iter()
            .skip(1)
            .fold(first_point, |upper_corner, point| {
                upper_corner.max_with(point)
            });

        Self::new(lower_corner, upper_corner)
    }

    /// Returns the lower corner of the box.
    #[inline]
    pub const fn lower_corner(&self) -> &Point3 {
        &self.corners[0]
    }

    /// Returns the upper corner of the box.
    #[inline]
    pub const fn upper_corner(&self) -> &Point3 {
        &self.corners[1]
    }

    /// Returns the corner with the given index. The index encodes the choice
    /// of lower or upper bound along each axis: the x-, y- and z-choices are
    /// the bits of the index from most to least significant.
    ///
    /// # Panics
    /// If the index is outside `0..8`.
    pub fn corner(&self, corner_idx: usize) -> Point3 {
        let corner_components = &ALL_CORNER_COMPONENTS[corner_idx];
        Point3::new(
            self.corners[corner_components[0] as usize].x(),
            self.corners[corner_components[1] as usize].y(),
            self.corners[corner_components[2] as usize].z(),
        )
    }

    /// Computes all 8 corners of the box, ordered by corner index.
    pub fn compute_all_corners(&self) -> [Point3; 8] {
        std::array::from_fn(|corner_idx| self.corner(corner_idx))
    }

    /// Computes the center point of the box.
    pub fn center(&self) -> Point3 {
        Point3::center_of(self.lower_corner(), self.upper_corner())
    }

    /// Computes the extents of the box along each axis.
    pub fn extents(&self) -> Vector3 {
        self.upper_corner() - self.lower_corner()
    }

    /// Whether the given point lies inside or on the boundary of the box.
    pub fn contains_point(&self, point: &Point3) -> bool {
        (self.lower_corner().x()..=self.upper_corner().x()).contains(&point.x())
            && (self.lower_corner().y()..=self.upper_corner().y()).contains(&point.y())
            && (self.lower_corner().z()..=self.upper_corner().z()).contains(&point.z())
    }

    /// Creates the smallest box that contains both this and the given box.
    pub fn union_with(&self, other: &Self) -> Self {
        Self::new(
            self.lower_corner().min_with(other.lower_corner()),
            self.upper_corner().max_with(other.upper_corner()),
        )
    }
}

impl AbsDiffEq for AxisAlignedBox {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.corners[0].abs_diff_eq(&other.corners[0], epsilon)
            && self.corners[1].abs_diff_eq(&other.corners[1], epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bounding_box_of_points_spans_their_extrema() {
        let points = [
            Point3::new(1.0, -2.0, 0.5),
            Point3::new(-1.0, 3.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
        ];
        let aabb = AxisAlignedBox::aabb_for_points(&points);
        assert_abs_diff_eq!(aabb.lower_corner(), &Point3::new(-1.0, -2.0, 0.0));
        assert_abs_diff_eq!(aabb.upper_corner(), &Point3::new(1.0, 3.0, 2.0));
    }

    #[test]
    #[should_panic]
    fn bounding_box_of_no_points_panics() {
        AxisAlignedBox::aabb_for_points(&[]);
    }

    #[test]
    fn corner_indexing_covers_all_corners_once() {
        let aabb = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let corners = aabb.compute_all_corners();
        for (idx, corner) in corners.iter().enumerate() {
            assert_abs_diff_eq!(
                corner,
                &Point3::new(
                    ((idx >> 2) & 1) as f64,
                    ((idx >> 1) & 1) as f64,
                    (idx & 1) as f64
                )
            );
        }
    }

    #[test]
    fn box_contains_interior_and_boundary_points_only() {
        let aabb = AxisAlignedBox::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains_point(&Point3::origin()));
        assert!(aabb.contains_point(&Point3::new(1.0, 1.0, 1.0)));
        assert!(!aabb.contains_point(&Point3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn union_spans_both_boxes() {
        let a = AxisAlignedBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let b = AxisAlignedBox::new(Point3::new(-1.0, 0.5, 0.0), Point3::new(0.5, 2.0, 0.5));
        let union = a.union_with(&b);
        assert_abs_diff_eq!(union.lower_corner(), &Point3::new(-1.0, 0.0, 0.0));
        assert_abs_diff_eq!(union.upper_corner(), &Point3::new(1.0, 2.0, 1.0));
    }
}
