//! 4x4 homogeneous transform matrices.

mod affine;
mod decompose;
mod invert;
mod multiply;
mod projection;
mod remap;
mod view;

pub use projection::DepthRange;
pub use remap::AxisDirection;

use crate::{
    matrix3::Matrix3,
    point::Point3,
    vector::{Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 4x4 column-major matrix of `f64` elements, representing a homogeneous
/// transform. The field `m<c><r>` holds the element in column `c` and row `r`,
/// so the translation part of an affine transform lives in `m30`, `m31` and
/// `m32`.
///
/// The matrix carries no cached information about its algebraic structure.
/// The `is_*` classification queries recompute their answer from the current
/// element values every time, so they always agree with the elements no
/// matter how the matrix was mutated.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    pub m00: f64,
    pub m01: f64,
    pub m02: f64,
    pub m03: f64,
    pub m10: f64,
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m20: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m30: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_diagonal(&Vector4::new(1.0, 1.0, 1.0, 1.0))
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_array([0.0; 16])
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        let mut m = Self::zeros();
        m.m00 = diagonal.x();
        m.m11 = diagonal.y();
        m.m22 = diagonal.z();
        m.m33 = diagonal.w();
        m
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_0: Vector4,
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
    ) -> Self {
        Self {
            m00: column_0.x(),
            m01: column_0.y(),
            m02: column_0.z(),
            m03: column_0.w(),
            m10: column_1.x(),
            m11: column_1.y(),
            m12: column_1.z(),
            m13: column_1.w(),
            m20: column_2.x(),
            m21: column_2.y(),
            m22: column_2.z(),
            m23: column_2.w(),
            m30: column_3.x(),
            m31: column_3.y(),
            m32: column_3.z(),
            m33: column_3.w(),
        }
    }

    /// Creates a matrix from the given array of elements in column-major
    /// order: `[m00, m01, m02, m03, m10, ..., m33]`. This layout matches the
    /// memory layout expected by graphics APIs consuming column-major
    /// matrices.
    #[inline]
    pub const fn from_array(elements: [f64; 16]) -> Self {
        let [
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        ] = elements;
        Self {
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        }
    }

    /// Creates a matrix by reading 16 elements in column-major order from the
    /// start of the given slice. To read from an offset, pass a subslice.
    ///
    /// # Panics
    /// If the slice holds fewer than 16 elements.
    #[inline]
    pub fn from_column_slice(elements: &[f64]) -> Self {
        assert!(elements.len() >= 16, "slice too short for matrix");
        let mut array = [0.0; 16];
        array.copy_from_slice(&elements[..16]);
        Self::from_array(array)
    }

    /// Returns the elements of the matrix as an array in column-major order:
    /// `[m00, m01, m02, m03, m10, ..., m33]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 16] {
        [
            self.m00, self.m01, self.m02, self.m03, self.m10, self.m11, self.m12, self.m13,
            self.m20, self.m21, self.m22, self.m23, self.m30, self.m31, self.m32, self.m33,
        ]
    }

    /// Writes the 16 elements of the matrix in column-major order to the
    /// start of the given slice. To write at an offset, pass a subslice.
    ///
    /// # Panics
    /// If the slice holds fewer than 16 elements.
    #[inline]
    pub fn write_to_column_slice(&self, elements: &mut [f64]) {
        assert!(elements.len() >= 16, "slice too short for matrix");
        elements[..16].copy_from_slice(&self.to_array());
    }

    /// Returns the column with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn column(&self, index: usize) -> Vector4 {
        match index {
            0 => Vector4::new(self.m00, self.m01, self.m02, self.m03),
            1 => Vector4::new(self.m10, self.m11, self.m12, self.m13),
            2 => Vector4::new(self.m20, self.m21, self.m22, self.m23),
            3 => Vector4::new(self.m30, self.m31, self.m32, self.m33),
            _ => panic!("column index out of bounds"),
        }
    }

    /// Returns the row with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector4 {
        match index {
            0 => Vector4::new(self.m00, self.m10, self.m20, self.m30),
            1 => Vector4::new(self.m01, self.m11, self.m21, self.m31),
            2 => Vector4::new(self.m02, self.m12, self.m22, self.m32),
            3 => Vector4::new(self.m03, self.m13, self.m23, self.m33),
            _ => panic!("row index out of bounds"),
        }
    }

    /// Sets the column with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn set_column(&mut self, index: usize, column: &Vector4) {
        match index {
            0 => {
                self.m00 = column.x();
                self.m01 = column.y();
                self.m02 = column.z();
                self.m03 = column.w();
            }
            1 => {
                self.m10 = column.x();
                self.m11 = column.y();
                self.m12 = column.z();
                self.m13 = column.w();
            }
            2 => {
                self.m20 = column.x();
                self.m21 = column.y();
                self.m22 = column.z();
                self.m23 = column.w();
            }
            3 => {
                self.m30 = column.x();
                self.m31 = column.y();
                self.m32 = column.z();
                self.m33 = column.w();
            }
            _ => panic!("column index out of bounds"),
        }
    }

    /// Sets the row with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn set_row(&mut self, index: usize, row: &Vector4) {
        match index {
            0 => {
                self.m00 = row.x();
                self.m10 = row.y();
                self.m20 = row.z();
                self.m30 = row.w();
            }
            1 => {
                self.m01 = row.x();
                self.m11 = row.y();
                self.m21 = row.z();
                self.m31 = row.w();
            }
            2 => {
                self.m02 = row.x();
                self.m12 = row.y();
                self.m22 = row.z();
                self.m32 = row.w();
            }
            3 => {
                self.m03 = row.x();
                self.m13 = row.y();
                self.m23 = row.z();
                self.m33 = row.w();
            }
            _ => panic!("row index out of bounds"),
        }
    }

    /// Returns the element in the given row and column.
    ///
    /// # Panics
    /// If an index is outside `0..4`.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f64 {
        self.column(column)[row]
    }

    /// Returns a mutable reference to the element in the given row and
    /// column.
    ///
    /// # Panics
    /// If an index is outside `0..4`.
    #[inline]
    pub fn element_mut(&mut self, row: usize, column: usize) -> &mut f64 {
        match (column, row) {
            (0, 0) => &mut self.m00,
            (0, 1) => &mut self.m01,
            (0, 2) => &mut self.m02,
            (0, 3) => &mut self.m03,
            (1, 0) => &mut self.m10,
            (1, 1) => &mut self.m11,
            (1, 2) => &mut self.m12,
            (1, 3) => &mut self.m13,
            (2, 0) => &mut self.m20,
            (2, 1) => &mut self.m21,
            (2, 2) => &mut self.m22,
            (2, 3) => &mut self.m23,
            (3, 0) => &mut self.m30,
            (3, 1) => &mut self.m31,
            (3, 2) => &mut self.m32,
            (3, 3) => &mut self.m33,
            _ => panic!("index out of bounds"),
        }
    }

    /// Returns the upper-left 3x3 block of the matrix.
    #[inline]
    pub const fn upper_left(&self) -> Matrix3 {
        Matrix3 {
            m00: self.m00,
            m01: self.m01,
            m02: self.m02,
            m10: self.m10,
            m11: self.m11,
            m12: self.m12,
            m20: self.m20,
            m21: self.m21,
            m22: self.m22,
        }
    }

    /// Sets the upper-left 3x3 block of the matrix, leaving the remaining
    /// elements untouched.
    #[inline]
    pub const fn set_upper_left(&mut self, upper_left: &Matrix3) {
        self.m00 = upper_left.m00;
        self.m01 = upper_left.m01;
        self.m02 = upper_left.m02;
        self.m10 = upper_left.m10;
        self.m11 = upper_left.m11;
        self.m12 = upper_left.m12;
        self.m20 = upper_left.m20;
        self.m21 = upper_left.m21;
        self.m22 = upper_left.m22;
    }

    /// Returns the translation part of the matrix.
    #[inline]
    pub const fn translation(&self) -> Vector3 {
        Vector3::new(self.m30, self.m31, self.m32)
    }

    /// Sets the translation part of the matrix, leaving the remaining
    /// elements untouched.
    #[inline]
    pub const fn set_translation(&mut self, translation: &Vector3) {
        self.m30 = translation.x();
        self.m31 = translation.y();
        self.m32 = translation.z();
    }

    /// Returns the diagonal of the matrix as a vector.
    #[inline]
    pub const fn diagonal(&self) -> Vector4 {
        Vector4::new(self.m00, self.m11, self.m22, self.m33)
    }

    /// Computes the trace of the matrix.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.m00 + self.m11 + self.m22 + self.m33
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(&mut f))
    }

    /// Transforms the given vector with this matrix.
    #[inline]
    pub fn transform(&self, vector: &Vector4) -> Vector4 {
        Vector4::new(
            self.m00 * vector.x()
                + self.m10 * vector.y()
                + self.m20 * vector.z()
                + self.m30 * vector.w(),
            self.m01 * vector.x()
                + self.m11 * vector.y()
                + self.m21 * vector.z()
                + self.m31 * vector.w(),
            self.m02 * vector.x()
                + self.m12 * vector.y()
                + self.m22 * vector.z()
                + self.m32 * vector.w(),
            self.m03 * vector.x()
                + self.m13 * vector.y()
                + self.m23 * vector.z()
                + self.m33 * vector.w(),
        )
    }

    /// Transforms the given point with this matrix, treating it as having a
    /// w-coordinate of 1 and performing no perspective division.
    #[inline]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::new(
            self.m00 * point.x() + self.m10 * point.y() + self.m20 * point.z() + self.m30,
            self.m01 * point.x() + self.m11 * point.y() + self.m21 * point.z() + self.m31,
            self.m02 * point.x() + self.m12 * point.y() + self.m22 * point.z() + self.m32,
        )
    }

    /// Transforms the given point with this matrix and performs the
    /// perspective division. If the transformed w-coordinate is zero, the
    /// result will be non-finite.
    #[inline]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        let transformed = self.transform(&Vector3::new(point.x(), point.y(), point.z()).extended(1.0));
        let inverse_w = transformed.w().recip();
        Point3::new(
            transformed.x() * inverse_w,
            transformed.y() * inverse_w,
            transformed.z() * inverse_w,
        )
    }

    /// Transforms the given vector with this matrix, treating it as having a
    /// w-coordinate of 0 so that the translation part does not apply.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        Vector3::new(
            self.m00 * vector.x() + self.m10 * vector.y() + self.m20 * vector.z(),
            self.m01 * vector.x() + self.m11 * vector.y() + self.m21 * vector.z(),
            self.m02 * vector.x() + self.m12 * vector.y() + self.m22 * vector.z(),
        )
    }
}

/// Classification of the algebraic structure of the matrix. Every query uses
/// exact floating-point comparison against 0 and 1 rather than an epsilon:
/// the fast paths selected from these predicates are only valid for matrices
/// that hold the structure exactly, and matrices produced by the constructors
/// in this module do. The comparisons are deliberately fragile under
/// accumulated round-off; a matrix that drifts away from an exact structure
/// simply falls back to the generic code paths.
#[allow(clippy::float_cmp, clippy::float_cmp_const)]
impl Matrix4 {
    /// Whether the last row of the matrix is exactly `(0, 0, 0, 1)`, making
    /// it an affine transform.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.m03 == 0.0 && self.m13 == 0.0 && self.m23 == 0.0 && self.m33 == 1.0
    }

    /// Whether the matrix is affine with an exact identity upper-left 3x3
    /// block, making it a pure translation.
    #[inline]
    pub fn is_translation(&self) -> bool {
        self.is_affine()
            && self.m00 == 1.0
            && self.m01 == 0.0
            && self.m02 == 0.0
            && self.m10 == 0.0
            && self.m11 == 1.0
            && self.m12 == 0.0
            && self.m20 == 0.0
            && self.m21 == 0.0
            && self.m22 == 1.0
    }

    /// Whether the matrix has an orthonormal upper-left 3x3 block.
    ///
    /// This currently answers exactly the same question as
    /// [`is_translation`](Self::is_translation), which is stricter than the
    /// name suggests: a rotation has an orthonormal basis but is not a
    /// translation. The alias is kept as-is because the multiplication and
    /// inversion fast paths were validated against it; widening the predicate
    /// changes which kernels run.
    #[inline]
    pub fn is_orthonormal(&self) -> bool {
        self.is_translation()
    }

    /// Whether the matrix is exactly the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.is_translation() && self.m30 == 0.0 && self.m31 == 0.0 && self.m32 == 0.0
    }

    /// Whether the matrix has the sparsity pattern of a (possibly off-center)
    /// perspective projection: zero except for the x/y scaling terms, the
    /// third column and the z-part of the fourth column, with a non-zero
    /// w-row entry in the third column and a zero `m33`.
    #[inline]
    pub fn is_perspective(&self) -> bool {
        self.m01 == 0.0
            && self.m02 == 0.0
            && self.m03 == 0.0
            && self.m10 == 0.0
            && self.m12 == 0.0
            && self.m13 == 0.0
            && self.m30 == 0.0
            && self.m31 == 0.0
            && self.m33 == 0.0
            && self.m23 != 0.0
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[{:>12.6} {:>12.6} {:>12.6} {:>12.6}]",
                self.element(row, 0),
                self.element(row, 1),
                self.element(row, 2),
                self.element(row, 3)
            )?;
        }
        Ok(())
    }
}

impl From<[f64; 16]> for Matrix4 {
    #[inline]
    fn from(elements: [f64; 16]) -> Self {
        Self::from_array(elements)
    }
}

impl From<Matrix4> for [f64; 16] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        matrix.to_array()
    }
}

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    let mut result = [0.0; 16];
    let (a, b) = (a.to_array(), b.to_array());
    for (r, (a, b)) in result.iter_mut().zip(a.iter().zip(&b)) {
        *r = a + b;
    }
    Matrix4::from_array(result)
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    let mut result = [0.0; 16];
    let (a, b) = (a.to_array(), b.to_array());
    for (r, (a, b)) in result.iter_mut().zip(a.iter().zip(&b)) {
        *r = a - b;
    }
    Matrix4::from_array(result)
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    a.multiplied(b)
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    a.transform(b)
});

impl_binop!(Mul, mul, Matrix4, f64, Matrix4, |a, b| {
    let scale = *b;
    a.mapped(|element| element * scale)
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    *a = a.multiplied(b);
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| {
    val.mapped(|element| -element)
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.to_array()
        .iter()
        .zip(&b.to_array())
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.to_array()
        .iter()
        .zip(&b.to_array())
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fresh_identity_matrix_is_classified_as_identity_translation_and_affine() {
        let m = Matrix4::identity();
        assert!(m.is_identity());
        assert!(m.is_translation());
        assert!(m.is_orthonormal());
        assert!(m.is_affine());
        assert!(!m.is_perspective());
    }

    #[test]
    fn setting_off_diagonal_element_downgrades_classification_to_affine() {
        let mut m = Matrix4::identity();
        *m.element_mut(1, 0) = 0.5;
        assert!(!m.is_identity());
        assert!(!m.is_translation());
        assert!(m.is_affine());
    }

    #[test]
    fn translation_matrix_is_classified_as_translation_but_not_identity() {
        let m = Matrix4::from_translation(&Vector3::new(1.0, -2.0, 3.0));
        assert!(!m.is_identity());
        assert!(m.is_translation());
        assert!(m.is_affine());
    }

    #[test]
    fn column_major_array_layout_is_preserved() {
        let elements: [f64; 16] = std::array::from_fn(|idx| idx as f64);
        let m = Matrix4::from_array(elements);
        assert_eq!(m.m00, 0.0);
        assert_eq!(m.m03, 3.0);
        assert_eq!(m.m10, 4.0);
        assert_eq!(m.m33, 15.0);
        assert_eq!(m.to_array(), elements);
    }

    #[test]
    fn writing_to_slice_round_trips() {
        let m = Matrix4::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        let mut buffer = [0.0; 20];
        m.write_to_column_slice(&mut buffer[4..]);
        assert_abs_diff_eq!(Matrix4::from_column_slice(&buffer[4..]), m);
    }

    #[test]
    fn rows_and_columns_are_consistent_with_elements() {
        let m = Matrix4::from_array(std::array::from_fn(|idx| idx as f64));
        for row in 0..4 {
            for column in 0..4 {
                assert_eq!(m.element(row, column), m.column(column)[row]);
                assert_eq!(m.element(row, column), m.row(row)[column]);
            }
        }
    }

    #[test]
    #[should_panic]
    fn requesting_out_of_bounds_row_panics() {
        Matrix4::identity().row(4);
    }

    #[test]
    #[should_panic]
    fn requesting_out_of_bounds_column_panics() {
        Matrix4::identity().column(4);
    }

    #[test]
    #[should_panic]
    fn setting_out_of_bounds_row_panics() {
        Matrix4::identity().set_row(4, &Vector4::zeros());
    }

    #[test]
    fn transforming_point_applies_translation() {
        let m = Matrix4::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(
            m.transform_point(&Point3::new(1.0, 1.0, 1.0)),
            Point3::new(2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn transforming_vector_ignores_translation() {
        let m = Matrix4::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        let v = Vector3::new(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(m.transform_vector(&v), v);
    }

    #[test]
    fn transposing_twice_gives_original_matrix() {
        let m = Matrix4::from_array(std::array::from_fn(|idx| (idx * idx) as f64));
        assert_abs_diff_eq!(m.transposed().transposed(), m);
    }
}
