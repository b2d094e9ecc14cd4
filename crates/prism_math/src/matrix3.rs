//! 3x3 matrices.

use crate::vector::Vector3;
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 3x3 column-major matrix. The field `m<c><r>` holds the element in column
/// `c` and row `r`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    pub m00: f64,
    pub m01: f64,
    pub m02: f64,
    pub m10: f64,
    pub m11: f64,
    pub m12: f64,
    pub m20: f64,
    pub m21: f64,
    pub m22: f64,
}

impl Matrix3 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_diagonal(&Vector3::new(1.0, 1.0, 1.0))
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns(Vector3::zeros(), Vector3::zeros(), Vector3::zeros())
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector3) -> Self {
        let mut m = Self::zeros();
        m.m00 = diagonal.x();
        m.m11 = diagonal.y();
        m.m22 = diagonal.z();
        m
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(column_0: Vector3, column_1: Vector3, column_2: Vector3) -> Self {
        Self {
            m00: column_0.x(),
            m01: column_0.y(),
            m02: column_0.z(),
            m10: column_1.x(),
            m11: column_1.y(),
            m12: column_1.z(),
            m20: column_2.x(),
            m21: column_2.y(),
            m22: column_2.z(),
        }
    }

    /// Creates a matrix from the given array of elements in column-major
    /// order.
    #[inline]
    pub const fn from_array(elements: [f64; 9]) -> Self {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = elements;
        Self {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
            m20,
            m21,
            m22,
        }
    }

    /// Returns the elements of the matrix as an array in column-major order.
    #[inline]
    pub const fn to_array(self) -> [f64; 9] {
        [
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21,
            self.m22,
        ]
    }

    /// Returns the column with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..3`.
    #[inline]
    pub fn column(&self, index: usize) -> Vector3 {
        match index {
            0 => Vector3::new(self.m00, self.m01, self.m02),
            1 => Vector3::new(self.m10, self.m11, self.m12),
            2 => Vector3::new(self.m20, self.m21, self.m22),
            _ => panic!("column index out of bounds"),
        }
    }

    /// Returns the row with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..3`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector3 {
        match index {
            0 => Vector3::new(self.m00, self.m10, self.m20),
            1 => Vector3::new(self.m01, self.m11, self.m21),
            2 => Vector3::new(self.m02, self.m12, self.m22),
            _ => panic!("row index out of bounds"),
        }
    }

    /// Returns the element in the given row and column.
    ///
    /// # Panics
    /// If an index is outside `0..3`.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f64 {
        self.column(column)[row]
    }

    /// Returns the diagonal of this matrix as a vector.
    #[inline]
    pub const fn diagonal(&self) -> Vector3 {
        Vector3::new(self.m00, self.m11, self.m22)
    }

    /// Computes the trace of this matrix.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.m00 + self.m11 + self.m22
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self {
            m00: self.m00,
            m01: self.m10,
            m02: self.m20,
            m10: self.m01,
            m11: self.m11,
            m12: self.m21,
            m20: self.m02,
            m21: self.m12,
            m22: self.m22,
        }
    }

    /// Computes the determinant of this matrix.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m00 * (self.m11 * self.m22 - self.m21 * self.m12)
            - self.m10 * (self.m01 * self.m22 - self.m21 * self.m02)
            + self.m20 * (self.m01 * self.m12 - self.m11 * self.m02)
    }

    /// Returns the inverse of this matrix. If the matrix is not invertible,
    /// the result will be non-finite.
    pub fn inverted(&self) -> Self {
        let cofactor_00 = self.m11 * self.m22 - self.m21 * self.m12;
        let cofactor_01 = self.m21 * self.m02 - self.m01 * self.m22;
        let cofactor_02 = self.m01 * self.m12 - self.m11 * self.m02;
        let cofactor_10 = self.m20 * self.m12 - self.m10 * self.m22;
        let cofactor_11 = self.m00 * self.m22 - self.m20 * self.m02;
        let cofactor_12 = self.m10 * self.m02 - self.m00 * self.m12;
        let cofactor_20 = self.m10 * self.m21 - self.m20 * self.m11;
        let cofactor_21 = self.m20 * self.m01 - self.m00 * self.m21;
        let cofactor_22 = self.m00 * self.m11 - self.m10 * self.m01;

        let inverse_det =
            (self.m00 * cofactor_00 + self.m10 * cofactor_01 + self.m20 * cofactor_02).recip();

        Self {
            m00: cofactor_00 * inverse_det,
            m01: cofactor_01 * inverse_det,
            m02: cofactor_02 * inverse_det,
            m10: cofactor_10 * inverse_det,
            m11: cofactor_11 * inverse_det,
            m12: cofactor_12 * inverse_det,
            m20: cofactor_20 * inverse_det,
            m21: cofactor_21 * inverse_det,
            m22: cofactor_22 * inverse_det,
        }
    }

    /// Transforms the given vector with this matrix.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        Vector3::new(
            self.m00 * vector.x() + self.m10 * vector.y() + self.m20 * vector.z(),
            self.m01 * vector.x() + self.m11 * vector.y() + self.m21 * vector.z(),
            self.m02 * vector.x() + self.m12 * vector.y() + self.m22 * vector.z(),
        )
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(&mut f))
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(
                f,
                "[{:>12.6} {:>12.6} {:>12.6}]",
                self.element(row, 0),
                self.element(row, 1),
                self.element(row, 2)
            )?;
        }
        Ok(())
    }
}

impl_binop!(Add, add, Matrix3, Matrix3, Matrix3, |a, b| {
    let mut result = [0.0; 9];
    let (a, b) = (a.to_array(), b.to_array());
    for (r, (a, b)) in result.iter_mut().zip(a.iter().zip(&b)) {
        *r = a + b;
    }
    Matrix3::from_array(result)
});

impl_binop!(Sub, sub, Matrix3, Matrix3, Matrix3, |a, b| {
    let mut result = [0.0; 9];
    let (a, b) = (a.to_array(), b.to_array());
    for (r, (a, b)) in result.iter_mut().zip(a.iter().zip(&b)) {
        *r = a - b;
    }
    Matrix3::from_array(result)
});

impl_binop!(Mul, mul, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::from_columns(
        a.transform_vector(&b.column(0)),
        a.transform_vector(&b.column(1)),
        a.transform_vector(&b.column(2)),
    )
});

impl_binop!(Mul, mul, Matrix3, Vector3, Vector3, |a, b| {
    a.transform_vector(b)
});

impl_binop!(Mul, mul, Matrix3, f64, Matrix3, |a, b| {
    let scale = *b;
    a.mapped(|element| element * scale)
});

impl_unary_op!(Neg, neg, Matrix3, Matrix3, |val| {
    val.mapped(|element| -element)
});

impl_abs_diff_eq!(Matrix3, |a, b, epsilon| {
    a.to_array()
        .iter()
        .zip(&b.to_array())
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Matrix3, |a, b, epsilon, max_relative| {
    a.to_array()
        .iter()
        .zip(&b.to_array())
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn example_matrix() -> Matrix3 {
        Matrix3::from_columns(
            Vector3::new(2.0, 0.0, 1.0),
            Vector3::new(-1.0, 3.0, 0.5),
            Vector3::new(0.0, 1.0, 4.0),
        )
    }

    #[test]
    fn multiplying_with_identity_leaves_matrix_unchanged() {
        let m = example_matrix();
        assert_abs_diff_eq!(m * Matrix3::identity(), m);
        assert_abs_diff_eq!(Matrix3::identity() * m, m);
    }

    #[test]
    fn inverting_matrix_gives_multiplicative_inverse() {
        let m = example_matrix();
        assert_abs_diff_eq!(m * m.inverted(), Matrix3::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(m.inverted() * m, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn inverting_singular_matrix_gives_non_finite_elements() {
        let m = Matrix3::from_columns(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(2.0, 4.0, 6.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        assert!(m.inverted().to_array().iter().any(|e| !e.is_finite()));
    }

    #[test]
    fn transposing_swaps_rows_and_columns() {
        let m = example_matrix();
        let t = m.transposed();
        for row in 0..3 {
            for column in 0..3 {
                assert_abs_diff_eq!(m.element(row, column), t.element(column, row));
            }
        }
    }

    #[test]
    fn determinant_of_identity_is_one() {
        assert_abs_diff_eq!(Matrix3::identity().determinant(), 1.0);
    }

    #[test]
    #[should_panic]
    fn requesting_out_of_bounds_column_panics() {
        example_matrix().column(3);
    }

    #[test]
    #[should_panic]
    fn requesting_out_of_bounds_row_panics() {
        example_matrix().row(3);
    }
}
