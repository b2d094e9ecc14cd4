//! Classified matrix inversion.

use super::Matrix4;

impl Matrix4 {
    /// Computes the determinant of the matrix. For an affine matrix only the
    /// upper-left 3x3 block contributes and the reduced expansion is used.
    pub fn determinant(&self) -> f64 {
        if self.is_affine() {
            self.upper_left().determinant()
        } else {
            (self.m00 * self.m11 - self.m01 * self.m10)
                * (self.m22 * self.m33 - self.m23 * self.m32)
                - (self.m00 * self.m12 - self.m02 * self.m10)
                    * (self.m21 * self.m33 - self.m23 * self.m31)
                + (self.m00 * self.m13 - self.m03 * self.m10)
                    * (self.m21 * self.m32 - self.m22 * self.m31)
                + (self.m01 * self.m12 - self.m02 * self.m11)
                    * (self.m20 * self.m33 - self.m23 * self.m30)
                - (self.m01 * self.m13 - self.m03 * self.m11)
                    * (self.m20 * self.m32 - self.m22 * self.m30)
                + (self.m02 * self.m13 - self.m03 * self.m12)
                    * (self.m20 * self.m31 - self.m21 * self.m30)
        }
    }

    /// Computes the inverse of the matrix.
    ///
    /// The structure of the matrix is classified first and the cheapest valid
    /// closed form is used. A singular matrix does not cause an error: the
    /// division by the vanishing determinant propagates non-finite values
    /// into the result.
    pub fn inverted(&self) -> Self {
        if self.is_identity() {
            *self
        } else if self.is_translation() {
            self.inverted_translation()
        } else if self.is_orthonormal() {
            // Unreachable while `is_orthonormal` mirrors `is_translation`;
            // kept in dispatch order for when the predicate is widened.
            self.inverted_orthonormal()
        } else if self.is_affine() {
            self.inverted_affine()
        } else if self.is_perspective() {
            self.inverted_perspective()
        } else {
            self.inverted_generic()
        }
    }

    /// Replaces this matrix with its inverse.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    fn inverted_translation(&self) -> Self {
        Self::from_translation(&-self.translation())
    }

    /// Computes the inverse assuming the upper-left 3x3 block is orthonormal
    /// and the matrix is affine: the block is transposed and the translation
    /// recomputed against it. The result is undefined if the assumptions do
    /// not hold.
    pub fn inverted_orthonormal(&self) -> Self {
        let transposed_linear = self.upper_left().transposed();
        let translation = transposed_linear.transform_vector(&self.translation());

        let mut m = Self::identity();
        m.set_upper_left(&transposed_linear);
        m.set_translation(&-translation);
        m
    }

    /// Computes the inverse assuming the matrix is affine, using the cofactor
    /// closed form of the upper-left 3x3 block and fixing the last row to
    /// `(0, 0, 0, 1)`. The result is undefined if the matrix is not affine.
    pub fn inverted_affine(&self) -> Self {
        let inverse_linear = self.upper_left().inverted();
        let translation = inverse_linear.transform_vector(&self.translation());

        let mut m = Self::identity();
        m.set_upper_left(&inverse_linear);
        m.set_translation(&-translation);
        m
    }

    /// Computes the inverse assuming the matrix was produced by one of the
    /// symmetric perspective builders, exploiting its sparsity pattern. The
    /// result is undefined for any other matrix; for an off-center
    /// perspective matrix use [`inverted_frustum`](Self::inverted_frustum).
    pub fn inverted_perspective(&self) -> Self {
        let inverse_zw = (self.m23 * self.m32).recip();

        let mut m = Self::zeros();
        m.m00 = self.m00.recip();
        m.m11 = self.m11.recip();
        m.m23 = self.m32.recip();
        m.m32 = self.m23.recip();
        m.m33 = -self.m22 * inverse_zw;
        m
    }

    /// Computes the inverse assuming the matrix was produced by one of the
    /// frustum or perspective builders, including the off-center variants.
    /// The result is undefined for any other matrix.
    pub fn inverted_frustum(&self) -> Self {
        let inverse_m00 = self.m00.recip();
        let inverse_m11 = self.m11.recip();
        let inverse_m23 = self.m23.recip();
        let inverse_m32 = self.m32.recip();

        let mut m = Self::zeros();
        m.m00 = inverse_m00;
        m.m11 = inverse_m11;
        m.m23 = inverse_m32;
        m.m30 = -self.m20 * inverse_m00 * inverse_m23;
        m.m31 = -self.m21 * inverse_m11 * inverse_m23;
        m.m32 = inverse_m23;
        m.m33 = -self.m22 * inverse_m23 * inverse_m32;
        m
    }

    /// Computes the inverse assuming the matrix was produced by one of the
    /// orthographic builders. The result is undefined for any other matrix.
    pub fn inverted_orthographic(&self) -> Self {
        let inverse_m00 = self.m00.recip();
        let inverse_m11 = self.m11.recip();
        let inverse_m22 = self.m22.recip();

        let mut m = Self::identity();
        m.m00 = inverse_m00;
        m.m11 = inverse_m11;
        m.m22 = inverse_m22;
        m.m30 = -self.m30 * inverse_m00;
        m.m31 = -self.m31 * inverse_m11;
        m.m32 = -self.m32 * inverse_m22;
        m
    }

    /// Computes the inverse of an arbitrary matrix by cofactor expansion. The
    /// twelve 2x2 sub-determinants are shared across the sixteen output
    /// elements.
    fn inverted_generic(&self) -> Self {
        let a = self.m00 * self.m11 - self.m01 * self.m10;
        let b = self.m00 * self.m12 - self.m02 * self.m10;
        let c = self.m00 * self.m13 - self.m03 * self.m10;
        let d = self.m01 * self.m12 - self.m02 * self.m11;
        let e = self.m01 * self.m13 - self.m03 * self.m11;
        let f = self.m02 * self.m13 - self.m03 * self.m12;
        let g = self.m20 * self.m31 - self.m21 * self.m30;
        let h = self.m20 * self.m32 - self.m22 * self.m30;
        let i = self.m20 * self.m33 - self.m23 * self.m30;
        let j = self.m21 * self.m32 - self.m22 * self.m31;
        let k = self.m21 * self.m33 - self.m23 * self.m31;
        let l = self.m22 * self.m33 - self.m23 * self.m32;

        let inverse_det = (a * l - b * k + c * j + d * i - e * h + f * g).recip();

        Self {
            m00: (self.m11 * l - self.m12 * k + self.m13 * j) * inverse_det,
            m01: (-self.m01 * l + self.m02 * k - self.m03 * j) * inverse_det,
            m02: (self.m31 * f - self.m32 * e + self.m33 * d) * inverse_det,
            m03: (-self.m21 * f + self.m22 * e - self.m23 * d) * inverse_det,
            m10: (-self.m10 * l + self.m12 * i - self.m13 * h) * inverse_det,
            m11: (self.m00 * l - self.m02 * i + self.m03 * h) * inverse_det,
            m12: (-self.m30 * f + self.m32 * c - self.m33 * b) * inverse_det,
            m13: (self.m20 * f - self.m22 * c + self.m23 * b) * inverse_det,
            m20: (self.m10 * k - self.m11 * i + self.m13 * g) * inverse_det,
            m21: (-self.m00 * k + self.m01 * i - self.m03 * g) * inverse_det,
            m22: (self.m30 * e - self.m31 * c + self.m33 * a) * inverse_det,
            m23: (-self.m20 * e + self.m21 * c - self.m23 * a) * inverse_det,
            m30: (-self.m10 * j + self.m11 * h - self.m12 * g) * inverse_det,
            m31: (self.m00 * j - self.m01 * h + self.m02 * g) * inverse_det,
            m32: (-self.m30 * d + self.m31 * b - self.m32 * a) * inverse_det,
            m33: (self.m20 * d - self.m21 * b + self.m22 * a) * inverse_det,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        angle::Radians,
        matrix4::DepthRange,
        point::Point3,
        vector::Vector3,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn affine() -> Matrix4 {
        Matrix4::from_translation(&Vector3::new(0.5, -1.0, 2.0))
            .multiplied(&Matrix4::rotation_y(Radians(0.7)))
            .multiplied(&Matrix4::from_nonuniform_scaling(&Vector3::new(
                2.0, 3.0, 0.5,
            )))
    }

    fn generic() -> Matrix4 {
        let mut m = affine();
        m.m03 = 0.2;
        m.m13 = -0.1;
        m.m23 = 0.05;
        m.m33 = 1.1;
        m
    }

    #[test]
    fn inverting_identity_gives_identity() {
        assert_eq!(Matrix4::identity().inverted(), Matrix4::identity());
    }

    #[test]
    fn inverting_translation_negates_the_translation() {
        let m = Matrix4::from_translation(&Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(
            m.inverted(),
            Matrix4::from_translation(&Vector3::new(-1.0, 2.0, -3.0))
        );
    }

    #[test]
    fn inverting_twice_gives_back_the_original_matrix() {
        let m = generic();
        assert_relative_eq!(m.inverted().inverted(), m, max_relative = 1e-9);
    }

    #[test]
    fn inverse_of_affine_matrix_is_multiplicative_inverse() {
        let m = affine();
        assert_abs_diff_eq!(
            m.multiplied(&m.inverted()),
            Matrix4::identity(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn inverse_of_generic_matrix_is_multiplicative_inverse() {
        let m = generic();
        assert_abs_diff_eq!(
            m.multiplied(&m.inverted()),
            Matrix4::identity(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn inverse_of_product_reverses_the_factor_order() {
        let translate = Matrix4::from_translation(&Vector3::new(1.0, 2.0, -0.5));
        let rotate = Matrix4::rotation_z(Radians(1.3));
        let product_inverse = translate.multiplied(&rotate).inverted();
        let reversed = rotate.inverted().multiplied(&translate.inverted());
        assert_abs_diff_eq!(product_inverse, reversed, epsilon = 1e-12);
    }

    #[test]
    fn orthonormal_inverse_matches_generic_inverse_for_rigid_transform() {
        let m = Matrix4::from_translation(&Vector3::new(-1.0, 0.5, 2.0))
            .multiplied(&Matrix4::rotation_x(Radians(0.4)));
        assert_abs_diff_eq!(m.inverted_orthonormal(), m.inverted(), epsilon = 1e-12);
    }

    #[test]
    fn perspective_inverse_matches_generic_inverse() {
        let m = Matrix4::perspective(Radians(1.0), 1.4, 0.1, 250.0, DepthRange::ZeroToOne);
        assert_relative_eq!(
            m.inverted_perspective(),
            m.inverted_generic(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn frustum_inverse_matches_generic_inverse_for_off_center_frustum() {
        let m = Matrix4::frustum(
            -0.3,
            0.8,
            -0.2,
            0.6,
            0.1,
            80.0,
            DepthRange::NegativeOneToOne,
        );
        let generic_inverse = m.inverted_generic();
        assert_relative_eq!(m.inverted_frustum(), generic_inverse, max_relative = 1e-12);
    }

    #[test]
    fn orthographic_inverse_matches_generic_inverse() {
        let m = Matrix4::orthographic(
            -2.0,
            3.0,
            -1.0,
            1.5,
            0.5,
            50.0,
            DepthRange::NegativeOneToOne,
        );
        assert_relative_eq!(
            m.inverted_orthographic(),
            m.inverted_generic(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn inverting_singular_matrix_propagates_non_finite_values() {
        let mut m = Matrix4::identity();
        *m.element_mut(0, 0) = 0.0;
        let inverse = m.inverted();
        assert!(inverse.to_array().iter().any(|element| !element.is_finite()));
    }

    #[test]
    fn inverse_perspective_unprojects_projected_point() {
        let m = Matrix4::perspective(Radians(1.2), 1.0, 0.1, 100.0, DepthRange::NegativeOneToOne);
        let point = Point3::new(0.3, -0.2, -5.0);
        let unprojected = m.inverted().project_point(&m.project_point(&point));
        assert_abs_diff_eq!(unprojected, point, epsilon = 1e-9);
    }
}
