//! Classified matrix multiplication.

use super::Matrix4;

impl Matrix4 {
    /// Computes the matrix product `self * right`.
    ///
    /// The product is defined so that transforming a vector with it applies
    /// `right` first and `self` second. The structure of both operands is
    /// classified first and the cheapest valid kernel is used; every kernel
    /// produces the same result as the fully generic product.
    pub fn multiplied(&self, right: &Self) -> Self {
        if self.is_identity() {
            *right
        } else if right.is_identity() {
            *self
        } else if self.is_translation() && right.is_affine() {
            self.multiplied_translation_affine(right)
        } else if self.is_affine() && right.is_affine() {
            self.multiplied_affine(right)
        } else if self.is_perspective() && right.is_affine() {
            self.multiplied_perspective_affine(right)
        } else if right.is_affine() {
            self.multiplied_generic_affine(right)
        } else {
            self.multiplied_generic(right)
        }
    }

    /// Computes the matrix product `left * self`.
    pub fn premultiplied(&self, left: &Self) -> Self {
        left.multiplied(self)
    }

    /// Replaces this matrix with `self * right`.
    #[inline]
    pub fn multiply(&mut self, right: &Self) {
        *self = self.multiplied(right);
    }

    /// Replaces this matrix with `left * self`.
    #[inline]
    pub fn premultiply(&mut self, left: &Self) {
        *self = left.multiplied(self);
    }

    /// Computes `self * right` assuming both matrices are affine. The last
    /// row of the result is fixed to `(0, 0, 0, 1)` without being computed.
    /// The result is undefined if either matrix is not affine.
    pub fn multiplied_affine(&self, right: &Self) -> Self {
        Self {
            m00: self.m00 * right.m00 + self.m10 * right.m01 + self.m20 * right.m02,
            m01: self.m01 * right.m00 + self.m11 * right.m01 + self.m21 * right.m02,
            m02: self.m02 * right.m00 + self.m12 * right.m01 + self.m22 * right.m02,
            m03: 0.0,
            m10: self.m00 * right.m10 + self.m10 * right.m11 + self.m20 * right.m12,
            m11: self.m01 * right.m10 + self.m11 * right.m11 + self.m21 * right.m12,
            m12: self.m02 * right.m10 + self.m12 * right.m11 + self.m22 * right.m12,
            m13: 0.0,
            m20: self.m00 * right.m20 + self.m10 * right.m21 + self.m20 * right.m22,
            m21: self.m01 * right.m20 + self.m11 * right.m21 + self.m21 * right.m22,
            m22: self.m02 * right.m20 + self.m12 * right.m21 + self.m22 * right.m22,
            m23: 0.0,
            m30: self.m00 * right.m30 + self.m10 * right.m31 + self.m20 * right.m32 + self.m30,
            m31: self.m01 * right.m30 + self.m11 * right.m31 + self.m21 * right.m32 + self.m31,
            m32: self.m02 * right.m30 + self.m12 * right.m31 + self.m22 * right.m32 + self.m32,
            m33: 1.0,
        }
    }

    /// Computes `self * right` assuming `self` is a pure translation and
    /// `right` is affine: the linear part of `right` is copied and the
    /// translations add. The result is undefined if the assumptions do not
    /// hold.
    pub fn multiplied_translation_affine(&self, right: &Self) -> Self {
        Self {
            m30: right.m30 + self.m30,
            m31: right.m31 + self.m31,
            m32: right.m32 + self.m32,
            m33: 1.0,
            ..*right
        }
    }

    /// Computes `self * right` assuming `self` has the perspective sparsity
    /// pattern and `right` is affine. The result is undefined if the
    /// assumptions do not hold.
    pub fn multiplied_perspective_affine(&self, right: &Self) -> Self {
        Self {
            m00: self.m00 * right.m00 + self.m20 * right.m02,
            m01: self.m11 * right.m01 + self.m21 * right.m02,
            m02: self.m22 * right.m02,
            m03: self.m23 * right.m02,
            m10: self.m00 * right.m10 + self.m20 * right.m12,
            m11: self.m11 * right.m11 + self.m21 * right.m12,
            m12: self.m22 * right.m12,
            m13: self.m23 * right.m12,
            m20: self.m00 * right.m20 + self.m20 * right.m22,
            m21: self.m11 * right.m21 + self.m21 * right.m22,
            m22: self.m22 * right.m22,
            m23: self.m23 * right.m22,
            m30: self.m00 * right.m30 + self.m20 * right.m32,
            m31: self.m11 * right.m31 + self.m21 * right.m32,
            m32: self.m22 * right.m32 + self.m32,
            m33: self.m23 * right.m32,
        }
    }

    /// Computes `self * right` for a generic `self` and an affine `right`,
    /// skipping the multiply-accumulate terms that are zero in the last row
    /// of `right`.
    fn multiplied_generic_affine(&self, right: &Self) -> Self {
        Self {
            m00: self.m00 * right.m00 + self.m10 * right.m01 + self.m20 * right.m02,
            m01: self.m01 * right.m00 + self.m11 * right.m01 + self.m21 * right.m02,
            m02: self.m02 * right.m00 + self.m12 * right.m01 + self.m22 * right.m02,
            m03: self.m03 * right.m00 + self.m13 * right.m01 + self.m23 * right.m02,
            m10: self.m00 * right.m10 + self.m10 * right.m11 + self.m20 * right.m12,
            m11: self.m01 * right.m10 + self.m11 * right.m11 + self.m21 * right.m12,
            m12: self.m02 * right.m10 + self.m12 * right.m11 + self.m22 * right.m12,
            m13: self.m03 * right.m10 + self.m13 * right.m11 + self.m23 * right.m12,
            m20: self.m00 * right.m20 + self.m10 * right.m21 + self.m20 * right.m22,
            m21: self.m01 * right.m20 + self.m11 * right.m21 + self.m21 * right.m22,
            m22: self.m02 * right.m20 + self.m12 * right.m21 + self.m22 * right.m22,
            m23: self.m03 * right.m20 + self.m13 * right.m21 + self.m23 * right.m22,
            m30: self.m00 * right.m30 + self.m10 * right.m31 + self.m20 * right.m32 + self.m30,
            m31: self.m01 * right.m30 + self.m11 * right.m31 + self.m21 * right.m32 + self.m31,
            m32: self.m02 * right.m30 + self.m12 * right.m31 + self.m22 * right.m32 + self.m32,
            m33: self.m03 * right.m30 + self.m13 * right.m31 + self.m23 * right.m32 + self.m33,
        }
    }

    fn multiplied_generic(&self, right: &Self) -> Self {
        Self {
            m00: self.m00 * right.m00
                + self.m10 * right.m01
                + self.m20 * right.m02
                + self.m30 * right.m03,
            m01: self.m01 * right.m00
                + self.m11 * right.m01
                + self.m21 * right.m02
                + self.m31 * right.m03,
            m02: self.m02 * right.m00
                + self.m12 * right.m01
                + self.m22 * right.m02
                + self.m32 * right.m03,
            m03: self.m03 * right.m00
                + self.m13 * right.m01
                + self.m23 * right.m02
                + self.m33 * right.m03,
            m10: self.m00 * right.m10
                + self.m10 * right.m11
                + self.m20 * right.m12
                + self.m30 * right.m13,
            m11: self.m01 * right.m10
                + self.m11 * right.m11
                + self.m21 * right.m12
                + self.m31 * right.m13,
            m12: self.m02 * right.m10
                + self.m12 * right.m11
                + self.m22 * right.m12
                + self.m32 * right.m13,
            m13: self.m03 * right.m10
                + self.m13 * right.m11
                + self.m23 * right.m12
                + self.m33 * right.m13,
            m20: self.m00 * right.m20
                + self.m10 * right.m21
                + self.m20 * right.m22
                + self.m30 * right.m23,
            m21: self.m01 * right.m20
                + self.m11 * right.m21
                + self.m21 * right.m22
                + self.m31 * right.m23,
            m22: self.m02 * right.m20
                + self.m12 * right.m21
                + self.m22 * right.m22
                + self.m32 * right.m23,
            m23: self.m03 * right.m20
                + self.m13 * right.m21
                + self.m23 * right.m22
                + self.m33 * right.m23,
            m30: self.m00 * right.m30
                + self.m10 * right.m31
                + self.m20 * right.m32
                + self.m30 * right.m33,
            m31: self.m01 * right.m30
                + self.m11 * right.m31
                + self.m21 * right.m32
                + self.m31 * right.m33,
            m32: self.m02 * right.m30
                + self.m12 * right.m31
                + self.m22 * right.m32
                + self.m32 * right.m33,
            m33: self.m03 * right.m30
                + self.m13 * right.m31
                + self.m23 * right.m32
                + self.m33 * right.m33,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{angle::Radians, matrix4::DepthRange, vector::Vector3};
    use approx::assert_abs_diff_eq;

    fn translation() -> Matrix4 {
        Matrix4::from_translation(&Vector3::new(1.5, -2.0, 0.25))
    }

    fn rotation() -> Matrix4 {
        Matrix4::rotation_z(Radians(0.4)).multiplied(&Matrix4::rotation_x(Radians(-1.1)))
    }

    fn affine() -> Matrix4 {
        translation()
            .multiplied(&rotation())
            .multiplied(&Matrix4::from_nonuniform_scaling(&Vector3::new(
                2.0, 0.5, -1.5,
            )))
    }

    fn perspective() -> Matrix4 {
        Matrix4::perspective(Radians(1.05), 1.5, 0.1, 100.0, DepthRange::NegativeOneToOne)
    }

    fn generic() -> Matrix4 {
        let mut m = affine();
        m.m03 = 0.1;
        m.m13 = -0.2;
        m.m23 = 0.3;
        m.m33 = 0.9;
        m
    }

    #[test]
    fn multiplying_with_identity_copies_the_other_operand() {
        let m = generic();
        assert_eq!(Matrix4::identity().multiplied(&m), m);
        assert_eq!(m.multiplied(&Matrix4::identity()), m);
    }

    #[test]
    fn translation_affine_fast_path_agrees_with_generic_product() {
        let result = translation().multiplied(&affine());
        let expected = translation().multiplied_generic(&affine());
        assert_abs_diff_eq!(result, expected, epsilon = 1e-12);
    }

    #[test]
    fn affine_fast_path_agrees_with_generic_product() {
        let a = affine();
        let b = rotation().multiplied(&translation());
        assert_abs_diff_eq!(
            a.multiplied(&b),
            a.multiplied_generic(&b),
            epsilon = 1e-12
        );
    }

    #[test]
    fn perspective_affine_fast_path_agrees_with_generic_product() {
        let p = perspective();
        let a = affine();
        assert!(p.is_perspective());
        assert_abs_diff_eq!(
            p.multiplied(&a),
            p.multiplied_generic(&a),
            epsilon = 1e-12
        );
    }

    #[test]
    fn generic_affine_fast_path_agrees_with_generic_product() {
        let g = generic();
        let a = affine();
        assert_abs_diff_eq!(
            g.multiplied(&a),
            g.multiplied_generic(&a),
            epsilon = 1e-12
        );
    }

    #[test]
    fn product_applies_right_operand_first() {
        let translate = translation();
        let rotate = rotation();
        let point = crate::point::Point3::new(1.0, 2.0, 3.0);

        let composed = translate.multiplied(&rotate);
        let expected = translate.transform_point(&rotate.transform_point(&point));
        assert_abs_diff_eq!(composed.transform_point(&point), expected, epsilon = 1e-12);
    }

    #[test]
    fn premultiplied_swaps_operand_roles() {
        let a = affine();
        let b = generic();
        assert_abs_diff_eq!(a.premultiplied(&b), b.multiplied(&a), epsilon = 1e-12);
    }

    #[test]
    fn multiplying_matrix_with_itself_in_place_matches_out_of_place_product() {
        let mut m = generic();
        let copy = m;
        m.multiply(&copy);
        assert_abs_diff_eq!(m, copy.multiplied(&copy), epsilon = 1e-12);
    }
}
