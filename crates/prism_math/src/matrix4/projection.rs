//! Projection matrix builders.

use super::Matrix4;
use crate::angle::Radians;

/// The range the near and far plane are mapped into along the z-axis of
/// normalized device coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DepthRange {
    /// Near maps to -1 and far to +1 (the OpenGL convention).
    NegativeOneToOne,
    /// Near maps to 0 and far to +1 (the Vulkan and Direct3D convention).
    ZeroToOne,
}

/// Substituted for the vanishing term when the near or far plane lies at
/// infinity, instead of taking the exact limit.
const INFINITE_PLANE_EPSILON: f64 = 1e-6;

impl Matrix4 {
    /// Creates a right-handed perspective projection from the given vertical
    /// field of view, aspect ratio (width over height) and near and far plane
    /// distances. Either plane distance may be `f64::INFINITY`.
    pub fn perspective(
        fov_y: Radians,
        aspect_ratio: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        let inverse_half_tan = (0.5 * fov_y.0).tan().recip();
        Self::perspective_from_scales(
            inverse_half_tan / aspect_ratio,
            inverse_half_tan,
            near,
            far,
            depth_range,
        )
    }

    /// Creates a left-handed perspective projection from the given vertical
    /// field of view, aspect ratio (width over height) and near and far plane
    /// distances. Either plane distance may be `f64::INFINITY`.
    pub fn perspective_lh(
        fov_y: Radians,
        aspect_ratio: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        Self::perspective(fov_y, aspect_ratio, near, far, depth_range).into_left_handed()
    }

    /// Creates a right-handed perspective projection from the width and
    /// height of the near plane and the near and far plane distances.
    pub fn perspective_rect(
        width: f64,
        height: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        Self::perspective_from_scales(
            2.0 * near / width,
            2.0 * near / height,
            near,
            far,
            depth_range,
        )
    }

    /// Creates a left-handed perspective projection from the width and height
    /// of the near plane and the near and far plane distances.
    pub fn perspective_rect_lh(
        width: f64,
        height: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        Self::perspective_rect(width, height, near, far, depth_range).into_left_handed()
    }

    /// Creates a right-handed off-axis perspective projection. The angles
    /// offset the frustum center from the view direction along the x- and
    /// y-axis of the near plane.
    pub fn perspective_off_center(
        fov_y: Radians,
        offset_angle_x: Radians,
        offset_angle_y: Radians,
        aspect_ratio: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        let inverse_half_tan = (0.5 * fov_y.0).tan().recip();
        let scale_x = inverse_half_tan / aspect_ratio;
        let scale_y = inverse_half_tan;

        let mut m = Self::perspective_from_scales(scale_x, scale_y, near, far, depth_range);
        m.m20 = offset_angle_x.0.tan() * scale_x;
        m.m21 = offset_angle_y.0.tan() * scale_y;
        m
    }

    /// Creates a right-handed perspective projection for the frustum with the
    /// given near-plane edges and near and far plane distances. The far plane
    /// distance may be `f64::INFINITY`.
    pub fn frustum(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        let (m22, m32) = perspective_z_terms(near, far, depth_range);

        let mut m = Self::zeros();
        m.m00 = 2.0 * near / (right - left);
        m.m11 = 2.0 * near / (top - bottom);
        m.m20 = (right + left) / (right - left);
        m.m21 = (top + bottom) / (top - bottom);
        m.m22 = m22;
        m.m23 = -1.0;
        m.m32 = m32;
        m
    }

    /// Creates a left-handed perspective projection for the frustum with the
    /// given near-plane edges and near and far plane distances. The far plane
    /// distance may be `f64::INFINITY`.
    pub fn frustum_lh(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        Self::frustum(left, right, bottom, top, near, far, depth_range).into_left_handed()
    }

    /// Creates a right-handed orthographic projection mapping the given view
    /// box into normalized device coordinates.
    pub fn orthographic(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        let mut m = Self::identity();
        m.m00 = 2.0 / (right - left);
        m.m11 = 2.0 / (top - bottom);
        m.m22 = match depth_range {
            DepthRange::NegativeOneToOne => 2.0 / (near - far),
            DepthRange::ZeroToOne => 1.0 / (near - far),
        };
        m.m30 = (right + left) / (left - right);
        m.m31 = (top + bottom) / (bottom - top);
        m.m32 = match depth_range {
            DepthRange::NegativeOneToOne => (far + near) / (near - far),
            DepthRange::ZeroToOne => near / (near - far),
        };
        m
    }

    /// Creates a left-handed orthographic projection mapping the given view
    /// box into normalized device coordinates.
    pub fn orthographic_lh(
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        let mut m = Self::orthographic(left, right, bottom, top, near, far, depth_range);
        m.m22 = -m.m22;
        m
    }

    /// Creates a right-handed orthographic projection for a view box centered
    /// on the view direction, with the given width and height.
    pub fn orthographic_symmetric(
        width: f64,
        height: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        Self::orthographic(
            -0.5 * width,
            0.5 * width,
            -0.5 * height,
            0.5 * height,
            near,
            far,
            depth_range,
        )
    }

    /// Creates a left-handed orthographic projection for a view box centered
    /// on the view direction, with the given width and height.
    pub fn orthographic_symmetric_lh(
        width: f64,
        height: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        let mut m = Self::orthographic_symmetric(width, height, near, far, depth_range);
        m.m22 = -m.m22;
        m
    }

    /// Creates an orthographic projection for 2D rendering, with the near and
    /// far plane fixed to -1 and +1 and the OpenGL depth convention.
    pub fn orthographic_2d(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self::orthographic(
            left,
            right,
            bottom,
            top,
            -1.0,
            1.0,
            DepthRange::NegativeOneToOne,
        )
    }

    /// Post-multiplies this matrix with a perspective projection, as if by
    /// `self * Matrix4::perspective(..)`.
    pub fn apply_perspective(
        &mut self,
        fov_y: Radians,
        aspect_ratio: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::perspective(
            fov_y,
            aspect_ratio,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with a left-handed perspective projection,
    /// as if by `self * Matrix4::perspective_lh(..)`.
    pub fn apply_perspective_lh(
        &mut self,
        fov_y: Radians,
        aspect_ratio: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::perspective_lh(
            fov_y,
            aspect_ratio,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with a perspective projection built from
    /// the near-plane extent, as if by `self * Matrix4::perspective_rect(..)`.
    pub fn apply_perspective_rect(
        &mut self,
        width: f64,
        height: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::perspective_rect(
            width,
            height,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with an off-axis perspective projection,
    /// as if by `self * Matrix4::perspective_off_center(..)`.
    pub fn apply_perspective_off_center(
        &mut self,
        fov_y: Radians,
        offset_angle_x: Radians,
        offset_angle_y: Radians,
        aspect_ratio: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::perspective_off_center(
            fov_y,
            offset_angle_x,
            offset_angle_y,
            aspect_ratio,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with a frustum projection, as if by
    /// `self * Matrix4::frustum(..)`.
    pub fn apply_frustum(
        &mut self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::frustum(
            left,
            right,
            bottom,
            top,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with a left-handed frustum projection, as
    /// if by `self * Matrix4::frustum_lh(..)`.
    pub fn apply_frustum_lh(
        &mut self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::frustum_lh(
            left,
            right,
            bottom,
            top,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with an orthographic projection, as if by
    /// `self * Matrix4::orthographic(..)`.
    pub fn apply_orthographic(
        &mut self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::orthographic(
            left,
            right,
            bottom,
            top,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with a left-handed orthographic
    /// projection, as if by `self * Matrix4::orthographic_lh(..)`.
    pub fn apply_orthographic_lh(
        &mut self,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::orthographic_lh(
            left,
            right,
            bottom,
            top,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with a symmetric orthographic projection,
    /// as if by `self * Matrix4::orthographic_symmetric(..)`.
    pub fn apply_orthographic_symmetric(
        &mut self,
        width: f64,
        height: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) {
        self.multiply(&Self::orthographic_symmetric(
            width,
            height,
            near,
            far,
            depth_range,
        ));
    }

    /// Post-multiplies this matrix with a 2D orthographic projection, as if
    /// by `self * Matrix4::orthographic_2d(..)`.
    pub fn apply_orthographic_2d(&mut self, left: f64, right: f64, bottom: f64, top: f64) {
        self.multiply(&Self::orthographic_2d(left, right, bottom, top));
    }

    fn perspective_from_scales(
        scale_x: f64,
        scale_y: f64,
        near: f64,
        far: f64,
        depth_range: DepthRange,
    ) -> Self {
        let (m22, m32) = perspective_z_terms(near, far, depth_range);

        let mut m = Self::zeros();
        m.m00 = scale_x;
        m.m11 = scale_y;
        m.m22 = m22;
        m.m23 = -1.0;
        m.m32 = m32;
        m
    }

    /// Flips a right-handed projection into the corresponding left-handed
    /// one by negating the z-mapping terms of the third column.
    fn into_left_handed(mut self) -> Self {
        self.m20 = -self.m20;
        self.m21 = -self.m21;
        self.m22 = -self.m22;
        self.m23 = -self.m23;
        self
    }
}

/// Computes the `m22` and `m32` elements mapping view-space depth into the
/// given NDC depth range for a right-handed perspective matrix. A near or far
/// plane at infinity is approximated by substituting a fixed epsilon for the
/// vanishing term.
fn perspective_z_terms(near: f64, far: f64, depth_range: DepthRange) -> (f64, f64) {
    let far_infinite = far > 0.0 && far.is_infinite();
    let near_infinite = near > 0.0 && near.is_infinite();
    let zero_to_one = depth_range == DepthRange::ZeroToOne;

    if far_infinite {
        let e = INFINITE_PLANE_EPSILON;
        (e - 1.0, (e - if zero_to_one { 1.0 } else { 2.0 }) * near)
    } else if near_infinite {
        let e = INFINITE_PLANE_EPSILON;
        (
            if zero_to_one { 0.0 } else { 1.0 } - e,
            (if zero_to_one { 1.0 } else { 2.0 } - e) * far,
        )
    } else {
        let m22 = (if zero_to_one { far } else { far + near }) / (near - far);
        let m32 = (if zero_to_one { far } else { 2.0 * far }) * near / (near - far);
        (m22, m32)
    }
}
