//! Asymmetric-frustum projection manager.
//!
//! The vertical half-extent is fixed at startup from the initial
//! window shape; resizes scale only the horizontal half-extent, so the
//! vertical field of view is preserved exactly and the horizontal view
//! widens or narrows with the window (no letterboxing). The far plane
//! is a function of window width and field of view, not an independent
//! constant.

use glam::{Mat4, Vec4};

/// Horizontal half-extent at the near plane, the unit everything else
/// is measured against.
const HALF_FRUSTUM_RIGHT: f32 = 1.0;

/// Projection state tied to the window size.
#[derive(Debug, Clone)]
pub struct ViewportProjection {
    window_width: u32,
    window_height: u32,
    half_right: f32,
    half_up: f32,
    near_clip: f32,
    far_clip: f32,
    fov_degrees: f32,
    matrix: Mat4,
}

impl ViewportProjection {
    /// Initialize from the startup window size. The vertical half-extent
    /// `half_right * height/width` becomes the fixed reference; zero
    /// dimensions are clamped to 1 so the reference is always finite.
    #[must_use]
    pub fn new(width: u32, height: u32, fov_degrees: f32, near_clip: f32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let half_right = HALF_FRUSTUM_RIGHT;
        let half_up = half_right * height as f32 / width as f32;
        let mut projection = Self {
            window_width: width,
            window_height: height,
            half_right,
            half_up,
            near_clip,
            far_clip: far_for_width(width, fov_degrees),
            fov_degrees,
            matrix: Mat4::IDENTITY,
        };
        projection.rebuild();
        projection
    }

    /// Recompute the frustum for a new window size.
    ///
    /// A zero width or height would divide into the aspect ratio, so a
    /// degenerate resize is a no-op that keeps the last valid matrix.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("ignoring degenerate resize to {width}x{height}");
            return;
        }
        self.window_width = width;
        self.window_height = height;
        self.far_clip = far_for_width(width, self.fov_degrees);
        self.rebuild();
    }

    /// Current off-axis frustum matrix. Pure accessor.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Effective horizontal half-extent at the near plane, after aspect
    /// scaling.
    #[must_use]
    pub fn half_extent_right(&self) -> f32 {
        self.half_right * self.aspect()
    }

    /// Vertical half-extent at the near plane (fixed after startup).
    #[must_use]
    pub fn half_extent_up(&self) -> f32 {
        self.half_up
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near_clip(&self) -> f32 {
        self.near_clip
    }

    /// Far clipping plane distance, derived from window width and FOV.
    #[must_use]
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    /// Last accepted window size.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    fn aspect(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }

    fn rebuild(&mut self) {
        let right = self.half_extent_right();
        self.matrix = frustum_rh(
            -right,
            right,
            -self.half_up,
            self.half_up,
            self.near_clip,
            self.far_clip,
        );
    }
}

/// Far-plane distance for a window width and vertical FOV in degrees:
/// `(width / 2) / tan(fov * π / 360)`.
fn far_for_width(width: u32, fov_degrees: f32) -> f32 {
    let half_width = width as f32 / 2.0;
    half_width / (fov_degrees * std::f32::consts::PI / 360.0).tan()
}

/// Off-axis right-handed frustum with the [0, 1] depth range wgpu uses.
fn frustum_rh(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let depth = far / (near - far);
    Mat4::from_cols(
        Vec4::new(2.0 * near / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / (top - bottom), 0.0, 0.0),
        Vec4::new(
            (right + left) / (right - left),
            (top + bottom) / (top - bottom),
            depth,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, depth * near, 0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn square() -> ViewportProjection {
        ViewportProjection::new(1000, 1000, 70.0, 1.0)
    }

    #[test]
    fn startup_extents_and_far_clip() {
        let projection = square();
        assert_eq!(projection.half_extent_up(), 1.0);
        assert_eq!(projection.half_extent_right(), 1.0);
        // far = 500 / tan(35°)
        assert!((projection.far_clip() - 714.07).abs() < 0.01);
    }

    #[test]
    fn resize_is_idempotent_bitwise() {
        let mut a = square();
        a.on_resize(1280, 720);
        let first = a.projection_matrix().to_cols_array();
        a.on_resize(1280, 720);
        let second = a.projection_matrix().to_cols_array();
        assert_eq!(first, second);
    }

    #[test]
    fn doubling_width_doubles_horizontal_extent_only() {
        let mut projection = square();
        let up_before = projection.half_extent_up();
        let right_before = projection.half_extent_right();

        projection.on_resize(2000, 1000);
        assert_eq!(projection.half_extent_up(), up_before);
        assert!(
            (projection.half_extent_right() - 2.0 * right_before).abs() < EPS
        );
        // Far clip follows the new width.
        assert!((projection.far_clip() - 2.0 * 714.07).abs() < 0.02);
    }

    #[test]
    fn vertical_scale_survives_resizes() {
        let mut projection = square();
        let vertical = projection.projection_matrix().y_axis.y;
        projection.on_resize(1920, 1080);
        projection.on_resize(640, 480);
        // near / half_up is constant, so the matrix Y scale never moves.
        assert!((projection.projection_matrix().y_axis.y - vertical).abs() < EPS);
    }

    #[test]
    fn zero_height_resize_is_a_no_op() {
        let mut projection = square();
        let before = projection.projection_matrix().to_cols_array();
        let size = projection.window_size();
        projection.on_resize(800, 0);
        projection.on_resize(0, 800);
        assert_eq!(projection.projection_matrix().to_cols_array(), before);
        assert_eq!(projection.window_size(), size);
    }

    #[test]
    fn frustum_matches_symmetric_perspective() {
        // With symmetric extents, the off-axis matrix must agree with
        // glam's perspective for the equivalent vertical FOV.
        let near = 1.0;
        let far = 100.0;
        let half_up = 0.5;
        let aspect = 2.0;
        let ours = frustum_rh(
            -half_up * aspect,
            half_up * aspect,
            -half_up,
            half_up,
            near,
            far,
        );
        let fovy = 2.0 * (half_up / near).atan();
        let reference = Mat4::perspective_rh(fovy, aspect, near, far);
        let (a, b) = (ours.to_cols_array(), reference.to_cols_array());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < EPS);
        }
    }
}
