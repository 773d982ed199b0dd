//! Free-look camera: position, yaw/pitch orientation, and movement.

use glam::{Mat4, Vec3};

use super::angles::{clamp_pitch, front_from_angles, wrap_yaw};

/// World-space up axis used to derive the strafe basis.
const WORLD_UP: Vec3 = Vec3::Y;

/// Default look sensitivity in degrees per pixel of pointer travel.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default movement step in world units per frame.
pub const DEFAULT_MOVE_SPEED: f32 = 0.05;

/// Movement directions relative to the current orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the forward vector.
    Forward,
    /// Against the forward vector.
    Backward,
    /// Along the negative right vector.
    StrafeLeft,
    /// Along the right vector.
    StrafeRight,
}

/// Free-look camera owning position and orientation state.
///
/// `front`, `right`, and `up` are pure functions of `(yaw, pitch)` and
/// are refreshed on every look update; they are never set directly.
/// Movement advances a fixed step per call, so speed is frame-rate
/// dependent; that matches the harness this models and is not hidden.
#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    sensitivity: f32,
    move_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY, DEFAULT_MOVE_SPEED)
    }
}

impl CameraController {
    /// Create a camera at the default start position, looking along the
    /// yaw-0/pitch-0 direction.
    #[must_use]
    pub fn new(sensitivity: f32, move_speed: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            yaw: 0.0,
            pitch: 0.0,
            front: Vec3::X,
            right: Vec3::Z,
            up: Vec3::Y,
            sensitivity,
            move_speed,
        };
        camera.refresh_basis();
        camera
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current yaw in degrees, wrapped to `[-180, 180]`.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees, clamped to `[-89, 89]`.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit forward vector derived from the current angles.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit up vector orthogonal to the forward/right pair.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Apply a raw pointer displacement measured from the window
    /// midpoint. The vertical axis is inverted (pointer up looks up).
    ///
    /// A `(0, 0)` displacement means the pointer was already centered;
    /// those samples come from re-centering itself and must not move
    /// the camera.
    pub fn apply_look(&mut self, delta_x: f32, delta_y: f32) {
        if delta_x == 0.0 && delta_y == 0.0 {
            return;
        }
        self.yaw = wrap_yaw(self.yaw + delta_x * self.sensitivity);
        self.pitch = clamp_pitch(self.pitch - delta_y * self.sensitivity);
        self.refresh_basis();
    }

    /// Advance the position one step in the given direction. The step
    /// is `move_speed * speed_multiplier`, independent of elapsed time.
    pub fn advance(&mut self, direction: MoveDirection, speed_multiplier: f32) {
        let step = self.move_speed * speed_multiplier;
        match direction {
            MoveDirection::Forward => self.position += self.front * step,
            MoveDirection::Backward => self.position -= self.front * step,
            MoveDirection::StrafeLeft => self.position -= self.right * step,
            MoveDirection::StrafeRight => self.position += self.right * step,
        }
    }

    /// Right-handed look-at matrix for the current state. Pure.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn refresh_basis(&mut self) {
        self.front = front_from_angles(self.yaw, self.pitch);
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn look_scales_by_sensitivity() {
        let mut camera = CameraController::default();
        camera.apply_look(100.0, 0.0);
        assert!((camera.yaw() - 10.0).abs() < EPS);
        assert_eq!(camera.pitch(), 0.0);
        assert!(camera.front().y.abs() < EPS);
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let mut camera = CameraController::default();
        camera.apply_look(0.0, -50.0);
        assert!(camera.pitch() > 0.0);
        assert!(camera.front().y > 0.0);
    }

    #[test]
    fn yaw_flips_at_boundary() {
        let mut camera = CameraController::default();
        camera.apply_look(1799.0, 0.0); // yaw = 179.9
        camera.apply_look(2.0, 0.0); // crosses +180
        assert_eq!(camera.yaw(), -180.0);
        camera.apply_look(-2.0, 0.0);
        assert_eq!(camera.yaw(), 180.0);
    }

    #[test]
    fn pitch_clamps_regardless_of_magnitude() {
        let mut camera = CameraController::default();
        camera.apply_look(0.0, -100_000.0);
        assert_eq!(camera.pitch(), 89.0);
        camera.apply_look(0.0, 100_000.0);
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn front_stays_unit_after_look_and_move() {
        let mut camera = CameraController::default();
        camera.apply_look(123.0, -45.0);
        camera.advance(MoveDirection::Forward, 2.0);
        camera.apply_look(-7.0, 3.0);
        assert!((camera.front().length() - 1.0).abs() < EPS);
        assert!((camera.up().length() - 1.0).abs() < EPS);
        assert!(camera.front().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut camera = CameraController::default();
        camera.apply_look(30.0, -10.0);
        let (yaw, pitch) = (camera.yaw(), camera.pitch());
        camera.apply_look(0.0, 0.0);
        assert_eq!(camera.yaw(), yaw);
        assert_eq!(camera.pitch(), pitch);
    }

    #[test]
    fn view_matrix_maps_position_to_origin() {
        let mut camera = CameraController::default();
        camera.apply_look(33.0, -12.0);
        camera.advance(MoveDirection::StrafeRight, 1.0);
        let view_space = camera.view_matrix().transform_point3(camera.position());
        assert!(view_space.length() < EPS);
    }

    #[test]
    fn forward_and_back_cancel() {
        let mut camera = CameraController::default();
        let start = camera.position();
        camera.advance(MoveDirection::Forward, 1.0);
        camera.advance(MoveDirection::Backward, 1.0);
        assert!((camera.position() - start).length() < EPS);
    }

    #[test]
    fn strafe_is_perpendicular_to_front() {
        let mut camera = CameraController::default();
        camera.apply_look(40.0, 0.0);
        let start = camera.position();
        camera.advance(MoveDirection::StrafeRight, 1.0);
        let travel = camera.position() - start;
        assert!(travel.dot(camera.front()).abs() < EPS);
        assert!(travel.length() > 0.0);
    }

    #[test]
    fn sprint_multiplier_scales_step() {
        let mut walk = CameraController::default();
        let mut sprint = CameraController::default();
        walk.advance(MoveDirection::Forward, 1.0);
        sprint.advance(MoveDirection::Forward, 2.0);
        let base = Vec3::new(0.0, 0.0, 3.0);
        let walked = (walk.position() - base).length();
        let sprinted = (sprint.position() - base).length();
        assert!((sprinted - 2.0 * walked).abs() < EPS);
    }
}
