//! Translates raw window events into camera and viewport mutations.
//!
//! The mapper owns the cursor-grab state machine. While grabbed, every
//! pointer sample is measured against the window midpoint and the
//! shell is asked to warp the pointer back there, so deltas never
//! accumulate against a drifting absolute position. A sample that
//! reports exactly the midpoint was produced by a previous re-center
//! and must not move the camera; that breaks the feedback loop
//! between "move camera" and "re-center pointer".

use glam::Vec2;

use crate::camera::{CameraController, MoveDirection, ViewportProjection};
use crate::hud::ControlPanel;
use crate::input::event::InputEvent;
use crate::input::keyboard::KeyAction;
use crate::options::KeybindingOptions;

const KEY_FORWARD: &str = "KeyW";
const KEY_BACKWARD: &str = "KeyS";
const KEY_STRAFE_LEFT: &str = "KeyA";
const KEY_STRAFE_RIGHT: &str = "KeyD";
const KEY_SPRINT: &str = "ControlLeft";

/// What the windowing shell must do after an event was mapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Warp the pointer back to the window midpoint.
    pub recenter_cursor: bool,
    /// The grab state flipped; the shell should update cursor
    /// visibility.
    pub grab_changed: bool,
    /// Terminate the frame loop.
    pub exit: bool,
}

/// Held movement keys, applied once per tick.
#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    forward: bool,
    backward: bool,
    strafe_left: bool,
    strafe_right: bool,
    sprint: bool,
}

/// Raw-event to camera/viewport mapper and cursor-grab state machine.
#[derive(Debug)]
pub struct InputMapper {
    cursor_grabbed: bool,
    center: Vec2,
    pointer_offset: Vec2,
    held: HeldKeys,
    bindings: KeybindingOptions,
    sprint_multiplier: f32,
}

impl InputMapper {
    /// Create a mapper for a window of the given size. The cursor
    /// starts grabbed.
    #[must_use]
    pub fn new(
        width: u32,
        height: u32,
        bindings: KeybindingOptions,
        sprint_multiplier: f32,
    ) -> Self {
        Self {
            cursor_grabbed: true,
            center: midpoint(width, height),
            pointer_offset: Vec2::ZERO,
            held: HeldKeys::default(),
            bindings,
            sprint_multiplier,
        }
    }

    /// Whether mouselook is active.
    #[must_use]
    pub fn cursor_grabbed(&self) -> bool {
        self.cursor_grabbed
    }

    /// Midpoint anchor the pointer is re-centered to.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Last raw pointer offset from the midpoint (HUD readout).
    #[must_use]
    pub fn pointer_offset(&self) -> Vec2 {
        self.pointer_offset
    }

    /// Map one event onto the camera, viewport, or panel.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        camera: &mut CameraController,
        viewport: &mut ViewportProjection,
        panel: &mut ControlPanel,
    ) -> EventResponse {
        let mut response = EventResponse::default();
        match event {
            InputEvent::KeyPressed { key } => {
                if self.set_held(key, true) {
                    return response;
                }
                match self.bindings.lookup(key) {
                    Some(KeyAction::ToggleCursorGrab) => {
                        self.cursor_grabbed = !self.cursor_grabbed;
                        response.grab_changed = true;
                        // Entering grab re-anchors the pointer so the
                        // first delta is not a jump from wherever it
                        // last was.
                        response.recenter_cursor = self.cursor_grabbed;
                    }
                    Some(KeyAction::ToggleGridPlane) => {
                        panel.toggle_draw_plane();
                    }
                    Some(KeyAction::Quit) => response.exit = true,
                    None => {}
                }
            }
            InputEvent::KeyReleased { key } => {
                let _ = self.set_held(key, false);
            }
            InputEvent::MouseMoved { x, y } => {
                let position = Vec2::new(*x, *y);
                self.pointer_offset = position - self.center;
                if self.cursor_grabbed && position != self.center {
                    let delta = position - self.center;
                    camera.apply_look(delta.x, delta.y);
                    response.recenter_cursor = true;
                }
            }
            InputEvent::Resized { width, height } => {
                viewport.on_resize(*width, *height);
                if *width > 0 && *height > 0 {
                    self.center = midpoint(*width, *height);
                }
            }
            InputEvent::CloseRequested => response.exit = true,
        }
        response
    }

    /// Apply the held movement keys to the camera. Called once per
    /// tick, independent of grab state.
    pub fn apply_movement(&self, camera: &mut CameraController) {
        let multiplier = if self.held.sprint {
            self.sprint_multiplier
        } else {
            1.0
        };
        if self.held.forward {
            camera.advance(MoveDirection::Forward, multiplier);
        }
        if self.held.backward {
            camera.advance(MoveDirection::Backward, multiplier);
        }
        if self.held.strafe_left {
            camera.advance(MoveDirection::StrafeLeft, multiplier);
        }
        if self.held.strafe_right {
            camera.advance(MoveDirection::StrafeRight, multiplier);
        }
    }

    /// Update a held-key flag. Returns `true` when the key was a
    /// movement or modifier key.
    fn set_held(&mut self, key: &str, pressed: bool) -> bool {
        match key {
            KEY_FORWARD => self.held.forward = pressed,
            KEY_BACKWARD => self.held.backward = pressed,
            KEY_STRAFE_LEFT => self.held.strafe_left = pressed,
            KEY_STRAFE_RIGHT => self.held.strafe_right = pressed,
            KEY_SPRINT => self.held.sprint = pressed,
            _ => return false,
        }
        true
    }
}

/// Integer window midpoint, the re-centering anchor.
fn midpoint(width: u32, height: u32) -> Vec2 {
    Vec2::new((width / 2) as f32, (height / 2) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> (InputMapper, CameraController, ViewportProjection, ControlPanel)
    {
        (
            InputMapper::new(1000, 1000, KeybindingOptions::default(), 2.0),
            CameraController::default(),
            ViewportProjection::new(1000, 1000, 70.0, 1.0),
            ControlPanel::default(),
        )
    }

    #[test]
    fn starts_grabbed_and_toggles() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        assert!(mapper.cursor_grabbed());

        let release = mapper.handle_event(
            &InputEvent::key_pressed("KeyE"),
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert!(!mapper.cursor_grabbed());
        assert!(release.grab_changed);
        assert!(!release.recenter_cursor);

        let regrab = mapper.handle_event(
            &InputEvent::key_pressed("KeyE"),
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert!(mapper.cursor_grabbed());
        assert!(regrab.grab_changed);
        assert!(regrab.recenter_cursor);
    }

    #[test]
    fn grabbed_motion_rotates_and_requests_recenter() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        let response = mapper.handle_event(
            &InputEvent::MouseMoved { x: 600.0, y: 500.0 },
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert!(response.recenter_cursor);
        assert!((camera.yaw() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn midpoint_motion_is_a_no_op() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        for _ in 0..2 {
            let response = mapper.handle_event(
                &InputEvent::MouseMoved { x: 500.0, y: 500.0 },
                &mut camera,
                &mut viewport,
                &mut panel,
            );
            assert!(!response.recenter_cursor);
        }
        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn free_motion_only_records_offset() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        let _ = mapper.handle_event(
            &InputEvent::key_pressed("KeyE"),
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        let response = mapper.handle_event(
            &InputEvent::MouseMoved { x: 620.0, y: 470.0 },
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert!(!response.recenter_cursor);
        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(mapper.pointer_offset(), Vec2::new(120.0, -30.0));
    }

    #[test]
    fn resize_forwards_and_moves_anchor() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        let _ = mapper.handle_event(
            &InputEvent::Resized { width: 2000, height: 1000 },
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert_eq!(mapper.center(), Vec2::new(1000.0, 500.0));
        assert!((viewport.half_extent_right() - 2.0).abs() < 1e-4);

        // A sample at the new midpoint is still a no-op.
        let _ = mapper.handle_event(
            &InputEvent::MouseMoved { x: 1000.0, y: 500.0 },
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert_eq!(camera.yaw(), 0.0);
    }

    #[test]
    fn degenerate_resize_keeps_anchor() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        let anchor = mapper.center();
        let _ = mapper.handle_event(
            &InputEvent::Resized { width: 800, height: 0 },
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert_eq!(mapper.center(), anchor);
    }

    #[test]
    fn close_requests_exit() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        let response = mapper.handle_event(
            &InputEvent::CloseRequested,
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert!(response.exit);
    }

    #[test]
    fn held_keys_move_every_tick_until_released() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        let _ = mapper.handle_event(
            &InputEvent::key_pressed(KEY_FORWARD),
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        let start = camera.position();
        mapper.apply_movement(&mut camera);
        mapper.apply_movement(&mut camera);
        let travelled = (camera.position() - start).length();
        assert!((travelled - 0.1).abs() < 1e-4);

        let _ = mapper.handle_event(
            &InputEvent::key_released(KEY_FORWARD),
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        let parked = camera.position();
        mapper.apply_movement(&mut camera);
        assert_eq!(camera.position(), parked);
    }

    #[test]
    fn sprint_modifier_doubles_step() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        for key in [KEY_FORWARD, KEY_SPRINT] {
            let _ = mapper.handle_event(
                &InputEvent::key_pressed(key),
                &mut camera,
                &mut viewport,
                &mut panel,
            );
        }
        let start = camera.position();
        mapper.apply_movement(&mut camera);
        assert!(((camera.position() - start).length() - 0.1).abs() < 1e-4);
    }

    #[test]
    fn plane_toggle_reaches_panel() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        let _ = mapper.handle_event(
            &InputEvent::key_pressed("KeyP"),
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        assert!(!panel.draw_plane());
    }

    #[test]
    fn movement_applies_regardless_of_grab_state() {
        let (mut mapper, mut camera, mut viewport, mut panel) = rig();
        let _ = mapper.handle_event(
            &InputEvent::key_pressed("KeyE"), // release the cursor
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        let _ = mapper.handle_event(
            &InputEvent::key_pressed(KEY_FORWARD),
            &mut camera,
            &mut viewport,
            &mut panel,
        );
        let start = camera.position();
        mapper.apply_movement(&mut camera);
        assert!((camera.position() - start).length() > 0.0);
    }
}
