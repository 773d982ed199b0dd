//! Per-tick driver tying input, camera, viewport, and timing together.
//!
//! The frame loop owns all mutable core state; the windowing shell
//! feeds it events and a [`RenderBackend`](crate::render::RenderBackend)
//! consumes the [`FrameParams`] it produces. Nothing here touches a
//! window or a GPU, so the whole tick cycle is testable headless.

use crate::camera::{CameraController, ViewportProjection};
use crate::hud::ControlPanel;
use crate::input::{EventResponse, InputEvent, InputMapper};
use crate::options::Options;
use crate::render::FrameParams;
use crate::util::frame_timing::FrameTiming;

/// Owns the camera/viewport core and drives it one tick at a time.
#[derive(Debug)]
pub struct FrameLoop {
    camera: CameraController,
    viewport: ViewportProjection,
    mapper: InputMapper,
    timing: FrameTiming,
    panel: ControlPanel,
    exit_requested: bool,
}

impl FrameLoop {
    /// Build the core from options. The viewport starts at the
    /// configured window size; the shell should feed a `Resized` event
    /// if the actual surface differs (DPI scaling).
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let camera = CameraController::new(
            options.camera.sensitivity,
            options.camera.move_speed,
        );
        let viewport = ViewportProjection::new(
            options.viewport.window_width,
            options.viewport.window_height,
            options.viewport.fov_degrees,
            options.viewport.near_clip,
        );
        let mapper = InputMapper::new(
            options.viewport.window_width,
            options.viewport.window_height,
            options.keybindings.clone(),
            options.camera.sprint_multiplier,
        );
        Self {
            camera,
            viewport,
            mapper,
            timing: FrameTiming::new(options.viewport.target_fps),
            panel: ControlPanel::default(),
            exit_requested: false,
        }
    }

    /// Route one raw event through the input mapper.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        let response = self.mapper.handle_event(
            event,
            &mut self.camera,
            &mut self.viewport,
            &mut self.panel,
        );
        if response.exit {
            self.exit_requested = true;
        }
        response
    }

    /// Advance one tick: apply held movement keys and refresh the
    /// diagnostics readouts from the completed frame.
    pub fn advance(&mut self) {
        self.mapper.apply_movement(&mut self.camera);
        self.timing.end_frame();
        self.panel.set_frame_rate(self.timing.fps());
        self.panel.set_camera_position(self.camera.position());
        self.panel.set_pointer_offset(self.mapper.pointer_offset());
    }

    /// Everything the rendering collaborator needs for this frame.
    #[must_use]
    pub fn frame(&self) -> FrameParams {
        FrameParams {
            view: self.camera.view_matrix(),
            projection: self.viewport.projection_matrix(),
            draw_plane: self.panel.draw_plane(),
        }
    }

    /// Whether the frame-rate cap allows rendering now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.timing.should_render()
    }

    /// Set once a close signal arrives; the only exit path.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Whether mouselook is active.
    #[must_use]
    pub fn cursor_grabbed(&self) -> bool {
        self.mapper.cursor_grabbed()
    }

    /// Midpoint anchor the shell warps the pointer to.
    #[must_use]
    pub fn cursor_anchor(&self) -> (f32, f32) {
        let center = self.mapper.center();
        (center.x, center.y)
    }

    /// Read-only camera access.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Read-only viewport access.
    #[must_use]
    pub fn viewport(&self) -> &ViewportProjection {
        &self.viewport
    }

    /// Read-only diagnostics panel access.
    #[must_use]
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// Mutable diagnostics panel access for the overlay collaborator.
    pub fn panel_mut(&mut self) -> &mut ControlPanel {
        &mut self.panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_loop() -> FrameLoop {
        FrameLoop::new(&Options::default())
    }

    #[test]
    fn close_event_requests_exit() {
        let mut frame_loop = frame_loop();
        assert!(!frame_loop.exit_requested());
        let _ = frame_loop.handle_event(&InputEvent::CloseRequested);
        assert!(frame_loop.exit_requested());
    }

    #[test]
    fn frame_params_follow_panel_flag() {
        let mut frame_loop = frame_loop();
        assert!(frame_loop.frame().draw_plane);
        frame_loop.panel_mut().set_draw_plane(false);
        assert!(!frame_loop.frame().draw_plane);
    }

    #[test]
    fn held_movement_advances_camera_each_tick() {
        let mut frame_loop = frame_loop();
        let _ = frame_loop.handle_event(&InputEvent::key_pressed("KeyW"));
        let start = frame_loop.camera().position();
        frame_loop.advance();
        frame_loop.advance();
        let travelled = (frame_loop.camera().position() - start).length();
        assert!((travelled - 0.1).abs() < 1e-4);
    }

    #[test]
    fn mouse_motion_feeds_view_matrix_and_readouts() {
        let mut frame_loop = frame_loop();
        let before = frame_loop.frame().view;
        let _ = frame_loop
            .handle_event(&InputEvent::MouseMoved { x: 600.0, y: 500.0 });
        frame_loop.advance();
        assert_ne!(frame_loop.frame().view, before);
        assert_eq!(frame_loop.panel().pointer_offset().x, 100.0);
    }

    #[test]
    fn resize_updates_projection_and_anchor() {
        let mut frame_loop = frame_loop();
        let before = frame_loop.frame().projection;
        let _ = frame_loop
            .handle_event(&InputEvent::Resized { width: 2000, height: 1000 });
        assert_ne!(frame_loop.frame().projection, before);
        assert_eq!(frame_loop.cursor_anchor(), (1000.0, 500.0));
    }

    #[test]
    fn advance_refreshes_diagnostics() {
        let mut frame_loop = frame_loop();
        std::thread::sleep(std::time::Duration::from_millis(2));
        frame_loop.advance();
        assert!(frame_loop.panel().frame_rate() > 0.0);
        assert_eq!(
            frame_loop.panel().camera_position(),
            frame_loop.camera().position()
        );
    }
}
