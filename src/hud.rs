//! Diagnostics panel state.
//!
//! The overlay collaborator only reads and writes the plain values
//! held here: live readouts (frame rate, camera position, raw pointer
//! offset) and tunable knobs. The thread-count hint and the
//! run-simulation flag are exposed for the panel but unused by the
//! core logic.

use glam::{Vec2, Vec3};

/// Allowed range for the updates-per-frame multiplier.
pub const UPDATES_PER_FRAME_RANGE: (i32, i32) = (1, 50);
/// Allowed range for the worker-thread hint.
pub const WORKER_THREADS_RANGE: (i32, i32) = (1, 20);

/// Tunable knobs plus live readouts for the diagnostics overlay.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    updates_per_frame: i32,
    worker_threads: i32,
    run_simulation: bool,
    draw_plane: bool,
    frame_rate: f32,
    camera_position: Vec3,
    pointer_offset: Vec2,
}

impl Default for ControlPanel {
    fn default() -> Self {
        let parallelism = std::thread::available_parallelism()
            .map_or(1, |n| n.get() as i32);
        Self {
            updates_per_frame: 1,
            worker_threads: parallelism
                .clamp(WORKER_THREADS_RANGE.0, WORKER_THREADS_RANGE.1),
            run_simulation: true,
            draw_plane: true,
            frame_rate: 0.0,
            camera_position: Vec3::ZERO,
            pointer_offset: Vec2::ZERO,
        }
    }
}

impl ControlPanel {
    /// Displayed updates-per-frame multiplier.
    #[must_use]
    pub fn updates_per_frame(&self) -> i32 {
        self.updates_per_frame
    }

    /// Set the updates-per-frame multiplier, clamped to `1..=50`.
    pub fn set_updates_per_frame(&mut self, value: i32) {
        self.updates_per_frame =
            value.clamp(UPDATES_PER_FRAME_RANGE.0, UPDATES_PER_FRAME_RANGE.1);
    }

    /// Worker-thread hint (display only, unused by the core).
    #[must_use]
    pub fn worker_threads(&self) -> i32 {
        self.worker_threads
    }

    /// Set the worker-thread hint, clamped to `1..=20`.
    pub fn set_worker_threads(&mut self, value: i32) {
        self.worker_threads =
            value.clamp(WORKER_THREADS_RANGE.0, WORKER_THREADS_RANGE.1);
    }

    /// Run-simulation flag (display only, unused by the core).
    #[must_use]
    pub fn run_simulation(&self) -> bool {
        self.run_simulation
    }

    /// Set the run-simulation flag.
    pub fn set_run_simulation(&mut self, value: bool) {
        self.run_simulation = value;
    }

    /// Whether the ground-plane grid is drawn.
    #[must_use]
    pub fn draw_plane(&self) -> bool {
        self.draw_plane
    }

    /// Show or hide the ground-plane grid.
    pub fn set_draw_plane(&mut self, value: bool) {
        self.draw_plane = value;
    }

    /// Flip the ground-plane grid flag.
    pub fn toggle_draw_plane(&mut self) {
        self.draw_plane = !self.draw_plane;
    }

    /// Measured frames per second.
    #[must_use]
    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    /// Record the measured frame rate.
    pub fn set_frame_rate(&mut self, fps: f32) {
        self.frame_rate = fps;
    }

    /// Derived updates-per-second readout. No separate update step
    /// exists; this is `fps * updates_per_frame`, display only.
    #[must_use]
    pub fn updates_per_second(&self) -> f32 {
        self.frame_rate * self.updates_per_frame as f32
    }

    /// Camera position readout.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Record the camera position for display.
    pub fn set_camera_position(&mut self, position: Vec3) {
        self.camera_position = position;
    }

    /// Raw pointer offset from the window midpoint.
    #[must_use]
    pub fn pointer_offset(&self) -> Vec2 {
        self.pointer_offset
    }

    /// Record the raw pointer offset for display.
    pub fn set_pointer_offset(&mut self, offset: Vec2) {
        self.pointer_offset = offset;
    }

    /// One-line summary of the current readouts, suitable for a window
    /// title or a log line.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "FPS {:.2} | UPS {:.2} | pos {}x {}y {}z | mouse {:.0}x {:.0}y",
            self.frame_rate,
            self.updates_per_second(),
            format_grouped(self.camera_position.x),
            format_grouped(self.camera_position.y),
            format_grouped(self.camera_position.z),
            self.pointer_offset.x,
            self.pointer_offset.y,
        )
    }
}

/// Format a value with two decimals and thousands separators:
/// `1234567.891` → `"1,234,567.89"`.
#[must_use]
pub fn format_grouped(value: f32) -> String {
    let raw = format!("{value:.2}");
    let (sign, digits) = raw
        .strip_prefix('-')
        .map_or(("", raw.as_str()), |rest| ("-", rest));
    let (int_part, frac) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}.{frac}")
}
