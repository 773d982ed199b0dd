use serde::{Deserialize, Serialize};

/// Window, projection, and frame-cap parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportOptions {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    pub near_clip: f32,
    /// Frame-rate cap (0 = unlimited).
    pub target_fps: u32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 1000,
            fov_degrees: 70.0,
            near_clip: 1.0,
            target_fps: 60,
        }
    }
}
