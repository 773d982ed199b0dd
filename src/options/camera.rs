use serde::{Deserialize, Serialize};

/// Camera feel parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Look sensitivity in degrees per pixel of pointer travel.
    pub sensitivity: f32,
    /// Movement step in world units per frame.
    pub move_speed: f32,
    /// Speed multiplier while the sprint modifier is held.
    pub sprint_multiplier: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.1,
            move_speed: 0.05,
            sprint_multiplier: 2.0,
        }
    }
}
