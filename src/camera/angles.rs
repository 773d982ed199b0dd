//! Pure yaw/pitch angle helpers.
//!
//! Angles are in degrees. Yaw wraps with a hard flip at the ±180
//! boundary: crossing +180 lands at -180 and vice versa, not a modulo
//! reduction. Pitch saturates at ±89 so the forward vector never lines
//! up with the world up axis.

use glam::Vec3;

/// Yaw flip boundary in degrees.
pub const YAW_LIMIT: f32 = 180.0;
/// Pitch saturation bound in degrees.
pub const PITCH_LIMIT: f32 = 89.0;

/// Wrap a yaw angle into `[-180, 180]`, flipping to the opposite
/// boundary when it crosses either end.
#[must_use]
pub fn wrap_yaw(yaw: f32) -> f32 {
    if yaw > YAW_LIMIT {
        -YAW_LIMIT
    } else if yaw < -YAW_LIMIT {
        YAW_LIMIT
    } else {
        yaw
    }
}

/// Clamp a pitch angle into `[-89, 89]` (saturating, never wrapping).
#[must_use]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Unit forward vector for the given yaw/pitch in degrees.
///
/// Yaw 0 looks down +X; positive yaw turns toward +Z, positive pitch
/// tilts toward +Y.
#[must_use]
pub fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw_sin, yaw_cos) = yaw.to_radians().sin_cos();
    let (pitch_sin, pitch_cos) = pitch.to_radians().sin_cos();
    Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
}
