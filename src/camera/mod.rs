//! Camera system: angle math, the free-look controller, and the
//! window-size-coupled projection.

/// Pure yaw/pitch wrap, clamp, and direction helpers.
pub mod angles;
/// Free-look camera controller (position, orientation, movement).
pub mod controller;
/// Asymmetric-frustum projection manager.
pub mod projection;

pub use controller::{CameraController, MoveDirection};
pub use projection::ViewportProjection;
