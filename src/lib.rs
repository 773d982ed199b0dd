//! Free-look 3D viewport harness.
//!
//! Simview renders a ground-plane line grid from a free-moving,
//! free-looking camera inside a resizable window, with a live
//! diagnostics readout. The interesting part is the camera/viewport
//! control core, which is kept behind explicit seams so it can be
//! tested without a window or a GPU:
//!
//! - [`camera::CameraController`]: yaw/pitch orientation, movement,
//!   and the view matrix
//! - [`camera::ViewportProjection`]: the asymmetric-frustum projection
//!   that tracks window size while preserving vertical field of view
//! - [`input::InputMapper`]: raw events to camera/viewport mutations,
//!   plus the cursor-grab state machine
//! - [`engine::FrameLoop`]: the per-tick driver feeding matrices and
//!   the draw-plane flag to a [`render::RenderBackend`]
//!
//! The desktop shell ([`viewer::Viewer`]) wires the core to winit and a
//! wgpu-backed grid renderer.

pub mod camera;
pub mod engine;
pub mod error;
pub mod hud;
pub mod input;
pub mod options;
pub mod render;
pub mod util;
pub mod viewer;

pub use camera::{CameraController, MoveDirection, ViewportProjection};
pub use engine::FrameLoop;
pub use error::SimviewError;
pub use hud::ControlPanel;
pub use input::{EventResponse, InputEvent, InputMapper, KeyAction};
pub use options::Options;
pub use render::{FrameParams, RenderBackend};
pub use viewer::Viewer;
