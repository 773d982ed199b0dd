//! Rendering collaborator seam.
//!
//! The core hands a view matrix, a projection matrix, and the
//! draw-plane flag to a [`RenderBackend`] once per tick; how primitives
//! reach the screen is the backend's business. [`grid::GridRenderer`]
//! is the wgpu-backed implementation used by the desktop shell.

/// wgpu device/surface ownership.
pub mod context;
/// Ground-plane grid renderer.
pub mod grid;

use glam::Mat4;

pub use context::{RenderContext, RenderContextError};
pub use grid::GridRenderer;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// World → view transform from the camera.
    pub view: Mat4,
    /// View → clip transform from the viewport projection.
    pub projection: Mat4,
    /// Whether to draw the ground-plane grid.
    pub draw_plane: bool,
}

/// Per-frame drawing collaborator consumed by the frame loop.
pub trait RenderBackend {
    /// Reconfigure for a new surface size. Zero dimensions are ignored.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the frame, optionally draw the grid, and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain is lost or
    /// outdated; the caller reconfigures and retries next frame.
    fn render(&mut self, frame: &FrameParams) -> Result<(), wgpu::SurfaceError>;
}
