//! Shared utilities.

/// Frame-rate cap and FPS measurement.
pub mod frame_timing;
