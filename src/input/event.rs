//! Platform-agnostic input events.
//!
//! The window shell translates winit events into these so the mapper
//! and everything behind it can be exercised without a live window.

/// Raw events produced by the window/event source.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ControlLeft"`, `"Escape"`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    KeyPressed {
        /// Physical key string.
        key: String,
    },
    /// A key was released.
    KeyReleased {
        /// Physical key string.
        key: String,
    },
    /// Pointer moved to an absolute window position in physical pixels.
    MouseMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// The window was resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// The user asked to close the window.
    CloseRequested,
}

impl InputEvent {
    /// Shorthand for a key-press event.
    #[must_use]
    pub fn key_pressed(key: &str) -> Self {
        Self::KeyPressed { key: key.to_owned() }
    }

    /// Shorthand for a key-release event.
    #[must_use]
    pub fn key_released(key: &str) -> Self {
        Self::KeyReleased { key: key.to_owned() }
    }
}
