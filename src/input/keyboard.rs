use serde::{Deserialize, Serialize};

/// Discrete actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay
/// readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_cursor_grab = "KeyE"
/// toggle_grid_plane = "KeyP"
/// ```
///
/// Held movement keys are not listed here; they are polled state, not
/// discrete actions, and stay hard-wired in the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Flip the cursor between grabbed (mouselook) and free.
    ToggleCursorGrab,
    /// Show or hide the ground-plane grid.
    ToggleGridPlane,
    /// Terminate the frame loop.
    Quit,
}
