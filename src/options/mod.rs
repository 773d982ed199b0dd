//! Centralized runtime configuration with TOML preset support.
//!
//! All tunables (camera feel, viewport/projection constants,
//! keybindings) are consolidated here. Options serialize to/from TOML;
//! every section uses `#[serde(default)]` so a partial preset file
//! (e.g. only overriding `[camera]`) works correctly.

mod camera;
mod keybindings;
mod viewport;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::error::SimviewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera feel: sensitivity and movement speed.
    pub camera: CameraOptions,
    /// Window, projection, and frame-cap parameters.
    pub viewport: ViewportOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SimviewError> {
        let content = std::fs::read_to_string(path).map_err(SimviewError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| SimviewError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SimviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SimviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SimviewError::Io)?;
        }
        std::fs::write(path, content).map_err(SimviewError::Io)
    }
}
