//! Input handling: platform-agnostic events, key actions, and the
//! mapper that drives the camera and viewport.

/// Platform-agnostic input events.
pub mod event;
/// Actions that can be bound to keys.
pub mod keyboard;
/// Event-to-state mapping and the cursor-grab state machine.
pub mod mapper;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use mapper::{EventResponse, InputMapper};
