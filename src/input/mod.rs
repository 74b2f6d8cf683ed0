//! Input handling: platform-agnostic event types, key actions, and the
//! input-surface abstraction the controller listens on.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Input surface trait and listener registry.
pub mod surface;

pub use event::{InputEvent, MouseButton, Touches};
pub use keyboard::KeyAction;
pub use surface::{InputSurface, ListenerKind, Listeners};
