//! Plane-constrained camera system.
//!
//! Provides the camera model, the damped gallery controller that dollies
//! and pans it relative to a target plane, and the input state machine
//! that drives the controller.

/// Damped dolly/pan controller constrained to a target plane.
pub mod controller;
/// Core camera struct and projection math.
pub mod core;
/// Lifecycle notifications (start/end/change).
pub mod events;
/// Plane, ray and bounding-box primitives.
pub mod geometry;
/// Input-event state machine for the controller.
pub mod input;

#[cfg(test)]
pub(crate) mod testing;

pub use self::core::{Camera, Projection};
pub use controller::GalleryControls;
pub use events::{ControlEvent, SubscriptionId};
pub use input::ControlState;
