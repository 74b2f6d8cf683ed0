//! Shared utilities.

/// Frame timing and frame-rate independent damping helpers.
pub mod frame_timing;
