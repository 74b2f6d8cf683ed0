// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Damped, plane-constrained camera controls for image-wall galleries.
//!
//! The controller keeps a perspective camera hovering over a target plane
//! (the "wall"). Users dolly toward and away from the wall along an aimed
//! track and pan parallel to it; both motions are exponentially damped and
//! advance one step per [`update`](camera::GalleryControls::update) call.
//!
//! # Key entry points
//!
//! - [`camera::GalleryControls`] - the controller
//! - [`input::InputEvent`] - platform-agnostic pointer, wheel, touch and key
//!   events fed to the controller
//! - [`options::ControlOptions`] - dolly range, damping and bindings,
//!   loadable from TOML presets
//! - [`session::GallerySession`] - click-to-focus gallery behaviour layered
//!   on top of the controller
//!
//! # Example
//!
//! ```ignore
//! let options = ControlOptions::with_target(Plane::new(Vec3::Z, 0.0))
//!     .with_distance_range(0.5, 5.0);
//! let mut controls = GalleryControls::new(camera, surface, options)?;
//! controls.zoom_to(&item);
//! loop {
//!     controls.update();
//!     render(controls.camera());
//! }
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod session;
pub mod util;
