//! Test doubles shared by the camera tests.

use glam::{Vec2, Vec3};

use super::controller::GalleryControls;
use super::core::Camera;
use super::geometry::Plane;
use crate::input::InputSurface;
use crate::options::ControlOptions;

/// Surface that records focus changes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TestSurface {
    pub(crate) size: Vec2,
    pub(crate) focused: bool,
    pub(crate) focusable: bool,
}

impl TestSurface {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            focused: false,
            focusable: false,
        }
    }
}

impl InputSurface for TestSurface {
    fn client_size(&self) -> Vec2 {
        self.size
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn ensure_focusable(&mut self) {
        self.focusable = true;
    }
}

/// Wall on `z = 0`, camera at `(0, 0, 10)`, dolly range `[0.5, 5]`.
pub(crate) fn wall_options() -> ControlOptions {
    ControlOptions::with_target(Plane::new(Vec3::Z, 0.0))
        .with_distance_range(0.5, 5.0)
}

pub(crate) fn wall_camera() -> Camera {
    Camera::perspective(75.0, 1.5, Vec3::new(0.0, 0.0, 10.0))
}

pub(crate) fn wall_controls() -> GalleryControls<TestSurface> {
    GalleryControls::new(
        wall_camera(),
        TestSurface::new(800.0, 600.0),
        wall_options(),
    )
    .unwrap()
}

pub(crate) fn approx(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).length() <= tolerance
}
