//! Camera model: pose, projection parameters and picking rays.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::geometry::Ray;

/// Camera projection kind.
///
/// Only perspective cameras support dolly; anything else disables zoom at
/// the first dolly attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Perspective projection driven by `fovy`.
    #[default]
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

/// A camera defined by position, orientation and projection parameters.
///
/// The camera looks down its local `-Z` axis with `+Y` up, matching
/// `Mat4::look_at_rh`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// World-space rotation of the camera.
    pub orientation: Quat,
    /// Preferred up direction used by [`look_at`](Self::look_at).
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Optical zoom factor applied on top of `fovy`.
    pub zoom: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Projection kind.
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::Z,
            orientation: Quat::IDENTITY,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 75.0,
            zoom: 1.0,
            znear: 0.1,
            zfar: 1000.0,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    /// Perspective camera at `position` looking down `-Z`.
    pub fn perspective(fovy: f32, aspect: f32, position: Vec3) -> Self {
        Self {
            position,
            fovy,
            aspect,
            ..Self::default()
        }
    }

    /// Whether the projection is perspective.
    #[inline]
    pub fn is_perspective(&self) -> bool {
        self.projection == Projection::Perspective
    }

    /// Unit view direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera-space right axis in world space (first matrix column).
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Camera-space up axis in world space (second matrix column).
    #[inline]
    pub fn up_axis(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Rotate the camera so it faces `target`, keeping `up` as close to
    /// vertical as possible. Does nothing when `target` is the eye.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        let mut right = forward.cross(self.up);
        if right.length_squared() < 1e-12 {
            // Looking along `up`: nudge the reference axis.
            right = forward.cross(self.up + Vec3::new(0.0, 0.0, 1e-4));
            if right.length_squared() < 1e-12 {
                right = forward.cross(Vec3::X);
            }
        }
        let right = right.normalize();
        let up = right.cross(forward);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
            .normalize();
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
            .inverse()
    }

    /// Projection matrix (`[0,1]` depth range).
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh(
                self.effective_fovy().to_radians(),
                self.aspect,
                self.znear,
                self.zfar,
            ),
            Projection::Orthographic => {
                let half_h = 1.0 / self.zoom.max(f32::EPSILON);
                let half_w = half_h * self.aspect;
                Mat4::orthographic_rh(
                    -half_w, half_w, -half_h, half_h, self.znear, self.zfar,
                )
            }
        }
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Vertical field of view after applying `zoom`, in degrees.
    pub fn effective_fovy(&self) -> f32 {
        let half = (self.fovy.to_radians() * 0.5).tan() / self.zoom.max(f32::EPSILON);
        (2.0 * half.atan()).to_degrees()
    }

    /// Ray from the eye through a point in normalized device coordinates
    /// (`x`, `y` in `[-1, 1]`, `+y` up).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        match self.projection {
            Projection::Perspective => {
                let tan_half = (self.effective_fovy().to_radians() * 0.5).tan();
                let local = Vec3::new(
                    ndc.x * tan_half * self.aspect,
                    ndc.y * tan_half,
                    -1.0,
                );
                Ray::new(self.position, self.orientation * local)
            }
            Projection::Orthographic => {
                let half_h = 1.0 / self.zoom.max(f32::EPSILON);
                let offset = self.right() * (ndc.x * half_h * self.aspect)
                    + self.up_axis() * (ndc.y * half_h);
                Ray::new(self.position + offset, self.forward())
            }
        }
    }
}
