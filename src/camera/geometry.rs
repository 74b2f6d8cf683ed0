//! Plane, ray and box primitives used by the controller.
//!
//! The target plane follows the `n · p + d = 0` convention: `normal` is a
//! unit vector and `constant` is the signed distance from the origin.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Below this, a ray is treated as parallel to a plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub constant: f32,
}

impl Plane {
    /// Create a plane from a normal and constant, normalizing both so the
    /// normal has unit length.
    ///
    /// A zero normal is kept as-is and will fail
    /// [`is_well_formed`](Self::is_well_formed).
    pub fn new(normal: Vec3, constant: f32) -> Self {
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                constant: constant / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                constant,
            }
        }
    }

    /// Plane through `point` with the given normal.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            constant: -point.dot(normal),
        }
    }

    /// Whether the plane has a finite unit normal and a finite constant.
    pub fn is_well_formed(&self) -> bool {
        self.normal.is_finite()
            && self.constant.is_finite()
            && self.normal.is_normalized()
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind).
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }

    /// Orthogonal projection of `point` onto the plane.
    #[inline]
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.distance_to_point(point)
    }

    /// Two unit vectors spanning the plane, `(u, v)`, with `u × v = normal`.
    ///
    /// For the `z = 0` plane this yields the world X and Y axes, so
    /// plane-local coordinates coincide with world `(x, y)`.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let reference = if self.normal.y.abs() > 0.999 {
            Vec3::NEG_Z
        } else {
            Vec3::Y
        };
        let u = reference.cross(self.normal).normalize_or_zero();
        let v = self.normal.cross(u);
        (u, v)
    }

    /// Plane-local 2D coordinates of a world point (after projection).
    pub fn to_local(&self, point: Vec3) -> Vec2 {
        let (u, v) = self.basis();
        Vec2::new(point.dot(u), point.dot(v))
    }
}

/// A half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the plane, or `None` when the ray is
    /// parallel to it or points away from it.
    pub fn distance_to_plane(&self, plane: &Plane) -> Option<f32> {
        let denominator = plane.normal.dot(self.direction);
        if denominator.abs() < PARALLEL_EPSILON {
            // Coplanar rays hit at their origin.
            return (plane.distance_to_point(self.origin) == 0.0)
                .then_some(0.0);
        }
        let t = -(self.origin.dot(plane.normal) + plane.constant) / denominator;
        (t >= 0.0).then_some(t)
    }

    /// Point where the ray meets the plane, if it does.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        self.distance_to_plane(plane).map(|t| self.at(t))
    }
}

/// Axis-aligned 3D bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box from two corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box centered at `center` with the given full extents.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Tight box around the given points, `None` if there are none.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(*first, *first), |acc, p| Self {
            min: acc.min.min(*p),
            max: acc.max.max(*p),
        }))
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extents.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Axis-aligned 2D box in plane-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Rect {
    /// Rect centered at `center` extending `half` in each direction.
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        let half = half.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Full extents.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Whether `point` lies inside or on the border.
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Anything with a computable world-space bounding box: the scene-graph
/// interface consumed by
/// [`GalleryControls::zoom_to`](crate::camera::controller::GalleryControls::zoom_to).
pub trait Bounded {
    /// World-space bounding box.
    fn world_bounds(&self) -> Aabb;
}

impl Bounded for Aabb {
    fn world_bounds(&self) -> Aabb {
        *self
    }
}

impl Bounded for Vec3 {
    fn world_bounds(&self) -> Aabb {
        Aabb::new(*self, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn plane_new_normalizes() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, 2.0), 4.0);
        assert!(approx(plane.normal, Vec3::Z));
        assert!((plane.constant - 2.0).abs() < 1e-6);
        assert!(plane.is_well_formed());
    }

    #[test]
    fn zero_normal_is_malformed() {
        assert!(!Plane::new(Vec3::ZERO, 1.0).is_well_formed());
        let nan = Plane {
            normal: Vec3::Z,
            constant: f32::NAN,
        };
        assert!(!nan.is_well_formed());
    }

    #[test]
    fn projection_lands_on_plane() {
        let plane = Plane::new(Vec3::new(1.0, 1.0, 0.0), -1.0);
        let p = plane.project_point(Vec3::new(3.0, -2.0, 5.0));
        assert!(plane.distance_to_point(p).abs() < 1e-5);
    }

    #[test]
    fn z_plane_basis_is_world_xy() {
        let plane = Plane::new(Vec3::Z, 0.0);
        let (u, v) = plane.basis();
        assert!(approx(u, Vec3::X));
        assert!(approx(v, Vec3::Y));
        assert_eq!(plane.to_local(Vec3::new(2.0, 3.0, 7.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn y_plane_basis_is_orthonormal() {
        let plane = Plane::new(Vec3::Y, 0.0);
        let (u, v) = plane.basis();
        assert!(u.is_normalized() && v.is_normalized());
        assert!(u.dot(v).abs() < 1e-6);
        assert!(approx(u.cross(v), plane.normal));
    }

    #[test]
    fn ray_hits_plane_in_front() {
        let plane = Plane::new(Vec3::Z, 0.0);
        let ray = Ray::new(Vec3::new(1.0, 2.0, 10.0), Vec3::NEG_Z);
        assert_eq!(ray.distance_to_plane(&plane), Some(10.0));
        assert!(approx(
            ray.intersect_plane(&plane).unwrap(),
            Vec3::new(1.0, 2.0, 0.0)
        ));
    }

    #[test]
    fn ray_misses_plane_behind_or_parallel() {
        let plane = Plane::new(Vec3::Z, 0.0);
        let away = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(away.intersect_plane(&plane).is_none());
        let parallel = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::X);
        assert!(parallel.intersect_plane(&plane).is_none());
    }

    #[test]
    fn aabb_from_points_and_center() {
        let bounds = Aabb::from_points(&[
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(3.0, 2.0, 0.0),
            Vec3::new(1.0, -2.0, 1.0),
        ])
        .unwrap();
        assert!(approx(bounds.center(), Vec3::new(1.0, 0.0, 0.5)));
        assert!(approx(bounds.size(), Vec3::new(4.0, 4.0, 1.0)));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn rect_contains_center() {
        let rect =
            Rect::from_center_half_extents(Vec2::new(1.0, 1.0), Vec2::ONE);
        assert!(rect.contains(Vec2::new(1.0, 1.0)));
        assert!(!rect.contains(Vec2::new(2.5, 1.0)));
        assert_eq!(rect.size(), Vec2::new(2.0, 2.0));
    }
}
