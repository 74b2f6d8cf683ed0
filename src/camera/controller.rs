//! Plane-constrained gallery camera controller.
//!
//! The controller keeps two damped quantities:
//!
//! - a **pan** offset (`pan_current` chasing `pan_target`) whose per-update
//!   delta rigidly translates the dolly track across the target plane, and
//! - a **zoom** distance (`current_target_distance` chasing
//!   `final_target_distance`) that selects the camera's position along the
//!   dolly track.
//!
//! The dolly track is the segment between `min_zoom_position` (at
//! `max_distance` from the aimed plane point) and `max_zoom_position` (at
//! `min_distance`). It is recomputed whenever the aim ray changes.
//!
//! Damping is applied per [`update`](GalleryControls::update) call, so
//! perceived speed depends on the caller's frame rate; use
//! [`update_elapsed`](GalleryControls::update_elapsed) to decouple them.

use glam::{Vec2, Vec3};
use web_time::Duration;

use super::core::Camera;
use super::events::{ControlEvent, EventListeners, SubscriptionId};
use super::geometry::{Bounded, Plane, Ray, Rect};
use super::input::ControlState;
use crate::error::ControlsError;
use crate::input::{InputSurface, ListenerKind, Listeners};
use crate::options::ControlOptions;
use crate::util::frame_timing::frame_scaled_alpha;

/// Zoom alpha is rounded to this many steps per unit so repeated runs
/// produce identical camera positions.
const ZOOM_ALPHA_ROUNDING: f32 = 100_000.0;

/// Base of the per-step zoom scale (`ZOOM_SCALE_BASE^speed`).
const ZOOM_SCALE_BASE: f32 = 0.95;

/// Damped camera controller constrained to a target plane.
///
/// Owns the camera it drives and the surface it listens on. Feed raw input
/// through [`handle_event`](Self::handle_event) and call
/// [`update`](Self::update) once per rendered frame.
pub struct GalleryControls<S: InputSurface> {
    pub(super) camera: Camera,
    pub(super) surface: S,
    pub(super) options: ControlOptions,
    pub(super) target: Plane,

    // Construction-time snapshots for `reset`.
    target0: Plane,
    position0: Vec3,
    zoom0: f32,

    pub(super) state: ControlState,
    /// Last pointer position in normalized device coordinates.
    pub(super) pointer_ndc: Vec2,
    pub(super) pan_start: Vec2,
    pub(super) dolly_start: Vec2,

    final_target_distance: f32,
    current_target_distance: f32,
    pan_target: Vec3,
    pan_current: Vec3,
    min_zoom_position: Vec3,
    max_zoom_position: Vec3,
    /// Aim direction fixed at initialization; used for the visible-area
    /// query and for pan scaling.
    cam_orientation: Vec3,
    zoom_alpha: f32,
    /// `tan(fovy / 2)`: world units per unit depth per half screen height.
    screen_world_xform: f32,

    pub(super) listeners: Listeners,
    pub(super) events: EventListeners,
    pub(super) disposed: bool,
}

impl<S: InputSurface> GalleryControls<S> {
    /// Attach a controller to `camera` and `surface`.
    ///
    /// Moves the camera onto its initial dolly position (per
    /// `options.zoom.initial_zoom`) and aims it at the target plane.
    ///
    /// # Errors
    ///
    /// - [`ControlsError::InvalidTarget`] if `options.target` is missing or
    ///   malformed.
    /// - [`ControlsError::InvalidOptions`] if a numeric option is out of
    ///   range.
    /// - [`ControlsError::OrientationUnknowable`] if the camera lies exactly
    ///   on the target plane.
    pub fn new(
        camera: Camera,
        surface: S,
        options: ControlOptions,
    ) -> Result<Self, ControlsError> {
        let target = options.target.ok_or_else(|| {
            ControlsError::InvalidTarget("no target plane configured".to_owned())
        })?;
        if !target.is_well_formed() {
            return Err(ControlsError::InvalidTarget(format!(
                "normal {} / constant {} is not a unit-normal plane",
                target.normal, target.constant
            )));
        }
        options.validate()?;

        let mut controls = Self {
            target0: target,
            position0: camera.position,
            zoom0: camera.zoom,
            camera,
            surface,
            options,
            target,
            state: ControlState::None,
            pointer_ndc: Vec2::ZERO,
            pan_start: Vec2::ZERO,
            dolly_start: Vec2::ZERO,
            final_target_distance: 0.0,
            current_target_distance: 0.0,
            pan_target: Vec3::ZERO,
            pan_current: Vec3::ZERO,
            min_zoom_position: Vec3::ZERO,
            max_zoom_position: Vec3::ZERO,
            cam_orientation: Vec3::ZERO,
            zoom_alpha: 0.0,
            screen_world_xform: 0.0,
            listeners: Listeners::default(),
            events: EventListeners::default(),
            disposed: false,
        };
        controls.init()?;
        Ok(controls)
    }

    fn init(&mut self) -> Result<(), ControlsError> {
        self.target0 = self.target;
        self.position0 = self.camera.position;
        self.zoom0 = self.camera.zoom;

        if self.target.distance_to_point(self.camera.position) == 0.0 {
            return Err(ControlsError::OrientationUnknowable);
        }

        self.state = ControlState::None;
        self.pointer_ndc = Vec2::ZERO;
        self.pan_start = Vec2::ZERO;
        self.dolly_start = Vec2::ZERO;
        self.final_target_distance = 0.0;
        self.current_target_distance = 0.0;
        self.pan_target = Vec3::ZERO;
        self.pan_current = Vec3::ZERO;
        self.min_zoom_position = Vec3::ZERO;
        self.max_zoom_position = Vec3::ZERO;

        self.screen_world_xform = (self.camera.fovy.to_radians() * 0.5).tan();

        // Establish the initial orientation from the camera's position with
        // respect to the plane.
        self.straight_dolly_track();

        self.camera.position = self
            .min_zoom_position
            .lerp(self.max_zoom_position, self.options.zoom.initial_zoom);
        let distance = self.target.distance_to_point(self.camera.position).abs();
        self.final_target_distance = distance;
        self.current_target_distance = distance;

        let (intersection, ray) = self.intersect_camera_target();
        self.camera.look_at(intersection);
        self.cam_orientation = ray.direction;

        let _ = self.update_zoom_alpha(self.options.zoom.damping_alpha);

        self.listeners.attach(&ListenerKind::PERSISTENT);
        log::debug!(
            "gallery controls attached {} listeners, zoom alpha {}",
            self.listeners.len(),
            self.zoom_alpha
        );
        self.disposed = false;
        self.surface.ensure_focusable();

        self.update();
        Ok(())
    }

    /// Straight-ahead aim: the ray from the camera to its orthogonal
    /// projection on the plane, and where it lands.
    fn intersect_camera_target(&self) -> (Vec3, Ray) {
        let coplanar = self.target.project_point(self.camera.position);
        let ray = Ray::new(self.camera.position, coplanar - self.camera.position);
        let intersection = ray.intersect_plane(&self.target).unwrap_or(coplanar);
        (intersection, ray)
    }

    fn straight_dolly_track(&mut self) {
        let (_, ray) = self.intersect_camera_target();
        self.update_dolly_track(&ray);
    }

    /// Re-aim the dolly track along `ray`.
    ///
    /// Leaves the track untouched when `ray` misses the plane. Otherwise
    /// both track ends sit on the line from the hit point back to the
    /// camera, and the zoom distances are reset to the camera's distance
    /// from the hit point.
    pub fn update_dolly_track(&mut self, ray: &Ray) {
        let Some(intersection) = ray.intersect_plane(&self.target) else {
            return;
        };
        let toward_camera =
            (self.camera.position - intersection).normalize_or_zero();
        self.max_zoom_position =
            intersection + toward_camera * self.options.zoom.min_distance;
        self.min_zoom_position =
            intersection + toward_camera * self.options.zoom.max_distance;

        let distance = intersection.distance(self.camera.position);
        self.final_target_distance = distance;
        self.current_target_distance = distance;
    }

    /// Advance pan and zoom damping by one frame and move the camera.
    ///
    /// Call once per rendered frame. Does nothing after
    /// [`dispose`](Self::dispose).
    pub fn update(&mut self) {
        self.step(
            self.options.pan.damping_alpha,
            self.options.zoom.damping_alpha,
        );
    }

    /// Like [`update`](Self::update), with both damping alphas rescaled so
    /// motion speed is independent of how often this is called.
    pub fn update_elapsed(&mut self, elapsed: Duration) {
        self.step(
            frame_scaled_alpha(self.options.pan.damping_alpha, elapsed),
            frame_scaled_alpha(self.options.zoom.damping_alpha, elapsed),
        );
    }

    fn step(&mut self, pan_alpha: f32, zoom_alpha: f32) {
        if self.disposed {
            return;
        }
        // Move the track to the panned location.
        let old_pan = self.pan_current;
        self.pan_current = self.pan_current.lerp(self.pan_target, pan_alpha);
        let pan_delta = self.pan_current - old_pan;
        self.max_zoom_position += pan_delta;
        self.min_zoom_position += pan_delta;

        let alpha = self.update_zoom_alpha(zoom_alpha);
        self.camera.position =
            self.min_zoom_position.lerp(self.max_zoom_position, alpha);
    }

    fn update_zoom_alpha(&mut self, damping_alpha: f32) -> f32 {
        let min = self.options.zoom.min_distance;
        let max = self.options.zoom.max_distance;

        self.final_target_distance = self.final_target_distance.clamp(min, max);
        let diff = self.current_target_distance - self.final_target_distance;
        self.current_target_distance =
            (self.current_target_distance - diff * damping_alpha).clamp(min, max);

        let range = max - min;
        let alpha = if range > 0.0 {
            1.0 - (self.current_target_distance - min) / range
        } else {
            1.0
        };
        self.zoom_alpha = (alpha.clamp(0.0, 1.0) * ZOOM_ALPHA_ROUNDING).round()
            / ZOOM_ALPHA_ROUNDING;
        self.zoom_alpha
    }

    /// Request a close-up of `object`.
    ///
    /// Pans toward the center of its world bounds and dollies to
    /// `options.zoom.focus_distance`. Only one update is applied here; the
    /// motion completes over subsequent [`update`](Self::update) calls (see
    /// [`is_settled`](Self::is_settled) and [`settle`](Self::settle)).
    pub fn zoom_to<B: Bounded + ?Sized>(&mut self, object: &B) {
        let center = object.world_bounds().center();
        self.pan_target = center;
        // Snap without damping so re-aiming does not pop.
        let (intersection, _) = self.intersect_camera_target();
        self.pan_current = intersection;

        self.straight_dolly_track();

        self.final_target_distance = self.options.zoom.focus_distance;
        self.update();
    }

    /// Approximate footprint of the view on the target plane, in
    /// plane-local coordinates.
    ///
    /// Only meaningful for perspective cameras.
    pub fn target_area_visible(&self) -> Rect {
        let ray = Ray::new(self.camera.position, self.cam_orientation);
        let depth = ray.distance_to_plane(&self.target).unwrap_or(0.0);

        let v_offset = self.screen_world_xform * depth;
        let h_offset = v_offset * self.camera.aspect;
        let center = self.target.to_local(self.camera.position);

        Rect::from_center_half_extents(center, Vec2::new(h_offset, v_offset))
    }

    /// Whether both the pan and zoom errors are within `epsilon`.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        let final_distance = self.final_target_distance.clamp(
            self.options.zoom.min_distance,
            self.options.zoom.max_distance,
        );
        self.pan_current.distance(self.pan_target) <= epsilon
            && (self.current_target_distance - final_distance).abs() <= epsilon
    }

    /// Run [`update`](Self::update) until [`is_settled`](Self::is_settled)
    /// or `max_iterations` is reached. Returns the number of updates run.
    pub fn settle(&mut self, max_iterations: usize, epsilon: f32) -> usize {
        for i in 0..max_iterations {
            if self.is_settled(epsilon) {
                return i;
            }
            self.update();
        }
        max_iterations
    }

    /// Restore the plane, camera position and zoom to their construction
    /// values and re-run initialization.
    ///
    /// Does nothing on a disposed controller.
    pub fn reset(&mut self) -> Result<(), ControlsError> {
        if self.disposed {
            return Ok(());
        }
        self.target = self.target0;
        self.camera.position = self.position0;
        self.camera.zoom = self.zoom0;

        self.init()?;

        self.events.emit(ControlEvent::Change);
        self.update();
        self.state = ControlState::None;
        Ok(())
    }

    /// Detach every input listener. The controller is inert afterward;
    /// calling this again is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.listeners.clear();
        self.state = ControlState::None;
        self.disposed = true;
        log::debug!("gallery controls disposed, all listeners detached");
    }

    // ── Dolly / pan primitives ──

    pub(super) fn zoom_scale(speed: f32) -> f32 {
        ZOOM_SCALE_BASE.powf(speed)
    }

    /// Move the zoom goal closer by `scale` (< 1).
    pub(super) fn dolly_in(&mut self, scale: f32) {
        if self.check_dolly_supported() {
            self.final_target_distance *= scale;
        }
    }

    /// Move the zoom goal away by `scale` (< 1).
    pub(super) fn dolly_out(&mut self, scale: f32) {
        if self.check_dolly_supported() {
            self.final_target_distance /= scale;
        }
    }

    fn check_dolly_supported(&mut self) -> bool {
        if self.camera.is_perspective() {
            return true;
        }
        log::warn!(
            "gallery controls encountered a {:?} camera - dolly/zoom disabled",
            self.camera.projection
        );
        self.options.zoom.enabled = false;
        false
    }

    /// Pan by a pixel delta (right and down positive).
    ///
    /// Uses the element height only; a perspective camera's vertical field
    /// of view fixes the world size of a screen pixel.
    pub(super) fn pan(&mut self, delta: Vec2) {
        let height = self.surface.client_size().y.max(1.0);
        let ray = Ray::new(self.camera.position, self.cam_orientation);
        let target_distance = self.screen_world_xform
            * ray.distance_to_plane(&self.target).unwrap_or(0.0);

        self.pan_left(2.0 * delta.x * target_distance / height);
        self.pan_up(2.0 * delta.y * target_distance / height);
    }

    fn pan_left(&mut self, distance: f32) {
        self.pan_target += self.camera.right() * -distance;
    }

    fn pan_up(&mut self, distance: f32) {
        self.pan_target += self.camera.up_axis() * distance;
    }

    /// Convert surface pixels to normalized device coordinates.
    pub(super) fn to_ndc(&self, position: Vec2) -> Vec2 {
        let size = self.surface.client_size();
        if size.x <= 0.0 || size.y <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            position.x / size.x * 2.0 - 1.0,
            -(position.y / size.y) * 2.0 + 1.0,
        )
    }

    /// Re-aim the dolly track through a surface pixel, if the pointer moved.
    pub(super) fn aim_dolly_track_at(&mut self, position: Vec2) {
        let previous = self.pointer_ndc;
        self.pointer_ndc = self.to_ndc(position);
        if previous != self.pointer_ndc {
            let ray = self.camera.ray_from_ndc(self.pointer_ndc);
            self.update_dolly_track(&ray);
        }
    }

    // ── Accessors ──

    /// The driven camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Give the camera back, consuming the controller.
    pub fn into_camera(self) -> Camera {
        self.camera
    }

    /// Update the camera aspect ratio after the surface was resized.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// The input surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the input surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The target plane.
    pub fn target(&self) -> &Plane {
        &self.target
    }

    /// Active options.
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Master input switch.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    /// Enable or disable dolly gestures.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.options.zoom.enabled = enabled;
    }

    /// Enable or disable pan gestures.
    pub fn set_pan_enabled(&mut self, enabled: bool) {
        self.options.pan.enabled = enabled;
    }

    /// Enable or disable keyboard nudges.
    pub fn set_keys_enabled(&mut self, enabled: bool) {
        self.options.keybindings.enabled = enabled;
    }

    /// Normalized position on the dolly track: 0 = far, 1 = near.
    pub fn zoom_alpha(&self) -> f32 {
        self.zoom_alpha
    }

    /// Gesture currently in progress.
    pub fn state(&self) -> ControlState {
        self.state
    }

    /// Pan goal.
    pub fn pan_target(&self) -> Vec3 {
        self.pan_target
    }

    /// Damped pan position.
    pub fn pan_current(&self) -> Vec3 {
        self.pan_current
    }

    /// Zoom goal distance.
    pub fn final_target_distance(&self) -> f32 {
        self.final_target_distance
    }

    /// Damped zoom distance.
    pub fn current_target_distance(&self) -> f32 {
        self.current_target_distance
    }

    /// Dolly track ends as `(far, near)`.
    pub fn dolly_track(&self) -> (Vec3, Vec3) {
        (self.min_zoom_position, self.max_zoom_position)
    }

    /// Aim direction fixed at initialization.
    pub fn cam_orientation(&self) -> Vec3 {
        self.cam_orientation
    }

    /// Currently attached input listeners.
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Subscribe to lifecycle events.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(ControlEvent) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(callback)
    }

    /// Remove a lifecycle subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::camera::core::Projection;
    use crate::camera::geometry::Aabb;
    use crate::input::{InputEvent, MouseButton};
    use crate::camera::testing::{
        approx, wall_camera, wall_controls, wall_options, TestSurface,
    };

    #[test]
    fn construction_snaps_to_far_bound() {
        let controls = wall_controls();
        assert!(approx(controls.camera().position, Vec3::new(0.0, 0.0, 5.0), 1e-4));
        assert_eq!(controls.zoom_alpha(), 0.0);
        assert!(approx(controls.camera().forward(), Vec3::NEG_Z, 1e-5));
        assert!(approx(controls.cam_orientation(), Vec3::NEG_Z, 1e-5));
        assert!(controls.surface().focusable);
    }

    #[test]
    fn initial_zoom_places_camera_on_track() {
        let options = wall_options().with_initial_zoom(1.0);
        let controls = GalleryControls::new(
            wall_camera(),
            TestSurface::new(800.0, 600.0),
            options,
        )
        .unwrap();
        assert!(approx(controls.camera().position, Vec3::new(0.0, 0.0, 0.5), 1e-4));
        assert_eq!(controls.zoom_alpha(), 1.0);
    }

    #[test]
    fn camera_below_plane_looks_up() {
        let camera = Camera::perspective(60.0, 1.0, Vec3::new(2.0, 3.0, -8.0));
        let controls = GalleryControls::new(
            camera,
            TestSurface::new(100.0, 100.0),
            wall_options(),
        )
        .unwrap();
        assert!(approx(controls.camera().position, Vec3::new(2.0, 3.0, -5.0), 1e-4));
        assert!(approx(controls.camera().forward(), Vec3::Z, 1e-5));
    }

    #[test]
    fn camera_on_plane_is_rejected() {
        let camera = Camera::perspective(60.0, 1.0, Vec3::new(4.0, -1.0, 0.0));
        let result = GalleryControls::new(
            camera,
            TestSurface::new(100.0, 100.0),
            wall_options(),
        );
        assert!(matches!(result, Err(ControlsError::OrientationUnknowable)));
    }

    #[test]
    fn any_nonzero_distance_is_accepted() {
        for z in [1e-3, -1e-3, 0.25, 50.0] {
            let camera = Camera::perspective(60.0, 1.0, Vec3::new(0.0, 0.0, z));
            assert!(GalleryControls::new(
                camera,
                TestSurface::new(100.0, 100.0),
                wall_options(),
            )
            .is_ok());
        }
    }

    #[test]
    fn missing_or_malformed_target_is_rejected() {
        let mut options = wall_options();
        options.target = None;
        let missing = GalleryControls::new(
            wall_camera(),
            TestSurface::new(100.0, 100.0),
            options.clone(),
        );
        assert!(matches!(missing, Err(ControlsError::InvalidTarget(_))));

        options.target = Some(Plane {
            normal: Vec3::ZERO,
            constant: 0.0,
        });
        let malformed = GalleryControls::new(
            wall_camera(),
            TestSurface::new(100.0, 100.0),
            options,
        );
        assert!(matches!(malformed, Err(ControlsError::InvalidTarget(_))));
    }

    #[test]
    fn update_without_pending_change_is_idempotent() {
        let mut controls = wall_controls();
        let before = controls.camera().position;
        for _ in 0..10 {
            controls.update();
        }
        assert!(approx(controls.camera().position, before, 1e-5));
    }

    #[test]
    fn distances_stay_in_range() {
        let mut controls = wall_controls();
        for i in 0..200 {
            if i % 7 == 0 {
                controls.dolly_in(GalleryControls::<TestSurface>::zoom_scale(40.0));
            }
            if i % 11 == 0 {
                controls.dolly_out(GalleryControls::<TestSurface>::zoom_scale(40.0));
            }
            controls.update();
            let distance = controls.current_target_distance();
            assert!((0.5..=5.0).contains(&distance), "distance {distance}");
            assert!((0.0..=1.0).contains(&controls.zoom_alpha()));
        }
    }

    #[test]
    fn zoom_to_converges_on_object() {
        let mut controls = wall_controls();
        controls.zoom_to(&Aabb::from_center_size(Vec3::new(1.0, 1.0, 0.0), Vec3::ZERO));
        for _ in 0..300 {
            controls.update();
        }
        assert!(approx(controls.pan_current(), Vec3::new(1.0, 1.0, 0.0), 1e-3));
        assert!((controls.current_target_distance() - 3.0).abs() < 1e-3);
        assert!(approx(controls.camera().position, Vec3::new(1.0, 1.0, 3.0), 1e-3));
    }

    #[test]
    fn zoom_to_errors_shrink_monotonically() {
        for alpha in [0.05, 0.1, 0.5, 1.0] {
            let mut options = wall_options();
            options.pan.damping_alpha = alpha;
            options.zoom.damping_alpha = alpha;
            let mut controls = GalleryControls::new(
                wall_camera(),
                TestSurface::new(800.0, 600.0),
                options,
            )
            .unwrap();
            controls.zoom_to(&Vec3::new(-2.0, 0.5, 0.0));

            let mut pan_error = f32::INFINITY;
            let mut zoom_error = f32::INFINITY;
            for _ in 0..50 {
                let p = controls.pan_current().distance(controls.pan_target());
                let z = (controls.current_target_distance()
                    - controls.final_target_distance())
                .abs();
                assert!(p <= pan_error + 1e-6);
                assert!(z <= zoom_error + 1e-6);
                pan_error = p;
                zoom_error = z;
                controls.update();
            }
        }
    }

    #[test]
    fn settle_stops_when_converged() {
        let mut controls = wall_controls();
        assert!(controls.is_settled(1e-4));
        assert_eq!(controls.settle(15, 1e-4), 0);

        controls.zoom_to(&Vec3::new(1.0, 1.0, 0.0));
        assert!(!controls.is_settled(1e-3));
        let ran = controls.settle(1000, 1e-3);
        assert!(ran > 0 && ran < 1000);
        assert!(controls.is_settled(1e-3));
    }

    #[test]
    fn elapsed_update_matches_frame_update_at_reference_rate() {
        let mut by_frame = wall_controls();
        let mut by_time = wall_controls();
        by_frame.zoom_to(&Vec3::new(1.0, -1.0, 0.0));
        by_time.zoom_to(&Vec3::new(1.0, -1.0, 0.0));
        for _ in 0..20 {
            by_frame.update();
            by_time.update_elapsed(crate::util::frame_timing::REFERENCE_FRAME);
        }
        assert!(approx(by_frame.camera().position, by_time.camera().position, 1e-3));
    }

    #[test]
    fn visible_area_scales_with_depth() {
        let mut controls = wall_controls();
        let far = controls.target_area_visible();
        assert!(far.center().length() < 1e-4);

        controls.zoom_to(&Vec3::ZERO);
        let _ = controls.settle(1000, 1e-5);
        let near = controls.target_area_visible();

        let far_depth = 5.0;
        let near_depth = controls.camera().position.z;
        let ratio = near.size() / far.size();
        assert!((ratio.x - near_depth / far_depth).abs() < 1e-3);
        assert!((ratio.y - near_depth / far_depth).abs() < 1e-3);
        // Width/height follow the aspect ratio.
        assert!((far.size().x / far.size().y - 1.5).abs() < 1e-4);
    }

    #[test]
    fn visible_area_height_uses_fov() {
        let controls = wall_controls();
        let area = controls.target_area_visible();
        let expected = (75.0_f32.to_radians() * 0.5).tan() * 5.0 * 2.0;
        assert!((area.size().y - expected).abs() < 1e-3);
    }

    #[test]
    fn reset_restores_construction_state() {
        let mut controls = wall_controls();
        let changes = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&changes);
        let _ = controls.subscribe(move |event| {
            if event == ControlEvent::Change {
                *counter.borrow_mut() += 1;
            }
        });

        controls.zoom_to(&Vec3::new(3.0, 2.0, 0.0));
        let _ = controls.settle(100, 1e-4);
        controls.reset().unwrap();

        assert_eq!(*changes.borrow(), 1);
        assert_eq!(controls.pan_current(), Vec3::ZERO);
        assert!(approx(controls.camera().position, Vec3::new(0.0, 0.0, 5.0), 1e-4));
        assert_eq!(controls.state(), ControlState::None);
    }

    #[test]
    fn dispose_is_idempotent_and_inert() {
        let mut controls = wall_controls();
        controls.dispose();
        assert!(controls.listeners().is_empty());
        assert!(controls.is_disposed());
        controls.dispose();
        assert!(controls.listeners().is_empty());

        let before = controls.camera().position;
        controls.zoom_to(&Vec3::new(1.0, 1.0, 0.0));
        controls.update();
        assert_eq!(controls.camera().position, before);
    }

    #[test]
    fn orthographic_camera_disables_zoom() {
        let mut camera = wall_camera();
        camera.projection = Projection::Orthographic;
        let mut controls = GalleryControls::new(
            camera,
            TestSurface::new(800.0, 600.0),
            wall_options(),
        )
        .unwrap();
        let before = controls.final_target_distance();
        controls.dolly_in(0.5);
        assert_eq!(controls.final_target_distance(), before);
        assert!(!controls.options().zoom.enabled);
    }

    #[test]
    fn reset_after_dispose_stays_inert() {
        let mut controls = wall_controls();
        controls.dispose();
        controls.reset().unwrap();

        assert!(controls.is_disposed());
        assert!(controls.listeners().is_empty());
        assert!(!controls.handle_event(InputEvent::KeyDown {
            key: "ArrowLeft".to_owned(),
        }));
        assert_eq!(controls.pan_target(), Vec3::ZERO);
    }

    #[test]
    fn pointer_dolly_keeps_fixed_orientation() {
        let mut controls = wall_controls();
        let orientation = controls.cam_orientation();
        let area = controls.target_area_visible();
        let track = controls.dolly_track();

        // Off-center press re-aims the track without touching the zoom.
        let _ = controls.handle_event(InputEvent::PointerDown {
            button: MouseButton::Middle,
            position: Vec2::new(650.0, 120.0),
        });

        assert_ne!(controls.dolly_track(), track);
        assert_eq!(controls.cam_orientation(), orientation);
        let (far, near) = controls.dolly_track();
        assert!((near - far).normalize().dot(orientation).abs() < 0.999);
        // Visible area keeps depth along the fixed orientation.
        assert!((controls.target_area_visible().size() - area.size()).length() < 1e-3);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut controls = wall_controls();
        controls.resize(1920, 1080);
        assert!((controls.camera().aspect - 16.0 / 9.0).abs() < 1e-6);
        controls.resize(0, 1080);
        assert!((controls.camera().aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
