//! Click-to-focus gallery behaviour on top of [`GalleryControls`].
//!
//! A session tracks which wall item (if any) is focused, when the pointer
//! was last pressed, and which part of the wall is currently shown in
//! focus (the blur area). Focusing an item flies the camera to it; any
//! pan drag or wheel event drops the focus again.

use glam::{Vec2, Vec3};
use web_time::Instant;

use crate::camera::geometry::{Aabb, Bounded, Rect};
use crate::camera::GalleryControls;
use crate::input::{InputEvent, InputSurface};

/// How many updates [`GallerySession::open_item`] runs before sampling the
/// visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettleStrategy {
    /// A fixed number of updates, whether or not the motion finished.
    Fixed(usize),
    /// Update until pan and zoom errors fall below `epsilon`, capped at
    /// `max_iterations`.
    UntilConverged {
        /// Convergence tolerance in world units.
        epsilon: f32,
        /// Upper bound on updates.
        max_iterations: usize,
    },
}

impl Default for SettleStrategy {
    fn default() -> Self {
        Self::Fixed(15)
    }
}

/// A flat item hung on the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallItem {
    /// Caller-assigned identifier.
    pub id: u32,
    /// World-space center.
    pub center: Vec3,
    /// World-space extents.
    pub size: Vec3,
}

impl Bounded for WallItem {
    fn world_bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }
}

impl WallItem {
    /// Lay out `columns * rows` items of `item_size` on the `z = 0` wall,
    /// centered on the origin with `spacing` between item centers.
    ///
    /// Ids run row-major from the top-left item.
    pub fn grid(columns: u32, rows: u32, spacing: Vec2, item_size: Vec2) -> Vec<Self> {
        let origin = Vec2::new(
            -(columns.saturating_sub(1) as f32) * spacing.x * 0.5,
            (rows.saturating_sub(1) as f32) * spacing.y * 0.5,
        );
        (0..rows)
            .flat_map(|row| (0..columns).map(move |col| (row, col)))
            .map(|(row, col)| Self {
                id: row * columns + col,
                center: Vec3::new(
                    origin.x + col as f32 * spacing.x,
                    origin.y - row as f32 * spacing.y,
                    0.0,
                ),
                size: item_size.extend(0.0),
            })
            .collect()
    }
}

/// Gallery application state wrapped around a controller.
pub struct GallerySession<S: InputSurface> {
    controls: GalleryControls<S>,
    focused: Option<u32>,
    last_pointer_down: Option<Instant>,
    pan_button_held: bool,
    blur_area: Option<Rect>,
    settle: SettleStrategy,
}

impl<S: InputSurface> GallerySession<S> {
    /// Wrap `controls` with the default settle strategy.
    pub fn new(controls: GalleryControls<S>) -> Self {
        Self::with_settle(controls, SettleStrategy::default())
    }

    /// Wrap `controls` with an explicit settle strategy.
    pub fn with_settle(controls: GalleryControls<S>, settle: SettleStrategy) -> Self {
        Self {
            controls,
            focused: None,
            last_pointer_down: None,
            pan_button_held: false,
            blur_area: None,
            settle,
        }
    }

    /// Focus `object` and fly the camera to it.
    ///
    /// Ignored (returns `false`) while another item is focused.
    pub fn open_item<B: Bounded + ?Sized>(&mut self, id: u32, object: &B) -> bool {
        if self.focused.is_some() {
            log::debug!("item {id} ignored: another item is focused");
            return false;
        }
        self.focused = Some(id);
        self.controls.zoom_to(object);

        let updates = match self.settle {
            SettleStrategy::Fixed(count) => {
                for _ in 0..count {
                    self.controls.update();
                }
                count
            }
            SettleStrategy::UntilConverged {
                epsilon,
                max_iterations,
            } => self.controls.settle(max_iterations, epsilon),
        };

        let area = self.controls.target_area_visible();
        self.blur_area = Some(area);
        log::info!(
            "focused item {id} after {updates} updates, visible area {:?}",
            area.size()
        );
        true
    }

    /// Drop focus and the blur area.
    pub fn clear_focus(&mut self) {
        if let Some(id) = self.focused.take() {
            log::debug!("cleared focus on item {id}");
        }
        self.blur_area = None;
    }

    /// Route one input event: pan drags and wheel events clear focus first,
    /// then the event goes to the controller.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let pan_button = self.controls.options().mouse.pan;
        match &event {
            InputEvent::PointerDown { button, .. } => {
                self.last_pointer_down = Some(Instant::now());
                if *button == pan_button {
                    self.pan_button_held = true;
                }
            }
            InputEvent::PointerUp { button, .. } if *button == pan_button => {
                self.pan_button_held = false;
            }
            InputEvent::PointerMove { .. } if self.pan_button_held => {
                self.clear_focus();
            }
            InputEvent::Wheel { .. } => self.clear_focus(),
            _ => {}
        }
        self.controls.handle_event(event)
    }

    /// Per-frame tick.
    pub fn frame(&mut self) {
        self.controls.update();
    }

    /// Currently focused item.
    pub fn focused(&self) -> Option<u32> {
        self.focused
    }

    /// Time of the last pointer press.
    pub fn last_pointer_down(&self) -> Option<Instant> {
        self.last_pointer_down
    }

    /// Wall region shown around the focused item.
    pub fn blur_area(&self) -> Option<Rect> {
        self.blur_area
    }

    /// Active settle strategy.
    pub fn settle_strategy(&self) -> SettleStrategy {
        self.settle
    }

    /// The wrapped controller.
    pub fn controls(&self) -> &GalleryControls<S> {
        &self.controls
    }

    /// Mutable access to the wrapped controller.
    pub fn controls_mut(&mut self) -> &mut GalleryControls<S> {
        &mut self.controls
    }

    /// Unwrap the controller.
    pub fn into_controls(self) -> GalleryControls<S> {
        self.controls
    }
}
