use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// Pointer and touch coordinates are in pixels relative to the input
/// surface's top-left corner. These are fed into
/// [`GalleryControls::handle_event`](crate::camera::controller::GalleryControls::handle_event).
///
/// # Example
///
/// ```ignore
/// controls.handle_event(InputEvent::PointerDown {
///     button: MouseButton::Left,
///     position: Vec2::new(100.0, 200.0),
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed.
    PointerDown {
        /// Which button was pressed.
        button: MouseButton,
        /// Pointer position in surface pixels.
        position: Vec2,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position in surface pixels.
        position: Vec2,
    },
    /// Mouse button released.
    PointerUp {
        /// Which button was released.
        button: MouseButton,
        /// Pointer position in surface pixels.
        position: Vec2,
    },
    /// Scroll wheel (positive = zoom in).
    Wheel {
        /// Scroll amount; only its sign matters.
        delta: f32,
        /// Pointer position in surface pixels.
        position: Vec2,
    },
    /// A finger touched the surface.
    TouchStart {
        /// All fingers currently on the surface.
        touches: Touches,
    },
    /// One or more fingers moved.
    TouchMove {
        /// All fingers currently on the surface.
        touches: Touches,
    },
    /// A finger left the surface.
    TouchEnd {
        /// Fingers still on the surface.
        touches: Touches,
    },
    /// A key was pressed. `key` uses DOM `KeyboardEvent.key` naming
    /// (`"ArrowLeft"`, `"]"`, ...).
    KeyDown {
        /// Logical key string.
        key: String,
    },
    /// Context menu requested (usually right click).
    ContextMenu,
    /// Pointer entered the surface.
    PointerEnter,
    /// Pointer left the surface.
    PointerLeave,
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Active touch points. Gestures only ever look at the first two fingers,
/// so only those positions are stored alongside the total count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Touches {
    count: usize,
    points: [Vec2; 2],
}

impl Touches {
    /// No fingers on the surface.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single finger.
    pub fn one(point: Vec2) -> Self {
        Self {
            count: 1,
            points: [point, Vec2::ZERO],
        }
    }

    /// Two fingers.
    pub fn two(first: Vec2, second: Vec2) -> Self {
        Self {
            count: 2,
            points: [first, second],
        }
    }

    /// `count` fingers, of which the first two are at `first` and `second`.
    pub fn many(count: usize, first: Vec2, second: Vec2) -> Self {
        Self {
            count,
            points: [first, second],
        }
    }

    /// Number of fingers.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no finger is down.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Position of the `index`-th finger, for the first two.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        (index < self.count.min(2)).then(|| self.points[index])
    }

    /// Distance between the first two fingers (0 with fewer than two).
    pub fn spread(&self) -> f32 {
        match (self.get(0), self.get(1)) {
            (Some(a), Some(b)) => a.distance(b),
            _ => 0.0,
        }
    }

    /// Midpoint of the first two fingers, or the single finger position.
    pub fn midpoint(&self) -> Vec2 {
        match (self.get(0), self.get(1)) {
            (Some(a), Some(b)) => (a + b) * 0.5,
            (Some(a), None) => a,
            _ => Vec2::ZERO,
        }
    }
}
