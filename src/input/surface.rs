//! The surface that delivers input and the set of listeners attached to it.

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::InputEvent;

/// The element input is captured from (a canvas, a window, a test double).
pub trait InputSurface {
    /// Size of the surface in pixels (`client_width`, `client_height`).
    fn client_size(&self) -> Vec2;

    /// Give the surface keyboard focus.
    fn focus(&mut self) {}

    /// Drop keyboard focus.
    fn blur(&mut self) {}

    /// Make the surface able to receive keyboard focus (e.g. give a canvas
    /// a tab index). Called once per initialization.
    fn ensure_focusable(&mut self) {}
}

/// Kinds of input listener the controller can attach to its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Context-menu suppression.
    ContextMenu,
    /// Mouse button press.
    PointerDown,
    /// Pointer motion (attached only during a mouse gesture).
    PointerMove,
    /// Mouse button release (attached only during a mouse gesture).
    PointerUp,
    /// Scroll wheel.
    Wheel,
    /// Finger down.
    TouchStart,
    /// Finger motion.
    TouchMove,
    /// Finger up.
    TouchEnd,
    /// Key press.
    KeyDown,
    /// Pointer entered the surface.
    PointerEnter,
    /// Pointer left the surface.
    PointerLeave,
}

impl ListenerKind {
    /// Listeners attached for the whole lifetime of the controller.
    pub const PERSISTENT: [Self; 9] = [
        Self::ContextMenu,
        Self::PointerDown,
        Self::Wheel,
        Self::TouchStart,
        Self::TouchEnd,
        Self::TouchMove,
        Self::PointerEnter,
        Self::PointerLeave,
        Self::KeyDown,
    ];

    /// Listeners attached only while a mouse gesture is in progress.
    pub const GESTURE: [Self; 2] = [Self::PointerMove, Self::PointerUp];

    /// The listener that receives `event`.
    pub fn of(event: &InputEvent) -> Self {
        match event {
            InputEvent::PointerDown { .. } => Self::PointerDown,
            InputEvent::PointerMove { .. } => Self::PointerMove,
            InputEvent::PointerUp { .. } => Self::PointerUp,
            InputEvent::Wheel { .. } => Self::Wheel,
            InputEvent::TouchStart { .. } => Self::TouchStart,
            InputEvent::TouchMove { .. } => Self::TouchMove,
            InputEvent::TouchEnd { .. } => Self::TouchEnd,
            InputEvent::KeyDown { .. } => Self::KeyDown,
            InputEvent::ContextMenu => Self::ContextMenu,
            InputEvent::PointerEnter => Self::PointerEnter,
            InputEvent::PointerLeave => Self::PointerLeave,
        }
    }
}

/// Set of currently attached listeners.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    attached: FxHashSet<ListenerKind>,
}

impl Listeners {
    /// Attach each listener in `kinds`. Attaching twice is a no-op.
    pub fn attach(&mut self, kinds: &[ListenerKind]) {
        self.attached.extend(kinds.iter().copied());
    }

    /// Detach each listener in `kinds`.
    pub fn detach(&mut self, kinds: &[ListenerKind]) {
        for kind in kinds {
            let _ = self.attached.remove(kind);
        }
    }

    /// Detach everything.
    pub fn clear(&mut self) {
        self.attached.clear();
    }

    /// Whether `kind` is attached.
    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.attached.contains(&kind)
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}
