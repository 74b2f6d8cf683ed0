//! Input state machine for [`GalleryControls`].
//!
//! Mouse drags and touch gestures move between [`ControlState`]s; wheel and
//! key presses are one-shot nudges that never leave `None`.

use glam::Vec2;

use super::controller::GalleryControls;
use super::events::ControlEvent;
use crate::input::{
    InputEvent, InputSurface, KeyAction, ListenerKind, MouseButton, Touches,
};

/// Gesture currently driving the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    /// Idle.
    #[default]
    None,
    /// Mouse dolly drag.
    Dolly,
    /// Mouse pan drag.
    Pan,
    /// Two-finger pinch.
    TouchDolly,
    /// One-finger drag.
    TouchPan,
}

impl<S: InputSurface> GalleryControls<S> {
    /// Feed one input event to the controller.
    ///
    /// Events whose listener is not attached (gesture-only listeners outside
    /// a gesture, everything after [`dispose`](Self::dispose)) are ignored.
    /// Returns `true` when the event was consumed and the platform default
    /// action should be suppressed.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if self.disposed || !self.listeners.is_attached(ListenerKind::of(&event)) {
            return false;
        }
        match event {
            InputEvent::PointerDown { button, position } => {
                self.on_pointer_down(button, position)
            }
            InputEvent::PointerMove { position } => self.on_pointer_move(position),
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
            InputEvent::Wheel { delta, position } => self.on_wheel(delta, position),
            InputEvent::TouchStart { touches } => self.on_touch_start(&touches),
            InputEvent::TouchMove { touches } => self.on_touch_move(&touches),
            InputEvent::TouchEnd { .. } => self.on_touch_end(),
            InputEvent::KeyDown { key } => self.on_key_down(&key),
            InputEvent::ContextMenu => true,
            InputEvent::PointerEnter => {
                self.surface.focus();
                false
            }
            InputEvent::PointerLeave => {
                self.surface.blur();
                false
            }
        }
    }

    // ── Mouse ──

    fn on_pointer_down(&mut self, button: MouseButton, position: Vec2) -> bool {
        if !self.options.enabled {
            return false;
        }
        if button == self.options.mouse.zoom {
            if !self.options.zoom.enabled {
                return true;
            }
            self.aim_dolly_track_at(position);
            self.dolly_start = position;
            self.state = ControlState::Dolly;
        } else if button == self.options.mouse.pan {
            if !self.options.pan.enabled {
                return true;
            }
            self.pan_start = position;
            self.state = ControlState::Pan;
        }

        if self.state != ControlState::None {
            self.listeners.attach(&ListenerKind::GESTURE);
            log::debug!("{:?} gesture started, move/up listeners attached", self.state);
            self.events.emit(ControlEvent::Start);
        }
        true
    }

    fn on_pointer_move(&mut self, position: Vec2) -> bool {
        if !self.options.enabled {
            return false;
        }
        match self.state {
            ControlState::Dolly => {
                if !self.options.zoom.enabled {
                    return false;
                }
                self.aim_dolly_track_at(position);
                let delta = position - self.dolly_start;
                let scale = Self::zoom_scale(self.options.zoom.speed);
                if delta.y > 0.0 {
                    self.dolly_out(scale);
                } else if delta.y < 0.0 {
                    self.dolly_in(scale);
                }
                self.dolly_start = position;
                self.update();
            }
            ControlState::Pan => {
                if !self.options.pan.enabled {
                    return false;
                }
                self.pan(position - self.pan_start);
                self.pan_start = position;
                self.update();
            }
            _ => {}
        }
        true
    }

    fn on_pointer_up(&mut self) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.listeners.detach(&ListenerKind::GESTURE);
        log::debug!("{:?} gesture ended, move/up listeners detached", self.state);
        self.events.emit(ControlEvent::End);
        self.state = ControlState::None;
        false
    }

    fn on_wheel(&mut self, delta: f32, position: Vec2) -> bool {
        if !self.options.enabled
            || !self.options.zoom.enabled
            || self.state != ControlState::None
        {
            return false;
        }
        if self.options.zoom.aim_wheel_at_pointer {
            self.aim_dolly_track_at(position);
        }
        let scale = Self::zoom_scale(self.options.zoom.speed);
        if delta > 0.0 {
            self.dolly_in(scale);
        } else if delta < 0.0 {
            self.dolly_out(scale);
        }
        self.update();

        self.events.emit(ControlEvent::Start);
        self.events.emit(ControlEvent::End);
        true
    }

    // ── Touch ──

    fn on_touch_start(&mut self, touches: &Touches) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.state = match touches.len() {
            1 if self.options.pan.enabled => {
                self.pan_start = touches.midpoint();
                ControlState::TouchPan
            }
            2 if self.options.zoom.enabled => {
                self.aim_dolly_track_at(touches.midpoint());
                self.dolly_start = Vec2::new(0.0, touches.spread());
                ControlState::TouchDolly
            }
            _ => ControlState::None,
        };
        if self.state != ControlState::None {
            log::debug!("{:?} gesture started with {} touches", self.state, touches.len());
            self.events.emit(ControlEvent::Start);
        }
        false
    }

    fn on_touch_move(&mut self, touches: &Touches) -> bool {
        if !self.options.enabled {
            return false;
        }
        match touches.len() {
            1 => {
                if !self.options.pan.enabled || self.state != ControlState::TouchPan {
                    return false;
                }
                let position = touches.midpoint();
                self.pan(position - self.pan_start);
                self.pan_start = position;
                self.update();
            }
            2 => {
                if !self.options.zoom.enabled
                    || self.state != ControlState::TouchDolly
                {
                    return false;
                }
                self.aim_dolly_track_at(touches.midpoint());
                let spread = touches.spread();
                let scale = Self::zoom_scale(self.options.zoom.speed);
                if spread > self.dolly_start.y {
                    self.dolly_in(scale);
                } else if spread < self.dolly_start.y {
                    self.dolly_out(scale);
                }
                self.dolly_start = Vec2::new(0.0, spread);
                self.update();
            }
            _ => {
                log::debug!("{} touches, gesture cancelled", touches.len());
                self.state = ControlState::None;
            }
        }
        true
    }

    fn on_touch_end(&mut self) -> bool {
        if !self.options.enabled {
            return false;
        }
        log::debug!("{:?} touch gesture ended", self.state);
        self.events.emit(ControlEvent::End);
        self.state = ControlState::None;
        false
    }

    // ── Keyboard ──

    fn on_key_down(&mut self, key: &str) -> bool {
        if !self.options.enabled || !self.options.keybindings.enabled {
            return false;
        }
        let Some(action) = self.options.keybindings.lookup(key) else {
            return false;
        };
        if action.is_pan() && !self.options.pan.enabled {
            return false;
        }
        if !action.is_pan() && !self.options.zoom.enabled {
            return false;
        }

        let step = self.options.keybindings.pan_speed;
        let scale = Self::zoom_scale(self.options.key_zoom_speed());
        match action {
            KeyAction::PanUp => self.pan(Vec2::new(0.0, step)),
            KeyAction::PanDown => self.pan(Vec2::new(0.0, -step)),
            KeyAction::PanLeft => self.pan(Vec2::new(step, 0.0)),
            KeyAction::PanRight => self.pan(Vec2::new(-step, 0.0)),
            KeyAction::ZoomIn => self.dolly_in(scale),
            KeyAction::ZoomOut => self.dolly_out(scale),
        }
        self.update();
        true
    }
}
