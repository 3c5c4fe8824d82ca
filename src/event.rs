// RustPixel Range
// copyright zipxing@hotmail.com 2022～2025

//! Input events and the polled pointer state.
//!
//! Engine backends translate their native mouse input into `Event` values for
//! event-driven handling (scroll wheel), and fill a `PointerState` once per
//! frame for widgets that poll the pointer while dragging.

use crate::util::PointF32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    Moved,
    ScrollUp,
    ScrollDown,
}

/// Mouse event in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: f32,
    pub y: f32,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    pub fn position(&self) -> PointF32 {
        PointF32::new(self.x, self.y)
    }
}

/// Unified input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Mouse(MouseEvent),
}

/// Snapshot of the pointer for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Screen position in pixels
    pub position: PointF32,
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: PointF32::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: MouseButton, held: bool) -> Self {
        match button {
            MouseButton::Left => self.left = held,
            MouseButton::Right => self.right = held,
            MouseButton::Middle => self.middle = held,
        }
        self
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    /// Fold a mouse event into the snapshot.
    pub fn apply(&mut self, event: &MouseEvent) {
        match event.kind {
            MouseEventKind::Down(b) | MouseEventKind::Drag(b) => {
                *self = self.with_button(b, true);
            }
            MouseEventKind::Up(b) => {
                *self = self.with_button(b, false);
            }
            MouseEventKind::Moved | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {}
        }
        self.position = event.position();
    }
}
