// RustPixel Range
// copyright zipxing@hotmail.com 2022～2025

//! Context carries the per-frame state handed to widgets:
//! the polled pointer and the input events queued since the last frame.

use crate::event::{Event, PointerState};

#[derive(Debug, Default)]
pub struct Context {
    pub pointer: PointerState,
    pub input_events: Vec<Event>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pointer snapshot for the next frame.
    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Queue an input event and keep the pointer snapshot in sync.
    pub fn push_event(&mut self, event: Event) {
        match &event {
            Event::Mouse(me) => self.pointer.apply(me),
        }
        self.input_events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.input_events.drain(..).collect()
    }
}
