// RustPixel Range UI - Event System
// copyright zipxing@hotmail.com 2022～2025

//! UI event routing built on top of the input events.

use crate::context::Context;
use crate::event::Event as InputEvent;
use crate::ui::{UIResult, Widget};

/// UI-specific events
#[derive(Debug, Clone, PartialEq)]
pub enum UIEvent {
    /// Raw input event from the engine
    Input(InputEvent),
}

impl From<InputEvent> for UIEvent {
    fn from(event: InputEvent) -> Self {
        UIEvent::Input(event)
    }
}

/// Route queued input events to a widget, tracking hover on the way.
/// Returns how many events the widget consumed.
pub fn dispatch_input(widget: &mut dyn Widget, ctx: &mut Context) -> UIResult<usize> {
    let mut consumed = 0;
    for event in ctx.drain_events() {
        let InputEvent::Mouse(me) = event;
        widget.state_mut().hovered = widget.hit_test(me.position());
        if widget.handle_event(&UIEvent::Input(event), ctx)? {
            consumed += 1;
        }
    }
    Ok(consumed)
}
