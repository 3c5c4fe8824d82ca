// RustPixel Range UI - Application Framework
// copyright zipxing@hotmail.com 2022～2025

//! Frame driver: owns the root widget, the per-frame context and the draw list.
//!
//! A backend feeds input with `handle_input_event` / `set_pointer`, then calls
//! `update` and `render` once per frame and replays `draw_list()`.

use crate::context::Context;
use crate::event::{Event as InputEvent, PointerState};
use crate::render::DrawList;
use crate::ui::{dispatch_input, UIResult, Widget};

/// Main UI application structure
#[derive(Default)]
pub struct UIApp {
    root_widget: Option<Box<dyn Widget>>,
    context: Context,
    draw_list: DrawList,
}

impl UIApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_root_widget(&mut self, widget: Box<dyn Widget>) {
        self.root_widget = Some(widget);
    }

    /// Downcast the root widget to its concrete type.
    pub fn root_as<T: Widget>(&self) -> Option<&T> {
        self.root_widget.as_ref()?.as_any().downcast_ref::<T>()
    }

    pub fn root_as_mut<T: Widget>(&mut self) -> Option<&mut T> {
        self.root_widget.as_mut()?.as_any_mut().downcast_mut::<T>()
    }

    pub fn handle_input_event(&mut self, input_event: InputEvent) {
        self.context.push_event(input_event);
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.context.set_pointer(pointer);
    }

    /// Route queued input, then tick the root widget.
    pub fn update(&mut self, dt: f32) -> UIResult<()> {
        if let Some(ref mut root) = self.root_widget {
            dispatch_input(root.as_mut(), &mut self.context)?;
            root.update(dt, &mut self.context)?;
        } else {
            self.context.input_events.clear();
        }
        Ok(())
    }

    pub fn render(&mut self) -> UIResult<()> {
        self.draw_list.clear();
        if let Some(ref mut root) = self.root_widget {
            root.render(&mut self.draw_list, &self.context)?;
            root.clear_dirty();
        }
        Ok(())
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}
