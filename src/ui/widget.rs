// RustPixel Range UI - Widget System
// copyright zipxing@hotmail.com 2022～2025

//! Core widget system defining the base traits and behaviors for all UI components.

use crate::context::Context;
use crate::render::{Color, DrawList};
use crate::ui::{UIEvent, UIResult};
use crate::util::{PointF32, Rect};
use std::any::Any;

/// Unique identifier for widgets
pub type WidgetId = u32;

/// Widget state flags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetState {
    pub visible: bool,
    pub enabled: bool,
    pub hovered: bool,
    pub dirty: bool, // needs redraw
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
            hovered: false,
            dirty: true,
        }
    }
}

/// Core trait that all UI widgets must implement
pub trait Widget: Any {
    /// Get widget's unique identifier
    fn id(&self) -> WidgetId;

    /// Get widget's screen rectangle in pixels
    fn bounds(&self) -> Rect;

    /// Set widget's screen rectangle
    fn set_bounds(&mut self, bounds: Rect);

    /// Get widget's current state
    fn state(&self) -> &WidgetState;

    /// Get mutable widget state
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Record draw commands for this frame
    fn render(&self, dl: &mut DrawList, ctx: &Context) -> UIResult<()>;

    /// Handle input events, returns true when consumed
    fn handle_event(&mut self, event: &UIEvent, ctx: &mut Context) -> UIResult<bool>;

    /// Update widget logic (called every frame)
    fn update(&mut self, _dt: f32, _ctx: &mut Context) -> UIResult<()> {
        Ok(())
    }

    /// Check if a screen point is inside widget bounds
    fn hit_test(&self, p: PointF32) -> bool {
        self.bounds().contains(p)
    }

    /// Set widget visibility
    fn set_visible(&mut self, visible: bool) {
        self.state_mut().visible = visible;
        self.state_mut().dirty = true;
    }

    /// Set widget enabled state
    fn set_enabled(&mut self, enabled: bool) {
        self.state_mut().enabled = enabled;
        self.state_mut().dirty = true;
    }

    /// Mark widget as dirty (needs redraw)
    fn mark_dirty(&mut self) {
        self.state_mut().dirty = true;
    }

    /// Clear dirty flag
    fn clear_dirty(&mut self) {
        self.state_mut().dirty = false;
    }

    /// Check if widget is dirty
    fn is_dirty(&self) -> bool {
        self.state().dirty
    }

    /// Get widget as Any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Get mutable widget as Any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Base widget implementation with common functionality.
///
/// `bounds` is the screen rectangle in pixels. `local_scale` is the number of
/// screen pixels per local unit, so a widget sized 100 local units at scale 2
/// covers 200 pixels. Children and drag maths work in local units.
pub struct BaseWidget {
    pub id: WidgetId,
    pub bounds: Rect,
    pub state: WidgetState,
    pub local_scale: PointF32,
    pub background_color: Option<Color>,
}

impl BaseWidget {
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            bounds: Rect::default(),
            state: WidgetState::default(),
            local_scale: PointF32::new(1.0, 1.0),
            background_color: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Size in local units.
    pub fn size(&self) -> PointF32 {
        PointF32::new(
            self.bounds.width / self.local_scale.x,
            self.bounds.height / self.local_scale.y,
        )
    }

    pub fn screen_to_local(&self, p: PointF32) -> PointF32 {
        PointF32::new(
            (p.x - self.bounds.x) / self.local_scale.x,
            (p.y - self.bounds.y) / self.local_scale.y,
        )
    }

    pub fn local_to_screen(&self, p: PointF32) -> PointF32 {
        PointF32::new(
            self.bounds.x + p.x * self.local_scale.x,
            self.bounds.y + p.y * self.local_scale.y,
        )
    }

    pub fn rect_screen_to_local(&self, r: Rect) -> Rect {
        let p = self.screen_to_local(r.position());
        Rect::new(
            p.x,
            p.y,
            r.width / self.local_scale.x,
            r.height / self.local_scale.y,
        )
    }

    /// Fill the widget rectangle with the background tint, if any.
    pub fn draw_background(&self, dl: &mut DrawList) {
        if let Some(color) = self.background_color {
            dl.fill_rect(self.bounds, color);
        }
    }
}

/// Widget ID generator (thread-safe)
use std::sync::atomic::{AtomicU32, Ordering};

static WIDGET_ID_COUNTER: AtomicU32 = AtomicU32::new(1);

pub fn next_widget_id() -> WidgetId {
    WIDGET_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Helper macro for widget boilerplate
#[macro_export]
macro_rules! impl_widget_base {
    ($widget:ty, $base_field:ident) => {
        fn id(&self) -> WidgetId {
            self.$base_field.id
        }

        fn bounds(&self) -> Rect {
            self.$base_field.bounds
        }

        fn set_bounds(&mut self, bounds: Rect) {
            self.$base_field.bounds = bounds;
            self.$base_field.state.dirty = true;
        }

        fn state(&self) -> &WidgetState {
            &self.$base_field.state
        }

        fn state_mut(&mut self) -> &mut WidgetState {
            &mut self.$base_field.state
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}
