// RustPixel Range UI - Label Component
// copyright zipxing@hotmail.com 2022～2025

//! Label component for displaying a single run of text.

use crate::context::Context;
use crate::impl_widget_base;
use crate::render::{Color, DrawList};
use crate::ui::{next_widget_id, BaseWidget, UIEvent, UIResult, Widget, WidgetId, WidgetState};
use crate::util::{PointF32, Rect};

/// Label widget for displaying text
pub struct Label {
    base: BaseWidget,
    text: String,
    text_color: Color,
    shadow_color: Color,
    /// Offset from the parent origin, in the parent's local units
    position: PointF32,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            base: BaseWidget::new(next_widget_id()),
            text: text.to_string(),
            text_color: Color::WHITE,
            shadow_color: Color::BLACK,
            position: PointF32::default(),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.mark_dirty();
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        self.mark_dirty();
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        self.shadow_color = color;
        self.mark_dirty();
    }

    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    pub fn set_position(&mut self, position: PointF32) {
        self.position = position;
        self.mark_dirty();
    }

    pub fn position(&self) -> PointF32 {
        self.position
    }

    /// Draw at an explicit screen position, used by parents that own the label.
    pub fn draw_at(&self, dl: &mut DrawList, screen: PointF32) {
        if !self.state().visible || self.text.is_empty() {
            return;
        }
        dl.draw_text(screen, &self.text, self.text_color, self.shadow_color);
    }
}

impl Widget for Label {
    impl_widget_base!(Label, base);

    fn render(&self, dl: &mut DrawList, _ctx: &Context) -> UIResult<()> {
        self.draw_at(dl, self.base.bounds.position() + self.position);
        Ok(())
    }

    fn handle_event(&mut self, _event: &UIEvent, _ctx: &mut Context) -> UIResult<bool> {
        // Labels don't handle events
        Ok(false)
    }
}
