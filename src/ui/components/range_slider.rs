// RustPixel Range UI - RangeSlider Component
// copyright zipxing@hotmail.com 2022～2025

//! RangeSlider component - a horizontal min-max slider clamped inside limits.
//!
//! All arithmetic runs on integers. The float flavour scales every value by
//! `10^decimals` at construction and divides back only for display, so the
//! clamping and drag maths are shared by both flavours.
//!
//! The selection window is drawn as three slices (left cap, body, right cap).
//! A narrow grip at each end of the window drags the min or max bound; the
//! two grips run independent `ThumbDrag` state machines each frame.

use crate::context::Context;
use crate::event::{Event as InputEvent, MouseButton, MouseEventKind};
use crate::impl_widget_base;
use crate::render::{Color, DrawList, ScaleMode, Texture};
use crate::ui::{
    next_widget_id, BaseWidget, Label, SliderTheme, UIError, UIEvent, UIResult, Widget, WidgetId,
    WidgetState,
};
use crate::util::{PointF32, Range, Rect};
use log::{debug, error, trace};
use num_traits::ToPrimitive;

/// Formats one scaled integer value for the indicator.
pub type FormatValue = Box<dyn Fn(i32) -> String>;

/// Called with the new selection after every clamped value change.
pub type ScrollCallback = Box<dyn FnMut(Range<i32>)>;

/// Drag state of one thumb grip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThumbDrag {
    #[default]
    Idle,
    Dragging {
        /// Pointer position in local units when the drag began
        start_position: PointF32,
        /// Thumb value when the drag began
        start_value: i32,
    },
}

impl ThumbDrag {
    pub fn is_dragging(&self) -> bool {
        matches!(self, ThumbDrag::Dragging { .. })
    }

    /// Advance one frame.
    ///
    /// `pointer` and `hit` are in local units, `local_per_unit` is the track
    /// length covered by one value unit.
    /// Returns the unclamped value the thumb should take this frame, or
    /// `None` when the thumb is idle.
    pub fn tick(
        &mut self,
        held: bool,
        pointer: PointF32,
        hit: Rect,
        current: i32,
        local_per_unit: f32,
    ) -> Option<i32> {
        if !held {
            *self = ThumbDrag::Idle;
            return None;
        }
        if let ThumbDrag::Idle = self {
            if !hit.contains(pointer) {
                return None;
            }
            *self = ThumbDrag::Dragging {
                start_position: pointer,
                start_value: current,
            };
        }
        match *self {
            ThumbDrag::Dragging {
                start_position,
                start_value,
            } => {
                let moved = units_moved(pointer.x - start_position.x, local_per_unit);
                Some(start_value.saturating_add(moved))
            }
            ThumbDrag::Idle => None,
        }
    }
}

/// Whole units covered by a drag distance, truncated toward zero.
/// A non-finite quotient (zero-width track, empty limits) yields 0.
fn units_moved(distance: f32, local_per_unit: f32) -> i32 {
    let units = distance / local_per_unit;
    if units.is_finite() {
        units as i32
    } else {
        0
    }
}

/// Thumb layout for one frame, derived from range, limits and widget rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    /// Width of the selection window in pixels
    pub thumb_width: f32,
    /// Width of each grip at the window ends
    pub side_width: f32,
    /// Left edge of the window, pixels from the track start
    pub x_min: f32,
    /// Right edge of the window, pixels from the track start
    pub x_max: f32,
    /// Min grip hit rect, local units
    pub hit_min: Rect,
    /// Max grip hit rect, local units
    pub hit_max: Rect,
    /// Slices in screen space
    pub left: Rect,
    pub body: Rect,
    pub right: Rect,
}

impl ThumbGeometry {
    pub fn compute(
        range: Range<i32>,
        limits: Range<i32>,
        base: &BaseWidget,
        theme: &SliderTheme,
    ) -> Self {
        let display_units = range.map(i64::from).span();
        let total_units = limits.map(i64::from).span();
        let scroll_left = i64::from(range.min) - i64::from(limits.min);
        let scroll_right = total_units - (i64::from(limits.max) - i64::from(range.max));

        let track = base.bounds;
        let ratio = if total_units == 0 {
            1.0
        } else {
            display_units as f32 / total_units as f32
        };
        let thumb_width = (track.width * ratio).max(theme.min_thumb_width);
        let side_width = thumb_width * 0.1;

        // Full selection leaves no travel, pin the window to both track ends.
        let (x_min, x_max) = if total_units == display_units {
            (0.0, track.width)
        } else {
            let free = track.width - thumb_width;
            let travel = (total_units - display_units) as f32;
            (
                scroll_left as f32 * free / travel,
                scroll_right as f32 * free / travel,
            )
        };

        let hit_min = base.rect_screen_to_local(Rect::new(
            track.x + x_min,
            track.y,
            side_width,
            track.height,
        ));
        let hit_max = base.rect_screen_to_local(Rect::new(
            track.x + x_max - side_width,
            track.y,
            side_width,
            track.height,
        ));

        let cap = theme.cap_width * base.local_scale.x;
        let left = Rect::new(track.x + x_min, track.y, cap, track.height);
        let right = Rect::new(track.x + x_max - cap, track.y, cap, track.height);
        let body = Rect::new(left.right(), track.y, right.right() - left.right(), track.height);

        Self {
            thumb_width,
            side_width,
            x_min,
            x_max,
            hit_min,
            hit_max,
            left,
            body,
            right,
        }
    }
}

/// A slider for a min-max range clamped inside lower and upper limits.
pub struct RangeSlider {
    base: BaseWidget,
    range: Range<i32>,
    limits: Range<i32>,
    tint_color: Option<Color>,
    theme: SliderTheme,
    indicator_offset: i32,
    geometry: ThumbGeometry,
    drag_min: ThumbDrag,
    drag_max: ThumbDrag,
    indicator: Option<Label>,
    /// Last position derived from the offset and the widget size
    indicator_anchor: PointF32,
    format_value: FormatValue,
    on_scroll: Option<ScrollCallback>,
}

impl RangeSlider {
    fn with_formatter(
        limits: Range<i32>,
        range: Option<Range<i32>>,
        format_value: FormatValue,
    ) -> Self {
        let theme = SliderTheme::default();
        Self {
            base: BaseWidget::new(next_widget_id()).with_background(theme.background_color),
            range: range.unwrap_or(limits),
            limits,
            tint_color: theme.tint_color,
            indicator_offset: theme.indicator_offset,
            theme,
            geometry: ThumbGeometry::default(),
            drag_min: ThumbDrag::Idle,
            drag_max: ThumbDrag::Idle,
            indicator: None,
            indicator_anchor: PointF32::default(),
            format_value,
            on_scroll: None,
        }
    }

    /// Slider over integer values, shown zero padded to `digits` digits.
    /// `range` defaults to the whole of `limits`.
    pub fn new(limits: Range<i32>, range: Option<Range<i32>>, digits: usize) -> Self {
        Self::with_formatter(limits, range, Box::new(move |v| format_padded(v, digits)))
    }

    /// Slider over float values with `decimals` decimal places.
    ///
    /// Values are stored as integers scaled by `10^decimals` and truncated
    /// toward zero, so `2.0` with one decimal is stored as `20`. Fails when a
    /// scaled value is not finite or does not fit in an `i32`.
    pub fn new_float(
        limits: Range<f32>,
        range: Option<Range<f32>>,
        decimals: u32,
    ) -> UIResult<Self> {
        let limits = float_to_int_range(limits, decimals)?;
        let range = match range {
            Some(r) => Some(float_to_int_range(r, decimals)?),
            None => None,
        };
        let divider = 10f64.powi(decimals as i32);
        let precision = decimals as usize;
        Ok(Self::with_formatter(
            limits,
            range,
            Box::new(move |v| format!("{:.*}", precision, v as f64 / divider)),
        ))
    }

    /// Create the indicator up front, white text without shadow.
    pub fn with_indicator(mut self) -> Self {
        let text_color = self.theme.indicator_text_color;
        let shadow_color = self.theme.indicator_shadow_color;
        let indicator = self.indicator();
        indicator.set_text_color(text_color);
        indicator.set_shadow_color(shadow_color);
        self
    }

    /// Apply visual configuration.
    pub fn with_theme(mut self, theme: SliderTheme) -> Self {
        self.base.background_color = Some(theme.background_color);
        self.tint_color = theme.tint_color;
        self.indicator_offset = theme.indicator_offset;
        self.theme = theme;
        self.place_indicator();
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    pub fn on_scroll<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Range<i32>) + 'static,
    {
        self.on_scroll = Some(Box::new(callback));
        self
    }

    pub fn set_on_scroll<F>(&mut self, callback: F)
    where
        F: FnMut(Range<i32>) + 'static,
    {
        self.on_scroll = Some(Box::new(callback));
    }

    /// Current selection (scaled integers for the float flavour).
    pub fn range(&self) -> Range<i32> {
        self.range
    }

    pub fn set_range(&mut self, range: Range<i32>) {
        self.range = range;
        self.update_indicator();
        self.mark_dirty();
    }

    pub fn limits(&self) -> Range<i32> {
        self.limits
    }

    pub fn set_limits(&mut self, limits: Range<i32>) {
        self.limits = limits;
        self.mark_dirty();
    }

    pub fn tint_color(&self) -> Option<Color> {
        self.tint_color
    }

    pub fn set_tint_color(&mut self, color: Option<Color>) {
        self.tint_color = color;
        self.mark_dirty();
    }

    pub fn set_local_scale(&mut self, scale: PointF32) {
        self.base.local_scale = scale;
        self.place_indicator();
        self.mark_dirty();
    }

    pub fn size(&self) -> PointF32 {
        self.base.size()
    }

    /// Value indicator, created on first access.
    pub fn indicator(&mut self) -> &mut Label {
        let id = self.base.id;
        let text = self.indicator_text();
        let position = self.indicator_position();
        if self.indicator.is_none() {
            self.indicator_anchor = position;
        }
        self.indicator.get_or_insert_with(|| {
            debug!("range slider {}: creating indicator", id);
            let mut label = Label::new(&text);
            label.set_position(position);
            label
        })
    }

    pub fn has_indicator(&self) -> bool {
        self.indicator.is_some()
    }

    /// Distance of the indicator from the slider. Negative is on the left.
    pub fn set_indicator_offset(&mut self, offset: i32) {
        self.indicator_offset = offset;
        self.indicator();
        self.place_indicator();
    }

    /// Selection as floats, dividing by `10^decimals`.
    pub fn get_range_as_float(&self, decimals: u32) -> Range<f32> {
        let divider = 10f32.powi(decimals as i32);
        self.range.map(|v| v as f32 / divider)
    }

    pub fn geometry(&self) -> &ThumbGeometry {
        &self.geometry
    }

    pub fn drag_state(&self) -> (ThumbDrag, ThumbDrag) {
        (self.drag_min, self.drag_max)
    }

    /// Move the min bound, clamped to `[limits.min, range.max]`.
    pub fn set_value_min(&mut self, value: i32) {
        self.range.min = value;
        if self.range.min < self.limits.min {
            self.range.min = self.limits.min;
        }
        if self.range.min > self.range.max {
            self.range.min = self.range.max;
        }
        self.update_indicator();
        self.notify_scroll();
    }

    /// Move the max bound, clamped to `[range.min, limits.max]`.
    pub fn set_value_max(&mut self, value: i32) {
        self.range.max = value;
        if self.range.max < self.range.min {
            self.range.max = self.range.min;
        }
        if self.range.max > self.limits.max {
            self.range.max = self.limits.max;
        }
        self.update_indicator();
        self.notify_scroll();
    }

    /// Pan the window one unit toward lower values.
    /// Does not fire `on_scroll`. Returns whether the window moved.
    pub fn scroll_up(&mut self) -> bool {
        if self.range.min > self.limits.min {
            self.range.min -= 1;
            self.range.max -= 1;
            self.update_indicator();
            self.mark_dirty();
            return true;
        }
        false
    }

    /// Pan the window one unit toward higher values.
    /// Does not fire `on_scroll`. Returns whether the window moved.
    pub fn scroll_down(&mut self) -> bool {
        if self.range.max < self.limits.max {
            self.range.min += 1;
            self.range.max += 1;
            self.update_indicator();
            self.mark_dirty();
            return true;
        }
        false
    }

    fn notify_scroll(&mut self) {
        self.mark_dirty();
        let range = self.range;
        if let Some(ref mut callback) = self.on_scroll {
            callback(range);
        }
    }

    fn indicator_text(&self) -> String {
        format!(
            "{}-{}",
            (self.format_value)(self.range.min),
            (self.format_value)(self.range.max)
        )
    }

    fn update_indicator(&mut self) {
        if self.indicator.is_some() {
            let text = self.indicator_text();
            if let Some(ref mut indicator) = self.indicator {
                indicator.set_text(&text);
            }
        }
    }

    fn indicator_position(&self) -> PointF32 {
        let offset = self.indicator_offset as f32;
        if offset >= 0.0 {
            PointF32::new(self.base.size().x + offset, 0.0)
        } else {
            PointF32::new(offset, 0.0)
        }
    }

    fn place_indicator(&mut self) {
        let position = self.indicator_position();
        self.indicator_anchor = position;
        if let Some(ref mut indicator) = self.indicator {
            indicator.set_position(position);
        }
    }

    /// Re-place the indicator only once the widget size moved its anchor,
    /// keeping any position set directly on the label.
    fn follow_indicator_anchor(&mut self) {
        if self.indicator.is_some() && self.indicator_position() != self.indicator_anchor {
            self.place_indicator();
        }
    }

    fn check_limits(&self) -> UIResult<()> {
        if !self.limits.contains_range(&self.range) {
            error!(
                "range slider {}: range ({}) outside limits ({})",
                self.base.id, self.range, self.limits
            );
            return Err(UIError::RangeOutsideLimits {
                range: self.range,
                limits: self.limits,
            });
        }
        Ok(())
    }
}

impl Widget for RangeSlider {
    impl_widget_base!(RangeSlider, base);

    fn update(&mut self, _dt: f32, ctx: &mut Context) -> UIResult<()> {
        self.check_limits()?;

        self.geometry = ThumbGeometry::compute(self.range, self.limits, &self.base, &self.theme);
        self.follow_indicator_anchor();

        let held = ctx.pointer.is_down(MouseButton::Left);
        let pointer = self.base.screen_to_local(ctx.pointer.position);
        let total_units = self.limits.map(i64::from).span() as f32;
        let local_per_unit = self.base.size().x / total_units;

        if let Some(v) = self.drag_min.tick(
            held,
            pointer,
            self.geometry.hit_min,
            self.range.min,
            local_per_unit,
        ) {
            self.set_value_min(v);
        }

        if let Some(v) = self.drag_max.tick(
            held,
            pointer,
            self.geometry.hit_max,
            self.range.max,
            local_per_unit,
        ) {
            self.set_value_max(v);
        }

        Ok(())
    }

    fn render(&self, dl: &mut DrawList, _ctx: &Context) -> UIResult<()> {
        if !self.state().visible {
            return Ok(());
        }

        self.base.draw_background(dl);

        let g = ThumbGeometry::compute(self.range, self.limits, &self.base, &self.theme);
        trace!(
            "range slider {}: range ({}) limits ({}) thumb {:.1}px at {:.1}..{:.1}",
            self.base.id,
            self.range,
            self.limits,
            g.thumb_width,
            g.x_min,
            g.x_max
        );

        let color = self.tint_color.unwrap_or(Color::WHITE);
        dl.draw_texture(g.left, Texture::White, ScaleMode::StretchToFill, color);
        dl.draw_texture(g.body, Texture::White, ScaleMode::StretchToFill, color);
        dl.draw_texture(g.right, Texture::White, ScaleMode::StretchToFill, color);

        if let Some(ref indicator) = self.indicator {
            indicator.draw_at(dl, self.base.local_to_screen(indicator.position()));
        }

        Ok(())
    }

    fn handle_event(&mut self, event: &UIEvent, _ctx: &mut Context) -> UIResult<bool> {
        if !self.state().enabled {
            return Ok(false);
        }

        let UIEvent::Input(InputEvent::Mouse(mouse_event)) = event;
        if !self.hit_test(mouse_event.position()) {
            return Ok(false);
        }
        match mouse_event.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_up();
                Ok(true)
            }
            MouseEventKind::ScrollDown => {
                self.scroll_down();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Zero padded integer with the sign kept outside the padding, `-05` for -5 at 2 digits.
fn format_padded(value: i32, digits: usize) -> String {
    if value < 0 {
        format!("-{:0width$}", value.unsigned_abs(), width = digits)
    } else {
        format!("{:0width$}", value, width = digits)
    }
}

fn float_to_int_range(range: Range<f32>, decimals: u32) -> UIResult<Range<i32>> {
    let multiplier = 10f32.powi(decimals as i32);
    let scale = |v: f32| {
        (v * multiplier)
            .to_i32()
            .ok_or_else(|| {
                UIError::InvalidValue(format!("{} does not fit with {} decimals", v, decimals))
            })
    };
    Ok(Range::new(scale(range.min)?, scale(range.max)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PointerState;
    use std::cell::Cell;
    use std::rc::Rc;

    fn slider(limits: (i32, i32), range: (i32, i32)) -> RangeSlider {
        RangeSlider::new(Range::new(limits.0, limits.1), Some(Range::new(range.0, range.1)), 2)
            .with_bounds(Rect::new(0.0, 0.0, 100.0, 10.0))
    }

    fn counted(s: RangeSlider) -> (RangeSlider, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (s.on_scroll(move |_| c.set(c.get() + 1)), count)
    }

    #[test]
    fn test_thumb_drag_transitions() {
        let hit = Rect::new(0.0, 0.0, 2.0, 10.0);
        let mut d = ThumbDrag::Idle;

        // Pressed outside the grip: stays idle
        assert_eq!(d.tick(true, PointF32::new(5.0, 5.0), hit, 10, 1.0), None);
        assert_eq!(d, ThumbDrag::Idle);

        // Pressed on the grip: starts and reports the current value
        assert_eq!(d.tick(true, PointF32::new(1.0, 5.0), hit, 10, 1.0), Some(10));
        assert!(d.is_dragging());

        // Keeps dragging even when the pointer leaves the grip
        assert_eq!(d.tick(true, PointF32::new(8.9, 0.0), hit, 99, 1.0), Some(17));

        // Release always ends the drag
        assert_eq!(d.tick(false, PointF32::new(1.0, 5.0), hit, 17, 1.0), None);
        assert_eq!(d, ThumbDrag::Idle);
    }

    #[test]
    fn test_units_moved_truncates_toward_zero() {
        assert_eq!(units_moved(2.9, 1.0), 2);
        assert_eq!(units_moved(-2.9, 1.0), -2);
        assert_eq!(units_moved(5.0, f32::INFINITY), 0);
        assert_eq!(units_moved(5.0, 0.0), 0);
        assert_eq!(units_moved(0.0, f32::NAN), 0);
    }

    #[test]
    fn test_set_value_min_clamps() {
        let (mut s, count) = counted(slider((0, 100), (20, 80)));
        s.set_value_min(-50);
        assert_eq!(s.range(), Range::new(0, 80));
        s.set_value_min(95);
        assert_eq!(s.range(), Range::new(80, 80));
        s.set_value_min(30);
        assert_eq!(s.range(), Range::new(30, 80));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_set_value_max_clamps() {
        let (mut s, count) = counted(slider((0, 100), (20, 80)));
        s.set_value_max(500);
        assert_eq!(s.range(), Range::new(20, 100));
        s.set_value_max(5);
        assert_eq!(s.range(), Range::new(20, 20));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_scroll_pans_without_notify() {
        let (mut s, count) = counted(slider((0, 100), (20, 80)));
        assert!(s.scroll_up());
        assert_eq!(s.range(), Range::new(19, 79));
        assert!(s.scroll_down());
        assert!(s.scroll_down());
        assert_eq!(s.range(), Range::new(21, 81));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_scroll_at_limits_is_noop() {
        let (mut s, count) = counted(slider((0, 100), (0, 50)));
        assert!(!s.scroll_up());
        assert_eq!(s.range(), Range::new(0, 50));

        s.set_range(Range::new(50, 100));
        assert!(!s.scroll_down());
        assert_eq!(s.range(), Range::new(50, 100));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_float_construction_scales() {
        let s =
            RangeSlider::new_float(Range::new(0.0, 10.0), Some(Range::new(2.0, 8.0)), 1).unwrap();
        assert_eq!(s.limits(), Range::new(0, 100));
        assert_eq!(s.range(), Range::new(20, 80));
        assert_eq!(s.get_range_as_float(1), Range::new(2.0, 8.0));
    }

    #[test]
    fn test_float_construction_truncates() {
        let s = RangeSlider::new_float(Range::new(-1.25, 1.25), None, 1).unwrap();
        assert_eq!(s.limits(), Range::new(-12, 12));
        assert_eq!(s.range(), s.limits());
    }

    #[test]
    fn test_float_construction_rejects_non_finite() {
        let err = RangeSlider::new_float(Range::new(0.0, f32::INFINITY), None, 1).err();
        assert!(matches!(err, Some(UIError::InvalidValue(_))));
        let err = RangeSlider::new_float(Range::new(0.0, 1.0e9), None, 3).err();
        assert!(matches!(err, Some(UIError::InvalidValue(_))));
    }

    #[test]
    fn test_indicator_text_formats() {
        let mut s = slider((-10, 100), (-5, 7));
        assert!(!s.has_indicator());
        assert_eq!(s.indicator().text(), "-05-07");

        let mut f =
            RangeSlider::new_float(Range::new(0.0, 10.0), Some(Range::new(2.0, 8.5)), 1).unwrap();
        assert_eq!(f.indicator().text(), "2.0-8.5");
        f.set_value_max(100);
        assert_eq!(f.indicator().text(), "2.0-10.0");
    }

    #[test]
    fn test_with_indicator_colors() {
        let mut s = slider((0, 10), (0, 10)).with_indicator();
        let ind = s.indicator();
        assert_eq!(ind.text_color(), Color::WHITE);
        assert_eq!(ind.shadow_color(), Color::CLEAR);

        let mut lazy = slider((0, 10), (0, 10));
        assert_eq!(lazy.indicator().shadow_color(), Color::BLACK);
    }

    #[test]
    fn test_indicator_offset() {
        let mut s = slider((0, 10), (0, 10));
        assert_eq!(s.indicator().position(), PointF32::new(115.0, 0.0));
        s.set_indicator_offset(-30);
        assert_eq!(s.indicator().position(), PointF32::new(-30.0, 0.0));
        s.set_indicator_offset(0);
        assert_eq!(s.indicator().position(), PointF32::new(100.0, 0.0));
    }

    #[test]
    fn test_indicator_keeps_caller_position() {
        let mut s = slider((0, 100), (40, 60));
        let mut ctx = Context::new();
        s.indicator().set_position(PointF32::new(0.0, -12.0));
        s.update(0.016, &mut ctx).unwrap();
        s.update(0.016, &mut ctx).unwrap();
        assert_eq!(s.indicator().position(), PointF32::new(0.0, -12.0));

        // A new size moves the anchor, so the offset applies again
        s.set_bounds(Rect::new(0.0, 0.0, 150.0, 10.0));
        s.update(0.016, &mut ctx).unwrap();
        assert_eq!(s.indicator().position(), PointF32::new(165.0, 0.0));

        s.indicator().set_position(PointF32::new(3.0, 3.0));
        s.update(0.016, &mut ctx).unwrap();
        assert_eq!(s.indicator().position(), PointF32::new(3.0, 3.0));

        s.set_indicator_offset(-10);
        assert_eq!(s.indicator().position(), PointF32::new(-10.0, 0.0));
    }

    #[test]
    fn test_indicator_created_before_bounds() {
        let mut s = RangeSlider::new(Range::new(0, 10), None, 2).with_indicator();
        assert_eq!(s.indicator().position(), PointF32::new(15.0, 0.0));
        s.set_bounds(Rect::new(0.0, 0.0, 80.0, 10.0));
        s.update(0.016, &mut Context::new()).unwrap();
        assert_eq!(s.indicator().position(), PointF32::new(95.0, 0.0));
    }

    #[test]
    fn test_geometry_partial_selection() {
        let s = slider((0, 100), (40, 60));
        let g = ThumbGeometry::compute(s.range(), s.limits(), &s.base, &s.theme);
        assert_eq!(g.thumb_width, 20.0);
        assert_eq!(g.side_width, 2.0);
        assert_eq!(g.x_min, 40.0);
        assert_eq!(g.x_max, 60.0);
        assert_eq!(g.hit_min, Rect::new(40.0, 0.0, 2.0, 10.0));
        assert_eq!(g.hit_max, Rect::new(58.0, 0.0, 2.0, 10.0));
        assert_eq!(g.left, Rect::new(40.0, 0.0, 1.0, 10.0));
        assert_eq!(g.right, Rect::new(59.0, 0.0, 1.0, 10.0));
        assert_eq!(g.body, Rect::new(41.0, 0.0, 19.0, 10.0));
    }

    #[test]
    fn test_geometry_full_selection_pins_to_ends() {
        for width in [0.0, 1.0, 37.0, 640.0] {
            let s = RangeSlider::new(Range::new(0, 100), None, 2)
                .with_bounds(Rect::new(10.0, 0.0, width, 10.0));
            let g = ThumbGeometry::compute(s.range(), s.limits(), &s.base, &s.theme);
            assert_eq!(g.x_min, 0.0);
            assert_eq!(g.x_max, width);
            assert!(g.thumb_width.is_finite());
        }
    }

    #[test]
    fn test_geometry_empty_limits() {
        let s = slider((5, 5), (5, 5));
        let g = ThumbGeometry::compute(s.range(), s.limits(), &s.base, &s.theme);
        assert_eq!(g.thumb_width, 100.0);
        assert_eq!((g.x_min, g.x_max), (0.0, 100.0));
    }

    #[test]
    fn test_geometry_minimum_thumb_width() {
        let s = RangeSlider::new(Range::new(0, 1000), Some(Range::new(500, 501)), 2)
            .with_bounds(Rect::new(0.0, 0.0, 100.0, 10.0));
        let g = ThumbGeometry::compute(s.range(), s.limits(), &s.base, &s.theme);
        assert_eq!(g.thumb_width, 10.0);
        assert_eq!(g.side_width, 1.0);
    }

    #[test]
    fn test_geometry_with_local_scale() {
        let mut s = RangeSlider::new(Range::new(0, 100), Some(Range::new(0, 50)), 2)
            .with_bounds(Rect::new(100.0, 0.0, 200.0, 20.0));
        s.set_local_scale(PointF32::new(2.0, 2.0));
        let g = ThumbGeometry::compute(s.range(), s.limits(), &s.base, &s.theme);
        assert_eq!(g.thumb_width, 100.0);
        assert_eq!(g.hit_min, Rect::new(0.0, 0.0, 5.0, 10.0));
        assert_eq!(g.left.width, 2.0);
    }

    #[test]
    fn test_update_rejects_range_outside_limits() {
        let mut s = slider((0, 100), (-1, 50));
        let mut ctx = Context::new();
        let err = s.update(0.016, &mut ctx).unwrap_err();
        assert_eq!(
            err,
            UIError::RangeOutsideLimits {
                range: Range::new(-1, 50),
                limits: Range::new(0, 100),
            }
        );
    }

    #[test]
    fn test_update_drags_min_thumb() {
        let (mut s, count) = counted(slider((0, 100), (40, 60)));
        let mut ctx = Context::new();

        // First frame lays out thumbs with no button held
        s.update(0.016, &mut ctx).unwrap();
        assert_eq!(count.get(), 0);
        assert_eq!(s.geometry().hit_min, Rect::new(40.0, 0.0, 2.0, 10.0));
        assert_eq!(s.geometry().hit_max, Rect::new(58.0, 0.0, 2.0, 10.0));

        ctx.set_pointer(PointerState::new(41.0, 5.0).with_button(MouseButton::Left, true));
        s.update(0.016, &mut ctx).unwrap();
        assert!(s.drag_state().0.is_dragging());
        assert!(!s.drag_state().1.is_dragging());
        assert_eq!(s.range(), Range::new(40, 60));
        assert_eq!(count.get(), 1);

        ctx.set_pointer(PointerState::new(31.5, 5.0).with_button(MouseButton::Left, true));
        s.update(0.016, &mut ctx).unwrap();
        assert_eq!(s.range(), Range::new(31, 60));
        assert_eq!(count.get(), 2);

        ctx.set_pointer(PointerState::new(31.5, 5.0));
        s.update(0.016, &mut ctx).unwrap();
        assert_eq!(s.drag_state(), (ThumbDrag::Idle, ThumbDrag::Idle));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_render_three_slices_with_tint() {
        let mut s = slider((0, 100), (40, 60));
        let mut dl = DrawList::new();
        s.render(&mut dl, &Context::new()).unwrap();
        // background + left + body + right
        assert_eq!(dl.len(), 4);
        assert_eq!(
            dl.texture_rects()[1..],
            [
                Rect::new(40.0, 0.0, 1.0, 10.0),
                Rect::new(41.0, 0.0, 19.0, 10.0),
                Rect::new(59.0, 0.0, 1.0, 10.0),
            ]
        );

        s.set_tint_color(None);
        dl.clear();
        s.render(&mut dl, &Context::new()).unwrap();
        match &dl.commands()[1] {
            crate::render::DrawCommand::Texture { color, .. } => assert_eq!(*color, Color::WHITE),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_scroll_events_need_hit() {
        let mut s = slider((0, 100), (20, 80));
        let mut ctx = Context::new();
        let over = UIEvent::from(InputEvent::Mouse(crate::event::MouseEvent::new(
            MouseEventKind::ScrollUp,
            50.0,
            5.0,
        )));
        let outside = UIEvent::from(InputEvent::Mouse(crate::event::MouseEvent::new(
            MouseEventKind::ScrollDown,
            150.0,
            5.0,
        )));
        assert!(s.handle_event(&over, &mut ctx).unwrap());
        assert!(!s.handle_event(&outside, &mut ctx).unwrap());
        assert_eq!(s.range(), Range::new(19, 79));
    }

    #[test]
    fn test_with_theme() {
        let theme = SliderTheme {
            tint_color: None,
            indicator_offset: -20,
            min_thumb_width: 30.0,
            ..SliderTheme::default()
        };
        let mut s = slider((0, 100), (40, 50)).with_theme(theme);
        assert_eq!(s.tint_color(), None);
        assert_eq!(s.indicator().position(), PointF32::new(-20.0, 0.0));
        let g = ThumbGeometry::compute(s.range(), s.limits(), &s.base, &s.theme);
        assert_eq!(g.thumb_width, 30.0);
    }

    #[test]
    fn test_set_on_scroll_reports_range() {
        let mut s = slider((0, 100), (40, 60));
        let seen = Rc::new(Cell::new(Range::new(0, 0)));
        let r = seen.clone();
        s.set_on_scroll(move |range| r.set(range));
        s.set_value_max(70);
        assert_eq!(seen.get(), Range::new(40, 70));
        assert_eq!(s.size(), PointF32::new(100.0, 10.0));
    }

    #[test]
    fn test_format_padded() {
        assert_eq!(format_padded(5, 2), "05");
        assert_eq!(format_padded(123, 2), "123");
        assert_eq!(format_padded(-5, 3), "-005");
        assert_eq!(format_padded(0, 0), "0");
    }
}
