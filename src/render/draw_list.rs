// RustPixel Range
// copyright zipxing@hotmail.com 2022～2025

//! DrawList is the render target handed to widgets.
//!
//! It keeps the commands in submission order so a backend can replay them
//! (stretching a texture over a screen rect, drawing a text run) and so
//! tests can inspect exactly what a widget drew.

use crate::render::style::Color;
use crate::util::{PointF32, Rect};

/// Textures a widget may reference. Backends map them to real GPU textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// 1x1 white texel, tinted to draw filled rectangles
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    StretchToFill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Texture {
        rect: Rect,
        texture: Texture,
        scale_mode: ScaleMode,
        color: Color,
    },
    Text {
        position: PointF32,
        text: String,
        color: Color,
        shadow: Option<Color>,
    },
}

#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_texture(
        &mut self,
        rect: Rect,
        texture: Texture,
        scale_mode: ScaleMode,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Texture {
            rect,
            texture,
            scale_mode,
            color,
        });
    }

    /// Filled rectangle: white texture stretched and tinted.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_texture(rect, Texture::White, ScaleMode::StretchToFill, color);
    }

    /// Text run at a screen position. A transparent shadow is skipped.
    pub fn draw_text(&mut self, position: PointF32, text: &str, color: Color, shadow: Color) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            color,
            shadow: if shadow.is_transparent() { None } else { Some(shadow) },
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Rects of all texture commands, in draw order.
    pub fn texture_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Texture { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Strings of all text commands, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_in_order() {
        let mut dl = DrawList::new();
        dl.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE);
        dl.draw_text(PointF32::new(1.0, 1.0), "hi", Color::WHITE, Color::CLEAR);
        assert_eq!(dl.len(), 2);
        assert_eq!(dl.texture_rects(), vec![Rect::new(0.0, 0.0, 4.0, 4.0)]);
        assert_eq!(dl.texts(), vec!["hi"]);
        match &dl.commands()[1] {
            DrawCommand::Text { shadow, .. } => assert!(shadow.is_none()),
            other => panic!("unexpected command {:?}", other),
        }
        dl.clear();
        assert!(dl.is_empty());
    }
}
