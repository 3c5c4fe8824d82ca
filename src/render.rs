// RustPixel Range
// copyright zipxing@hotmail.com 2022～2025

//! # Render module
//!
//! Widgets do not talk to a GPU or terminal directly. They record draw
//! commands into a `DrawList`, which the engine backend replays each frame.
//!
//! ## Submodules
//! - `style`: colours used for tints and text
//! - `draw_list`: retained draw commands (texture rects, text)

pub mod draw_list;
pub mod style;

pub use draw_list::{DrawCommand, DrawList, ScaleMode, Texture};
pub use style::Color;
