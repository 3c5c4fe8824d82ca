// RustPixel Range UI - Components
// copyright zipxing@hotmail.com 2022～2025

//! UI components.

pub mod label;
pub mod range_slider;

// Re-exports
pub use label::*;
pub use range_slider::*;
