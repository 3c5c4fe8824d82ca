// RustPixel Range UI
// copyright zipxing@hotmail.com 2022～2025

//! # UI
//!
//! A small retained widget layer for in-game panels.
//!
//! ## Core Concepts
//!
//! - **Widget**: basic UI component trait, polled once per frame
//! - **Event**: input events routed to widgets (scroll wheel, clicks)
//! - **Theme**: serde loadable visual configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use pixel_range::ui::*;
//! use pixel_range::util::{Range, Rect};
//!
//! let mut slider = RangeSlider::new(Range::new(0, 100), Some(Range::new(20, 80)), 2)
//!     .with_indicator()
//!     .on_scroll(|r| println!("selected {}", r));
//! slider.set_bounds(Rect::new(0.0, 0.0, 200.0, 10.0));
//!
//! let mut app = UIApp::new();
//! app.set_root_widget(Box::new(slider));
//! app.update(0.016).unwrap();
//! app.render().unwrap();
//! ```

pub mod app;
pub mod components;
pub mod event;
pub mod theme;
pub mod widget;

pub use app::*;
pub use components::*;
pub use event::*;
pub use theme::*;
pub use widget::*;

use crate::util::Range;

/// UI Framework result type
pub type UIResult<T> = Result<T, UIError>;

/// UI Framework error types
#[derive(Debug, Clone, PartialEq)]
pub enum UIError {
    /// Selection range found outside its limits at the start of an update
    RangeOutsideLimits { range: Range<i32>, limits: Range<i32> },
    /// A value could not be represented (non-finite or out of range)
    InvalidValue(String),
    /// Theme error
    ThemeError(String),
}

impl std::fmt::Display for UIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UIError::RangeOutsideLimits { range, limits } => write!(
                f,
                "Range is outside limits: range ({}) limits ({})",
                range, limits
            ),
            UIError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            UIError::ThemeError(msg) => write!(f, "Theme error: {}", msg),
        }
    }
}

impl std::error::Error for UIError {}
