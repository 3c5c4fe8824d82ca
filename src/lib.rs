// RustPixel Range
// copyright zipxing@hotmail.com 2022～2025

//! A min-max range slider widget for in-game panels, and the generic
//! `Range` value type it is built on.
//!
//! The slider keeps two thumbs (min and max) individually draggable inside an
//! outer `limits` range, converts pixel drag distances into clamped integer
//! values, and records three tinted texture slices plus an optional text
//! indicator into a `DrawList` each frame.
//!
//! The engine side is kept behind small seams: widgets read a polled
//! `PointerState` from `Context`, receive scroll wheel events as `UIEvent`s,
//! and draw into a `DrawList` the backend replays.

/// per-frame state handed to widgets: pointer snapshot and queued input
pub mod context;

/// input events and the polled pointer state
pub mod event;

/// log
pub mod log;

/// colours, textures and the retained draw list
pub mod render;

/// widget trait, range slider, label, theme and frame driver
pub mod ui;

/// Range, rect and point types
pub mod util;
