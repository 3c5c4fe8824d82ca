// RustPixel Range
// copyright zipxing@hotmail.com 2022～2025

//! Utilities: float points and rects used by widget geometry,
//! and the generic min-max `Range`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

mod range;
pub use range::*;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF32 {
    pub x: f32,
    pub y: f32,
}

impl PointF32 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for PointF32 {
    type Output = PointF32;

    fn add(self, other: PointF32) -> PointF32 {
        PointF32::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for PointF32 {
    type Output = PointF32;

    fn sub(self, other: PointF32) -> PointF32 {
        PointF32::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis aligned rectangle in pixels (screen space) or local units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(self) -> f32 {
        self.x
    }

    pub fn right(self) -> f32 {
        self.x + self.width
    }

    pub fn top(self) -> f32 {
        self.y
    }

    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    pub fn position(self) -> PointF32 {
        PointF32::new(self.x, self.y)
    }

    pub fn size(self) -> PointF32 {
        PointF32::new(self.width, self.height)
    }

    /// Half-open containment: left and top edges are inside, right and bottom are not.
    pub fn contains(self, p: PointF32) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}
