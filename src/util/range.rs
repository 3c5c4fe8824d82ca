// RustPixel Range
// copyright zipxing@hotmail.com 2022～2025

//! A range of values defined by a min and a max.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// Closed interval `[min, max]` over any ordered value.
///
/// The fields are public and may be mutated freely; `is_valid` tells
/// whether the pair currently describes a non-empty interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Min and max define a valid range.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Checks if the given value is inside this range (bounds included).
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && self.max >= value
    }

    /// Checks if the given range is inside or equal to this one.
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    /// Overlapping part of both ranges, `None` when they are disjoint.
    pub fn intersection(&self, other: &Range<T>) -> Option<Range<T>> {
        let min = if self.min >= other.min { self.min } else { other.min };
        let max = if self.max <= other.max { self.max } else { other.max };
        let r = Range::new(min, max);
        if r.is_valid() {
            Some(r)
        } else {
            None
        }
    }

    pub fn map<U, F>(self, mut f: F) -> Range<U>
    where
        F: FnMut(T) -> U,
    {
        Range {
            min: f(self.min),
            max: f(self.max),
        }
    }
}

impl<T: Sub<Output = T> + Copy> Range<T> {
    /// Distance between max and min.
    pub fn span(&self) -> T {
        self.max - self.min
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Min: {}, Max: {}", self.min, self.max)
    }
}
