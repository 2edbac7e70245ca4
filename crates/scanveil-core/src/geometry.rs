//! Rectangles in the parent surface's coordinate space.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with origin at its top-left corner
///
/// Width and height are never negative once a rect has passed through
/// [`ScanRect::normalized`]; the overlay normalizes every rect it is given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScanRect {
    pub const ZERO: ScanRect = ScanRect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Replace non-finite coordinates and negative sizes with zero
    pub fn normalized(self) -> Self {
        Self {
            x: finite_or_zero(self.x),
            y: finite_or_zero(self.y),
            width: finite_or_zero(self.width).max(0.0),
            height: finite_or_zero(self.height).max(0.0),
        }
    }

    /// Whether normalizing this rect would change it
    pub fn is_malformed(&self) -> bool {
        *self != self.normalized()
    }

    /// A rect with no area draws nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Shrink on all four sides, collapsing to zero size rather than inverting
    pub fn inset(&self, amount: f64) -> Self {
        let amount = finite_or_zero(amount).max(0.0);
        let width = (self.width - 2.0 * amount).max(0.0);
        let height = (self.height - 2.0 * amount).max(0.0);
        Self {
            x: self.x + amount.min(self.width / 2.0),
            y: self.y + amount.min(self.height / 2.0),
            width,
            height,
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
