// ABOUTME: Axis-aligned rectangle and its edge utilities.
// ABOUTME: Growing by margins, cutting strips off edges, and swapping axes.

use serde::{Deserialize, Serialize};

/// Rectangle in layout units, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grow the rect by `bounds` on every side
    pub fn with_bounds(&self, bounds: f32) -> Self {
        Self {
            x: self.x - bounds,
            y: self.y - bounds,
            width: self.width + 2.0 * bounds,
            height: self.height + 2.0 * bounds,
        }
    }

    /// Grow the rect horizontally only, by `left` and `right` respectively
    pub fn with_bounds_h(&self, left: f32, right: f32) -> Self {
        Self {
            x: self.x - left,
            y: self.y,
            width: self.width + left + right,
            height: self.height,
        }
    }

    /// Cut a strip of `height` off the bottom. Returns `[rest, strip]`.
    pub fn cut_from_bottom(&self, height: f32) -> [Rect; 2] {
        let rest = Self {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height - height,
        };
        let strip = Self {
            x: self.x,
            y: self.y + rest.height,
            width: self.width,
            height,
        };
        [rest, strip]
    }

    /// Cut a strip of `height` off the top. Returns `[strip, rest]`.
    ///
    /// The remainder's height is `self.height + height`, not the difference.
    /// Callers that need an exact remainder should use [`Rect::cut_from_bottom`]
    /// with the complementary height.
    pub fn cut_from_top(&self, height: f32) -> [Rect; 2] {
        let strip = Self {
            x: self.x,
            y: self.y,
            width: self.width,
            height,
        };
        let rest = Self {
            x: self.x,
            y: self.y + height,
            width: self.width,
            height: self.height + height,
        };
        [strip, rest]
    }

    /// Cut a strip of `width` off the left. Returns `[strip, rest]`.
    pub fn cut_from_left(&self, width: f32) -> [Rect; 2] {
        let strip = Self {
            x: self.x,
            y: self.y,
            width,
            height: self.height,
        };
        let rest = Self {
            x: self.x + width,
            y: self.y,
            width: self.width - width,
            height: self.height,
        };
        [strip, rest]
    }

    /// Cut a strip of `width` off the right. Returns `[rest, strip]`.
    pub fn cut_from_right(&self, width: f32) -> [Rect; 2] {
        let rest = Self {
            x: self.x,
            y: self.y,
            width: self.width - width,
            height: self.height,
        };
        let strip = Self {
            x: self.x + rest.width,
            y: self.y,
            width,
            height: self.height,
        };
        [rest, strip]
    }

    /// Swap the x and y axes
    pub fn transpose(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            width: self.height,
            height: self.width,
        }
    }
}
