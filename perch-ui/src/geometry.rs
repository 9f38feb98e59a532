//! Geometry read from the host for a single placement pass
//!
//! All values are CSS pixels in viewport coordinates, the same space
//! `getBoundingClientRect()` reports in.

use serde::{Deserialize, Serialize};

/// Bounding box of an element
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_origin(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            right: left + width,
            bottom: top + height,
            left,
            width,
            height,
        }
    }
}

/// Visible area of the document
///
/// `width` is the document element's client width (excludes the scrollbar),
/// `height` is the window's inner height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Margins of the overlay as resolved by computed style
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginBox {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl MarginBox {
    /// Parse the four `margin-*` computed values (`"12px"`, `"8.5px"`, `"auto"`).
    ///
    /// Only the leading integer is kept; anything unparseable counts as zero.
    pub fn from_computed(top: &str, right: &str, bottom: &str, left: &str) -> Self {
        Self {
            top: parse_px(top),
            right: parse_px(right),
            bottom: parse_px(bottom),
            left: parse_px(left),
        }
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

fn parse_px(value: &str) -> f64 {
    let value = value.trim();
    let digits_end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(value.len());

    value[..digits_end].parse::<i64>().map(|v| v as f64).unwrap_or(0.0)
}

/// Distance from each edge of the trigger to the matching viewport edge
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpaceAvailable {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl SpaceAvailable {
    pub fn around(trigger: &Rect, viewport: &Viewport) -> Self {
        Self {
            top: trigger.top,
            right: viewport.width - trigger.right,
            bottom: viewport.height - trigger.bottom,
            left: trigger.left,
        }
    }
}
