//! Utility functions for color names and segment geometry.
//!
//! This module provides:
//! - Name-to-color mapping for the stock palette (constants live in draw::color)
//! - Axis-aligned rectangles and segment damage bounds

use crate::draw::{Color, ColorParseError, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the replay script to accept palette
/// names in place of hex values.
///
/// # Supported Names (case-insensitive)
/// - "black", "yellow", "blue", "green", "orange", "red", "white"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "yellow" => Some(YELLOW),
        "blue" => Some(BLUE),
        "green" => Some(GREEN),
        "orange" => Some(ORANGE),
        "red" => Some(RED),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Only exact 8-bit matches against the stock colors are named; anything else
/// is reported as "Custom".
pub fn color_to_name(color: &Color) -> &'static str {
    const NAMED: [(Color, &str); 7] = [
        (BLACK, "Black"),
        (YELLOW, "Yellow"),
        (BLUE, "Blue"),
        (GREEN, "Green"),
        (ORANGE, "Orange"),
        (RED, "Red"),
        (WHITE, "White"),
    ];

    let rgb = color.to_rgb8();
    NAMED
        .iter()
        .find(|(named, _)| named.to_rgb8() == rgb)
        .map(|(_, name)| *name)
        .unwrap_or("Custom")
}

/// Parses either a stock color name or a `#RRGGBB` / `#RGB` hex string.
pub fn parse_color(spec: &str) -> Result<Color, ColorParseError> {
    match name_to_color(spec.trim()) {
        Some(color) => Ok(color),
        None => Color::from_hex(spec),
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking and toolbar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Extents wider than `i32::MAX` saturate.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            saturate(i64::from(max_x) - i64::from(min_x)),
            saturate(i64::from(max_y) - i64::from(min_y)),
        )
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns true if the point lies inside (min inclusive, max exclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        x >= left
            && x < left + i64::from(self.width)
            && y >= top
            && y < top + i64::from(self.height)
    }

    /// Overlap of two rectangles, or `None` when they do not touch.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let right = |r: &Rect| i64::from(r.x) + i64::from(r.width);
        let bottom = |r: &Rect| i64::from(r.y) + i64::from(r.height);
        let min_x = self.x.max(other.x);
        let min_y = self.y.max(other.y);
        let max_x = right(self).min(right(other));
        let max_y = bottom(self).min(bottom(other));
        Self::new(
            min_x,
            min_y,
            saturate(max_x - i64::from(min_x)),
            saturate(max_y - i64::from(min_y)),
        )
    }
}

/// Bounding box covering a stroked segment including its round caps.
///
/// The box is padded by half the line width (rounded up) plus one pixel for
/// antialiasing.
///
/// Bounds that would leave the `i32` range are clamped to it.
pub fn segment_bounds(from: (i32, i32), to: (i32, i32), width: f64) -> Option<Rect> {
    let pad = (width / 2.0).ceil() as i64 + 1;
    let min = |a: i32, b: i32| clamp_i32(i64::from(a.min(b)) - pad);
    let max = |a: i32, b: i32| clamp_i32(i64::from(a.max(b)) + pad + 1);
    Rect::from_min_max(
        min(from.0, to.0),
        min(from.1, to.1),
        max(from.0, to.0),
        max(from.1, to.1),
    )
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn saturate(extent: i64) -> i32 {
    extent.min(i64::from(i32::MAX)) as i32
}
