//! Circular cursor indicator that follows the pointer.
//!
//! The overlay owns no state of its own: it is recomputed from the pointer
//! sample, the last measured surface offset and the tool state on every move.

use crate::draw::{Color, SurfaceOffset};
use crate::input::ToolState;

/// Screen-space placement and style of the cursor indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorOverlay {
    /// Left edge in viewport pixels
    pub x: f64,
    /// Top edge in viewport pixels
    pub y: f64,
    /// Diameter in pixels (the brush width)
    pub size: u32,
    /// Fill color (the brush color)
    pub color: Color,
}

impl CursorOverlay {
    /// Places the indicator so its center sits on the draw point.
    ///
    /// The surface-local point is shifted by the surface offset into viewport
    /// space, then by half the brush width so the circle is centered.
    pub fn follow(point: (i32, i32), offset: SurfaceOffset, tool: &ToolState) -> Self {
        let half = tool.brush_width as f64 / 2.0;
        Self {
            x: f64::from(point.0) + f64::from(offset.left) - half,
            y: f64::from(point.1) + f64::from(offset.top) - half,
            size: tool.brush_width,
            color: tool.brush_color,
        }
    }

    /// Center of the indicator in viewport pixels.
    pub fn center(&self) -> (f64, f64) {
        let half = self.size as f64 / 2.0;
        (self.x + half, self.y + half)
    }
}
