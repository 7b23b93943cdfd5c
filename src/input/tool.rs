//! Brush tool state: color, width and the eraser flag.

use crate::draw::Color;

/// Smallest brush width in pixels.
pub const MIN_BRUSH_WIDTH: u32 = 1;
/// Largest brush width in pixels.
pub const MAX_BRUSH_WIDTH: u32 = 50;
/// Brush width used when nothing else is configured.
pub const DEFAULT_BRUSH_WIDTH: u32 = 10;

/// Current brush settings.
///
/// `is_eraser` is coupled to `brush_color`: while it is set, the brush color
/// equals `eraser_color` (the surface background).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    /// Active brush color (the background color while erasing)
    pub brush_color: Color,
    /// Brush width in pixels
    pub brush_width: u32,
    /// Whether the eraser is active
    pub is_eraser: bool,
    /// Color painted by the eraser
    pub eraser_color: Color,
}

impl ToolState {
    /// Creates a non-eraser tool state. The width is clamped to the valid range.
    pub fn new(brush_color: Color, brush_width: u32, eraser_color: Color) -> Self {
        Self {
            brush_color,
            brush_width: brush_width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH),
            is_eraser: false,
            eraser_color,
        }
    }

    /// Sets the brush color and leaves eraser mode.
    pub fn select_color(&mut self, color: Color) {
        self.brush_color = color;
        self.is_eraser = false;
    }

    /// Switches to the eraser: the brush paints the background color.
    pub fn select_eraser(&mut self) {
        self.brush_color = self.eraser_color;
        self.is_eraser = true;
    }

    /// Sets the brush width, clamped to 1-50 px.
    pub fn set_brush_width(&mut self, width: u32) {
        self.brush_width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
    }

    /// Grows or shrinks the brush by `delta` pixels, clamped to 1-50 px.
    pub fn adjust_brush_width(&mut self, delta: i32) {
        let width = (self.brush_width as i64 + delta as i64)
            .clamp(MIN_BRUSH_WIDTH as i64, MAX_BRUSH_WIDTH as i64);
        self.brush_width = width as u32;
    }

    /// Color a stroke segment is rendered with.
    pub fn effective_color(&self) -> Color {
        if self.is_eraser {
            self.eraser_color
        } else {
            self.brush_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, BLUE, WHITE, YELLOW};

    #[test]
    fn eraser_then_color_restores_brush() {
        let mut tool = ToolState::new(BLACK, DEFAULT_BRUSH_WIDTH, WHITE);

        tool.select_eraser();
        assert!(tool.is_eraser);
        assert_eq!(tool.brush_color, WHITE);
        assert_eq!(tool.effective_color(), WHITE);

        tool.select_color(BLUE);
        assert!(!tool.is_eraser);
        assert_eq!(tool.brush_color, BLUE);
        assert_eq!(tool.effective_color(), BLUE);
    }

    #[test]
    fn eraser_uses_configured_background() {
        let mut tool = ToolState::new(BLACK, 4, YELLOW);
        tool.select_eraser();
        assert_eq!(tool.effective_color(), YELLOW);
    }

    #[test]
    fn width_is_clamped() {
        let mut tool = ToolState::new(BLACK, 0, WHITE);
        assert_eq!(tool.brush_width, MIN_BRUSH_WIDTH);

        tool.set_brush_width(400);
        assert_eq!(tool.brush_width, MAX_BRUSH_WIDTH);

        tool.set_brush_width(12);
        tool.adjust_brush_width(3);
        assert_eq!(tool.brush_width, 15);

        tool.adjust_brush_width(-100);
        assert_eq!(tool.brush_width, MIN_BRUSH_WIDTH);

        tool.adjust_brush_width(i32::MAX);
        assert_eq!(tool.brush_width, MAX_BRUSH_WIDTH);
    }

    #[test]
    fn wide_eraser_widths_are_kept() {
        let mut tool = ToolState::new(BLACK, 10, WHITE);
        tool.set_brush_width(35);
        assert_eq!(tool.brush_width, 35);
        tool.set_brush_width(50);
        assert_eq!(tool.brush_width, 50);
        tool.adjust_brush_width(1);
        assert_eq!(tool.brush_width, 50);
    }
}
