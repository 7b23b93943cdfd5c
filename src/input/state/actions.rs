use crate::draw::{Color, SurfaceError};
use log::{debug, warn};

use super::Sketchpad;

/// Control actions dispatched by the palette, eraser and trash controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Use an arbitrary brush color (leaves eraser mode)
    SelectColor(Color),
    /// Use the palette entry at this index
    SelectPalette(usize),
    /// Paint with the background color
    SelectEraser,
    /// Wipe the surface back to its blank state
    Clear,
    /// Set the brush width in pixels
    SetBrushWidth(u32),
    /// Grow or shrink the brush width
    AdjustBrushWidth(i32),
}

impl Sketchpad {
    /// Applies a control action.
    ///
    /// Only [`ControlAction::Clear`] touches the raster and can fail.
    pub fn handle_action(&mut self, action: ControlAction) -> Result<(), SurfaceError> {
        match action {
            ControlAction::SelectColor(color) => self.select_color(color),
            ControlAction::SelectPalette(index) => self.select_palette(index),
            ControlAction::SelectEraser => self.select_eraser(),
            ControlAction::Clear => return self.clear(),
            ControlAction::SetBrushWidth(width) => {
                self.tool.set_brush_width(width);
                self.restyle_cursor();
                self.needs_redraw = true;
            }
            ControlAction::AdjustBrushWidth(delta) => {
                self.tool.adjust_brush_width(delta);
                self.restyle_cursor();
                self.needs_redraw = true;
            }
        }
        Ok(())
    }

    /// Sets the brush color and leaves eraser mode.
    pub fn select_color(&mut self, color: Color) {
        debug!("Brush color set to {color}");
        self.tool.select_color(color);
        self.restyle_cursor();
        self.needs_redraw = true;
    }

    /// Selects a palette entry; out-of-range indices are ignored.
    pub fn select_palette(&mut self, index: usize) {
        match self.palette.get(index) {
            Some(entry) => {
                let color = entry.color;
                self.select_color(color);
            }
            None => warn!(
                "Palette index {} out of range (palette has {} colors); ignoring",
                index,
                self.palette.len()
            ),
        }
    }

    /// Switches the brush to the eraser.
    pub fn select_eraser(&mut self) {
        debug!("Eraser selected");
        self.tool.select_eraser();
        self.restyle_cursor();
        self.needs_redraw = true;
    }

    /// Wipes the surface. The stroke in flight, if any, keeps its origin.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        self.surface.clear()?;
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
        Ok(())
    }
}
