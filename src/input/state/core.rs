//! Sketchpad state: surface, tool, palette and derived cursor.

use crate::config::Config;
use crate::cursor::CursorOverlay;
use crate::draw::{DirtyTracker, DrawingSurface, SurfaceError, SurfaceOffset};
use crate::input::{Palette, ToolState};
use crate::util::Rect;

/// Main sketchpad state containing everything a drawing session needs.
///
/// Pointer events and control actions mutate this struct; afterwards the
/// host checks `needs_redraw` and drains [`Sketchpad::take_damage`] to know
/// what to present.
pub struct Sketchpad {
    /// Raster target, pointer track and on-screen placement
    pub surface: DrawingSurface,
    /// Current brush color, width and eraser flag
    pub tool: ToolState,
    /// Preset colors offered to the user
    pub palette: Palette,
    /// Surface offset measured when the pointer last entered the surface
    pub offset: SurfaceOffset,
    /// Cursor indicator, present once the pointer has moved over the surface
    pub cursor: Option<CursorOverlay>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Tracks dirty regions between presents
    pub(crate) dirty_tracker: DirtyTracker,
}

impl Sketchpad {
    /// Creates a sketchpad over an existing surface.
    pub fn new(surface: DrawingSurface, tool: ToolState, palette: Palette) -> Self {
        let mut dirty_tracker = DirtyTracker::new();
        dirty_tracker.mark_full();

        Self {
            offset: surface.locate(),
            surface,
            tool,
            palette,
            cursor: None,
            needs_redraw: true,
            dirty_tracker,
        }
    }

    /// Builds a blank sketchpad from configuration defaults.
    pub fn from_config(config: &Config) -> Result<Self, SurfaceError> {
        let background = config.surface.background_color();
        let surface = DrawingSurface::new(config.surface.width, config.surface.height, background)?;
        let tool = ToolState::new(
            config.brush.color(),
            config.brush.default_width,
            background,
        );

        Ok(Self::new(surface, tool, config.palette.to_palette()))
    }

    /// Drains the regions changed since the last call.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.needs_redraw = false;
        self.dirty_tracker
            .take_regions(self.surface.width(), self.surface.height())
    }

    /// Refreshes the cursor overlay from the current tool state.
    ///
    /// Called after tool changes so the indicator keeps mirroring the brush.
    pub(crate) fn restyle_cursor(&mut self) {
        if let Some(cursor) = self.cursor.as_mut() {
            let center = cursor.center();
            let half = self.tool.brush_width as f64 / 2.0;
            cursor.x = center.0 - half;
            cursor.y = center.1 - half;
            cursor.size = self.tool.brush_width;
            cursor.color = self.tool.brush_color;
        }
    }
}
