use crate::cursor::CursorOverlay;
use crate::draw::SurfaceError;
use crate::input::events::PointerEvent;
use log::debug;

use super::Sketchpad;

impl Sketchpad {
    /// Routes a pointer event to the matching handler.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Result<(), SurfaceError> {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => return self.on_pointer_move(x, y),
            PointerEvent::Up => self.on_pointer_up(),
            PointerEvent::Leave => self.on_pointer_leave(),
            PointerEvent::Enter => self.on_pointer_enter(),
        }
        Ok(())
    }

    /// Starts a stroke at `(x, y)`.
    ///
    /// Nothing is painted yet; the first segment appears on the next move.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) {
        debug!("Stroke started at ({x}, {y})");
        self.surface.begin_stroke((x, y));
    }

    /// Extends the active stroke to `(x, y)` and repositions the cursor.
    ///
    /// # Behavior
    /// - While drawing: commits one segment from the previous sample
    /// - Always: recomputes the cursor overlay from the current offset and tool
    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> Result<(), SurfaceError> {
        if let Some(segment) = self.surface.extend_stroke((x, y), &self.tool)? {
            self.dirty_tracker
                .mark_segment(segment.from, segment.to, segment.width);
        }

        self.cursor = Some(CursorOverlay::follow((x, y), self.offset, &self.tool));
        self.needs_redraw = true;
        Ok(())
    }

    /// Ends the active stroke (button released).
    pub fn on_pointer_up(&mut self) {
        if self.surface.is_drawing() {
            debug!("Stroke ended");
        }
        self.surface.end_stroke();
    }

    /// Ends the active stroke (pointer left the surface).
    pub fn on_pointer_leave(&mut self) {
        if self.surface.is_drawing() {
            debug!("Pointer left surface mid-stroke");
        }
        self.surface.end_stroke();
    }

    /// Re-measures the surface offset; the page may have scrolled or resized.
    pub fn on_pointer_enter(&mut self) {
        self.offset = self.surface.locate();
        debug!(
            "Pointer entered; surface offset top={} left={}",
            self.offset.top, self.offset.left
        );
    }
}
