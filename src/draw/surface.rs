//! The raster drawing target and the stroke operations performed on it.
//!
//! [`DrawingSurface`] wraps a Cairo [`cairo::ImageSurface`] that starts out
//! filled with the background color. Strokes are rendered immediately, one
//! segment per pointer sample; there is no retained stroke model.

use super::color::Color;
use super::render::{fill_background, render_segment};
use super::track::PointerTrack;
use crate::input::ToolState;
use log::debug;
use thiserror::Error;

/// Errors raised by the Cairo host underneath a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("surface pixels unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// Position of the surface relative to the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceOffset {
    pub top: i32,
    pub left: i32,
}

impl SurfaceOffset {
    pub fn new(top: i32, left: i32) -> Self {
        Self { top, left }
    }
}

/// A segment that was committed to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub color: Color,
    pub width: f64,
}

/// Owned, un-premultiplied RGBA copy of the surface pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: i32,
    height: i32,
    pixels: Vec<[u8; 4]>,
}

impl Raster {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns `[r, g, b, a]` at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Counts pixels that are not exactly `color` (opaque).
    pub fn count_unlike(&self, color: Color) -> usize {
        let [r, g, b] = color.to_rgb8();
        let target = [r, g, b, 255];
        self.pixels.iter().filter(|px| **px != target).count()
    }
}

/// Raster target plus pointer track and on-screen placement.
pub struct DrawingSurface {
    image: cairo::ImageSurface,
    background: Color,
    offset: SurfaceOffset,
    track: PointerTrack,
}

impl DrawingSurface {
    /// Creates a blank surface filled with `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let surface = Self {
            image,
            background,
            offset: SurfaceOffset::default(),
            track: PointerTrack::new(),
        };
        surface.clear()?;
        Ok(surface)
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Background color; also the color the eraser paints with.
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn track(&self) -> &PointerTrack {
        &self.track
    }

    pub fn is_drawing(&self) -> bool {
        self.track.is_drawing
    }

    /// Records `point` as the stroke origin and starts drawing.
    pub fn begin_stroke(&mut self, point: (i32, i32)) {
        self.track.start(point.0, point.1);
    }

    /// Draws one segment from the stroke origin to `point`.
    ///
    /// Does nothing while not drawing. Otherwise strokes with the tool's
    /// width and effective color and advances the origin to `point`.
    pub fn extend_stroke(
        &mut self,
        point: (i32, i32),
        tool: &ToolState,
    ) -> Result<Option<Segment>, SurfaceError> {
        if !self.track.is_drawing {
            return Ok(None);
        }

        let segment = Segment {
            from: self.track.origin(),
            to: point,
            color: tool.effective_color(),
            width: tool.brush_width as f64,
        };

        let ctx = self.context()?;
        render_segment(&ctx, segment.from, segment.to, segment.color, segment.width)?;
        self.track.advance(point.0, point.1);
        Ok(Some(segment))
    }

    /// Stops drawing. Idempotent.
    pub fn end_stroke(&mut self) {
        self.track.stop();
    }

    /// Repaints the whole target with the background color.
    ///
    /// The pointer track is left alone: a stroke in flight
    /// continues from its pre-clear origin on the next move.
    pub fn clear(&self) -> Result<(), SurfaceError> {
        let ctx = self.context()?;
        fill_background(&ctx, self.background)?;
        debug!("Surface cleared to {}", self.background);
        Ok(())
    }

    /// Current on-screen offset of the surface.
    pub fn locate(&self) -> SurfaceOffset {
        self.offset
    }

    /// Updates the on-screen placement (after a scroll or a layout change).
    pub fn set_offset(&mut self, offset: SurfaceOffset) {
        self.offset = offset;
    }

    /// Copies the current pixels out of the surface.
    pub fn snapshot(&mut self) -> Result<Raster, SurfaceError> {
        let width = self.image.width();
        let height = self.image.height();
        let stride = self.image.stride() as usize;
        self.image.flush();

        let data = self.image.data()?;
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for row in 0..height as usize {
            for col in 0..width as usize {
                let at = row * stride + col * 4;
                let argb = u32::from_ne_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);
                pixels.push(unpremultiply(argb));
            }
        }

        Ok(Raster {
            width,
            height,
            pixels,
        })
    }

    fn context(&self) -> Result<cairo::Context, SurfaceError> {
        Ok(cairo::Context::new(&self.image)?)
    }
}

fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) & 0xff;
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let channel = |shift: u32| ((((argb >> shift) & 0xff) * 255 + a / 2) / a).min(255) as u8;
    [channel(16), channel(8), channel(0), a as u8]
}
