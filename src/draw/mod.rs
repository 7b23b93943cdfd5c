//! Raster drawing target and rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types used by the sketchpad:
//! - [`Color`]: RGBA color representation with the stock palette constants
//! - [`DrawingSurface`]: the raster target, its placement and the pointer track
//! - [`DirtyTracker`]: damage accumulated between presents
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod dirty;
pub mod render;
pub mod surface;
pub mod track;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use dirty::DirtyTracker;
pub use render::{fill_background, render_segment};
pub use surface::{DrawingSurface, Raster, Segment, SurfaceError, SurfaceOffset};
pub use track::PointerTrack;

pub use color::{BLACK, BLUE, GREEN, ORANGE, RED, WHITE, YELLOW};
