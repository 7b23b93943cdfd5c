//! Freehand raster sketchpad.
//!
//! A Cairo image surface driven by pointer events: strokes are rendered
//! immediately as round-capped segments between consecutive samples, with a
//! palette, an eraser, a clear action and a circular cursor indicator that
//! mirrors the brush. Hosts feed [`input::PointerEvent`]s and
//! [`input::ControlAction`]s into an [`input::Sketchpad`] and present what it
//! reports as damaged.

pub mod config;
pub mod cursor;
pub mod draw;
pub mod input;
pub mod script;
pub mod ui;
pub mod util;

pub use config::Config;
pub use input::Sketchpad;
