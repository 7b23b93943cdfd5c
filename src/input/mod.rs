//! Input handling and tool state.
//!
//! This module translates host pointer events and control actions into
//! drawing operations. It holds the brush settings, the palette and the
//! [`Sketchpad`] that ties them to the drawing surface.

pub mod events;
pub mod palette;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use palette::{Palette, PaletteEntry};
pub use state::{ControlAction, Sketchpad};
pub use tool::ToolState;
