//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{BLACK, Color, WHITE};
use crate::input::{Palette, tool::DEFAULT_BRUSH_WIDTH};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush settings applied when a sketchpad is created.
///
/// Users change these at runtime through the palette and width controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Starting brush color - a palette name, `#RRGGBB`, or `[r, g, b]`
    #[serde(default = "default_brush_color")]
    pub default_color: ColorSpec,

    /// Starting brush width in pixels (valid range: 1 - 50)
    #[serde(default = "default_brush_width")]
    pub default_width: u32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_color: default_brush_color(),
            default_width: default_brush_width(),
        }
    }
}

impl BrushConfig {
    /// Resolved starting color (black when the color is unknown).
    pub fn color(&self) -> Color {
        self.default_color.to_color_or(BLACK)
    }
}

/// Raster target settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_surface_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_surface_height")]
    pub height: i32,

    /// Background color; the eraser paints with it and clear restores it
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
            background: default_background(),
        }
    }
}

impl SurfaceConfig {
    /// Resolved background color (white when the color is unknown).
    pub fn background_color(&self) -> Color {
        self.background.to_color_or(WHITE)
    }
}

/// Preset colors shown in the palette, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    #[serde(default = "default_palette_colors")]
    pub colors: Vec<ColorSpec>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette_colors(),
        }
    }
}

impl PaletteConfig {
    /// Builds the runtime palette, skipping entries that do not resolve.
    pub fn to_palette(&self) -> Palette {
        let colors: Vec<Color> = self
            .colors
            .iter()
            .filter_map(|spec| {
                let color = spec.try_to_color();
                if color.is_none() {
                    log::warn!("Skipping unknown palette color {:?}", spec);
                }
                color
            })
            .collect();

        if colors.is_empty() {
            Palette::default()
        } else {
            Palette::from_colors(colors)
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_brush_color() -> ColorSpec {
    ColorSpec::hex("#000000")
}

fn default_brush_width() -> u32 {
    DEFAULT_BRUSH_WIDTH
}

fn default_surface_width() -> i32 {
    800
}

fn default_surface_height() -> i32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::hex("#FFFFFF")
}

fn default_palette_colors() -> Vec<ColorSpec> {
    ["#000000", "#FFDD57", "#4286f4", "#23d160", "#FF8600", "#ff3860"]
        .into_iter()
        .map(ColorSpec::hex)
        .collect()
}
