//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "yellow"
///
/// # Hex color
/// default_color = "#4286f4"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, yellow, blue, green, orange, red, white) or `#RRGGBB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Returns `None` for names that are neither a stock color nor valid hex.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(spec) => crate::util::parse_color(spec).ok(),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Like [`ColorSpec::try_to_color`], falling back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback);
            fallback
        })
    }

    pub fn hex(hex: &str) -> Self {
        ColorSpec::Name(hex.to_string())
    }
}
