//! Fixed color palette offered to the user.

use crate::draw::{BLACK, BLUE, Color, GREEN, ORANGE, RED, YELLOW};
use crate::util;

/// One swatch in the palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub name: String,
    pub color: Color,
}

/// Ordered, read-only list of preset colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_colors([BLACK, YELLOW, BLUE, GREEN, ORANGE, RED])
    }
}

impl Palette {
    /// Builds a palette from colors, naming each via [`util::color_to_name`].
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let entries = colors
            .into_iter()
            .map(|color| PaletteEntry {
                name: util::color_to_name(&color).to_string(),
                color,
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    /// Index of the first entry with exactly this color.
    pub fn position(&self, color: Color) -> Option<usize> {
        let rgb = color.to_rgb8();
        self.entries
            .iter()
            .position(|entry| entry.color.to_rgb8() == rgb)
    }
}
