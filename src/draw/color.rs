//! RGBA color type, hex parsing and the stock palette colors.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red: Color = "#ff3860".parse().unwrap();
/// assert_eq!(red.to_hex(), "#ff3860");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Errors produced when parsing a `#RRGGBB` / `#RGB` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("color '{0}' must have 3 or 6 hex digits")]
    InvalidLength(String),

    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#RRGGBB` or the short `#RGB` form (case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(hex.to_string()))?;

        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ColorParseError::InvalidLength(hex.to_string())),
        };

        let channel = |range: std::ops::Range<usize>| {
            expanded
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidDigit(hex.to_string()))
        };

        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Returns the 8-bit channels, rounding each component.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Formats the color as lowercase `#rrggbb` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Stock colors (the default palette plus the surface background)
// ============================================================================

/// `#000000`
pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

/// `#FFDD57`
pub const YELLOW: Color = Color::from_rgb8(0xFF, 0xDD, 0x57);

/// `#4286F4`
pub const BLUE: Color = Color::from_rgb8(0x42, 0x86, 0xF4);

/// `#23D160`
pub const GREEN: Color = Color::from_rgb8(0x23, 0xD1, 0x60);

/// `#FF8600`
pub const ORANGE: Color = Color::from_rgb8(0xFF, 0x86, 0x00);

/// `#FF3860`
pub const RED: Color = Color::from_rgb8(0xFF, 0x38, 0x60);

/// `#FFFFFF`, the default surface background and eraser color.
pub const WHITE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
