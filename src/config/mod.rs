//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings only seed the in-memory
//! state of a new sketchpad: starting brush, surface size and background, and the palette.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BrushConfig, PaletteConfig, SurfaceConfig};

use crate::input::tool::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted surface edge in pixels.
const MAX_SURFACE_EDGE: i32 = 8192;

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [brush]
/// default_color = "black"
/// default_width = 10
///
/// [surface]
/// width = 800
/// height = 600
/// background = "#FFFFFF"
///
/// [palette]
/// colors = ["#000000", "#FFDD57", "#4286f4", "#23d160", "#FF8600", "#ff3860"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting brush color and width
    #[serde(default)]
    pub brush: BrushConfig,

    /// Raster size and background color
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Preset palette colors
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped (or reset to their default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `brush.default_width`: 1 - 50
    /// - `surface.width`, `surface.height`: 1 - 8192
    /// - color specs must resolve to a color
    /// - `palette.colors` must not be empty
    pub fn validate_and_clamp(&mut self) {
        let width = self.brush.default_width;
        if !(MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH).contains(&width) {
            warn!(
                "Invalid default_width {}, clamping to {}-{} range",
                width, MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH
            );
            self.brush.default_width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
        }

        if self.brush.default_color.try_to_color().is_none() {
            warn!(
                "Invalid default_color {:?}, falling back to black",
                self.brush.default_color
            );
            self.brush.default_color = BrushConfig::default().default_color;
        }

        for (label, edge) in [
            ("width", &mut self.surface.width),
            ("height", &mut self.surface.height),
        ] {
            if !(1..=MAX_SURFACE_EDGE).contains(&*edge) {
                warn!(
                    "Invalid surface {} {}, clamping to 1-{} range",
                    label, edge, MAX_SURFACE_EDGE
                );
                *edge = (*edge).clamp(1, MAX_SURFACE_EDGE);
            }
        }

        if self.surface.background.try_to_color().is_none() {
            warn!(
                "Invalid background {:?}, falling back to white",
                self.surface.background
            );
            self.surface.background = SurfaceConfig::default().background;
        }

        if self.palette.colors.is_empty() {
            warn!("Palette is empty, falling back to the default colors");
            self.palette = PaletteConfig::default();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses TOML text without validating it.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Writes the configuration as TOML, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes a default config file, refusing to overwrite an existing one.
    ///
    /// Uses `path` when given, otherwise [`Config::get_config_path`]. Returns
    /// the path that was written.
    pub fn create_default_file(path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        Self::default().save_to(&config_path)?;
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
