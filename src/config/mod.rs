//! Configuration file support for waymeasure.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/waymeasure/config.toml`.
//! Settings include the measurement line appearance, label styling,
//! performance tuning, and clipboard export.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ExportConfig, LabelConfig, LineConfig, PerformanceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::draw::{BrushPalette, Color, LabelFont, LabelStyle};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [line]
/// color = "orange"
/// thickness = 2.0
///
/// [label]
/// font_size = 16.0
///
/// [performance]
/// buffer_count = 3
/// enable_vsync = true
///
/// [export]
/// copy_on_release = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Measurement line appearance
    #[serde(default)]
    pub line: LineConfig,

    /// Measurement label appearance
    #[serde(default)]
    pub label: LabelConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Clipboard export behavior
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `line.thickness`: 1.0 - 10.0
    /// - `label.font_size`: 8.0 - 72.0
    /// - `label.padding`: 0.0 - 32.0
    /// - `label.border_width`: 0.0 - 8.0
    /// - `performance.buffer_count`: 2 - 4
    fn validate_and_clamp(&mut self) {
        if !(1.0..=10.0).contains(&self.line.thickness) {
            log::warn!(
                "Invalid line thickness {:.1}, clamping to 1.0-10.0 range",
                self.line.thickness
            );
            self.line.thickness = self.line.thickness.clamp(1.0, 10.0);
        }

        if !(8.0..=72.0).contains(&self.label.font_size) {
            log::warn!(
                "Invalid label font_size {:.1}, clamping to 8.0-72.0 range",
                self.label.font_size
            );
            self.label.font_size = self.label.font_size.clamp(8.0, 72.0);
        }

        if !(0.0..=32.0).contains(&self.label.padding) {
            log::warn!(
                "Invalid label padding {:.1}, clamping to 0.0-32.0 range",
                self.label.padding
            );
            self.label.padding = self.label.padding.clamp(0.0, 32.0);
        }

        if !(0.0..=8.0).contains(&self.label.border_width) {
            log::warn!(
                "Invalid label border_width {:.1}, clamping to 0.0-8.0 range",
                self.label.border_width
            );
            self.label.border_width = self.label.border_width.clamp(0.0, 8.0);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.label.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .label
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'bold'",
                self.label.font_weight
            );
            self.label.font_weight = "bold".to_string();
        }

        // Validate font style
        if !matches!(
            self.label.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.label.font_style
            );
            self.label.font_style = "normal".to_string();
        }

        // Clamp label RGBA components to 0.0-1.0
        for component in self
            .label
            .text_color
            .iter_mut()
            .chain(self.label.bg_color.iter_mut())
            .chain(self.label.border_color.iter_mut())
        {
            if !(0.0..=1.0).contains(component) {
                log::warn!(
                    "Invalid label color component {:.3}, clamping to 0.0-1.0",
                    component
                );
                *component = component.clamp(0.0, 1.0);
            }
        }
    }

    /// Builds the session brush palette from the configured colors.
    pub fn brush_palette(&self) -> BrushPalette {
        BrushPalette::new(
            self.line.color.to_color(),
            rgba(self.label.text_color),
            rgba(self.label.bg_color),
            rgba(self.label.border_color),
        )
    }

    /// Builds the label style (font + box metrics) from the config.
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            font: LabelFont::new(
                self.label.font_family.clone(),
                self.label.font_weight.clone(),
                self.label.font_style.clone(),
                self.label.font_size,
            ),
            padding: self.label.padding,
            border_width: self.label.border_width,
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/waymeasure/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("waymeasure");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a configuration from TOML text without touching the filesystem.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Creates the parent directory if it doesn't exist. This method is kept
    /// for future use (e.g., runtime config editing).
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

fn rgba([r, g, b, a]: [f64; 4]) -> Color {
    Color::new(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Brush;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.line.thickness, 2.0);
        assert_eq!(config.label.font_size, 16.0);
        assert_eq!(config.performance.buffer_count, 3);
        assert!(config.export.copy_on_release);
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let config = Config::from_toml("[line]\nthickness = 4.0\n").unwrap();
        assert_eq!(config.line.thickness, 4.0);
        assert_eq!(config.label.font_family, "Sans");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            "[line]\nthickness = 99.0\n[label]\nfont_size = 1.0\n[performance]\nbuffer_count = 9\n",
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.line.thickness, 10.0);
        assert_eq!(config.label.font_size, 8.0);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn bogus_font_settings_fall_back() {
        let mut config =
            Config::from_toml("[label]\nfont_weight = \"wiggly\"\nfont_style = \"loud\"\n")
                .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.label.font_weight, "bold");
        assert_eq!(config.label.font_style, "normal");
    }

    #[test]
    fn palette_reflects_configured_colors() {
        let config = Config::from_toml(
            "[line]\ncolor = \"white\"\n[label]\ntext_color = [0.0, 1.0, 0.0, 1.0]\n",
        )
        .unwrap();
        let palette = config.brush_palette();
        assert_eq!(palette.color(Brush::Line), crate::draw::color::WHITE);
        assert_eq!(palette.color(Brush::MeasureNumbers).g, 1.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[line\nthickness=").is_err());
    }
}
