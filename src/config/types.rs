//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Measurement line settings.
///
/// Controls the appearance of the live rectangle outline.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineConfig {
    /// Line color - either a named color (red, green, blue, yellow, orange,
    /// pink, white, black) or an RGB array like `[255, 128, 0]`
    #[serde(default = "default_line_color")]
    pub color: ColorSpec,

    /// Line thickness in pixels (valid range: 1.0 - 10.0)
    #[serde(default = "default_line_thickness")]
    pub thickness: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            color: default_line_color(),
            thickness: default_line_thickness(),
        }
    }
}

/// Measurement label settings.
///
/// Controls the "W x H" label box drawn at the measurement anchor.
#[derive(Debug, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Font family name for the label (e.g., "Sans", "Monospace")
    /// Falls back to "Sans" if the specified font is not available
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Padding between the digits and the box edge in pixels
    #[serde(default = "default_label_padding")]
    pub padding: f64,

    /// Label box border width in pixels (0 disables the border)
    #[serde(default = "default_border_width")]
    pub border_width: f64,

    /// Digits color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_text_color")]
    pub text_color: [f64; 4],

    /// Box fill color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_bg_color")]
    pub bg_color: [f64; 4],

    /// Box border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_border_color")]
    pub border_color: [f64; 4],
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
            padding: default_label_padding(),
            border_width: default_border_width(),
            text_color: default_text_color(),
            bg_color: default_bg_color(),
            border_color: default_border_color(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    /// - 2 = double buffering (lower memory, potential tearing)
    /// - 3 = triple buffering (balanced, recommended)
    /// - 4 = quad buffering (highest memory, smoothest)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    /// Set to false for lower latency at the cost of potential screen tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// Measurement export settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Copy the final "W x H" text to the clipboard when a measurement ends
    #[serde(default = "default_copy_on_release")]
    pub copy_on_release: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            copy_on_release: default_copy_on_release(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_line_color() -> ColorSpec {
    ColorSpec::Name("orange".to_string())
}

fn default_line_thickness() -> f64 {
    2.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "bold".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_label_padding() -> f64 {
    6.0
}

fn default_border_width() -> f64 {
    1.0
}

fn default_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.75]
}

fn default_border_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 0.4]
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_copy_on_release() -> bool {
    true
}
