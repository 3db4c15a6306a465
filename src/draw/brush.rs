//! Brush selection for overlay draw calls.

use super::color::{Color, BLACK, ORANGE, WHITE};

/// Selects a brush from the overlay palette.
///
/// Draw calls name a brush rather than a color so that all measurement
/// graphics stay visually consistent and palette changes stay in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brush {
    /// Measurement rectangle outline
    Line,
    /// Label digits ("W x H")
    MeasureNumbers,
    /// Label box fill behind the digits
    MeasureBackground,
    /// Label box border
    MeasureBorder,
}

/// Resolved per-brush colors for one overlay session.
///
/// Built once from the configuration at startup and borrowed by the canvas
/// for the duration of each frame.
#[derive(Debug, Clone)]
pub struct BrushPalette {
    line: Color,
    measure_numbers: Color,
    measure_background: Color,
    measure_border: Color,
}

impl BrushPalette {
    /// Creates a palette from explicit brush colors.
    pub fn new(
        line: Color,
        measure_numbers: Color,
        measure_background: Color,
        measure_border: Color,
    ) -> Self {
        Self {
            line,
            measure_numbers,
            measure_background,
            measure_border,
        }
    }

    /// Returns the color bound to the given brush.
    pub fn color(&self, brush: Brush) -> Color {
        match brush {
            Brush::Line => self.line,
            Brush::MeasureNumbers => self.measure_numbers,
            Brush::MeasureBackground => self.measure_background,
            Brush::MeasureBorder => self.measure_border,
        }
    }
}

impl Default for BrushPalette {
    fn default() -> Self {
        Self {
            line: ORANGE,
            measure_numbers: WHITE,
            measure_background: BLACK.with_alpha(0.75),
            measure_border: WHITE.with_alpha(0.4),
        }
    }
}
