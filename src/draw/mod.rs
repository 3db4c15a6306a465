//! Rendering primitives for the measurement overlay (Cairo-based).
//!
//! This module defines the drawing types the tick renderer works with:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Brush`] / [`BrushPalette`]: the fixed brush set and its resolved colors
//! - [`MeasureLabel`]: the fixed-capacity "W x H" label buffer
//! - [`OverlayCanvas`]: the draw-call seam between tick and host renderer

pub mod brush;
pub mod color;
pub mod font;
pub mod label;
pub mod render;

// Re-export commonly used types at module level
pub use brush::{Brush, BrushPalette};
pub use color::Color;
pub use font::LabelFont;
pub use label::{LABEL_CAPACITY, MeasureLabel};
pub use render::{CairoCanvas, LabelStyle, OverlayCanvas, clear_surface};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
