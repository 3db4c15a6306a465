//! Geometry primitives and color name mapping.
//!
//! This module provides:
//! - [`Point`]: a 2D coordinate in overlay-surface client space
//! - [`RegionRect`]: the live measurement rectangle (deliberately unnormalized)
//! - Color name lookup used by the configuration system

use crate::draw::{Color, color::*};

/// A 2D coordinate in overlay-surface client space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The live measurement rectangle spanned by the anchor and the pointer.
///
/// Left/top always come from the anchor and right/bottom from the pointer,
/// so `right < left` and `bottom < top` are valid states while dragging
/// above or left of the anchor. Callers that need a positive extent use
/// [`RegionRect::width`] and [`RegionRect::height`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RegionRect {
    /// Builds the rectangle from the anchor corner and the opposite corner.
    ///
    /// Corner ordering is preserved exactly as given; no normalization.
    pub fn from_corners(anchor: Point, opposite: Point) -> Self {
        Self {
            left: anchor.x,
            top: anchor.y,
            right: opposite.x,
            bottom: opposite.y,
        }
    }

    /// Displayed width: |right - left|.
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    /// Displayed height: |top - bottom|.
    ///
    /// The subtraction order differs from `width`; the absolute value makes
    /// the magnitude identical either way.
    pub fn height(&self) -> f64 {
        (self.top - self.bottom).abs()
    }
}

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_rect_preserves_corner_order() {
        let rect = RegionRect::from_corners(Point::new(100.0, 100.0), Point::new(150.0, 80.0));
        assert_eq!(rect.left, 100.0);
        assert_eq!(rect.top, 100.0);
        assert_eq!(rect.right, 150.0);
        assert_eq!(rect.bottom, 80.0);
    }

    #[test]
    fn width_and_height_are_sign_independent() {
        let rect = RegionRect::from_corners(Point::new(100.0, 100.0), Point::new(150.0, 80.0));
        assert_eq!(rect.width(), 50.0);
        assert_eq!(rect.height(), 20.0);

        let inverted = RegionRect::from_corners(Point::new(150.0, 80.0), Point::new(100.0, 100.0));
        assert_eq!(inverted.width(), 50.0);
        assert_eq!(inverted.height(), 20.0);
    }

    #[test]
    fn zero_delta_rect_has_zero_extent() {
        let p = Point::new(42.0, 42.0);
        let rect = RegionRect::from_corners(p, p);
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn name_to_color_matches_known_names() {
        assert_eq!(name_to_color("orange").unwrap(), ORANGE);
        assert_eq!(name_to_color("WHITE").unwrap(), WHITE);
        assert!(name_to_color("chartreuse").is_none());
    }
}
