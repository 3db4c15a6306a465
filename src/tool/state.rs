//! Bounds-measurement tool state.

use crate::util::{Point, RegionRect};

/// State of the drag-to-measure gesture.
///
/// Two states only: **idle** (no anchor) and **measuring** (anchor present).
/// The gesture handler owns all transitions; the tick renderer only ever
/// reads the anchor. Both run on the single UI thread, which is what makes
/// the unsynchronized read safe (documented precondition, not enforced).
#[derive(Debug, Default)]
pub struct BoundsToolState {
    region_start: Option<Point>,
}

impl BoundsToolState {
    /// Creates the tool in the idle state.
    pub fn new() -> Self {
        Self { region_start: None }
    }

    /// The anchor of the in-progress measurement, if one is active.
    pub fn anchor(&self) -> Option<Point> {
        self.region_start
    }

    /// Returns true while a measurement drag is active.
    pub fn is_measuring(&self) -> bool {
        self.region_start.is_some()
    }

    /// Anchors a new measurement at the given position (pointer down).
    ///
    /// A press while already measuring keeps the existing anchor.
    pub fn begin(&mut self, at: Point) {
        if self.region_start.is_none() {
            self.region_start = Some(at);
        }
    }

    /// Ends the measurement at the given pointer position (pointer up).
    ///
    /// Returns the final rectangle, or `None` if no measurement was active.
    pub fn finish(&mut self, pointer: Point) -> Option<RegionRect> {
        self.region_start
            .take()
            .map(|anchor| RegionRect::from_corners(anchor, pointer))
    }

    /// Abandons the in-progress measurement without producing a result.
    pub fn cancel(&mut self) {
        self.region_start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_idle_and_anchors_on_begin() {
        let mut tool = BoundsToolState::new();
        assert!(!tool.is_measuring());
        assert!(tool.anchor().is_none());

        tool.begin(Point::new(10.0, 20.0));
        assert!(tool.is_measuring());
        assert_eq!(tool.anchor(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn press_while_measuring_keeps_anchor() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(10.0, 20.0));
        tool.begin(Point::new(99.0, 99.0));
        assert_eq!(tool.anchor(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn finish_returns_rect_and_clears_anchor() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(100.0, 100.0));

        let rect = tool.finish(Point::new(150.0, 80.0)).unwrap();
        assert_eq!(rect.left, 100.0);
        assert_eq!(rect.top, 100.0);
        assert_eq!(rect.right, 150.0);
        assert_eq!(rect.bottom, 80.0);
        assert!(!tool.is_measuring());
    }

    #[test]
    fn finish_without_measurement_is_none() {
        let mut tool = BoundsToolState::new();
        assert!(tool.finish(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn cancel_discards_anchor() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(5.0, 5.0));
        tool.cancel();
        assert!(!tool.is_measuring());
        assert!(tool.finish(Point::new(9.0, 9.0)).is_none());
    }
}
