//! Per-frame rendering of the bounds-measurement tool.

use crate::draw::{Brush, MeasureLabel, OverlayCanvas};
use crate::util::{Point, RegionRect};

use super::state::BoundsToolState;

/// Renders one frame of the bounds tool.
///
/// Called once per frame by the backend render loop with the current pointer
/// position in surface-local client coordinates. When no measurement is
/// active this returns without issuing any draw calls.
///
/// The live rectangle keeps the anchor as left/top and the pointer as
/// right/bottom without normalization, so dragging above or left of the
/// anchor produces an inverted rectangle on purpose. The label shows the
/// absolute width and height and is drawn at the anchor position.
///
/// This routine has no error channel: it never panics and never blocks, so
/// a failure upstream (stale pointer position) degrades to a best-effort
/// frame rather than aborting the host loop.
pub fn draw_measure_tick<C: OverlayCanvas>(tool: &BoundsToolState, pointer: Point, canvas: &mut C) {
    let Some(anchor) = tool.anchor() else {
        return;
    };

    let rect = RegionRect::from_corners(anchor, pointer);
    canvas.stroke_rect(rect, Brush::Line);

    let label = MeasureLabel::format(rect.width(), rect.height());
    canvas.draw_text_box(label.as_str(), anchor.x, anchor.y);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records draw calls instead of rasterizing them.
    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        StrokeRect { rect: RegionRect, brush: Brush },
        TextBox { text: String, x: f64, y: f64 },
    }

    #[derive(Default)]
    struct RecordingCanvas {
        calls: Vec<DrawCall>,
    }

    impl OverlayCanvas for RecordingCanvas {
        fn stroke_rect(&mut self, rect: RegionRect, brush: Brush) {
            self.calls.push(DrawCall::StrokeRect { rect, brush });
        }

        fn draw_text_box(&mut self, text: &str, x: f64, y: f64) {
            self.calls.push(DrawCall::TextBox {
                text: text.to_string(),
                x,
                y,
            });
        }
    }

    #[test]
    fn idle_tick_issues_no_draw_calls() {
        let tool = BoundsToolState::new();
        let mut canvas = RecordingCanvas::default();

        draw_measure_tick(&tool, Point::new(300.0, 300.0), &mut canvas);

        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn measuring_tick_strokes_rect_and_labels_at_anchor() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(100.0, 100.0));
        let mut canvas = RecordingCanvas::default();

        draw_measure_tick(&tool, Point::new(150.0, 80.0), &mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::StrokeRect {
                    rect: RegionRect {
                        left: 100.0,
                        top: 100.0,
                        right: 150.0,
                        bottom: 80.0,
                    },
                    brush: Brush::Line,
                },
                DrawCall::TextBox {
                    text: "50 x 20".to_string(),
                    x: 100.0,
                    y: 100.0,
                },
            ]
        );
    }

    #[test]
    fn rectangle_is_never_normalized() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(200.0, 150.0));
        let mut canvas = RecordingCanvas::default();

        draw_measure_tick(&tool, Point::new(40.0, 300.0), &mut canvas);

        match &canvas.calls[0] {
            DrawCall::StrokeRect { rect, .. } => {
                assert_eq!(rect.left, 200.0);
                assert_eq!(rect.top, 150.0);
                assert_eq!(rect.right, 40.0);
                assert_eq!(rect.bottom, 300.0);
            }
            other => panic!("expected rect stroke, got {:?}", other),
        }
        match &canvas.calls[1] {
            DrawCall::TextBox { text, .. } => assert_eq!(text, "160 x 150"),
            other => panic!("expected text box, got {:?}", other),
        }
    }

    #[test]
    fn zero_delta_measurement_labels_zero_by_zero() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(640.0, 360.0));
        let mut canvas = RecordingCanvas::default();

        draw_measure_tick(&tool, Point::new(640.0, 360.0), &mut canvas);

        assert_eq!(canvas.calls.len(), 2);
        match &canvas.calls[1] {
            DrawCall::TextBox { text, .. } => assert_eq!(text, "0 x 0"),
            other => panic!("expected text box, got {:?}", other),
        }
    }

    #[test]
    fn identical_ticks_produce_identical_call_sequences() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(10.0, 20.0));
        let pointer = Point::new(75.5, 42.5);

        let mut first = RecordingCanvas::default();
        draw_measure_tick(&tool, pointer, &mut first);
        let mut second = RecordingCanvas::default();
        draw_measure_tick(&tool, pointer, &mut second);

        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn anchor_cleared_between_ticks_stops_drawing() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(10.0, 10.0));
        let pointer = Point::new(50.0, 50.0);

        let mut first = RecordingCanvas::default();
        draw_measure_tick(&tool, pointer, &mut first);
        assert_eq!(first.calls.len(), 2);

        tool.cancel();

        let mut second = RecordingCanvas::default();
        draw_measure_tick(&tool, pointer, &mut second);
        assert!(second.calls.is_empty());
    }

    #[test]
    fn huge_coordinates_do_not_panic() {
        let mut tool = BoundsToolState::new();
        tool.begin(Point::new(-1.0e12, 1.0e12));
        let mut canvas = RecordingCanvas::default();

        draw_measure_tick(&tool, Point::new(1.0e12, -1.0e12), &mut canvas);

        assert_eq!(canvas.calls.len(), 2);
    }
}
