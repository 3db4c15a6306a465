//! Input state and gesture handling for the measurement overlay.

use log::debug;

use crate::tool::BoundsToolState;
use crate::util::{Point, RegionRect};

use super::events::{Key, MouseButton};

/// Owns the measurement gesture state and translates input events into
/// tool-state transitions.
///
/// All mutation happens here, on the UI thread; the tick renderer only ever
/// reads [`InputState::tool`].
#[derive(Debug, Default)]
pub struct InputState {
    /// The bounds-measurement tool (anchor holder)
    pub tool: BoundsToolState,
    /// Whether the user requested to close the overlay
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates a fresh input state in the idle state.
    pub fn new() -> Self {
        Self {
            tool: BoundsToolState::new(),
            should_exit: false,
            needs_redraw: true,
        }
    }

    /// Processes a mouse button press at surface-local coordinates.
    ///
    /// - Left press while idle anchors a new measurement.
    /// - Right press cancels the in-progress measurement.
    pub fn on_mouse_press(&mut self, button: MouseButton, at: Point) {
        match button {
            MouseButton::Left => {
                self.tool.begin(at);
                self.needs_redraw = true;
            }
            MouseButton::Right => {
                if self.tool.is_measuring() {
                    debug!("Measurement cancelled by right click");
                    self.tool.cancel();
                    self.needs_redraw = true;
                }
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion; only triggers a redraw while measuring,
    /// since an idle tick draws nothing.
    pub fn on_mouse_motion(&mut self, _at: Point) {
        if self.tool.is_measuring() {
            self.needs_redraw = true;
        }
    }

    /// Processes a mouse button release.
    ///
    /// A left release while measuring ends the gesture and returns the final
    /// rectangle for the caller to report (log, clipboard).
    pub fn on_mouse_release(&mut self, button: MouseButton, at: Point) -> Option<RegionRect> {
        if button != MouseButton::Left {
            return None;
        }

        let rect = self.tool.finish(at)?;
        self.needs_redraw = true;
        Some(rect)
    }

    /// Processes a key press.
    ///
    /// Escape cancels the in-progress measurement, or closes the overlay
    /// when idle. `q` always closes the overlay.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Escape => {
                if self.tool.is_measuring() {
                    debug!("Measurement cancelled by Escape");
                    self.tool.cancel();
                    self.needs_redraw = true;
                } else {
                    self.should_exit = true;
                }
            }
            Key::Char('q') | Key::Char('Q') => {
                self.should_exit = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_press_anchors_measurement() {
        let mut input = InputState::new();
        input.on_mouse_press(MouseButton::Left, Point::new(100.0, 100.0));
        assert!(input.tool.is_measuring());
        assert_eq!(input.tool.anchor(), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn left_release_finishes_and_returns_rect() {
        let mut input = InputState::new();
        input.on_mouse_press(MouseButton::Left, Point::new(100.0, 100.0));

        let rect = input
            .on_mouse_release(MouseButton::Left, Point::new(150.0, 80.0))
            .unwrap();
        assert_eq!(rect.width(), 50.0);
        assert_eq!(rect.height(), 20.0);
        assert!(!input.tool.is_measuring());
    }

    #[test]
    fn right_click_cancels_without_result() {
        let mut input = InputState::new();
        input.on_mouse_press(MouseButton::Left, Point::new(10.0, 10.0));
        input.on_mouse_press(MouseButton::Right, Point::new(20.0, 20.0));
        assert!(!input.tool.is_measuring());
        assert!(
            input
                .on_mouse_release(MouseButton::Left, Point::new(30.0, 30.0))
                .is_none()
        );
    }

    #[test]
    fn escape_cancels_then_exits() {
        let mut input = InputState::new();
        input.on_mouse_press(MouseButton::Left, Point::new(10.0, 10.0));

        input.on_key_press(Key::Escape);
        assert!(!input.tool.is_measuring());
        assert!(!input.should_exit);

        input.on_key_press(Key::Escape);
        assert!(input.should_exit);
    }

    #[test]
    fn motion_only_redraws_while_measuring() {
        let mut input = InputState::new();
        input.needs_redraw = false;

        input.on_mouse_motion(Point::new(5.0, 5.0));
        assert!(!input.needs_redraw);

        input.on_mouse_press(MouseButton::Left, Point::new(0.0, 0.0));
        input.needs_redraw = false;
        input.on_mouse_motion(Point::new(5.0, 5.0));
        assert!(input.needs_redraw);
    }

    #[test]
    fn q_exits_immediately() {
        let mut input = InputState::new();
        input.on_key_press(Key::Char('q'));
        assert!(input.should_exit);
    }
}
