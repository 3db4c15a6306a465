// Feeds pointer events into the measurement gesture and tracks the live
// pointer position the per-frame tick reads.
use log::{debug, info, warn};
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::{draw::MeasureLabel, export, input::MouseButton, util::Point};

use super::super::state::WaylandState;

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let position = Point::new(event.position.0, event.position.1);
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({}, {})", position.x, position.y);
                    self.pointer = position;
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                }
                PointerEventKind::Motion { .. } => {
                    self.pointer = position;
                    self.input_state.on_mouse_motion(position);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!(
                        "Button {} pressed at ({}, {})",
                        button, position.x, position.y
                    );

                    let mb = match button {
                        BTN_LEFT => MouseButton::Left,
                        BTN_MIDDLE => MouseButton::Middle,
                        BTN_RIGHT => MouseButton::Right,
                        _ => continue,
                    };

                    self.pointer = position;
                    self.input_state.on_mouse_press(mb, position);
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);

                    let mb = match button {
                        BTN_LEFT => MouseButton::Left,
                        BTN_MIDDLE => MouseButton::Middle,
                        BTN_RIGHT => MouseButton::Right,
                        _ => continue,
                    };

                    self.pointer = position;
                    if let Some(rect) = self.input_state.on_mouse_release(mb, position) {
                        let label = MeasureLabel::format(rect.width(), rect.height());
                        info!("Measured {}", label.as_str());

                        if self.config.export.copy_on_release
                            && let Err(e) = export::copy_measurement(label.as_str())
                        {
                            warn!("Failed to copy measurement to clipboard: {}", e);
                        }
                    }
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}
