//! Wayland backend using wlr-layer-shell for the overlay surface.

mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
