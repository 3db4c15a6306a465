use anyhow::Result;

pub mod wayland;

/// Run the Wayland backend with its full event loop.
///
/// Blocks until the user closes the overlay or the compositor destroys the
/// layer surface.
pub fn run_wayland() -> Result<()> {
    let mut backend = wayland::WaylandBackend::new();
    backend.run()
}
