// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; provides the per-frame rendering entry point used across them.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, wlr_layer::LayerShell},
    shm::Shm,
};
use wayland_client::{QueueHandle, protocol::wl_shm};

use crate::{
    config::Config,
    draw::{BrushPalette, CairoCanvas, LabelStyle, clear_surface},
    input::InputState,
    tool::draw_measure_tick,
    util::Point,
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) layer_shell: LayerShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,

    // Surface and buffer management
    pub(super) surface: SurfaceState,

    // Configuration and per-session render resources
    pub(super) config: Config,
    pub(super) palette: BrushPalette,
    pub(super) label_style: LabelStyle,

    // Input state
    pub(super) input_state: InputState,
    /// Last known pointer position in surface-local coordinates.
    ///
    /// Updated on every pointer event; when no event arrives (or the
    /// compositor fails to deliver one) the previous position is reused, so
    /// a tick never aborts on a missing pointer sample.
    pub(super) pointer: Point,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        layer_shell: LayerShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
    ) -> Self {
        let palette = config.brush_palette();
        let label_style = config.label_style();
        Self {
            registry_state,
            compositor_state,
            layer_shell,
            shm,
            output_state,
            seat_state,
            surface: SurfaceState::new(),
            config,
            palette,
            label_style,
            input_state,
            pointer: Point::new(0.0, 0.0),
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: This unsafe block creates a Cairo surface from a raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `canvas` is a valid mutable slice from SlotPool with exactly (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are explicitly dropped before the buffer is committed to
        //    Wayland, ensuring Cairo doesn't access memory after ownership transfers
        // 5. No other references to this memory exist during Cairo's usage
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Clear to fully transparent, then run the measurement tick
        clear_surface(&ctx);

        let mut overlay_canvas = CairoCanvas::new(
            &ctx,
            &self.palette,
            &self.label_style,
            self.config.line.thickness,
        );
        draw_measure_tick(&self.input_state.tool, self.pointer, &mut overlay_canvas);

        // Flush Cairo before handing the buffer back to the compositor
        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        // Attach buffer and commit
        let wl_surface = self
            .surface
            .layer_surface()
            .context("Layer surface not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        // The tick redraws the whole frame, so damage the full surface
        let surface_width = width.min(i32::MAX as u32) as i32;
        let surface_height = height.min(i32::MAX as u32) as i32;
        wl_surface.damage_buffer(0, 0, surface_width, surface_height);

        if self.config.performance.enable_vsync {
            debug!("Requesting frame callback (vsync enabled)");
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();

        Ok(())
    }
}
