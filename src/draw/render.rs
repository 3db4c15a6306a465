//! Cairo-based rendering for the measurement overlay.

use super::brush::{Brush, BrushPalette};
use super::font::LabelFont;
use crate::util::RegionRect;

/// Styling for the measurement label box.
#[derive(Debug, Clone)]
pub struct LabelStyle {
    /// Font for the label digits
    pub font: LabelFont,
    /// Padding between the digits and the box edge, in pixels
    pub padding: f64,
    /// Label box border width in pixels
    pub border_width: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: LabelFont::default(),
            padding: 6.0,
            border_width: 1.0,
        }
    }
}

/// Per-frame drawing surface for the measurement overlay.
///
/// This is the seam between the tick renderer and the host renderer: the
/// tick issues draw calls against this trait, and the backend supplies a
/// Cairo-backed implementation. Tests supply a recording implementation.
pub trait OverlayCanvas {
    /// Strokes the outline of a measurement rectangle with the given brush.
    ///
    /// The rectangle may be inverted (right < left, bottom < top); the
    /// implementation draws the same outline either way.
    fn stroke_rect(&mut self, rect: RegionRect, brush: Brush);

    /// Draws the measurement label box centered at the given position.
    fn draw_text_box(&mut self, text: &str, x: f64, y: f64);
}

/// Cairo implementation of [`OverlayCanvas`].
///
/// Borrows the frame's Cairo context together with the session palette and
/// label style; owns no resources and releases nothing.
pub struct CairoCanvas<'a> {
    ctx: &'a cairo::Context,
    palette: &'a BrushPalette,
    style: &'a LabelStyle,
    line_thickness: f64,
}

impl<'a> CairoCanvas<'a> {
    /// Creates a canvas for one frame.
    pub fn new(
        ctx: &'a cairo::Context,
        palette: &'a BrushPalette,
        style: &'a LabelStyle,
        line_thickness: f64,
    ) -> Self {
        Self {
            ctx,
            palette,
            style,
            line_thickness,
        }
    }

    fn set_brush(&self, brush: Brush) {
        let color = self.palette.color(brush);
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl OverlayCanvas for CairoCanvas<'_> {
    fn stroke_rect(&mut self, rect: RegionRect, brush: Brush) {
        self.set_brush(brush);
        self.ctx.set_line_width(self.line_thickness);
        self.ctx.set_line_join(cairo::LineJoin::Miter);

        // Cairo wants an origin plus positive extent; the measurement rect
        // keeps its corner order, so reorder only for the path.
        let x = rect.left.min(rect.right);
        let y = rect.top.min(rect.bottom);
        let w = (rect.right - rect.left).abs();
        let h = (rect.bottom - rect.top).abs();

        self.ctx.rectangle(x, y, w, h);
        let _ = self.ctx.stroke();
    }

    fn draw_text_box(&mut self, text: &str, x: f64, y: f64) {
        if text.is_empty() {
            return;
        }

        self.ctx.save().ok();

        // Best (gray) antialiasing; subpixel causes fringing on ARGB overlays.
        self.ctx.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(self.ctx);
        let font_desc = pango::FontDescription::from_string(&self.style.font.to_pango_string());
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        let (_ink_rect, logical_rect) = layout.extents();
        let scale = pango::SCALE as f64;
        let text_width = logical_rect.width() as f64 / scale;
        let text_height = logical_rect.height() as f64 / scale;

        let padding = self.style.padding;
        let box_width = text_width + padding * 2.0;
        let box_height = text_height + padding * 2.0;
        let box_x = x - box_width / 2.0;
        let box_y = y - box_height / 2.0;

        // Box fill behind the digits
        self.set_brush(Brush::MeasureBackground);
        self.ctx.rectangle(box_x, box_y, box_width, box_height);
        let _ = self.ctx.fill();

        // Box border
        if self.style.border_width > 0.0 {
            self.set_brush(Brush::MeasureBorder);
            self.ctx.set_line_width(self.style.border_width);
            self.ctx.rectangle(box_x, box_y, box_width, box_height);
            let _ = self.ctx.stroke();
        }

        // Digits
        self.set_brush(Brush::MeasureNumbers);
        self.ctx.move_to(box_x + padding, box_y + padding);
        pangocairo::functions::show_layout(self.ctx, &layout);

        self.ctx.restore().ok();
    }
}

/// Clears the whole surface to fully transparent.
///
/// Called at the start of every frame before the tick renderer runs.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.set_operator(cairo::Operator::Over);
}
