use cairo::{Context, ImageSurface};
use waymeasure::draw::{BrushPalette, CairoCanvas, LabelStyle, clear_surface};
use waymeasure::input::{InputState, MouseButton};
use waymeasure::tool::draw_measure_tick;
use waymeasure::util::Point;

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

#[test]
fn measuring_tick_renders_pixels() {
    let mut input = InputState::new();
    input.on_mouse_press(MouseButton::Left, Point::new(100.0, 100.0));

    let palette = BrushPalette::default();
    let style = LabelStyle::default();
    let (mut surface, ctx) = surface_with_context(400, 300);
    clear_surface(&ctx);

    let mut canvas = CairoCanvas::new(&ctx, &palette, &style, 2.0);
    draw_measure_tick(&input.tool, Point::new(250.0, 200.0), &mut canvas);
    drop(canvas);
    drop(ctx);

    assert!(
        surface_has_pixels(&mut surface),
        "an active measurement should render the rectangle and label"
    );
}

#[test]
fn idle_tick_leaves_surface_empty() {
    let input = InputState::new();

    let palette = BrushPalette::default();
    let style = LabelStyle::default();
    let (mut surface, ctx) = surface_with_context(400, 300);
    clear_surface(&ctx);

    let mut canvas = CairoCanvas::new(&ctx, &palette, &style, 2.0);
    draw_measure_tick(&input.tool, Point::new(250.0, 200.0), &mut canvas);
    drop(canvas);
    drop(ctx);

    assert!(
        !surface_has_pixels(&mut surface),
        "an idle tick must not touch the surface"
    );
}

#[test]
fn cancelled_measurement_renders_nothing() {
    let mut input = InputState::new();
    input.on_mouse_press(MouseButton::Left, Point::new(50.0, 50.0));
    input.on_mouse_press(MouseButton::Right, Point::new(60.0, 60.0));

    let palette = BrushPalette::default();
    let style = LabelStyle::default();
    let (mut surface, ctx) = surface_with_context(200, 200);
    clear_surface(&ctx);

    let mut canvas = CairoCanvas::new(&ctx, &palette, &style, 2.0);
    draw_measure_tick(&input.tool, Point::new(120.0, 120.0), &mut canvas);
    drop(canvas);
    drop(ctx);

    assert!(!surface_has_pixels(&mut surface));
}

#[test]
fn inverted_drag_still_renders() {
    let mut input = InputState::new();
    input.on_mouse_press(MouseButton::Left, Point::new(300.0, 250.0));

    let palette = BrushPalette::default();
    let style = LabelStyle::default();
    let (mut surface, ctx) = surface_with_context(400, 300);
    clear_surface(&ctx);

    let mut canvas = CairoCanvas::new(&ctx, &palette, &style, 2.0);
    // Pointer up-left of the anchor; the rectangle is inverted but still drawn
    draw_measure_tick(&input.tool, Point::new(40.0, 30.0), &mut canvas);
    drop(canvas);
    drop(ctx);

    assert!(surface_has_pixels(&mut surface));
}
