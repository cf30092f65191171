// File: crates/sweep-render-skia/tests/rgba.rs
// Purpose: Validate the RGBA8 buffer shape and a few known pixels.

use sweep_core::geometry::{Color, Point};
use sweep_core::{Surface, Theme};
use sweep_render_skia::SkiaSurface;

#[test]
fn render_rgba8_buffer() {
    let mut surface = SkiaSurface::new(64, 32).expect("surface").with_text(false);
    let bg = Theme::dark().background;
    surface.clear(bg);
    surface.circle(Point::new(48.0, 16.0), 10.0, Color::gray(255));

    let (px, w, h, stride) = surface.to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left is background, opaque
    assert_eq!(&px[0..4], &[bg.r, bg.g, bg.b, 255]);
    // Marker centre is white
    let i = 16 * stride + 48 * 4;
    assert_eq!(&px[i..i + 4], &[255, 255, 255, 255]);
}

#[test]
fn single_point_polyline_draws_nothing() {
    let mut surface = SkiaSurface::new(16, 16).expect("surface");
    surface.clear(Color::gray(0));
    surface.polyline(&[Point::new(8.0, 8.0)], Color::gray(255), 3.0);
    let (px, ..) = surface.to_rgba8().expect("rgba render");
    assert!(px.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
}
