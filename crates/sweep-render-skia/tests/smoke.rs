// File: crates/sweep-render-skia/tests/smoke.rs
// Purpose: End-to-end render of a seeded sweep through Skia, written as a PNG.

use sweep_core::config::DataConfig;
use sweep_core::{NullAudio, SalesSweep, SweepConfig};
use sweep_render_skia::SkiaSurface;

#[test]
fn render_smoke_png() {
    let cfg = SweepConfig { data: DataConfig { seed: Some(3), ..DataConfig::default() }, ..SweepConfig::default() };
    let mut app = SalesSweep::new(cfg, NullAudio, 800.0, 500.0);
    for _ in 0..20 {
        app.on_tick();
    }

    let mut surface = SkiaSurface::new(800, 500).expect("surface");
    app.render(&mut surface);

    let out = std::path::PathBuf::from("target/test_out/sweep_smoke.png");
    surface.write_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = surface.png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn resize_replaces_backing_surface() {
    let mut surface = SkiaSurface::new(0, -5).expect("surface");
    assert_eq!((surface.width(), surface.height()), (1, 1));
    surface.resize(320, 200).expect("resize");
    assert_eq!((surface.width(), surface.height()), (320, 200));
}
