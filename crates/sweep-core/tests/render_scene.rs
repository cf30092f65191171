// File: crates/sweep-core/tests/render_scene.rs
// Purpose: Scene composition through the recording surface and the app's input/audio wiring.

mod common;

use approx::assert_relative_eq;

use sweep_core::config::{AnimationConfig, DataConfig, DataMode};
use sweep_core::render::{DrawOp, RecordingSurface};
use sweep_core::{Activity, Point, SalesSweep, SweepConfig};

fn seeded() -> SweepConfig {
    SweepConfig { data: DataConfig { seed: Some(11), ..DataConfig::default() }, ..SweepConfig::default() }
}

fn sweep(cfg: SweepConfig) -> SalesSweep<common::RecordingAudio> {
    SalesSweep::new(cfg, common::RecordingAudio::default(), 1024.0, 640.0)
}

#[test]
fn first_frame_shows_one_row_and_one_marker() {
    let app = sweep(seeded());
    let mut surface = RecordingSurface::new();
    app.render(&mut surface);

    assert!(matches!(surface.ops[0], DrawOp::Clear(_)));
    assert_eq!(surface.circles(), 1);
    let texts = surface.texts();
    assert!(texts.contains(&"Ventas semestrales"));
    assert!(texts.contains(&"Año 2022"));
    let first = &app.engine().dataset().records[0];
    assert!(texts.contains(&first.category.as_str()));
}

#[test]
fn rows_and_markers_track_the_step() {
    let mut app = sweep(seeded());
    for _ in 0..28 {
        app.on_tick();
    }
    let step = app.engine().position().expect("data").step;
    assert_eq!(step, 2);

    let mut surface = RecordingSurface::new();
    app.render(&mut surface);
    assert_eq!(surface.circles(), step + 1);

    // Curve: swept points plus the interpolated head
    let curve = surface.polylines()[0].to_vec();
    assert_eq!(curve.len(), step + 1);
    assert_eq!(curve.last().copied(), app.engine().interpolated_point());
}

#[test]
fn imported_mode_without_file_shows_placeholder() {
    let cfg = SweepConfig { data: DataConfig { mode: DataMode::Imported, ..DataConfig::default() }, ..SweepConfig::default() };
    let mut app = sweep(cfg);
    assert_eq!(app.on_tick().activity, Activity::Idle);

    let mut surface = RecordingSurface::new();
    app.render(&mut surface);
    assert_eq!(surface.texts(), vec![app.config().labels.placeholder.as_str()]);
    assert_eq!(surface.circles(), 0);
}

#[test]
fn audio_stays_silent_until_first_press() {
    let mut app = sweep(seeded());
    for _ in 0..10 {
        assert_eq!(app.on_tick().cue, None);
    }
    assert!(app.audio().port().events.is_empty());

    app.on_pointer_press(Point::new(5.0, 5.0));
    app.on_pointer_release();
    let status = app.on_tick();
    assert!(status.cue.is_some());
    let port = app.audio().port();
    assert_eq!(port.events[0], common::AudioEvent::Unlock);
    assert_eq!(port.frequencies().len(), 1);

    // A second press does not unlock again
    app.on_pointer_press(Point::new(5.0, 5.0));
    let unlocks = app.audio().port().events.iter().filter(|e| **e == common::AudioEvent::Unlock).count();
    assert_eq!(unlocks, 1);
}

#[test]
fn cue_frequencies_follow_values() {
    let mut app = sweep(seeded());
    app.on_pointer_press(Point::new(1.0, 1.0));
    loop {
        if app.on_tick().rollover {
            break;
        }
    }
    let freqs = app.audio().port().frequencies();
    assert_eq!(freqs.len(), 6);
    for hz in freqs {
        // Synthetic values are drawn from 40..95
        assert!((200.0..1200.0).contains(&hz), "{hz}");
    }
}

#[test]
fn keys_adjust_speed_and_freehand() {
    let cfg = SweepConfig { animation: AnimationConfig::default(), ..seeded() };
    let mut app = sweep(cfg);
    app.on_key('+');
    assert_relative_eq!(app.engine().speed(), 0.025, epsilon = 1e-12);
    for _ in 0..100 {
        app.on_key('+');
    }
    assert_eq!(app.engine().speed(), 0.1);
    for _ in 0..100 {
        app.on_key('-');
    }
    assert_eq!(app.engine().speed(), 0.001);

    assert!(!app.freehand().is_enabled());
    app.on_key('F');
    app.on_pointer_press(Point::new(100.0, 100.0));
    app.on_pointer_move(Point::new(120.0, 110.0));
    app.on_pointer_release();
    assert_eq!(app.freehand().strokes().len(), 1);

    let mut surface = RecordingSurface::new();
    app.render(&mut surface);
    let last = surface.polylines().last().map(|p| p.len());
    assert_eq!(last, Some(2));

    app.on_key('C');
    assert!(app.freehand().strokes().is_empty());
}

#[test]
fn rollover_clears_strokes_and_advances_year() {
    let mut app = sweep(seeded());
    app.on_key('F');
    app.on_pointer_press(Point::new(10.0, 10.0));
    app.on_pointer_move(Point::new(20.0, 20.0));
    app.on_pointer_release();
    let year = app.source().year();
    while !app.on_tick().rollover {}
    assert!(app.freehand().strokes().is_empty());
    assert_eq!(app.source().year(), year + 1);
    assert_eq!(app.engine().state().progress, 0.0);
}

#[test]
fn resize_keeps_progress_and_moves_points() {
    let mut app = sweep(seeded());
    for _ in 0..12 {
        app.on_tick();
    }
    let progress = app.engine().state().progress;
    let before = app.engine().dataset().points.clone();
    app.on_resize(2048.0, 1280.0);
    assert_eq!(app.engine().state().progress, progress);
    assert_ne!(app.engine().dataset().points, before);
    assert_eq!(app.engine().dataset().records.len(), before.len());
}

#[test]
fn loaded_file_without_the_current_year_names_it() {
    let cfg = SweepConfig { data: DataConfig { mode: DataMode::Imported, ..DataConfig::default() }, ..SweepConfig::default() };
    let mut app = sweep(cfg);
    let rows = vec![sweep_core::RawRecord { year: 2020, month: "Ene".into(), product: "Tablet".into(), sales: 60.0 }];
    app.on_data_loaded(rows);

    assert_eq!(app.source().year(), 2016);
    assert_eq!(app.on_tick().activity, Activity::Idle);
    let mut surface = RecordingSurface::new();
    app.render(&mut surface);
    let want = format!("{} 2016", app.config().labels.no_data);
    assert_eq!(surface.texts(), vec![want.as_str()]);
}
