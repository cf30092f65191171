// File: crates/sweep-core/benches/engine_bench.rs
// Summary: Per-frame cost of ticking the sweep and composing the scene.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sweep_core::config::DataConfig;
use sweep_core::{NullAudio, RecordingSurface, SalesSweep, SweepConfig};

fn build_sweep(periods: usize) -> SalesSweep<NullAudio> {
    let labels = (0..periods).map(|i| format!("P{i}")).collect();
    let cfg = SweepConfig {
        data: DataConfig { period_labels: labels, seed: Some(7), ..DataConfig::default() },
        ..SweepConfig::default()
    };
    let mut app = SalesSweep::new(cfg, NullAudio, 1280.0, 720.0);
    app.unlock_audio();
    app
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    for &n in &[6usize, 120usize] {
        group.bench_function(format!("periods_{n}"), |b| {
            let mut app = build_sweep(n);
            b.iter(|| black_box(app.on_tick()));
        });
    }
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_frame_recording");
    for &n in &[6usize, 120usize] {
        group.bench_function(format!("periods_{n}"), |b| {
            let mut app = build_sweep(n);
            for _ in 0..25 {
                app.on_tick();
            }
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                app.render(&mut surface);
                black_box(surface.ops.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick, bench_frame);
criterion_main!(benches);
