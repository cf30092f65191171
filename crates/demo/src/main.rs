// File: crates/demo/src/main.rs
// Summary: Headless demo; loads a sales CSV (or synthetic data), runs the sweep and writes PNG frames.
// Usage: sweep-demo [CSV] [--frames N] [--every K] [--config FILE] [--out DIR] [--seed S]

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use sweep_core::audio::{AudioPort, Envelope};
use sweep_core::telemetry;
use sweep_core::{Activity, SalesSweep, SweepConfig};
use sweep_render_skia::SkiaSurface;
use tracing::info;

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 640;

/// Audio port for headless runs: every cue ends up in the log.
#[derive(Default)]
struct LogAudio {
    hz: f64,
}

impl AudioPort for LogAudio {
    fn unlock(&mut self) {}
    fn set_frequency(&mut self, hz: f64) {
        self.hz = hz;
    }
    fn trigger_envelope(&mut self, env: Envelope) {
        info!(hz = format_args!("{:.1}", self.hz), peak = env.peak, "blip");
    }
}

struct Args {
    csv: Option<String>,
    frames: usize,
    every: usize,
    config: Option<PathBuf>,
    out: PathBuf,
    seed: Option<u64>,
}

impl Args {
    fn parse(mut it: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = Args { csv: None, frames: 300, every: 10, config: None, out: PathBuf::from("target/out"), seed: None };
        while let Some(a) = it.next() {
            let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value"));
            match a.as_str() {
                "--frames" => args.frames = value("--frames")?.parse().context("--frames expects a count")?,
                "--every" => args.every = value("--every")?.parse().context("--every expects a count")?,
                "--config" => args.config = Some(PathBuf::from(value("--config")?)),
                "--out" => args.out = PathBuf::from(value("--out")?),
                "--seed" => args.seed = Some(value("--seed")?.parse().context("--seed expects an integer")?),
                flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
                _ => args.csv = Some(a.clone()),
            }
        }
        args.every = args.every.max(1);
        Ok(args)
    }
}

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();
    let args = Args::parse(std::env::args().skip(1))?;

    let mut config = match &args.config {
        Some(p) => SweepConfig::from_json_file(p).with_context(|| format!("failed to read config '{}'", p.display()))?,
        None => SweepConfig::default(),
    };
    if args.seed.is_some() {
        config.data.seed = args.seed;
    }

    let mut app = SalesSweep::new(config, LogAudio::default(), WIDTH as f32, HEIGHT as f32);
    app.unlock_audio();

    if let Some(raw) = &args.csv {
        let (path, used_alt) = resolve_path(raw)?;
        println!("Using input file: {}", path.display());
        if used_alt {
            println!("  (extension swapped between .csv/.cvs)");
        }
        app.begin_load(path.clone());
        let rows = app
            .wait_for_load(Duration::from_secs(30))
            .with_context(|| format!("timed out loading '{}'", path.display()))?
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        println!("Loaded {rows} rows");
    }

    let mut surface = SkiaSurface::new(WIDTH, HEIGHT)?;
    let mut written = 0usize;
    for frame in 0..args.frames {
        if frame % args.every == 0 {
            app.render(&mut surface);
            let out = args.out.join(format!("sweep_{frame:05}.png"));
            surface.write_png(&out)?;
            written += 1;
        }
        let status = app.on_tick();
        if status.rollover {
            println!("frame {frame}: year -> {}", app.source().year());
        }
        if status.activity == Activity::Idle {
            println!("No data for year {}; stopping after frame {frame}", app.source().year());
            break;
        }
    }
    println!("Wrote {written} frames to {}", args.out.display());
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let alt = match ext.as_str() {
        "cvs" => "csv",
        "csv" => "cvs",
        _ => return None,
    };
    Some(p.with_extension(alt))
}
