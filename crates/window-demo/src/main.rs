// File: crates/window-demo/src/main.rs
// Summary: Windowed sweep; renders each frame with Skia on the CPU and blits it via winit + softbuffer.
// Usage: sweep-window-demo [CSV] [--config FILE]
// Keys: F freehand on/off, C clear strokes, +/- speed, Esc quit. Drop a CSV on the window to load it.

mod audio;

use anyhow::{Context, Result};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sweep_core::telemetry;
use sweep_core::{Point, SalesSweep, SweepConfig};
use sweep_render_skia::SkiaSurface;
use tracing::{error, info};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::audio::RodioAudio;

const FRAME: Duration = Duration::from_micros(16_667);

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();

    let mut csv = None;
    let mut config = SweepConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        if a == "--config" {
            let p = args.next().context("--config needs a value")?;
            config = SweepConfig::from_json_file(&p).with_context(|| format!("failed to read config '{p}'"))?;
        } else {
            csv = Some(resolve_path_simple(&a));
        }
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(format!("{} - Sales Sweep", config.labels.title))
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut canvas = SkiaSurface::new(size.width as i32, size.height as i32)?;
    let mut app = SalesSweep::new(config, RodioAudio::default(), size.width as f32, size.height as f32);
    if let Some(path) = csv {
        info!(path = %path.display(), "loading");
        app.begin_load(path);
    }

    let mut cursor = Point::default();
    let mut next_frame = Instant::now();

    event_loop.run(move |event, _, cf| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Escape), .. },
                ..
            } => {
                *cf = ControlFlow::Exit;
            }
            WindowEvent::Resized(new_size) => {
                size = new_size;
                app.on_resize(size.width as f32, size.height as f32);
            }
            WindowEvent::ReceivedCharacter(ch) => {
                if let Some(cmd) = app.on_key(ch) {
                    info!(?cmd, speed = app.engine().speed(), "key");
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Point::new(position.x as f32, position.y as f32);
                app.on_pointer_move(cursor);
            }
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                ElementState::Pressed => app.on_pointer_press(cursor),
                ElementState::Released => app.on_pointer_release(),
            },
            WindowEvent::DroppedFile(path) => {
                info!(path = %path.display(), "file dropped");
                app.begin_load(path);
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            let now = Instant::now();
            if now >= next_frame {
                window.request_redraw();
                next_frame = (next_frame + FRAME).max(now);
            }
            if *cf != ControlFlow::Exit {
                *cf = ControlFlow::WaitUntil(next_frame);
            }
        }
        Event::RedrawRequested(_) => {
            if let Err(e) = present(&mut surface, &mut canvas, &app, size.width, size.height) {
                error!(error = %e, "present failed");
                *cf = ControlFlow::Exit;
                return;
            }
            app.on_tick();
        }
        _ => {}
    });
}

/// Render the current frame and copy it into the window buffer as 0RGB.
fn present(
    surface: &mut softbuffer::Surface,
    canvas: &mut SkiaSurface,
    app: &SalesSweep<RodioAudio>,
    width: u32,
    height: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        // Minimized
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    canvas.resize(width as i32, height as i32)?;
    app.render(canvas);

    let (rgba, ..) = canvas.to_rgba8()?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | (px[2] as u32);
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path_simple(raw: &str) -> PathBuf {
    let p = Path::new(raw);
    if p.exists() {
        return p.to_path_buf();
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return alt;
        }
    }
    p.to_path_buf()
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => Some(p.with_extension("csv")),
        "csv" => Some(p.with_extension("cvs")),
        _ => None,
    }
}
