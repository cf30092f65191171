// File: crates/sweep-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the sweep `Surface`, with PNG and RGBA8 export.

use anyhow::{Context, Result};
use skia_safe as skia;
use sweep_core::geometry::{Color, Point};
use sweep_core::render::{Surface, TextStyle};

pub mod text;

pub use text::TextShaper;

#[inline]
fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(sk_color(color));
    paint
}

/// Offscreen raster canvas that the core scene draws into.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: i32,
    height: i32,
    draw_text: bool,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        Ok(Self { surface, shaper: TextShaper::new(), width, height, draw_text: true })
    }

    /// Disable text for output that must not depend on installed fonts.
    pub fn with_text(mut self, draw_text: bool) -> Self {
        self.draw_text = draw_text;
        self
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// Recreate the backing surface if the size changed. Contents are lost.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels; returns `(pixels, width, height, row_bytes)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, self.width, self.height, row_bytes))
    }
}

impl Surface for SkiaSurface {
    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(sk_color(color));
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let paint = stroke_paint(color, width);
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn polyline(&mut self, points: &[Point], color: Color, width: f32) {
        let Some((first, rest)) = points.split_first() else { return };
        if rest.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        self.surface.canvas().draw_path(&path, &stroke_paint(color, width));
    }

    fn circle(&mut self, center: Point, diameter: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(sk_color(color));
        self.surface.canvas().draw_circle((center.x, center.y), diameter / 2.0, &paint);
    }

    fn text(&mut self, text: &str, at: Point, style: TextStyle) {
        if !self.draw_text || text.is_empty() {
            return;
        }
        let canvas = self.surface.canvas();
        self.shaper.draw_aligned(canvas, text, at.x, at.y, style.size, sk_color(style.color), style.h, style.v);
    }
}
