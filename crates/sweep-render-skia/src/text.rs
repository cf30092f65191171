// File: crates/sweep-render-skia/src/text.rs
// Summary: Paragraph-based text shaping with anchor alignment, using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use sweep_core::render::{HAlign, VAlign};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Latin-1 accents (Año, Audífonos) are covered by all of these
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so that `(x, y)` is the requested anchor of its box.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_aligned(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        h: HAlign,
        v: VAlign,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let ht = p.height();
        let dx = match h {
            HAlign::Left => 0.0,
            HAlign::Center => -w / 2.0,
            HAlign::Right => -w,
        };
        let dy = match v {
            VAlign::Top => 0.0,
            VAlign::Center => -ht / 2.0,
            VAlign::Bottom => -ht,
        };
        p.paint(canvas, (x + dx, y + dy));
    }
}
