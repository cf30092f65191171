// File: crates/sweep-core/src/render.rs
// Summary: Backend-agnostic scene drawing against an immediate-mode `Surface`, plus a recording surface.
// Notes:
// - Drawing never mutates engine or dataset state; everything arrives through `Frame`.

use crate::config::Labels;
use crate::data::Dataset;
use crate::geometry::{Color, Point};
use crate::layout::Layout;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub h: HAlign,
    pub v: VAlign,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color, h: HAlign, v: VAlign) -> Self {
        Self { size, color, h, v }
    }
}

/// Immediate-mode drawing target.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: Point, to: Point, color: Color, width: f32);
    /// Open polyline; fewer than two points draws nothing.
    fn polyline(&mut self, points: &[Point], color: Color, width: f32);
    fn circle(&mut self, center: Point, diameter: f32, color: Color);
    fn text(&mut self, text: &str, at: Point, style: TextStyle);
}

/// What the animated chart currently shows.
#[derive(Clone, Copy, Debug)]
pub struct ChartScene<'a> {
    pub dataset: &'a Dataset,
    /// Last reached step; table rows and markers `0..=step` are visible.
    pub step: usize,
    /// Interpolated head of the curve.
    pub head: Point,
    pub freehand: &'a [Vec<Point>],
}

#[derive(Clone, Copy, Debug)]
pub enum Scene<'a> {
    Loading,
    /// No data to animate.
    Placeholder,
    /// A file is loaded but has nothing for this year.
    NoData { year: i32 },
    Chart(ChartScene<'a>),
}

#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub layout: &'a Layout,
    pub theme: &'a Theme,
    pub labels: &'a Labels,
    pub scene: Scene<'a>,
}

pub fn draw_frame(surface: &mut impl Surface, frame: &Frame<'_>) {
    surface.clear(frame.theme.background);
    match frame.scene {
        Scene::Loading => draw_hint(surface, frame, &frame.labels.loading),
        Scene::Placeholder => draw_hint(surface, frame, &frame.labels.placeholder),
        Scene::NoData { year } => draw_hint(surface, frame, &format!("{} {year}", frame.labels.no_data)),
        Scene::Chart(chart) => {
            draw_title(surface, frame);
            draw_axes(surface, frame, chart.dataset);
            draw_table(surface, frame, &chart);
            draw_curve(surface, frame, &chart);
            draw_markers(surface, frame, &chart);
            for stroke in chart.freehand {
                surface.polyline(stroke, frame.theme.freehand, 2.0);
            }
        }
    }
}

/// "67k", "12.5k".
pub fn format_value(value: f64, suffix: &str) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}{suffix}")
    } else {
        format!("{value:.1}{suffix}")
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_hint(surface: &mut impl Surface, frame: &Frame<'_>, msg: &str) {
    let at = Point::new(frame.layout.width / 2.0, frame.layout.height / 2.0);
    surface.text(msg, at, TextStyle::new(20.0, frame.theme.hint, HAlign::Center, VAlign::Center));
}

fn draw_title(surface: &mut impl Surface, frame: &Frame<'_>) {
    let style = TextStyle::new(24.0, frame.theme.title, HAlign::Left, VAlign::Center);
    surface.text(&frame.labels.title, Point::new(20.0, crate::layout::TITLE_Y), style);
}

fn draw_axes(surface: &mut impl Surface, frame: &Frame<'_>, dataset: &Dataset) {
    let l = frame.layout;
    let t = frame.theme;
    let right = l.origin_x + l.plot_width;

    for (y, value) in l.gridlines() {
        surface.line(Point::new(l.origin_x, y), Point::new(right, y), t.grid, 1.0);
        let label = format_value(value.round(), &frame.labels.value_suffix);
        let style = TextStyle::new(14.0, t.grid_label, HAlign::Right, VAlign::Center);
        surface.text(&label, Point::new(l.origin_x - 10.0, y), style);
    }

    let origin = Point::new(l.origin_x, l.origin_y);
    surface.line(origin, Point::new(right, l.origin_y), t.axis_line, 1.0);
    surface.line(origin, Point::new(l.origin_x, l.origin_y - l.plot_height), t.axis_line, 1.0);

    let style = TextStyle::new(14.0, t.period_label, HAlign::Center, VAlign::Center);
    for (i, r) in dataset.records.iter().enumerate() {
        surface.text(&r.label, Point::new(l.period_x(i), l.origin_y + 20.0), style);
    }
}

fn draw_table(surface: &mut impl Surface, frame: &Frame<'_>, chart: &ChartScene<'_>) {
    let tbl = &frame.layout.table;
    let t = frame.theme;
    let labels = frame.labels;

    if let Some(year) = chart.dataset.year {
        let style = TextStyle::new(16.0, t.table_caption, HAlign::Left, VAlign::Center);
        let caption = format!("{} {year}", labels.year_prefix);
        surface.text(&caption, Point::new(tbl.x, tbl.y - tbl.row_height), style);
    }

    let header = TextStyle::new(14.0, t.table_caption, HAlign::Left, VAlign::Center);
    let heads = [&labels.header_period, &labels.header_category, &labels.header_value];
    for (i, head) in heads.into_iter().enumerate() {
        surface.text(head, Point::new(tbl.col_x(i), tbl.y), header);
    }

    let row = TextStyle::new(12.0, t.table_text, HAlign::Left, VAlign::Center);
    for (i, r) in chart.dataset.records.iter().enumerate().take(chart.step + 1) {
        let y = tbl.row_y(i);
        surface.text(&r.label, Point::new(tbl.col_x(0), y), row);
        surface.text(&r.category, Point::new(tbl.col_x(1), y), row);
        surface.text(&format_value(r.value, &labels.value_suffix), Point::new(tbl.col_x(2), y), row);
    }
}

fn draw_curve(surface: &mut impl Surface, frame: &Frame<'_>, chart: &ChartScene<'_>) {
    let points = &chart.dataset.points;
    let mut path: Vec<Point> = points.iter().take(chart.step).copied().collect();
    path.push(chart.head);
    if path.len() == 1 {
        // Nothing swept yet: a zero-length segment keeps the head visible
        path.push(chart.head);
    }
    surface.polyline(&path, frame.theme.curve, 3.0);
}

fn draw_markers(surface: &mut impl Surface, frame: &Frame<'_>, chart: &ChartScene<'_>) {
    let t = frame.theme;
    let records = &chart.dataset.records;
    let value_style = TextStyle::new(14.0, t.value_label, HAlign::Center, VAlign::Bottom);
    let category_style = TextStyle::new(14.0, t.category_label, HAlign::Center, VAlign::Top);
    for (p, r) in chart.dataset.points.iter().zip(records).take(chart.step + 1) {
        surface.circle(*p, 10.0, t.marker);
        let value = format_value(r.value, &frame.labels.value_suffix);
        surface.text(&value, Point::new(p.x, p.y - 12.0), value_style);
        surface.text(&r.category, Point::new(p.x, p.y + 12.0), category_style);
    }
}

// ---- recording surface ------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Line { from: Point, to: Point, color: Color, width: f32 },
    Polyline { points: Vec<Point>, color: Color, width: f32 },
    Circle { center: Point, diameter: f32, color: Color },
    Text { text: String, at: Point, style: TextStyle },
}

/// Surface that keeps every call; used by tests and benchmarks.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. })).count()
    }

    pub fn polylines(&self) -> Vec<&[Point]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }
    fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.ops.push(DrawOp::Line { from, to, color, width });
    }
    fn polyline(&mut self, points: &[Point], color: Color, width: f32) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), color, width });
    }
    fn circle(&mut self, center: Point, diameter: f32, color: Color) {
        self.ops.push(DrawOp::Circle { center, diameter, color });
    }
    fn text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), at, style });
    }
}
