// File: crates/sweep-core/src/layout.rs
// Summary: Pure window geometry: plot origin, period spacing, table placement and value→pixel mapping.

use crate::geometry::{map_range, Point};

/// Height of the value axis, in pixels.
pub const PLOT_HEIGHT: f32 = 150.0;
/// Vertical distance between gridlines, in pixels.
pub const GRID_STEP: f32 = 30.0;
pub const TITLE_Y: f32 = 40.0;
pub const TABLE_X: f32 = 20.0;
pub const ROW_HEIGHT: f32 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub plot_width: f32,
    pub plot_height: f32,
    /// Horizontal distance between consecutive periods; 0 with fewer than two periods.
    pub spacing: f32,
    /// Value drawn at the top of the plot.
    pub value_ceiling: f64,
    pub table: TableLayout,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableLayout {
    pub x: f32,
    /// Baseline of the header row; the year caption sits one row above.
    pub y: f32,
    pub row_height: f32,
    pub col_widths: [f32; 3],
}

impl TableLayout {
    /// Left edge of column `i` (0..3).
    pub fn col_x(&self, i: usize) -> f32 {
        self.x + self.col_widths.iter().take(i).sum::<f32>()
    }

    /// Baseline of data row `i` (0-based, below the header).
    pub fn row_y(&self, i: usize) -> f32 {
        self.y + self.row_height * (i as f32 + 1.0)
    }
}

impl Layout {
    pub fn compute(width: f32, height: f32, period_count: usize) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let plot_width = width * 0.6;
        let spacing = if period_count > 1 { plot_width / (period_count - 1) as f32 } else { 0.0 };
        let table_width = width * 0.4;
        Self {
            width,
            height,
            origin_x: width * 0.05,
            origin_y: height * 0.75,
            plot_width,
            plot_height: PLOT_HEIGHT,
            spacing,
            value_ceiling: 100.0,
            table: TableLayout {
                x: TABLE_X,
                y: TITLE_Y + ROW_HEIGHT * 3.0,
                row_height: ROW_HEIGHT,
                col_widths: [table_width * 0.25, table_width * 0.5, table_width * 0.25],
            },
        }
    }

    pub fn with_value_ceiling(mut self, ceiling: f64) -> Self {
        if ceiling.is_finite() && ceiling > 0.0 {
            self.value_ceiling = ceiling;
        }
        self
    }

    pub fn period_x(&self, index: usize) -> f32 {
        self.origin_x + index as f32 * self.spacing
    }

    pub fn value_y(&self, value: f64) -> f32 {
        let h = map_range(value, 0.0, self.value_ceiling, 0.0, self.plot_height as f64);
        self.origin_y - h as f32
    }

    pub fn place(&self, index: usize, value: f64) -> Point {
        Point::new(self.period_x(index), self.value_y(value))
    }

    /// Gridline offsets above the origin with the value each one represents.
    pub fn gridlines(&self) -> Vec<(f32, f64)> {
        let mut out = Vec::new();
        let mut y = 0.0f32;
        while y <= self.plot_height + 1e-3 {
            let value = (y / self.plot_height) as f64 * self.value_ceiling;
            out.push((self.origin_y - y, value));
            y += GRID_STEP;
        }
        out
    }
}
