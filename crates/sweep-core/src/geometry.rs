// File: crates/sweep-core/src/geometry.rs
// Summary: Lightweight geometry and color helpers for pixel math.

/// Pixel-space point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `other` by `t` (not clamped).
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }
}

/// Straight RGBA color, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
    pub const fn gray(v: u8) -> Self {
        Self::from_argb(255, v, v, v)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Re-map `v` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`, without clamping.
/// A degenerate input range maps everything to `out_lo`.
#[inline]
pub fn map_range(v: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let span = in_hi - in_lo;
    if span.abs() < 1e-12 {
        return out_lo;
    }
    out_lo + (v - in_lo) / span * (out_hi - out_lo)
}
