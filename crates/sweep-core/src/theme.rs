// File: crates/sweep-core/src/theme.rs
// Summary: Color palettes for the sweep scene; backend-neutral colors.

use crate::geometry::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub title: Color,
    pub table_caption: Color,
    pub table_text: Color,
    pub axis_line: Color,
    pub grid: Color,
    pub grid_label: Color,
    pub period_label: Color,
    pub curve: Color,
    pub marker: Color,
    pub value_label: Color,
    pub category_label: Color,
    pub freehand: Color,
    pub hint: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::gray(20),
            title: Color::gray(255),
            table_caption: Color::gray(180),
            table_text: Color::gray(255),
            axis_line: Color::gray(180),
            grid: Color::gray(50),
            grid_label: Color::gray(150),
            period_label: Color::gray(200),
            curve: Color::from_argb(255, 0, 200, 255),
            marker: Color::gray(255),
            value_label: Color::from_argb(255, 0, 255, 100),
            category_label: Color::from_argb(255, 255, 180, 0),
            freehand: Color::from_argb(255, 255, 100, 255),
            hint: Color::gray(200),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            title: Color::from_argb(255, 20, 20, 30),
            table_caption: Color::from_argb(255, 90, 90, 100),
            table_text: Color::from_argb(255, 20, 20, 30),
            axis_line: Color::from_argb(255, 60, 60, 70),
            grid: Color::from_argb(255, 230, 230, 235),
            grid_label: Color::from_argb(255, 100, 100, 110),
            period_label: Color::from_argb(255, 60, 60, 70),
            curve: Color::from_argb(255, 32, 120, 200),
            marker: Color::from_argb(255, 20, 20, 30),
            value_label: Color::from_argb(255, 20, 160, 90),
            category_label: Color::from_argb(255, 200, 120, 0),
            freehand: Color::from_argb(255, 190, 40, 190),
            hint: Color::from_argb(255, 60, 60, 70),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::gray(0),
            title: Color::gray(255),
            table_caption: Color::gray(255),
            table_text: Color::gray(255),
            axis_line: Color::gray(255),
            grid: Color::gray(0x22),
            grid_label: Color::gray(0xcc),
            period_label: Color::gray(255),
            curve: Color::from_argb(255, 0x00, 0xff, 0xff),
            marker: Color::gray(255),
            value_label: Color::from_argb(255, 0x00, 0xff, 0x00),
            category_label: Color::from_argb(255, 0xff, 0xff, 0x00),
            freehand: Color::from_argb(255, 0xff, 0x00, 0xff),
            hint: Color::gray(255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_dark() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("").name, "dark");
        assert_eq!(find("neon").name, "dark");
    }
}
