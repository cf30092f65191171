// File: crates/sweep-core/src/input.rs
// Summary: Keyboard command mapping and the freehand stroke overlay.

use crate::config::KeyBindings;
use crate::geometry::{Point, RectF};

/// Actions reachable from single-character keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleFreehand,
    ClearFreehand,
    SpeedUp,
    SpeedDown,
}

/// Map a typed character to a command. Letters match in either case.
pub fn command_for(key: char, keys: &KeyBindings) -> Option<Command> {
    let hit = |bound: char| key == bound || (bound.is_ascii_alphabetic() && key.eq_ignore_ascii_case(&bound));
    if hit(keys.toggle_freehand) {
        Some(Command::ToggleFreehand)
    } else if hit(keys.clear_freehand) {
        Some(Command::ClearFreehand)
    } else if hit(keys.speed_up) {
        Some(Command::SpeedUp)
    } else if hit(keys.speed_down) {
        Some(Command::SpeedDown)
    } else {
        None
    }
}

/// Pointer-drawn strokes layered over the chart. Purely cosmetic.
#[derive(Clone, Debug, Default)]
pub struct Freehand {
    enabled: bool,
    drawing: bool,
    strokes: Vec<Vec<Point>>,
}

impl Freehand {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, ..Self::default() }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        self.drawing = false;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    pub fn strokes(&self) -> &[Vec<Point>] {
        &self.strokes
    }

    /// Start a new stroke when capture is on and `p` lies in `area`.
    pub fn press(&mut self, p: Point, area: RectF) {
        if self.enabled && in_area(p, area) {
            self.strokes.push(vec![p]);
            self.drawing = true;
        }
    }

    pub fn drag(&mut self, p: Point, area: RectF) {
        if !(self.enabled && self.drawing && in_area(p, area)) {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(p);
        }
    }

    pub fn release(&mut self) {
        self.drawing = false;
    }
}

fn in_area(p: Point, area: RectF) -> bool {
    p.y > area.top && area.contains(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(command_for('F', &keys), Some(Command::ToggleFreehand));
        assert_eq!(command_for('c', &keys), Some(Command::ClearFreehand));
        assert_eq!(command_for('+', &keys), Some(Command::SpeedUp));
        assert_eq!(command_for('-', &keys), Some(Command::SpeedDown));
        assert_eq!(command_for('x', &keys), None);
    }

    #[test]
    fn strokes_only_while_enabled_and_inside() {
        let area = RectF::from_ltwh(0.0, 0.0, 100.0, 100.0);
        let mut f = Freehand::new(false);
        f.press(Point::new(10.0, 10.0), area);
        assert!(f.strokes().is_empty());

        f.toggle();
        f.press(Point::new(10.0, 10.0), area);
        f.drag(Point::new(20.0, 20.0), area);
        f.drag(Point::new(20.0, 0.0), area);
        f.drag(Point::new(500.0, 20.0), area);
        f.release();
        f.drag(Point::new(30.0, 30.0), area);
        assert_eq!(f.strokes().len(), 1);
        assert_eq!(f.strokes()[0].len(), 2);

        f.press(Point::new(40.0, 40.0), area);
        assert_eq!(f.strokes().len(), 2);
        f.clear();
        assert!(f.strokes().is_empty());
    }
}
