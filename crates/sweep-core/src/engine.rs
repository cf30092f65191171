// File: crates/sweep-core/src/engine.rs
// Summary: Progress/step state machine driving the sweep: advance, step cues, pause and rollover.
// Notes:
// - `tick` evaluates the step for the progress that was just drawn, then advances.
//   Step 0 therefore always cues at the start of a cycle, whatever the speed.
// - The engine never fails; an empty dataset parks it in the idle phase.

use tracing::{debug, info};

use crate::config::AnimationConfig;
use crate::data::Dataset;
use crate::geometry::Point;
use crate::layout::Layout;

/// Progress within this distance of 1 counts as finished.
const FINISH_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Position within the cycle, in `[0, 1]`.
    pub progress: f64,
    pub is_paused: bool,
    /// Frames spent paused at the end of the cycle.
    pub pause_elapsed: u32,
    /// Last step that produced a cue; `None` before the first one of a cycle.
    pub last_step: Option<usize>,
    pub speed: f64,
}

impl AnimationState {
    fn restart(&mut self) {
        self.progress = 0.0;
        self.is_paused = false;
        self.pause_elapsed = 0;
        self.last_step = None;
    }
}

/// Discrete position derived from progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    /// Continuous index along the sequence, `progress * (n - 1)`.
    pub t: f64,
    pub step: usize,
    /// Fraction toward `step + 1`; 0 on the last index.
    pub frac: f64,
}

/// Step and interpolation fraction for `progress` over `n` points, `None` when `n == 0`.
pub fn position(progress: f64, n: usize) -> Option<Position> {
    if n == 0 {
        return None;
    }
    let last = n - 1;
    let progress = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
    let t = if last == 0 { 0.0 } else { progress * last as f64 };
    let step = (t.floor() as usize).min(last);
    let frac = if step == last { 0.0 } else { (t - step as f64).clamp(0.0, 1.0) };
    Some(Position { t, step, frac })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No data; nothing advances.
    Idle,
    Drawing,
    /// Holding the finished curve.
    Paused,
}

/// Audio cue request for a newly entered step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepCue {
    pub step: usize,
    pub value: f64,
}

/// Outcome of one frame tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub phase: Phase,
    pub cue: Option<StepCue>,
    /// The pause ran out; the caller should load the next dataset.
    pub rollover: bool,
}

impl Tick {
    const IDLE: Tick = Tick { phase: Phase::Idle, cue: None, rollover: false };
}

pub struct Engine {
    state: AnimationState,
    dataset: Dataset,
    speed_min: f64,
    speed_max: f64,
    pause_frames: u32,
}

impl Engine {
    pub fn new(cfg: &AnimationConfig) -> Self {
        let lo = cfg.speed_min.min(cfg.speed_max).max(f64::EPSILON);
        let hi = cfg.speed_min.max(cfg.speed_max).max(lo);
        Self {
            state: AnimationState {
                progress: 0.0,
                is_paused: false,
                pause_elapsed: 0,
                last_step: None,
                speed: cfg.speed.clamp(lo, hi),
            },
            dataset: Dataset::default(),
            speed_min: lo,
            speed_max: hi,
            pause_frames: cfg.pause_frames,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn is_idle(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    /// Clamp to the configured band; takes effect from the next tick.
    pub fn set_speed(&mut self, v: f64) {
        let v = if v.is_finite() { v } else { self.state.speed };
        self.state.speed = v.clamp(self.speed_min, self.speed_max);
    }

    /// Replace the dataset and restart the cycle.
    pub fn reset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.state.restart();
    }

    /// Re-place points after a resize without touching the animation.
    pub fn relayout(&mut self, layout: &Layout) {
        self.dataset = self.dataset.replaced_on(layout);
    }

    pub fn position(&self) -> Option<Position> {
        position(self.state.progress, self.dataset.len())
    }

    /// Head of the curve: lerp between the current point and the next one (or itself at the end).
    pub fn interpolated_point(&self) -> Option<Point> {
        let pos = self.position()?;
        let points = &self.dataset.points;
        let a = *points.get(pos.step)?;
        let b = points.get(pos.step + 1).copied().unwrap_or(a);
        Some(a.lerp(b, pos.frac as f32))
    }

    pub fn tick(&mut self, audio_unlocked: bool) -> Tick {
        let n = self.dataset.len();
        let Some(pos) = self.position() else {
            return Tick::IDLE;
        };

        let mut cue = None;
        if audio_unlocked && self.state.last_step != Some(pos.step) && pos.step < n {
            if let Some(value) = self.dataset.value(pos.step) {
                debug!(step = pos.step, value, "step cue");
                cue = Some(StepCue { step: pos.step, value });
                self.state.last_step = Some(pos.step);
            }
        }

        let mut rollover = false;
        if !self.state.is_paused {
            let next = (self.state.progress + self.state.speed).min(1.0);
            if next >= 1.0 - FINISH_EPSILON {
                self.state.progress = 1.0;
                self.state.is_paused = true;
                self.state.pause_elapsed = 0;
            } else {
                self.state.progress = next;
            }
        } else {
            self.state.pause_elapsed += 1;
            if self.state.pause_elapsed > self.pause_frames {
                info!(year = ?self.dataset.year, "cycle finished; rolling over");
                self.state.restart();
                rollover = true;
            }
        }

        let phase = if self.state.is_paused { Phase::Paused } else { Phase::Drawing };
        Tick { phase, cue, rollover }
    }
}
