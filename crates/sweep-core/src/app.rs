// File: crates/sweep-core/src/app.rs
// Summary: Application state tying engine, data source, audio, input and loader to frame/load events.
// Notes:
// - Hosts call `render` and then `on_tick` once per frame; the tick works on the
//   progress that was just drawn.
// - While a file load is pending the engine is not ticked and the loading scene is shown.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::audio::{AudioPort, CueDriver};
use crate::config::SweepConfig;
use crate::data::RawRecord;
use crate::engine::{Engine, Phase, StepCue};
use crate::error::SweepResult;
use crate::geometry::{Point, RectF};
use crate::import::ImportReport;
use crate::input::{command_for, Command, Freehand};
use crate::layout::Layout;
use crate::loader::FileLoader;
use crate::render::{draw_frame, ChartScene, Frame, Scene, Surface};
use crate::source::DataSource;
use crate::theme::{self, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Loading,
    /// No data; placeholder shown.
    Idle,
    Drawing,
    Paused,
}

/// Result of one `on_tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStatus {
    pub activity: Activity,
    /// Cue that was sent to the audio port this frame.
    pub cue: Option<StepCue>,
    pub rollover: bool,
}

impl FrameStatus {
    fn quiet(activity: Activity) -> Self {
        Self { activity, cue: None, rollover: false }
    }
}

pub struct SalesSweep<A> {
    config: SweepConfig,
    theme: Theme,
    layout: Layout,
    engine: Engine,
    source: DataSource,
    freehand: Freehand,
    audio: CueDriver<A>,
    loader: FileLoader,
}

impl<A: AudioPort> SalesSweep<A> {
    pub fn new(config: SweepConfig, audio: A, width: f32, height: f32) -> Self {
        let layout = Self::layout_for(&config, width, height);
        let source = DataSource::from_config(&config.data);
        let mut engine = Engine::new(&config.animation);
        engine.reset(source.dataset(&layout));
        Self {
            theme: theme::find(&config.theme),
            freehand: Freehand::new(config.animation.freehand_enabled),
            audio: CueDriver::new(audio, config.audio),
            loader: FileLoader::new(),
            layout,
            engine,
            source,
            config,
        }
    }

    fn layout_for(config: &SweepConfig, width: f32, height: f32) -> Layout {
        Layout::compute(width, height, config.data.period_labels.len()).with_value_ceiling(config.data.value_ceiling)
    }

    pub fn config(&self) -> &SweepConfig { &self.config }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn engine(&self) -> &Engine { &self.engine }
    pub fn source(&self) -> &DataSource { &self.source }
    pub fn freehand(&self) -> &Freehand { &self.freehand }
    pub fn audio(&self) -> &CueDriver<A> { &self.audio }
    pub fn is_loading(&self) -> bool { self.loader.is_pending() }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.layout = Self::layout_for(&self.config, width, height);
        self.engine.relayout(&self.layout);
    }

    pub fn on_tick(&mut self) -> FrameStatus {
        self.poll_load();
        if self.loader.is_pending() {
            return FrameStatus::quiet(Activity::Loading);
        }

        let tick = self.engine.tick(self.audio.is_unlocked());
        let cue = tick.cue.filter(|c| self.audio.cue(c.value).is_some());
        if tick.rollover {
            self.freehand.clear();
            let next = self.source.rollover(&self.layout);
            self.engine.reset(next);
        }
        let activity = match tick.phase {
            Phase::Idle => Activity::Idle,
            Phase::Drawing => Activity::Drawing,
            Phase::Paused => Activity::Paused,
        };
        FrameStatus { activity, cue, rollover: tick.rollover }
    }

    /// Switch to imported rows, starting again from the first year.
    pub fn on_data_loaded(&mut self, rows: Vec<RawRecord>) {
        self.loader.cancel();
        self.source = DataSource::imported(rows, &self.config.data);
        let dataset = self.source.dataset(&self.layout);
        if dataset.is_empty() {
            warn!(year = self.source.year(), "no rows for the first year; showing the empty-year notice");
        }
        self.freehand.clear();
        self.engine.reset(dataset);
    }

    /// Start a background load; supersedes any load in flight.
    pub fn begin_load(&mut self, path: PathBuf) {
        self.loader.begin(path, self.config.columns.clone());
    }

    /// Apply a finished load, if any. A failed load keeps the current data.
    pub fn poll_load(&mut self) -> Option<SweepResult<usize>> {
        let result = self.loader.poll()?;
        Some(self.apply_load(result))
    }

    /// Blocking variant for headless hosts.
    pub fn wait_for_load(&mut self, timeout: Duration) -> Option<SweepResult<usize>> {
        let result = self.loader.wait(timeout)?;
        Some(self.apply_load(result))
    }

    fn apply_load(&mut self, result: SweepResult<ImportReport>) -> SweepResult<usize> {
        match result {
            Ok(report) => {
                info!(rows = report.rows.len(), skipped = report.skipped, "file loaded");
                let n = report.rows.len();
                self.on_data_loaded(report.rows);
                Ok(n)
            }
            Err(e) => {
                warn!(error = %e, "load aborted; keeping previous data");
                Err(e)
            }
        }
    }

    pub fn on_key(&mut self, key: char) -> Option<Command> {
        let cmd = command_for(key, &self.config.keys)?;
        let step = self.config.animation.speed_step;
        match cmd {
            Command::ToggleFreehand => self.freehand.toggle(),
            Command::ClearFreehand => self.freehand.clear(),
            Command::SpeedUp => self.engine.set_speed(self.engine.speed() + step),
            Command::SpeedDown => self.engine.set_speed(self.engine.speed() - step),
        }
        Some(cmd)
    }

    /// First user gesture; hosts without a pointer may call this directly.
    pub fn unlock_audio(&mut self) {
        self.audio.unlock();
    }

    /// Any press unlocks audio; inside the canvas it may also start a stroke.
    pub fn on_pointer_press(&mut self, p: Point) {
        self.unlock_audio();
        self.freehand.press(p, self.drawable_area());
    }

    pub fn on_pointer_move(&mut self, p: Point) {
        self.freehand.drag(p, self.drawable_area());
    }

    pub fn on_pointer_release(&mut self) {
        self.freehand.release();
    }

    fn drawable_area(&self) -> RectF {
        RectF::from_ltwh(0.0, 0.0, self.layout.width, self.layout.height)
    }

    pub fn frame(&self) -> Frame<'_> {
        let scene = if self.loader.is_pending() {
            Scene::Loading
        } else {
            match (self.engine.position(), self.engine.interpolated_point()) {
                (Some(pos), Some(head)) => Scene::Chart(ChartScene {
                    dataset: self.engine.dataset(),
                    step: pos.step,
                    head,
                    freehand: self.freehand.strokes(),
                }),
                _ if self.source.has_rows() => Scene::NoData { year: self.source.year() },
                _ => Scene::Placeholder,
            }
        };
        Frame { layout: &self.layout, theme: &self.theme, labels: &self.config.labels, scene }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        draw_frame(surface, &self.frame());
    }
}
