// File: crates/sweep-core/src/lib.rs
// Summary: Core library entry point; exports the animation engine, data sources, layout and renderer API.

pub mod app;
pub mod audio;
pub mod config;
pub mod data;
pub mod detect;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod import;
pub mod input;
pub mod layout;
pub mod loader;
pub mod render;
pub mod source;
pub mod telemetry;
pub mod theme;

pub use app::{Activity, FrameStatus, SalesSweep};
pub use audio::{AudioPort, CueDriver, Envelope, NullAudio};
pub use config::SweepConfig;
pub use data::{Dataset, PeriodRecord, RawRecord};
pub use engine::{Engine, Phase, StepCue, Tick};
pub use error::{SweepError, SweepResult};
pub use import::ImportReport;
pub use geometry::{Color, Point};
pub use layout::Layout;
pub use render::{draw_frame, Frame, RecordingSurface, Surface};
pub use source::DataSource;
pub use theme::Theme;
