// File: crates/sweep-core/tests/common/mod.rs
// Purpose: Shared fixtures: a recording audio port and small dataset builders.

#![allow(dead_code)]

use sweep_core::audio::{AudioPort, Envelope};
use sweep_core::{Dataset, Layout, PeriodRecord};

#[derive(Clone, Debug, PartialEq)]
pub enum AudioEvent {
    Unlock,
    Frequency(f64),
    Envelope(Envelope),
}

#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    pub events: Vec<AudioEvent>,
}

impl RecordingAudio {
    pub fn frequencies(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AudioEvent::Frequency(hz) => Some(*hz),
                _ => None,
            })
            .collect()
    }
}

impl AudioPort for RecordingAudio {
    fn unlock(&mut self) {
        self.events.push(AudioEvent::Unlock);
    }
    fn set_frequency(&mut self, hz: f64) {
        self.events.push(AudioEvent::Frequency(hz));
    }
    fn trigger_envelope(&mut self, envelope: Envelope) {
        self.events.push(AudioEvent::Envelope(envelope));
    }
}

pub fn dataset(values: &[f64]) -> Dataset {
    let layout = Layout::compute(1024.0, 640.0, values.len());
    let records = values
        .iter()
        .enumerate()
        .map(|(i, v)| PeriodRecord::new(format!("P{i}"), format!("C{i}"), *v))
        .collect();
    Dataset::placed(Some(2016), records, &layout)
}

/// Unique scratch path under the system temp dir.
pub fn scratch_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("sweep-core-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write scratch file");
    path
}
