// File: crates/window-demo/src/audio.rs
// Summary: rodio-backed tone generator; a sine oscillator retuned and enveloped through shared atomics.
// Notes:
// - The output stream lives on its own thread, opened at unlock.
// - No device: warn once and stay silent.

use std::f32::consts::TAU;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rodio::{OutputStream, Sink, Source};
use sweep_core::audio::{AudioPort, Envelope};
use tracing::{info, warn};

const SAMPLE_RATE: u32 = 44_100;

/// Oscillator parameters written by the UI thread, read by the audio thread.
#[derive(Default)]
struct ToneParams {
    freq_bits: AtomicU32,
    peak_bits: AtomicU32,
    attack_us: AtomicU64,
    decay_us: AtomicU64,
    /// Bumped on every trigger; the source restarts its envelope when it changes.
    generation: AtomicU64,
}

impl ToneParams {
    fn frequency(&self) -> f32 {
        f32::from_bits(self.freq_bits.load(Ordering::Relaxed))
    }
}

/// Endless mono sine whose amplitude follows the latest triggered envelope.
struct ToneSource {
    params: Arc<ToneParams>,
    phase: f32,
    seen: u64,
    level: f32,
    start: f32,
    peak: f32,
    attack: u64,
    decay: u64,
    /// Samples since the last trigger; `None` when idle.
    elapsed: Option<u64>,
}

impl ToneSource {
    fn new(params: Arc<ToneParams>) -> Self {
        let seen = params.generation.load(Ordering::Acquire);
        Self { params, phase: 0.0, seen, level: 0.0, start: 0.0, peak: 0.0, attack: 0, decay: 0, elapsed: None }
    }

    fn samples(us: u64) -> u64 {
        us * SAMPLE_RATE as u64 / 1_000_000
    }

    fn retrigger(&mut self) {
        let generation = self.params.generation.load(Ordering::Acquire);
        if generation == self.seen {
            return;
        }
        self.seen = generation;
        self.start = self.level;
        self.peak = f32::from_bits(self.params.peak_bits.load(Ordering::Relaxed));
        self.attack = Self::samples(self.params.attack_us.load(Ordering::Relaxed)).max(1);
        self.decay = Self::samples(self.params.decay_us.load(Ordering::Relaxed)).max(1);
        self.elapsed = Some(0);
    }

    fn envelope(&mut self) -> f32 {
        let Some(t) = self.elapsed else { return 0.0 };
        let level = if t < self.attack {
            self.start + (self.peak - self.start) * t as f32 / self.attack as f32
        } else if t < self.attack + self.decay {
            self.peak * (1.0 - (t - self.attack) as f32 / self.decay as f32)
        } else {
            self.elapsed = None;
            return 0.0;
        };
        self.elapsed = Some(t + 1);
        level
    }
}

impl Iterator for ToneSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        self.retrigger();
        self.level = self.envelope();
        let step = self.params.frequency() / SAMPLE_RATE as f32;
        self.phase = (self.phase + step).fract();
        Some(self.level * (TAU * self.phase).sin())
    }
}

impl Source for ToneSource {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

/// `AudioPort` over the default output device.
#[derive(Default)]
pub struct RodioAudio {
    params: Arc<ToneParams>,
    /// Dropping the sender ends the audio thread.
    keepalive: Option<Sender<()>>,
}

impl AudioPort for RodioAudio {
    fn unlock(&mut self) {
        if self.keepalive.is_some() {
            return;
        }
        let (tx, rx) = mpsc::channel::<()>();
        let params = self.params.clone();
        thread::spawn(move || {
            let (stream, handle) = match OutputStream::try_default() {
                Ok(pair) => pair,
                Err(e) => {
                    warn!(error = %e, "no audio output device; running silent");
                    return;
                }
            };
            let sink = match Sink::try_new(&handle) {
                Ok(sink) => sink,
                Err(e) => {
                    warn!(error = %e, "failed to open audio sink; running silent");
                    return;
                }
            };
            sink.append(ToneSource::new(params));
            sink.play();
            info!("oscillator started");
            // Block until the port is dropped
            while rx.recv().is_ok() {}
            sink.stop();
            drop(stream);
        });
        self.keepalive = Some(tx);
    }

    fn set_frequency(&mut self, hz: f64) {
        self.params.freq_bits.store((hz as f32).to_bits(), Ordering::Relaxed);
    }

    fn trigger_envelope(&mut self, envelope: Envelope) {
        let p = &self.params;
        p.peak_bits.store(envelope.peak.to_bits(), Ordering::Relaxed);
        p.attack_us.store(envelope.attack.as_micros() as u64, Ordering::Relaxed);
        p.decay_us.store(envelope.decay.as_micros() as u64, Ordering::Relaxed);
        p.generation.fetch_add(1, Ordering::Release);
    }
}
