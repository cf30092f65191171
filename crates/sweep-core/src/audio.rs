// File: crates/sweep-core/src/audio.rs
// Summary: Audio cue driver; maps sales values to pitches and drives an injected tone generator.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::AudioConfig;
use crate::geometry::map_range;

/// Attack/decay amplitude envelope for one blip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub peak: f32,
    pub attack: Duration,
    pub decay: Duration,
}

impl Envelope {
    pub fn from_config(cfg: &AudioConfig) -> Self {
        Self {
            peak: cfg.peak_amplitude,
            attack: Duration::from_millis(cfg.attack_ms as u64),
            decay: Duration::from_millis(cfg.decay_ms as u64),
        }
    }
}

/// Continuously running tone generator owned by the host.
pub trait AudioPort {
    /// Called once, on the first user interaction; starts the oscillator.
    fn unlock(&mut self);
    fn set_frequency(&mut self, hz: f64);
    fn trigger_envelope(&mut self, envelope: Envelope);
}

/// Port that swallows everything (headless runs).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioPort for NullAudio {
    fn unlock(&mut self) {}
    fn set_frequency(&mut self, _hz: f64) {}
    fn trigger_envelope(&mut self, _envelope: Envelope) {}
}

impl<A: AudioPort + ?Sized> AudioPort for Box<A> {
    fn unlock(&mut self) { (**self).unlock() }
    fn set_frequency(&mut self, hz: f64) { (**self).set_frequency(hz) }
    fn trigger_envelope(&mut self, envelope: Envelope) { (**self).trigger_envelope(envelope) }
}

/// Linear value→pitch mapping; values outside the domain extrapolate.
pub fn value_to_frequency(value: f64, cfg: &AudioConfig) -> f64 {
    map_range(value, cfg.value_low, cfg.value_high, cfg.freq_low, cfg.freq_high)
}

pub struct CueDriver<A> {
    port: A,
    cfg: AudioConfig,
    unlocked: bool,
}

impl<A: AudioPort> CueDriver<A> {
    pub fn new(port: A, cfg: AudioConfig) -> Self {
        Self { port, cfg, unlocked: false }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Autoplay handshake; later calls are no-ops.
    pub fn unlock(&mut self) {
        if !self.unlocked {
            self.port.unlock();
            self.unlocked = true;
            info!("audio unlocked");
        }
    }

    /// Retune and blip for `value`. Returns the frequency, or `None` while locked.
    pub fn cue(&mut self, value: f64) -> Option<f64> {
        if !self.unlocked || !value.is_finite() {
            return None;
        }
        let hz = value_to_frequency(value, &self.cfg);
        debug!(value, hz, "audio cue");
        self.port.set_frequency(hz);
        self.port.trigger_envelope(Envelope::from_config(&self.cfg));
        Some(hz)
    }

    pub fn port(&self) -> &A {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_endpoints_and_midpoint() {
        let cfg = AudioConfig::default();
        assert!((value_to_frequency(40.0, &cfg) - 200.0).abs() < 1e-9);
        assert!((value_to_frequency(95.0, &cfg) - 1200.0).abs() < 1e-9);
        assert!((value_to_frequency(67.5, &cfg) - 700.0).abs() < 1e-9);
    }

    #[test]
    fn locked_driver_stays_silent() {
        let mut d = CueDriver::new(NullAudio, AudioConfig::default());
        assert_eq!(d.cue(50.0), None);
        d.unlock();
        assert!(d.cue(50.0).is_some());
    }

    #[test]
    fn envelope_uses_millisecond_config() {
        let env = Envelope::from_config(&AudioConfig::default());
        assert_eq!(env.attack, Duration::from_millis(20));
        assert_eq!(env.decay, Duration::from_millis(200));
        assert_eq!(env.peak, 0.3);
    }
}
