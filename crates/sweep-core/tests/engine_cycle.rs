// File: crates/sweep-core/tests/engine_cycle.rs
// Purpose: Progress/pause/rollover timing and the once-per-step cue law.

mod common;

use sweep_core::config::AnimationConfig;
use sweep_core::engine::{Phase, StepCue};
use sweep_core::{Dataset, Engine};

fn engine_with(values: &[f64]) -> Engine {
    let mut e = Engine::new(&AnimationConfig::default());
    e.reset(common::dataset(values));
    e
}

#[test]
fn fifty_ticks_to_finish_then_pause_then_rollover() {
    let mut e = engine_with(&[40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
    assert_eq!(e.speed(), 0.02);

    for i in 1..50 {
        let t = e.tick(true);
        assert_eq!(t.phase, Phase::Drawing, "tick {i}");
        assert!(e.state().progress < 1.0);
    }
    let t = e.tick(true);
    assert_eq!(t.phase, Phase::Paused);
    assert_eq!(e.state().progress, 1.0);
    assert_eq!(e.state().pause_elapsed, 0);

    for i in 0..90 {
        let t = e.tick(true);
        assert!(!t.rollover, "paused tick {i} rolled over early");
        assert_eq!(e.state().progress, 1.0);
    }
    let t = e.tick(true);
    assert!(t.rollover);
    assert_eq!(e.state().progress, 0.0);
    assert_eq!(e.state().last_step, None);
    assert!(!e.state().is_paused);
}

#[test]
fn every_step_cues_once_in_order_and_step_zero_refires() {
    let values = [40.0, 55.0, 95.0, 67.5, 80.0, 41.0];
    let mut e = engine_with(&values);

    let mut cues = Vec::new();
    loop {
        let t = e.tick(true);
        cues.extend(t.cue);
        if t.rollover {
            break;
        }
    }
    let expected: Vec<StepCue> = values.iter().enumerate().map(|(step, &value)| StepCue { step, value }).collect();
    assert_eq!(cues, expected);

    // The next cycle starts over at step 0
    assert_eq!(e.tick(true).cue, Some(StepCue { step: 0, value: 40.0 }));
}

#[test]
fn no_cue_while_paused_on_the_last_step() {
    let mut e = engine_with(&[10.0, 20.0]);
    let mut last_cue_tick = 0;
    for i in 0..200 {
        let t = e.tick(true);
        if t.rollover {
            break;
        }
        if t.cue.is_some() {
            last_cue_tick = i;
        }
    }
    // Last step cues on the first paused frame, nothing after it
    assert_eq!(last_cue_tick, 50);
}

#[test]
fn empty_dataset_stays_idle() {
    let mut e = engine_with(&[]);
    for _ in 0..500 {
        let t = e.tick(true);
        assert_eq!(t.phase, Phase::Idle);
        assert_eq!(t.cue, None);
        assert!(!t.rollover);
    }
    assert_eq!(e.position(), None);
    assert_eq!(e.interpolated_point(), None);
    assert_eq!(e.state().progress, 0.0);
}

#[test]
fn single_point_dataset_cycles() {
    let mut e = engine_with(&[70.0]);
    let t = e.tick(true);
    assert_eq!(t.cue, Some(StepCue { step: 0, value: 70.0 }));
    assert_eq!(e.interpolated_point(), e.dataset().points.first().copied());
}

#[test]
fn reset_mid_cycle_restarts() {
    let mut e = engine_with(&[40.0, 50.0, 60.0]);
    for _ in 0..30 {
        e.tick(true);
    }
    assert!(e.state().progress > 0.5);
    e.reset(common::dataset(&[1.0, 2.0]));
    assert_eq!(e.state().progress, 0.0);
    assert_eq!(e.state().last_step, None);
    assert_eq!(e.dataset().len(), 2);
    assert_eq!(e.tick(true).cue.map(|c| c.step), Some(0));

    e.reset(Dataset::empty(None));
    assert!(e.is_idle());
}

#[test]
fn speed_change_is_not_retroactive() {
    let mut e = engine_with(&[40.0, 50.0, 60.0]);
    for _ in 0..10 {
        e.tick(false);
    }
    let before = e.state().progress;
    e.set_speed(0.05);
    assert_eq!(e.state().progress, before);
    e.tick(false);
    assert!((e.state().progress - (before + 0.05)).abs() < 1e-12);
}
