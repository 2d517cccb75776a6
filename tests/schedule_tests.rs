// Host-side tests for the render gate and resize debounce policies.

#![allow(dead_code)]
mod schedule {
    include!("../src/core/schedule.rs");
}

use instant::Instant;
use schedule::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn first_pass_always_runs() {
    let mut gate = RenderGate::new(ms(16));
    let t0 = Instant::now();
    assert!(gate.try_pass(t0));
}

#[test]
fn gate_throttles_to_the_interval() {
    let mut gate = RenderGate::new(ms(16));
    let t0 = Instant::now();
    assert!(gate.try_pass(t0));
    assert!(!gate.try_pass(t0 + ms(5)));
    assert!(!gate.try_pass(t0 + ms(15)));
    assert!(gate.try_pass(t0 + ms(16)));
    assert!(!gate.try_pass(t0 + ms(20)));
    assert!(gate.try_pass(t0 + ms(40)));
}

#[test]
fn reset_reopens_the_gate() {
    let mut gate = RenderGate::new(ms(16));
    let t0 = Instant::now();
    assert!(gate.try_pass(t0));
    gate.reset();
    assert!(gate.try_pass(t0 + ms(1)));
}

#[test]
fn debounce_fires_once_after_quiet_period() {
    let mut d = Debounce::new(ms(250));
    let t0 = Instant::now();
    assert!(!d.is_pending());
    assert_eq!(d.trigger(t0), ms(250));
    assert!(d.is_pending());
    assert!(!d.poll(t0 + ms(100)));
    assert!(d.poll(t0 + ms(250)));
    assert!(!d.poll(t0 + ms(260)));
    assert!(!d.is_pending());
}

#[test]
fn debounce_reschedules_on_every_event() {
    let mut d = Debounce::new(ms(250));
    let t0 = Instant::now();
    d.trigger(t0);
    d.trigger(t0 + ms(200));
    d.trigger(t0 + ms(400));
    assert!(!d.poll(t0 + ms(500)));
    assert_eq!(d.remaining(t0 + ms(500)), ms(150));
    assert!(d.poll(t0 + ms(650)));
}

#[test]
fn cancel_drops_the_pending_fire() {
    let mut d = Debounce::new(ms(250));
    let t0 = Instant::now();
    d.trigger(t0);
    d.cancel();
    assert!(!d.poll(t0 + ms(1000)));
    assert_eq!(d.remaining(t0), Duration::ZERO);
}
