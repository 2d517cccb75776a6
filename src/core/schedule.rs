// Host-independent timing policies. Callers pass in the current instant, so
// both are driven the same way by requestAnimationFrame, timers or tests.

use instant::Instant;
use std::time::Duration;

/// Minimum-interval gate: lets a pass through at most once per `interval`,
/// except the first pass after construction or `reset`, which always runs.
#[derive(Clone, Debug)]
pub struct RenderGate {
    interval: Duration,
    last: Option<Instant>,
}

impl RenderGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn try_pass(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now < last + self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Cancel-and-reschedule debounce: every `trigger` pushes the deadline out
/// to `now + quiet`; `poll` fires once when the deadline has passed.
#[derive(Clone, Debug)]
pub struct Debounce {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Record an event. Returns the delay after which `poll` should be called.
    pub fn trigger(&mut self, now: Instant) -> Duration {
        self.deadline = Some(now + self.quiet);
        self.quiet
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending deadline; zero if due or idle.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.deadline {
            Some(d) if d > now => d - now,
            _ => Duration::ZERO,
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
