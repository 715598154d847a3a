// Timed reveal
//
// Alternative progress source: a click (or Space) on the page starts a
// clock, and progress is the fraction of the configured duration elapsed.
// The sequencer and latch consume it exactly like scroll progress.

use super::progress::ScrollProgress;
use std::time::{Duration, Instant};

/// Click-triggered progress clock
#[derive(Debug, Clone)]
pub struct TimedReveal {
    duration: Duration,
    started: Option<Instant>,
}

impl TimedReveal {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
        }
    }

    /// Start the clock. Later calls keep the original start time.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started.is_some() {
            return false;
        }
        self.started = Some(now);
        true
    }

    /// Stop the clock; progress reads zero until the next `start`
    pub fn reset(&mut self) {
        self.started = None;
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Progress at `now`; zero until started, one once the duration elapsed
    pub fn progress_at(&self, now: Instant) -> ScrollProgress {
        let Some(started) = self.started else {
            return ScrollProgress::START;
        };
        if self.duration.is_zero() {
            return ScrollProgress::END;
        }
        let elapsed = now.saturating_duration_since(started);
        ScrollProgress::new(elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }
}
