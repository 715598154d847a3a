// Completion latch
//
// Fires the "section complete" notification once, the first time the
// schedule reports completion. Owned by the page composition, which is
// the only thing allowed to reset it.

use super::progress::ScrollProgress;
use super::sequencer::RevealSchedule;

/// Lifecycle of the reveal section within one page view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    InProgress,
    /// Terminal until `reset()`
    Completed,
}

/// One-shot transition from `InProgress` to `Completed`
#[derive(Debug, Clone, Default)]
pub struct CompletionLatch {
    state: PageState,
}

impl CompletionLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest progress. Calls `on_complete(true)` only on the
    /// `InProgress -> Completed` transition; returns whether it fired.
    pub fn observe(
        &mut self,
        schedule: &RevealSchedule,
        progress: ScrollProgress,
        on_complete: impl FnOnce(bool),
    ) -> bool {
        if self.state == PageState::Completed || !schedule.is_complete(progress) {
            return false;
        }
        self.state = PageState::Completed;
        on_complete(true);
        true
    }

    /// Return to `InProgress` so the next crossing fires again
    pub fn reset(&mut self) {
        self.state = PageState::InProgress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> RevealSchedule {
        RevealSchedule::new(&[0.1, 0.3, 0.5], 0.80).unwrap()
    }

    #[test]
    fn test_fires_once_on_increasing_sequence() {
        let schedule = schedule();
        let mut latch = CompletionLatch::new();
        let mut fired_at = Vec::new();

        for sample in [0.0, 0.5, 0.81, 0.9, 0.95] {
            latch.observe(&schedule, ScrollProgress::new(sample), |complete| {
                assert!(complete);
                fired_at.push(sample);
            });
        }

        assert_eq!(fired_at, vec![0.81]);
        assert_eq!(latch.state, PageState::Completed);
    }

    #[test]
    fn test_stays_completed_when_progress_drops() {
        let schedule = schedule();
        let mut latch = CompletionLatch::new();
        let mut calls = 0;

        for sample in [0.85, 0.2, 0.9] {
            latch.observe(&schedule, ScrollProgress::new(sample), |_| calls += 1);
        }

        assert_eq!(calls, 1);
        assert_eq!(latch.state, PageState::Completed);
    }

    #[test]
    fn test_fires_again_after_reset() {
        let schedule = schedule();
        let mut latch = CompletionLatch::new();
        let mut calls = 0;

        latch.observe(&schedule, ScrollProgress::new(0.9), |_| calls += 1);
        latch.observe(&schedule, ScrollProgress::new(0.95), |_| calls += 1);
        latch.reset();
        assert_eq!(latch.state, PageState::InProgress);
        latch.observe(&schedule, ScrollProgress::new(0.95), |_| calls += 1);

        assert_eq!(calls, 2);
    }

    #[test]
    fn test_fires_exactly_where_schedule_completes() {
        // The latch has no threshold of its own; moving the schedule's
        // completion point moves the firing point with it.
        let early = RevealSchedule::new(&[0.1], 0.4).unwrap();
        let late = RevealSchedule::new(&[0.1], 0.9).unwrap();
        let progress = ScrollProgress::new(0.5);

        assert!(early.is_complete(progress));
        assert!(CompletionLatch::new().observe(&early, progress, |_| {}));

        assert!(!late.is_complete(progress));
        assert!(!CompletionLatch::new().observe(&late, progress, |_| panic!("should not fire")));
    }

    #[test]
    fn test_below_threshold_never_fires() {
        let schedule = RevealSchedule::default();
        let mut latch = CompletionLatch::new();
        assert!(!latch.observe(&schedule, ScrollProgress::new(0.79), |_| panic!("should not fire")));
        assert!(latch.observe(&schedule, ScrollProgress::new(0.80), |_| {}));
    }
}
