// Reveal sequencing
//
// A RevealSchedule is the one place reveal timing lives: an ordered list of
// (index, threshold) pairs plus the completion threshold. Visibility of a
// block depends only on the current progress and its own threshold.

use super::progress::ScrollProgress;
use std::collections::BTreeSet;
use std::fmt;

/// Progress at which the manifesto lines appear, one per line
pub const DEFAULT_THRESHOLDS: [f64; 6] = [0.10, 0.22, 0.34, 0.46, 0.58, 0.70];

/// Progress at which the section counts as read
pub const DEFAULT_COMPLETION_THRESHOLD: f64 = 0.80;

/// The progress value at which one content block becomes visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThreshold {
    pub index: usize,
    pub threshold: f64,
}

/// Indices of content blocks currently visible, in ascending order
pub type VisibleSet = BTreeSet<usize>;

/// Errors building a schedule from configured values
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// A threshold is NaN/infinite or outside `[0, 1]`
    OutOfRange { position: usize, value: f64 },
    /// Thresholds must be non-decreasing
    Unordered { position: usize },
    /// Completion threshold is NaN/infinite or outside `[0, 1]`
    InvalidCompletion(f64),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { position, value } => {
                write!(f, "threshold #{} ({}) is outside 0.0..=1.0", position, value)
            }
            Self::Unordered { position } => write!(
                f,
                "threshold #{} is lower than the one before it (thresholds must not decrease)",
                position
            ),
            Self::InvalidCompletion(value) => {
                write!(f, "completion threshold {} is outside 0.0..=1.0", value)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Compute which blocks are visible at `progress`.
///
/// Index `i` is visible iff `progress >= threshold(i)`. Always recomputed
/// from scratch, so the result never depends on scroll direction or on
/// previous calls.
pub fn compute_visible_indices(
    progress: ScrollProgress,
    thresholds: &[RevealThreshold],
) -> VisibleSet {
    thresholds
        .iter()
        .filter(|t| progress.value() >= t.threshold)
        .map(|t| t.index)
        .collect()
}

/// Fixed reveal timing for one page section
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSchedule {
    thresholds: Vec<RevealThreshold>,
    completion_threshold: f64,
}

impl RevealSchedule {
    /// Build a schedule where block `i` uses `thresholds[i]`
    pub fn new(thresholds: &[f64], completion_threshold: f64) -> Result<Self, ScheduleError> {
        if !completion_threshold.is_finite() || !(0.0..=1.0).contains(&completion_threshold) {
            return Err(ScheduleError::InvalidCompletion(completion_threshold));
        }

        let mut previous = 0.0_f64;
        for (position, &value) in thresholds.iter().enumerate() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScheduleError::OutOfRange { position, value });
            }
            if value < previous {
                return Err(ScheduleError::Unordered { position });
            }
            previous = value;
        }

        Ok(Self {
            thresholds: thresholds
                .iter()
                .enumerate()
                .map(|(index, &threshold)| RevealThreshold { index, threshold })
                .collect(),
            completion_threshold,
        })
    }

    pub fn thresholds(&self) -> &[RevealThreshold] {
        &self.thresholds
    }

    pub fn completion_threshold(&self) -> f64 {
        self.completion_threshold
    }

    /// Number of blocks this schedule covers
    pub fn block_count(&self) -> usize {
        self.thresholds.len()
    }

    pub fn visible_indices(&self, progress: ScrollProgress) -> VisibleSet {
        compute_visible_indices(progress, &self.thresholds)
    }

    pub fn is_complete(&self, progress: ScrollProgress) -> bool {
        progress.value() >= self.completion_threshold
    }
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS
                .iter()
                .enumerate()
                .map(|(index, &threshold)| RevealThreshold { index, threshold })
                .collect(),
            completion_threshold: DEFAULT_COMPLETION_THRESHOLD,
        }
    }
}
