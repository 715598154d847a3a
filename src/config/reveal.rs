//! Reveal configuration: threshold schedule, progress source, frame pacing

use crate::reveal::RevealSchedule;
use serde::Deserialize;
use std::time::Duration;

/// Default frames per second for coalesced scroll recomputation
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Default duration of the timed reveal
pub const DEFAULT_TIMED_DURATION_MS: u64 = 4_000;

/// What drives reveal progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Scroll position through the page
    #[default]
    Scroll,
    /// Time since the reader clicked the page
    Timed,
}

impl RevealMode {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "timed" | "time" | "click" => Self::Timed,
            _ => Self::Scroll,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Timed => "timed",
        }
    }
}

/// Reveal settings
#[derive(Debug, Clone)]
pub struct RevealConfig {
    pub mode: RevealMode,
    pub schedule: RevealSchedule,
    /// Upper bound on progress recomputations per second
    pub frame_rate: u32,
    pub timed_duration_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            mode: RevealMode::Scroll,
            schedule: RevealSchedule::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            timed_duration_ms: DEFAULT_TIMED_DURATION_MS,
        }
    }
}

/// Reveal settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileReveal {
    pub mode: Option<String>,
    pub thresholds: Option<Vec<f64>>,
    pub completion_threshold: Option<f64>,
    pub frame_rate: Option<u32>,
    pub timed_duration_ms: Option<u64>,
}

impl RevealConfig {
    /// Create from file config with defaults.
    ///
    /// An invalid schedule is reported on stderr and replaced by the default
    /// schedule; logging is not initialized yet when config loads.
    pub fn from_file(file: Option<FileReveal>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let schedule = if file.thresholds.is_none() && file.completion_threshold.is_none() {
            defaults.schedule
        } else {
            let thresholds = file
                .thresholds
                .unwrap_or_else(|| defaults.schedule.thresholds().iter().map(|t| t.threshold).collect());
            let completion = file
                .completion_threshold
                .unwrap_or(defaults.schedule.completion_threshold());

            match RevealSchedule::new(&thresholds, completion) {
                Ok(schedule) => schedule,
                Err(e) => {
                    eprintln!("Warning: invalid [reveal] schedule ({}), using defaults", e);
                    defaults.schedule
                }
            }
        };

        Self {
            mode: file
                .mode
                .map(|m| RevealMode::from_str(&m))
                .unwrap_or(defaults.mode),
            schedule,
            frame_rate: file.frame_rate.unwrap_or(defaults.frame_rate).clamp(1, 240),
            timed_duration_ms: file.timed_duration_ms.unwrap_or(defaults.timed_duration_ms),
        }
    }

    /// Interval between frame ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.frame_rate.max(1)))
    }

    pub fn timed_duration(&self) -> Duration {
        Duration::from_millis(self.timed_duration_ms)
    }
}
