// Scroll progress tracking
//
// Progress is the scroll offset normalized against the scrollable height
// of the document. It is recomputed from the latest offset only, so any
// number of intermediate scroll notifications can be dropped.

use std::fmt;

/// Normalized scroll position through the page, always within `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    /// Build a progress value, clamping into range (NaN becomes 0)
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Progress as a whole percentage, for the status line
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl From<f64> for ScrollProgress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ScrollProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Convert a scroll offset into progress through the scrollable document.
///
/// Returns `offset / scrollable_height` clamped to `[0, 1]`. A non-positive
/// (or non-finite) height yields `0` rather than a division artifact.
pub fn compute_progress(scroll_offset: f64, scrollable_height: f64) -> ScrollProgress {
    if !scrollable_height.is_finite() || scrollable_height <= 0.0 || !scroll_offset.is_finite() {
        return ScrollProgress::START;
    }
    ScrollProgress::new(scroll_offset / scrollable_height)
}
