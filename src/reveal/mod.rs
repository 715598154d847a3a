//! Scroll-driven reveal engine
//!
//! Turns raw scroll input into "which manifesto lines are visible" and
//! "is the section done". Everything here is a pure function of its inputs
//! except the completion latch, which is owned by the page composition.
//!
//! ```text
//!  scroll/resize input ──► FrameCoalescer ──(one per frame)──► compute_progress
//!                                                                   │
//!        TimedReveal (click-triggered) ─────────────────────────────┤
//!                                                                   ▼
//!                                                          RevealSchedule
//!                                                    ┌──────────┴──────────┐
//!                                                    ▼                     ▼
//!                                          compute_visible_indices   is_complete
//!                                                                          │
//!                                                                          ▼
//!                                                                  CompletionLatch
//! ```

mod coalesce;
mod latch;
mod progress;
mod sequencer;
mod timed;

pub use coalesce::FrameCoalescer;
pub use latch::CompletionLatch;
pub use progress::{compute_progress, ScrollProgress};
pub use sequencer::{RevealSchedule, VisibleSet};
pub use timed::TimedReveal;
