// Frame coalescing for high-frequency input
//
// Terminals can deliver dozens of wheel events between two frames. Only the
// latest value matters for progress, so the loop pushes every event here and
// drains once per frame tick.

/// Holds at most one pending value; later pushes replace earlier ones
#[derive(Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    /// Pushes since the last drain (for trace logging)
    dropped: usize,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            dropped: 0,
        }
    }

    /// Record the latest value, replacing any value not yet drained
    pub fn push(&mut self, value: T) {
        if self.pending.replace(value).is_some() {
            self.dropped += 1;
        }
    }

    /// Drain the latest value for this frame
    pub fn take(&mut self) -> Option<T> {
        if self.dropped > 0 {
            tracing::trace!("Coalesced {} scroll updates into one frame", self.dropped + 1);
            self.dropped = 0;
        }
        self.pending.take()
    }
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}
