// Scroll state for the page document
//
// The page is one tall document behind a fixed viewport. This tracks the
// row offset and clamps it against the document and viewport sizes. Reveal
// progress is derived from the offset elsewhere; this module only knows rows.

/// Scroll position over a document of `total` rows seen through `viewport` rows
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Row index at the top of the viewport
    offset: usize,

    /// Number of rows in the document
    total: usize,

    /// Number of rows visible in the viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions, clamping the offset
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll up by `rows`; returns true if the offset moved
    pub fn scroll_up(&mut self, rows: usize) -> bool {
        let before = self.offset;
        self.offset = self.offset.saturating_sub(rows);
        self.offset != before
    }

    /// Scroll down by `rows`; returns true if the offset moved
    pub fn scroll_down(&mut self, rows: usize) -> bool {
        let before = self.offset;
        self.offset = (self.offset + rows).min(self.max_offset());
        self.offset != before
    }

    /// Scroll up by a page (one row of overlap is kept)
    pub fn page_up(&mut self) -> bool {
        self.scroll_up(self.page_size())
    }

    /// Scroll down by a page
    pub fn page_down(&mut self) -> bool {
        self.scroll_down(self.page_size())
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) -> bool {
        let before = self.offset;
        self.offset = 0;
        self.offset != before
    }

    /// Jump to bottom
    pub fn scroll_to_bottom(&mut self) -> bool {
        let before = self.offset;
        self.offset = self.max_offset();
        self.offset != before
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Maximum valid offset
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Get total content size
    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get viewport size
    #[cfg(test)]
    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn page_size(&self) -> usize {
        self.viewport.saturating_sub(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_clamped_to_document() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        assert!(scroll.scroll_down(100));
        assert_eq!(scroll.offset(), 15);
        assert!(!scroll.scroll_down(1));

        // Shrinking the document pulls the offset back in range
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_scroll_up_stops_at_top() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        scroll.scroll_down(3);

        assert!(scroll.scroll_up(10));
        assert_eq!(scroll.offset(), 0);
        assert!(!scroll.scroll_up(1));
    }

    #[test]
    fn test_paging_keeps_one_row_overlap() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        scroll.page_down();
        assert_eq!(scroll.offset(), 9);
        scroll.page_down();
        assert_eq!(scroll.offset(), 18);
        scroll.page_up();
        assert_eq!(scroll.offset(), 9);
    }

    #[test]
    fn test_jump_to_ends() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        assert!(scroll.scroll_to_bottom());
        assert_eq!(scroll.offset(), 90);
        assert!(!scroll.scroll_to_bottom());
        assert!(scroll.scroll_to_top());
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_short_document_does_not_scroll() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(4, 10);

        assert!(!scroll.needs_scrollbar());
        assert!(!scroll.scroll_down(1));
        assert_eq!(scroll.max_offset(), 0);
    }
}
