//! Responsive breakpoints and page geometry.
//!
//! Single source of truth for width thresholds and section heights - no magic
//! numbers scattered in render code.

/// Rows reserved at the bottom of the terminal for the status bar
pub const STATUS_ROWS: u16 = 1;

/// The hero never shrinks below this many rows, even on tiny terminals
pub const MIN_HERO_ROWS: usize = 10;

/// Rows taken by the log strip overlay when it is shown
pub const LOG_STRIP_ROWS: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Width of the reading column for a terminal of `width` columns
    pub fn column_width(&self, width: u16) -> usize {
        let width = usize::from(width);
        let column = match self {
            Breakpoint::Compact => width.saturating_sub(4),
            Breakpoint::Normal => width.saturating_sub(10).min(64),
            Breakpoint::Wide => 72,
            Breakpoint::UltraWide => 80,
        };
        column.clamp(1, width.max(1))
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// Vertical geometry of the page document.
///
/// The document is hero, then manifesto, then (once mounted) footer. Reveal
/// progress is measured over hero + manifesto only, so mounting the footer
/// never moves the progress the reader already reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Document width in columns (terminal width minus the scrollbar)
    pub width: u16,
    /// Rows of document visible at once
    pub viewport: usize,
    /// Reading column width
    pub column: usize,
    pub hero_rows: usize,
    pub manifesto_rows: usize,
    pub footer_rows: usize,
}

impl PageLayout {
    /// Geometry for a terminal of `width` x `height` cells.
    ///
    /// `manifesto_rows` and `footer_rows` are the section heights the section
    /// builders produced for this column width.
    pub fn new(width: u16, height: u16, manifesto_rows: usize, footer_rows: usize) -> Self {
        let viewport = usize::from(height.saturating_sub(STATUS_ROWS)).max(1);
        Self {
            width: width.saturating_sub(1).max(1),
            viewport,
            column: Self::column_for(width),
            hero_rows: viewport.max(MIN_HERO_ROWS),
            manifesto_rows,
            footer_rows,
        }
    }

    /// Reading column width for a terminal `width`
    pub fn column_for(width: u16) -> usize {
        let width = width.saturating_sub(1).max(1);
        Breakpoint::from_width(width).column_width(width)
    }

    /// Left margin that centers the reading column
    pub fn column_left(&self) -> usize {
        usize::from(self.width).saturating_sub(self.column) / 2
    }

    /// First document row of the footer
    pub fn footer_start(&self) -> usize {
        self.hero_rows + self.manifesto_rows
    }

    /// Rows in the document with or without the footer
    pub fn total_rows(&self, footer_mounted: bool) -> usize {
        let footer = if footer_mounted { self.footer_rows } else { 0 };
        self.hero_rows + self.manifesto_rows + footer
    }

    /// Denominator for reveal progress: how far the reveal section can scroll
    pub fn reveal_scrollable(&self) -> usize {
        self.total_rows(false).saturating_sub(self.viewport)
    }
}
