// Components module - the page's building blocks
//
// Document sections build full-width lines that the page scrolls through:
// - Hero: company name and the reveal hint
// - Manifesto: greeting plus the staggered paragraphs
// - Footer: closing copy and the email form (mounted on completion)
//
// Overlays render into fixed rects on top of the document:
// - Theme toggle, status bar, log strip, toast, scrollbar

pub mod footer;
pub mod hero;
pub mod logs_strip;
pub mod manifesto;
pub mod scrollbar;
pub mod status_bar;
pub mod theme_toggle;
pub mod toast;

pub use toast::Toast;

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// A row of spaces carrying `style`, so backgrounds fill the whole width
pub fn blank_line(width: u16, style: Style) -> Line<'static> {
    Line::from(Span::styled(" ".repeat(usize::from(width)), style))
}

/// `text` centered in `width` columns, padded on both sides with `fill`
pub fn centered_line(text: &str, width: u16, text_style: Style, fill: Style) -> Line<'static> {
    let width = usize::from(width);
    let text_width = text.width().min(width);
    let left = (width - text_width) / 2;
    let right = width.saturating_sub(left + text.width());
    Line::from(vec![
        Span::styled(" ".repeat(left), fill),
        Span::styled(text.to_string(), text_style),
        Span::styled(" ".repeat(right), fill),
    ])
}

/// Spans placed at `left`, followed by padding out to `width`
pub fn padded_line(left: usize, spans: Vec<Span<'static>>, width: u16, fill: Style) -> Line<'static> {
    let used: usize = left + spans.iter().map(|s| s.content.width()).sum::<usize>();
    let mut all = Vec::with_capacity(spans.len() + 2);
    all.push(Span::styled(" ".repeat(left), fill));
    all.extend(spans);
    all.push(Span::styled(
        " ".repeat(usize::from(width).saturating_sub(used)),
        fill,
    ));
    Line::from(all)
}
