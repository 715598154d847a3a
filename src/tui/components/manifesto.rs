// Manifesto section
//
// Rows are computed once per column width; visibility is applied at render
// time from the current visible set. Hidden paragraphs keep their rows as
// blanks so the layout never shifts while the reveal plays.

use super::{blank_line, padded_line};
use crate::content::{wrap, GREETING, MANIFESTO};
use crate::reveal::VisibleSet;
use crate::theme::Theme;
use crate::tui::layout::PageLayout;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Blank rows above the greeting and below the last paragraph
const SECTION_PADDING: usize = 2;

/// Left rule drawn beside revealed paragraphs
const RULE: &str = "┃ ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestoRow {
    Blank,
    Greeting(String),
    /// One wrapped line of paragraph `index`
    Paragraph { index: usize, text: String },
}

/// Lay out the section for a reading `column`, at least `min_rows` tall
pub fn rows(column: usize, min_rows: usize) -> Vec<ManifestoRow> {
    let text_width = column.saturating_sub(RULE.chars().count()).max(1);
    let mut rows = vec![ManifestoRow::Blank; SECTION_PADDING];

    rows.extend(wrap(GREETING, column).into_iter().map(ManifestoRow::Greeting));
    rows.push(ManifestoRow::Blank);

    for (index, paragraph) in MANIFESTO.iter().enumerate() {
        rows.extend(
            wrap(paragraph, text_width)
                .into_iter()
                .map(|text| ManifestoRow::Paragraph { index, text }),
        );
        rows.push(ManifestoRow::Blank);
    }

    rows.extend(std::iter::repeat(ManifestoRow::Blank).take(SECTION_PADDING));
    if rows.len() < min_rows {
        rows.resize(min_rows, ManifestoRow::Blank);
    }
    rows
}

/// Render rows, showing only paragraphs in `visible`
pub fn lines(
    rows: &[ManifestoRow],
    visible: &VisibleSet,
    layout: &PageLayout,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let fill = Style::default().bg(theme.background);
    let left = layout.column_left();

    rows.iter()
        .map(|row| match row {
            ManifestoRow::Blank => blank_line(layout.width, fill),
            ManifestoRow::Greeting(text) => padded_line(
                left,
                vec![Span::styled(
                    text.clone(),
                    fill.fg(theme.title).add_modifier(Modifier::BOLD | Modifier::ITALIC),
                )],
                layout.width,
                fill,
            ),
            ManifestoRow::Paragraph { index, text } if visible.contains(index) => padded_line(
                left,
                vec![
                    Span::styled(RULE, fill.fg(theme.accent)),
                    Span::styled(text.clone(), fill.fg(theme.foreground)),
                ],
                layout.width,
                fill,
            ),
            ManifestoRow::Paragraph { .. } => blank_line(layout.width, fill),
        })
        .collect()
}
