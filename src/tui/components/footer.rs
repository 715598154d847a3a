// Footer section
//
// Mounted once the manifesto completes. Closing copy, then the signup form:
// a one-line email field with a "Notify me" button and a message row that
// reflects the form phase.

use super::{blank_line, centered_line, padded_line};
use crate::content::{
    wrap, COMPANY, FOOTER_HEADING, FOOTER_LOCATION, FOOTER_QUOTE, SIGNUP_PROMPT,
};
use crate::theme::Theme;
use crate::tui::app::{SignupForm, SignupPhase};
use crate::tui::layout::PageLayout;
use crate::util::tail_to_width;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

const BUTTON: &str = "[ Notify me ]";
const PROMPT: &str = "› ";
const PLACEHOLDER: &str = "you@example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterRow {
    Blank,
    Heading,
    Quote(String),
    Cite,
    Location,
    Label,
    Input,
    Message,
}

/// Lay out the footer for a reading `column`
pub fn rows(column: usize) -> Vec<FooterRow> {
    let mut rows = vec![FooterRow::Blank, FooterRow::Heading, FooterRow::Blank];
    rows.extend(wrap(FOOTER_QUOTE, column).into_iter().map(FooterRow::Quote));
    rows.extend([
        FooterRow::Cite,
        FooterRow::Blank,
        FooterRow::Location,
        FooterRow::Blank,
        FooterRow::Label,
        FooterRow::Input,
        FooterRow::Message,
        FooterRow::Blank,
    ]);
    rows
}

/// Index of the email field within the footer rows
pub fn input_row(rows: &[FooterRow]) -> Option<usize> {
    rows.iter().position(|r| *r == FooterRow::Input)
}

/// Columns available for typed text
pub fn field_width(column: usize) -> usize {
    column
        .saturating_sub(PROMPT.width() + 1 + BUTTON.width())
        .max(8)
}

/// Screen column of the caret, relative to the document's left edge
pub fn caret_column(layout: &PageLayout, input: &str) -> usize {
    let field = field_width(layout.column);
    let shown = tail_to_width(input, field.saturating_sub(1));
    layout.column_left() + PROMPT.width() + shown.width()
}

pub fn lines(
    rows: &[FooterRow],
    form: &SignupForm,
    layout: &PageLayout,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let fill = Style::default().bg(theme.card);
    let left = layout.column_left();
    let width = layout.width;

    rows.iter()
        .map(|row| match row {
            FooterRow::Blank => blank_line(width, fill),
            FooterRow::Heading => centered_line(
                FOOTER_HEADING,
                width,
                fill.fg(theme.title).add_modifier(Modifier::BOLD),
                fill,
            ),
            FooterRow::Quote(text) => {
                centered_line(text, width, fill.fg(theme.foreground).add_modifier(Modifier::ITALIC), fill)
            }
            FooterRow::Cite => centered_line(&format!("— {}", COMPANY), width, fill.fg(theme.accent), fill),
            FooterRow::Location => centered_line(FOOTER_LOCATION, width, fill.fg(theme.muted), fill),
            FooterRow::Label => padded_line(
                left,
                vec![Span::styled(SIGNUP_PROMPT, fill.fg(theme.title))],
                width,
                fill,
            ),
            FooterRow::Input => input_line(form, layout, theme, fill),
            FooterRow::Message => padded_line(left, vec![message_span(form, theme, fill)], width, fill),
        })
        .collect()
}

fn input_line(form: &SignupForm, layout: &PageLayout, theme: &Theme, fill: Style) -> Line<'static> {
    let field = field_width(layout.column);
    let field_style = if form.editing {
        fill.fg(theme.foreground).bg(theme.toggle_track)
    } else {
        fill.fg(theme.foreground)
    };

    let (text, style) = if form.input.is_empty() && !form.editing {
        (PLACEHOLDER.to_string(), field_style.fg(theme.muted))
    } else {
        // Keep the caret end visible; one column stays free for the cursor
        (tail_to_width(&form.input, field.saturating_sub(1)).to_string(), field_style)
    };
    let pad = field.saturating_sub(text.width());

    let button_style = match form.phase {
        SignupPhase::Submitting { .. } => fill.fg(theme.muted),
        _ => fill.fg(theme.highlight).add_modifier(Modifier::BOLD),
    };

    padded_line(
        layout.column_left(),
        vec![
            Span::styled(PROMPT, fill.fg(theme.accent)),
            Span::styled(format!("{}{}", text, " ".repeat(pad)), style),
            Span::styled(" ", fill),
            Span::styled(BUTTON, button_style),
        ],
        layout.width,
        fill,
    )
}

fn message_span(form: &SignupForm, theme: &Theme, fill: Style) -> Span<'static> {
    match &form.phase {
        SignupPhase::Idle if form.editing => {
            Span::styled("Enter to send · Esc to leave the field", fill.fg(theme.muted))
        }
        SignupPhase::Idle => Span::styled("Press Tab to enter your email", fill.fg(theme.muted)),
        SignupPhase::Submitting { .. } => Span::styled("Sending…", fill.fg(theme.muted)),
        SignupPhase::Invalid(message) => Span::styled(message.clone(), fill.fg(theme.error)),
        SignupPhase::Submitted(outcome) => Span::styled(
            format!("✓ Thank you for joining. {}", outcome.message),
            fill.fg(theme.success),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeConfig, ThemeFlag};

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_rows_contain_one_input() {
        let rows = rows(60);
        assert_eq!(rows.iter().filter(|r| **r == FooterRow::Input).count(), 1);
        assert!(input_row(&rows).is_some());
    }

    #[test]
    fn test_placeholder_until_typed() {
        let theme = Theme::for_flag(ThemeFlag::Default, &ThemeConfig::default());
        let layout = PageLayout::new(80, 24, 20, 0);
        let rows = rows(layout.column);
        let idx = input_row(&rows).unwrap();

        let mut form = SignupForm::default();
        let line = &lines(&rows, &form, &layout, &theme)[idx];
        assert!(text_of(line).contains(PLACEHOLDER));

        form.input = "ada@example.com".to_string();
        let line = &lines(&rows, &form, &layout, &theme)[idx];
        assert!(text_of(line).contains("ada@example.com"));
        assert!(text_of(line).contains(BUTTON));
    }

    #[test]
    fn test_caret_stays_inside_field() {
        let layout = PageLayout::new(80, 24, 20, 0);
        let long = "x".repeat(500);
        let caret = caret_column(&layout, &long);
        let field_end = layout.column_left() + PROMPT.width() + field_width(layout.column);
        assert!(caret < field_end);
    }
}
