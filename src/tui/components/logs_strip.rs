//! Log strip overlay
//!
//! The newest entries from the in-memory log buffer, color-coded by level.
//! Toggled with 'l'; drawn over the bottom of the page.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Logs ")
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

/// Rows of entries that fit in a strip of `height` (one row is the border)
pub fn capacity(height: u16) -> usize {
    usize::from(height.saturating_sub(1))
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error),
        LogLevel::Warn => Style::default().fg(theme.highlight),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}
