// Status bar component
//
// Renders reveal state at the bottom: progress, mode, paragraphs revealed,
// and the key hints that fit.

use crate::config::RevealMode;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: progress, mode, reveal count and full key hints
/// - Narrow: progress and the essential keys
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let progress = app.progress();
    let mode = match (app.mode(), app.timed_started()) {
        (RevealMode::Scroll, _) => "scroll",
        (RevealMode::Timed, false) => "timed (Space to start)",
        (RevealMode::Timed, true) => "timed",
    };

    let status_text = if !bp.at_least(Breakpoint::Normal) {
        format!(" {} │ t theme · q quit", progress)
    } else if !bp.at_least(Breakpoint::Wide) {
        format!(
            " {} │ {} │ ↑↓ scroll · t theme · l logs · q quit",
            progress, mode
        )
    } else {
        let form_hint = if app.footer_mounted() {
            " · Tab email · r replay"
        } else {
            ""
        };
        format!(
            " {} │ {} │ {}/{} revealed │ ↑↓ PgUp PgDn scroll · t theme · l logs{} · q quit",
            progress,
            mode,
            app.revealed_count(),
            app.reveal_len(),
            form_hint,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar).bg(app.theme.background));

    f.render_widget(status, area);
}
