// UI rendering
//
// Composes the page document (hero, manifesto, footer once mounted) into one
// scrolled paragraph, then draws overlays on top: theme toggle, log strip,
// toast, and the status bar along the bottom row.

use super::app::App;
use super::components::{
    footer, hero, logs_strip, manifesto, scrollbar::render_scrollbar, status_bar, theme_toggle,
};
use super::layout::STATUS_ROWS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
        .split(f.area());

    draw_page(f, chunks[0], app);
    theme_toggle::render(f, app.toggle_area().intersection(chunks[0]), app.theme_flag(), &app.theme);

    if let Some(area) = app.logs_area() {
        let area = area.intersection(chunks[0]);
        let entries = app.recent_logs(logs_strip::capacity(area.height));
        logs_strip::render(f, area, &entries, &app.theme);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, chunks[0], &app.theme);
    }

    status_bar::render(f, chunks[1], app);

    if let Some(position) = app.input_cursor() {
        f.set_cursor_position(position);
    }
}

/// Sections build their full rows each frame; the viewport window is sliced
/// out at the scroll offset.
fn draw_page(f: &mut Frame, area: Rect, app: &App) {
    let layout = &app.layout;
    let mut document: Vec<Line<'static>> = Vec::with_capacity(layout.total_rows(true));

    document.extend(hero::lines(layout, &app.theme, app.mode(), app.timed_started()));
    document.extend(manifesto::lines(
        app.manifesto_rows(),
        app.visible(),
        layout,
        &app.theme,
    ));
    if app.footer_mounted() {
        document.extend(footer::lines(
            app.footer_rows(),
            &app.signup,
            layout,
            &app.theme,
        ));
    }

    let window: Vec<Line<'static>> = document
        .into_iter()
        .skip(app.scroll.offset())
        .take(usize::from(area.height))
        .collect();

    let page = Paragraph::new(window).style(Style::default().bg(app.theme.background));
    f.render_widget(page, area);

    render_scrollbar(f, area, &app.scroll, &app.theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::{FOOTER_HEADING, MANIFESTO};
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_draw_hero_and_status() {
        let mut terminal = Terminal::new(TestBackend::new(80, 25)).unwrap();
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.mount(80, 25);

        terminal.draw(|f| draw(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("THE CHENNAI COMPUTE COMPANY"));
        assert!(text.contains("0%"));
        assert!(text.contains("midnight"));
    }

    #[test]
    fn test_draw_footer_after_completion() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = App::new(&Config::default(), LogBuffer::new());
        app.mount(100, 30);
        app.scroll_to_bottom();
        app.on_frame(Instant::now());
        app.scroll_to_bottom();

        terminal.draw(|f| draw(f, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains(FOOTER_HEADING));
        assert!(text.contains("Notify me"));
        assert!(text.contains(MANIFESTO[5]));
    }
}
