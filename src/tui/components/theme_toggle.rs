// Theme toggle switch
//
// A clickable pill in the top-right corner of the page. Clicking it (or
// pressing 't') flips the theme flag.

use crate::theme::{Theme, ThemeFlag};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

const WIDTH: u16 = 14;

/// Where the toggle sits inside the page area
pub fn area(page: Rect) -> Rect {
    let width = WIDTH.min(page.width);
    Rect::new(
        page.right().saturating_sub(width + 2).max(page.x),
        page.y,
        width,
        page.height.min(1),
    )
}

pub fn render(f: &mut Frame, area: Rect, flag: ThemeFlag, theme: &Theme) {
    let (knob, label) = match flag {
        ThemeFlag::Default => ("●○", "midnight"),
        ThemeFlag::Alternate => ("○●", "solar"),
    };
    let track = Style::default().bg(theme.toggle_track);
    let line = Line::from(vec![
        Span::styled(" ", track),
        Span::styled(knob, track.fg(theme.highlight).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {:<9}", label), track.fg(theme.foreground)),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(line).style(track), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_in_top_right() {
        let page = Rect::new(0, 0, 80, 24);
        let toggle = area(page);
        assert_eq!(toggle.y, 0);
        assert_eq!(toggle.height, 1);
        assert!(toggle.right() <= page.right());
        assert!(toggle.x > page.width / 2);
    }

    #[test]
    fn test_area_on_narrow_page() {
        let page = Rect::new(0, 0, 6, 3);
        let toggle = area(page);
        assert!(toggle.width <= page.width);
        assert!(toggle.right() <= page.right());
    }
}
