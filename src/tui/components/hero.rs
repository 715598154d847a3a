// Hero section
//
// One viewport of dark backdrop with the company name centered. The hint
// line tells the reader how the reveal starts.

use super::{blank_line, centered_line};
use crate::config::RevealMode;
use crate::content::{COMPANY, HERO_TAGLINE};
use crate::theme::Theme;
use crate::tui::layout::PageLayout;
use ratatui::{
    style::{Modifier, Style},
    text::Line,
};

/// Build the hero rows
pub fn lines(
    layout: &PageLayout,
    theme: &Theme,
    mode: RevealMode,
    timed_started: bool,
) -> Vec<Line<'static>> {
    let fill = Style::default().bg(theme.hero_background);
    let hint = match (mode, timed_started) {
        (RevealMode::Scroll, _) => "scroll ↓",
        (RevealMode::Timed, false) => "click or press Space to begin",
        (RevealMode::Timed, true) => "revealing…",
    };

    let content = [
        (COMPANY, fill.fg(theme.glow).add_modifier(Modifier::BOLD)),
        ("", fill),
        (HERO_TAGLINE, fill.fg(theme.hero_foreground)),
        ("", fill),
        ("", fill),
        (hint, fill.fg(theme.muted)),
    ];

    let top = layout.hero_rows.saturating_sub(content.len()) / 2;
    let mut lines = Vec::with_capacity(layout.hero_rows);
    lines.extend((0..top).map(|_| blank_line(layout.width, fill)));
    for (text, style) in content {
        if lines.len() >= layout.hero_rows {
            break;
        }
        lines.push(centered_line(text, layout.width, style, fill));
    }
    while lines.len() < layout.hero_rows {
        lines.push(blank_line(layout.width, fill));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeConfig, ThemeFlag};

    #[test]
    fn test_hero_fills_its_rows() {
        let theme = Theme::for_flag(ThemeFlag::Default, &ThemeConfig::default());
        for height in [2u16, 11, 40] {
            let layout = PageLayout::new(80, height, 20, 10);
            let lines = lines(&layout, &theme, RevealMode::Scroll, false);
            assert_eq!(lines.len(), layout.hero_rows);
        }
    }

    #[test]
    fn test_hint_follows_mode() {
        let theme = Theme::for_flag(ThemeFlag::Default, &ThemeConfig::default());
        let layout = PageLayout::new(80, 25, 20, 10);
        let text: String = lines(&layout, &theme, RevealMode::Timed, false)
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("click or press Space"));
        assert!(text.contains(COMPANY));
    }
}
