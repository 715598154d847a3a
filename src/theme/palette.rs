//! Resolved color palettes for the two theme flags

use super::ThemeFlag;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── Manifesto Colors ────────────────────────────────────
    /// Left rule of the manifesto block, cite lines
    pub accent: Color,
    /// Hero glow and reveal fade-in
    pub glow: Color,
    /// Hero section background (the hero stays dark in both palettes)
    pub hero_background: Color,
    pub hero_foreground: Color,
    /// Footer card background
    pub card: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub toggle_track: Color,
    pub error: Color,
    pub success: Color,

    pub border_type: BorderType,
}

impl Theme {
    pub fn for_flag(flag: ThemeFlag, config: &ThemeConfig) -> Self {
        let theme = match flag {
            ThemeFlag::Default => Self::midnight(),
            ThemeFlag::Alternate => Self::solar(),
        };
        if config.use_theme_background {
            theme
        } else {
            Self {
                background: Color::Reset,
                card: Color::Reset,
                ..theme
            }
        }
    }

    /// Default palette
    pub fn midnight() -> Self {
        Self {
            name: "midnight",
            background: Color::Rgb(0x0f, 0x0f, 0x12),
            foreground: Color::Rgb(0xe6, 0xe1, 0xd6),
            muted: Color::Rgb(0x8a, 0x86, 0x80),
            accent: Color::Rgb(0xe0, 0x5a, 0x3a),
            glow: Color::Rgb(0xf2, 0x9e, 0x4c),
            hero_background: Color::Rgb(0x00, 0x00, 0x00),
            hero_foreground: Color::Rgb(0xf5, 0xf0, 0xe6),
            card: Color::Rgb(0x17, 0x17, 0x1c),
            title: Color::Rgb(0xf5, 0xf0, 0xe6),
            border: Color::Rgb(0x3a, 0x3a, 0x42),
            highlight: Color::Rgb(0xf2, 0x9e, 0x4c),
            status_bar: Color::Rgb(0x8a, 0x86, 0x80),
            toggle_track: Color::Rgb(0x1f, 0x29, 0x37),
            error: Color::Rgb(0xef, 0x44, 0x44),
            success: Color::Rgb(0x6a, 0xc2, 0x7a),
            border_type: BorderType::Rounded,
        }
    }

    /// Alternate palette, after Solarized Light
    pub fn solar() -> Self {
        Self {
            name: "solar",
            background: Color::Rgb(0xfd, 0xf6, 0xe3),
            foreground: Color::Rgb(0x58, 0x6e, 0x75),
            muted: Color::Rgb(0x93, 0xa1, 0xa1),
            accent: Color::Rgb(0xdc, 0x32, 0x2f),
            glow: Color::Rgb(0xcb, 0x4b, 0x16),
            hero_background: Color::Rgb(0x00, 0x2b, 0x36),
            hero_foreground: Color::Rgb(0xee, 0xe8, 0xd5),
            card: Color::Rgb(0xee, 0xe8, 0xd5),
            title: Color::Rgb(0x07, 0x36, 0x42),
            border: Color::Rgb(0x93, 0xa1, 0xa1),
            highlight: Color::Rgb(0xdc, 0x32, 0x2f),
            status_bar: Color::Rgb(0x65, 0x7b, 0x83),
            toggle_track: Color::Rgb(0xef, 0x44, 0x44),
            error: Color::Rgb(0xdc, 0x32, 0x2f),
            success: Color::Rgb(0x85, 0x99, 0x00),
            border_type: BorderType::Plain,
        }
    }
}
