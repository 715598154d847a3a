// Theme state for the page
//
// The page has exactly two looks: the default midnight palette and the
// alternate "solar" palette. ThemeState owns the flag and tells one listener
// about every toggle; components receive the resolved Theme and never look
// at the flag themselves.

mod palette;

pub use palette::{Theme, ThemeConfig};

/// Which of the two palettes is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeFlag {
    /// Midnight: dark background, ember accents
    #[default]
    Default,
    /// Solar: warm light background
    Alternate,
}

impl ThemeFlag {
    /// Parse a config value; unknown names fall back to the default palette
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "solar" | "solarized" | "alternate" | "light" => Self::Alternate,
            _ => Self::Default,
        }
    }

    /// Name written to config files and shown in the toggle
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "midnight",
            Self::Alternate => "solar",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Default => Self::Alternate,
            Self::Alternate => Self::Default,
        }
    }

    pub fn is_alternate(self) -> bool {
        self == Self::Alternate
    }
}

impl From<bool> for ThemeFlag {
    fn from(alternate: bool) -> Self {
        if alternate {
            Self::Alternate
        } else {
            Self::Default
        }
    }
}

impl From<ThemeFlag> for bool {
    fn from(flag: ThemeFlag) -> Self {
        flag.is_alternate()
    }
}

/// Callback invoked with the new flag (`true` = alternate) on every toggle
pub type ThemeListener = Box<dyn FnMut(bool)>;

/// Two-valued theme toggle for one page view
pub struct ThemeState {
    flag: ThemeFlag,
    on_change: Option<ThemeListener>,
}

impl ThemeState {
    pub fn new(initial: ThemeFlag) -> Self {
        Self {
            flag: initial,
            on_change: None,
        }
    }

    /// Register the theme-change callback (replaces any previous one)
    pub fn on_theme_change(mut self, listener: impl FnMut(bool) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn current(&self) -> ThemeFlag {
        self.flag
    }

    /// Flip the flag, notify the listener, and return the new flag
    pub fn toggle(&mut self) -> ThemeFlag {
        self.flag = self.flag.flipped();
        if let Some(listener) = self.on_change.as_mut() {
            listener(self.flag.into());
        }
        self.flag
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeFlag::default())
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("flag", &self.flag)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}
