//! Configuration for the manifesto page
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/manifesto/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::theme::{ThemeConfig, ThemeFlag};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod reveal;
mod serialization;
mod signup;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use reveal::{FileReveal, RevealConfig, RevealMode};
pub use signup::{FileSignup, SignupConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment overrides
pub const ENV_THEME: &str = "MANIFESTO_THEME";
pub const ENV_WEBHOOK_URL: &str = "MANIFESTO_WEBHOOK_URL";
pub const ENV_REVEAL_MODE: &str = "MANIFESTO_REVEAL_MODE";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Palette the page opens with (toggled at runtime with 't')
    pub theme: ThemeFlag,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Reveal timing and frame pacing
    pub reveal: RevealConfig,

    /// Signup webhook settings
    pub signup: SignupConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeFlag::Default,
            use_theme_background: true,
            reveal: RevealConfig::default(),
            signup: SignupConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn theme_config(&self) -> ThemeConfig {
        ThemeConfig {
            use_theme_background: self.use_theme_background,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [reveal] section
    pub reveal: Option<FileReveal>,

    /// Optional [signup] section
    pub signup: Option<FileSignup>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/manifesto/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("manifesto").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help operators discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the file exists but cannot be read or parsed:
    /// a broken config should fail fast rather than silently fall back to
    /// defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `manifesto config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env(ENV_THEME)
            .or(file.theme)
            .map(|name| ThemeFlag::from_name(&name))
            .unwrap_or_default();

        // Use theme background: file > default
        let use_theme_background = file.use_theme_background.unwrap_or(true);

        let mut reveal = RevealConfig::from_file(file.reveal);
        if let Some(mode) = env(ENV_REVEAL_MODE) {
            reveal.mode = RevealMode::from_str(&mode);
        }

        // Webhook URL: env > file (kept out of the file when it carries a token)
        let mut signup = SignupConfig::from_file(file.signup);
        if let Some(url) = env(ENV_WEBHOOK_URL).filter(|u| !u.trim().is_empty()) {
            signup.webhook_url = Some(url);
        }

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            use_theme_background,
            reveal,
            signup,
            logging,
        }
    }
}
