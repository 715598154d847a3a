//! `[logging]` section
//!
//! The page captures logs into its own strip, so file output is opt-in and
//! mostly useful when debugging webhook delivery after the fact. Bad values
//! never stop the page: they are reported on stderr (tracing is not up yet
//! when config loads) and replaced by the default.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_PREFIX: &str = "manifesto";

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Lowercase tracing level, always one `tracing::Level` accepts
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file_enabled: false,
            file_dir: default_log_dir(),
            file_rotation: LogRotation::Daily,
            file_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// `~/.local/share/manifesto/logs` where the platform has one
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("manifesto").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Canonical form of a level name, or None if tracing would not accept it
fn normalize_level(value: &str) -> Option<String> {
    tracing::Level::from_str(value.trim())
        .ok()
        .map(|level| level.as_str().to_ascii_lowercase())
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let level = match file.level {
            Some(raw) => normalize_level(&raw).unwrap_or_else(|| {
                eprintln!("Warning: unknown [logging] level {:?}, using {}", raw, DEFAULT_LEVEL);
                defaults.level
            }),
            None => defaults.level,
        };

        let file_rotation = match file.file_rotation {
            Some(raw) => LogRotation::parse(&raw).unwrap_or_else(|| {
                eprintln!(
                    "Warning: unknown [logging] file_rotation {:?}, using {}",
                    raw,
                    defaults.file_rotation.as_str()
                );
                defaults.file_rotation
            }),
            None => defaults.file_rotation,
        };

        Self {
            level,
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation,
            file_prefix: file
                .file_prefix
                .filter(|prefix| !prefix.trim().is_empty())
                .unwrap_or(defaults.file_prefix),
        }
    }
}
