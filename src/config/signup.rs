//! Signup configuration: where footer signups are delivered

use serde::Deserialize;

/// Signup settings
#[derive(Debug, Clone)]
pub struct SignupConfig {
    /// Webhook receiving signup JSON (None = record locally only)
    pub webhook_url: Option<String>,
    /// `source` field of the payload
    pub source: String,
    /// Operator inbox forwarded in the `to` field
    pub recipient: Option<String>,
    /// Request timeout in seconds, never below one
    pub timeout_secs: u64,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            source: "Chennai Manifesto".to_string(),
            recipient: None,
            timeout_secs: 10,
        }
    }
}

/// Signup settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSignup {
    pub webhook_url: Option<String>,
    pub source: Option<String>,
    pub recipient: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl SignupConfig {
    pub fn from_file(file: Option<FileSignup>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            webhook_url: file.webhook_url.filter(|u| !u.trim().is_empty()),
            source: file.source.unwrap_or(defaults.source),
            recipient: file.recipient.filter(|r| !r.trim().is_empty()),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs).max(1),
        }
    }
}
