//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn toml_str(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

/// Optional string: a live key when set, a commented example otherwise
fn optional_key(key: &str, value: Option<&str>, example: &str) -> String {
    match value {
        Some(v) => format!("{} = {}", key, toml_str(v)),
        None => format!("# {} = {}", key, toml_str(example)),
    }
}

impl Config {
    /// Serialize reveal thresholds as a TOML array
    pub fn thresholds_to_toml(&self) -> String {
        let values: Vec<String> = self
            .reveal
            .schedule
            .thresholds()
            .iter()
            .map(|t| format!("{:?}", t.threshold))
            .collect();
        format!("[{}]", values.join(", "))
    }

    /// Render the full config file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# manifesto configuration

# Palette the page opens with: midnight, solar (press 't' to toggle)
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Manifesto reveal
[reveal]
# scroll: lines appear as you scroll; timed: click the page to play the reveal
mode = "{mode}"
# Progress (0.0-1.0) at which each manifesto line appears, non-decreasing
thresholds = {thresholds}
# Progress at which the section is complete and the footer mounts
completion_threshold = {completion:?}
# Max progress recomputations per second (scroll bursts are coalesced)
frame_rate = {frame_rate}
# Length of the timed reveal
timed_duration_ms = {timed_ms}

# Email signup delivery (MANIFESTO_WEBHOOK_URL env var overrides)
[signup]
{webhook_url}
source = {source}
{recipient}
timeout_secs = {timeout}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to the in-page log strip or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = toml_str(self.theme.as_str()),
            use_bg = self.use_theme_background,
            mode = self.reveal.mode.as_str(),
            thresholds = self.thresholds_to_toml(),
            completion = self.reveal.schedule.completion_threshold(),
            frame_rate = self.reveal.frame_rate,
            timed_ms = self.reveal.timed_duration_ms,
            webhook_url = optional_key(
                "webhook_url",
                self.signup.webhook_url.as_deref(),
                "https://hooks.zapier.com/hooks/catch/YOUR_WEBHOOK_ID/",
            ),
            source = toml_str(&self.signup.source),
            recipient = optional_key(
                "recipient",
                self.signup.recipient.as_deref(),
                "founders@example.com",
            ),
            timeout = self.signup.timeout_secs,
            log_level = toml_str(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_str(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_str(&self.logging.file_prefix),
        )
    }
}
