//! Configuration tests
//!
//! The TOML template is generated from `Config::default()`, so these tests
//! guard that every section survives a write/read cycle and that env vars
//! win over the file.

use super::*;
use crate::reveal::RevealSchedule;
use std::collections::HashMap;

fn parse(toml_str: &str) -> FileConfig {
    match toml::from_str(toml_str) {
        Ok(file) => file,
        Err(e) => panic!("config should parse.\nTOML:\n{}\nError: {}", toml_str, e),
    }
}

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let reloaded = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(reloaded.theme, config.theme);
    assert_eq!(reloaded.reveal.schedule, config.reveal.schedule);
    assert_eq!(reloaded.reveal.mode, RevealMode::Scroll);
    assert_eq!(reloaded.signup.webhook_url, None);
    assert_eq!(reloaded.signup.source, "Chennai Manifesto");
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_with_values() {
    let mut config = Config::default();
    config.theme = ThemeFlag::Alternate;
    config.use_theme_background = false;
    config.reveal.mode = RevealMode::Timed;
    config.reveal.schedule = RevealSchedule::new(&[0.05, 0.5, 0.5], 0.9).unwrap();
    config.reveal.frame_rate = 30;
    config.signup.webhook_url = Some("https://hooks.example.com/catch/\"quoted\"".to_string());
    config.signup.recipient = Some("ops@example.com".to_string());
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let reloaded = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(reloaded.theme, ThemeFlag::Alternate);
    assert!(!reloaded.use_theme_background);
    assert_eq!(reloaded.reveal.mode, RevealMode::Timed);
    assert_eq!(reloaded.reveal.schedule, config.reveal.schedule);
    assert_eq!(reloaded.reveal.frame_rate, 30);
    assert_eq!(reloaded.signup.webhook_url, config.signup.webhook_url);
    assert_eq!(reloaded.signup.recipient.as_deref(), Some("ops@example.com"));
    assert!(reloaded.logging.file_enabled);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_template_documents_every_section() {
    let toml_str = Config::default().to_toml();
    for section in ["[reveal]", "[signup]", "[logging]"] {
        assert!(toml_str.contains(section), "{} missing from template", section);
    }
    // Unset optional keys are shown as commented examples
    assert!(toml_str.contains("# webhook_url = "));
    assert!(toml_str.contains("# recipient = "));
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "midnight"
[reveal]
mode = "scroll"
[signup]
webhook_url = "https://file.example.com/hook"
"#,
    );
    let env = env_from(&[
        (ENV_THEME, "solar"),
        (ENV_REVEAL_MODE, "timed"),
        (ENV_WEBHOOK_URL, "https://env.example.com/hook"),
    ]);

    let config = Config::from_sources(file, env);

    assert_eq!(config.theme, ThemeFlag::Alternate);
    assert_eq!(config.reveal.mode, RevealMode::Timed);
    assert_eq!(
        config.signup.webhook_url.as_deref(),
        Some("https://env.example.com/hook")
    );
}

#[test]
fn test_blank_env_webhook_keeps_file_value() {
    let file = parse("[signup]\nwebhook_url = \"https://file.example.com/hook\"\n");
    let config = Config::from_sources(file, env_from(&[(ENV_WEBHOOK_URL, "  ")]));
    assert_eq!(
        config.signup.webhook_url.as_deref(),
        Some("https://file.example.com/hook")
    );
}

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::from_sources(parse(""), no_env);
    assert_eq!(config.theme, ThemeFlag::Default);
    assert!(config.use_theme_background);
    assert_eq!(config.reveal.schedule, RevealSchedule::default());
    assert_eq!(config.signup.timeout_secs, 10);
    assert_eq!(config.logging.level, "info");
}

// ─────────────────────────────────────────────────────────────────────────────
// Reveal section
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_schedule_falls_back_to_default() {
    let file = parse("[reveal]\nthresholds = [0.5, 0.2]\n");
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.reveal.schedule, RevealSchedule::default());
}

#[test]
fn test_completion_threshold_alone_keeps_default_thresholds() {
    let file = parse("[reveal]\ncompletion_threshold = 0.95\n");
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.reveal.schedule.completion_threshold(), 0.95);
    assert_eq!(
        config.reveal.schedule.thresholds(),
        RevealSchedule::default().thresholds()
    );
}

#[test]
fn test_frame_interval_from_rate() {
    let file = parse("[reveal]\nframe_rate = 0\n");
    let config = Config::from_sources(file, no_env);
    // Clamped to at least one frame per second
    assert_eq!(config.reveal.frame_rate, 1);
    assert_eq!(config.reveal.frame_interval().as_secs(), 1);

    let mut config = Config::default();
    config.reveal.frame_rate = 50;
    assert_eq!(config.reveal.frame_interval().as_millis(), 20);
}

// ─────────────────────────────────────────────────────────────────────────────
// Signup section
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_zero_timeout_is_raised_to_one_second() {
    let file = parse("[signup]\ntimeout_secs = 0\n");
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.signup.timeout_secs, 1);

    let file = parse("[signup]\ntimeout_secs = 30\n");
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.signup.timeout_secs, 30);
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging section
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_log_level_is_normalized() {
    let file = parse("[logging]\nlevel = \" WARN \"\n");
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_unknown_log_values_fall_back() {
    let file = parse(
        "[logging]\nlevel = \"loud\"\nfile_rotation = \"weekly\"\nfile_prefix = \"  \"\n",
    );
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    assert_eq!(config.logging.file_prefix, "manifesto");
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("Hourly"), Some(LogRotation::Hourly));
    assert_eq!(LogRotation::parse("never"), Some(LogRotation::Never));
    assert_eq!(LogRotation::parse("weekly"), None);
}
