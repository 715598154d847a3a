// Startup module - banner and module status
//
// The page owns the terminal, so its boot sequence goes to the log strip
// via tracing. One-shot commands print a short banner to stderr instead,
// keeping stdout for the command's own output.

use crate::config::{Config, RevealMode, VERSION};
use crate::signup::WebhookNotifier;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
}

/// Module loading result for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: String,
}

/// Print the banner for one-shot commands (stderr)
pub fn print_startup(config: &Config, notifier: &WebhookNotifier) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{CYAN}Manifesto{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!("  {DIM}The Chennai Compute Company{RESET}");
    eprintln!();

    for module in get_module_status(config, notifier) {
        let (icon, style) = if module.enabled {
            (format!("{GREEN}✓{RESET}"), "")
        } else {
            (format!("{DIM}○{RESET}"), DIM)
        };
        eprintln!(
            "    {icon} {style}{:<10}{RESET} {DIM}{}{RESET}",
            module.name, module.description
        );
    }
    eprintln!();
}

/// Print startup messages to the page's log strip
pub fn log_startup(config: &Config, notifier: &WebhookNotifier) {
    tracing::info!("MANIFESTO v{}", VERSION);

    match Config::config_path() {
        Some(path) if path.exists() => tracing::info!("Config: {}", path.display()),
        _ => tracing::info!("Config: defaults"),
    }

    for module in get_module_status(config, notifier) {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }

    tracing::info!("Ready. Scroll to read, 'l' hides this strip");
}

/// Get status of all modules based on config
fn get_module_status(config: &Config, notifier: &WebhookNotifier) -> Vec<ModuleStatus> {
    let reveal = match config.reveal.mode {
        RevealMode::Scroll => format!(
            "scroll-driven, complete at {:.0}%",
            config.reveal.schedule.completion_threshold() * 100.0
        ),
        RevealMode::Timed => format!(
            "timed over {} ms, starts on click",
            config.reveal.timed_duration_ms
        ),
    };

    vec![
        ModuleStatus {
            name: "reveal",
            enabled: true,
            description: reveal,
        },
        ModuleStatus {
            name: "webhook",
            enabled: notifier.is_configured(),
            description: if notifier.is_configured() {
                "signups delivered".to_string()
            } else {
                "dev mode, signups logged locally".to_string()
            },
        },
        ModuleStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: format!("JSON logs in {}", config.logging.file_dir.display()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_webhook_status_follows_notifier() {
        let config = Config::default();

        let unconfigured = WebhookNotifier::new(None, Duration::from_secs(1)).unwrap();
        let modules = get_module_status(&config, &unconfigured);
        let webhook = modules.iter().find(|m| m.name == "webhook").unwrap();
        assert!(!webhook.enabled);

        let configured = WebhookNotifier::new(
            Some("https://hooks.example.com/catch".to_string()),
            Duration::from_secs(1),
        )
        .unwrap();
        let modules = get_module_status(&config, &configured);
        let webhook = modules.iter().find(|m| m.name == "webhook").unwrap();
        assert!(webhook.enabled);
    }
}
