// CLI module - command-line argument parsing and handlers
//
// With no subcommand the interactive page runs. Subcommands:
// - signup <EMAIL>: Submit one signup through the configured webhook
// - print: Print the manifesto as plain text
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use crate::content;
use crate::signup::{DeliveryStatus, Notifier, SignupSubmitter};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Manifesto - The Chennai Compute Company, in your terminal
#[derive(Parser)]
#[command(name = "manifesto")]
#[command(version = VERSION)]
#[command(about = "A scroll-driven manifesto page for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit an email to the signup webhook and print the outcome
    Signup {
        /// Email address to register
        email: String,
    },

    /// Print the manifesto as plain text
    Print {
        /// Wrap width in columns
        #[arg(long, default_value_t = 72)]
        width: usize,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle the commands that need neither logging nor the network.
/// Returns true if a command was handled (exit after).
pub fn handle_offline(command: &Commands) -> bool {
    match command {
        Commands::Print { width } => {
            print!("{}", content::plain_text((*width).max(1)));
            true
        }
        Commands::Config { show, reset, path } => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                // No flag provided, show help
                println!("Usage: manifesto config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        Commands::Signup { .. } => false,
    }
}

/// Submit one email and report what the reader would have seen
pub async fn handle_signup<N: Notifier>(submitter: &SignupSubmitter<N>, email: &str) -> Result<()> {
    let outcome = submitter.submit(email).await;

    if !outcome.success {
        bail!("{}", outcome.message);
    }

    let detail = match outcome.status {
        DeliveryStatus::Delivered => "delivered",
        DeliveryStatus::Pending => "recorded locally",
        DeliveryStatus::Rejected => "rejected",
    };
    println!("✓ {} ({})", outcome.message, detail);
    Ok(())
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme.as_str());
    println!("use_theme_background = {}", config.use_theme_background);
    println!();
    println!("[reveal]");
    println!("mode = {:?}", config.reveal.mode.as_str());
    println!("thresholds = {}", config.thresholds_to_toml());
    println!(
        "completion_threshold = {:?}",
        config.reveal.schedule.completion_threshold()
    );
    println!("frame_rate = {}", config.reveal.frame_rate);
    println!("timed_duration_ms = {}", config.reveal.timed_duration_ms);
    println!();
    println!("[signup]");
    match config.signup.webhook_url.as_deref() {
        Some(url) => println!("webhook_url = {:?}", redact_url(url)),
        None => println!("# webhook_url not set (signups are logged locally)"),
    }
    println!("source = {:?}", config.signup.source);
    if let Some(recipient) = &config.signup.recipient {
        println!("recipient = {:?}", recipient);
    }
    println!("timeout_secs = {}", config.signup.timeout_secs);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

/// Webhook URLs usually embed a secret path; show only scheme and host
fn redact_url(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}://{}/…", parsed.scheme(), host),
            None => "<invalid url>".to_string(),
        },
        Err(_) => "<invalid url>".to_string(),
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_signup() {
        let cli = Cli::try_parse_from(["manifesto", "signup", "ada@example.com"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Signup { ref email }) if email == "ada@example.com"
        ));
    }

    #[test]
    fn test_no_subcommand_runs_page() {
        let cli = Cli::try_parse_from(["manifesto"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_redact_url_hides_path() {
        assert_eq!(
            redact_url("https://hooks.zapier.com/hooks/catch/123/abc/"),
            "https://hooks.zapier.com/…"
        );
        assert_eq!(redact_url("not a url"), "<invalid url>");
    }
}
