//! Notification collaborators for signups
//!
//! A [`Notifier`] delivers one signup somewhere outside the process. The
//! production implementation posts JSON to an operator-configured webhook
//! (Zapier, IFTTT, a custom endpoint). Failures are reported back to the
//! submitter, which decides what the user sees.

use crate::config::SignupConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Subject line used for every signup notification
pub const SIGNUP_SUBJECT: &str = "New Manifesto Signup";

/// JSON body posted to the webhook
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignupPayload {
    pub email: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub subject: String,
    pub message: String,
    /// Operator inbox the webhook should forward to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl SignupPayload {
    pub fn new(email: &str, source: &str, to: Option<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            email: email.to_string(),
            timestamp,
            source: source.to_string(),
            subject: SIGNUP_SUBJECT.to_string(),
            message: format!(
                "New user signup: {}\nTimestamp: {}\nSource: {}",
                email,
                timestamp.to_rfc3339(),
                source
            ),
            to,
        }
    }
}

/// Errors a notifier can report
#[derive(Debug)]
pub enum NotifyError {
    /// No endpoint configured (dev mode)
    NotConfigured,
    /// Endpoint answered with a non-2xx status
    Status { status: u16, body: String },
    /// Connection, TLS, or timeout failure
    Network(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "No signup webhook configured"),
            Self::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "Webhook responded with HTTP {}", status)
                } else {
                    write!(f, "Webhook responded with HTTP {}: {}", status, body)
                }
            }
            Self::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Delivers a signup to the outside world
///
/// Implementations must be shareable across tasks: the TUI runs each
/// submission on its own tokio task.
pub trait Notifier: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    fn notify(
        &self,
        payload: &SignupPayload,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Maximum number of response-body bytes kept in error messages
const MAX_ERROR_BODY: usize = 200;

/// Posts signups to an HTTP webhook
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookNotifier {
    /// Build from config. A missing URL is allowed and yields
    /// [`NotifyError::NotConfigured`] on every call.
    pub fn from_config(config: &SignupConfig) -> Result<Self, NotifyError> {
        Self::new(
            config.webhook_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let url = url.filter(|u| !u.trim().is_empty());
        match &url {
            Some(url) => tracing::debug!("Signup webhook: {}", url),
            None => tracing::debug!("Signup webhook not configured, signups are logged locally"),
        }

        Ok(Self { client, url })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

impl Notifier for WebhookNotifier {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn notify(&self, payload: &SignupPayload) -> Result<(), NotifyError> {
        let Some(url) = &self.url else {
            return Err(NotifyError::NotConfigured);
        };

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let body = crate::util::truncate_utf8_safe(body.trim(), MAX_ERROR_BODY).to_string();
        Err(NotifyError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_required_fields() {
        let timestamp = DateTime::parse_from_rfc3339("2025-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let payload = SignupPayload::new("user@example.com", "Chennai Manifesto", None, timestamp);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["email"], "user@example.com");
        assert_eq!(json["timestamp"], "2025-01-15T10:30:00Z");
        assert_eq!(json["source"], "Chennai Manifesto");
        assert_eq!(json["subject"], SIGNUP_SUBJECT);
        assert!(json.get("to").is_none());
        assert!(json["message"]
            .as_str()
            .unwrap()
            .starts_with("New user signup: user@example.com"));
    }

    #[test]
    fn test_payload_includes_recipient_when_set() {
        let payload = SignupPayload::new(
            "a@b.c",
            "src",
            Some("ops@example.com".to_string()),
            Utc::now(),
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["to"], "ops@example.com");
    }

    #[test]
    fn test_blank_url_counts_as_unconfigured() {
        let notifier = WebhookNotifier::new(Some("   ".to_string()), Duration::from_secs(1)).unwrap();
        assert!(!notifier.is_configured());
    }

    #[test]
    fn test_error_display() {
        let err = NotifyError::Status {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Webhook responded with HTTP 502");
    }
}
