//! Email signup submission
//!
//! The footer form hands an email to [`SignupSubmitter::submit`]. Empty input
//! is rejected locally without touching the network. Everything else is
//! delegated to a [`Notifier`], and delivery problems are logged but never
//! shown to the user as a failure: the form always lands on its confirmation
//! state once a non-empty email was entered.

mod notifier;

pub use notifier::{NotifyError, Notifier, SignupPayload, WebhookNotifier};

use chrono::Utc;

/// What happened to a submission behind the scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// Collaborator acknowledged with a 2xx
    Delivered,
    /// Collaborator failed or is not configured; recorded locally only
    Pending,
    /// Input rejected before any delivery attempt
    Rejected,
}

/// Result handed back to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub success: bool,
    pub message: String,
    pub status: DeliveryStatus,
}

impl SignupOutcome {
    fn delivered() -> Self {
        Self {
            success: true,
            message: "Notification sent successfully".to_string(),
            status: DeliveryStatus::Delivered,
        }
    }

    fn pending(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            status: DeliveryStatus::Pending,
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            status: DeliveryStatus::Rejected,
        }
    }
}

/// Validates and forwards signups to a notifier
pub struct SignupSubmitter<N> {
    notifier: N,
    source: String,
    recipient: Option<String>,
}

impl<N: Notifier> SignupSubmitter<N> {
    pub fn new(notifier: N, source: impl Into<String>, recipient: Option<String>) -> Self {
        Self {
            notifier,
            source: source.into(),
            recipient,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Submit one signup.
    ///
    /// Blank input resolves to `success: false` without calling the notifier.
    /// Any non-blank input resolves to `success: true`, whatever the notifier
    /// reports.
    pub async fn submit(&self, email: &str) -> SignupOutcome {
        let email = email.trim();
        if email.is_empty() {
            tracing::debug!("Signup rejected: empty email");
            return SignupOutcome::rejected("Please enter your email address");
        }

        let payload = SignupPayload::new(email, &self.source, self.recipient.clone(), Utc::now());

        match self.notifier.notify(&payload).await {
            Ok(()) => {
                tracing::info!(email = %email, notifier = self.notifier.name(), "Signup delivered");
                SignupOutcome::delivered()
            }
            Err(NotifyError::NotConfigured) => {
                tracing::info!(
                    email = %email,
                    timestamp = %payload.timestamp.to_rfc3339(),
                    source = %payload.source,
                    "Signup recorded locally (no webhook configured)"
                );
                SignupOutcome::pending("Signup recorded (dev mode)")
            }
            Err(e @ NotifyError::Status { .. }) => {
                tracing::warn!(email = %email, "Signup notification not delivered: {}", e);
                SignupOutcome::pending("Signup recorded (dev mode)")
            }
            Err(e) => {
                tracing::warn!(email = %email, "Signup notification error: {}", e);
                SignupOutcome::pending("Signup recorded")
            }
        }
    }
}
