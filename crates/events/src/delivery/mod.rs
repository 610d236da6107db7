//! Outbound alert delivery channels.
//!
//! Everything that leaves the process goes through [`AlertMailer`], so the
//! dispatcher can be driven by a recording mailer in tests.

pub mod email;

use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// AlertMailer
// ---------------------------------------------------------------------------

/// Sends a single plain-text email.
#[async_trait]
pub trait AlertMailer: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), MailError>;

    /// Short label for health output and logs.
    fn kind(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// DisabledMailer
// ---------------------------------------------------------------------------

/// Stand-in used when no SMTP server is configured.
///
/// Every alert is logged and reported as delivered.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledMailer;

#[async_trait]
impl AlertMailer for DisabledMailer {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), MailError> {
        tracing::warn!(
            to = recipient,
            subject,
            body,
            "SMTP not configured, alert email not sent"
        );
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "disabled"
    }
}
