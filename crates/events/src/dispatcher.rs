//! Fault detection and alert fan-out.
//!
//! [`AlertDispatcher`] is the whole alarm pipeline minus HTTP: given a parsed
//! [`StatusReport`], it detects every [`FaultCondition`] and sends one email
//! per recipient for each. Sends are awaited one at a time so the order is
//! condition order, then recipient order. A failed send is logged and the
//! remaining sends still go out; nothing is retried.

use std::sync::Arc;

use coldstore_core::{FaultCondition, StatusReport};

use crate::delivery::AlertMailer;

/// Addresses notified when no recipient list is configured.
pub const DEFAULT_RECIPIENTS: [&str; 2] = ["your-email@email.com", "your-other-email@email.com"];

// ---------------------------------------------------------------------------
// Recipients
// ---------------------------------------------------------------------------

/// Ordered list of alert recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// Parse a comma-separated address list.
    ///
    /// Blank entries are dropped; an empty result falls back to
    /// [`DEFAULT_RECIPIENTS`].
    pub fn parse(list: &str) -> Self {
        let addresses: Vec<String> = list
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if addresses.is_empty() {
            Self::default()
        } else {
            Self(addresses)
        }
    }

    /// Read `ALERT_RECIPIENTS`, falling back to [`DEFAULT_RECIPIENTS`].
    pub fn from_env() -> Self {
        std::env::var("ALERT_RECIPIENTS")
            .map(|list| Self::parse(&list))
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for Recipients {
    fn default() -> Self {
        Self(DEFAULT_RECIPIENTS.iter().map(|s| s.to_string()).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for Recipients {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// DispatchSummary
// ---------------------------------------------------------------------------

/// What a single dispatch did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Conditions that held, in evaluation order.
    pub conditions: Vec<FaultCondition>,
    /// Emails handed to the mailer successfully.
    pub sent: usize,
    /// Emails the mailer rejected.
    pub failed: usize,
}

// ---------------------------------------------------------------------------
// AlertDispatcher
// ---------------------------------------------------------------------------

pub struct AlertDispatcher {
    mailer: Arc<dyn AlertMailer>,
    recipients: Recipients,
}

impl AlertDispatcher {
    pub fn new(mailer: Arc<dyn AlertMailer>, recipients: Recipients) -> Self {
        Self { mailer, recipients }
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    /// Label of the underlying mailer (`"smtp"`, `"disabled"`, ...).
    pub fn mailer_kind(&self) -> &'static str {
        self.mailer.kind()
    }

    /// Detect faults in `report` and email every recipient about each one.
    pub async fn dispatch(&self, report: &StatusReport) -> DispatchSummary {
        let mut summary = DispatchSummary {
            conditions: FaultCondition::detect(report),
            ..DispatchSummary::default()
        };

        for condition in &summary.conditions {
            let message = condition.message();
            tracing::info!(
                %condition,
                thing_id = report.thing_id.as_deref().unwrap_or("-"),
                recipients = self.recipients.len(),
                "Fault condition detected"
            );

            for recipient in self.recipients.iter() {
                match self
                    .mailer
                    .send(recipient, message.subject, message.body)
                    .await
                {
                    Ok(()) => summary.sent += 1,
                    Err(e) => {
                        summary.failed += 1;
                        tracing::error!(
                            error = %e,
                            to = recipient,
                            %condition,
                            "Failed to send alert email"
                        );
                    }
                }
            }
        }

        summary
    }
}
