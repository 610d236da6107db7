//! Cold store alarm delivery.
//!
//! - [`AlertMailer`]: the injectable "send one email" capability.
//! - [`delivery`]: concrete mailers (SMTP via `lettre`, and a disabled
//!   fallback used when SMTP is not configured).
//! - [`AlertDispatcher`]: evaluates a [`StatusReport`](coldstore_core::StatusReport)
//!   and fans each detected fault out to the recipient list.

pub mod delivery;
pub mod dispatcher;

pub use delivery::email::{EmailConfig, SmtpMailer};
pub use delivery::{AlertMailer, DisabledMailer, MailError};
pub use dispatcher::{AlertDispatcher, DispatchSummary, Recipients};
