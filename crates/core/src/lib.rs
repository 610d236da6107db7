//! Cold store alarm domain types.
//!
//! Pure data and predicates, no I/O:
//!
//! - [`StatusReport`]: the decoded webhook payload, parsed once at the
//!   boundary into a name → value map.
//! - [`FaultCondition`]: the fixed set of alarm predicates.
//! - [`AlertMessage`]: the subject/body pair sent for a condition.

pub mod alert;
pub mod error;
pub mod status_report;

pub use alert::{AlertMessage, FaultCondition, ALERT_SUBJECT};
pub use error::CoreError;
pub use status_report::StatusReport;
