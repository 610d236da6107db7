//! Webhook handler for cold store status reports.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use coldstore_core::StatusReport;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Acknowledgement returned for every accepted report.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub result: &'static str,
}

impl Ack {
    pub const DONE: Ack = Ack { result: "done" };
}

/// POST /api/v1/alarms
///
/// Parse the posted status report and email the recipient list about every
/// fault it shows. An empty body is accepted without checks. The response is
/// the same whether or not any alert fired or any send failed.
pub async fn receive_status(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<Ack>> {
    let Some(report) = StatusReport::from_body(&body)? else {
        tracing::debug!("Empty status payload, skipping fault checks");
        return Ok(Json(Ack::DONE));
    };

    tracing::debug!(
        webhook_id = report.webhook_id.as_deref().unwrap_or("-"),
        device_id = report.device_id.as_deref().unwrap_or("-"),
        thing_id = report.thing_id.as_deref().unwrap_or("-"),
        properties = report.len(),
        "Status report received"
    );

    let summary = state.dispatcher.dispatch(&report).await;

    tracing::info!(
        conditions = summary.conditions.len(),
        sent = summary.sent,
        failed = summary.failed,
        "Status report processed"
    );

    Ok(Json(Ack::DONE))
}
