pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /alarms                                          status report webhook (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/alarms", post(handlers::alarms::receive_status))
}
