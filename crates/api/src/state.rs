use std::sync::Arc;

use coldstore_events::AlertDispatcher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc` and immutable.
#[derive(Clone)]
pub struct AppState {
    /// Fault detection and alert fan-out.
    pub dispatcher: Arc<AlertDispatcher>,
}
