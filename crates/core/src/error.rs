/// Errors raised while turning a request into domain types.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The body is not a JSON status report.
    #[error("Malformed status payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
