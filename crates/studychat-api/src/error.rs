use thiserror::Error;

/// The single failure kind a completion call can surface.
///
/// Transport errors, non-success statuses, and malformed responses all
/// collapse into this one variant; the caller never branches on the cause.
/// The detail string exists for logs and diagnostics, not for end users.
#[derive(Debug, Error)]
#[error("completion request failed: {0}")]
pub struct CompletionError(pub String);

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        CompletionError(err.to_string())
    }
}

impl CompletionError {
    pub fn status(status: reqwest::StatusCode, body: &str) -> Self {
        CompletionError(format!(
            "API error: {} {} - {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            studychat_logging::safe_truncate(body, 500)
        ))
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        CompletionError(detail.into())
    }
}
