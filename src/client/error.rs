//! Client-side error taxonomy.
//!
//! Three terminal failure families for an analysis attempt: transport
//! (status or network/timeout), decode (body not the expected shape), and
//! domain (the backend answered but reported an error). Validation failures
//! live in [`crate::models::SelectionError`] and never reach the client.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Non-success HTTP status from the backend.
    #[error("server returned HTTP {0}")]
    Status(StatusCode),
    /// Network failure, connect error, or request timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Response body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Tab list carried a payload of the wrong shape.
    #[error("malformed tab payload: {0}")]
    Tabs(#[from] crate::tabs::TabError),
    /// Success status but an `error` field in the body.
    #[error("analysis failed: {0}")]
    Domain(String),
}

impl ClientError {
    /// Whether this failure came from the wire rather than the backend logic.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Status(_) | ClientError::Transport(_))
    }
}
