//! Errors surfaced by the backend facade.

/// Failure of a single backend call.
///
/// Every variant is terminal for the user action that triggered the call;
/// nothing in the client retries.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON shape we expected.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A stored session token is not a decodable JWT.
    #[error("invalid session token: {0}")]
    InvalidToken(String),
}

impl ApiError {
    /// HTTP status of a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body of a `Status` error.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
