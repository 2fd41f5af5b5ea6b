//! Error types shared by the client.

/// Failure of a REST call.
///
/// `Display` is the text shown to the user in an alert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("No internet connection")]
    NoConnection,
    /// The server answered with an error status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// The request could not be built.
    #[error("Invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Builds a server error from the raw error body.
    ///
    /// Uses the `message` field of the JSON envelope when present, otherwise
    /// the operation-specific `fallback`.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            })
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::Server { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status: 401, .. })
    }
}

/// Failure reading or writing persisted session data.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("Failed to write '{0}' to localStorage")]
    Write(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
