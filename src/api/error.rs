use thiserror::Error;

/// Errors from the Cased analysis API.
///
/// SECURITY: Error messages must NEVER contain the API key.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API key cannot be sent as a header value
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// API returned a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level error (connection refused, DNS, TLS, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not JSON
    #[error("invalid API response: {message}")]
    InvalidResponse { message: String },

    /// Response JSON did not match the drift report shape
    #[error("invalid drift report: {message}")]
    InvalidReport { message: String },

    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}
