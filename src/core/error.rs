//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`SubmitError`] - Item creation (multipart POST) errors
//!
//! Both are logged to the browser console at the component boundary and
//! surfaced to the user as a single generic toast; the variants exist for
//! diagnostics, not for user-visible distinction.

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (DNS, CORS, connection reset, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors raised while creating an item through the add-item form.
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// Failed to assemble the multipart form body
    FormAssembly,
    /// The POST itself failed
    Transport(FetchError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormAssembly => write!(f, "Failed to assemble form data"),
            Self::Transport(err) => write!(f, "Upload failed: {}", err),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<FetchError> for SubmitError {
    fn from(err: FetchError) -> Self {
        Self::Transport(err)
    }
}
