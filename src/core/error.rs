//! Error types for the viewer.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ViewerError`] - Failure taxonomy surfaced by the viewer operations

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failures the viewer distinguishes when deciding how to degrade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    /// Fetch rejected or non-success status.
    #[error("Failed to load {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: FetchError,
    },
    /// Malformed manifest JSON.
    #[error("Malformed structure manifest: {0}")]
    Parse(String),
    /// DOM construction or enhancement failed.
    #[error("Render failed: {0}")]
    Render(String),
    /// The UI cannot represent the requested structure.
    #[error("Not supported: {0}")]
    Unsupported(String),
}

impl ViewerError {
    pub fn network(url: &str, source: FetchError) -> Self {
        Self::Network {
            url: url.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_message_names_url_and_status() {
        let err = ViewerError::network("src/a.md", FetchError::HttpError(404));
        assert_eq!(err.to_string(), "Failed to load src/a.md: HTTP error: 404");
    }

    #[test]
    fn test_parse_error_message() {
        let err = ViewerError::Parse("expected value at line 1 column 1".to_string());
        assert!(err.to_string().starts_with("Malformed structure manifest"));
    }
}
