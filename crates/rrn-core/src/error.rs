//! Failure kinds surfaced by the naming pipeline.

use thiserror::Error;

use crate::retry::{classify_curl_error, classify_http_status, ErrorKind};

/// A single naming request failed.
///
/// `MalformedInput` only leaves the redactor through its fallible inner
/// functions; the public sanitizers recover from it by passing the original
/// text through.
#[derive(Debug, Error)]
pub enum NamingError {
    /// A URL or body could not be parsed for redaction.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// The endpoint answered non-200 on every attempt of the retry budget.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u32, message: String },
    /// Connection, timeout or interruption. Never retried.
    #[error("network error: {0}")]
    Transport(#[from] curl::Error),
    /// The reply body did not have the expected JSON shape.
    #[error("unexpected response shape: {0}")]
    ResponseShape(String),
}

impl NamingError {
    /// Retry classification for this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NamingError::Api { status, .. } => classify_http_status(*status),
            NamingError::Transport(e) => classify_curl_error(e),
            NamingError::MalformedInput(_) | NamingError::ResponseShape(_) => {
                ErrorKind::ResponseShape
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_server_message() {
        let e = NamingError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(e.to_string(), "API error (HTTP 429): rate limited");
        assert_eq!(e.kind(), ErrorKind::Throttled);
    }

    #[test]
    fn shape_errors_classify_as_non_retryable() {
        let e = NamingError::ResponseShape("missing choices".to_string());
        assert_eq!(e.kind(), ErrorKind::ResponseShape);
    }

    #[test]
    fn transport_errors_keep_curl_cause() {
        let e = NamingError::from(curl::Error::new(7));
        assert_eq!(e.kind(), ErrorKind::Connection);
        assert!(std::error::Error::source(&e).is_some());
    }
}
