use thiserror::Error;

use crate::error_code::ApiErrorCode;

/// Sentinel reported for failures that carry no HTTP status or API code
/// (connection refused, timeout, undecodable body).
pub const UNCLASSIFIED_SENTINEL: i64 = -1;

/// Top-level error type for the `hosptrack-api` crate.
///
/// Covers the precondition check on the key, transport failures, the
/// application error envelope, and decoding. The sentinel operations on
/// [`TornClient`](crate::TornClient) flatten these through [`Error::sentinel`].
#[derive(Debug, Error)]
pub enum Error {
    // ── Precondition ────────────────────────────────────────────────
    /// The API key is blank or not exactly 16 characters.
    #[error("Invalid Torn API key: expected 16 characters, got {length}")]
    InvalidApiKey { length: usize },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error code: {status}")]
    HttpStatus { status: u16 },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Application ─────────────────────────────────────────────────
    /// `{"error": {"code": N, "error": "..."}}` returned with HTTP 200.
    #[error("API error code: {}. Error message: {}", code.code(), code.message())]
    Api {
        code: ApiErrorCode,
        /// The server's own short text, kept for debugging.
        server_message: String,
    },

    /// The envelope carried a code the error table does not know about.
    #[error("API error code {code} is not in the known error table (0-16); the table needs updating")]
    UnmappedErrorCode { code: i64 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The negative number the sentinel operations report for this error.
    ///
    /// HTTP failures map to `-status`, envelope errors to `-code`, everything
    /// else to [`UNCLASSIFIED_SENTINEL`].
    pub fn sentinel(&self) -> i64 {
        match self {
            Self::HttpStatus { status } => -i64::from(*status),
            Self::Transport(e) => e
                .status()
                .map_or(UNCLASSIFIED_SENTINEL, |s| -i64::from(s.as_u16())),
            Self::Api { code, .. } => -code.code(),
            Self::UnmappedErrorCode { code } => -code.saturating_abs(),
            Self::InvalidApiKey { .. } | Self::InvalidUrl(_) | Self::Deserialization { .. } => {
                UNCLASSIFIED_SENTINEL
            }
        }
    }

    /// Returns `true` for failures below the application layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// Returns `true` if the request ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Extract the API error code, if this came from the error envelope.
    pub fn api_error_code(&self) -> Option<ApiErrorCode> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_negates_status_and_code() {
        assert_eq!(Error::HttpStatus { status: 500 }.sentinel(), -500);
        let api = Error::Api {
            code: ApiErrorCode::IncorrectKey,
            server_message: "Incorrect key".into(),
        };
        assert_eq!(api.sentinel(), -2);
        assert_eq!(Error::UnmappedErrorCode { code: 17 }.sentinel(), -17);
    }

    #[test]
    fn api_error_display_uses_table_message() {
        let api = Error::Api {
            code: ApiErrorCode::IncorrectKey,
            server_message: String::new(),
        };
        let text = api.to_string();
        assert!(text.contains("API error code: 2"), "{text}");
        assert!(text.contains("Incorrect Key"), "{text}");
    }

    #[test]
    fn unclassified_failures_are_negative() {
        let err = Error::Deserialization {
            message: "eof".into(),
            body: String::new(),
        };
        assert_eq!(err.sentinel(), UNCLASSIFIED_SENTINEL);
        assert!(!err.is_transport());
    }
}
