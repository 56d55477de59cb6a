//! Error types for the sakai client.
//!
//! Failures are reported as they happen: transport errors from reqwest,
//! non-2xx responses with their status and body, and a login response that
//! carried no session cookie. Nothing is retried or reclassified.

use thiserror::Error;

/// The unified error type for sakai operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport or body decoding failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, empty if it could not be read.
        body: String,
    },

    /// Login returned success but no `set-cookie` header.
    #[error("login response did not carry a session cookie")]
    MissingSessionCookie,

    /// Unusable configuration or header input.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the HTTP status code if this error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// A cookie value that cannot be used as a header.
    #[error("invalid session cookie: {reason}")]
    Cookie { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_code_and_body() {
        let err = Error::Status {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn missing_cookie_has_no_status() {
        let err = Error::MissingSessionCookie;
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn invalid_input_converts() {
        let err: Error = InvalidInputError::Cookie {
            reason: "not ASCII".to_string(),
        }
        .into();
        assert!(err.to_string().contains("not ASCII"));
    }
}
