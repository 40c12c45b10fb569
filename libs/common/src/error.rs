//! Error types for the Dodam client
//!
//! Every failure a backend call can end in is one `ClientError` variant, so
//! callers can match on the kind of failure instead of inspecting strings.

pub use reqwest::StatusCode;
use thiserror::Error;

use crate::envelope::ErrorResponse;

/// Route the shell returns to when a session can no longer be refreshed
pub const LOGIN_ROUTE: &str = "/login";

/// Custom error type for backend calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// No response was received
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The client-side timeout elapsed before a response arrived
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("Request failed with status {status}")]
    Api {
        status: StatusCode,
        body: Option<ErrorResponse>,
    },

    /// The access token expired and could not be refreshed; the session
    /// has already been cleared
    #[error("Session expired, redirecting to {redirect_to}")]
    SessionExpired {
        redirect_to: &'static str,
        #[source]
        source: Box<ClientError>,
    },

    /// A successful response did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A request could not be built (bad URL, unserializable body)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Wrap a refresh failure as the end of the session
    pub fn session_expired(source: ClientError) -> Self {
        ClientError::SessionExpired {
            redirect_to: LOGIN_ROUTE,
            source: Box::new(source),
        }
    }

    /// Classify a transport error from reqwest
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err)
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err)
        }
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error envelope of the failed response
    pub fn body(&self) -> Option<&ErrorResponse> {
        match self {
            ClientError::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Machine-readable error code from the envelope
    pub fn code(&self) -> Option<&str> {
        self.body().and_then(ErrorResponse::code)
    }

    /// Human-readable message from the envelope
    pub fn message(&self) -> Option<&str> {
        self.body().and_then(ErrorResponse::message)
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired { .. })
    }

    /// Where the shell should navigate after this error, if anywhere
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            ClientError::SessionExpired { redirect_to, .. } => Some(*redirect_to),
            _ => None,
        }
    }
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_accessors() {
        let err = ClientError::Api {
            status: StatusCode::CONFLICT,
            body: Some(ErrorResponse {
                status: 409,
                message: Some("이미 신청했습니다".to_string()),
                code: Some("ALREADY_APPLIED".to_string()),
            }),
        };

        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert_eq!(err.code(), Some("ALREADY_APPLIED"));
        assert_eq!(err.message(), Some("이미 신청했습니다"));
        assert!(!err.is_session_expired());
        assert_eq!(err.redirect_target(), None);
    }

    #[test]
    fn test_session_expired_redirects_to_login() {
        let err = ClientError::session_expired(ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: None,
        });

        assert!(err.is_session_expired());
        assert_eq!(err.redirect_target(), Some("/login"));
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Session expired, redirecting to /login");
    }
}
