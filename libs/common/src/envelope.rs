//! Response envelopes shared by every Dodam backend
//!
//! Successful calls answer `{ status, message, data }`; failures answer
//! `{ status, message, code }`.

use serde::{Deserialize, Serialize};

/// Success envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// Error envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// Human-readable message, if the backend sent a non-empty one
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Machine-readable discriminator
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// Error codes the backend is known to send
pub mod error_codes {
    pub const WRONG_PASSWORD: &str = "WRONG_PASSWORD";
    pub const APPLICATION_DURATION_PASSED: &str = "APPLICATION_DURATION_PASSED";
    pub const ALREADY_APPLIED: &str = "ALREADY_APPLIED";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_with_code() {
        let body = r#"{"status":400,"message":"비밀번호가 올바르지 않습니다","code":"WRONG_PASSWORD"}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.status, 400);
        assert_eq!(parsed.message(), Some("비밀번호가 올바르지 않습니다"));
        assert_eq!(parsed.code(), Some(error_codes::WRONG_PASSWORD));
    }

    #[test]
    fn test_error_envelope_empty_message_is_absent() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"status":404,"message":""}"#).unwrap();
        assert_eq!(parsed.message(), None);
        assert_eq!(parsed.code(), None);
    }

    #[test]
    fn test_success_envelope_without_status() {
        let parsed: ApiResponse<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(parsed.status, 0);
        assert_eq!(parsed.data, vec![1, 2, 3]);
    }
}
