//! Login and sign-up payloads

use serde::{Deserialize, Serialize};

/// Credentials for `auth/login`
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub id: String,
    pub pw: String,
}

/// Token pair issued by a successful login
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Student registration payload for `member/join-student`
#[derive(Clone, Serialize)]
pub struct SignUpRequest {
    pub id: String,
    pub pw: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub grade: u8,
    pub room: u8,
    pub number: u8,
}

impl SignUpRequest {
    /// A student registration; the role is always `STUDENT`
    #[allow(clippy::too_many_arguments)]
    pub fn student(
        id: impl Into<String>,
        pw: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        grade: u8,
        room: u8,
        number: u8,
    ) -> Self {
        Self {
            id: id.into(),
            pw: pw.into(),
            email: email.into(),
            name: name.into(),
            phone: phone.into(),
            role: "STUDENT".to_string(),
            grade,
            room,
            number,
        }
    }
}
