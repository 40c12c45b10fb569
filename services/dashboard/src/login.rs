//! Login command

use client::Clients;
use common::ClientError;
use common::envelope::error_codes;

const LOGIN_FAILED: &str = "로그인에 실패했습니다";

/// Log in, printing a login-specific message on failure
pub async fn login(clients: &Clients, id: &str, pw: &str) -> Result<(), ClientError> {
    match clients.auth().login(id, pw).await {
        Ok(()) => {
            println!("로그인되었습니다");
            Ok(())
        }
        Err(error) => {
            if !error.is_session_expired() {
                eprintln!("{}", failure_message(&error));
            }
            Err(error)
        }
    }
}

fn failure_message(error: &ClientError) -> &str {
    match error.code() {
        Some(error_codes::WRONG_PASSWORD) => "비밀번호가 올바르지 않습니다",
        _ => error.message().unwrap_or(LOGIN_FAILED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ErrorResponse;
    use common::error::StatusCode;

    fn rejected(message: Option<&str>, code: Option<&str>) -> ClientError {
        ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            body: Some(ErrorResponse {
                status: 400,
                message: message.map(str::to_string),
                code: code.map(str::to_string),
            }),
        }
    }

    #[test]
    fn test_wrong_password_has_fixed_text() {
        let error = rejected(Some("Wrong password"), Some(error_codes::WRONG_PASSWORD));
        assert_eq!(failure_message(&error), "비밀번호가 올바르지 않습니다");
    }

    #[test]
    fn test_backend_message_otherwise() {
        let error = rejected(Some("탈퇴한 회원입니다"), Some("MEMBER_DEACTIVATED"));
        assert_eq!(failure_message(&error), "탈퇴한 회원입니다");
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(failure_message(&rejected(None, None)), LOGIN_FAILED);
        assert_eq!(
            failure_message(&ClientError::Decode("eof".to_string())),
            LOGIN_FAILED
        );
    }
}
