//! User-facing notifications for failed calls
//!
//! The client never fails silently: besides returning the error it hands
//! one or two transient notifications to a [`Notifier`].

use std::fmt;
use std::sync::{Arc, Mutex};

use common::ClientError;
use reqwest::StatusCode;
use tracing::warn;

/// A transient message to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Message sent by the backend, shown verbatim
    Message(String),
    NetworkError,
    Timeout,
    Unknown,
    Forbidden,
    NotFound,
    ServerError,
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Message(message) => message,
            Notification::NetworkError => "네트워크 연결을 확인해주세요",
            Notification::Timeout => "요청 시간이 초과되었습니다",
            Notification::Unknown => "알 수 없는 오류가 발생했습니다",
            Notification::Forbidden => "권한이 없습니다",
            Notification::NotFound => "요청한 리소스를 찾을 수 없습니다",
            Notification::ServerError => "서버 오류가 발생했습니다",
        }
    }

    /// Notifications to show for `error`, in display order
    ///
    /// The first one follows the precedence backend message, network
    /// failure, timeout, generic. 403, 404 and 500 add a second fixed one.
    /// An expired session shows nothing; the shell navigates instead.
    pub fn for_error(error: &ClientError) -> Vec<Notification> {
        if error.is_session_expired() {
            return Vec::new();
        }

        let primary = match (error.message(), error) {
            (Some(message), _) => Notification::Message(message.to_string()),
            (None, ClientError::Network(_)) => Notification::NetworkError,
            (None, ClientError::Timeout(_)) => Notification::Timeout,
            (None, _) => Notification::Unknown,
        };

        let mut notifications = vec![primary];
        match error.status() {
            Some(StatusCode::FORBIDDEN) => notifications.push(Notification::Forbidden),
            Some(StatusCode::NOT_FOUND) => notifications.push(Notification::NotFound),
            Some(StatusCode::INTERNAL_SERVER_ERROR) => {
                notifications.push(Notification::ServerError)
            }
            _ => {}
        }
        notifications
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Sink for notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that emits each notification as a tracing event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        warn!(notification = %notification, "Request failed");
    }
}

/// Notifier that keeps every notification it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Drain everything received so far
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.received
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ErrorResponse;

    fn api_error(status: u16, message: Option<&str>) -> ClientError {
        ClientError::Api {
            status: StatusCode::from_u16(status).unwrap(),
            body: Some(ErrorResponse {
                status,
                message: message.map(str::to_string),
                code: None,
            }),
        }
    }

    #[test]
    fn test_backend_message_wins() {
        let error = api_error(400, Some("비밀번호가 올바르지 않습니다"));
        assert_eq!(
            Notification::for_error(&error),
            vec![Notification::Message("비밀번호가 올바르지 않습니다".to_string())]
        );
    }

    #[test]
    fn test_status_notification_is_added() {
        assert_eq!(
            Notification::for_error(&api_error(404, None)),
            vec![Notification::Unknown, Notification::NotFound]
        );
        assert_eq!(
            Notification::for_error(&api_error(403, Some("관리자만 가능합니다"))),
            vec![
                Notification::Message("관리자만 가능합니다".to_string()),
                Notification::Forbidden
            ]
        );
        assert_eq!(
            Notification::for_error(&api_error(500, None)),
            vec![Notification::Unknown, Notification::ServerError]
        );
    }

    #[test]
    fn test_other_statuses_get_one_notification() {
        let error = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: None,
        };
        assert_eq!(Notification::for_error(&error), vec![Notification::Unknown]);
    }

    #[test]
    fn test_session_expired_is_silent() {
        let error = ClientError::session_expired(api_error(401, None));
        assert!(Notification::for_error(&error).is_empty());
    }

    #[test]
    fn test_decode_failure_is_generic() {
        let error = ClientError::Decode("missing field `data`".to_string());
        assert_eq!(Notification::for_error(&error), vec![Notification::Unknown]);
    }

    #[test]
    fn test_recording_notifier_take_drains() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::Timeout);
        notifier.notify(Notification::NotFound);

        assert_eq!(
            notifier.take(),
            vec![Notification::Timeout, Notification::NotFound]
        );
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_fixed_texts() {
        assert_eq!(Notification::NetworkError.to_string(), "네트워크 연결을 확인해주세요");
        assert_eq!(Notification::Timeout.text(), "요청 시간이 초과되었습니다");
    }
}
