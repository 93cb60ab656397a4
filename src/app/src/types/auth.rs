use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Request body of the update-password endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[validate(min_length = 1)]
    pub current_password: String,
    #[validate(min_length = 1)]
    pub password: String,
}

/// Failure reported by the authentication service.
///
/// The status is only present when the service answered with an HTTP
/// response; transport failures carry a message alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.describe())]
pub struct AuthFailure {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl AuthFailure {
    /// Failure that came back as an HTTP response with the given status
    pub fn with_status(status: u16, message: Option<String>) -> Self {
        Self {
            status: Some(status),
            message: non_empty(message),
        }
    }

    /// Failure that never produced a response (network, request building)
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: non_empty(Some(message.into())),
        }
    }

    /// Message to show when a failure carries no text of its own
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }

    fn describe(&self) -> String {
        match (self.status, self.message.as_deref()) {
            (Some(status), Some(msg)) => format!("HTTP {status}: {msg}"),
            (Some(status), None) => format!("HTTP {status}"),
            (None, Some(msg)) => msg.to_string(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}
