use serde::{Deserialize, Serialize};

use crate::types::AuthFailure;

/// Authentication events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// The shell hands over the token of an authenticated session
    SessionStarted {
        token: String,
    },
    SessionEnded,
    ChangePassword {
        current_password: String,
        new_password: String,
    },
    ClearError,
    #[serde(skip)]
    ChangePasswordResponse(Result<(), AuthFailure>),
}

/// Change-password form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The page was mounted
    Opened,
    /// The user navigated away
    Closed,
    CurrentPasswordChanged(String),
    NewPasswordChanged(String),
    ConfirmNewPasswordChanged(String),
    Submit,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Auth(AuthEvent),
    Form(FormEvent),
}
