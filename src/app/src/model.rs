use serde::{Deserialize, Serialize};

use crate::types::*;

/// Shared authentication state.
///
/// The change-password form only reads `is_loading`/`error` and asks for the
/// error to be cleared; the request lifecycle owns both fields.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthState {
    /// Bearer token of the current session
    pub auth_token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Start a request (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn stop_loading(&mut self) {
        self.is_loading = false;
    }

    /// Record a failed request and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error = Some(error);
    }

    /// Clear the error message without affecting the loading state.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn invalidate_session(&mut self) {
        self.auth_token = None;
    }
}

/// Application Model - the complete state
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub auth: AuthState,
    pub form: ChangePasswordForm,
}

impl Model {
    /// Set the form error and return a render command
    pub fn set_form_error_and_render(
        &mut self,
        error: impl Into<String>,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.form.form_error = Some(error.into());
        crux_core::render::render()
    }
}
