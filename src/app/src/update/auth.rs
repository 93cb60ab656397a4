use crux_core::{render::render, Command};

use crate::auth_post;
use crate::events::{AuthEvent, Event};
use crate::http_helpers::UPDATE_PASSWORD_ENDPOINT;
use crate::model::Model;
use crate::types::{UpdatePasswordRequest, CHANGE_PASSWORD_FAILED};
use crate::update_field;
use crate::Effect;

use super::form;

/// Handle authentication-related events
pub fn handle(event: AuthEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AuthEvent::SessionStarted { token } => update_field!(model.auth.auth_token, Some(token)),

        AuthEvent::SessionEnded => {
            model.auth.invalidate_session();
            render()
        }

        AuthEvent::ChangePassword {
            current_password,
            new_password,
        } => change_password(
            UpdatePasswordRequest {
                current_password,
                password: new_password,
            },
            model,
        ),

        AuthEvent::ClearError => update_field!(model.auth.error, None),

        AuthEvent::ChangePasswordResponse(result) => {
            match &result {
                Ok(()) => model.auth.stop_loading(),
                Err(failure) => model
                    .auth
                    .set_error(failure.message_or(CHANGE_PASSWORD_FAILED).to_string()),
            }
            form::handle_change_password_result(result, model)
        }
    }
}

/// Ask the authentication service to replace the current password.
/// Only one request may be in flight.
pub(super) fn change_password(
    request: UpdatePasswordRequest,
    model: &mut Model,
) -> Command<Effect, Event> {
    if model.auth.is_loading {
        log::debug!("change password already in flight, request ignored");
        return Command::done();
    }
    auth_post!(Auth, AuthEvent, model, UPDATE_PASSWORD_ENDPOINT, ChangePasswordResponse, "Change password",
        body_json: &request
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AuthState;
    use crate::types::AuthFailure;

    #[test]
    fn change_password_sets_loading() {
        let mut model = Model {
            auth: AuthState {
                auth_token: Some("token".to_string()),
                error: Some("stale".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let _ = handle(
            AuthEvent::ChangePassword {
                current_password: "old".to_string(),
                new_password: "new".to_string(),
            },
            &mut model,
        );

        assert!(model.auth.is_loading);
        assert_eq!(model.auth.error, None);
    }

    #[test]
    fn change_password_while_loading_sends_nothing() {
        let mut model = Model {
            auth: AuthState {
                auth_token: Some("token".to_string()),
                is_loading: true,
                error: Some("stale".to_string()),
            },
            ..Default::default()
        };

        let mut cmd = handle(
            AuthEvent::ChangePassword {
                current_password: "old".to_string(),
                new_password: "new".to_string(),
            },
            &mut model,
        );

        assert!(cmd.effects().next().is_none());
        assert!(cmd.events().next().is_none());
        assert_eq!(model.auth.error.as_deref(), Some("stale"));
    }

    #[test]
    fn failed_response_records_store_error() {
        let mut model = Model {
            auth: AuthState {
                is_loading: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let _ = handle(
            AuthEvent::ChangePasswordResponse(Err(AuthFailure::with_status(
                400,
                Some("current password is not correct".to_string()),
            ))),
            &mut model,
        );

        assert!(!model.auth.is_loading);
        assert_eq!(
            model.auth.error.as_deref(),
            Some("current password is not correct")
        );
    }

    #[test]
    fn failure_without_message_records_fallback() {
        let mut model = Model::default();

        let _ = handle(
            AuthEvent::ChangePasswordResponse(Err(AuthFailure::default())),
            &mut model,
        );

        assert_eq!(model.auth.error.as_deref(), Some(CHANGE_PASSWORD_FAILED));
    }

    #[test]
    fn session_end_drops_token() {
        let mut model = Model {
            auth: AuthState {
                auth_token: Some("token".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let _ = handle(AuthEvent::SessionEnded, &mut model);

        assert!(!model.auth.is_authenticated());
    }

    #[test]
    fn clear_error_resets_store_error() {
        let mut model = Model {
            auth: AuthState {
                error: Some("boom".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let _ = handle(AuthEvent::ClearError, &mut model);

        assert_eq!(model.auth.error, None);
    }
}
