use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::types::{
    AuthFailure, UpdatePasswordRequest, CHANGE_PASSWORD_FAILED, CURRENT_PASSWORD_INCORRECT,
    FIELDS_REQUIRED, PASSWORDS_DO_NOT_MATCH, PASSWORD_CHANGED,
};
use crate::update_field;
use crate::{Effect, ToastCmd};

use super::auth;

/// Handle change-password form events
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::Opened | FormEvent::Closed => {
            model.form.reset();
            render()
        }
        FormEvent::CurrentPasswordChanged(value) => {
            update_field!(model.form.current_password, value)
        }
        FormEvent::NewPasswordChanged(value) => update_field!(model.form.new_password, value),
        FormEvent::ConfirmNewPasswordChanged(value) => {
            update_field!(model.form.confirm_new_password, value)
        }
        FormEvent::Submit => submit(model),
    }
}

fn submit(model: &mut Model) -> Command<Effect, Event> {
    if model.auth.is_loading {
        log::debug!("change password already in flight, submit ignored");
        return Command::done();
    }

    model.form.form_error = None;
    model.auth.clear_error();

    if !model.form.passwords_match() {
        return model.set_form_error_and_render(PASSWORDS_DO_NOT_MATCH);
    }

    let request = UpdatePasswordRequest {
        current_password: model.form.current_password.clone(),
        password: model.form.new_password.clone(),
    };
    if let Err(e) = request.validate() {
        log::debug!("change password form incomplete: {e:?}");
        return model.set_form_error_and_render(FIELDS_REQUIRED);
    }

    auth::change_password(request, model)
}

/// Turn the outcome of a change-password request into form feedback.
/// Entered values stay in place either way.
pub(super) fn handle_change_password_result(
    result: Result<(), AuthFailure>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(()) => {
            model.form.form_error = None;
            Command::all([ToastCmd::success(PASSWORD_CHANGED), render()])
        }
        Err(failure) => {
            log::error!("change password failed: {failure}");
            let message = match failure.status {
                Some(400) => CURRENT_PASSWORD_INCORRECT,
                _ => failure.message_or(CHANGE_PASSWORD_FAILED),
            };
            model.set_form_error_and_render(message)
        }
    }
}
