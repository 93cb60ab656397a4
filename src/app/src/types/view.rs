use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::strength::PasswordStrength;

pub const SUBMIT_LABEL: &str = "Change Password";
pub const SUBMIT_LABEL_LOADING: &str = "Changing...";

/// What the shell renders for the change-password page.
/// The session token never leaves the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
    /// The single error line: form error first, store error otherwise
    pub error_message: Option<String>,
    pub is_loading: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub password_strength: PasswordStrength,
    pub is_authenticated: bool,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let form = &model.form;
        let is_loading = model.auth.is_loading;

        Self {
            current_password: form.current_password.clone(),
            new_password: form.new_password.clone(),
            confirm_new_password: form.confirm_new_password.clone(),
            error_message: form.form_error.clone().or_else(|| model.auth.error.clone()),
            is_loading,
            submit_enabled: !is_loading,
            submit_label: if is_loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            }
            .to_string(),
            password_strength: PasswordStrength::evaluate(&form.new_password),
            is_authenticated: model.auth.is_authenticated(),
        }
    }
}
