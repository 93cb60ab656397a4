use serde::{Deserialize, Serialize};

pub const PASSWORDS_DO_NOT_MATCH: &str = "New passwords do not match";
pub const FIELDS_REQUIRED: &str = "Please fill in all fields";
pub const CURRENT_PASSWORD_INCORRECT: &str = "Current password is incorrect";
pub const CHANGE_PASSWORD_FAILED: &str = "Error changing password";
pub const PASSWORD_CHANGED: &str = "Password changed successfully";

/// Input state of the change-password form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
    /// Local validation or display error, shown instead of the store error
    pub form_error: Option<String>,
}

impl ChangePasswordForm {
    pub fn passwords_match(&self) -> bool {
        self.new_password == self.confirm_new_password
    }

    /// Drop entered values and any error
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
