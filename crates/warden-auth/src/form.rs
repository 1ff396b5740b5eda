use std::fmt;

use warden_core::entities::User;
use warden_core::responses::ResetReceipt;

use crate::error::ResetError;
use crate::reset::{UserDirectory, reset_password};

/// Input state of the password-reset dialog.
///
/// Holds the two password inputs and the single inline error message.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordResetForm {
    pub new_password: String,
    pub confirm_password: String,
    pub error: Option<String>,
}

impl PasswordResetForm {
    #[must_use]
    pub fn new(new_password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
            error: None,
        }
    }

    /// Run the reset with the current inputs.
    ///
    /// On success the inputs and the error are cleared. On failure the inputs
    /// are kept and `error` holds the message to show inline.
    ///
    /// # Errors
    ///
    /// Returns the [`ResetError`] that was also rendered into `error`.
    pub fn submit<D: UserDirectory + ?Sized>(
        &mut self,
        directory: &mut D,
        actor: Option<&User>,
        target: Option<&User>,
    ) -> Result<ResetReceipt, ResetError> {
        match reset_password(
            directory,
            actor,
            target,
            &self.new_password,
            &self.confirm_password,
        ) {
            Ok(receipt) => {
                self.clear();
                Ok(receipt)
            }
            Err(error) => {
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    pub fn clear(&mut self) {
        self.new_password.clear();
        self.confirm_password.clear();
        self.error = None;
    }
}

impl fmt::Debug for PasswordResetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordResetForm")
            .field("new_password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("error", &self.error)
            .finish()
    }
}
