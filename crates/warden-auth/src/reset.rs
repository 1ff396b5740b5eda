//! Validated password reset against an injected user directory.

use warden_core::entities::User;
use warden_core::enums::Role;
use warden_core::responses::ResetReceipt;

use crate::error::{AuthError, ResetError};
use crate::policy::can_reset_password;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The user collection a reset commits into.
pub trait UserDirectory {
    fn contains_user(&self, user_id: &str) -> bool;

    /// Replace the stored credential of `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the credential cannot be hashed.
    fn set_credential(&mut self, user_id: &str, plaintext: &str) -> Result<(), AuthError>;

    /// # Errors
    ///
    /// Returns `AuthError` if the stored credential is unreadable.
    fn verify_credential(&self, user_id: &str, plaintext: &str) -> Result<bool, AuthError>;
}

/// Reset `target`'s password on behalf of `actor`.
///
/// Checks run in order and the first failure is returned:
/// administrator target, authorization, length, confirmation, existence.
///
/// # Errors
///
/// Returns the matching [`ResetError`]; `ResetError::Credential` if hashing
/// fails at commit time.
pub fn reset_password<D: UserDirectory + ?Sized>(
    directory: &mut D,
    actor: Option<&User>,
    target: Option<&User>,
    new_password: &str,
    confirm_password: &str,
) -> Result<ResetReceipt, ResetError> {
    if target.is_some_and(|t| t.role == Role::Administrator) {
        tracing::warn!(
            actor = actor.map(|a| a.id.as_str()),
            target = target.map(|t| t.id.as_str()),
            "password reset refused: administrator target"
        );
        return Err(ResetError::ForbiddenTarget);
    }

    let target = match target {
        Some(target) if can_reset_password(actor, Some(target)) => target,
        _ => {
            tracing::warn!(
                actor = actor.map(|a| a.id.as_str()),
                target = target.map(|t| t.id.as_str()),
                "password reset refused: actor lacks permission"
            );
            return Err(ResetError::Unauthorized);
        }
    };

    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ResetError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if new_password != confirm_password {
        return Err(ResetError::PasswordMismatch);
    }

    if !directory.contains_user(&target.id) {
        return Err(ResetError::UserNotFound(target.id.clone()));
    }

    directory.set_credential(&target.id, new_password)?;
    tracing::info!(
        actor = actor.map(|a| a.id.as_str()),
        target = %target.id,
        "password reset committed"
    );

    Ok(ResetReceipt::for_user(target))
}
