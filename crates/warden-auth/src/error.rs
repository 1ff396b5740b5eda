use thiserror::Error;

/// Failures of the credential hashing boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("failed to hash password: {0}")]
    Hashing(String),

    #[error("invalid password hash format: {0}")]
    InvalidHash(String),

    #[error("invalid argon2 parameters: {0}")]
    InvalidParams(String),
}

/// Why a password reset was refused. Messages are shown to the acting user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResetError {
    #[error("Administrator passwords can only be changed by their owner")]
    ForbiddenTarget,

    #[error("You do not have permission to reset this user's password")]
    Unauthorized,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("User {0} no longer exists")]
    UserNotFound(String),

    #[error("Could not store the new password: {0}")]
    Credential(#[from] AuthError),
}
