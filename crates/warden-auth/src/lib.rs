//! # warden-auth
//!
//! Password administration for Warden.
//!
//! Provides the role-based rule deciding who may reset whose password
//! ([`policy`]), an Argon2id credential boundary that never keeps plaintext
//! ([`credentials`]), the validated reset operation against an injected user
//! directory ([`reset`]), and the form state wrapped around it ([`form`]).

pub mod credentials;
pub mod error;
pub mod form;
pub mod policy;
pub mod reset;

pub use credentials::{Argon2Credentials, CredentialStore};
pub use error::{AuthError, ResetError};
pub use form::PasswordResetForm;
pub use policy::{can_reset_password, resettable_targets};
pub use reset::{MIN_PASSWORD_LENGTH, UserDirectory, reset_password};
