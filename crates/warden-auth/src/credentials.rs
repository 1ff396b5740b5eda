//! Password hashing and verification using Argon2id.
//!
//! Only PHC-formatted hash strings are stored; plaintext passwords pass
//! through [`CredentialStore::set`] and [`CredentialStore::verify`] and are
//! never retained.

use std::collections::HashMap;
use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AuthError;

/// Credential storage keyed by user id.
pub trait CredentialStore {
    /// Hash `plaintext` and store it for `user_id`, replacing any previous credential.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Hashing` if hashing fails.
    fn set(&mut self, user_id: &str, plaintext: &str) -> Result<(), AuthError>;

    /// Check `plaintext` against the stored credential. Unknown users never verify.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHash` if the stored hash cannot be parsed.
    fn verify(&self, user_id: &str, plaintext: &str) -> Result<bool, AuthError>;

    fn contains(&self, user_id: &str) -> bool;
}

/// In-memory Argon2id credential store.
pub struct Argon2Credentials {
    params: Params,
    hashes: HashMap<String, String>,
}

impl Argon2Credentials {
    /// Store with the argon2 crate's default (OWASP) parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: Params::default(),
            hashes: HashMap::new(),
        }
    }

    /// Store with explicit cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidParams` if argon2 rejects the combination.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::InvalidParams(e.to_string()))?;
        Ok(Self {
            params,
            hashes: HashMap::new(),
        })
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Credentials {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Argon2Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argon2Credentials")
            .field("params", &self.params)
            .field("users", &self.hashes.len())
            .finish()
    }
}

impl CredentialStore for Argon2Credentials {
    fn set(&mut self, user_id: &str, plaintext: &str) -> Result<(), AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .to_string();
        self.hashes.insert(user_id.to_string(), hash);
        Ok(())
    }

    fn verify(&self, user_id: &str, plaintext: &str) -> Result<bool, AuthError> {
        let Some(stored) = self.hashes.get(user_id) else {
            return Ok(false);
        };
        let parsed =
            PasswordHash::new(stored).map_err(|e| AuthError::InvalidHash(e.to_string()))?;
        Ok(self
            .hasher()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }

    fn contains(&self, user_id: &str) -> bool {
        self.hashes.contains_key(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal cost so tests stay fast.
    fn cheap_store() -> Argon2Credentials {
        Argon2Credentials::with_params(8, 1, 1).unwrap()
    }

    #[test]
    fn set_then_verify() {
        let mut store = cheap_store();
        store.set("1", "correct-horse").unwrap();

        assert!(store.contains("1"));
        assert!(store.verify("1", "correct-horse").unwrap());
        assert!(!store.verify("1", "wrong-horse").unwrap());
    }

    #[test]
    fn stored_value_is_a_phc_hash() {
        let mut store = cheap_store();
        store.set("1", "correct-horse").unwrap();

        let stored = store.hashes.get("1").unwrap();
        assert!(stored.starts_with("$argon2id$"));
        assert!(!stored.contains("correct-horse"));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let mut store = cheap_store();
        store.set("1", "same-password").unwrap();
        store.set("2", "same-password").unwrap();

        assert_ne!(store.hashes.get("1"), store.hashes.get("2"));
        assert!(store.verify("2", "same-password").unwrap());
    }

    #[test]
    fn unknown_user_does_not_verify() {
        let store = cheap_store();
        assert!(!store.contains("99"));
        assert!(!store.verify("99", "anything").unwrap());
    }

    #[test]
    fn corrupt_hash_is_an_error() {
        let mut store = cheap_store();
        store.hashes.insert("1".into(), "not-a-valid-hash".into());
        assert!(matches!(
            store.verify("1", "x"),
            Err(AuthError::InvalidHash(_))
        ));
    }

    #[test]
    fn zero_iterations_rejected() {
        assert!(matches!(
            Argon2Credentials::with_params(8, 0, 1),
            Err(AuthError::InvalidParams(_))
        ));
    }

    #[test]
    fn debug_does_not_leak_hashes() {
        let mut store = cheap_store();
        store.set("1", "secret").unwrap();
        let rendered = format!("{store:?}");
        assert!(!rendered.contains("$argon2id$"));
        assert!(rendered.contains("users: 1"));
    }
}
