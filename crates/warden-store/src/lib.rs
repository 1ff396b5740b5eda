//! # warden-store
//!
//! In-memory data source for Warden.
//!
//! Holds the user directory, compliance metrics and activities the
//! administration screens read from. Users' credentials live behind an
//! injected [`CredentialStore`]; the store itself never sees a stored hash.
//! Nothing is persisted: the store is seeded from the built-in fixture or a
//! JSON fixture file each time it is built.

pub mod error;
pub mod fixture;

use std::fmt;
use std::path::Path;

use warden_auth::{AuthError, CredentialStore, UserDirectory};
use warden_core::entities::{Activity, ComplianceMetric, User};

use crate::error::StoreError;
use crate::fixture::Fixture;

pub use fixture::SeedUser;

/// Users, metrics and activities shared by the password and dashboard screens.
pub struct MemoryStore {
    users: Vec<User>,
    metrics: Vec<ComplianceMetric>,
    activities: Vec<Activity>,
    credentials: Box<dyn CredentialStore>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(credentials: Box<dyn CredentialStore>) -> Self {
        Self {
            users: Vec::new(),
            metrics: Vec::new(),
            activities: Vec::new(),
            credentials,
        }
    }

    /// Create a store seeded with the built-in demo fixture.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Credential` if an initial password cannot be hashed.
    pub fn seeded(credentials: Box<dyn CredentialStore>) -> Result<Self, StoreError> {
        Self::from_fixture(fixture::builtin(), credentials)
    }

    /// Create a store from a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` or `StoreError::Parse` if the file cannot be
    /// read or decoded, and the errors of [`Self::from_fixture`].
    pub fn from_fixture_path(
        path: &Path,
        credentials: Box<dyn CredentialStore>,
    ) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture: Fixture = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), ?fixture, "loaded fixture");
        Self::from_fixture(fixture, credentials)
    }

    /// Create a store from an already-decoded fixture.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateUser` if two users share an id, or
    /// `StoreError::Credential` if an initial password cannot be hashed.
    pub fn from_fixture(
        fixture: Fixture,
        credentials: Box<dyn CredentialStore>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::new(credentials);
        for seed in fixture.users {
            store.insert_user(seed.user, &seed.initial_password)?;
        }
        store.metrics = fixture.metrics;
        store.activities = fixture.activities;
        tracing::debug!(
            users = store.users.len(),
            metrics = store.metrics.len(),
            activities = store.activities.len(),
            "store seeded"
        );
        Ok(store)
    }

    /// Add a user with an initial password.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateUser` if the id is taken, or
    /// `StoreError::Credential` if the password cannot be hashed.
    pub fn insert_user(&mut self, user: User, initial_password: &str) -> Result<(), StoreError> {
        if self.user(&user.id).is_some() {
            return Err(StoreError::DuplicateUser(user.id));
        }
        self.credentials.set(&user.id, initial_password)?;
        self.users.push(user);
        Ok(())
    }

    /// Remove a user, as an external administrator deleting an account would.
    pub fn remove_user(&mut self, id: &str) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn metrics(&self) -> &[ComplianceMetric] {
        &self.metrics
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }
}

impl UserDirectory for MemoryStore {
    fn contains_user(&self, user_id: &str) -> bool {
        self.user(user_id).is_some()
    }

    fn set_credential(&mut self, user_id: &str, plaintext: &str) -> Result<(), AuthError> {
        self.credentials.set(user_id, plaintext)
    }

    fn verify_credential(&self, user_id: &str, plaintext: &str) -> Result<bool, AuthError> {
        if !self.contains_user(user_id) {
            return Ok(false);
        }
        self.credentials.verify(user_id, plaintext)
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("users", &self.users.len())
            .field("metrics", &self.metrics.len())
            .field("activities", &self.activities.len())
            .finish_non_exhaustive()
    }
}
