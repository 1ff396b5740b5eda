//! Store error types for warden-store.

use std::path::PathBuf;

use thiserror::Error;
use warden_auth::AuthError;

/// Errors from seeding or mutating the in-memory store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The fixture file could not be read.
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not valid JSON for the expected shape.
    #[error("Failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two users share an id.
    #[error("Duplicate user id: {0}")]
    DuplicateUser(String),

    /// An initial credential could not be hashed.
    #[error("Credential error: {0}")]
    Credential(#[from] AuthError),
}
