//! Cross-cutting error types for Warden.
//!
//! Domain-specific errors (e.g., `ResetError`, `StoreError`) are defined in
//! their respective crates. The `warden` binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Warden crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name any variant of a closed enum.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}
