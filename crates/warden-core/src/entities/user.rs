use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A user account as seen by the administration screens.
///
/// Credentials are not part of the record; they live behind the hashing
/// credential store in `warden-auth`, keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Display name used in confirmations and dashboard rows.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }

    #[must_use]
    pub fn is_guard(&self) -> bool {
        self.role == Role::ResourceGuard
    }
}
