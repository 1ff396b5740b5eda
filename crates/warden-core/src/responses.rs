//! Response types returned by the password-reset operations and printed by
//! the `warden` binary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::User;

/// Confirmation payload of a committed password reset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResetReceipt {
    pub user_id: String,
    pub display_name: String,
    /// Message for the notification surface.
    pub message: String,
}

impl ResetReceipt {
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        let display_name = user.full_name();
        Self {
            user_id: user.id.clone(),
            message: format!("Password updated for {display_name}"),
            display_name,
        }
    }
}

/// Response from `warden password check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccessCheckResponse {
    pub actor_id: String,
    pub target_id: String,
    pub allowed: bool,
}

/// Response from `warden users list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: u32,
}
