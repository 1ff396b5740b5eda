use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityStatus;

/// A field activity (patrol, survey, report) assigned to a guard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub status: ActivityStatus,
    pub guard_id: Option<String>,
}

impl Activity {
    #[must_use]
    pub fn is_owned_by(&self, guard_id: &str) -> bool {
        self.guard_id.as_deref() == Some(guard_id)
    }
}
