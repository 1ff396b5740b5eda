//! Guard selection and the self-scoping rule for resource guards.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use warden_core::entities::User;
use warden_core::enums::Role;

/// Which guard's records the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum GuardSelection {
    All,
    Guard(String),
}

impl GuardSelection {
    /// Whether a record owned by `guard_id` passes this selection.
    #[must_use]
    pub fn admits(&self, guard_id: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Guard(id) => guard_id == Some(id.as_str()),
        }
    }
}

impl FromStr for GuardSelection {
    type Err = Infallible;

    /// `all` and the Spanish `todos` (any case) select every guard; anything
    /// else is taken as a user id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("todos") {
            Ok(Self::All)
        } else {
            Ok(Self::Guard(trimmed.to_string()))
        }
    }
}

impl From<String> for GuardSelection {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(selection) => selection,
            Err(never) => match never {},
        }
    }
}

impl From<GuardSelection> for String {
    fn from(value: GuardSelection) -> Self {
        value.to_string()
    }
}

impl fmt::Display for GuardSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Guard(id) => f.write_str(id),
        }
    }
}

/// The selection actually applied for `viewer`.
///
/// A resource guard is always pinned to their own id.
#[must_use]
pub fn effective_guard(viewer: &User, requested: &GuardSelection) -> GuardSelection {
    match viewer.role {
        Role::ResourceGuard => GuardSelection::Guard(viewer.id.clone()),
        Role::Administrator | Role::Coordinator => requested.clone(),
    }
}

/// Guards offered in the dashboard's guard selector for `viewer`.
pub fn guard_options<'a>(viewer: &User, users: &'a [User]) -> Vec<&'a User> {
    match viewer.role {
        Role::ResourceGuard => users.iter().filter(|u| u.id == viewer.id).collect(),
        Role::Administrator | Role::Coordinator => users.iter().filter(|u| u.is_guard()).collect(),
    }
}
