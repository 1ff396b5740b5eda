//! Entity structs for the Warden domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! fixtures and schema validation.

mod activity;
mod metric;
mod user;

pub use activity::Activity;
pub use metric::ComplianceMetric;
pub use user::User;
