//! # warden-compliance
//!
//! Compliance dashboard logic for Warden.
//!
//! Everything here is pure: given a viewer, a filter and the source lists,
//! the same inputs always produce the same view. A resource guard only ever
//! sees their own metrics and activities, whatever guard selection is passed.

pub mod dashboard;
pub mod filter;
pub mod percentage;
pub mod scope;
pub mod stats;

pub use dashboard::{DashboardView, MetricRow};
pub use filter::{MetricFilter, filter_metrics, scope_activities};
pub use percentage::{compliance_percentage, metric_percentage};
pub use scope::{GuardSelection, effective_guard, guard_options};
pub use stats::{CategoryBreakdown, DashboardStats, category_breakdown};
pub use warden_core::enums::ComplianceLevel;
