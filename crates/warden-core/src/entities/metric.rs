use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{MetricCategory, ReportingPeriod};

/// A compliance target and the value actually achieved over a period.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ComplianceMetric {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: MetricCategory,
    pub target: f64,
    pub actual: f64,
    pub unit: String,
    pub period: ReportingPeriod,
    /// Owning guard. May reference a user that no longer exists.
    pub guard_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ComplianceMetric {
    /// Whether this metric belongs to the given guard.
    #[must_use]
    pub fn is_owned_by(&self, guard_id: &str) -> bool {
        self.guard_id.as_deref() == Some(guard_id)
    }
}
