//! Roles, reporting periods, metric categories and status enums for Warden.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Every enum is closed: `FromStr` rejects unknown strings with
//! [`CoreError::UnknownVariant`] instead of mapping them to a default.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

fn unknown(kind: &'static str, value: &str) -> CoreError {
    CoreError::UnknownVariant {
        kind,
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of a user account.
///
/// ```text
/// administrator > coordinator > resource_guard
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Coordinator,
    ResourceGuard,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Administrator, Self::Coordinator, Self::ResourceGuard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Coordinator => "coordinator",
            Self::ResourceGuard => "resource_guard",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Coordinator => "Coordinator",
            Self::ResourceGuard => "Resource Guard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "administrator" => Ok(Self::Administrator),
            "coordinator" => Ok(Self::Coordinator),
            "resource_guard" => Ok(Self::ResourceGuard),
            _ => Err(unknown("role", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// ReportingPeriod
// ---------------------------------------------------------------------------

/// Reporting period a compliance metric is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportingPeriod {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl ReportingPeriod {
    pub const ALL: [Self; 5] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportingPeriod {
    type Err = CoreError;

    /// Accepts the English names and the Spanish labels used by field staff.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "diario" => Ok(Self::Daily),
            "weekly" | "semanal" => Ok(Self::Weekly),
            "monthly" | "mensual" => Ok(Self::Monthly),
            "quarterly" | "trimestral" => Ok(Self::Quarterly),
            "yearly" | "anual" => Ok(Self::Yearly),
            _ => Err(unknown("reporting period", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// MetricCategory
// ---------------------------------------------------------------------------

/// What a compliance metric measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    Activities,
    Time,
    Quality,
    Objectives,
}

impl MetricCategory {
    pub const ALL: [Self; 4] = [Self::Activities, Self::Time, Self::Quality, Self::Objectives];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activities => "activities",
            Self::Time => "time",
            Self::Quality => "quality",
            Self::Objectives => "objectives",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "activities" => Ok(Self::Activities),
            "time" => Ok(Self::Time),
            "quality" => Ok(Self::Quality),
            "objectives" => Ok(Self::Objectives),
            _ => Err(unknown("metric category", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// ActivityStatus
// ---------------------------------------------------------------------------

/// Status of a field activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Completed,
    InProgress,
    Scheduled,
}

impl ActivityStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
            Self::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "completed" => Ok(Self::Completed),
            "in_progress" => Ok(Self::InProgress),
            "scheduled" => Ok(Self::Scheduled),
            _ => Err(unknown("activity status", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// ComplianceLevel
// ---------------------------------------------------------------------------

/// Display bucket for a compliance percentage.
///
/// ```text
/// >= 90 good, >= 75 warning, >= 60 caution, otherwise critical
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceLevel {
    Good,
    Warning,
    Caution,
    Critical,
}

impl ComplianceLevel {
    pub const GOOD_THRESHOLD: f64 = 90.0;
    pub const WARNING_THRESHOLD: f64 = 75.0;
    pub const CAUTION_THRESHOLD: f64 = 60.0;

    /// Bucket a percentage. NaN falls through to `Critical`.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::GOOD_THRESHOLD {
            Self::Good
        } else if percentage >= Self::WARNING_THRESHOLD {
            Self::Warning
        } else if percentage >= Self::CAUTION_THRESHOLD {
            Self::Caution
        } else {
            Self::Critical
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn role_roundtrips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_an_error() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownVariant {
                kind: "role",
                value: "superuser".into()
            }
        );
    }

    #[test]
    fn role_parse_accepts_kebab_and_case() {
        assert_eq!("Resource-Guard".parse::<Role>().unwrap(), Role::ResourceGuard);
    }

    #[test]
    fn period_roundtrips_through_str() {
        for period in ReportingPeriod::ALL {
            assert_eq!(period.as_str().parse::<ReportingPeriod>().unwrap(), period);
        }
        for category in MetricCategory::ALL {
            assert_eq!(category.as_str().parse::<MetricCategory>().unwrap(), category);
        }
    }

    #[rstest]
    #[case("monthly", ReportingPeriod::Monthly)]
    #[case("Mensual", ReportingPeriod::Monthly)]
    #[case("diario", ReportingPeriod::Daily)]
    #[case("semanal", ReportingPeriod::Weekly)]
    #[case("trimestral", ReportingPeriod::Quarterly)]
    #[case("anual", ReportingPeriod::Yearly)]
    fn period_parses_english_and_spanish(#[case] input: &str, #[case] expected: ReportingPeriod) {
        assert_eq!(input.parse::<ReportingPeriod>().unwrap(), expected);
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ActivityStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let json = serde_json::to_string(&Role::ResourceGuard).unwrap();
        assert_eq!(json, "\"resource_guard\"");
    }

    #[rstest]
    #[case(100.0, ComplianceLevel::Good)]
    #[case(90.0, ComplianceLevel::Good)]
    #[case(89.99, ComplianceLevel::Warning)]
    #[case(75.0, ComplianceLevel::Warning)]
    #[case(74.9, ComplianceLevel::Caution)]
    #[case(60.0, ComplianceLevel::Caution)]
    #[case(59.9, ComplianceLevel::Critical)]
    #[case(0.0, ComplianceLevel::Critical)]
    fn compliance_level_thresholds(#[case] percentage: f64, #[case] expected: ComplianceLevel) {
        assert_eq!(ComplianceLevel::from_percentage(percentage), expected);
    }
}
