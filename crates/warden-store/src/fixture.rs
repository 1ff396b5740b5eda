//! Seed data for the in-memory store.
//!
//! A fixture is plain JSON. Initial passwords are only carried until the
//! store hashes them on load.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use warden_core::entities::{Activity, ComplianceMetric, User};
use warden_core::enums::{ActivityStatus, MetricCategory, ReportingPeriod, Role};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub metrics: Vec<ComplianceMetric>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl fmt::Debug for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("users", &self.users.len())
            .field("metrics", &self.metrics.len())
            .field("activities", &self.activities.len())
            .finish()
    }
}

/// A user record plus the password it starts with.
#[derive(Clone, Serialize, Deserialize)]
pub struct SeedUser {
    #[serde(flatten)]
    pub user: User,
    pub initial_password: String,
}

fn seed_user(id: &str, name: &str, last_name: &str, role: Role, password: &str) -> SeedUser {
    SeedUser {
        user: User {
            id: id.into(),
            name: name.into(),
            last_name: last_name.into(),
            email: format!(
                "{}.{}@parques.example",
                name.to_lowercase(),
                last_name.to_lowercase()
            ),
            role,
        },
        initial_password: password.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn metric(
    id: &str,
    name: &str,
    category: MetricCategory,
    target: f64,
    actual: f64,
    unit: &str,
    period: ReportingPeriod,
    guard_id: Option<&str>,
) -> ComplianceMetric {
    let (start_date, end_date) = period_window(period);
    ComplianceMetric {
        id: id.into(),
        name: name.into(),
        description: format!("{name} ({period})"),
        category,
        target,
        actual,
        unit: unit.into(),
        period,
        guard_id: guard_id.map(String::from),
        start_date,
        end_date,
    }
}

fn period_window(period: ReportingPeriod) -> (NaiveDate, NaiveDate) {
    let (start, end) = match period {
        ReportingPeriod::Daily => ((2024, 3, 15), (2024, 3, 15)),
        ReportingPeriod::Weekly => ((2024, 3, 11), (2024, 3, 17)),
        ReportingPeriod::Monthly => ((2024, 3, 1), (2024, 3, 31)),
        ReportingPeriod::Quarterly => ((2024, 1, 1), (2024, 3, 31)),
        ReportingPeriod::Yearly => ((2024, 1, 1), (2024, 12, 31)),
    };
    (ymd(start), ymd(end))
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn activity(id: &str, status: ActivityStatus, guard_id: Option<&str>) -> Activity {
    Activity {
        id: id.into(),
        status,
        guard_id: guard_id.map(String::from),
    }
}

/// The demo park: two guards, one coordinator, one administrator.
///
/// Metric `m-8` points at guard `7`, who does not exist.
#[must_use]
pub fn builtin() -> Fixture {
    use ActivityStatus::{Completed, InProgress, Scheduled};
    use MetricCategory::{Activities, Objectives, Quality, Time};
    use ReportingPeriod::{Daily, Monthly, Quarterly, Weekly, Yearly};

    Fixture {
        users: vec![
            seed_user("1", "Carlos", "Vega", Role::ResourceGuard, "guardia-1"),
            seed_user("2", "Maria", "Solis", Role::ResourceGuard, "guardia-2"),
            seed_user("3", "Lucia", "Mendez", Role::Coordinator, "coordina-3"),
            seed_user("4", "Jorge", "Araya", Role::Administrator, "admin-4"),
        ],
        metrics: vec![
            metric("m-1", "Patrols completed", Activities, 30.0, 28.0, "patrols", Monthly, Some("1")),
            metric("m-2", "Reports filed on time", Time, 95.0, 92.0, "%", Monthly, Some("2")),
            metric("m-3", "Wildlife sightings logged", Quality, 15.0, 18.0, "records", Monthly, Some("1")),
            metric("m-4", "Checkpoints visited", Activities, 4.0, 3.0, "checkpoints", Daily, Some("1")),
            metric("m-5", "Trail inspections", Objectives, 5.0, 3.0, "trails", Weekly, Some("2")),
            metric("m-6", "Trees planted", Objectives, 500.0, 410.0, "trees", Quarterly, Some("2")),
            metric("m-7", "Training hours", Time, 40.0, 22.0, "hours", Yearly, Some("1")),
            metric("m-8", "Boundary surveyed", Quality, 10.0, 9.0, "km", Monthly, Some("7")),
        ],
        activities: vec![
            activity("act-1", Completed, Some("1")),
            activity("act-2", Completed, Some("1")),
            activity("act-3", InProgress, Some("1")),
            activity("act-4", Scheduled, Some("1")),
            activity("act-5", Completed, Some("2")),
            activity("act-6", InProgress, Some("2")),
            activity("act-7", Scheduled, Some("2")),
            activity("act-8", Scheduled, None),
        ],
    }
}
