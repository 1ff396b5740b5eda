//! The composed dashboard view: effective filter, headline stats, category
//! breakdown and one display row per metric.

use serde::{Deserialize, Serialize};
use warden_core::entities::{Activity, ComplianceMetric, User};
use warden_core::enums::{ComplianceLevel, MetricCategory, ReportingPeriod};

use crate::filter::{MetricFilter, filter_metrics, scope_activities};
use crate::percentage::{metric_percentage, round_one};
use crate::scope::GuardSelection;
use crate::stats::{CategoryBreakdown, DashboardStats, category_breakdown};

/// One metric as displayed in the compliance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub id: String,
    pub name: String,
    pub category: MetricCategory,
    pub actual: f64,
    pub target: f64,
    pub unit: String,
    pub percentage: f64,
    pub level: ComplianceLevel,
    /// `None` when the metric has no guard or references an unknown user.
    pub guard_name: Option<String>,
}

impl MetricRow {
    fn new(metric: &ComplianceMetric, users: &[User]) -> Self {
        let percentage = metric_percentage(metric);
        let guard_name = metric
            .guard_id
            .as_deref()
            .and_then(|id| users.iter().find(|u| u.id == id))
            .map(User::full_name);

        Self {
            id: metric.id.clone(),
            name: metric.name.clone(),
            category: metric.category,
            actual: metric.actual,
            target: metric.target,
            unit: metric.unit.clone(),
            percentage: round_one(percentage),
            level: ComplianceLevel::from_percentage(percentage),
            guard_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub viewer_id: String,
    pub period: ReportingPeriod,
    /// Guard selection after the viewer's scoping was applied.
    pub guard: GuardSelection,
    pub stats: DashboardStats,
    pub categories: Vec<CategoryBreakdown>,
    pub rows: Vec<MetricRow>,
}

impl DashboardView {
    /// Build the dashboard `viewer` sees for `filter`.
    ///
    /// `users` is only used to resolve guard display names.
    #[must_use]
    pub fn build(
        viewer: &User,
        users: &[User],
        metrics: &[ComplianceMetric],
        activities: &[Activity],
        filter: &MetricFilter,
    ) -> Self {
        let scoped = filter.scoped_for(viewer);
        let metrics = filter_metrics(metrics, viewer, filter);
        let activities = scope_activities(activities, viewer, &filter.guard);

        let stats = DashboardStats::compute(&activities, &metrics);
        tracing::debug!(
            viewer = %viewer.id,
            activities = stats.total_activities,
            average = stats.average_compliance,
            "dashboard computed"
        );

        Self {
            viewer_id: viewer.id.clone(),
            period: scoped.period,
            guard: scoped.guard,
            stats,
            categories: category_breakdown(&metrics),
            rows: metrics.iter().map(|m| MetricRow::new(m, users)).collect(),
        }
    }
}
