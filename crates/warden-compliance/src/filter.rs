//! Period and guard filtering of metrics and activities.

use serde::{Deserialize, Serialize};
use warden_core::entities::{Activity, ComplianceMetric, User};
use warden_core::enums::ReportingPeriod;

use crate::scope::{GuardSelection, effective_guard};

/// Filter controls of the compliance dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricFilter {
    pub period: ReportingPeriod,
    pub guard: GuardSelection,
}

impl MetricFilter {
    #[must_use]
    pub const fn new(period: ReportingPeriod, guard: GuardSelection) -> Self {
        Self { period, guard }
    }

    /// The filter with the viewer's scoping applied.
    #[must_use]
    pub fn scoped_for(&self, viewer: &User) -> Self {
        Self {
            period: self.period,
            guard: effective_guard(viewer, &self.guard),
        }
    }
}

/// Metrics of `filter.period` visible to `viewer` under the guard selection.
pub fn filter_metrics<'a>(
    metrics: &'a [ComplianceMetric],
    viewer: &User,
    filter: &MetricFilter,
) -> Vec<&'a ComplianceMetric> {
    let scoped = filter.scoped_for(viewer);
    let kept: Vec<_> = metrics
        .iter()
        .filter(|m| m.period == scoped.period && scoped.guard.admits(m.guard_id.as_deref()))
        .collect();
    tracing::debug!(
        viewer = %viewer.id,
        period = %scoped.period,
        guard = %scoped.guard,
        kept = kept.len(),
        total = metrics.len(),
        "filtered metrics"
    );
    kept
}

/// Activities visible to `viewer` under the guard selection.
pub fn scope_activities<'a>(
    activities: &'a [Activity],
    viewer: &User,
    guard: &GuardSelection,
) -> Vec<&'a Activity> {
    let guard = effective_guard(viewer, guard);
    activities
        .iter()
        .filter(|a| guard.admits(a.guard_id.as_deref()))
        .collect()
}
