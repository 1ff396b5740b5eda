//! Aggregate statistics over an already-scoped view.

use serde::{Deserialize, Serialize};
use warden_core::entities::{Activity, ComplianceMetric};
use warden_core::enums::{ActivityStatus, MetricCategory};

use crate::percentage::metric_percentage;

/// Headline numbers of the compliance dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_activities: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub scheduled: usize,
    /// Mean of the clamped per-metric percentages; 0 when no metric is in scope.
    pub average_compliance: f64,
}

impl DashboardStats {
    /// Compute over the scoped activities and metrics.
    #[must_use]
    pub fn compute(activities: &[&Activity], metrics: &[&ComplianceMetric]) -> Self {
        let count = |status: ActivityStatus| activities.iter().filter(|a| a.status == status).count();

        Self {
            total_activities: activities.len(),
            completed: count(ActivityStatus::Completed),
            in_progress: count(ActivityStatus::InProgress),
            scheduled: count(ActivityStatus::Scheduled),
            average_compliance: mean(metrics.iter().map(|m| metric_percentage(m))),
        }
    }
}

/// Metric count and mean compliance for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: MetricCategory,
    pub metrics: usize,
    pub average_compliance: f64,
}

/// Per-category averages, in `MetricCategory::ALL` order, for categories present.
#[must_use]
pub fn category_breakdown(metrics: &[&ComplianceMetric]) -> Vec<CategoryBreakdown> {
    MetricCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let in_category: Vec<f64> = metrics
                .iter()
                .filter(|m| m.category == category)
                .map(|m| metric_percentage(m))
                .collect();
            if in_category.is_empty() {
                return None;
            }
            Some(CategoryBreakdown {
                category,
                metrics: in_category.len(),
                average_compliance: mean(in_category.into_iter()),
            })
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use warden_core::enums::ReportingPeriod;

    use super::*;

    fn metric(id: &str, category: MetricCategory, actual: f64, target: f64) -> ComplianceMetric {
        ComplianceMetric {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            category,
            target,
            actual,
            unit: "u".into(),
            period: ReportingPeriod::Monthly,
            guard_id: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        }
    }

    fn activity(status: ActivityStatus) -> Activity {
        Activity {
            id: "a".into(),
            status,
            guard_id: None,
        }
    }

    #[test]
    fn average_of_two_monthly_metrics() {
        let a = metric("a", MetricCategory::Activities, 28.0, 30.0);
        let b = metric("b", MetricCategory::Time, 92.0, 95.0);

        let stats = DashboardStats::compute(&[], &[&a, &b]);
        assert!((stats.average_compliance - 95.09).abs() < 0.01);
    }

    #[test]
    fn overshoot_contributes_hundred() {
        let a = metric("a", MetricCategory::Quality, 18.0, 15.0);
        let b = metric("b", MetricCategory::Quality, 5.0, 10.0);

        let stats = DashboardStats::compute(&[], &[&a, &b]);
        assert_eq!(stats.average_compliance, 75.0);
    }

    #[test]
    fn empty_scope_is_zero_not_nan() {
        let stats = DashboardStats::compute(&[], &[]);
        assert_eq!(
            stats,
            DashboardStats {
                total_activities: 0,
                completed: 0,
                in_progress: 0,
                scheduled: 0,
                average_compliance: 0.0,
            }
        );
    }

    #[test]
    fn zero_target_metric_does_not_poison_average() {
        let a = metric("a", MetricCategory::Objectives, 3.0, 0.0);
        let b = metric("b", MetricCategory::Objectives, 5.0, 10.0);

        let stats = DashboardStats::compute(&[], &[&a, &b]);
        assert_eq!(stats.average_compliance, 75.0);
    }

    #[test]
    fn counts_activities_by_status() {
        let activities = [
            activity(ActivityStatus::Completed),
            activity(ActivityStatus::Completed),
            activity(ActivityStatus::InProgress),
            activity(ActivityStatus::Scheduled),
            activity(ActivityStatus::Scheduled),
            activity(ActivityStatus::Scheduled),
        ];
        let refs: Vec<&Activity> = activities.iter().collect();

        let stats = DashboardStats::compute(&refs, &[]);
        assert_eq!(stats.total_activities, 6);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.scheduled, 3);
    }

    #[test]
    fn breakdown_skips_absent_categories_and_keeps_order() {
        let a = metric("a", MetricCategory::Time, 50.0, 100.0);
        let b = metric("b", MetricCategory::Activities, 10.0, 10.0);
        let c = metric("c", MetricCategory::Time, 100.0, 100.0);

        let breakdown = category_breakdown(&[&a, &b, &c]);
        assert_eq!(
            breakdown,
            vec![
                CategoryBreakdown {
                    category: MetricCategory::Activities,
                    metrics: 1,
                    average_compliance: 100.0,
                },
                CategoryBreakdown {
                    category: MetricCategory::Time,
                    metrics: 2,
                    average_compliance: 75.0,
                },
            ]
        );
    }
}
