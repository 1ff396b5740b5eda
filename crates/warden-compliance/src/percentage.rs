//! Per-metric compliance percentage.
//!
//! `min(actual / target * 100, 100)`, floored at 0. A non-positive target
//! counts as fully met when `actual >= 0` and as 0 otherwise, so the result
//! is always a finite value in `[0, 100]`.

use warden_core::entities::ComplianceMetric;

const CEILING: f64 = 100.0;

#[must_use]
pub fn compliance_percentage(actual: f64, target: f64) -> f64 {
    if actual.is_nan() || target.is_nan() {
        return 0.0;
    }
    if target <= 0.0 {
        return if actual >= 0.0 { CEILING } else { 0.0 };
    }
    let ratio = actual / target * CEILING;
    // inf / inf
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, CEILING)
}

#[must_use]
pub fn metric_percentage(metric: &ComplianceMetric) -> f64 {
    compliance_percentage(metric.actual, metric.target)
}

/// Round to one decimal place for display.
#[must_use]
pub fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[rstest]
    #[case(28.0, 30.0, 93.33)]
    #[case(92.0, 95.0, 96.84)]
    #[case(30.0, 30.0, 100.0)]
    #[case(0.0, 30.0, 0.0)]
    fn ratio_of_target(#[case] actual: f64, #[case] target: f64, #[case] expected: f64) {
        assert!(close(compliance_percentage(actual, target), expected));
    }

    #[test]
    fn overshoot_is_clamped_to_hundred() {
        assert_eq!(compliance_percentage(18.0, 15.0), 100.0);
    }

    #[test]
    fn negative_actual_is_floored_at_zero() {
        assert_eq!(compliance_percentage(-5.0, 10.0), 0.0);
    }

    #[rstest]
    #[case(0.0, 100.0)]
    #[case(7.0, 100.0)]
    #[case(-1.0, 0.0)]
    fn zero_target_policy(#[case] actual: f64, #[case] expected: f64) {
        assert_eq!(compliance_percentage(actual, 0.0), expected);
        assert_eq!(compliance_percentage(actual, -3.0), expected);
    }

    #[test]
    fn never_nan_or_infinite() {
        for (actual, target) in [
            (f64::NAN, 10.0),
            (1.0, f64::NAN),
            (f64::INFINITY, 10.0),
            (1.0, f64::INFINITY),
            (f64::INFINITY, f64::INFINITY),
        ] {
            let value = compliance_percentage(actual, target);
            assert!(value.is_finite());
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_one(93.333), 93.3);
        assert_eq!(round_one(96.842), 96.8);
        assert_eq!(round_one(95.09), 95.1);
    }
}
