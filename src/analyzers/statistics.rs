//! Descriptive statistics over one battery's SUS scores.

use tracing::{info, warn};

use crate::analyzers::columns::Battery;
use crate::analyzers::grade::interpret;
use crate::analyzers::types::BatteryStatistics;
use crate::analyzers::utility::{mean, median, sample_stddev};

/// Aggregates the valid scores of one battery. Absent scores are filtered
/// out first; returns `None` when nothing remains.
pub fn battery_statistics(scores: &[Option<f64>]) -> Option<BatteryStatistics> {
    let valid: Vec<f64> = scores.iter().flatten().copied().collect();
    if valid.is_empty() {
        return None;
    }

    let mean = mean(&valid);
    let band = interpret(mean);

    Some(BatteryStatistics {
        mean,
        median: median(&valid),
        stddev: sample_stddev(&valid, mean),
        min: valid.iter().copied().fold(f64::INFINITY, f64::min),
        max: valid.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        count: valid.len(),
        scores: valid,
        grade: band.grade,
        label: band.label,
        severity: band.severity,
        symbol: band.symbol,
    })
}

/// Logs one battery's statistics, or the fact that none could be computed.
pub fn log_statistics(battery: Battery, stats: Option<&BatteryStatistics>) {
    match stats {
        Some(s) => info!(
            battery = battery.name(),
            mean = %format!("{:.2}", s.mean),
            median = %format!("{:.2}", s.median),
            stddev = %format!("{:.2}", s.stddev),
            min = s.min,
            max = s.max,
            count = s.count,
            grade = s.grade,
            label = s.label,
            "battery statistics"
        ),
        None => warn!(battery = battery.name(), "no valid scores for battery"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::Severity;

    #[test]
    fn test_empty_input_yields_none() {
        assert!(battery_statistics(&[]).is_none());
        assert!(battery_statistics(&[None, None]).is_none());
    }

    #[test]
    fn test_absent_scores_filtered_before_aggregation() {
        let stats = battery_statistics(&[Some(80.0), None, Some(90.0)]).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 85.0);
        assert_eq!(stats.scores, vec![80.0, 90.0]);
    }

    #[test]
    fn test_single_score_has_zero_stddev() {
        let stats = battery_statistics(&[Some(72.5)]).unwrap();
        assert_eq!(stats.stddev, 0.0);
        assert_eq!(stats.min, 72.5);
        assert_eq!(stats.max, 72.5);
        assert_eq!(stats.median, 72.5);
    }

    #[test]
    fn test_known_score_set() {
        let scores: Vec<Option<f64>> = [97.5, 82.5, 85.0, 87.5, 77.5, 65.0]
            .into_iter()
            .map(Some)
            .collect();
        let stats = battery_statistics(&scores).unwrap();

        assert_eq!(stats.mean, 82.5);
        assert_eq!(stats.median, 83.75);
        assert!((stats.stddev - 117.5_f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 65.0);
        assert_eq!(stats.max, 97.5);
        assert_eq!(stats.count, 6);
        assert_eq!(stats.grade, "A");
        assert_eq!(stats.label, "Excellent");
        assert_eq!(stats.severity, Severity::Success);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let scores = vec![Some(50.0), Some(75.0), Some(100.0)];
        let first = battery_statistics(&scores).unwrap();
        let second = battery_statistics(&scores).unwrap();

        assert_eq!(first.mean, second.mean);
        assert_eq!(first.median, second.median);
        assert_eq!(first.stddev, second.stddev);
        assert_eq!(first.scores, second.scores);
    }
}
