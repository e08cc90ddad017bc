//! Side-by-side comparison of FCFS and SJF metrics.
//!
//! Waiting and turnaround time are better when lower; utilization and
//! throughput are better when higher. Equal values have no winner.

use serde::{Deserialize, Serialize};

use super::Metrics;
use crate::models::Algorithm;

/// A metric that can be compared across algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricKind {
    /// Mean waiting time (lower is better).
    AvgWaitingTime,
    /// Mean turnaround time (lower is better).
    AvgTurnaroundTime,
    /// CPU utilization in percent (higher is better).
    CpuUtilization,
    /// Processes per tick (higher is better).
    Throughput,
}

impl MetricKind {
    /// All comparable metrics, in report order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::AvgWaitingTime,
        MetricKind::AvgTurnaroundTime,
        MetricKind::CpuUtilization,
        MetricKind::Throughput,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::AvgWaitingTime => "Avg Waiting Time",
            MetricKind::AvgTurnaroundTime => "Avg Turnaround Time",
            MetricKind::CpuUtilization => "CPU Utilization (%)",
            MetricKind::Throughput => "Throughput",
        }
    }

    /// Whether smaller values are better.
    pub fn lower_is_better(&self) -> bool {
        matches!(
            self,
            MetricKind::AvgWaitingTime | MetricKind::AvgTurnaroundTime
        )
    }

    /// Reads this metric from a metrics record.
    pub fn value(&self, metrics: &Metrics) -> f64 {
        match self {
            MetricKind::AvgWaitingTime => metrics.avg_waiting_time,
            MetricKind::AvgTurnaroundTime => metrics.avg_turnaround_time,
            MetricKind::CpuUtilization => metrics.cpu_utilization,
            MetricKind::Throughput => metrics.throughput,
        }
    }
}

/// One row of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricComparison {
    /// Compared metric.
    pub metric: MetricKind,
    /// FCFS value.
    pub fcfs: f64,
    /// SJF value.
    pub sjf: f64,
    /// Better algorithm; `None` when equal.
    pub better: Option<Algorithm>,
}

/// FCFS-vs-SJF comparison over every [`MetricKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsComparison {
    rows: Vec<MetricComparison>,
}

impl MetricsComparison {
    /// Compares two metrics records.
    pub fn new(fcfs: &Metrics, sjf: &Metrics) -> Self {
        let rows = MetricKind::ALL
            .iter()
            .map(|&metric| {
                let f = metric.value(fcfs);
                let s = metric.value(sjf);
                let fcfs_wins = if metric.lower_is_better() { f < s } else { f > s };
                let sjf_wins = if metric.lower_is_better() { s < f } else { s > f };
                let better = if fcfs_wins {
                    Some(Algorithm::Fcfs)
                } else if sjf_wins {
                    Some(Algorithm::Sjf)
                } else {
                    None
                };
                MetricComparison {
                    metric,
                    fcfs: f,
                    sjf: s,
                    better,
                }
            })
            .collect();

        Self { rows }
    }

    /// All rows in report order.
    pub fn rows(&self) -> &[MetricComparison] {
        &self.rows
    }

    /// The better algorithm for one metric (`None` when equal).
    pub fn winner_for(&self, metric: MetricKind) -> Option<Algorithm> {
        self.rows
            .iter()
            .find(|r| r.metric == metric)
            .and_then(|r| r.better)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::textbook_batch;
    use crate::scheduler::{Fcfs, Scheduler, Sjf};

    #[test]
    fn test_textbook_comparison() {
        let fcfs = Metrics::calculate(&Fcfs::new().schedule(textbook_batch()));
        let sjf = Metrics::calculate(&Sjf::new().schedule(textbook_batch()));
        let cmp = MetricsComparison::new(&fcfs, &sjf);

        assert_eq!(cmp.rows().len(), 4);
        assert_eq!(cmp.winner_for(MetricKind::AvgWaitingTime), Some(Algorithm::Sjf));
        assert_eq!(
            cmp.winner_for(MetricKind::AvgTurnaroundTime),
            Some(Algorithm::Sjf)
        );
        assert_eq!(cmp.winner_for(MetricKind::CpuUtilization), None);
        assert_eq!(cmp.winner_for(MetricKind::Throughput), None);
    }

    #[test]
    fn test_higher_is_better_direction() {
        let fcfs = Metrics {
            cpu_utilization: 90.0,
            throughput: 0.1,
            ..Default::default()
        };
        let sjf = Metrics {
            cpu_utilization: 80.0,
            throughput: 0.2,
            ..Default::default()
        };
        let cmp = MetricsComparison::new(&fcfs, &sjf);
        assert_eq!(cmp.winner_for(MetricKind::CpuUtilization), Some(Algorithm::Fcfs));
        assert_eq!(cmp.winner_for(MetricKind::Throughput), Some(Algorithm::Sjf));
    }

    #[test]
    fn test_labels() {
        assert_eq!(MetricKind::AvgWaitingTime.label(), "Avg Waiting Time");
        assert!(MetricKind::AvgTurnaroundTime.lower_is_better());
        assert!(!MetricKind::Throughput.lower_is_better());
    }
}
