//! Trace performance indicators.
//!
//! Summarizes a completed trace beyond the two averages.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest finish time |
//! | Busy time | Sum of interval durations |
//! | Idle time | makespan - busy time |
//! | CPU utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context switches | Adjacent intervals with different processes |
//! | Avg response time | Mean of first start - arrival |

use crate::models::{SimulationTrace, Time};

/// Trace performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceKpi {
    /// Latest finish time.
    pub makespan: Time,
    /// Ticks the CPU spent running processes.
    pub busy_time: Time,
    /// Ticks the CPU sat idle between t=0 and the makespan.
    pub idle_time: Time,
    /// Busy fraction of the makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Dispatches that switched to a different process.
    pub context_switches: usize,
    /// Mean time from arrival to first dispatch.
    pub average_response_time: f64,
    /// Longest waiting time of any process.
    pub max_waiting_time: Time,
}

impl TraceKpi {
    /// Computes indicators from a trace.
    pub fn calculate(trace: &SimulationTrace) -> Self {
        let makespan = trace.makespan();
        let busy_time: Time = trace.intervals.iter().map(|i| i.duration()).sum();

        let context_switches = trace
            .intervals
            .windows(2)
            .filter(|pair| pair[0].process_id != pair[1].process_id)
            .count();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                trace.process_count() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let average_response_time = if trace.metrics.is_empty() {
            0.0
        } else {
            let total: i128 = trace
                .metrics
                .values()
                .map(|m| i128::from(m.response_time))
                .sum();
            total as f64 / trace.metrics.len() as f64
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            context_switches,
            average_response_time,
            max_waiting_time: trace
                .metrics
                .values()
                .map(|m| m.waiting_time)
                .max()
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRegistry;
    use crate::policies::Policy;
    use crate::simulator::simulate;

    fn scenario() -> ProcessRegistry {
        ProcessRegistry::new()
            .with_process(0, 5, 0)
            .with_process(1, 3, 0)
            .with_process(2, 1, 0)
    }

    #[test]
    fn test_kpi_fcfs() {
        let trace = simulate(&scenario(), Policy::Fcfs).unwrap();
        let kpi = TraceKpi::calculate(&trace);
        assert_eq!(kpi.makespan, 9);
        assert_eq!(kpi.busy_time, 9);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 9.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 2);
        assert_eq!(kpi.max_waiting_time, 6);
        // Responses equal waits for run-to-completion: (0 + 4 + 6) / 3
        assert!((kpi.average_response_time - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_time() {
        let registry = ProcessRegistry::new()
            .with_process(0, 2, 0)
            .with_process(6, 2, 0);
        let trace = simulate(&registry, Policy::Fcfs).unwrap();
        let kpi = TraceKpi::calculate(&trace);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_preemptive_switches() {
        let trace = simulate(&scenario(), Policy::Srtf { preemptive: true }).unwrap();
        let kpi = TraceKpi::calculate(&trace);
        // 1 → 2 → 3 → 2 → 1
        assert_eq!(kpi.context_switches, 4);
        assert!((kpi.average_response_time - 0.0).abs() < 1e-10);
    }
}
