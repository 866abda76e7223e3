//! Metrics reducer.
//!
//! Derives per-process timing metrics and the two averages from a
//! registry and the timeline a policy produced.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Finish | End of the process's last interval |
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |

use std::collections::{BTreeMap, HashMap};

use crate::error::SimulationError;
use crate::models::{ExecutionInterval, ProcessId, ProcessMetrics, ProcessRegistry, Time};

/// Per-process metrics plus their averages.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub per_process: BTreeMap<ProcessId, ProcessMetrics>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}

/// Reduces a timeline into per-process metrics and averages.
///
/// # Errors
/// - `Precondition` if the registry is empty.
/// - `MalformedTimeline` if an interval names an unknown process, ends
///   before it starts, starts before its process arrives, or overlaps
///   another interval.
/// - `IncompleteTrace` if any process received no CPU time or a total
///   different from its burst time.
pub fn reduce(
    registry: &ProcessRegistry,
    timeline: &[ExecutionInterval],
) -> Result<MetricsSummary, SimulationError> {
    check_timeline(registry, timeline)?;

    // (first start, last finish, executed ticks) per process
    let mut spans: HashMap<ProcessId, (Time, Time, Time)> = HashMap::new();
    for interval in timeline {
        let entry = spans.entry(interval.process_id).or_insert((
            interval.start_time,
            interval.finish_time,
            0,
        ));
        entry.0 = entry.0.min(interval.start_time);
        entry.1 = entry.1.max(interval.finish_time);
        entry.2 += interval.duration();
    }

    let mut per_process = BTreeMap::new();
    for process in registry {
        let (start, finish, executed) = spans.get(&process.id).copied().unwrap_or((0, 0, 0));
        if executed != process.burst_time {
            return Err(SimulationError::IncompleteTrace {
                process_id: process.id,
                executed,
                burst: process.burst_time,
            });
        }

        let turnaround_time = finish - process.arrival_time;
        per_process.insert(
            process.id,
            ProcessMetrics {
                process_id: process.id,
                arrival_time: process.arrival_time,
                burst_time: process.burst_time,
                start_time: start,
                finish_time: finish,
                turnaround_time,
                waiting_time: turnaround_time - process.burst_time,
                response_time: start - process.arrival_time,
            },
        );
    }

    let waiting: Vec<Time> = per_process.values().map(|m| m.waiting_time).collect();
    let turnaround: Vec<Time> = per_process.values().map(|m| m.turnaround_time).collect();

    Ok(MetricsSummary {
        average_waiting_time: mean(&waiting)?,
        average_turnaround_time: mean(&turnaround)?,
        per_process,
    })
}

/// Arithmetic mean of integer tick values.
///
/// An empty slice is a precondition violation, not a zero result.
pub fn mean(values: &[Time]) -> Result<f64, SimulationError> {
    if values.is_empty() {
        return Err(SimulationError::Precondition(
            "cannot average metrics over zero processes".into(),
        ));
    }
    // Widened so that many large values cannot overflow the sum.
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    Ok(sum as f64 / values.len() as f64)
}

/// Rejects timelines that one CPU could not have produced.
///
/// Once this passes, every interval lies inside `[arrival, Time::MAX]` and
/// no two intervals share a tick, so per-process sums cannot overflow.
fn check_timeline(
    registry: &ProcessRegistry,
    timeline: &[ExecutionInterval],
) -> Result<(), SimulationError> {
    let malformed = |process_id, reason: String| SimulationError::MalformedTimeline {
        process_id,
        reason,
    };

    for interval in timeline {
        let Some(process) = registry.get(interval.process_id) else {
            return Err(malformed(
                interval.process_id,
                "is not in the registry".into(),
            ));
        };
        if interval.start_time < process.arrival_time {
            return Err(malformed(
                process.id,
                format!(
                    "starts at {} before arriving at {}",
                    interval.start_time, process.arrival_time
                ),
            ));
        }
        if interval.finish_time < interval.start_time {
            return Err(malformed(
                process.id,
                format!(
                    "finishes at {} before starting at {}",
                    interval.finish_time, interval.start_time
                ),
            ));
        }
    }

    let mut ordered: Vec<&ExecutionInterval> = timeline.iter().collect();
    ordered.sort_by_key(|i| (i.start_time, i.finish_time));
    for pair in ordered.windows(2) {
        if pair[1].start_time < pair[0].finish_time {
            return Err(malformed(
                pair[1].process_id,
                format!(
                    "starts at {} while process {} runs until {}",
                    pair[1].start_time, pair[0].process_id, pair[0].finish_time
                ),
            ));
        }
    }

    Ok(())
}
