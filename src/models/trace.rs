//! Simulation trace (solution) model.
//!
//! A trace records every execution interval a policy dispatched, in
//! dispatch order, together with the per-process metrics and averages
//! derived from them.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{ProcessId, Time};
use crate::error::SimulationError;
use crate::policies::PolicyKind;

/// One dispatch of a process onto the CPU.
///
/// Covers the half-open interval `[start_time, finish_time)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutionInterval {
    /// Dispatched process.
    pub process_id: ProcessId,
    /// Dispatch start.
    pub start_time: Time,
    /// Dispatch end.
    pub finish_time: Time,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: ProcessId, start_time: Time, finish_time: Time) -> Self {
        Self {
            process_id,
            start_time,
            finish_time,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> Time {
        self.finish_time - self.start_time
    }
}

/// Timing metrics for a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    pub process_id: ProcessId,
    pub arrival_time: Time,
    pub burst_time: Time,
    /// Start of the first dispatch.
    pub start_time: Time,
    /// End of the last dispatch.
    pub finish_time: Time,
    /// `finish_time - arrival_time`.
    pub turnaround_time: Time,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Time,
    /// `start_time - arrival_time`.
    pub response_time: Time,
}

/// The complete record of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationTrace {
    /// Policy that produced this trace.
    pub policy: PolicyKind,
    /// Execution intervals in dispatch order.
    pub intervals: Vec<ExecutionInterval>,
    /// Per-process metrics keyed by process ID.
    pub metrics: BTreeMap<ProcessId, ProcessMetrics>,
    /// Mean waiting time across all processes.
    pub average_waiting_time: f64,
    /// Mean turnaround time across all processes.
    pub average_turnaround_time: f64,
}

impl SimulationTrace {
    /// Metrics for a given process.
    pub fn metrics_for(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.metrics.get(&process_id)
    }

    /// All intervals for a given process, in dispatch order.
    pub fn intervals_for(&self, process_id: ProcessId) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Latest finish time across all intervals.
    pub fn makespan(&self) -> Time {
        self.intervals
            .iter()
            .map(|i| i.finish_time)
            .max()
            .unwrap_or(0)
    }

    /// Number of processes covered by this trace.
    pub fn process_count(&self) -> usize {
        self.metrics.len()
    }

    /// Coalesces back-to-back intervals of the same process.
    ///
    /// Two consecutive intervals merge when they belong to the same
    /// process and the second starts exactly where the first ends.
    /// Useful for Gantt-style rendering of preemptive traces.
    pub fn merged_intervals(&self) -> Vec<ExecutionInterval> {
        let mut merged: Vec<ExecutionInterval> = Vec::with_capacity(self.intervals.len());
        for interval in &self.intervals {
            match merged.last_mut() {
                Some(last)
                    if last.process_id == interval.process_id
                        && last.finish_time == interval.start_time =>
                {
                    last.finish_time = interval.finish_time;
                }
                _ => merged.push(*interval),
            }
        }
        merged
    }

    /// Serializes the trace as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
