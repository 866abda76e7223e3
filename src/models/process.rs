//! Process model.
//!
//! A process is a CPU-bound unit of work with an arrival time, a total
//! burst time and a static priority. Records are immutable once they
//! enter a registry; policies track progress in their own state.

use serde::{Deserialize, Serialize};

/// Simulation time in integer ticks, relative to t=0.
pub type Time = i64;

/// Process identifier (1-based, dense, assigned in insertion order).
pub type ProcessId = u32;

/// A CPU-bound process to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time the process becomes eligible to run.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub burst_time: Time,
    /// Static priority (higher = dispatched first under the priority policy).
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: ProcessId, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the static priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: Time) -> bool {
        self.arrival_time <= t
    }
}

/// Raw, unparsed process fields as collected by an input form.
///
/// Every field is required. Parsing happens in
/// [`ProcessRegistry::add_raw`](super::ProcessRegistry::add_raw).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProcess {
    pub arrival_time: Option<String>,
    pub burst_time: Option<String>,
    pub priority: Option<String>,
}

impl RawProcess {
    /// Creates a raw record with all three fields present.
    pub fn new(
        arrival_time: impl Into<String>,
        burst_time: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            arrival_time: Some(arrival_time.into()),
            burst_time: Some(burst_time.into()),
            priority: Some(priority.into()),
        }
    }
}
