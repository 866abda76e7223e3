//! Scheduling policies.
//!
//! Each policy turns a validated [`ProcessRegistry`] into a chronological
//! list of [`ExecutionInterval`]s. Metrics are derived afterwards by the
//! simulator, so a policy only decides *who runs when*.
//!
//! # Policies
//!
//! | Kind | Preemptive | Ordering |
//! |------|-----------|----------|
//! | FCFS | no | registry order |
//! | SJF | no | burst time, sorted once |
//! | Round Robin | by quantum | registry order, repeated scans |
//! | SRTF (preemptive) | every tick | least remaining time among arrived |
//! | SRTF (non-preemptive) | no | least remaining time among arrived |
//! | Priority | no | priority descending, sorted once |
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::ProcessRegistry;
//! use cpu_schedule::policies::{Fcfs, SchedulingPolicy};
//!
//! let registry = ProcessRegistry::new()
//!     .with_process(0, 5, 0)
//!     .with_process(1, 3, 0);
//! let timeline = Fcfs.dispatch(&registry);
//! assert_eq!(timeline[1].start_time, 5);
//! ```

mod round_robin;
mod sequential;
mod srtf;

pub use round_robin::RoundRobin;
pub use sequential::{Fcfs, Sjf, StaticPriority};
pub use srtf::Srtf;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::SimulationError;
use crate::models::{ExecutionInterval, ProcessRegistry, Time};
use crate::validation::{validate_quantum, ValidationError, ValidationErrorKind, ValidationResult};

/// A single-CPU scheduling policy.
///
/// # Contract
/// `dispatch` receives a registry that already passed validation
/// (non-empty, positive bursts, non-negative arrivals) and must return
/// intervals in dispatch order. The registry is read-only; any progress
/// state lives inside the call.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Which of the built-in kinds this policy is.
    fn kind(&self) -> PolicyKind;

    /// Short label (e.g. "FCFS").
    fn name(&self) -> &'static str {
        self.kind().label()
    }

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Checks policy parameters before a run.
    fn validate(&self) -> ValidationResult {
        Ok(())
    }

    /// Produces the execution timeline for the registry.
    fn dispatch(&self, registry: &ProcessRegistry) -> Vec<ExecutionInterval>;
}

/// The six built-in policy kinds, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[serde(alias = "FCFS")]
    Fcfs,
    #[serde(alias = "SJF")]
    Sjf,
    #[serde(alias = "Round Robin")]
    RoundRobin,
    #[serde(alias = "SRTF Preemptive")]
    SrtfPreemptive,
    #[serde(alias = "SRTF Non-Preemptive")]
    SrtfNonPreemptive,
    #[serde(alias = "Priority")]
    Priority,
}

impl PolicyKind {
    /// All kinds, in menu order.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::RoundRobin,
        PolicyKind::SrtfPreemptive,
        PolicyKind::SrtfNonPreemptive,
        PolicyKind::Priority,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sjf => "SJF",
            PolicyKind::RoundRobin => "Round Robin",
            PolicyKind::SrtfPreemptive => "SRTF Preemptive",
            PolicyKind::SrtfNonPreemptive => "SRTF Non-Preemptive",
            PolicyKind::Priority => "Priority",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(self) -> bool {
        matches!(self, PolicyKind::RoundRobin | PolicyKind::SrtfPreemptive)
    }

    /// Whether the kind needs a quantum.
    pub fn requires_quantum(self) -> bool {
        self == PolicyKind::RoundRobin
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PolicyKind {
    type Err = ValidationError;

    /// Accepts labels ("Round Robin", "SRTF Non-Preemptive") and snake_case
    /// names, ignoring case and separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "fcfs" => Ok(PolicyKind::Fcfs),
            "sjf" => Ok(PolicyKind::Sjf),
            "round_robin" | "rr" => Ok(PolicyKind::RoundRobin),
            "srtf_preemptive" => Ok(PolicyKind::SrtfPreemptive),
            "srtf_non_preemptive" | "srtf_nonpreemptive" => Ok(PolicyKind::SrtfNonPreemptive),
            "priority" => Ok(PolicyKind::Priority),
            _ => Err(ValidationError::new(
                ValidationErrorKind::UnknownPolicy,
                format!("Unknown scheduling policy: '{}'", s.trim()),
            )),
        }
    }
}

/// A built-in policy with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    RoundRobin { quantum: Time },
    Srtf { preemptive: bool },
    Priority,
}

impl Policy {
    /// Builds a policy from a kind and an optional quantum.
    ///
    /// The quantum is required (and must be positive) for Round Robin
    /// and ignored for every other kind.
    pub fn select(kind: PolicyKind, quantum: Option<Time>) -> Result<Self, SimulationError> {
        Ok(match kind {
            PolicyKind::Fcfs => Policy::Fcfs,
            PolicyKind::Sjf => Policy::Sjf,
            PolicyKind::RoundRobin => Policy::RoundRobin {
                quantum: validate_quantum(quantum)?,
            },
            PolicyKind::SrtfPreemptive => Policy::Srtf { preemptive: true },
            PolicyKind::SrtfNonPreemptive => Policy::Srtf { preemptive: false },
            PolicyKind::Priority => Policy::Priority,
        })
    }

    /// Every built-in policy, in menu order.
    pub fn all(quantum: Time) -> Result<Vec<Self>, SimulationError> {
        PolicyKind::ALL
            .iter()
            .map(|&kind| Self::select(kind, Some(quantum)))
            .collect()
    }
}

impl SchedulingPolicy for Policy {
    fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fcfs => PolicyKind::Fcfs,
            Policy::Sjf => PolicyKind::Sjf,
            Policy::RoundRobin { .. } => PolicyKind::RoundRobin,
            Policy::Srtf { preemptive: true } => PolicyKind::SrtfPreemptive,
            Policy::Srtf { preemptive: false } => PolicyKind::SrtfNonPreemptive,
            Policy::Priority => PolicyKind::Priority,
        }
    }

    fn description(&self) -> &'static str {
        match *self {
            Policy::Fcfs => Fcfs.description(),
            Policy::Sjf => Sjf.description(),
            Policy::RoundRobin { quantum } => RoundRobin::new(quantum).description(),
            Policy::Srtf { preemptive } => Srtf::new(preemptive).description(),
            Policy::Priority => StaticPriority.description(),
        }
    }

    fn validate(&self) -> ValidationResult {
        match *self {
            Policy::RoundRobin { quantum } => RoundRobin::new(quantum).validate(),
            _ => Ok(()),
        }
    }

    fn dispatch(&self, registry: &ProcessRegistry) -> Vec<ExecutionInterval> {
        match *self {
            Policy::Fcfs => Fcfs.dispatch(registry),
            Policy::Sjf => Sjf.dispatch(registry),
            Policy::RoundRobin { quantum } => RoundRobin::new(quantum).dispatch(registry),
            Policy::Srtf { preemptive } => Srtf::new(preemptive).dispatch(registry),
            Policy::Priority => StaticPriority.dispatch(registry),
        }
    }
}
