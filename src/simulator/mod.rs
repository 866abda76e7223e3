//! Simulation runner.
//!
//! Validates input once, runs a policy over the registry, and reduces the
//! resulting timeline into a [`SimulationTrace`].
//!
//! # Flow
//!
//! 1. Validate the registry and the policy parameters (all errors at once).
//! 2. Dispatch: the policy produces the chronological timeline.
//! 3. Reduce: per-process metrics and averages are derived from it.
//!
//! Nothing is produced when step 1 fails.

mod kpi;
pub mod metrics;

pub use kpi::TraceKpi;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{ProcessRegistry, SimulationTrace, Time};
use crate::policies::{Policy, PolicyKind, SchedulingPolicy};
use crate::validation::validate_processes;

/// One process in a [`SimulationRequest`]. IDs follow array order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub arrival_time: Time,
    pub burst_time: Time,
    #[serde(default)]
    pub priority: i32,
}

/// Input container for a simulation run.
///
/// # Example
///
/// ```
/// use cpu_schedule::simulator::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::from_json(r#"{
///     "policy": "round_robin",
///     "quantum": 2,
///     "processes": [
///         { "arrival_time": 0, "burst_time": 5 },
///         { "arrival_time": 1, "burst_time": 3 },
///         { "arrival_time": 2, "burst_time": 1 }
///     ]
/// }"#).unwrap();
///
/// let trace = Simulator::run_request(&request).unwrap();
/// assert_eq!(trace.metrics_for(3).unwrap().finish_time, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to run.
    pub policy: PolicyKind,
    /// Round Robin quantum; ignored by other policies.
    #[serde(default)]
    pub quantum: Option<Time>,
    /// Processes in registry order.
    pub processes: Vec<ProcessSpec>,
}

impl SimulationRequest {
    /// Creates a request with no processes.
    pub fn new(policy: PolicyKind) -> Self {
        Self {
            policy,
            quantum: None,
            processes: Vec::new(),
        }
    }

    /// Sets the quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Appends a process.
    pub fn with_process(mut self, arrival_time: Time, burst_time: Time, priority: i32) -> Self {
        self.processes.push(ProcessSpec {
            arrival_time,
            burst_time,
            priority,
        });
        self
    }

    /// Decodes a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the registry, assigning IDs in array order.
    pub fn registry(&self) -> ProcessRegistry {
        self.processes
            .iter()
            .fold(ProcessRegistry::new(), |registry, spec| {
                registry.with_process(spec.arrival_time, spec.burst_time, spec.priority)
            })
    }

    /// Resolves the policy and its parameters.
    pub fn resolve_policy(&self) -> Result<Policy, SimulationError> {
        if self.quantum.is_some() && !self.policy.requires_quantum() {
            warn!("quantum ignored for policy {}", self.policy);
        }
        Policy::select(self.policy, self.quantum)
    }
}

/// Runs one built-in policy over process registries.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessRegistry;
/// use cpu_schedule::policies::PolicyKind;
/// use cpu_schedule::simulator::Simulator;
///
/// let registry = ProcessRegistry::new()
///     .with_process(0, 5, 0)
///     .with_process(1, 3, 0)
///     .with_process(2, 1, 0);
///
/// let simulator = Simulator::from_selection(PolicyKind::Fcfs, None).unwrap();
/// let trace = simulator.run(&registry).unwrap();
/// assert!((trace.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    policy: Policy,
}

impl Simulator {
    /// Creates a simulator for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    /// Creates a simulator from a policy kind and optional quantum.
    pub fn from_selection(kind: PolicyKind, quantum: Option<Time>) -> Result<Self, SimulationError> {
        Policy::select(kind, quantum).map(Self::new)
    }

    /// The configured policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Runs the configured policy.
    pub fn run(&self, registry: &ProcessRegistry) -> Result<SimulationTrace, SimulationError> {
        simulate_with(registry, &self.policy)
    }

    /// Runs a decoded request.
    pub fn run_request(request: &SimulationRequest) -> Result<SimulationTrace, SimulationError> {
        let policy = request.resolve_policy()?;
        Self::new(policy).run(&request.registry())
    }
}

/// Runs a built-in policy over the registry.
pub fn simulate(
    registry: &ProcessRegistry,
    policy: Policy,
) -> Result<SimulationTrace, SimulationError> {
    simulate_with(registry, &policy)
}

/// Runs any policy over the registry.
///
/// # Errors
/// - `InvalidInput` with every registry and parameter problem found.
/// - `MalformedTimeline` if the policy runs a process before it arrives,
///   runs two intervals at once, or names an unknown process.
/// - `IncompleteTrace` if the policy's timeline does not cover every
///   process's burst time exactly.
pub fn simulate_with(
    registry: &ProcessRegistry,
    policy: &dyn SchedulingPolicy,
) -> Result<SimulationTrace, SimulationError> {
    let mut errors = Vec::new();
    if let Err(e) = validate_processes(registry.processes()) {
        errors.extend(e);
    }
    if let Err(e) = policy.validate() {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(SimulationError::InvalidInput(errors));
    }

    debug!(
        "simulating {} over {} processes",
        policy.name(),
        registry.len()
    );

    let intervals = policy.dispatch(registry);
    let summary = metrics::reduce(registry, &intervals)?;

    debug!(
        "{} finished: {} intervals, avg waiting {:.3}, avg turnaround {:.3}",
        policy.name(),
        intervals.len(),
        summary.average_waiting_time,
        summary.average_turnaround_time
    );

    Ok(SimulationTrace {
        policy: policy.kind(),
        intervals,
        metrics: summary.per_process,
        average_waiting_time: summary.average_waiting_time,
        average_turnaround_time: summary.average_turnaround_time,
    })
}

/// Runs every built-in policy over the same registry, in menu order.
pub fn compare_policies(
    registry: &ProcessRegistry,
    quantum: Time,
) -> Result<Vec<SimulationTrace>, SimulationError> {
    Policy::all(quantum)?
        .into_iter()
        .map(|policy| simulate(registry, policy))
        .collect()
}
