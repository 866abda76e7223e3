//! Single-CPU scheduling simulator.
//!
//! Runs a fixed batch of CPU-bound processes through a classical
//! scheduling policy and reports start, finish, waiting and turnaround
//! times per process, plus their averages.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `ProcessRegistry`, `ExecutionInterval`,
//!   `ProcessMetrics`, `SimulationTrace`
//! - **`policies`**: `SchedulingPolicy` trait and the six built-in
//!   policies (FCFS, SJF, Round Robin, SRTF preemptive/non-preemptive,
//!   static priority)
//! - **`simulator`**: validate → dispatch → reduce, JSON requests, KPIs
//! - **`validation`**: Input integrity checks (empty input, bursts, IDs, quantum)
//! - **`report`**: Text rendering of traces
//! - **`workload`**: Seeded random registries
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::ProcessRegistry;
//! use cpu_schedule::policies::Policy;
//! use cpu_schedule::simulator::simulate;
//!
//! let registry = ProcessRegistry::new()
//!     .with_process(0, 5, 0)
//!     .with_process(1, 3, 0)
//!     .with_process(2, 1, 0);
//!
//! let trace = simulate(&registry, Policy::Srtf { preemptive: true }).unwrap();
//! assert_eq!(trace.metrics_for(3).unwrap().finish_time, 3);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policies;
pub mod report;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use models::{ExecutionInterval, Process, ProcessId, ProcessRegistry, SimulationTrace, Time};
pub use policies::{Policy, PolicyKind, SchedulingPolicy};
pub use simulator::{compare_policies, simulate, Simulator};
