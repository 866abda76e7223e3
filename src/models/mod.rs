//! Simulation domain models.
//!
//! Provides the input and output data types of a scheduling run: the
//! processes to schedule, the registry that holds them, and the trace a
//! policy produces.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Immutable input record (arrival, burst, priority) |
//! | `ProcessRegistry` | Ordered input set with dense 1-based IDs |
//! | `ExecutionInterval` | One dispatch `(process, start, finish)` |
//! | `ProcessMetrics` | Start, finish, waiting, turnaround, response |
//! | `SimulationTrace` | Intervals + metrics + averages for one run |

mod process;
mod registry;
mod trace;

pub use process::{Process, ProcessId, RawProcess, Time};
pub use registry::ProcessRegistry;
pub use trace::{ExecutionInterval, ProcessMetrics, SimulationTrace};
