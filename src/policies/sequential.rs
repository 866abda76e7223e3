//! Non-preemptive, run-to-completion policies.
//!
//! FCFS, SJF and static Priority share one dispatch loop and differ only
//! in the order they feed it. Each process runs exactly once:
//! `start = max(clock, arrival)`, `finish = start + burst`.
//!
//! SJF and Priority sort a working list of references once, up front.
//! They do not re-check which jobs have arrived at each decision point.

use log::trace;
use std::cmp::Reverse;

use super::{PolicyKind, SchedulingPolicy};
use crate::models::{ExecutionInterval, Process, ProcessRegistry, Time};

/// First-Come-First-Served.
///
/// Dispatches in registry (arrival) order, ignoring burst and priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn dispatch(&self, registry: &ProcessRegistry) -> Vec<ExecutionInterval> {
        run_to_completion(registry.iter())
    }
}

/// Shortest Job First (non-preemptive).
///
/// Sorts by burst time once; ties keep registry order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sjf
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }

    fn dispatch(&self, registry: &ProcessRegistry) -> Vec<ExecutionInterval> {
        run_to_completion(sorted_by_key(registry, |p| p.burst_time))
    }
}

/// Static priority (non-preemptive).
///
/// Higher `priority` values run first; ties keep registry order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPriority;

impl SchedulingPolicy for StaticPriority {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Priority
    }

    fn description(&self) -> &'static str {
        "Static Priority"
    }

    fn dispatch(&self, registry: &ProcessRegistry) -> Vec<ExecutionInterval> {
        run_to_completion(sorted_by_key(registry, |p| Reverse(p.priority)))
    }
}

/// Returns references to the registry's processes ordered by
/// `(key, insertion index)`.
fn sorted_by_key<K, F>(registry: &ProcessRegistry, key: F) -> Vec<&Process>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut order: Vec<(usize, &Process)> = registry.iter().enumerate().collect();
    order.sort_by_key(|&(idx, p)| (key(p), idx));
    order.into_iter().map(|(_, p)| p).collect()
}

/// Runs each process to completion in the given order.
fn run_to_completion<'a>(order: impl IntoIterator<Item = &'a Process>) -> Vec<ExecutionInterval> {
    let mut clock: Time = 0;
    let mut timeline = Vec::new();

    for process in order {
        let start = clock.max(process.arrival_time);
        let finish = start + process.burst_time;
        trace!("dispatch process {} [{start}, {finish})", process.id);

        timeline.push(ExecutionInterval::new(process.id, start, finish));
        clock = finish;
    }

    timeline
}
