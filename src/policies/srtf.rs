//! Shortest Remaining Time First.
//!
//! # Algorithm
//!
//! At each decision point `t`, pick the arrived process with the least
//! remaining time (first in registry order on ties). If nothing has
//! arrived yet the CPU idles until the next unfinished arrival. No
//! decision can change during an idle gap, so this matches idling one
//! tick at a time.
//!
//! - Preemptive: run the pick for one tick, then decide again, so a newly
//!   arrived shorter job takes over at the next tick boundary.
//! - Non-preemptive: run the pick until it finishes.
//!
//! Every dispatch emits one interval, so the preemptive variant produces
//! one-tick intervals. Use
//! [`SimulationTrace::merged_intervals`](crate::models::SimulationTrace::merged_intervals)
//! for a compact view.

use log::trace;
use std::collections::HashMap;

use super::{PolicyKind, SchedulingPolicy};
use crate::models::{ExecutionInterval, Process, ProcessId, ProcessRegistry, Time};

/// SRTF scheduling, preemptive or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Srtf {
    /// Re-evaluate after every tick.
    pub preemptive: bool,
}

impl Srtf {
    /// Creates an SRTF policy.
    pub fn new(preemptive: bool) -> Self {
        Self { preemptive }
    }

    /// Preemptive SRTF.
    pub fn preemptive() -> Self {
        Self::new(true)
    }

    /// Non-preemptive SRTF.
    pub fn non_preemptive() -> Self {
        Self::new(false)
    }
}

impl SchedulingPolicy for Srtf {
    fn kind(&self) -> PolicyKind {
        if self.preemptive {
            PolicyKind::SrtfPreemptive
        } else {
            PolicyKind::SrtfNonPreemptive
        }
    }

    fn description(&self) -> &'static str {
        if self.preemptive {
            "Shortest Remaining Time First (preemptive)"
        } else {
            "Shortest Remaining Time First (non-preemptive)"
        }
    }

    fn dispatch(&self, registry: &ProcessRegistry) -> Vec<ExecutionInterval> {
        let mut remaining: HashMap<ProcessId, Time> =
            registry.iter().map(|p| (p.id, p.burst_time)).collect();
        let mut unfinished = remaining.values().filter(|&&r| r > 0).count();
        let mut clock: Time = 0;
        let mut timeline = Vec::new();

        while unfinished > 0 {
            let Some(next) = shortest_remaining(registry, &remaining, clock) else {
                let Some(arrival) = next_arrival(registry, &remaining) else {
                    break;
                };
                trace!("srtf: idle [{clock}, {arrival})");
                clock = arrival;
                continue;
            };

            let Some(left) = remaining.get_mut(&next.id) else {
                break;
            };
            let slice = if self.preemptive { 1 } else { *left };
            let start = clock;
            clock += slice;
            *left -= slice;
            if *left == 0 {
                unfinished -= 1;
            }

            trace!(
                "srtf: process {} [{start}, {clock}), {} left",
                next.id,
                *left
            );
            timeline.push(ExecutionInterval::new(next.id, start, clock));
        }

        timeline
    }
}

/// Arrived process with the least remaining time. `min_by_key` keeps the
/// first minimum, which gives the registry-order tie-break.
fn shortest_remaining<'a>(
    registry: &'a ProcessRegistry,
    remaining: &HashMap<ProcessId, Time>,
    clock: Time,
) -> Option<&'a Process> {
    registry
        .iter()
        .filter(|p| p.has_arrived(clock))
        .filter_map(|p| {
            let left = remaining.get(&p.id).copied().unwrap_or(0);
            (left > 0).then_some((p, left))
        })
        .min_by_key(|&(_, left)| left)
        .map(|(p, _)| p)
}

/// Earliest arrival among processes that still have work left.
fn next_arrival(registry: &ProcessRegistry, remaining: &HashMap<ProcessId, Time>) -> Option<Time> {
    registry
        .iter()
        .filter(|p| remaining.get(&p.id).is_some_and(|&left| left > 0))
        .map(|p| p.arrival_time)
        .min()
}
