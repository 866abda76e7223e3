//! Process registry.
//!
//! Ordered collection of processes in insertion order. IDs are assigned
//! densely starting at 1, so a process's ID always identifies it even
//! after a policy reorders a working copy.

use serde::Serialize;

use super::{Process, ProcessId, RawProcess, Time};
use crate::error::SimulationError;
use crate::validation::{parse_field, validate_processes, ValidationErrorKind};

/// The input process set for a simulation run.
///
/// Policies only ever borrow the registry; they never reorder or
/// modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from pre-assigned records.
    ///
    /// IDs must be unique and equal to each record's 1-based position.
    /// Burst and arrival values are checked later, when a run starts.
    pub fn from_processes(processes: Vec<Process>) -> Result<Self, SimulationError> {
        if let Err(errors) = validate_processes(&processes) {
            let id_errors: Vec<_> = errors
                .into_iter()
                .filter(|e| {
                    matches!(
                        e.kind,
                        ValidationErrorKind::DuplicateId | ValidationErrorKind::NonDenseId
                    )
                })
                .collect();
            if !id_errors.is_empty() {
                return Err(SimulationError::InvalidInput(id_errors));
            }
        }
        Ok(Self { processes })
    }

    /// Appends a process and returns its assigned ID.
    pub fn add(&mut self, arrival_time: Time, burst_time: Time, priority: i32) -> ProcessId {
        let id = self.next_id();
        self.processes
            .push(Process::new(id, arrival_time, burst_time).with_priority(priority));
        id
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_process(mut self, arrival_time: Time, burst_time: Time, priority: i32) -> Self {
        self.add(arrival_time, burst_time, priority);
        self
    }

    /// Parses raw text fields and appends the process.
    ///
    /// All three fields are required. On any missing or non-numeric field
    /// nothing is added and every field problem is reported.
    pub fn add_raw(&mut self, raw: &RawProcess) -> Result<ProcessId, SimulationError> {
        let arrival = parse_field::<Time>("arrival_time", raw.arrival_time.as_deref());
        let burst = parse_field::<Time>("burst_time", raw.burst_time.as_deref());
        let priority = parse_field::<i32>("priority", raw.priority.as_deref());

        match (arrival, burst, priority) {
            (Ok(arrival), Ok(burst), Ok(priority)) => Ok(self.add(arrival, burst, priority)),
            (arrival, burst, priority) => {
                let errors = [arrival.err(), burst.err(), priority.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(SimulationError::InvalidInput(errors))
            }
        }
    }

    /// All processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Finds a process by ID.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        // Dense IDs map straight to positions.
        let idx = (id as usize).checked_sub(1)?;
        self.processes.get(idx).filter(|p| p.id == id)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times, saturating at [`Time::MAX`].
    pub fn total_burst_time(&self) -> Time {
        self.processes
            .iter()
            .map(|p| p.burst_time)
            .fold(0, Time::saturating_add)
    }

    /// Largest burst time, if any.
    pub fn max_burst_time(&self) -> Option<Time> {
        self.processes.iter().map(|p| p.burst_time).max()
    }

    fn next_id(&self) -> ProcessId {
        self.processes.len() as ProcessId + 1
    }
}

impl<'a> IntoIterator for &'a ProcessRegistry {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_dense_ids() {
        let mut registry = ProcessRegistry::new();
        assert_eq!(registry.add(0, 5, 1), 1);
        assert_eq!(registry.add(1, 3, 2), 2);
        assert_eq!(registry.add(2, 1, 3), 3);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.total_burst_time(), 9);
        assert_eq!(registry.max_burst_time(), Some(5));
    }

    #[test]
    fn test_builder_and_get() {
        let registry = ProcessRegistry::new()
            .with_process(0, 4, 0)
            .with_process(3, 2, 7);

        let p2 = registry.get(2).unwrap();
        assert_eq!(p2.arrival_time, 3);
        assert_eq!(p2.priority, 7);
        assert!(registry.get(0).is_none());
        assert!(registry.get(3).is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProcessRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.total_burst_time(), 0);
        assert_eq!(registry.max_burst_time(), None);
    }

    #[test]
    fn test_total_burst_time_saturates() {
        let registry = ProcessRegistry::new()
            .with_process(0, Time::MAX, 0)
            .with_process(0, 1, 0);
        assert_eq!(registry.total_burst_time(), Time::MAX);
    }

    #[test]
    fn test_add_raw() {
        let mut registry = ProcessRegistry::new();
        let id = registry.add_raw(&RawProcess::new("2", "6", "1")).unwrap();
        assert_eq!(id, 1);
        assert_eq!(registry.get(1), Some(&Process::new(1, 2, 6).with_priority(1)));
    }

    #[test]
    fn test_add_raw_reports_every_bad_field() {
        let mut registry = ProcessRegistry::new();
        let raw = RawProcess {
            arrival_time: Some("soon".into()),
            burst_time: None,
            priority: Some("1".into()),
        };

        let err = registry.add_raw(&raw).unwrap_err();
        let kinds: Vec<_> = err.validation_errors().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ValidationErrorKind::InvalidNumber, ValidationErrorKind::MissingField]
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_from_processes() {
        let registry =
            ProcessRegistry::from_processes(vec![Process::new(1, 0, 2), Process::new(2, 1, 1)])
                .unwrap();
        assert_eq!(registry.len(), 2);

        // Burst checks are deferred to the run.
        assert!(ProcessRegistry::from_processes(vec![Process::new(1, 0, 0)]).is_ok());
    }

    #[test]
    fn test_from_processes_rejects_bad_ids() {
        let err = ProcessRegistry::from_processes(vec![Process::new(2, 0, 1)]).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonDenseId
        );

        let err = ProcessRegistry::from_processes(vec![Process::new(1, 0, 1), Process::new(1, 0, 1)])
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::DuplicateId
        );
    }
}
