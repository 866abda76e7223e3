//! Error types for simulation runs.

use thiserror::Error;

use crate::models::{ProcessId, Time};
use crate::validation::ValidationError;

/// Errors surfaced by the simulation engine.
///
/// Input problems are detected before any policy runs, so a failed run
/// never produces a partial trace.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// One or more input checks failed.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// An operation was called outside its domain (e.g. averaging zero processes).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A timeline did not deliver exactly a process's burst time.
    #[error("incomplete trace: process {process_id} executed {executed} of {burst} ticks")]
    IncompleteTrace {
        process_id: ProcessId,
        executed: Time,
        burst: Time,
    },

    /// A timeline is not physically possible on one CPU: an interval
    /// belongs to an unknown process, runs backwards, starts before its
    /// process arrives, or overlaps another interval.
    #[error("malformed timeline: process {process_id} {reason}")]
    MalformedTimeline { process_id: ProcessId, reason: String },

    /// A request could not be decoded, or a trace could not be encoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimulationError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

impl From<ValidationError> for SimulationError {
    fn from(error: ValidationError) -> Self {
        Self::InvalidInput(vec![error])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
