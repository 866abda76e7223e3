//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process set and policy parameters
//! before any policy runs. Detects:
//! - Empty registries
//! - Non-positive burst times and negative arrival times
//! - Duplicate or non-dense process IDs
//! - Schedules whose horizon does not fit in [`Time`]
//! - Non-positive Round Robin quanta
//! - Missing or non-numeric raw fields
//!
//! All checks collect every problem found instead of stopping at the first.

use std::collections::HashSet;

use crate::models::{Process, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The registry holds no processes.
    EmptyRegistry,
    /// A process has burst time ≤ 0.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicateId,
    /// Process IDs are not 1..=n in insertion order.
    NonDenseId,
    /// Latest arrival plus total burst time does not fit in [`Time`].
    HorizonOverflow,
    /// Round Robin selected without a positive quantum.
    InvalidQuantum,
    /// A required raw field is absent or blank.
    MissingField,
    /// A raw field is not an integer.
    InvalidNumber,
    /// A policy name could not be recognized.
    UnknownPolicy,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. IDs are unique and equal to their 1-based position
/// 3. Every burst time is positive
/// 4. Every arrival time is non-negative
/// 5. The schedule horizon fits in [`Time`]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRegistry,
            "At least one process is required",
        ));
    }

    let mut seen = HashSet::new();
    for (position, p) in processes.iter().enumerate() {
        if !seen.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        } else if p.id as usize != position + 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonDenseId,
                format!(
                    "Process at position {} has ID {} (expected {})",
                    position + 1,
                    p.id,
                    position + 1
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }
    }

    if schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Latest arrival plus total burst time exceeds {} ticks",
                Time::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest arrival plus the sum of all bursts, or `None` on overflow.
///
/// No policy moves the clock past this point, so a registry whose horizon
/// fits in [`Time`] can be dispatched with plain arithmetic. Negative
/// fields are counted as zero; they are reported separately.
pub fn schedule_horizon(processes: &[Process]) -> Option<Time> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);

    processes
        .iter()
        .map(|p| p.burst_time.max(0))
        .try_fold(latest_arrival, Time::checked_add)
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: Option<Time>) -> Result<Time, ValidationError> {
    match quantum {
        Some(q) if q > 0 => Ok(q),
        Some(q) => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Round Robin quantum must be positive, got {q}"),
        )),
        None => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round Robin requires a quantum",
        )),
    }
}

/// Parses a required integer field from raw text.
///
/// Surrounding whitespace is ignored; blank text counts as missing.
pub fn parse_field<T>(field: &str, raw: Option<&str>) -> Result<T, ValidationError>
where
    T: std::str::FromStr,
{
    let text = match raw.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            return Err(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Missing value for '{field}'"),
            ))
        }
    };

    text.parse().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidNumber,
            format!("'{field}' is not an integer: '{text}'"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_registry() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyRegistry);
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new(1, 0, 0), Process::new(2, 0, -3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new(1, -1, 4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 0, 2), Process::new(1, 0, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_non_dense_id() {
        let processes = vec![Process::new(1, 0, 2), Process::new(5, 0, 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonDenseId);
        assert!(errors[0].message.contains("expected 2"));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new(1, -2, 0), Process::new(1, 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_schedule_horizon() {
        assert_eq!(schedule_horizon(&sample_processes()), Some(11));
        assert_eq!(schedule_horizon(&[]), Some(0));
        assert_eq!(
            schedule_horizon(&[Process::new(1, Time::MAX - 1, 1)]),
            Some(Time::MAX)
        );
        assert_eq!(schedule_horizon(&[Process::new(1, Time::MAX, 1)]), None);
    }

    #[test]
    fn test_horizon_overflow() {
        let late = vec![Process::new(1, Time::MAX, 1)];
        let errors = validate_processes(&late).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);

        let long = vec![Process::new(1, 0, Time::MAX), Process::new(2, 0, 1)];
        let errors = validate_processes(&long).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);

        let edge = vec![Process::new(1, Time::MAX - 3, 2), Process::new(2, 0, 1)];
        assert!(validate_processes(&edge).is_ok());
    }

    #[test]
    fn test_validate_quantum() {
        assert_eq!(validate_quantum(Some(3)), Ok(3));
        assert_eq!(
            validate_quantum(Some(0)).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert_eq!(
            validate_quantum(Some(-2)).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
        assert_eq!(
            validate_quantum(None).unwrap_err().kind,
            ValidationErrorKind::InvalidQuantum
        );
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field::<i64>("burst_time", Some(" 12 ")), Ok(12));
        assert_eq!(parse_field::<i32>("priority", Some("-4")), Ok(-4));

        let missing = parse_field::<i64>("burst_time", None).unwrap_err();
        assert_eq!(missing.kind, ValidationErrorKind::MissingField);

        let blank = parse_field::<i64>("burst_time", Some("   ")).unwrap_err();
        assert_eq!(blank.kind, ValidationErrorKind::MissingField);

        let bad = parse_field::<i64>("arrival_time", Some("2.5")).unwrap_err();
        assert_eq!(bad.kind, ValidationErrorKind::InvalidNumber);
        assert!(bad.message.contains("arrival_time"));
    }
}
