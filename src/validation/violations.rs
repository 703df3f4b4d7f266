//! Input violations reported by boundary validation.

use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found in an input payload
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputViolation {
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("unsupported operator '{operator}'")]
    UnknownOperator { operator: String },
}

/// Every violation found in one payload, in the order checks ran.
///
/// Always holds at least one violation.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid input: {}", join_violations(.0))]
pub struct InputErrors(NonEmptyVec<InputViolation>);

impl InputErrors {
    pub fn new(violations: NonEmptyVec<InputViolation>) -> Self {
        Self(violations)
    }

    pub fn single(violation: InputViolation) -> Self {
        Self(NonEmptyVec::singleton(violation))
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputViolation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_violations(self) -> Vec<InputViolation> {
        self.0.into_vec()
    }
}

impl From<NonEmptyVec<InputViolation>> for InputErrors {
    fn from(violations: NonEmptyVec<InputViolation>) -> Self {
        Self(violations)
    }
}

fn join_violations(violations: &NonEmptyVec<InputViolation>) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
