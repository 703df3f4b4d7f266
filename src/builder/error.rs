//! Build errors for the rule builder.

use thiserror::Error;

/// Errors that can occur when building rules.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Rule name must not be empty")]
    EmptyName,

    #[error("Rule field not specified. Call .field(name)")]
    MissingField,

    #[error("Rule operator not specified. Call .operator(op)")]
    MissingOperator,

    #[error("Rule value not specified. Call .value(v)")]
    MissingValue,
}
