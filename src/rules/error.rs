//! Rule store errors.

use thiserror::Error;

/// Errors that can occur when managing the rule collection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleError {
    #[error("Rule not found")]
    NotFound { id: String },
}
