//! Errors surfaced by the service facade.

use crate::fsm::FsmError;
use crate::rules::RuleError;
use crate::validation::InputErrors;
use thiserror::Error;

/// Broad class of a failure, for mapping onto client-error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed payload, rejected before reaching an engine
    Validation,
    /// Referenced rule or transition does not exist
    NotFound,
    /// Event cannot be applied in the current configuration
    InvalidState,
}

/// Any error a service operation can return.
///
/// All of them are recoverable outcomes of a single call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Invalid(#[from] InputErrors),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Fsm(#[from] FsmError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Invalid(_) => ErrorKind::Validation,
            ServiceError::Rule(RuleError::NotFound { .. }) => ErrorKind::NotFound,
            ServiceError::Fsm(err) if err.is_not_found() => ErrorKind::NotFound,
            ServiceError::Fsm(_) => ErrorKind::InvalidState,
        }
    }
}

/// Result alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
