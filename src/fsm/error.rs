//! State machine errors.

use thiserror::Error;

/// Errors that can occur when editing or driving the state machine.
///
/// None of these leave the machine partially modified.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FsmError {
    #[error("Transition not found")]
    TransitionNotFound { from_state: String, event: String },

    #[error("Current state is not set. Add a transition first.")]
    CurrentStateUnset,

    #[error("State '{state}' does not exist in FSM.")]
    UnknownState { state: String },

    #[error("No transition for state '{state}' on event '{event}'")]
    NoSuchTransition { state: String, event: String },
}

impl FsmError {
    /// True when the error refers to something that does not exist,
    /// as opposed to an event that cannot be applied.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsmError::TransitionNotFound { .. })
    }
}
