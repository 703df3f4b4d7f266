//! Validation of boundary payloads.
//!
//! Checks accumulate with `Validation` so a caller sees every problem
//! in a payload at once.

use crate::fsm::Transition;
use crate::rules::{NewRule, Operator};
use crate::validation::inputs::{RuleInput, TransitionInput, TransitionKeyInput, TriggerInput};
use crate::validation::violations::{InputErrors, InputViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single check, carrying the checked value on success
pub type Check<T = ()> = Validation<T, NonEmptyVec<InputViolation>>;

/// Fail when `value` is empty or only whitespace.
pub fn require_non_empty(field: &'static str, value: &str) -> Check {
    if value.trim().is_empty() {
        Validation::fail(InputViolation::EmptyField { field })
    } else {
        Validation::success(())
    }
}

/// Parse `operator`, failing when it is not one of the supported names.
pub fn require_operator(operator: &str) -> Check<Operator> {
    match operator.parse::<Operator>() {
        Ok(parsed) => Validation::success(parsed),
        Err(_) => Validation::fail(InputViolation::UnknownOperator {
            operator: operator.to_string(),
        }),
    }
}

/// Combine checks, keeping ALL failures.
pub fn run_checks(checks: Vec<Check>) -> Result<(), InputErrors> {
    Validation::all_vec(checks)
        .map(|_| ())
        .into_result()
        .map_err(InputErrors::from)
}

/// Validate a rule request into a creation payload.
pub fn validate_rule(input: RuleInput) -> Result<NewRule, InputErrors> {
    let ((_, _), operator) = require_non_empty("name", &input.name)
        .and(require_non_empty("field", &input.field))
        .and(require_operator(&input.operator))
        .into_result()
        .map_err(InputErrors::from)?;

    Ok(NewRule {
        name: input.name,
        field: input.field,
        operator,
        value: input.value,
        priority: input.priority,
    })
}

/// Validate a request to add a transition.
pub fn validate_transition(input: TransitionInput) -> Result<Transition, InputErrors> {
    run_checks(vec![
        require_non_empty("from_state", &input.from_state),
        require_non_empty("event", &input.event),
        require_non_empty("to_state", &input.to_state),
    ])?;
    Ok(Transition::new(input.from_state, input.event, input.to_state))
}

/// Validate the key of a transition to delete.
pub fn validate_transition_key(input: &TransitionKeyInput) -> Result<(), InputErrors> {
    run_checks(vec![
        require_non_empty("from_state", &input.from_state),
        require_non_empty("event", &input.event),
    ])
}

/// Validate an event request. A blank source override means "none".
pub fn validate_trigger(input: TriggerInput) -> Result<(String, Option<String>), InputErrors> {
    run_checks(vec![require_non_empty("event", &input.event)])?;
    let from_state = input.from_state.filter(|s| !s.trim().is_empty());
    Ok((input.event, from_state))
}
