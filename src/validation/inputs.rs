//! Payloads accepted at the boundary, before validation.

use crate::core::Value;
use crate::rules::Facts;
use serde::{Deserialize, Serialize};

/// Request to create a rule. The operator is still free text here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleInput {
    pub name: String,
    pub field: String,
    pub operator: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub priority: Option<i64>,
}

/// Request to evaluate all rules against a fact mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub facts: Facts,
}

/// Request to add a transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionInput {
    pub from_state: String,
    pub event: String,
    pub to_state: String,
}

/// Key of a transition to delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionKeyInput {
    pub from_state: String,
    pub event: String,
}

/// Request to fire an event, optionally from an explicit source state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerInput {
    pub event: String,
    #[serde(default)]
    pub from_state: Option<String>,
}
