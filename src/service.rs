//! Thread-safe facade over both engines.
//!
//! The service owns the rule store and the state machine, each behind its
//! own lock. Every operation runs inside a single lock guard, so mutations
//! are atomic and reads never observe a half-applied change. Payloads are
//! validated before any lock is taken.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::fsm::{FsmSnapshot, StateMachine, Transition};
use crate::rules::{evaluate, Evaluation, Rule, RuleStore};
use crate::validation::{
    validate_rule, validate_transition, validate_transition_key, validate_trigger,
    EvaluateRequest, RuleInput, TransitionInput, TransitionKeyInput, TriggerInput,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub service: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleList {
    pub rules: Vec<Rule>,
}

/// Response for rule creation and deletion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleChanged {
    pub message: String,
    pub rule: Rule,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionAdded {
    pub message: String,
    pub transition: Transition,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionDeleted {
    pub message: String,
    pub transition: Transition,
    pub current_state: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionsCleared {
    pub message: String,
    pub removed_transitions: usize,
    pub current_state: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryCleared {
    pub message: String,
    pub removed_history: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventApplied {
    pub message: String,
    pub from_state: String,
    pub to_state: String,
    pub event: String,
    pub current_state: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FsmReset {
    pub message: String,
    pub current_state: Option<String>,
}

/// Rule engine and state machine behind one request/response surface.
///
/// Construct once at startup and share it (for example as
/// `Arc<DecisionService>`) with whatever adapter exposes it.
///
/// # Example
///
/// ```rust
/// use ruleflow::validation::{TransitionInput, TriggerInput};
/// use ruleflow::{DecisionService, EngineConfig};
///
/// let service = DecisionService::new(EngineConfig::default());
/// service
///     .add_transition(TransitionInput {
///         from_state: "Draft".to_string(),
///         event: "submit".to_string(),
///         to_state: "Review".to_string(),
///     })
///     .unwrap();
///
/// let applied = service
///     .trigger_event(TriggerInput {
///         event: "submit".to_string(),
///         from_state: None,
///     })
///     .unwrap();
/// assert_eq!(applied.current_state.as_deref(), Some("Review"));
/// ```
#[derive(Debug)]
pub struct DecisionService {
    config: EngineConfig,
    rules: RwLock<RuleStore>,
    fsm: RwLock<StateMachine>,
}

impl Default for DecisionService {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl DecisionService {
    /// Build a service with empty engines.
    pub fn new(config: EngineConfig) -> Self {
        info!(
            service = %config.service_name,
            default_priority = config.default_priority,
            history_window = config.history_window,
            "decision service started"
        );
        Self {
            rules: RwLock::new(RuleStore::with_default_priority(config.default_priority)),
            fsm: RwLock::new(StateMachine::new()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn health(&self) -> Health {
        Health {
            status: "ok".to_string(),
            service: self.config.service_name.clone(),
        }
    }

    pub fn list_rules(&self) -> RuleList {
        RuleList {
            rules: self.rules.read().list(),
        }
    }

    pub fn add_rule(&self, input: RuleInput) -> Result<RuleChanged> {
        let new_rule = validate_rule(input)?;
        let rule = self.rules.write().add(new_rule);
        Ok(RuleChanged {
            message: "Rule added".to_string(),
            rule,
        })
    }

    pub fn delete_rule(&self, id: &str) -> Result<RuleChanged> {
        let rule = self.rules.write().delete(id)?;
        Ok(RuleChanged {
            message: "Rule deleted".to_string(),
            rule,
        })
    }

    /// Evaluate every rule, in priority order, against the request's facts.
    pub fn evaluate(&self, request: &EvaluateRequest) -> Evaluation {
        let rules = self.rules.read();
        let evaluation = evaluate(&rules.list(), &request.facts);
        debug!(
            total = evaluation.total_rules,
            matched = evaluation.matched_rules,
            "rules evaluated"
        );
        evaluation
    }

    pub fn get_fsm(&self) -> FsmSnapshot {
        self.fsm.read().snapshot(self.config.history_window)
    }

    pub fn add_transition(&self, input: TransitionInput) -> Result<TransitionAdded> {
        let transition = validate_transition(input)?;
        let transition = self.fsm.write().add_transition(transition);
        Ok(TransitionAdded {
            message: "Transition added".to_string(),
            transition,
        })
    }

    pub fn delete_transition(&self, input: TransitionKeyInput) -> Result<TransitionDeleted> {
        validate_transition_key(&input)?;
        let mut fsm = self.fsm.write();
        let transition = fsm.delete_transition(&input.from_state, &input.event)?;
        Ok(TransitionDeleted {
            message: "Transition deleted".to_string(),
            transition,
            current_state: fsm.current_state().map(str::to_string),
        })
    }

    pub fn delete_all_transitions(&self) -> TransitionsCleared {
        let mut fsm = self.fsm.write();
        let removed_transitions = fsm.delete_all_transitions();
        TransitionsCleared {
            message: "All transitions deleted".to_string(),
            removed_transitions,
            current_state: fsm.current_state().map(str::to_string),
        }
    }

    pub fn clear_history(&self) -> HistoryCleared {
        let removed_history = self.fsm.write().clear_history();
        HistoryCleared {
            message: "FSM history cleared".to_string(),
            removed_history,
        }
    }

    pub fn trigger_event(&self, input: TriggerInput) -> Result<EventApplied> {
        let (event, from_state) = validate_trigger(input)?;
        let mut fsm = self.fsm.write();
        let applied = fsm.trigger_event(&event, from_state.as_deref())?;
        Ok(EventApplied {
            message: "Transition applied".to_string(),
            from_state: applied.from_state,
            to_state: applied.to_state,
            event: applied.event,
            current_state: fsm.current_state().map(str::to_string),
        })
    }

    pub fn reset_fsm(&self) -> FsmReset {
        let mut fsm = self.fsm.write();
        fsm.reset();
        FsmReset {
            message: "FSM reset".to_string(),
            current_state: fsm.current_state().map(str::to_string),
        }
    }
}
