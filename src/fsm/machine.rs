//! Runtime-defined state machine.

use crate::core::{EventHistory, HistoryEntry};
use crate::fsm::error::FsmError;
use crate::fsm::table::{derive_states, Transition, TransitionTable};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Transition applied by [`StateMachine::trigger_event`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedTransition {
    pub from_state: String,
    pub to_state: String,
    pub event: String,
}

/// Read-only projection of the whole machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FsmSnapshot {
    /// Derived states, sorted
    pub states: Vec<String>,
    pub current_state: Option<String>,
    /// All transitions, sorted by `(from_state, event)`
    pub transitions: Vec<Transition>,
    /// Most recent history entries, oldest first
    pub history: Vec<HistoryEntry>,
}

/// State machine whose states and transitions are defined at runtime.
///
/// The state set is never edited directly: it is recomputed from the
/// transition table after every table mutation. The current state is
/// either `None` (no states) or a member of that set.
///
/// # Example
///
/// ```rust
/// use ruleflow::fsm::{StateMachine, Transition};
///
/// let mut machine = StateMachine::new();
/// machine.add_transition(Transition::new("Idle", "start", "Running"));
/// assert_eq!(machine.current_state(), Some("Idle"));
///
/// let applied = machine.trigger_event("start", None).unwrap();
/// assert_eq!(applied.to_state, "Running");
/// assert_eq!(machine.current_state(), Some("Running"));
/// assert_eq!(machine.history().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateMachine {
    states: BTreeSet<String>,
    table: TransitionTable,
    current: Option<String>,
    history: EventHistory,
}

impl StateMachine {
    /// Create an empty machine: no states, no transitions, no current state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `(from, event) -> to`.
    ///
    /// The first transition added to an empty machine makes its source the
    /// current state. Afterwards the current state is kept unless it no
    /// longer exists.
    pub fn add_transition(&mut self, transition: Transition) -> Transition {
        if self.current.is_none() {
            self.current = Some(transition.from_state.clone());
        }
        let previous = self.table.insert(transition.clone());
        self.rebuild_states();

        info!(
            from_state = %transition.from_state,
            event = %transition.event,
            to_state = %transition.to_state,
            replaced = ?previous,
            "transition added"
        );
        transition
    }

    /// Remove the transition keyed by `(from_state, event)`.
    pub fn delete_transition(
        &mut self,
        from_state: &str,
        event: &str,
    ) -> Result<Transition, FsmError> {
        let removed =
            self.table
                .remove(from_state, event)
                .ok_or_else(|| FsmError::TransitionNotFound {
                    from_state: from_state.to_string(),
                    event: event.to_string(),
                })?;
        self.rebuild_states();

        info!(
            from_state = %removed.from_state,
            event = %removed.event,
            current_state = ?self.current,
            "transition deleted"
        );
        Ok(removed)
    }

    /// Remove every transition; returns how many were removed.
    pub fn delete_all_transitions(&mut self) -> usize {
        let removed = self.table.clear();
        self.rebuild_states();
        info!(removed, "all transitions deleted");
        removed
    }

    /// Fire `event` from `from_override`, or from the current state.
    ///
    /// On success the current state moves to the mapped destination and a
    /// history entry is appended. On failure nothing changes.
    pub fn trigger_event(
        &mut self,
        event: &str,
        from_override: Option<&str>,
    ) -> Result<AppliedTransition, FsmError> {
        let source = match from_override.or(self.current.as_deref()) {
            Some(source) => source.to_string(),
            None => {
                warn!(event, "event rejected: no current state");
                return Err(FsmError::CurrentStateUnset);
            }
        };

        if !self.states.contains(&source) {
            warn!(event, state = %source, "event rejected: unknown state");
            return Err(FsmError::UnknownState { state: source });
        }

        let Some(target) = self.table.target(&source, event).map(str::to_string) else {
            warn!(event, state = %source, "event rejected: no transition");
            return Err(FsmError::NoSuchTransition {
                state: source,
                event: event.to_string(),
            });
        };

        self.current = Some(target.clone());
        let seq = self.history.record(event, &source, &target, Utc::now()).seq;

        info!(seq, event, from_state = %source, to_state = %target, "transition applied");
        Ok(AppliedTransition {
            from_state: source,
            to_state: target,
            event: event.to_string(),
        })
    }

    /// Empty the history and restart its sequence. States, transitions and
    /// the current state are untouched. Returns the number of entries removed.
    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.clear();
        info!(removed, "history cleared");
        removed
    }

    /// Return to the empty configuration.
    pub fn reset(&mut self) {
        self.table.clear();
        self.states.clear();
        self.current = None;
        self.history.clear();
        info!("state machine reset");
    }

    /// Project the machine, including at most `history_window` recent entries.
    pub fn snapshot(&self, history_window: usize) -> FsmSnapshot {
        debug!(
            states = self.states.len(),
            transitions = self.table.len(),
            "fsm snapshot"
        );
        FsmSnapshot {
            states: self.states.iter().cloned().collect(),
            current_state: self.current.clone(),
            transitions: self.table.iter().collect(),
            history: self.history.recent(history_window).to_vec(),
        }
    }

    pub fn states(&self) -> &BTreeSet<String> {
        &self.states
    }

    pub fn current_state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.table
    }

    pub fn history(&self) -> &EventHistory {
        &self.history
    }

    /// True when no transitions are defined.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Recompute the state set and repair the current state.
    ///
    /// A current state that vanished falls back to the smallest remaining
    /// state, or `None` when there are no states left.
    fn rebuild_states(&mut self) {
        self.states = derive_states(&self.table);

        let valid = self
            .current
            .as_ref()
            .is_some_and(|current| self.states.contains(current));
        if !valid {
            let fallback = self.states.first().cloned();
            if self.current.is_some() {
                debug!(from = ?self.current, to = ?fallback, "current state reassigned");
            }
            self.current = fallback;
        }
    }
}
