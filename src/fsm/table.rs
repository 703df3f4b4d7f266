//! Transition table and the state set derived from it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single `(from_state, event) -> to_state` mapping.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from_state: String,
    pub event: String,
    pub to_state: String,
}

impl Transition {
    pub fn new(
        from_state: impl Into<String>,
        event: impl Into<String>,
        to_state: impl Into<String>,
    ) -> Self {
        Self {
            from_state: from_state.into(),
            event: event.into(),
            to_state: to_state.into(),
        }
    }
}

/// Mapping from `(from_state, event)` to a destination state.
///
/// Each key has exactly one destination; inserting an existing key
/// replaces it. Iteration is ordered by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    entries: BTreeMap<(String, String), String>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a mapping, returning the previous destination.
    pub fn insert(&mut self, transition: Transition) -> Option<String> {
        self.entries
            .insert((transition.from_state, transition.event), transition.to_state)
    }

    /// Remove a mapping, returning it if present.
    pub fn remove(&mut self, from_state: &str, event: &str) -> Option<Transition> {
        let key = (from_state.to_string(), event.to_string());
        self.entries
            .remove_entry(&key)
            .map(|((from_state, event), to_state)| Transition {
                from_state,
                event,
                to_state,
            })
    }

    /// Remove every mapping, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Destination for `event` fired in `from_state`.
    pub fn target(&self, from_state: &str, event: &str) -> Option<&str> {
        // BTreeMap lookups on tuple keys need an owned key.
        self.entries
            .get(&(from_state.to_string(), event.to_string()))
            .map(String::as_str)
    }

    /// All mappings, sorted by `(from_state, event)`.
    pub fn iter(&self) -> impl Iterator<Item = Transition> + '_ {
        self.entries
            .iter()
            .map(|((from_state, event), to_state)| Transition::new(from_state, event, to_state))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every state mentioned by the table, as source or destination.
pub fn derive_states(table: &TransitionTable) -> BTreeSet<String> {
    let mut states = BTreeSet::new();
    for ((from_state, _), to_state) in &table.entries {
        states.insert(from_state.clone());
        states.insert(to_state.clone());
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_same_key() {
        let mut table = TransitionTable::new();
        assert_eq!(table.insert(Transition::new("A", "go", "B")), None);
        assert_eq!(
            table.insert(Transition::new("A", "go", "C")),
            Some("B".to_string())
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.target("A", "go"), Some("C"));
    }

    #[test]
    fn remove_returns_full_transition() {
        let mut table = TransitionTable::new();
        table.insert(Transition::new("A", "go", "B"));

        assert_eq!(table.remove("A", "go"), Some(Transition::new("A", "go", "B")));
        assert_eq!(table.remove("A", "go"), None);
        assert!(table.is_empty());
    }

    #[test]
    fn iteration_is_sorted_by_key() {
        let mut table = TransitionTable::new();
        table.insert(Transition::new("B", "a", "A"));
        table.insert(Transition::new("A", "z", "B"));
        table.insert(Transition::new("A", "b", "C"));

        let keys: Vec<_> = table
            .iter()
            .map(|t| (t.from_state, t.event))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("A".to_string(), "b".to_string()),
                ("A".to_string(), "z".to_string()),
                ("B".to_string(), "a".to_string()),
            ]
        );
    }

    #[test]
    fn derive_states_is_union_of_endpoints() {
        let mut table = TransitionTable::new();
        assert!(derive_states(&table).is_empty());

        table.insert(Transition::new("A", "go", "B"));
        table.insert(Transition::new("B", "back", "A"));
        table.insert(Transition::new("C", "jump", "C"));

        let states: Vec<_> = derive_states(&table).into_iter().collect();
        assert_eq!(states, vec!["A", "B", "C"]);
    }

    #[test]
    fn clear_reports_count() {
        let mut table = TransitionTable::new();
        table.insert(Transition::new("A", "go", "B"));
        table.insert(Transition::new("B", "go", "A"));
        assert_eq!(table.clear(), 2);
        assert_eq!(table.clear(), 0);
    }
}
