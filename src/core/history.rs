//! Audit history of applied state transitions.
//!
//! The log is append-only: entries are never edited, only added or
//! dropped all at once by [`EventHistory::clear`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Kind of action recorded in the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    /// An event moved the machine from one state to another
    Event,
}

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use ruleflow::core::{EventHistory, HistoryAction};
/// use chrono::Utc;
///
/// let mut history = EventHistory::new();
/// let entry = history.record("go", "Idle", "Running", Utc::now());
///
/// assert_eq!(entry.seq, 1);
/// assert_eq!(entry.action, HistoryAction::Event);
/// assert_eq!(entry.state, "Running");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Position in the log, starting at 1 after each clear
    pub seq: u64,
    pub action: HistoryAction,
    /// State the machine was left in
    pub state: String,
    pub event: String,
    pub from_state: String,
    pub to_state: String,
    /// When the transition was applied
    #[serde(alias = "at")]
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only log of applied transitions.
///
/// All entries are retained until [`clear`](Self::clear); read queries
/// usually look at the most recent few through [`recent`](Self::recent).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventHistory {
    entries: Vec<HistoryEntry>,
    counter: u64,
}

impl EventHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for an applied transition and return it.
    ///
    /// The sequence number is one past the previous entry's.
    pub fn record(
        &mut self,
        event: &str,
        from_state: &str,
        to_state: &str,
        timestamp: DateTime<Utc>,
    ) -> &HistoryEntry {
        self.counter += 1;
        self.entries.push(HistoryEntry {
            seq: self.counter,
            action: HistoryAction::Event,
            state: to_state.to_string(),
            event: event.to_string(),
            from_state: from_state.to_string(),
            to_state: to_state.to_string(),
            timestamp,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Drop every entry and restart the sequence at zero.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.counter = 0;
        removed
    }

    /// The most recent `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    /// Get all entries in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Sequence number of the last recorded entry, zero when none.
    pub fn last_seq(&self) -> u64 {
        self.counter
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// States traversed: the first entry's source, then every destination.
    ///
    /// When an event fired from an explicit override the path is not
    /// contiguous; it still lists what each entry recorded.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.first() {
            path.push(first.from_state.as_str());
        }
        for entry in &self.entries {
            path.push(entry.to_state.as_str());
        }
        path
    }

    /// Time elapsed between the first and last entry.
    ///
    /// Returns `None` when the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }
}
