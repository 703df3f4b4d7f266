//! In-memory rule collection.

use crate::rules::error::RuleError;
use crate::rules::rule::{NewRule, Rule};
use tracing::{debug, info};

/// Priority assigned to rules created without one.
pub const DEFAULT_PRIORITY: i64 = 100;

/// Owns the live rule set.
///
/// Rules are kept in insertion order; [`list`](Self::list) presents them
/// in evaluation order.
#[derive(Clone, Debug)]
pub struct RuleStore {
    rules: Vec<Rule>,
    default_priority: i64,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore {
    pub fn new() -> Self {
        Self::with_default_priority(DEFAULT_PRIORITY)
    }

    /// Create a store that assigns `priority` to rules created without one.
    pub fn with_default_priority(priority: i64) -> Self {
        Self {
            rules: Vec::new(),
            default_priority: priority,
        }
    }

    /// Store a new rule under a freshly generated id and return it.
    pub fn add(&mut self, new_rule: NewRule) -> Rule {
        let rule = Rule::from_new(new_rule, self.default_priority);
        info!(
            rule_id = %rule.id,
            name = %rule.name,
            priority = rule.priority,
            "rule added"
        );
        self.rules.push(rule.clone());
        rule
    }

    /// Remove the rule with `id` and return it.
    pub fn delete(&mut self, id: &str) -> Result<Rule, RuleError> {
        let index = self
            .rules
            .iter()
            .position(|rule| rule.id == id)
            .ok_or_else(|| RuleError::NotFound { id: id.to_string() })?;
        let removed = self.rules.remove(index);
        info!(rule_id = %removed.id, name = %removed.name, "rule deleted");
        Ok(removed)
    }

    /// Rules sorted ascending by priority, ties kept in insertion order.
    pub fn list(&self) -> Vec<Rule> {
        let mut ordered = self.rules.clone();
        ordered.sort_by_key(|rule| rule.priority);
        debug!(count = ordered.len(), "listing rules");
        ordered
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
