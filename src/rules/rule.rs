//! Rule definitions.

use crate::builder::RuleBuilder;
use crate::core::Value;
use crate::rules::operator::Operator;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, prioritized predicate over a single fact field.
///
/// Rules are immutable once stored: they are created by
/// [`RuleStore::add`](crate::rules::RuleStore::add) and removed by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier assigned at creation
    pub id: String,
    /// Display label
    pub name: String,
    /// Fact key the rule looks up
    pub field: String,
    pub operator: Operator,
    /// Right-hand operand of the comparison
    pub value: Value,
    /// Lower values are evaluated first
    pub priority: i64,
}

/// Validated payload for creating a rule.
///
/// The store assigns the id; a missing priority falls back to the
/// configured default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRule {
    pub name: String,
    pub field: String,
    pub operator: Operator,
    pub value: Value,
    pub priority: Option<i64>,
}

impl Rule {
    /// Start building a rule with a fluent API.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ruleflow::rules::{Operator, Rule};
    ///
    /// let new_rule = Rule::builder("adult")
    ///     .field("age")
    ///     .operator(Operator::Ge)
    ///     .value(18)
    ///     .priority(10)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(new_rule.field, "age");
    /// assert_eq!(new_rule.priority, Some(10));
    /// ```
    pub fn builder(name: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(name)
    }

    pub(crate) fn from_new(new_rule: NewRule, default_priority: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new_rule.name,
            field: new_rule.field,
            operator: new_rule.operator,
            value: new_rule.value,
            priority: new_rule.priority.unwrap_or(default_priority),
        }
    }
}
