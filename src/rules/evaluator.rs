//! Rule evaluation against fact mappings.
//!
//! Evaluation never fails as a whole: a rule whose comparison cannot be
//! performed is reported as a non-match carrying the reason.

use crate::core::{Value, ValueError};
use crate::rules::operator::Operator;
use crate::rules::rule::Rule;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// A fact mapping: field name to value.
pub type Facts = BTreeMap<String, Value>;

/// Outcome of applying one rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub id: String,
    pub name: String,
    pub priority: i64,
    pub matched: bool,
    /// Rendering of the comparison performed, or of the error encountered
    pub detail: String,
}

/// Aggregate result of evaluating a rule set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub total_rules: usize,
    pub matched_rules: usize,
    pub results: Vec<RuleOutcome>,
}

/// Apply `operator` to a fact (`left`) and a rule operand (`right`).
///
/// Only the ordering operators can fail; `contains` and `in` answer
/// `false` for operands that are not containers.
pub fn apply(operator: Operator, left: &Value, right: &Value) -> Result<bool, ValueError> {
    let ordering = |accept: fn(Ordering) -> bool| left.try_compare(right).map(accept);

    match operator {
        Operator::Eq => Ok(left == right),
        Operator::Ne => Ok(left != right),
        Operator::Gt => ordering(Ordering::is_gt),
        Operator::Lt => ordering(Ordering::is_lt),
        Operator::Ge => ordering(Ordering::is_ge),
        Operator::Le => ordering(Ordering::is_le),
        Operator::Contains => Ok(!left.is_null() && left.contains(right)),
        Operator::In => Ok(!right.is_null() && right.contains(left)),
    }
}

/// Evaluate a single rule against `facts`.
pub fn evaluate_rule(rule: &Rule, facts: &Facts) -> RuleOutcome {
    let absent = Value::Null;
    let left = facts.get(&rule.field).unwrap_or(&absent);

    let (matched, detail) = match apply(rule.operator, left, &rule.value) {
        Ok(matched) => (
            matched,
            format!(
                "{} {} {} -> {}",
                rule.field, rule.operator, rule.value, matched
            ),
        ),
        Err(err) => (false, format!("Error evaluating '{}': {}", rule.name, err)),
    };

    debug!(rule_id = %rule.id, matched, %detail, "rule evaluated");

    RuleOutcome {
        id: rule.id.clone(),
        name: rule.name.clone(),
        priority: rule.priority,
        matched,
        detail,
    }
}

/// Evaluate rules, already in priority order, against `facts`.
pub fn evaluate(rules: &[Rule], facts: &Facts) -> Evaluation {
    let results: Vec<RuleOutcome> = rules.iter().map(|rule| evaluate_rule(rule, facts)).collect();
    let matched_rules = results.iter().filter(|outcome| outcome.matched).count();

    Evaluation {
        total_rules: results.len(),
        matched_rules,
        results,
    }
}
