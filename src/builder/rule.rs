//! Builder for constructing rules.

use crate::builder::error::BuildError;
use crate::core::Value;
use crate::rules::{NewRule, Operator};

/// Builder for constructing rule payloads with a fluent API.
#[derive(Clone, Debug)]
pub struct RuleBuilder {
    name: String,
    field: Option<String>,
    operator: Option<Operator>,
    value: Option<Value>,
    priority: Option<i64>,
}

impl RuleBuilder {
    /// Create a new builder for a rule called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: None,
            operator: None,
            value: None,
            priority: None,
        }
    }

    /// Set the fact field to inspect (required).
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set the comparison operator (required).
    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Set the right-hand operand (required, may be `Value::Null`).
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the priority (optional). Lower runs first.
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Build the rule payload, validating required parts.
    pub fn build(self) -> Result<NewRule, BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::EmptyName);
        }
        let field = self
            .field
            .filter(|f| !f.trim().is_empty())
            .ok_or(BuildError::MissingField)?;
        let operator = self.operator.ok_or(BuildError::MissingOperator)?;
        let value = self.value.ok_or(BuildError::MissingValue)?;

        Ok(NewRule {
            name: self.name,
            field,
            operator,
            value,
            priority: self.priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_complete_rule() {
        let rule = RuleBuilder::new("vip")
            .field("tier")
            .operator(Operator::In)
            .value(vec!["gold", "platinum"])
            .priority(5)
            .build()
            .unwrap();

        assert_eq!(rule.name, "vip");
        assert_eq!(rule.field, "tier");
        assert_eq!(rule.operator, Operator::In);
        assert_eq!(rule.value, Value::from(vec!["gold", "platinum"]));
        assert_eq!(rule.priority, Some(5));
    }

    #[test]
    fn priority_is_optional() {
        let rule = RuleBuilder::new("r")
            .field("x")
            .operator(Operator::Eq)
            .value(Value::Null)
            .build()
            .unwrap();
        assert_eq!(rule.priority, None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = RuleBuilder::new("  ")
            .field("x")
            .operator(Operator::Eq)
            .value(1)
            .build();
        assert_eq!(result, Err(BuildError::EmptyName));
    }

    #[test]
    fn missing_parts_are_reported() {
        assert_eq!(
            RuleBuilder::new("r").operator(Operator::Eq).value(1).build(),
            Err(BuildError::MissingField)
        );
        assert_eq!(
            RuleBuilder::new("r").field("x").value(1).build(),
            Err(BuildError::MissingOperator)
        );
        assert_eq!(
            RuleBuilder::new("r").field("x").operator(Operator::Eq).build(),
            Err(BuildError::MissingValue)
        );
    }

    #[test]
    fn blank_field_counts_as_missing() {
        let result = RuleBuilder::new("r")
            .field("")
            .operator(Operator::Eq)
            .value(1)
            .build();
        assert_eq!(result, Err(BuildError::MissingField));
    }
}
