//! Comparison operators available to rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed operator set a rule can apply to a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Equal (==)
    #[serde(alias = "==")]
    Eq,
    /// Not equal (!=)
    #[serde(alias = "!=")]
    Ne,
    /// Greater than (>)
    #[serde(alias = ">")]
    Gt,
    /// Less than (<)
    #[serde(alias = "<")]
    Lt,
    /// Greater than or equal (>=)
    #[serde(alias = ">=")]
    Ge,
    /// Less than or equal (<=)
    #[serde(alias = "<=")]
    Le,
    /// Rule value is an element or substring of the fact
    Contains,
    /// Fact is an element or substring of the rule value
    In,
}

/// Raised when an operator name is not part of the fixed set.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unsupported operator: {0}")]
pub struct UnknownOperator(pub String);

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Lt,
        Operator::Ge,
        Operator::Le,
        Operator::Contains,
        Operator::In,
    ];

    /// Canonical name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Ge => "ge",
            Operator::Le => "le",
            Operator::Contains => "contains",
            Operator::In => "in",
        }
    }

    /// Spelling used in human-readable detail messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Contains => "contains",
            Operator::In => "in",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s || op.symbol() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
