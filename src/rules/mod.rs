//! Rule store and evaluator.
//!
//! Rules are prioritized predicates over a single fact field. The store
//! owns the collection; evaluation is a pure function over the ordered
//! rules and a fact mapping.
//!
//! # Example
//!
//! ```rust
//! use ruleflow::core::Value;
//! use ruleflow::rules::{evaluate, Facts, Operator, Rule, RuleStore};
//!
//! let mut store = RuleStore::new();
//! store.add(
//!     Rule::builder("big order")
//!         .field("amount")
//!         .operator(Operator::Gt)
//!         .value(1000)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let mut facts = Facts::new();
//! facts.insert("amount".to_string(), Value::from(2500));
//!
//! let evaluation = evaluate(&store.list(), &facts);
//! assert_eq!(evaluation.matched_rules, 1);
//! ```

pub mod error;
mod evaluator;
mod operator;
mod rule;
mod store;

pub use error::RuleError;
pub use evaluator::{apply, evaluate, evaluate_rule, Evaluation, Facts, RuleOutcome};
pub use operator::{Operator, UnknownOperator};
pub use rule::{NewRule, Rule};
pub use store::{RuleStore, DEFAULT_PRIORITY};
