//! Ruleflow: in-memory decision engines
//!
//! Ruleflow offers two independent engines behind one request/response
//! facade:
//!
//! - a **rule engine** that scores fact mappings against a prioritized
//!   set of single-field predicates, and
//! - a **state machine** whose states and transitions are defined at
//!   runtime, driven by events and audited in an append-only history.
//!
//! All state lives in memory and starts empty.
//!
//! # Core Concepts
//!
//! - **Value**: Closed value model for rule operands and facts
//! - **Rules**: Store, operators and a never-failing evaluator
//! - **FSM**: Transition table, derived state set and event history
//! - **Service**: Locked, validated facade over both engines
//!
//! # Example
//!
//! ```rust
//! use ruleflow::core::Value;
//! use ruleflow::validation::{EvaluateRequest, RuleInput};
//! use ruleflow::{DecisionService, EngineConfig};
//!
//! let service = DecisionService::new(EngineConfig::default());
//! service
//!     .add_rule(RuleInput {
//!         name: "adult".to_string(),
//!         field: "age".to_string(),
//!         operator: ">=".to_string(),
//!         value: Value::from(18),
//!         priority: Some(10),
//!     })
//!     .unwrap();
//!
//! let mut request = EvaluateRequest::default();
//! request.facts.insert("age".to_string(), Value::from(30));
//!
//! let evaluation = service.evaluate(&request);
//! assert_eq!(evaluation.total_rules, 1);
//! assert_eq!(evaluation.matched_rules, 1);
//! assert_eq!(evaluation.results[0].detail, "age >= 18 -> true");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod fsm;
pub mod rules;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use config::EngineConfig;
pub use crate::core::{Value, ValueError};
pub use error::{ErrorKind, ServiceError};
pub use fsm::{FsmError, StateMachine, Transition};
pub use rules::{Evaluation, Operator, Rule, RuleError, RuleStore};
pub use service::DecisionService;
