//! Validation of payloads arriving from the boundary.
//!
//! Each payload is checked in full before any engine is touched, using
//! Stillwater's `Validation` to collect every violation instead of
//! stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use ruleflow::core::Value;
//! use ruleflow::validation::{validate_rule, RuleInput};
//!
//! let input = RuleInput {
//!     name: String::new(),
//!     field: String::new(),
//!     operator: "~".to_string(),
//!     value: Value::Null,
//!     priority: None,
//! };
//!
//! let errors = validate_rule(input).unwrap_err();
//! assert_eq!(errors.len(), 3);
//! ```

pub mod checks;
pub mod inputs;
pub mod violations;

pub use checks::{
    validate_rule, validate_transition, validate_transition_key, validate_trigger,
};
pub use inputs::{EvaluateRequest, RuleInput, TransitionInput, TransitionKeyInput, TriggerInput};
pub use violations::{InputErrors, InputViolation};
