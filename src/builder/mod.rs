//! Builder API for ergonomic rule construction.
//!
//! Builders validate required parts up front so that only complete
//! payloads reach the rule store.

pub mod error;
pub mod rule;

pub use error::BuildError;
pub use rule::RuleBuilder;
