//! Core data types shared by both engines.
//!
//! This module contains the pure building blocks:
//! - The closed `Value` model used for rule operands and facts
//! - The append-only event history of the state machine
//!
//! Nothing in here locks, logs or allocates ids; that happens in the
//! engines and the service built on top.

mod history;
mod value;

pub use history::{EventHistory, HistoryAction, HistoryEntry};
pub use value::{Value, ValueError};
