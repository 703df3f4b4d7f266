//! Finite-state-machine engine.
//!
//! States and transitions are defined at runtime. Events drive the
//! current state along the transition table and every applied
//! transition is appended to an audit history.

pub mod error;
mod machine;
mod table;

pub use error::FsmError;
pub use machine::{AppliedTransition, FsmSnapshot, StateMachine};
pub use table::{derive_states, Transition, TransitionTable};
