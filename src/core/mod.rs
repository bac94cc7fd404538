//! State and action model.
//!
//! This module contains the pure core of the planner:
//! - the immutable [`State`] value and its invariants
//! - the [`Action`] sum type over the six action kinds
//! - guard predicates deciding legality
//! - the transition function producing successor states
//! - the generator enumerating all legal actions of a state
//!
//! Nothing here has side effects; every function is a computation over
//! read-only inputs.

mod action;
pub mod generator;
pub mod guard;
mod state;
mod transition;

pub use action::Action;
pub use generator::legal_actions;
pub use guard::IllegalAction;
pub use state::{InvariantViolation, JigStatus, Location, State};
