//! Generic best-first search.
//!
//! The engine knows nothing about jigs or racks: it runs over any
//! [`SearchProblem`] with unit edge costs. Its only mutable resources are the
//! frontier and the best-cost and predecessor maps, all confined to one
//! [`AStar::run`] call.

pub mod engine;
mod frontier;
pub mod outcome;
pub mod problem;

pub use engine::AStar;
pub use outcome::{SearchFailure, SearchOutcome, SearchStats};
pub use problem::SearchProblem;
