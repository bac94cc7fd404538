//! The problem abstraction the engine searches over.

use std::hash::Hash;

/// An implicit state graph with unit edge costs.
///
/// States are keys of the engine's bookkeeping maps, so they must carry
/// full structural equality and hashing.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated number of actions from `state` to a goal.
    fn heuristic(&self, state: &Self::State) -> u32;

    /// Every legal action of `state` together with its successor, in a
    /// deterministic order.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Called every `progress_interval` expansions. Must not affect the search.
    fn report_progress(&self, _iteration: u64, _state: &Self::State) {}
}
