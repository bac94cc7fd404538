//! Best-first (A*) search engine.

use crate::limits::{SearchContext, SearchLimits};
use crate::search::frontier::{Entry, Frontier};
use crate::search::outcome::{SearchFailure, SearchOutcome, SearchStats};
use crate::search::problem::SearchProblem;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use stillwater::validation::Validation;
use tracing::{debug, info, trace, warn};

/// Cost of every edge of the state graph.
const STEP_COST: u32 = 1;

/// A* over a [`SearchProblem`].
///
/// Priorities are `path cost + heuristic`; ties go to the entry inserted
/// first, so two runs over the same problem explore states in the same order
/// and return the same plan. A state reached again by a cheaper path is
/// re-queued rather than adjusted in place, and outdated queue entries are
/// skipped when they surface.
pub struct AStar<'a, P: SearchProblem> {
    problem: P,
    limits: SearchLimits,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, P: SearchProblem> AStar<'a, P> {
    pub fn new(problem: P, limits: SearchLimits) -> Self {
        Self {
            problem,
            limits,
            cancel: None,
        }
    }

    /// Abort the run once `flag` is set. Checked once per iteration.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn run(&self) -> SearchOutcome<P::Action> {
        let mut context = SearchContext::start();
        let mut stats = SearchStats::default();

        let start = self.problem.initial_state();
        let mut frontier = Frontier::new();
        let mut best_cost: HashMap<P::State, u32> = HashMap::new();
        let mut came_from: HashMap<P::State, (P::State, P::Action)> = HashMap::new();

        let h = self.problem.heuristic(&start);
        best_cost.insert(start.clone(), 0);
        frontier.push(start, 0, h);

        info!(
            max_iterations = ?self.limits.max_iterations,
            time_limit = ?self.limits.time_limit,
            initial_estimate = h,
            "Starting search"
        );

        let result = loop {
            if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                warn!(iterations = context.iterations, "Search cancelled");
                break Err(SearchFailure::Cancelled);
            }

            if let Validation::Failure(violations) = self.limits.enforce(&context) {
                let violations: Vec<_> = violations.iter().cloned().collect();
                for violation in &violations {
                    warn!(iterations = context.iterations, "{violation}");
                }
                break Err(SearchFailure::LimitExceeded(violations));
            }

            let Some(entry) = pop_fresh(&mut frontier, &best_cost, &mut stats) else {
                debug!(
                    iterations = context.iterations,
                    seen_states = best_cost.len(),
                    "Search space exhausted"
                );
                break Err(SearchFailure::Exhausted);
            };

            context.iterations += 1;

            if self.limits.progress_due(context.iterations) {
                debug!(
                    iterations = context.iterations,
                    frontier = frontier.len(),
                    seen_states = best_cost.len(),
                    cost = entry.cost,
                    "Search progress"
                );
                self.problem.report_progress(context.iterations, &entry.state);
            }

            if self.problem.is_goal(&entry.state) {
                let plan = reconstruct(&came_from, entry.state);
                info!(
                    plan_length = plan.len(),
                    iterations = context.iterations,
                    seen_states = best_cost.len(),
                    elapsed = ?context.elapsed(),
                    "Plan found"
                );
                break Ok(plan);
            }

            let next_cost = entry.cost + STEP_COST;
            for (action, next) in self.problem.successors(&entry.state) {
                stats.generated += 1;

                match best_cost.get(&next) {
                    Some(&known) if next_cost >= known => continue,
                    Some(_) => stats.improved += 1,
                    None => {}
                }

                let priority = next_cost.saturating_add(self.problem.heuristic(&next));
                best_cost.insert(next.clone(), next_cost);
                came_from.insert(next.clone(), (entry.state.clone(), action));
                frontier.push(next, next_cost, priority);
            }
        };

        stats.iterations = context.iterations;
        stats.seen_states = best_cost.len();
        stats.frontier_peak = frontier.peak();
        stats.elapsed = context.elapsed();

        SearchOutcome { result, stats }
    }
}

/// Pop the next entry whose cost still matches the best known cost of its
/// state, discarding outdated duplicates.
fn pop_fresh<S>(
    frontier: &mut Frontier<S>,
    best_cost: &HashMap<S, u32>,
    stats: &mut SearchStats,
) -> Option<Entry<S>>
where
    S: Eq + std::hash::Hash,
{
    while let Some(entry) = frontier.pop() {
        if best_cost.get(&entry.state).is_some_and(|&best| entry.cost > best) {
            trace!(seq = entry.seq, cost = entry.cost, "Skipping stale entry");
            stats.stale_skipped += 1;
            continue;
        }
        return Some(entry);
    }
    None
}

/// Walk predecessor links back from `goal` and return the actions in
/// execution order.
fn reconstruct<S, A>(came_from: &HashMap<S, (S, A)>, goal: S) -> Vec<A>
where
    S: Clone + Eq + std::hash::Hash,
    A: Clone,
{
    let mut actions = Vec::new();
    let mut current = goal;
    while let Some((previous, action)) = came_from.get(&current) {
        actions.push(action.clone());
        current = previous.clone();
    }
    actions.reverse();
    actions
}
