//! The jig planning domain as a [`SearchProblem`].

use crate::core::{legal_actions, Action, State};
use crate::goal;
use crate::heuristic;
use crate::instance::Instance;
use crate::limits::SearchLimits;
use crate::search::{AStar, SearchOutcome, SearchProblem};
use tracing::{debug, trace, warn};

/// Plans over a borrowed, read-only [`Instance`].
#[derive(Clone, Copy, Debug)]
pub struct JigProblem<'a> {
    instance: &'a Instance,
}

impl<'a> JigProblem<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
}

impl SearchProblem for JigProblem<'_> {
    type State = State;
    type Action = Action;

    fn initial_state(&self) -> State {
        State::initial(self.instance)
    }

    fn is_goal(&self, state: &State) -> bool {
        goal::is_goal(self.instance, state)
    }

    fn heuristic(&self, state: &State) -> u32 {
        heuristic::estimate(self.instance, state)
    }

    fn successors(&self, state: &State) -> Vec<(Action, State)> {
        let actions = match legal_actions(self.instance, state) {
            Ok(actions) => actions,
            Err(error) => {
                warn!(%error, "Cannot expand state");
                return Vec::new();
            }
        };

        actions
            .into_iter()
            .filter_map(|action| match state.apply(self.instance, &action) {
                Ok(next) => Some((action, next)),
                Err(reason) => {
                    trace!(action = action.name(), %reason, "Transition rejected");
                    None
                }
            })
            .collect()
    }

    fn report_progress(&self, iteration: u64, state: &State) {
        let progress = goal::progress(self.instance, state);
        debug!(
            iteration,
            flights_processed = progress.flights_processed,
            total_flights = progress.total_flights,
            parts_produced = progress.parts_produced,
            parts_pending = progress.parts_pending,
            "Planning progress"
        );
    }
}

/// Plan from the initial state of `instance` to a goal.
///
/// # Example
///
/// ```rust
/// use jigplan::{solve, Action, Instance, SearchLimits};
///
/// let instance = Instance::from_json_str(r#"{
///     "jig_types": { "t": { "size_loaded": 1, "size_empty": 1 } },
///     "jigs": { "j1": { "type": "t" } },
///     "racks": [ { "name": "r1", "size": 4, "jigs": ["j1"] } ],
///     "flights": [ { "name": "f1", "incoming": [], "outgoing": [] } ],
///     "production_lines": [ { "name": "pl", "schedule": ["j1"] } ]
/// }"#).unwrap();
///
/// let outcome = solve(&instance, SearchLimits::default());
/// let plan = outcome.plan().unwrap();
/// assert_eq!(plan.len(), 2);
/// assert_eq!(plan[1], Action::AdvanceFlight);
/// ```
pub fn solve(instance: &Instance, limits: SearchLimits) -> SearchOutcome<Action> {
    AStar::new(JigProblem::new(instance), limits).run()
}
