//! Plan replay.
//!
//! Replays an action sequence from a start state, checking every step
//! against the guards and every intermediate state against the state
//! invariants, and finally tests the goal.

use crate::core::{Action, IllegalAction, InvariantViolation, State};
use crate::goal::{self, GoalProgress};
use crate::instance::Instance;
use stillwater::validation::Validation;
use tracing::debug;

/// Result of replaying a plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    /// Every step was legal and the final state is a goal.
    Valid { final_state: State },

    /// The action at `step` was rejected in `last_valid`.
    IllegalStep {
        step: usize,
        action: Action,
        reason: IllegalAction,
        last_valid: State,
    },

    /// Applying the action at `step` produced a state that breaks the state
    /// invariants.
    MalformedState {
        step: usize,
        action: Action,
        violations: Vec<InvariantViolation>,
        last_valid: State,
    },

    /// Every step was legal but the final state is not a goal.
    GoalNotReached {
        final_state: State,
        progress: GoalProgress,
    },
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The state reached by the last accepted step.
    pub fn last_state(&self) -> &State {
        match self {
            Self::Valid { final_state } | Self::GoalNotReached { final_state, .. } => final_state,
            Self::IllegalStep { last_valid, .. } | Self::MalformedState { last_valid, .. } => {
                last_valid
            }
        }
    }
}

/// Replay `plan` from `start`.
pub fn replay(instance: &Instance, start: &State, plan: &[Action]) -> Verification {
    let mut state = start.clone();

    for (step, action) in plan.iter().enumerate() {
        let next = match state.apply(instance, action) {
            Ok(next) => next,
            Err(reason) => {
                debug!(step, action = action.name(), %reason, "Illegal plan step");
                return Verification::IllegalStep {
                    step,
                    action: *action,
                    reason,
                    last_valid: state,
                };
            }
        };

        if let Validation::Failure(errors) = next.validate(instance) {
            debug!(
                step,
                action = action.name(),
                violations = errors.len(),
                "Plan step breaks invariants"
            );
            return Verification::MalformedState {
                step,
                action: *action,
                violations: errors.iter().cloned().collect(),
                last_valid: state,
            };
        }

        state = next;
    }

    if goal::is_goal(instance, &state) {
        Verification::Valid { final_state: state }
    } else {
        let progress = goal::progress(instance, &state);
        Verification::GoalNotReached {
            final_state: state,
            progress,
        }
    }
}
