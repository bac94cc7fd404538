//! Enumeration of the legal actions of a state.
//!
//! Candidates are produced in a fixed order (moves, productions, factory
//! returns, flight advance, unloads, loads) and filtered through the guards.
//! The order only decides which of several equally cheap plans the search
//! returns; it never changes the plan cost.

use super::action::Action;
use super::guard;
use super::state::State;
use crate::instance::{Instance, InstanceError};

/// All legal actions of `state`, in generation order.
pub fn legal_actions(instance: &Instance, state: &State) -> Result<Vec<Action>, InstanceError> {
    Ok(candidates(instance, state)?
        .into_iter()
        .filter(|action| guard::is_legal(instance, state, action))
        .collect())
}

/// Raw candidates before legality filtering.
fn candidates(instance: &Instance, state: &State) -> Result<Vec<Action>, InstanceError> {
    let mut actions = Vec::new();

    for (from, _) in state.racks() {
        for jig in state.endpoints(from)? {
            for to in instance.rack_ids().filter(|&to| to != from) {
                actions.push(Action::MoveBetweenRacks { jig, from, to });
            }
        }
    }

    for (from, _) in state.racks() {
        if let Some(jig) = state.factory_side(from)? {
            if state.is_loaded(jig)? && instance.is_scheduled(jig) {
                actions.push(Action::SendToProduction { jig, from });
            }
        }
    }

    for &jig in state.factory() {
        if !state.is_loaded(jig)? {
            for to in instance.rack_ids() {
                actions.push(Action::ReturnEmptyFromFactory { jig, to });
            }
        }
    }

    if state.flight_index() < instance.flights().len() {
        actions.push(Action::AdvanceFlight);
    }

    // Loaded jigs arrive and are unloaded; empty jigs leave and are loaded.
    for &jig in state.transport() {
        if state.is_loaded(jig)? {
            for to in instance.rack_ids() {
                actions.push(Action::UnloadFromTransport { jig, to });
            }
        }
    }

    for (from, _) in state.racks() {
        for jig in state.endpoints(from)? {
            if !state.is_loaded(jig)? {
                actions.push(Action::LoadToTransport { jig, from });
            }
        }
    }

    Ok(actions)
}
