//! Legality predicates for actions.
//!
//! Guards are pure: they inspect a state and the instance and either accept
//! an action or name the reason it is rejected. A rejection is a filtering
//! outcome, never a panic. The generator drops rejected candidates and the
//! verifier reports the first one it meets.

use super::action::Action;
use super::state::State;
use crate::instance::{Instance, InstanceError, JigId, RackId};
use thiserror::Error;

/// Why an action cannot be applied in a state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("{jig} is not at an end of {rack}")]
    NotAtEndpoint { jig: JigId, rack: RackId },

    #[error("{jig} is not on the factory side of {rack}")]
    NotFactorySide { jig: JigId, rack: RackId },

    #[error("{rack} cannot take {required} more units ({occupied} of {capacity} occupied)")]
    InsufficientCapacity {
        rack: RackId,
        occupied: u32,
        required: u32,
        capacity: u32,
    },

    #[error("{jig} is not in the transport area")]
    NotInTransport { jig: JigId },

    #[error("{jig} is not in the factory")]
    NotInFactory { jig: JigId },

    #[error("{jig} is not loaded")]
    NotLoaded { jig: JigId },

    #[error("{jig} is still loaded")]
    StillLoaded { jig: JigId },

    #[error("{jig} is not on the production schedule")]
    NotScheduled { jig: JigId },

    #[error("{rack} is both source and destination")]
    SameRack { rack: RackId },

    #[error("No flight left to advance past (index {index} of {flights})")]
    NoFlightLeft { index: usize, flights: usize },

    #[error(transparent)]
    Lookup(#[from] InstanceError),
}

/// Check whether `action` may be applied to `state`.
pub fn check(instance: &Instance, state: &State, action: &Action) -> Result<(), IllegalAction> {
    match *action {
        Action::MoveBetweenRacks { jig, from, to } => {
            if from == to {
                return Err(IllegalAction::SameRack { rack: from });
            }
            ensure_at_endpoint(state, jig, from)?;
            ensure_capacity(instance, state, jig, to)
        }
        Action::LoadToTransport { jig, from } => ensure_at_endpoint(state, jig, from),
        Action::UnloadFromTransport { jig, to } => {
            state.status(jig)?;
            if !state.transport().contains(&jig) {
                return Err(IllegalAction::NotInTransport { jig });
            }
            ensure_capacity(instance, state, jig, to)
        }
        Action::SendToProduction { jig, from } => {
            let status = state.status(jig)?;
            if state.factory_side(from)? != Some(jig) {
                return Err(IllegalAction::NotFactorySide { jig, rack: from });
            }
            if !status.loaded {
                return Err(IllegalAction::NotLoaded { jig });
            }
            if !instance.is_scheduled(jig) {
                return Err(IllegalAction::NotScheduled { jig });
            }
            Ok(())
        }
        Action::ReturnEmptyFromFactory { jig, to } => {
            let status = state.status(jig)?;
            if !state.factory().contains(&jig) {
                return Err(IllegalAction::NotInFactory { jig });
            }
            if status.loaded {
                return Err(IllegalAction::StillLoaded { jig });
            }
            ensure_capacity(instance, state, jig, to)
        }
        Action::AdvanceFlight => {
            let flights = instance.flights().len();
            if state.flight_index() >= flights {
                return Err(IllegalAction::NoFlightLeft {
                    index: state.flight_index(),
                    flights,
                });
            }
            Ok(())
        }
    }
}

/// Boolean form of [`check`].
pub fn is_legal(instance: &Instance, state: &State, action: &Action) -> bool {
    check(instance, state, action).is_ok()
}

fn ensure_at_endpoint(state: &State, jig: JigId, rack: RackId) -> Result<(), IllegalAction> {
    state.status(jig)?;
    if !state.is_at_endpoint(rack, jig)? {
        return Err(IllegalAction::NotAtEndpoint { jig, rack });
    }
    Ok(())
}

fn ensure_capacity(
    instance: &Instance,
    state: &State,
    jig: JigId,
    rack: RackId,
) -> Result<(), IllegalAction> {
    let capacity = instance.rack(rack)?.capacity;
    let occupied = state.occupied(instance, rack)?;
    let required = state.jig_size(instance, jig)?;
    if occupied.saturating_add(required) > capacity {
        return Err(IllegalAction::InsufficientCapacity {
            rack,
            occupied,
            required,
            capacity,
        });
    }
    Ok(())
}
