//! Transition function.
//!
//! Applying an action never mutates the source state; the successor is a
//! new value that shares every rack the action did not touch.

use super::action::Action;
use super::guard::{self, IllegalAction};
use super::state::{JigStatus, State};
use crate::instance::{Instance, JigId, RackId};
use std::sync::Arc;

impl State {
    /// Apply an action, returning the successor state.
    ///
    /// The action is checked with [`guard::check`] first; an illegal action
    /// yields its rejection reason and no state.
    pub fn apply(&self, instance: &Instance, action: &Action) -> Result<State, IllegalAction> {
        guard::check(instance, self, action)?;

        let mut next = self.clone();
        match *action {
            Action::MoveBetweenRacks { jig, from, to } => {
                next.take_from_rack(from, jig);
                next.append_to_rack(to, jig);
            }
            Action::LoadToTransport { jig, from } => {
                next.take_from_rack(from, jig);
                next.transport.insert(jig);
            }
            Action::UnloadFromTransport { jig, to } => {
                next.transport.remove(&jig);
                next.append_to_rack(to, jig);
            }
            Action::SendToProduction { jig, from } => {
                next.take_from_rack(from, jig);
                next.factory.insert(jig);
                let status = &mut next.jigs[jig.index()];
                if let Some(part) = status.part {
                    next.produced.insert(part);
                }
                *status = JigStatus {
                    loaded: false,
                    part: None,
                };
            }
            Action::ReturnEmptyFromFactory { jig, to } => {
                next.factory.remove(&jig);
                next.append_to_rack(to, jig);
            }
            Action::AdvanceFlight => {
                next.flight += 1;
            }
        }
        Ok(next)
    }

    // Callers have already checked that `jig` sits at an end of `rack`.
    fn take_from_rack(&mut self, rack: RackId, jig: JigId) {
        let current = &self.racks[rack.index()];
        let remaining: Vec<JigId> = if current.first() == Some(&jig) {
            current[1..].to_vec()
        } else {
            current[..current.len() - 1].to_vec()
        };
        self.racks[rack.index()] = Arc::from(remaining);
    }

    fn append_to_rack(&mut self, rack: RackId, jig: JigId) {
        let mut jigs = self.racks[rack.index()].to_vec();
        jigs.push(jig);
        self.racks[rack.index()] = Arc::from(jigs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Location;
    use crate::instance::PartId;
    use serde_json::json;

    fn instance() -> Instance {
        Instance::from_json_value(json!({
            "jig_types": { "t": { "size_loaded": 2, "size_empty": 1 } },
            "jigs": {
                "a": { "type": "t" },
                "b": { "type": "t" },
                "c": { "type": "t", "empty": true },
                "d": { "type": "t" }
            },
            "racks": [
                { "name": "r0", "size": 10, "jigs": ["a", "b", "c"] },
                { "name": "r1", "size": 10, "jigs": [] }
            ],
            "flights": [
                { "name": "f0", "incoming": ["d"], "outgoing": ["c"] },
                { "name": "f1", "incoming": [], "outgoing": [] }
            ],
            "production_lines": [ { "name": "pl", "schedule": ["a"] } ]
        }))
        .unwrap()
    }

    const A: JigId = JigId(0);
    const C: JigId = JigId(2);
    const D: JigId = JigId(3);
    const R0: RackId = RackId(0);
    const R1: RackId = RackId(1);

    #[test]
    fn move_takes_from_the_matching_end_and_appends() {
        let instance = instance();
        let state = State::initial(&instance);

        let next = state
            .apply(
                &instance,
                &Action::MoveBetweenRacks {
                    jig: C,
                    from: R0,
                    to: R1,
                },
            )
            .unwrap();

        assert_eq!(next.rack(R0).unwrap(), &[A, JigId(1)]);
        assert_eq!(next.rack(R1).unwrap(), &[C]);

        let next = next
            .apply(
                &instance,
                &Action::MoveBetweenRacks {
                    jig: A,
                    from: R0,
                    to: R1,
                },
            )
            .unwrap();
        assert_eq!(next.rack(R0).unwrap(), &[JigId(1)]);
        assert_eq!(next.rack(R1).unwrap(), &[C, A]);
    }

    #[test]
    fn apply_leaves_source_state_untouched() {
        let instance = instance();
        let state = State::initial(&instance);
        let snapshot = state.clone();

        let _ = state
            .apply(&instance, &Action::LoadToTransport { jig: C, from: R0 })
            .unwrap();

        assert_eq!(state, snapshot);
    }

    #[test]
    fn load_and_unload_move_through_transport() {
        let instance = instance();
        let state = State::initial(&instance);

        let loaded = state
            .apply(&instance, &Action::LoadToTransport { jig: C, from: R0 })
            .unwrap();
        assert_eq!(loaded.location(C), Some(Location::Transport));

        let unloaded = loaded
            .apply(&instance, &Action::UnloadFromTransport { jig: D, to: R1 })
            .unwrap();
        assert_eq!(unloaded.location(D), Some(Location::Rack(R1)));
        assert!(!unloaded.transport().contains(&D));
    }

    #[test]
    fn production_empties_jig_and_records_part() {
        let instance = instance();
        let state = State::initial(&instance);

        let next = state
            .apply(&instance, &Action::SendToProduction { jig: A, from: R0 })
            .unwrap();

        assert_eq!(next.location(A), Some(Location::Factory));
        assert!(next.produced().contains(&PartId(0)));
        assert_eq!(
            next.status(A).unwrap(),
            JigStatus {
                loaded: false,
                part: None
            }
        );

        let returned = next
            .apply(&instance, &Action::ReturnEmptyFromFactory { jig: A, to: R1 })
            .unwrap();
        assert_eq!(returned.location(A), Some(Location::Rack(R1)));
        assert!(returned.factory().is_empty());
        // an empty jig takes its empty size back into the rack
        assert_eq!(returned.occupied(&instance, R1).unwrap(), 1);
    }

    #[test]
    fn advance_only_increments_the_flight_index() {
        let instance = instance();
        let state = State::initial(&instance);

        let next = state.apply(&instance, &Action::AdvanceFlight).unwrap();

        assert_eq!(next.flight_index(), 1);
        // incoming jigs of the old flight stay where they were
        assert_eq!(next.transport(), state.transport());
        assert_eq!(next.racks().count(), state.racks().count());
    }

    #[test]
    fn illegal_action_yields_reason_and_no_state() {
        let instance = instance();
        let state = State::initial(&instance);

        let result = state.apply(
            &instance,
            &Action::SendToProduction {
                jig: JigId(1),
                from: R0,
            },
        );
        assert_eq!(
            result,
            Err(IllegalAction::NotFactorySide {
                jig: JigId(1),
                rack: R0
            })
        );
    }

    #[test]
    fn untouched_racks_are_shared() {
        let instance = instance();
        let state = State::initial(&instance);

        let next = state.apply(&instance, &Action::AdvanceFlight).unwrap();

        assert!(Arc::ptr_eq(&state.racks[0], &next.racks[0]));
    }
}
