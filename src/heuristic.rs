//! Remaining-cost estimate.
//!
//! The estimate is the sum of five lower-bound terms, each counting actions
//! that still have to happen. It is intended to be admissible but is not
//! proven so; treat it as a guide for the search, not a guarantee.

use crate::core::State;
use crate::instance::Instance;
use serde::Serialize;

/// The five terms of the estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HeuristicBreakdown {
    /// (a) incoming jigs of the active flight still in the transport area.
    pub incoming_pending: u32,
    /// (b) scheduled jigs still loaded with an unproduced part.
    pub parts_pending: u32,
    /// (c) outgoing jigs of the active and later flights not yet in transport.
    pub outgoing_pending: u32,
    /// (d) flight advances left.
    pub flights_remaining: u32,
    /// (e) two per scheduled, still loaded jig buried inside a rack.
    pub buried_penalty: u32,
}

impl HeuristicBreakdown {
    pub fn total(&self) -> u32 {
        self.incoming_pending
            + self.parts_pending
            + self.outgoing_pending
            + self.flights_remaining
            + self.buried_penalty
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

/// Cost charged for a buried jig: one swap plus the final move.
const BURIED_COST: u32 = 2;

/// Compute every term of the estimate for `state`.
pub fn breakdown(instance: &Instance, state: &State) -> HeuristicBreakdown {
    let flights = instance.flights();
    let index = state.flight_index();

    let incoming_pending = flights
        .get(index)
        .map(|flight| {
            flight
                .incoming
                .iter()
                .filter(|&jig| state.transport().contains(jig))
                .count()
        })
        .unwrap_or(0);

    let outgoing_pending: usize = flights
        .iter()
        .skip(index)
        .map(|flight| {
            flight
                .outgoing
                .iter()
                .filter(|&jig| !state.transport().contains(jig))
                .count()
        })
        .sum();

    let pending: Vec<_> = instance
        .schedule()
        .iter()
        .copied()
        .filter(|&jig| {
            state.status(jig).is_ok_and(|status| {
                status.loaded
                    && status
                        .part
                        .is_some_and(|part| !state.produced().contains(&part))
            })
        })
        .collect();

    let buried = pending.iter().filter(|&&jig| state.is_buried(jig)).count();

    HeuristicBreakdown {
        incoming_pending: count(incoming_pending),
        parts_pending: count(pending.len()),
        outgoing_pending: count(outgoing_pending),
        flights_remaining: count(flights.len().saturating_sub(index)),
        buried_penalty: count(buried).saturating_mul(BURIED_COST),
    }
}

/// Total estimated remaining cost of `state`.
pub fn estimate(instance: &Instance, state: &State) -> u32 {
    breakdown(instance, state).total()
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;
    use crate::instance::{JigId, RackId};
    use serde_json::json;

    // r0 = [a, s, b] with s scheduled and buried; d incoming on f0;
    // e outgoing on f1.
    fn instance() -> Instance {
        Instance::from_json_value(json!({
            "jig_types": { "t": { "size_loaded": 1, "size_empty": 1 } },
            "jigs": {
                "a": { "type": "t" },
                "b": { "type": "t" },
                "d": { "type": "t" },
                "e": { "type": "t", "empty": true },
                "s": { "type": "t" }
            },
            "racks": [
                { "name": "r0", "size": 10, "jigs": ["a", "s", "b"] },
                { "name": "r1", "size": 10, "jigs": ["e"] }
            ],
            "flights": [
                { "name": "f0", "incoming": ["d"], "outgoing": [] },
                { "name": "f1", "incoming": [], "outgoing": ["e"] }
            ],
            "production_lines": [ { "name": "pl", "schedule": ["s"] } ]
        }))
        .unwrap()
    }

    const A: JigId = JigId(0);
    const D: JigId = JigId(2);
    const E: JigId = JigId(3);
    const S: JigId = JigId(4);
    const R0: RackId = RackId(0);
    const R1: RackId = RackId(1);

    #[test]
    fn initial_breakdown_counts_every_term() {
        let instance = instance();
        let state = State::initial(&instance);

        assert_eq!(
            breakdown(&instance, &state),
            HeuristicBreakdown {
                incoming_pending: 1,
                parts_pending: 1,
                outgoing_pending: 1,
                flights_remaining: 2,
                buried_penalty: 2,
            }
        );
        assert_eq!(estimate(&instance, &state), 7);
    }

    #[test]
    fn unloading_incoming_jig_clears_term_a() {
        let instance = instance();
        let state = State::initial(&instance)
            .apply(&instance, &Action::UnloadFromTransport { jig: D, to: R1 })
            .unwrap();

        assert_eq!(breakdown(&instance, &state).incoming_pending, 0);
    }

    #[test]
    fn uncovering_scheduled_jig_clears_buried_penalty() {
        let instance = instance();
        let state = State::initial(&instance)
            .apply(
                &instance,
                &Action::MoveBetweenRacks {
                    jig: A,
                    from: R0,
                    to: R1,
                },
            )
            .unwrap();

        let terms = breakdown(&instance, &state);
        assert_eq!(terms.buried_penalty, 0);
        assert_eq!(terms.parts_pending, 1);
    }

    #[test]
    fn producing_clears_term_b() {
        let instance = instance();
        let state = State::initial(&instance)
            .apply(
                &instance,
                &Action::MoveBetweenRacks {
                    jig: A,
                    from: R0,
                    to: R1,
                },
            )
            .and_then(|s| s.apply(&instance, &Action::SendToProduction { jig: S, from: R0 }))
            .unwrap();

        assert_eq!(breakdown(&instance, &state).parts_pending, 0);
    }

    #[test]
    fn loading_outgoing_jig_clears_term_c() {
        let instance = instance();
        let state = State::initial(&instance)
            .apply(&instance, &Action::LoadToTransport { jig: E, from: R1 })
            .unwrap();

        assert_eq!(breakdown(&instance, &state).outgoing_pending, 0);
    }

    #[test]
    fn past_flights_no_longer_count() {
        let instance = instance();
        let state = State::initial(&instance)
            .apply(&instance, &Action::AdvanceFlight)
            .and_then(|s| s.apply(&instance, &Action::AdvanceFlight))
            .unwrap();

        let terms = breakdown(&instance, &state);
        assert_eq!(terms.incoming_pending, 0);
        assert_eq!(terms.outgoing_pending, 0);
        assert_eq!(terms.flights_remaining, 0);
        // production is still outstanding
        assert_eq!(terms.parts_pending, 1);
        assert!(!terms.is_zero());
    }
}
