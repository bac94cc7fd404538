//! Goal test and progress reporting.
//!
//! A state is a goal once every flight has been processed and no scheduled
//! jig is still loaded with an unproduced part. The test does not
//! look at per-flight incoming or outgoing requirements; those only feed the
//! heuristic and the [`GoalProgress`] report.

use crate::core::State;
use crate::instance::Instance;
use serde::Serialize;

/// Whether `state` satisfies the goal.
pub fn is_goal(instance: &Instance, state: &State) -> bool {
    state.flight_index() >= instance.flights().len()
        && instance.schedule().iter().all(|&jig| match state.status(jig) {
            Ok(status) if status.loaded => status
                .part
                .map_or(true, |part| state.produced().contains(&part)),
            _ => true,
        })
}

/// Progress of a state towards the goal and the per-flight requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub flights_processed: usize,
    pub total_flights: usize,
    pub parts_produced: usize,
    /// Scheduled jigs still loaded with an unproduced part.
    pub parts_pending: usize,
    /// Incoming jigs of processed and active flights.
    pub incoming_total: usize,
    /// ...of which still sit in the transport area.
    pub incoming_pending: usize,
    /// Outgoing jigs of processed and active flights.
    pub outgoing_total: usize,
    /// ...of which are not in the transport area.
    pub outgoing_pending: usize,
}

impl GoalProgress {
    /// All flights processed, all parts produced and every incoming and
    /// outgoing requirement of the processed flights met.
    pub fn requirements_met(&self) -> bool {
        self.flights_processed >= self.total_flights
            && self.parts_pending == 0
            && self.incoming_pending == 0
            && self.outgoing_pending == 0
    }
}

/// Measure the progress of `state`.
pub fn progress(instance: &Instance, state: &State) -> GoalProgress {
    let flights = instance.flights();
    let index = state.flight_index();
    let considered = &flights[..flights.len().min(index + 1)];
    let transport = state.transport();

    let incoming = considered.iter().flat_map(|f| f.incoming.iter());
    let outgoing = considered.iter().flat_map(|f| f.outgoing.iter());

    let parts_pending = instance
        .schedule()
        .iter()
        .filter(|&&jig| {
            state.status(jig).is_ok_and(|status| {
                status.loaded
                    && status
                        .part
                        .is_some_and(|part| !state.produced().contains(&part))
            })
        })
        .count();

    GoalProgress {
        flights_processed: index,
        total_flights: flights.len(),
        parts_produced: state.produced().len(),
        parts_pending,
        incoming_total: incoming.clone().count(),
        incoming_pending: incoming.filter(|&jig| transport.contains(jig)).count(),
        outgoing_total: outgoing.clone().count(),
        outgoing_pending: outgoing.filter(|&jig| !transport.contains(jig)).count(),
    }
}
