//! Immutable world state.
//!
//! A [`State`] is a value: every action application produces a brand-new
//! state and never touches the one it started from. Rack contents are kept
//! as shared `Arc<[JigId]>` slices, so a successor only reallocates the racks
//! an action actually touched.
//!
//! Equality and hashing are structural. Rack sequences are compared in order;
//! the transport, factory and produced-part sets are ordered sets, so their
//! comparison is independent of insertion order.

use crate::instance::{Instance, InstanceError, JigId, PartId, RackId};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Dynamic status of one jig.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct JigStatus {
    pub loaded: bool,
    /// Present iff the jig is loaded.
    pub part: Option<PartId>,
}

/// Where a jig currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    Rack(RackId),
    Transport,
    Factory,
}

/// A breach of the state invariants, found by [`State::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{jig} has no location")]
    Unplaced { jig: JigId },

    #[error("{jig} occupies {count} locations")]
    MultiplyPlaced { jig: JigId, count: usize },

    #[error("{rack} holds {occupied} units but its capacity is {capacity}")]
    OverCapacity {
        rack: RackId,
        occupied: u32,
        capacity: u32,
    },

    #[error(transparent)]
    Lookup(#[from] InstanceError),
}

/// Snapshot of the dynamic world.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct State {
    pub(super) racks: Vec<Arc<[JigId]>>,
    pub(super) jigs: Vec<JigStatus>,
    pub(super) transport: BTreeSet<JigId>,
    pub(super) factory: BTreeSet<JigId>,
    pub(super) produced: BTreeSet<PartId>,
    pub(super) flight: usize,
}

impl State {
    /// Build the initial state of an instance.
    ///
    /// Jigs that no rack lists start in the transport area: they are in
    /// transit on a flight and have to be unloaded into a rack.
    pub fn initial(instance: &Instance) -> Self {
        let racks: Vec<Arc<[JigId]>> = instance
            .racks()
            .iter()
            .map(|rack| Arc::from(rack.initial.as_slice()))
            .collect();

        let jigs = instance
            .jigs()
            .iter()
            .map(|jig| JigStatus {
                loaded: jig.loaded,
                part: jig.part,
            })
            .collect();

        let racked: BTreeSet<JigId> = racks.iter().flat_map(|r| r.iter().copied()).collect();
        let transport = instance
            .jig_ids()
            .filter(|jig| !racked.contains(jig))
            .collect();

        Self {
            racks,
            jigs,
            transport,
            factory: BTreeSet::new(),
            produced: BTreeSet::new(),
            flight: 0,
        }
    }

    /// Contents of a rack, factory side first.
    pub fn rack(&self, rack: RackId) -> Result<&[JigId], InstanceError> {
        self.racks
            .get(rack.index())
            .map(|jigs| &**jigs)
            .ok_or(InstanceError::UnknownRack(rack))
    }

    pub fn racks(&self) -> impl Iterator<Item = (RackId, &[JigId])> + '_ {
        self.racks
            .iter()
            .enumerate()
            .map(|(i, jigs)| (RackId(i), &**jigs))
    }

    pub fn status(&self, jig: JigId) -> Result<JigStatus, InstanceError> {
        self.jigs
            .get(jig.index())
            .copied()
            .ok_or(InstanceError::UnknownJig(jig))
    }

    pub fn is_loaded(&self, jig: JigId) -> Result<bool, InstanceError> {
        Ok(self.status(jig)?.loaded)
    }

    pub fn transport(&self) -> &BTreeSet<JigId> {
        &self.transport
    }

    pub fn factory(&self) -> &BTreeSet<JigId> {
        &self.factory
    }

    pub fn produced(&self) -> &BTreeSet<PartId> {
        &self.produced
    }

    /// Index of the active flight; equals the flight count once every flight
    /// has been processed.
    pub fn flight_index(&self) -> usize {
        self.flight
    }

    pub fn location(&self, jig: JigId) -> Option<Location> {
        if self.transport.contains(&jig) {
            return Some(Location::Transport);
        }
        if self.factory.contains(&jig) {
            return Some(Location::Factory);
        }
        self.racks()
            .find(|(_, jigs)| jigs.contains(&jig))
            .map(|(rack, _)| Location::Rack(rack))
    }

    /// The jigs reachable at a rack's two ends. A single-jig rack exposes
    /// that jig once.
    pub fn endpoints(&self, rack: RackId) -> Result<Vec<JigId>, InstanceError> {
        let jigs = self.rack(rack)?;
        Ok(match jigs {
            [] => Vec::new(),
            [only] => vec![*only],
            [first, .., last] => vec![*first, *last],
        })
    }

    pub fn is_at_endpoint(&self, rack: RackId, jig: JigId) -> Result<bool, InstanceError> {
        let jigs = self.rack(rack)?;
        Ok(jigs.first() == Some(&jig) || jigs.last() == Some(&jig))
    }

    /// The jig at the factory-side end of a rack.
    pub fn factory_side(&self, rack: RackId) -> Result<Option<JigId>, InstanceError> {
        Ok(self.rack(rack)?.first().copied())
    }

    /// Whether a jig sits in a rack but at neither of its ends.
    pub fn is_buried(&self, jig: JigId) -> bool {
        self.racks.iter().any(|jigs| {
            jigs.len() > 2 && jigs[1..jigs.len() - 1].contains(&jig)
        })
    }

    /// Capacity units a jig currently occupies.
    pub fn jig_size(&self, instance: &Instance, jig: JigId) -> Result<u32, InstanceError> {
        instance.jig_size(jig, self.is_loaded(jig)?)
    }

    /// Sum of the sizes of all jigs in a rack, by their current status.
    pub fn occupied(&self, instance: &Instance, rack: RackId) -> Result<u32, InstanceError> {
        self.rack(rack)?
            .iter()
            .map(|&jig| self.jig_size(instance, jig))
            .sum()
    }

    /// Check location uniqueness and rack capacities, collecting every
    /// violation rather than stopping at the first.
    pub fn validate(&self, instance: &Instance) -> Validation<(), NonEmptyVec<InvariantViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<InvariantViolation>>> = Vec::new();

        let mut counts = vec![0usize; self.jigs.len()];
        let placed = self
            .racks
            .iter()
            .flat_map(|jigs| jigs.iter())
            .chain(self.transport.iter())
            .chain(self.factory.iter());
        for &jig in placed {
            match counts.get_mut(jig.index()) {
                Some(count) => *count += 1,
                None => checks.push(Validation::fail(InvariantViolation::Lookup(
                    InstanceError::UnknownJig(jig),
                ))),
            }
        }

        for (i, &count) in counts.iter().enumerate() {
            let jig = JigId(i);
            let check = match count {
                1 => Validation::success(()),
                0 => Validation::fail(InvariantViolation::Unplaced { jig }),
                count => Validation::fail(InvariantViolation::MultiplyPlaced { jig, count }),
            };
            checks.push(check);
        }

        for rack in instance.rack_ids() {
            let check = match (self.occupied(instance, rack), instance.rack(rack)) {
                (Ok(occupied), Ok(record)) if occupied > record.capacity => {
                    Validation::fail(InvariantViolation::OverCapacity {
                        rack,
                        occupied,
                        capacity: record.capacity,
                    })
                }
                (Err(e), _) | (_, Err(e)) => Validation::fail(InvariantViolation::Lookup(e)),
                _ => Validation::success(()),
            };
            checks.push(check);
        }

        if checks.is_empty() {
            return Validation::success(());
        }
        Validation::all_vec(checks).map(|_| ())
    }
}
