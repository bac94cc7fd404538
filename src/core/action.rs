//! The six action kinds.

use crate::instance::{JigId, RackId};
use serde::{Deserialize, Serialize};

/// A single unit-cost step of a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Take a jig from an end of one rack and append it to another.
    MoveBetweenRacks { jig: JigId, from: RackId, to: RackId },
    /// Take a jig from an end of a rack into the transport area.
    LoadToTransport { jig: JigId, from: RackId },
    /// Put a jig from the transport area into a rack.
    UnloadFromTransport { jig: JigId, to: RackId },
    /// Hand a loaded, scheduled jig from the factory side of a rack to production.
    SendToProduction { jig: JigId, from: RackId },
    /// Bring an emptied jig back from the factory into a rack.
    ReturnEmptyFromFactory { jig: JigId, to: RackId },
    /// Move on to the next flight.
    AdvanceFlight,
}

impl Action {
    /// Cost of every action.
    pub const COST: u32 = 1;

    /// Name of the action kind, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveBetweenRacks { .. } => "MoveBetweenRacks",
            Self::LoadToTransport { .. } => "LoadToTransport",
            Self::UnloadFromTransport { .. } => "UnloadFromTransport",
            Self::SendToProduction { .. } => "SendToProduction",
            Self::ReturnEmptyFromFactory { .. } => "ReturnEmptyFromFactory",
            Self::AdvanceFlight => "AdvanceFlight",
        }
    }

    /// The jig this action moves, if any.
    pub fn jig(&self) -> Option<JigId> {
        match *self {
            Self::MoveBetweenRacks { jig, .. }
            | Self::LoadToTransport { jig, .. }
            | Self::UnloadFromTransport { jig, .. }
            | Self::SendToProduction { jig, .. }
            | Self::ReturnEmptyFromFactory { jig, .. } => Some(jig),
            Self::AdvanceFlight => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jig_is_reported_for_jig_actions() {
        let action = Action::SendToProduction {
            jig: JigId(2),
            from: RackId(0),
        };
        assert_eq!(action.jig(), Some(JigId(2)));
        assert_eq!(Action::AdvanceFlight.jig(), None);
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Action::AdvanceFlight.name(), "AdvanceFlight");
        let action = Action::MoveBetweenRacks {
            jig: JigId(0),
            from: RackId(0),
            to: RackId(1),
        };
        assert_eq!(action.name(), "MoveBetweenRacks");
    }

    #[test]
    fn action_serializes_with_kind_tag() {
        let action = Action::UnloadFromTransport {
            jig: JigId(1),
            to: RackId(3),
        };
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "unload_from_transport": { "jig": 1, "to": 3 } })
        );
        assert_eq!(
            serde_json::to_value(Action::AdvanceFlight).unwrap(),
            serde_json::json!("advance_flight")
        );
    }
}
