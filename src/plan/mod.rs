//! Plan export and import.
//!
//! A found plan can be stored as JSON or in a compact binary encoding and
//! replayed later with [`crate::verify::replay`].

use crate::core::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::PlanError;

/// Version identifier for the plan format
pub const PLAN_FORMAT_VERSION: u32 = 1;

/// An ordered action sequence with its provenance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan format version
    pub version: u32,

    /// Unique plan identifier
    pub id: String,

    /// When the plan was created
    pub created_at: DateTime<Utc>,

    /// Actions in execution order
    pub actions: Vec<Action>,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            version: PLAN_FORMAT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            actions,
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Total cost of executing the plan.
    pub fn cost(&self) -> u64 {
        self.actions.iter().map(|_| u64::from(Action::COST)).sum()
    }

    pub fn to_json(&self) -> Result<String, PlanError> {
        serde_json::to_string_pretty(self).map_err(|e| PlanError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let plan: Plan = serde_json::from_str(json)
            .map_err(|e| PlanError::DeserializationFailed(e.to_string()))?;
        plan.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, PlanError> {
        bincode::serialize(self).map_err(|e| PlanError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, PlanError> {
        let plan: Plan = bincode::deserialize(bytes)
            .map_err(|e| PlanError::DeserializationFailed(e.to_string()))?;
        plan.check_version()
    }

    fn check_version(self) -> Result<Self, PlanError> {
        if self.version != PLAN_FORMAT_VERSION {
            return Err(PlanError::UnsupportedVersion {
                found: self.version,
                supported: PLAN_FORMAT_VERSION,
            });
        }
        Ok(self)
    }
}

impl From<Vec<Action>> for Plan {
    fn from(actions: Vec<Action>) -> Self {
        Self::new(actions)
    }
}
