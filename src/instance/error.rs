//! Instance lookup and intake errors.

use super::ids::{JigId, JigTypeId, RackId};
use thiserror::Error;

/// Errors raised while building an instance or looking up one of its records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    #[error("Instance JSON could not be parsed: {0}")]
    Parse(String),

    #[error("Unknown jig '{name}' referenced by {context}")]
    UnknownJigName { name: String, context: String },

    #[error("Jig '{jig}' references unknown jig type '{jig_type}'")]
    UnknownJigTypeName { jig: String, jig_type: String },

    #[error("No jig with id {0}")]
    UnknownJig(JigId),

    #[error("No rack with id {0}")]
    UnknownRack(RackId),

    #[error("No jig type with id {0}")]
    UnknownJigType(JigTypeId),
}
