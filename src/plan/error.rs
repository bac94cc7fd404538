//! Plan error types.

use thiserror::Error;

/// Errors that can occur while exporting or importing a plan
#[derive(Debug, Error)]
pub enum PlanError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Plan format version is not supported by this version
    #[error("Unsupported plan version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
