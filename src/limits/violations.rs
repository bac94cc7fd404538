//! Resource-limit violations.

use std::time::Duration;
use thiserror::Error;

/// A resource limit that stopped a search.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LimitViolation {
    #[error("Iteration limit ({limit}) reached after {iterations} iterations")]
    IterationLimit { limit: u64, iterations: u64 },

    #[error("Time limit ({limit:?}) exceeded (elapsed: {elapsed:?})")]
    TimeLimit { limit: Duration, elapsed: Duration },
}
