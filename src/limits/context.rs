//! Context provided to limit checks.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Bookkeeping of a running search that the limits are checked against.
#[derive(Clone, Debug)]
pub struct SearchContext {
    /// Frontier entries expanded so far.
    pub iterations: u64,
    pub started_at: DateTime<Utc>,
}

impl SearchContext {
    /// Start counting from now.
    pub fn start() -> Self {
        Self {
            iterations: 0,
            started_at: Utc::now(),
        }
    }

    /// Wall-clock time since the search started.
    pub fn elapsed(&self) -> Duration {
        let now = Utc::now();
        now.signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
