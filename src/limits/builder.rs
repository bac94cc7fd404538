//! Builder API for search limits.

use crate::limits::rules::{SearchLimits, DEFAULT_PROGRESS_INTERVAL};
use std::time::Duration;

/// Builder for [`SearchLimits`]. Starts unlimited.
#[derive(Clone, Debug)]
pub struct LimitsBuilder {
    max_iterations: Option<u64>,
    time_limit: Option<Duration>,
    progress_interval: u64,
}

impl LimitsBuilder {
    pub fn new() -> Self {
        Self {
            max_iterations: None,
            time_limit: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Set the maximum number of frontier expansions
    pub fn max_iterations(mut self, n: u64) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Set the wall-clock budget
    pub fn time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }

    /// Set the number of iterations between progress reports (0 disables)
    pub fn progress_interval(mut self, n: u64) -> Self {
        self.progress_interval = n;
        self
    }

    /// Clear both the iteration and the time limit
    pub fn unlimited(mut self) -> Self {
        self.max_iterations = None;
        self.time_limit = None;
        self
    }

    /// Build the limits
    pub fn build(self) -> SearchLimits {
        SearchLimits {
            max_iterations: self.max_iterations,
            time_limit: self.time_limit,
            progress_interval: self.progress_interval,
        }
    }
}

impl Default for LimitsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_limits() {
        let limits = LimitsBuilder::new()
            .max_iterations(3)
            .time_limit(Duration::from_secs(30))
            .progress_interval(7)
            .build();

        assert_eq!(limits.max_iterations, Some(3));
        assert_eq!(limits.time_limit, Some(Duration::from_secs(30)));
        assert_eq!(limits.progress_interval, 7);
    }

    #[test]
    fn empty_builder_is_unlimited() {
        assert_eq!(LimitsBuilder::new().build(), SearchLimits::unlimited());
    }

    #[test]
    fn unlimited_clears_earlier_limits() {
        let limits = LimitsBuilder::new()
            .max_iterations(3)
            .time_limit(Duration::from_secs(1))
            .unlimited()
            .build();

        assert_eq!(limits.max_iterations, None);
        assert_eq!(limits.time_limit, None);
    }
}
