//! Search limits and their enforcement.

use crate::limits::context::SearchContext;
use crate::limits::violations::LimitViolation;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default number of frontier extractions a search may perform.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000;

/// Default wall-clock budget of a search.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Default number of iterations between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

/// Resource limits of one search run.
///
/// Both limits are cooperative: they are checked once per outer-loop
/// iteration, and exceeding either one aborts the run without a plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum number of frontier entries to expand. `None` is unbounded.
    pub max_iterations: Option<u64>,
    /// Wall-clock budget. `None` is unbounded.
    pub time_limit: Option<Duration>,
    /// Iterations between progress reports; `0` disables them.
    pub progress_interval: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
            time_limit: Some(DEFAULT_TIME_LIMIT),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SearchLimits {
    /// No iteration or time limit.
    pub fn unlimited() -> Self {
        Self {
            max_iterations: None,
            time_limit: None,
            ..Self::default()
        }
    }

    /// Check every limit, accumulating ALL violations.
    /// Returns `Validation::Success(())` while the search may continue.
    pub fn enforce(&self, context: &SearchContext) -> Validation<(), NonEmptyVec<LimitViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<LimitViolation>>> = Vec::new();

        if let Some(limit) = self.max_iterations {
            let check = if context.iterations >= limit {
                Validation::fail(LimitViolation::IterationLimit {
                    limit,
                    iterations: context.iterations,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(limit) = self.time_limit {
            let elapsed = context.elapsed();
            let check = if elapsed > limit {
                Validation::fail(LimitViolation::TimeLimit { limit, elapsed })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if checks.is_empty() {
            return Validation::success(());
        }
        Validation::all_vec(checks).map(|_| ())
    }

    /// Whether a progress report is due after `iterations` expansions.
    pub fn progress_due(&self, iterations: u64) -> bool {
        self.progress_interval != 0 && iterations % self.progress_interval == 0
    }
}
