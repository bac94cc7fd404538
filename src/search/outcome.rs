//! Results of a search run.

use crate::limits::LimitViolation;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Why a search ended without a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// The frontier emptied without reaching a goal.
    Exhausted,
    /// One or more resource limits were exceeded.
    LimitExceeded(Vec<LimitViolation>),
    /// The external cancellation flag was raised.
    Cancelled,
}

impl SearchFailure {
    pub fn is_iteration_limit(&self) -> bool {
        matches!(self, Self::LimitExceeded(violations)
            if violations.iter().any(|v| matches!(v, LimitViolation::IterationLimit { .. })))
    }

    pub fn is_time_limit(&self) -> bool {
        matches!(self, Self::LimitExceeded(violations)
            if violations.iter().any(|v| matches!(v, LimitViolation::TimeLimit { .. })))
    }
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchFailure::Exhausted => write!(f, "Search space exhausted"),
            SearchFailure::LimitExceeded(violations) => {
                write!(f, "Aborted:")?;
                for violation in violations {
                    write!(f, " {violation};")?;
                }
                Ok(())
            }
            SearchFailure::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Frontier entries expanded (stale entries excluded).
    pub iterations: u64,
    /// Successor states produced by expansion.
    pub generated: u64,
    /// Already seen states reached again by a cheaper path.
    pub improved: u64,
    /// Outdated frontier entries discarded on extraction.
    pub stale_skipped: u64,
    pub seen_states: usize,
    pub frontier_peak: usize,
    pub elapsed: Duration,
}

/// A plan or the reason there is none, plus the run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<A> {
    pub result: Result<Vec<A>, SearchFailure>,
    pub stats: SearchStats,
}

impl<A> SearchOutcome<A> {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    #[inline]
    pub fn plan(&self) -> Option<&[A]> {
        self.result.as_deref().ok()
    }

    #[inline]
    pub fn failure(&self) -> Option<&SearchFailure> {
        self.result.as_ref().err()
    }

    pub fn into_plan(self) -> Option<Vec<A>> {
        self.result.ok()
    }
}
