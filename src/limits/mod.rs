//! Resource limits for a search run.
//!
//! Limits are checked with Stillwater's `Validation`, so a run that blows
//! both its iteration and its time budget in the same step reports both.
//!
//! # Example
//!
//! ```rust
//! use jigplan::limits::LimitsBuilder;
//! use std::time::Duration;
//!
//! let limits = LimitsBuilder::new()
//!     .max_iterations(5_000)
//!     .time_limit(Duration::from_secs(10))
//!     .build();
//! assert_eq!(limits.max_iterations, Some(5_000));
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::LimitsBuilder;
pub use context::SearchContext;
pub use rules::SearchLimits;
pub use violations::LimitViolation;
