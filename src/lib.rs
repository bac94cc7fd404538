//! Jigplan: a deterministic planner for jig logistics
//!
//! Jigs sit in capacity-bounded racks that are only reachable at their two
//! ends. They arrive loaded on flights, are sent to the production line from
//! the factory side of a rack, come back empty, and leave again on outgoing
//! flights. Jigplan finds an ordered action sequence that processes every
//! flight and produces every scheduled part.
//!
//! The crate follows a "pure core, imperative shell" layout. The core is
//! composed of pure functions over immutable values:
//!
//! - **Instance**: the read-only problem description
//! - **State**: an immutable snapshot with structural equality and hashing
//! - **Guards**: pure predicates deciding action legality
//! - **Heuristic** and **Goal**: cost estimate and goal test
//!
//! The [`search`] module holds the only mutable bookkeeping, confined to a
//! single run.
//!
//! # Example
//!
//! ```rust
//! use jigplan::{solve, verify, Instance, SearchLimits, State};
//!
//! let instance = Instance::from_json_str(r#"{
//!     "jig_types": { "t": { "size_loaded": 2, "size_empty": 1 } },
//!     "jigs": { "j1": { "type": "t" }, "j2": { "type": "t" } },
//!     "racks": [
//!         { "name": "r1", "size": 6, "jigs": ["j1", "j2"] },
//!         { "name": "r2", "size": 6, "jigs": [] }
//!     ],
//!     "flights": [ { "name": "f1", "incoming": [], "outgoing": [] } ],
//!     "production_lines": [ { "name": "pl", "schedule": ["j2"] } ]
//! }"#).unwrap();
//!
//! let outcome = solve(&instance, SearchLimits::default());
//! let plan = outcome.plan().unwrap();
//!
//! let start = State::initial(&instance);
//! assert!(verify::replay(&instance, &start, plan).is_valid());
//! ```

pub mod core;
pub mod goal;
pub mod heuristic;
pub mod instance;
pub mod limits;
pub mod plan;
pub mod problem;
pub mod search;
pub mod verify;

// Re-export commonly used types
pub use crate::core::{Action, IllegalAction, State};
pub use goal::{is_goal, GoalProgress};
pub use instance::{Instance, InstanceError, JigId, RackId};
pub use limits::{LimitViolation, LimitsBuilder, SearchLimits};
pub use plan::{Plan, PlanError};
pub use problem::{solve, JigProblem};
pub use search::{SearchFailure, SearchOutcome, SearchStats};
pub use verify::Verification;
