//! Degree-pathway planning for the U-Engine ecosystem.
//!
//! Determines which pathway requirements a student still owes, packs them
//! into credit-bounded semesters, and merges them into an existing
//! multi-semester plan.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Pathway`, `CompletionSet`,
//!   `SemesterPlan`, `SchedulePlan`, `AddedCourseRecord`, `MergeResult`
//! - **`provider`**: Catalog and completion data-source traits plus
//!   in-memory implementations
//! - **`resolver`**: Outstanding-requirement resolution with major/minor
//!   de-duplication
//! - **`packing`**: Deterministic first-fit-descending semester packing
//! - **`merge`**: Credit-bounded merge into an existing plan
//! - **`planner`**: Projection service and plan KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, oversized
//!   courses, overloaded semesters)
//! - **`config`**: Credit bounds and semester limits
//!
//! # Architecture
//!
//! Pure, synchronous computation: no I/O, no shared mutable state. Callers
//! resolve catalog and completion data up front through the `provider`
//! traits; the algorithms copy their inputs before modifying anything.
//!
//! # References
//!
//! - Johnson (1973), "Near-optimal bin packing algorithms"
//! - Coffman, Garey & Johnson (1996), "Approximation algorithms for bin packing: a survey"

pub mod config;
pub mod error;
pub mod merge;
pub mod models;
pub mod packing;
pub mod planner;
pub mod provider;
pub mod resolver;
pub mod validation;

pub use config::PlannerConfig;
pub use error::{PlanError, Result};
