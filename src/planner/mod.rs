//! Pathway projection service and plan KPIs.
//!
//! `ScheduleProjector` wires a course catalog and completion records to the
//! resolver, the greedy packer, and the merge engine. `PlanKpi` reports how
//! a resulting plan sits against the credit bounds.
//!
//! # Flow
//!
//! ```text
//! catalog + completions ──► resolver ──► packer        (fresh projection)
//!                                    └─► merge engine  (extend existing plan)
//! ```

mod kpi;
mod projector;

pub use kpi::PlanKpi;
pub use projector::ScheduleProjector;
