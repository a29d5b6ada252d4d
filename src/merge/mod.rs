//! Merging outstanding coursework into an existing plan.
//!
//! Extends a student's current multi-semester plan with the courses still
//! required, under per-semester credit bounds and a semester cap.
//!
//! # Guarantees
//!
//! - No semester is pushed above the hard maximum.
//! - Existing semesters are never reordered; new ones are appended.
//! - Every outstanding course gets exactly one record: a semester label or
//!   `UNSCHEDULED`.
//! - A semester stays under the minimum only if no remaining course fits
//!   beneath the maximum, or the semester cap has been reached.
//!
//! # Reference
//! Coffman, Garey & Johnson (1996), "Approximation algorithms for bin packing: a survey"

mod engine;

pub use engine::MergeEngine;
