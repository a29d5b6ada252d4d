//! Catalog and completion data sources.
//!
//! The planning core never queries storage itself. Callers plug in a
//! [`CourseCatalog`] and a [`CompletionRecords`] implementation that return
//! fully-resolved, normalized data; any schema fallbacks or retries belong
//! inside those implementations.
//!
//! [`InMemoryCatalog`] and [`InMemoryCompletions`] cover tests and callers
//! that already hold the data.

mod memory;

pub use memory::{InMemoryCatalog, InMemoryCompletions};

use crate::error::Result;
use crate::models::{Course, CourseId};

/// Source of pathway requirements and course lookups.
///
/// Failures are reported as [`PlanError::DataUnavailable`](crate::PlanError::DataUnavailable).
pub trait CourseCatalog: Send + Sync {
    /// Required courses for a pathway, in catalog order.
    ///
    /// An unknown pathway yields an empty list.
    fn courses_for_pathway(&self, pathway_id: &str) -> Result<Vec<Course>>;

    /// Looks up a course by id.
    fn course_by_id(&self, id: CourseId) -> Result<Option<Course>>;

    /// Looks up a course by catalog code.
    fn course_by_code(&self, code: &str) -> Result<Option<Course>>;
}

/// Source of per-student completion records.
pub trait CompletionRecords: Send + Sync {
    /// Ids of the courses a student has completed. Order is irrelevant.
    fn completed_course_ids(&self, user_id: &str) -> Result<Vec<CourseId>>;
}
