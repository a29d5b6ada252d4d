//! Planning domain models.
//!
//! Provides the core data types for degree-pathway planning problems and
//! their solutions. Every adapter normalizes into these types before the
//! planning core runs, so the algorithms never probe for alternate shapes.
//!
//! # Domain Mappings
//!
//! | u-pathway | Scheduling | Bin packing |
//! |-----------|------------|-------------|
//! | Course | Job | Item |
//! | Course credits | Processing time | Item size |
//! | SemesterPlan | Resource period | Bin |
//! | SchedulePlan | Schedule | Packing |

mod course;
mod pathway;
mod plan;

pub use course::{Course, CourseId};
pub use pathway::{CompletionSet, Pathway};
pub use plan::{
    AddedCourseRecord, MergeResult, SchedulePlan, SemesterPlan, DEFAULT_SEMESTER_LABEL,
    UNSCHEDULED,
};
