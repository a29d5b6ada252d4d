//! Input validation for planning problems.
//!
//! Checks structural integrity of course lists and existing plans before
//! planning. Detects:
//! - Duplicate course IDs
//! - Courses heavier than the bucket capacity (never placeable)
//! - Duplicate semester labels
//! - Semesters already above the credit ceiling
//!
//! The packer and merge engine call [`ensure_placeable`] up front so that an
//! oversized course is reported as [`PlanError::Infeasible`] instead of
//! stalling the fill loops.

use crate::error::{PlanError, Result};
use crate::models::{Course, SchedulePlan};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same ID.
    DuplicateCourseId,
    /// A course's credits exceed the per-bucket capacity.
    CourseExceedsCapacity,
    /// Two semesters share the same label.
    DuplicateSemesterLabel,
    /// A semester already carries more credits than allowed.
    SemesterOverCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course list against a per-bucket capacity.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. Every course fits in an empty bucket (`credits <= capacity`)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course], capacity: u32) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for course in courses {
        if !ids.insert(course.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourseId,
                format!("Duplicate course ID: {} ({})", course.id, course.code),
            ));
        }
        if course.credits > capacity {
            errors.push(ValidationError::new(
                ValidationErrorKind::CourseExceedsCapacity,
                format!(
                    "Course '{}' needs {} credits, capacity is {}",
                    course.code, course.credits, capacity
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an existing plan against a per-semester ceiling.
///
/// Checks:
/// 1. No duplicate semester labels
/// 2. No course appears in more than one slot
/// 3. No semester exceeds `max_credits`
pub fn validate_plan(plan: &SchedulePlan, max_credits: u32) -> ValidationResult {
    let mut errors = Vec::new();
    let mut labels = HashSet::new();
    let mut ids = HashSet::new();

    for sem in &plan.semesters {
        if !labels.insert(sem.label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSemesterLabel,
                format!("Duplicate semester label: {}", sem.label),
            ));
        }

        for course in &sem.courses {
            if !ids.insert(course.id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateCourseId,
                    format!(
                        "Course {} ({}) is planned more than once",
                        course.id, course.code
                    ),
                ));
            }
        }

        let total = sem.total_credits();
        if total > max_credits {
            errors.push(ValidationError::new(
                ValidationErrorKind::SemesterOverCapacity,
                format!(
                    "Semester '{}' carries {} credits, maximum is {}",
                    sem.label, total, max_credits
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejects the first course that can never fit within `limit` credits.
pub fn ensure_placeable(courses: &[Course], limit: u32) -> Result<()> {
    match courses.iter().find(|c| c.credits > limit) {
        Some(c) => Err(PlanError::infeasible(&c.code, c.credits, limit)),
        None => Ok(()),
    }
}
