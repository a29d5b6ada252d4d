//! Credit-bounded merge of outstanding courses into an existing plan.
//!
//! # Algorithm
//!
//! Operating on a copy of the plan, with outstanding courses sorted by
//! credits descending (stable):
//!
//! 1. **Top up to minimum**: each existing semester, in order, takes the
//!    first course that keeps it at or below the hard maximum, until it
//!    reaches the minimum or nothing fits.
//! 2. **Top up to target**: each existing semester takes courses that keep
//!    it at or below `min(max, target)` until it reaches the target.
//! 3. **New semesters**: while courses remain and the semester cap allows,
//!    open a semester, fill it toward the target, and if it is still under
//!    the minimum, sweep once more toward the minimum with the hard maximum
//!    as the ceiling. The semester is appended even when under-filled.
//! 4. **Unscheduled**: anything left is recorded as `UNSCHEDULED`.
//!
//! # Complexity
//! O(s * n²) where s=semesters, n=outstanding courses.

use tracing::{debug, trace, warn};

use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::models::{AddedCourseRecord, Course, MergeResult, SchedulePlan, SemesterPlan};
use crate::packing::sort_by_credits_desc;
use crate::validation::{ensure_placeable, validate_plan};

/// Merges outstanding courses into an existing multi-semester plan.
///
/// The plan passed in is never modified; the result carries an extended
/// copy. Existing semesters keep their order and labels; new semesters are
/// only appended.
///
/// # Example
///
/// ```
/// use u_pathway::merge::MergeEngine;
/// use u_pathway::models::{Course, SchedulePlan, SemesterPlan};
///
/// let original = SchedulePlan::new().with_semester(
///     SemesterPlan::new("Semester 1")
///         .with_course(Course::new(1, "MATH1210", 4))
///         .with_course(Course::new(2, "CMPS1270", 3))
///         .with_course(Course::new(3, "PS1010", 3)),
/// );
/// let outstanding = vec![
///     Course::new(10, "AFRS2000", 4),
///     Course::new(11, "AFRS3000", 4),
///     Course::new(12, "AFRS4000", 3),
/// ];
///
/// let result = MergeEngine::new().merge(&original, &outstanding).unwrap();
/// assert_eq!(result.merged_schedule.semesters[0].total_credits(), 18);
/// assert_eq!(result.added[2].target_label, "Semester 2");
/// assert_eq!(original.semesters[0].total_credits(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MergeEngine {
    config: PlannerConfig,
}

impl MergeEngine {
    /// Creates an engine with the default limits (12 / 18 / 21, 8 semesters).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the planner limits.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current limits.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Merges using the configured target credits per semester.
    pub fn merge(&self, original: &SchedulePlan, outstanding: &[Course]) -> Result<MergeResult> {
        self.merge_with_target(original, outstanding, self.config.target_credits)
    }

    /// Merges with an explicit target credits per semester.
    ///
    /// # Errors
    /// - [`PlanError::Configuration`] if `target_credits` is zero or the
    ///   configured bounds are inconsistent.
    /// - [`PlanError::Infeasible`] if an outstanding course exceeds the hard
    ///   per-semester maximum.
    pub fn merge_with_target(
        &self,
        original: &SchedulePlan,
        outstanding: &[Course],
        target_credits: u32,
    ) -> Result<MergeResult> {
        if target_credits == 0 {
            return Err(PlanError::configuration(
                "target credits per semester must be positive",
            ));
        }
        self.config.validate()?;
        let max = self.config.max_credits;
        let min = self.config.min_credits;
        ensure_placeable(outstanding, max)?;

        if let Err(errors) = validate_plan(original, max) {
            for e in &errors {
                warn!(kind = ?e.kind, "existing plan: {}", e.message);
            }
        }

        debug!(
            semesters = original.semester_count(),
            outstanding = outstanding.len(),
            target_credits,
            "merging outstanding courses"
        );

        let mut merged = original.clone();
        let mut remaining = sort_by_credits_desc(outstanding);
        let mut added = Vec::with_capacity(outstanding.len());
        let target_cap = max.min(target_credits);

        for sem in &mut merged.semesters {
            fill_semester(sem, &mut remaining, min, max, &mut added);
        }

        for sem in &mut merged.semesters {
            fill_semester(sem, &mut remaining, target_credits, target_cap, &mut added);
        }

        while !remaining.is_empty() && merged.semesters.len() < self.config.max_semesters {
            let label = self.config.semester_label(merged.semesters.len() + 1);
            let mut sem = SemesterPlan::new(label);
            fill_semester(&mut sem, &mut remaining, target_credits, target_cap, &mut added);
            if sem.total_credits() < min && !remaining.is_empty() {
                fill_semester(&mut sem, &mut remaining, min, max, &mut added);
            }
            debug!(
                semester = %sem.label,
                credits = sem.total_credits(),
                "opened new semester"
            );
            merged.semesters.push(sem);
        }

        if !remaining.is_empty() {
            warn!(
                count = remaining.len(),
                max_semesters = self.config.max_semesters,
                "courses left unscheduled"
            );
        }
        added.extend(remaining.into_iter().map(AddedCourseRecord::unscheduled));

        debug!(
            semesters = merged.semester_count(),
            added = added.len(),
            "merge finished"
        );
        Ok(MergeResult {
            merged_schedule: merged,
            added,
        })
    }
}

/// Moves courses from `remaining` into `sem` until it reaches `goal`.
///
/// Each step takes the first remaining course that keeps the semester at or
/// below `ceiling`; stops when the goal is met or nothing fits.
fn fill_semester(
    sem: &mut SemesterPlan,
    remaining: &mut Vec<Course>,
    goal: u32,
    ceiling: u32,
    added: &mut Vec<AddedCourseRecord>,
) {
    let mut total = sem.total_credits();
    while total < goal {
        let Some(idx) = remaining
            .iter()
            .position(|c| total.saturating_add(c.credits) <= ceiling)
        else {
            break;
        };
        let course = remaining.remove(idx);
        total = total.saturating_add(course.credits);
        trace!(course = %course.code, semester = %sem.label, total, "placed");
        added.push(AddedCourseRecord::placed(course.clone(), &sem.label));
        sem.courses.push(course);
    }
}
