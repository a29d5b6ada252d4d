//! Schedule plan (solution) model.
//!
//! A plan is an ordered sequence of semesters, each holding an ordered list
//! of courses. Semester order is chronological and is never rearranged;
//! planning only appends new semesters to the end.

use serde::{Deserialize, Serialize};

use super::{Course, CourseId};

/// Placement label recorded for courses that could not be scheduled.
pub const UNSCHEDULED: &str = "UNSCHEDULED";

/// Label used when a loaded enrollment row carries no semester label.
pub const DEFAULT_SEMESTER_LABEL: &str = "Semester 1";

/// Courses planned for a single semester.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterPlan {
    /// Display label (e.g., "Semester 3"). Opaque to the planner.
    pub label: String,
    /// Courses in placement order.
    pub courses: Vec<Course>,
}

impl SemesterPlan {
    /// Creates an empty semester.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            courses: Vec::new(),
        }
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Sum of course credits, saturating at `u32::MAX`.
    pub fn total_credits(&self) -> u32 {
        self.courses
            .iter()
            .fold(0, |total: u32, c| total.saturating_add(c.credits))
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Whether the semester holds the given course id.
    pub fn contains(&self, course_id: CourseId) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }
}

/// A multi-semester plan in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Semesters, earliest first.
    pub semesters: Vec<SemesterPlan>,
}

impl SchedulePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a semester.
    pub fn with_semester(mut self, semester: SemesterPlan) -> Self {
        self.semesters.push(semester);
        self
    }

    /// Groups `(semester label, course)` rows into a plan.
    ///
    /// Semesters appear in the order their label is first seen; courses
    /// keep row order within a semester. An empty label is read as
    /// [`DEFAULT_SEMESTER_LABEL`].
    pub fn from_enrollments<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, Course)>,
        S: AsRef<str>,
    {
        let mut plan = Self::new();
        for (label, course) in rows {
            let label = match label.as_ref() {
                "" => DEFAULT_SEMESTER_LABEL,
                other => other,
            };
            match plan.semesters.iter_mut().find(|s| s.label == label) {
                Some(sem) => sem.courses.push(course),
                None => plan
                    .semesters
                    .push(SemesterPlan::new(label).with_course(course)),
            }
        }
        plan
    }

    /// Number of courses across all semesters.
    pub fn total_courses(&self) -> usize {
        self.semesters.iter().map(SemesterPlan::course_count).sum()
    }

    /// Credits across all semesters, saturating at `u32::MAX`.
    pub fn total_credits(&self) -> u32 {
        self.semesters
            .iter()
            .fold(0, |total: u32, s| total.saturating_add(s.total_credits()))
    }

    /// Number of semesters.
    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    /// Finds a semester by label.
    pub fn semester(&self, label: &str) -> Option<&SemesterPlan> {
        self.semesters.iter().find(|s| s.label == label)
    }

    /// Label of the semester holding the given course, if any.
    pub fn semester_of(&self, course_id: CourseId) -> Option<&str> {
        self.semesters
            .iter()
            .find(|s| s.contains(course_id))
            .map(|s| s.label.as_str())
    }
}

/// Where the merge placed one outstanding course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedCourseRecord {
    /// The placed course.
    pub course: Course,
    /// Semester label, or [`UNSCHEDULED`].
    pub target_label: String,
}

impl AddedCourseRecord {
    /// Records a placement into a semester.
    pub fn placed(course: Course, target_label: impl Into<String>) -> Self {
        Self {
            course,
            target_label: target_label.into(),
        }
    }

    /// Records a course that could not be placed.
    pub fn unscheduled(course: Course) -> Self {
        Self::placed(course, UNSCHEDULED)
    }

    /// Whether the course was left unscheduled.
    #[inline]
    pub fn is_unscheduled(&self) -> bool {
        self.target_label == UNSCHEDULED
    }
}

/// Outcome of merging outstanding courses into an existing plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeResult {
    /// The extended plan.
    pub merged_schedule: SchedulePlan,
    /// One record per outstanding course, in placement order.
    pub added: Vec<AddedCourseRecord>,
}

impl MergeResult {
    /// Records of courses placed into a semester.
    pub fn placed(&self) -> impl Iterator<Item = &AddedCourseRecord> {
        self.added.iter().filter(|r| !r.is_unscheduled())
    }

    /// Records of courses that could not be placed.
    pub fn unscheduled(&self) -> impl Iterator<Item = &AddedCourseRecord> {
        self.added.iter().filter(|r| r.is_unscheduled())
    }

    /// Whether every outstanding course found a semester.
    pub fn is_complete(&self) -> bool {
        self.unscheduled().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> SchedulePlan {
        SchedulePlan::new()
            .with_semester(
                SemesterPlan::new("Semester 1")
                    .with_course(Course::new(101, "MATH1210", 4))
                    .with_course(Course::new(127, "CMPS1270", 3))
                    .with_course(Course::new(201, "PS1010", 3)),
            )
            .with_semester(
                SemesterPlan::new("Semester 2")
                    .with_course(Course::new(301, "WRIT1000", 3))
                    .with_course(Course::new(309, "MATH3090", 3)),
            )
    }

    #[test]
    fn test_semester_totals() {
        let plan = sample_plan();
        assert_eq!(plan.semesters[0].total_credits(), 10);
        assert_eq!(plan.semesters[0].course_count(), 3);
        assert_eq!(plan.semesters[1].total_credits(), 6);
    }

    #[test]
    fn test_plan_totals() {
        let plan = sample_plan();
        assert_eq!(plan.total_courses(), 5);
        assert_eq!(plan.total_credits(), 16);
        assert_eq!(plan.semester_count(), 2);
    }

    #[test]
    fn test_lookup() {
        let plan = sample_plan();
        assert_eq!(plan.semester("Semester 2").map(|s| s.course_count()), Some(2));
        assert!(plan.semester("Semester 9").is_none());
        assert_eq!(plan.semester_of(309), Some("Semester 2"));
        assert_eq!(plan.semester_of(999), None);
    }

    #[test]
    fn test_empty_plan() {
        let plan = SchedulePlan::new();
        assert_eq!(plan.total_courses(), 0);
        assert_eq!(plan.total_credits(), 0);
        assert_eq!(plan.semester_count(), 0);
    }

    #[test]
    fn test_totals_saturate() {
        let plan = SchedulePlan::new()
            .with_semester(
                SemesterPlan::new("Semester 1")
                    .with_course(Course::new(1, "HUGE", u32::MAX))
                    .with_course(Course::new(2, "A", 3)),
            )
            .with_semester(SemesterPlan::new("Semester 2").with_course(Course::new(3, "B", 4)));
        assert_eq!(plan.semesters[0].total_credits(), u32::MAX);
        assert_eq!(plan.total_credits(), u32::MAX);
    }

    #[test]
    fn test_from_enrollments_groups_by_first_seen_label() {
        let rows = vec![
            ("Fall 2024", Course::new(1, "A", 3)),
            ("Spring 2025", Course::new(2, "B", 4)),
            ("Fall 2024", Course::new(3, "C", 3)),
        ];
        let plan = SchedulePlan::from_enrollments(rows);

        assert_eq!(plan.semester_count(), 2);
        assert_eq!(plan.semesters[0].label, "Fall 2024");
        assert_eq!(plan.semesters[0].course_count(), 2);
        assert_eq!(plan.semesters[0].courses[1].id, 3);
        assert_eq!(plan.semesters[1].label, "Spring 2025");
    }

    #[test]
    fn test_from_enrollments_blank_label() {
        let rows = vec![
            (String::new(), Course::new(1, "A", 3)),
            ("Semester 1".to_string(), Course::new(2, "B", 3)),
        ];
        let plan = SchedulePlan::from_enrollments(rows);
        assert_eq!(plan.semester_count(), 1);
        assert_eq!(plan.semesters[0].label, DEFAULT_SEMESTER_LABEL);
        assert_eq!(plan.semesters[0].course_count(), 2);
    }

    #[test]
    fn test_merge_result_partitions() {
        let result = MergeResult {
            merged_schedule: SchedulePlan::new(),
            added: vec![
                AddedCourseRecord::placed(Course::new(1, "A", 3), "Semester 1"),
                AddedCourseRecord::unscheduled(Course::new(2, "B", 3)),
            ],
        };
        assert_eq!(result.placed().count(), 1);
        assert_eq!(result.unscheduled().count(), 1);
        assert!(!result.is_complete());
        assert!(result.added[1].is_unscheduled());
        assert_eq!(result.added[1].target_label, UNSCHEDULED);
    }
}
