//! Plan quality metrics (KPIs).
//!
//! Summarizes how well a plan respects the per-semester credit bounds.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Semester count | Number of semesters in the plan |
//! | Total credits | Sum of all planned credits |
//! | Avg credits | Mean credits per semester |
//! | Under-minimum | Semesters below the minimum load |
//! | Over-maximum | Semesters above the hard maximum |
//! | Unscheduled | Outstanding courses left without a semester |

use crate::config::PlannerConfig;
use crate::models::{MergeResult, SchedulePlan};

/// Plan load indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanKpi {
    /// Number of semesters.
    pub semester_count: usize,
    /// Number of planned courses.
    pub total_courses: usize,
    /// Sum of planned credits.
    pub total_credits: u32,
    /// Mean credits per semester (0.0 for an empty plan).
    pub avg_credits_per_semester: f64,
    /// Semesters below `min_credits`.
    pub under_minimum_semesters: usize,
    /// Semesters above `max_credits`.
    pub over_maximum_semesters: usize,
    /// Courses recorded as unscheduled.
    pub unscheduled_courses: usize,
}

impl PlanKpi {
    /// Computes KPIs for a plan under the given bounds.
    pub fn calculate(plan: &SchedulePlan, config: &PlannerConfig) -> Self {
        let semester_count = plan.semester_count();
        let total_credits = plan.total_credits();
        let avg_credits_per_semester = if semester_count == 0 {
            0.0
        } else {
            total_credits as f64 / semester_count as f64
        };

        let mut under = 0;
        let mut over = 0;
        for sem in &plan.semesters {
            let credits = sem.total_credits();
            if credits < config.min_credits {
                under += 1;
            }
            if credits > config.max_credits {
                over += 1;
            }
        }

        Self {
            semester_count,
            total_courses: plan.total_courses(),
            total_credits,
            avg_credits_per_semester,
            under_minimum_semesters: under,
            over_maximum_semesters: over,
            unscheduled_courses: 0,
        }
    }

    /// Computes KPIs for a merged plan, counting its unscheduled courses.
    pub fn from_merge(result: &MergeResult, config: &PlannerConfig) -> Self {
        Self {
            unscheduled_courses: result.unscheduled().count(),
            ..Self::calculate(&result.merged_schedule, config)
        }
    }

    /// Whether nothing is over the maximum and nothing is unscheduled.
    ///
    /// Under-filled semesters are allowed; the merge may legitimately leave
    /// one below the minimum when no outstanding course fits.
    pub fn meets_bounds(&self) -> bool {
        self.over_maximum_semesters == 0 && self.unscheduled_courses == 0
    }

    /// Whether nothing is over the maximum, nothing is unscheduled, and at
    /// most `max_underfilled` semesters are below the minimum.
    pub fn meets_thresholds(&self, max_underfilled: usize) -> bool {
        self.meets_bounds() && self.under_minimum_semesters <= max_underfilled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddedCourseRecord, Course, SemesterPlan};

    fn sample_plan() -> SchedulePlan {
        SchedulePlan::new()
            .with_semester(
                SemesterPlan::new("Semester 1")
                    .with_course(Course::new(1, "A", 9))
                    .with_course(Course::new(2, "B", 9)),
            )
            .with_semester(SemesterPlan::new("Semester 2").with_course(Course::new(3, "C", 6)))
    }

    #[test]
    fn test_kpi_basic() {
        let kpi = PlanKpi::calculate(&sample_plan(), &PlannerConfig::default());
        assert_eq!(kpi.semester_count, 2);
        assert_eq!(kpi.total_courses, 3);
        assert_eq!(kpi.total_credits, 24);
        assert!((kpi.avg_credits_per_semester - 12.0).abs() < 1e-10);
        assert_eq!(kpi.under_minimum_semesters, 1);
        assert_eq!(kpi.over_maximum_semesters, 0);
        assert_eq!(kpi.unscheduled_courses, 0);
    }

    #[test]
    fn test_kpi_over_maximum() {
        let plan = SchedulePlan::new().with_semester(
            SemesterPlan::new("Heavy")
                .with_course(Course::new(1, "A", 12))
                .with_course(Course::new(2, "B", 12)),
        );
        let kpi = PlanKpi::calculate(&plan, &PlannerConfig::default());
        assert_eq!(kpi.over_maximum_semesters, 1);
        assert!(!kpi.meets_thresholds(0));
    }

    #[test]
    fn test_kpi_from_merge() {
        let result = MergeResult {
            merged_schedule: sample_plan(),
            added: vec![
                AddedCourseRecord::placed(Course::new(3, "C", 6), "Semester 2"),
                AddedCourseRecord::unscheduled(Course::new(4, "D", 3)),
            ],
        };
        let kpi = PlanKpi::from_merge(&result, &PlannerConfig::default());
        assert_eq!(kpi.unscheduled_courses, 1);
        assert_eq!(kpi.total_credits, 24);
        assert!(!kpi.meets_thresholds(1));
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = PlanKpi::calculate(&SchedulePlan::new(), &PlannerConfig::default());
        assert_eq!(kpi.semester_count, 0);
        assert!((kpi.avg_credits_per_semester - 0.0).abs() < 1e-10);
        assert!(kpi.meets_thresholds(0));
    }

    #[test]
    fn test_meets_bounds() {
        let kpi = PlanKpi::calculate(&sample_plan(), &PlannerConfig::default());
        assert_eq!(kpi.under_minimum_semesters, 1);
        assert!(kpi.meets_bounds());

        let heavy = SchedulePlan::new().with_semester(
            SemesterPlan::new("Heavy")
                .with_course(Course::new(1, "A", 12))
                .with_course(Course::new(2, "B", 12)),
        );
        assert!(!PlanKpi::calculate(&heavy, &PlannerConfig::default()).meets_bounds());

        let partial = MergeResult {
            merged_schedule: sample_plan(),
            added: vec![AddedCourseRecord::unscheduled(Course::new(4, "D", 3))],
        };
        assert!(!PlanKpi::from_merge(&partial, &PlannerConfig::default()).meets_bounds());
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = PlanKpi::calculate(&sample_plan(), &PlannerConfig::default());
        assert!(kpi.meets_thresholds(1));
        assert!(!kpi.meets_thresholds(0));
    }
}
