//! Pathway projection service.
//!
//! Ties the data sources to the algorithms: resolves what a student still
//! needs, then either packs it into a fresh projection or merges it into the
//! student's existing plan.

use tracing::debug;

use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::merge::MergeEngine;
use crate::models::{CompletionSet, Course, MergeResult, SchedulePlan, SemesterPlan};
use crate::packing::GreedyPacker;
use crate::provider::{CompletionRecords, CourseCatalog};
use crate::resolver::{load_completions, RequirementResolver};

/// Projects and merges a student's remaining coursework.
///
/// # Example
///
/// ```
/// use u_pathway::models::{Course, Pathway};
/// use u_pathway::planner::ScheduleProjector;
/// use u_pathway::provider::{InMemoryCatalog, InMemoryCompletions};
///
/// let catalog = InMemoryCatalog::new().with_pathway(
///     Pathway::new("ENG")
///         .with_course(Course::new(30, "ENG101", 4))
///         .with_course(Course::new(31, "ENG201", 4))
///         .with_course(Course::new(32, "ENG301", 3))
///         .with_course(Course::new(33, "ENG401", 3)),
/// );
/// let completions = InMemoryCompletions::new().with_completed("u1", [99]);
///
/// let projector = ScheduleProjector::new(&catalog, &completions);
/// let plan = projector.project_missing_courses("ENG", "u1", 7).unwrap();
/// assert_eq!(plan.semester_count(), 2);
/// assert_eq!(plan.semesters[1].label, "Semester 2");
/// ```
#[derive(Clone)]
pub struct ScheduleProjector<'a> {
    catalog: &'a dyn CourseCatalog,
    completions: &'a dyn CompletionRecords,
    config: PlannerConfig,
    packer: GreedyPacker,
}

impl<'a> ScheduleProjector<'a> {
    /// Creates a projector with the default limits.
    pub fn new(catalog: &'a dyn CourseCatalog, completions: &'a dyn CompletionRecords) -> Self {
        Self {
            catalog,
            completions,
            config: PlannerConfig::default(),
            packer: GreedyPacker::new(),
        }
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

    /// Completed course ids for a student.
    pub fn completion_set(&self, user_id: &str) -> Result<CompletionSet> {
        load_completions(self.completions, user_id)
    }

    /// Courses the student still needs for a pathway, in catalog order.
    pub fn missing_courses_for_pathway(
        &self,
        pathway_id: &str,
        user_id: &str,
    ) -> Result<Vec<Course>> {
        self.resolver()
            .missing_for_user(pathway_id, user_id, self.completions)
    }

    /// Outstanding courses for a major and optional minor, de-duplicated.
    pub fn missing_courses_for_programs(
        &self,
        major_id: &str,
        minor_id: Option<&str>,
        user_id: &str,
    ) -> Result<Vec<Course>> {
        let completed = self.completion_set(user_id)?;
        self.resolver().missing_combined(major_id, minor_id, &completed)
    }

    /// Credits still outstanding for a pathway.
    pub fn remaining_credits(&self, pathway_id: &str, user_id: &str) -> Result<u32> {
        Ok(self
            .missing_courses_for_pathway(pathway_id, user_id)?
            .iter()
            .map(|c| c.credits)
            .sum())
    }

    /// Whether the outstanding credits are within the near-completion
    /// threshold (9 by default).
    pub fn is_near_completion(&self, pathway_id: &str, user_id: &str) -> Result<bool> {
        Ok(self.remaining_credits(pathway_id, user_id)? <= self.config.near_completion_credits)
    }

    /// Number of semesters the greedy packer needs for the outstanding
    /// courses; zero when nothing is outstanding.
    pub fn estimate_semesters_needed(
        &self,
        pathway_id: &str,
        user_id: &str,
        credits_per_semester: u32,
    ) -> Result<usize> {
        check_capacity(credits_per_semester)?;
        let missing = self.missing_courses_for_pathway(pathway_id, user_id)?;
        if missing.is_empty() {
            return Ok(0);
        }
        self.packer.bucket_count(&missing, credits_per_semester)
    }

    /// Packs a pathway's outstanding courses into a fresh plan.
    pub fn project_missing_courses(
        &self,
        pathway_id: &str,
        user_id: &str,
        credits_per_semester: u32,
    ) -> Result<SchedulePlan> {
        check_capacity(credits_per_semester)?;
        let missing = self.missing_courses_for_pathway(pathway_id, user_id)?;
        self.project(&missing, credits_per_semester)
    }

    /// Packs the combined outstanding courses of a major and optional minor.
    pub fn project_for_programs(
        &self,
        major_id: &str,
        minor_id: Option<&str>,
        user_id: &str,
        credits_per_semester: u32,
    ) -> Result<SchedulePlan> {
        check_capacity(credits_per_semester)?;
        let missing = self.missing_courses_for_programs(major_id, minor_id, user_id)?;
        self.project(&missing, credits_per_semester)
    }

    /// Merges a pathway's outstanding courses into an existing plan using
    /// the configured target credits.
    pub fn merge_with_existing_schedule(
        &self,
        original: &SchedulePlan,
        pathway_id: &str,
        user_id: &str,
    ) -> Result<MergeResult> {
        self.merge_with_existing_schedule_target(
            original,
            pathway_id,
            user_id,
            self.config.target_credits,
        )
    }

    /// Merges with an explicit target credits per semester.
    pub fn merge_with_existing_schedule_target(
        &self,
        original: &SchedulePlan,
        pathway_id: &str,
        user_id: &str,
        target_credits: u32,
    ) -> Result<MergeResult> {
        let missing = self.missing_courses_for_pathway(pathway_id, user_id)?;
        self.engine()
            .merge_with_target(original, &missing, target_credits)
    }

    /// Merges the combined outstanding courses of a major and optional minor.
    pub fn merge_programs_with_existing_schedule(
        &self,
        original: &SchedulePlan,
        major_id: &str,
        minor_id: Option<&str>,
        user_id: &str,
    ) -> Result<MergeResult> {
        let missing = self.missing_courses_for_programs(major_id, minor_id, user_id)?;
        self.engine().merge(original, &missing)
    }

    fn resolver(&self) -> RequirementResolver<'a> {
        RequirementResolver::new(self.catalog)
    }

    fn engine(&self) -> MergeEngine {
        MergeEngine::new().with_config(self.config.clone())
    }

    fn project(&self, courses: &[Course], credits_per_semester: u32) -> Result<SchedulePlan> {
        let buckets = self.packer.pack(courses, credits_per_semester)?;
        let plan = SchedulePlan {
            semesters: buckets
                .into_iter()
                .enumerate()
                .map(|(i, courses)| SemesterPlan {
                    label: self.config.semester_label(i + 1),
                    courses,
                })
                .collect(),
        };
        debug!(
            semesters = plan.semester_count(),
            credits = plan.total_credits(),
            "projected outstanding courses"
        );
        Ok(plan)
    }
}

fn check_capacity(credits_per_semester: u32) -> Result<()> {
    if credits_per_semester == 0 {
        return Err(PlanError::configuration(
            "credits per semester must be positive",
        ));
    }
    Ok(())
}
