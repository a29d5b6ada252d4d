//! Outstanding-requirement resolution.
//!
//! Computes which required courses of a pathway a student has not yet
//! completed. The result keeps catalog order, which downstream packing
//! uses as its tie-break.
//!
//! For a major/minor pair, each pathway is resolved independently and the
//! lists are concatenated with duplicates removed by course id; the first
//! pathway's copy of a shared course wins.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{CompletionSet, Course};
use crate::provider::{CompletionRecords, CourseCatalog};

/// Resolves outstanding courses against a catalog.
///
/// # Example
///
/// ```
/// use u_pathway::models::{CompletionSet, Course, Pathway};
/// use u_pathway::provider::InMemoryCatalog;
/// use u_pathway::resolver::RequirementResolver;
///
/// let catalog = InMemoryCatalog::new().with_pathway(
///     Pathway::new("MATH")
///         .with_course(Course::new(10, "MATH101", 4))
///         .with_course(Course::new(11, "MATH201", 4)),
/// );
/// let completed: CompletionSet = vec![10].into();
///
/// let missing = RequirementResolver::new(&catalog).missing("MATH", &completed).unwrap();
/// assert_eq!(missing.len(), 1);
/// assert_eq!(missing[0].code, "MATH201");
/// ```
#[derive(Clone, Copy)]
pub struct RequirementResolver<'a> {
    catalog: &'a dyn CourseCatalog,
}

impl<'a> RequirementResolver<'a> {
    /// Creates a resolver over the given catalog.
    pub fn new(catalog: &'a dyn CourseCatalog) -> Self {
        Self { catalog }
    }

    /// Required courses of `pathway_id` not in `completed`, in catalog order.
    ///
    /// # Errors
    /// Propagates [`PlanError::DataUnavailable`](crate::PlanError::DataUnavailable)
    /// from the catalog.
    pub fn missing(&self, pathway_id: &str, completed: &CompletionSet) -> Result<Vec<Course>> {
        let required = self.catalog.courses_for_pathway(pathway_id).map_err(|e| {
            warn!(pathway = pathway_id, error = %e, "catalog lookup failed");
            e
        })?;
        let missing = outstanding(&required, completed);
        debug!(
            pathway = pathway_id,
            required = required.len(),
            missing = missing.len(),
            "resolved outstanding requirements"
        );
        Ok(missing)
    }

    /// Required courses of `pathway_id` the student has not completed,
    /// reading the completion record from `completions`.
    ///
    /// # Errors
    /// Propagates [`PlanError::DataUnavailable`](crate::PlanError::DataUnavailable)
    /// from either provider. The catalog is not consulted when the
    /// completion lookup fails.
    pub fn missing_for_user(
        &self,
        pathway_id: &str,
        user_id: &str,
        completions: &dyn CompletionRecords,
    ) -> Result<Vec<Course>> {
        let completed = load_completions(completions, user_id)?;
        self.missing(pathway_id, &completed)
    }

    /// Outstanding courses across two pathways, de-duplicated by id.
    ///
    /// `second` may be `None` (or empty), in which case only `first` is
    /// resolved.
    pub fn missing_combined(
        &self,
        first: &str,
        second: Option<&str>,
        completed: &CompletionSet,
    ) -> Result<Vec<Course>> {
        let mut combined = self.missing(first, completed)?;
        if let Some(second) = second.filter(|id| !id.is_empty()) {
            combined.extend(self.missing(second, completed)?);
        }
        Ok(dedup_by_id(combined))
    }
}

/// Reads a student's completed course ids from `completions`.
pub fn load_completions(
    completions: &dyn CompletionRecords,
    user_id: &str,
) -> Result<CompletionSet> {
    let ids = completions.completed_course_ids(user_id).map_err(|e| {
        warn!(user = user_id, error = %e, "completion lookup failed");
        e
    })?;
    Ok(ids.into())
}

/// Filters `required` down to courses whose id is not in `completed`.
pub fn outstanding(required: &[Course], completed: &CompletionSet) -> Vec<Course> {
    required
        .iter()
        .filter(|c| !completed.contains(c.id))
        .cloned()
        .collect()
}

/// Removes repeated course ids, keeping the first occurrence.
pub fn dedup_by_id(courses: Vec<Course>) -> Vec<Course> {
    let mut seen = HashSet::new();
    courses.into_iter().filter(|c| seen.insert(c.id)).collect()
}
