//! Pathway and completion models.
//!
//! A pathway (major or minor) is an ordered list of required courses. The
//! order is the catalog order and is the tie-break for every packing
//! decision downstream, so it is preserved verbatim.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Course, CourseId};

/// A major or minor and its required courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    /// Opaque pathway identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Required courses, in catalog order.
    #[serde(default)]
    pub required: Vec<Course>,
}

impl Pathway {
    /// Creates an empty pathway.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            required: Vec::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a required course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.required.push(course);
        self
    }

    /// Total credits across all requirements.
    pub fn total_credits(&self) -> u32 {
        self.required.iter().map(|c| c.credits).sum()
    }
}

/// Completed course ids for one student.
///
/// Membership only; order and multiplicity are irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSet {
    completed: HashSet<CourseId>,
}

impl CompletionSet {
    /// Creates an empty completion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a course as completed.
    pub fn insert(&mut self, id: CourseId) -> bool {
        self.completed.insert(id)
    }

    /// Whether the course has been completed.
    #[inline]
    pub fn contains(&self, id: CourseId) -> bool {
        self.completed.contains(&id)
    }

    /// Number of completed courses.
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether nothing has been completed.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

impl FromIterator<CourseId> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = CourseId>>(iter: I) -> Self {
        Self {
            completed: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<CourseId>> for CompletionSet {
    fn from(ids: Vec<CourseId>) -> Self {
        ids.into_iter().collect()
    }
}
