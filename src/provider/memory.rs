//! In-memory catalog and completion stores.

use std::collections::HashMap;

use super::{CompletionRecords, CourseCatalog};
use crate::error::Result;
use crate::models::{Course, CourseId, Pathway};

/// Catalog backed by in-memory pathways.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pathways: HashMap<String, Pathway>,
    by_id: HashMap<CourseId, Course>,
    by_code: HashMap<String, Course>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pathway and indexes its courses.
    pub fn with_pathway(mut self, pathway: Pathway) -> Self {
        self.add_pathway(pathway);
        self
    }

    /// Registers a pathway and indexes its courses.
    ///
    /// Re-registering a pathway id replaces its requirement list.
    pub fn add_pathway(&mut self, pathway: Pathway) {
        for course in &pathway.required {
            self.by_id.insert(course.id, course.clone());
            self.by_code.insert(course.code.clone(), course.clone());
        }
        self.pathways.insert(pathway.id.clone(), pathway);
    }

    /// Number of registered pathways.
    pub fn pathway_count(&self) -> usize {
        self.pathways.len()
    }
}

impl CourseCatalog for InMemoryCatalog {
    fn courses_for_pathway(&self, pathway_id: &str) -> Result<Vec<Course>> {
        Ok(self
            .pathways
            .get(pathway_id)
            .map(|p| p.required.clone())
            .unwrap_or_default())
    }

    fn course_by_id(&self, id: CourseId) -> Result<Option<Course>> {
        Ok(self.by_id.get(&id).cloned())
    }

    fn course_by_code(&self, code: &str) -> Result<Option<Course>> {
        Ok(self.by_code.get(code).cloned())
    }
}

/// Completion records backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompletions {
    completed: HashMap<String, Vec<CourseId>>,
}

impl InMemoryCompletions {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the completed course ids for a student.
    pub fn with_completed(
        mut self,
        user_id: impl Into<String>,
        ids: impl IntoIterator<Item = CourseId>,
    ) -> Self {
        self.set_completed(user_id, ids);
        self
    }

    /// Sets the completed course ids for a student.
    pub fn set_completed(
        &mut self,
        user_id: impl Into<String>,
        ids: impl IntoIterator<Item = CourseId>,
    ) {
        self.completed
            .insert(user_id.into(), ids.into_iter().collect());
    }
}

impl CompletionRecords for InMemoryCompletions {
    fn completed_course_ids(&self, user_id: &str) -> Result<Vec<CourseId>> {
        Ok(self.completed.get(user_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new()
            .with_pathway(
                Pathway::new("CS")
                    .with_course(Course::new(1, "CS101", 3).with_title("Intro CS"))
                    .with_course(Course::new(2, "CS102", 3).with_title("Data Structures")),
            )
            .with_pathway(Pathway::new("MATH").with_course(Course::new(10, "MATH101", 4)))
    }

    #[test]
    fn test_courses_for_pathway_keeps_order() {
        let catalog = sample_catalog();
        let courses = catalog.courses_for_pathway("CS").unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].code, "CS101");
        assert_eq!(courses[1].code, "CS102");
        assert_eq!(catalog.pathway_count(), 2);
    }

    #[test]
    fn test_unknown_pathway_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.courses_for_pathway("HIST").unwrap().is_empty());
    }

    #[test]
    fn test_course_lookups() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.course_by_id(10).unwrap().map(|c| c.code),
            Some("MATH101".to_string())
        );
        assert_eq!(catalog.course_by_code("CS102").unwrap().map(|c| c.id), Some(2));
        assert!(catalog.course_by_id(99).unwrap().is_none());
        assert!(catalog.course_by_code("NOPE").unwrap().is_none());
    }

    #[test]
    fn test_completions() {
        let store = InMemoryCompletions::new().with_completed("u1", vec![1, 10]);
        assert_eq!(store.completed_course_ids("u1").unwrap(), vec![1, 10]);
        assert!(store.completed_course_ids("u2").unwrap().is_empty());
    }
}
