//! Course model.
//!
//! A course is the unit of work being planned: one catalog entry with a
//! credit weight. Every adapter (database rows, spreadsheet imports, web
//! forms) normalizes into this one type before the planning core sees it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog course identifier.
pub type CourseId = i64;

/// A catalog course.
///
/// Identity is `id`: two values with the same `id` describe the same
/// requirement, regardless of the other fields. `code` is a secondary
/// lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Catalog code (e.g., "CMPS1270").
    pub code: String,
    /// Credit weight. Used as given, never rescaled.
    pub credits: u32,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Meeting time description (display only).
    #[serde(default)]
    pub meeting_time: String,
}

impl Course {
    /// Creates a course with an empty title and meeting time.
    pub fn new(id: CourseId, code: impl Into<String>, credits: u32) -> Self {
        Self {
            id,
            code: code.into(),
            credits,
            title: String::new(),
            meeting_time: String::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the meeting time.
    pub fn with_meeting_time(mut self, meeting_time: impl Into<String>) -> Self {
        self.meeting_time = meeting_time.into();
        self
    }

    /// Compact label: `CODE (Ncr)`.
    pub fn short_info(&self) -> String {
        format!("{} ({}cr)", self.code, self.credits)
    }

    /// Whether both values describe the same requirement.
    #[inline]
    pub fn same_requirement(&self, other: &Course) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}cr", self.code, self.id, self.credits)?;
        if !self.title.is_empty() {
            write!(f, " - {}", self.title)?;
        }
        if !self.meeting_time.is_empty() {
            write!(f, ", {}", self.meeting_time)?;
        }
        Ok(())
    }
}
