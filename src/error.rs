//! Error types for the planning core.

use thiserror::Error;

/// Result type for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors raised by the planning core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Non-positive capacity or target, or inconsistent credit bounds
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A catalog or completion provider could not produce its data
    #[error("Data unavailable from {source_name}: {message}")]
    DataUnavailable {
        source_name: String,
        message: String,
    },

    /// A course can never fit a bucket of the given capacity
    #[error("Course {course} needs {credits} credits but the limit is {limit}")]
    Infeasible {
        course: String,
        credits: u32,
        limit: u32,
    },
}

impl PlanError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a data-unavailable error
    pub fn data_unavailable(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            message: msg.into(),
        }
    }

    /// Create an infeasible-input error
    pub fn infeasible(course: impl Into<String>, credits: u32, limit: u32) -> Self {
        Self::Infeasible {
            course: course.into(),
            credits,
            limit,
        }
    }
}
