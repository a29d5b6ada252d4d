//! Planner configuration.
//!
//! Credit bounds and semester limits used by the merge engine and the
//! projection service. Defaults follow the usual undergraduate load rules:
//! 12 credits minimum, 18 target, 21 hard maximum, 8 semesters.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Default minimum credits per semester.
pub const MIN_CREDITS: u32 = 12;
/// Default hard maximum credits per semester.
pub const MAX_CREDITS: u32 = 21;
/// Default cap on the number of semesters in a plan.
pub const MAX_SEMESTERS: usize = 8;
/// Default target credits per semester.
pub const TARGET_CREDITS: u32 = 18;
/// Default remaining-credit threshold for "near completion".
pub const NEAR_COMPLETION_CREDITS: u32 = 9;

/// Planner limits and labelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Credits a semester should reach before the planner moves on.
    pub min_credits: u32,
    /// Hard per-semester credit ceiling.
    pub max_credits: u32,
    /// Maximum number of semesters in a merged plan.
    pub max_semesters: usize,
    /// Preferred per-semester load.
    pub target_credits: u32,
    /// Remaining credits at or below which a pathway counts as nearly done.
    pub near_completion_credits: u32,
    /// Prefix for generated semester labels ("Semester" → "Semester 3").
    pub semester_label_prefix: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_credits: MIN_CREDITS,
            max_credits: MAX_CREDITS,
            max_semesters: MAX_SEMESTERS,
            target_credits: TARGET_CREDITS,
            near_completion_credits: NEAR_COMPLETION_CREDITS,
            semester_label_prefix: "Semester".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML fragment. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)
            .map_err(|e| PlanError::configuration(format!("invalid planner TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the minimum credits per semester.
    ///
    /// Must be positive and at most `max_credits`; see [`validate`](Self::validate).
    pub fn with_min_credits(mut self, credits: u32) -> Self {
        self.min_credits = credits;
        self
    }

    /// Sets the hard maximum credits per semester.
    pub fn with_max_credits(mut self, credits: u32) -> Self {
        self.max_credits = credits;
        self
    }

    /// Sets the semester cap.
    pub fn with_max_semesters(mut self, semesters: usize) -> Self {
        self.max_semesters = semesters;
        self
    }

    /// Sets the target credits per semester.
    pub fn with_target_credits(mut self, credits: u32) -> Self {
        self.target_credits = credits;
        self
    }

    /// Sets the near-completion threshold.
    pub fn with_near_completion_credits(mut self, credits: u32) -> Self {
        self.near_completion_credits = credits;
        self
    }

    /// Sets the generated label prefix.
    pub fn with_semester_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.semester_label_prefix = prefix.into();
        self
    }

    /// Label for the semester at 1-based position `n`.
    pub fn semester_label(&self, n: usize) -> String {
        format!("{} {}", self.semester_label_prefix, n)
    }

    /// Checks that the bounds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_credits == 0 {
            return Err(PlanError::configuration("max_credits must be positive"));
        }
        if self.target_credits == 0 {
            return Err(PlanError::configuration("target_credits must be positive"));
        }
        if self.min_credits == 0 {
            return Err(PlanError::configuration("min_credits must be positive"));
        }
        if self.min_credits > self.max_credits {
            return Err(PlanError::configuration(format!(
                "min_credits ({}) exceeds max_credits ({})",
                self.min_credits, self.max_credits
            )));
        }
        if self.max_semesters == 0 {
            return Err(PlanError::configuration("max_semesters must be positive"));
        }
        Ok(())
    }
}
