//! Greedy semester packing.
//!
//! Packs a course list into capacity-bounded buckets (semesters) with a
//! deterministic first-fit-descending heuristic.
//!
//! # Ordering
//!
//! Every placement decision in the crate scans courses in the same order:
//! credits descending, ties broken by input (catalog) order. The merge engine
//! reuses [`sort_by_credits_desc`] so both planners agree on tie-breaks.
//!
//! # References
//!
//! - Johnson (1973), "Near-optimal bin packing algorithms"
//! - Coffman, Garey & Johnson (1996), "Approximation algorithms for bin packing: a survey"

mod greedy;

pub use greedy::GreedyPacker;

use crate::models::Course;

/// Returns a copy of `courses` stable-sorted by credits, descending.
pub fn sort_by_credits_desc(courses: &[Course]) -> Vec<Course> {
    let mut sorted = courses.to_vec();
    sorted.sort_by(|a, b| b.credits.cmp(&a.credits));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_descending_and_stable() {
        let courses = vec![
            Course::new(1, "A", 3),
            Course::new(2, "B", 4),
            Course::new(3, "C", 3),
            Course::new(4, "D", 1),
            Course::new(5, "E", 4),
        ];
        let ids: Vec<i64> = sort_by_credits_desc(&courses).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 5, 1, 3, 4]);
    }
}
