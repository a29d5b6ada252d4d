//! First-fit-descending greedy packer.
//!
//! # Algorithm
//!
//! 1. Stable-sort a copy of the courses by credits, descending.
//! 2. Open a bucket with the full capacity.
//! 3. Scan the sorted list once; place every unplaced course that still
//!    fits and deduct its credits.
//! 4. Close the bucket (full or not) and repeat until every course is placed.
//!
//! # Complexity
//! O(n * b) where n=courses, b=buckets produced (O(n²) worst case).
//!
//! # Reference
//! Johnson (1973), "Near-optimal bin packing algorithms", FFD heuristic

use tracing::{debug, trace};

use super::sort_by_credits_desc;
use crate::error::{PlanError, Result};
use crate::models::Course;
use crate::validation::ensure_placeable;

/// Deterministic first-fit-descending packer.
///
/// Not a minimal-bucket solver: it guarantees feasibility (no bucket over
/// capacity, every course placed exactly once) and a stable result for
/// identical inputs.
///
/// # Example
///
/// ```
/// use u_pathway::models::Course;
/// use u_pathway::packing::GreedyPacker;
///
/// let courses = vec![
///     Course::new(1, "ENG101", 4),
///     Course::new(2, "ENG201", 4),
///     Course::new(3, "ENG301", 3),
///     Course::new(4, "ENG401", 3),
/// ];
/// let buckets = GreedyPacker::new().pack(&courses, 7).unwrap();
/// assert_eq!(buckets.len(), 2);
/// assert_eq!(buckets[0].iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPacker;

impl GreedyPacker {
    /// Creates a packer.
    pub fn new() -> Self {
        Self
    }

    /// Packs courses into buckets of at most `capacity` credits.
    ///
    /// # Errors
    /// - [`PlanError::Configuration`] if `capacity` is zero.
    /// - [`PlanError::Infeasible`] if any single course exceeds `capacity`.
    ///
    /// Both checks run before any packing; no partial result is produced.
    pub fn pack(&self, courses: &[Course], capacity: u32) -> Result<Vec<Vec<Course>>> {
        if capacity == 0 {
            return Err(PlanError::configuration("bucket capacity must be positive"));
        }
        ensure_placeable(courses, capacity)?;

        let sorted = sort_by_credits_desc(courses);
        let mut used = vec![false; sorted.len()];
        let mut remaining = sorted.len();
        let mut buckets = Vec::new();

        while remaining > 0 {
            let mut room = capacity;
            let mut bucket = Vec::new();

            for (i, course) in sorted.iter().enumerate() {
                if used[i] || course.credits > room {
                    continue;
                }
                used[i] = true;
                room -= course.credits;
                remaining -= 1;
                trace!(course = %course.code, bucket = buckets.len(), room, "placed");
                bucket.push(course.clone());
            }

            buckets.push(bucket);
        }

        debug!(
            courses = courses.len(),
            capacity,
            buckets = buckets.len(),
            "greedy pack finished"
        );
        Ok(buckets)
    }

    /// Number of buckets [`pack`](Self::pack) would produce.
    pub fn bucket_count(&self, courses: &[Course], capacity: u32) -> Result<usize> {
        self.pack(courses, capacity).map(|b| b.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;

    fn courses_with_credits(credits: &[u32]) -> Vec<Course> {
        credits
            .iter()
            .enumerate()
            .map(|(i, &cr)| Course::new(i as i64 + 1, format!("C{}", i + 1), cr))
            .collect()
    }

    fn credits_of(bucket: &[Course]) -> Vec<u32> {
        bucket.iter().map(|c| c.credits).collect()
    }

    fn assert_feasible(courses: &[Course], buckets: &[Vec<Course>], capacity: u32) {
        let mut seen: HashMap<i64, usize> = HashMap::new();
        for bucket in buckets {
            let total: u32 = bucket.iter().map(|c| c.credits).sum();
            assert!(total <= capacity, "bucket over capacity: {total} > {capacity}");
            for c in bucket {
                *seen.entry(c.id).or_insert(0) += 1;
            }
        }
        assert_eq!(seen.len(), courses.len());
        assert!(seen.values().all(|&n| n == 1));
    }

    #[test]
    fn test_pack_two_full_buckets() {
        let courses = courses_with_credits(&[4, 4, 3, 3]);
        let buckets = GreedyPacker::new().pack(&courses, 7).unwrap();

        assert_eq!(buckets.len(), 2);
        assert_eq!(credits_of(&buckets[0]), vec![4, 3]);
        assert_eq!(credits_of(&buckets[1]), vec![4, 3]);
        assert_feasible(&courses, &buckets, 7);
    }

    #[test]
    fn test_pack_ties_keep_input_order() {
        let courses = courses_with_credits(&[3, 4, 3, 4]);
        let buckets = GreedyPacker::new().pack(&courses, 7).unwrap();

        // Sorted: C2(4), C4(4), C1(3), C3(3)
        let ids: Vec<Vec<i64>> = buckets
            .iter()
            .map(|b| b.iter().map(|c| c.id).collect())
            .collect();
        assert_eq!(ids, vec![vec![2, 1], vec![4, 3]]);
    }

    #[test]
    fn test_pack_skipped_course_retried_next_bucket() {
        let courses = courses_with_credits(&[5, 4, 2]);
        let buckets = GreedyPacker::new().pack(&courses, 6).unwrap();

        // 5 + (4 too big) + ... 2 too big after 5 → [5], then [4, 2]
        assert_eq!(credits_of(&buckets[0]), vec![5]);
        assert_eq!(credits_of(&buckets[1]), vec![4, 2]);
    }

    #[test]
    fn test_pack_empty_input() {
        let buckets = GreedyPacker::new().pack(&[], 18).unwrap();
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_pack_zero_capacity_is_configuration_error() {
        let courses = courses_with_credits(&[3]);
        let err = GreedyPacker::new().pack(&courses, 0).unwrap_err();
        assert!(matches!(err, PlanError::Configuration(_)));
    }

    #[test]
    fn test_pack_oversized_course_is_infeasible() {
        let courses = courses_with_credits(&[3, 8, 2]);
        let err = GreedyPacker::new().pack(&courses, 7).unwrap_err();
        assert_eq!(err, PlanError::infeasible("C2", 8, 7));
    }

    #[test]
    fn test_pack_course_exactly_at_capacity() {
        let courses = courses_with_credits(&[7, 7]);
        let buckets = GreedyPacker::new().pack(&courses, 7).unwrap();
        assert_eq!(buckets.len(), 2);
        assert_feasible(&courses, &buckets, 7);
    }

    #[test]
    fn test_pack_zero_credit_courses() {
        let courses = courses_with_credits(&[0, 3, 0]);
        let buckets = GreedyPacker::new().pack(&courses, 3).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(credits_of(&buckets[0]), vec![3, 0, 0]);
    }

    #[test]
    fn test_pack_does_not_mutate_input() {
        let courses = courses_with_credits(&[1, 2, 3]);
        let before = courses.clone();
        let _ = GreedyPacker::new().pack(&courses, 4).unwrap();
        assert_eq!(courses, before);
    }

    #[test]
    fn test_bucket_count() {
        let courses = courses_with_credits(&[4, 4, 3, 3]);
        assert_eq!(GreedyPacker::new().bucket_count(&courses, 7).unwrap(), 2);
        assert_eq!(GreedyPacker::new().bucket_count(&courses, 14).unwrap(), 1);
    }

    #[test]
    fn test_pack_random_inputs_feasible_and_deterministic() {
        let mut rng = SmallRng::seed_from_u64(42);
        let packer = GreedyPacker::new();

        for _ in 0..200 {
            let n = rng.random_range(0..40);
            let capacity = rng.random_range(1..=21);
            let credits: Vec<u32> = (0..n).map(|_| rng.random_range(0..=capacity)).collect();
            let courses = courses_with_credits(&credits);

            let first = packer.pack(&courses, capacity).unwrap();
            let second = packer.pack(&courses, capacity).unwrap();
            assert_feasible(&courses, &first, capacity);
            assert_eq!(first, second);
        }
    }
}
