//! Runtime contracts for the distance functions.
//!
//! Debug-mode assertions that check the documented properties of each
//! result. They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** during development and fuzzing
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                   |
//! |--------------------------------|--------------------------------------------|
//! | `check_matrix_base_case`       | `m[i][0] == i`, `m[0][j] == j`             |
//! | `check_levenshtein_bounds`     | `len1.abs_diff(len2) <= d <= max(len1, len2)` |
//! | `check_ngram_distance_bound`   | `0 <= d <= sqrt(A.len() + B.len())`        |

use crate::fuzzy::DistanceMatrix;

// ============================================================================
// LEVENSHTEIN CONTRACTS
// ============================================================================

/// Check that row 0 and column 0 hold the distances from the empty string.
///
/// # Panics (debug builds only)
/// Panics if any base-case cell differs from its index.
#[inline]
pub fn check_matrix_base_case(matrix: &DistanceMatrix) {
    if cfg!(debug_assertions) {
        for i in 0..matrix.rows() {
            debug_assert_eq!(
                matrix.get(i, 0),
                Some(i),
                "Contract violation: matrix[{}][0] != {}",
                i,
                i
            );
        }
        for j in 0..matrix.cols() {
            debug_assert_eq!(
                matrix.get(0, j),
                Some(j),
                "Contract violation: matrix[0][{}] != {}",
                j,
                j
            );
        }
    }
}

/// Check that an edit distance lies between the length difference and the
/// longer length.
///
/// The lower bound holds because each edit changes the length by at most one;
/// the upper bound because substituting the overlap and inserting/deleting the
/// rest always works.
#[inline]
pub fn check_levenshtein_bounds(len1: usize, len2: usize, distance: usize) {
    debug_assert!(
        len1.abs_diff(len2) <= distance,
        "Contract violation: distance {} < |{} - {}|",
        distance,
        len1,
        len2
    );
    debug_assert!(
        distance <= len1.max(len2),
        "Contract violation: distance {} > max({}, {})",
        distance,
        len1,
        len2
    );
}

// ============================================================================
// N-GRAM CONTRACTS
// ============================================================================

/// Check that an n-gram distance is finite, non-negative and no larger than
/// the fully disjoint case.
#[inline]
pub fn check_ngram_distance_bound(set1_len: usize, set2_len: usize, distance: f64) {
    debug_assert!(
        distance.is_finite() && distance >= 0.0,
        "Contract violation: n-gram distance {} is negative or not finite",
        distance
    );
    debug_assert!(
        distance <= ((set1_len + set2_len) as f64).sqrt(),
        "Contract violation: n-gram distance {} > sqrt({} + {})",
        distance,
        set1_len,
        set2_len
    );
}
