// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! N-gram (q-gram) set distance.
//!
//! Each string is reduced to the set of its distinct `n`-char windows. The
//! distance is `sqrt(|A \ B| + |B \ A|)`: the square root of the size of the
//! symmetric difference.
//!
//! Membership only. A window that occurs three times in `s1` and once in `s2`
//! contributes nothing. Switching to occurrence counts would change results,
//! so it is not done here.

use std::collections::HashSet;

use crate::contracts::check_ngram_distance_bound;
use crate::error::DistanceError;

/// Distinct `n`-char windows of `s`, borrowed from `s`.
///
/// Windows are cut on char boundaries, so multi-byte text is safe. Returns
/// the empty set when `n == 0` or `n` exceeds the char count.
pub fn ngram_set(s: &str, n: usize) -> HashSet<&str> {
    if n == 0 {
        return HashSet::new();
    }

    // Byte offset of every char start, plus the end of the string
    let bounds: Vec<usize> = s
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()))
        .collect();
    let char_len = bounds.len() - 1;
    if n > char_len {
        return HashSet::new();
    }

    bounds
        .windows(n + 1)
        .map(|w| &s[w[0]..w[n]])
        .collect()
}

/// Validate a window size against both inputs: `1 <= n <= min(len(s1), len(s2))`.
pub fn check_window(s1: &str, s2: &str, n: usize) -> Result<(), DistanceError> {
    if n == 0 {
        log::debug!("rejecting n-gram window of 0");
        return Err(DistanceError::EmptyWindow);
    }

    let max = s1.chars().count().min(s2.chars().count());
    if n > max {
        log::debug!("rejecting n-gram window {} (max {})", n, max);
        return Err(DistanceError::WindowTooLarge { n, max });
    }

    Ok(())
}

/// Distance between the `n`-gram sets of `s1` and `s2`.
///
/// Fails with a range error unless `1 <= n <= min(len(s1), len(s2))`.
///
/// ```
/// let d = textdist::n_gram_distance("night", "nacht", 2).unwrap();
/// assert!((d - 6f64.sqrt()).abs() < 1e-12);
/// ```
pub fn n_gram_distance(s1: &str, s2: &str, n: usize) -> Result<f64, DistanceError> {
    check_window(s1, s2, n)?;

    let a = ngram_set(s1, n);
    let b = ngram_set(s2, n);

    let only_a = a.difference(&b).count();
    let only_b = b.difference(&a).count();
    let distance = ((only_a + only_b) as f64).sqrt();

    check_ngram_distance_bound(a.len(), b.len(), distance);
    Ok(distance)
}
