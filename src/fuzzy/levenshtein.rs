// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance via the full Wagner–Fischer table.
//!
//! Cell `(i, j)` holds the minimum number of unit-cost insertions, deletions
//! and substitutions turning the first `i` chars of `s1` into the first `j`
//! chars of `s2`. Row 0 and column 0 are the distances from the empty string.
//!
//! Everything is measured in chars, not bytes: `"café"` has length 4.

use crate::contracts::{check_levenshtein_bounds, check_matrix_base_case};

/// The `(len(s1)+1) x (len(s2)+1)` Wagner–Fischer table for one pair of strings.
///
/// Stored row-major in one contiguous buffer. Lives only as long as the caller
/// keeps it; `levenshtein_distance` builds one and drops it immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Fill the table for `s1` (rows) against `s2` (columns).
    pub fn new(s1: &str, s2: &str) -> Self {
        let a: Vec<char> = s1.chars().collect();
        let b: Vec<char> = s2.chars().collect();
        let rows = a.len() + 1;
        let cols = b.len() + 1;

        log::trace!("levenshtein matrix {}x{}", rows, cols);

        let mut cells = vec![0usize; rows * cols];
        for i in 0..rows {
            cells[i * cols] = i;
        }
        for j in 0..cols {
            cells[j] = j;
        }

        for i in 1..rows {
            for j in 1..cols {
                let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
                let deletion = cells[(i - 1) * cols + j] + 1;
                let insertion = cells[i * cols + j - 1] + 1;
                let substitution = cells[(i - 1) * cols + j - 1] + cost;
                cells[i * cols + j] = deletion.min(insertion).min(substitution);
            }
        }

        let matrix = Self { rows, cols, cells };
        check_matrix_base_case(&matrix);
        matrix
    }

    /// Number of rows: `len(s1) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns: `len(s2) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`, or `None` outside the table.
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            self.cells.get(i * self.cols + j).copied()
        } else {
            None
        }
    }

    /// Edit distance between the full strings (bottom-right cell).
    pub fn distance(&self) -> usize {
        // rows, cols >= 1 so the buffer is never empty
        self.cells[self.cells.len() - 1]
    }
}

/// Minimum number of single-char insertions, deletions and substitutions
/// needed to turn `s1` into `s2`.
///
/// O(len(s1) * len(s2)) time and space. Equal strings give 0; against the
/// empty string the distance is the other string's char count.
///
/// ```
/// assert_eq!(textdist::levenshtein_distance("kitten", "sitting"), 3);
/// ```
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let matrix = DistanceMatrix::new(s1, s2);
    let distance = matrix.distance();
    check_levenshtein_bounds(matrix.rows() - 1, matrix.cols() - 1, distance);
    distance
}
