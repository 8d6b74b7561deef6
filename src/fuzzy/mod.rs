// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy comparison: edit distance and n-gram set distance.
//!
//! Two independent measures here. Levenshtein counts single-char edits;
//! n-gram distance compares the sets of fixed-width windows of each string.

mod levenshtein;
mod ngram;

pub use levenshtein::*;
pub use ngram::*;
