// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Config-selectable distance measure.
//!
//! Lets callers choose a measure from a config file instead of code:
//!
//! ```json
//! { "metric": "levenshtein" }
//! { "metric": "n_gram", "n": 2 }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DistanceError;
use crate::fuzzy::{levenshtein_distance, n_gram_distance};

/// Which distance to compute between two strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum Metric {
    /// Unit-cost edit distance.
    #[default]
    Levenshtein,
    /// Distinct `n`-char window set distance.
    NGram { n: usize },
}

impl Metric {
    /// Distance between `s1` and `s2` under this measure.
    ///
    /// Levenshtein never fails; its integer result is widened to `f64`.
    /// N-gram fails when `n` does not fit both inputs.
    pub fn distance(&self, s1: &str, s2: &str) -> Result<f64, DistanceError> {
        match *self {
            Metric::Levenshtein => Ok(levenshtein_distance(s1, s2) as f64),
            Metric::NGram { n } => n_gram_distance(s1, s2, n),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Levenshtein => write!(f, "levenshtein"),
            Metric::NGram { n } => write!(f, "n_gram(n={})", n),
        }
    }
}
