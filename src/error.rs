// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by the distance functions.
//!
//! Argument types are checked by the compiler, so the only runtime failure
//! is an n-gram window that does not fit the inputs.

use std::fmt;

/// Range error for an n-gram window size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// `n` is zero. Windows must be at least one char wide.
    EmptyWindow,
    /// `n` is wider than the shorter input.
    WindowTooLarge { n: usize, max: usize },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::EmptyWindow => {
                write!(f, "n-gram size must be at least 1")
            }
            DistanceError::WindowTooLarge { n, max } => {
                write!(
                    f,
                    "n-gram size {} exceeds shorter input length {} (need 0 < n <= min(len(s1), len(s2)))",
                    n, max
                )
            }
        }
    }
}

impl std::error::Error for DistanceError {}
