// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for n-gram distance.
//!
//! Window validation must never panic, valid windows must give finite,
//! non-negative, symmetric results, and slicing must respect char boundaries.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textdist::{n_gram_distance, ngram_set, DistanceError};

#[derive(Debug, Arbitrary)]
struct NGramInput {
    a: Vec<u8>,
    b: Vec<u8>,
    n: u8,
}

fuzz_target!(|input: NGramInput| {
    let a = String::from_utf8_lossy(&input.a).into_owned();
    let b = String::from_utf8_lossy(&input.b).into_owned();
    let n = usize::from(input.n % 16);

    let max = a.chars().count().min(b.chars().count());

    match n_gram_distance(&a, &b, n) {
        Ok(d) => {
            // INVARIANT 1: only valid windows succeed
            assert!(n >= 1 && n <= max, "accepted n={} with max={}", n, max);

            // INVARIANT 2: finite, non-negative, symmetric
            assert!(d.is_finite() && d >= 0.0);
            assert_eq!(Ok(d), n_gram_distance(&b, &a, n));

            // INVARIANT 3: identity
            assert_eq!(n_gram_distance(&a, &a, n), Ok(0.0));
        }
        Err(DistanceError::EmptyWindow) => assert_eq!(n, 0),
        Err(DistanceError::WindowTooLarge { n: got, max: reported }) => {
            assert_eq!(got, n);
            assert_eq!(reported, max);
            assert!(n > max);
        }
    }

    // INVARIANT 4: every window is exactly n chars
    for gram in ngram_set(&a, n) {
        assert_eq!(gram.chars().count(), n);
    }
});
