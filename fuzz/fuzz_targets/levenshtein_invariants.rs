// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Levenshtein distance.
//!
//! Checks identity, symmetry, the length bounds and the triangle inequality
//! on arbitrary UTF-8, including invalid sequences repaired lossily.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textdist::{levenshtein_distance, DistanceMatrix};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: Vec<u8>,
    b: Vec<u8>,
    c: Vec<u8>,
}

/// Lossy UTF-8, capped to keep the O(nm) table small.
fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(64).collect()
}

fuzz_target!(|input: DistanceInput| {
    let a = text(&input.a);
    let b = text(&input.b);
    let c = text(&input.c);

    let ab = levenshtein_distance(&a, &b);

    // INVARIANT 1: identity
    assert_eq!(levenshtein_distance(&a, &a), 0, "d(a, a) != 0 for {:?}", a);

    // INVARIANT 2: symmetry
    assert_eq!(ab, levenshtein_distance(&b, &a), "asymmetric for {:?}, {:?}", a, b);

    // INVARIANT 3: length gap <= d <= longer length
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(la.abs_diff(lb) <= ab && ab <= la.max(lb));

    // INVARIANT 4: triangle inequality
    let ac = levenshtein_distance(&a, &c);
    let bc = levenshtein_distance(&b, &c);
    assert!(ac <= ab + bc, "d(a,c)={} > d(a,b)={} + d(b,c)={}", ac, ab, bc);

    // INVARIANT 5: matrix corner is the distance
    let m = DistanceMatrix::new(&a, &b);
    assert_eq!(m.get(la, lb), Some(ab));
});
