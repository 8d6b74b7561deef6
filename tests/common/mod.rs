//! Shared test utilities and fixtures.

#![allow(dead_code)]

/// Tolerance for comparing n-gram distances (square roots of small integers).
pub const EPSILON: f64 = 1e-12;

/// Assert two distances are equal within `EPSILON`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} but got {}",
        expected,
        actual
    );
}

/// Words with diacritics and multi-byte scripts, plus plain ASCII.
pub const UNICODE_WORDS: &[&str] = &[
    "cafe",
    "café",
    "naïve",
    "résumé",
    "über",
    "tōkyō",
    "harīṣh",
    "tummalachērla",
    "తెలుగు",
    "హరీష్",
    "hello",
    "world",
];

/// Char count, the unit every length in this crate is measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
