//! String distance primitives: Levenshtein edit distance and n-gram set distance.
//!
//! Both are pure functions over pairs of strings. No shared state, no I/O;
//! every call allocates its own working storage and drops it on return, so
//! calls are freely reentrant and can run in parallel on independent inputs.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │ fuzzy/levenshtein.rs │     │   fuzzy/ngram.rs     │
//! │  (DistanceMatrix,    │     │  (ngram_set,         │
//! │ levenshtein_distance)│     │   n_gram_distance)   │
//! └──────────────────────┘     └──────────────────────┘
//!            │                            │
//!            ▼                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │    contracts.rs (debug-only result invariants)      │
//! └─────────────────────────────────────────────────────┘
//!            ▲                            ▲
//!            └──────────  metric.rs  ─────┘
//!                 (serde-selectable Metric)
//! ```
//!
//! | Rust Module         | Provides                              | Fails with          |
//! |---------------------|---------------------------------------|---------------------|
//! | `fuzzy::levenshtein`| Edit distance, full DP table          | never               |
//! | `fuzzy::ngram`      | Window sets, set distance             | `DistanceError`     |
//! | `metric`            | Config-driven choice of the above     | `DistanceError`     |
//! | `contracts`         | Debug assertions on every result      | panics (debug only) |
//!
//! Lengths are char counts throughout; inputs are not normalized.
//!
//! # Usage
//!
//! ```
//! use textdist::{levenshtein_distance, n_gram_distance, DistanceError};
//!
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//!
//! let d = n_gram_distance("night", "nacht", 2)?;
//! assert!((d - 6f64.sqrt()).abs() < 1e-12);
//!
//! assert!(matches!(
//!     n_gram_distance("ab", "abcdef", 5),
//!     Err(DistanceError::WindowTooLarge { n: 5, max: 2 })
//! ));
//! # Ok::<(), DistanceError>(())
//! ```

// Module declarations
pub mod contracts;
mod error;
mod fuzzy;
mod metric;

// Re-exports for public API
pub use error::DistanceError;
pub use fuzzy::{check_window, levenshtein_distance, n_gram_distance, ngram_set, DistanceMatrix};
pub use metric::Metric;
