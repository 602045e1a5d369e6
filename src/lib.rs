//! tola-seqdiff - Sequence diffing with move detection for list reconciliation
//!
//! Computes the differences between two ordered sequences of comparable
//! elements (characters, tokens, list items, any hashable values) and
//! classifies every element of both sequences as **inserted**, **deleted**,
//! **moved**, or **unchanged**, using Paul Heckel's symbol-table technique.
//! This is the classification a consumer needs to turn "old list" + "new
//! list" into an animatable edit script: UI list reconciliation, text
//! diffing, state-sync patches.
//!
//! Move detection is first-class: a relocated block is reported as a
//! contiguous run of moved elements, never as delete + insert. The pairing
//! of duplicate occurrences is a deliberate greedy heuristic (unique
//! anchors plus adjacency), not a minimum-edit-distance solve, and runs in
//! O(n + m) expected time.
//!
//! ## Modules
//! - `algo`: the diff algorithm (symbol table, resolver, classifier)
//! - `token`: tokenization helpers for test/demo inputs
//!
//! ## Usage
//!
//! ```
//! use tola_seqdiff::diff;
//!
//! let original = ["much", "writing", "is", "like", "snow"];
//! let updated = ["writing", "is", "soft", "like", "snow"];
//!
//! let result = diff(&original, &updated);
//! assert_eq!(result.deleted, ["much"]);
//! assert_eq!(result.inserted, ["soft"]);
//! assert_eq!(result.moved, ["writing", "is"]);
//! assert_eq!(result.unchanged, ["like", "snow"]);
//! ```
//!
//! A single call is synchronous and self-contained; nothing is shared
//! between calls, so callers may run independent diffs concurrently. The
//! `parallel` feature adds `diff_batch` for diffing many pairs on a rayon
//! pool.

// =============================================================================
// Core modules
// =============================================================================

/// Algorithms: symbol table, resolver, classifier, diff entry points
pub mod algo;

/// Tokenization helpers for producing diffable sequences
pub mod token;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Algorithms
pub use algo::{Diff, DiffStats, Edit, diff, diff_indices};

#[cfg(feature = "parallel")]
pub use algo::diff_batch;
