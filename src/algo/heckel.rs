//! Heckel diff: classify two sequences into inserted/deleted/moved/unchanged
//!
//! Third phase of the diff plus the public entry points. The classifier
//! walks the correspondence produced by the resolver and buckets every
//! element of both sequences into exactly one of four categories:
//!
//! | Category | Meaning |
//! |-----------|---------|
//! | Inserted | present only in the updated sequence |
//! | Deleted | present only in the original sequence |
//! | Moved | present in both, at a different position |
//! | Unchanged | present in both, same position, occurrences balanced |
//!
//! # Algorithm Choice: Why Heckel?
//!
//! For list reconciliation the interesting edit is the *move*: an LCS-based
//! diff (Myers) reports a relocated block as delete + insert unless move
//! detection is bolted on afterwards. Heckel's symbol-table technique finds
//! the same-occurrence pairing directly, in O(n + m) expected time, and the
//! greedy anchor-plus-adjacency pairing (deliberately not LCS-optimal) is
//! what defines which elements count as moved.
//!
//! # Classification
//!
//! A matched pair is **unchanged** only when its index is the same in both
//! sequences and the value's occurrence counts balance; every other matched
//! pair is **moved**. A contiguous block that relocates together therefore
//! produces a contiguous run of moved elements covering exactly that block.
//!
//! # References
//!
//! - Heckel, P. "A Technique for Isolating Differences Between Files" (1978)

use std::hash::Hash;

use super::resolve::{Correspondence, resolve};
use super::table::SymbolTable;

// =============================================================================
// Public Types
// =============================================================================

/// Edit operation in an index-level diff script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Element at old_idx stayed at new_idx (same position, counts balanced)
    Keep { old_idx: usize, new_idx: usize },
    /// Element inserted at new_idx
    Insert { new_idx: usize },
    /// Element at old_idx deleted
    Delete { old_idx: usize },
    /// Element relocated from old_idx to new_idx
    Move { old_idx: usize, new_idx: usize },
}

impl Edit {
    pub fn is_keep(&self) -> bool {
        matches!(self, Edit::Keep { .. })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Edit::Move { .. })
    }
}

/// Four-bucket classification of both sequences' elements.
///
/// Each bucket preserves the relative order of its source sequence:
/// `deleted` follows original order, the other three follow updated order.
/// Every element of both inputs lands in exactly one bucket, so
/// `deleted.len() + matched = original.len()` and
/// `inserted.len() + matched = updated.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Diff<T> {
    /// Elements present only in the updated sequence, in updated order
    pub inserted: Vec<T>,
    /// Elements present only in the original sequence, in original order
    pub deleted: Vec<T>,
    /// Matched elements whose position shifted, in updated order
    pub moved: Vec<T>,
    /// Matched elements that kept their position, in updated order
    pub unchanged: Vec<T>,
}

impl<T> Diff<T> {
    /// Bucket sizes as a stats record.
    pub fn stats(&self) -> DiffStats {
        DiffStats {
            kept: self.unchanged.len(),
            inserted: self.inserted.len(),
            deleted: self.deleted.len(),
            moved: self.moved.len(),
        }
    }

    /// Check if any changes were detected
    pub fn has_changes(&self) -> bool {
        !self.inserted.is_empty() || !self.deleted.is_empty() || !self.moved.is_empty()
    }
}

impl<T> Default for Diff<T> {
    fn default() -> Self {
        Self {
            inserted: Vec::new(),
            deleted: Vec::new(),
            moved: Vec::new(),
            unchanged: Vec::new(),
        }
    }
}

/// Statistics from diff computation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct DiffStats {
    pub kept: usize,
    pub inserted: usize,
    pub deleted: usize,
    pub moved: usize,
}

impl DiffStats {
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted + self.moved
    }

    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Classify every element of both sequences as inserted, deleted, moved, or
/// unchanged.
///
/// The sole precondition is that `T` supports equality and hashing; either
/// sequence may be empty, duplicates are fine, and the inputs are never
/// mutated. Repeated calls with identical inputs yield identical output.
///
/// # Example
///
/// ```
/// use tola_seqdiff::diff;
///
/// let original = ["a", "b", "c"];
/// let updated = ["a", "c", "b"];
///
/// let result = diff(&original, &updated);
/// assert_eq!(result.unchanged, ["a"]);
/// assert_eq!(result.moved, ["c", "b"]);
/// assert!(result.inserted.is_empty());
/// assert!(result.deleted.is_empty());
/// ```
pub fn diff<T: Eq + Hash + Clone>(original: &[T], updated: &[T]) -> Diff<T> {
    let mut result = Diff::default();
    for edit in diff_indices(original, updated) {
        match edit {
            Edit::Keep { new_idx, .. } => result.unchanged.push(updated[new_idx].clone()),
            Edit::Insert { new_idx } => result.inserted.push(updated[new_idx].clone()),
            Edit::Delete { old_idx } => result.deleted.push(original[old_idx].clone()),
            Edit::Move { new_idx, .. } => result.moved.push(updated[new_idx].clone()),
        }
    }
    result
}

/// Index-level variant of [`diff`]: the same classification as an edit
/// script over positions, without cloning any element.
///
/// Edits are ordered by index; a keep or insert precedes a deletion at the
/// same index, a move follows it.
pub fn diff_indices<T: Eq + Hash>(original: &[T], updated: &[T]) -> Vec<Edit> {
    // Quick paths
    if original.is_empty() && updated.is_empty() {
        return Vec::new();
    }
    if original.is_empty() {
        return (0..updated.len()).map(|new_idx| Edit::Insert { new_idx }).collect();
    }
    if updated.is_empty() {
        return (0..original.len()).map(|old_idx| Edit::Delete { old_idx }).collect();
    }

    let mut table = SymbolTable::build(original, updated);
    let links = resolve(original, updated, &mut table);
    classify(original, updated, &table, &links)
}

/// Diff many sequence pairs in parallel.
///
/// Each pair is an independent [`diff`] call; rayon schedules one task per
/// pair. Output order matches input order.
#[cfg(feature = "parallel")]
pub fn diff_batch<T>(pairs: &[(&[T], &[T])]) -> Vec<Diff<T>>
where
    T: Eq + Hash + Clone + Send + Sync,
{
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|(original, updated)| diff(original, updated))
        .collect()
}

// =============================================================================
// Classifier
// =============================================================================

/// Walk the correspondence and emit the edit script in index order.
///
/// Single merge pass over both index ranges, so the script comes out
/// ordered without a sort.
fn classify<T: Eq + Hash>(
    original: &[T],
    updated: &[T],
    table: &SymbolTable<'_, T>,
    links: &Correspondence,
) -> Vec<Edit> {
    let mut edits = Vec::with_capacity(original.len().max(updated.len()));

    for idx in 0..original.len().max(updated.len()) {
        let new_edit = updated.get(idx).map(|value| match links.new_to_old[idx] {
            None => Edit::Insert { new_idx: idx },
            Some(old_idx) => {
                let balanced = table.get(value).is_some_and(|entry| entry.is_balanced());
                if old_idx == idx && balanced {
                    Edit::Keep { old_idx, new_idx: idx }
                } else {
                    Edit::Move { old_idx, new_idx: idx }
                }
            }
        });

        if let Some(edit @ (Edit::Keep { .. } | Edit::Insert { .. })) = new_edit {
            edits.push(edit);
        }
        if idx < original.len() && links.old_to_new[idx].is_none() {
            edits.push(Edit::Delete { old_idx: idx });
        }
        if let Some(edit @ Edit::Move { .. }) = new_edit {
            edits.push(edit);
        }
    }

    edits
}

// =============================================================================
// Tests
// =============================================================================
