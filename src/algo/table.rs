//! Symbol table for per-value occurrence bookkeeping
//!
//! First phase of the diff. Scans both sequences once each and records,
//! per distinct value, the ascending positions at which it occurs in the
//! original and in the updated sequence. The resolver reads uniqueness and
//! balance off these lists; the leftover-pairing pass consumes them through
//! a cursor.
//!
//! Entries borrow the element values from the input slices, so building the
//! table never clones an element.
//!
//! # Complexity
//!
//! O(n + m) expected for sequence lengths n, m (one hash lookup per
//! element).

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Ascending occurrence positions of one value in one sequence.
///
/// Inline capacity 2: in realistic inputs the vast majority of values occur
/// once or twice, so the lists stay off the heap.
pub(crate) type Positions = SmallVec<[usize; 2]>;

/// Per-value occurrence record.
#[derive(Debug, Default)]
pub(crate) struct Entry {
    /// Positions in the original sequence, ascending.
    pub old_positions: Positions,
    /// Positions in the updated sequence, ascending.
    pub new_positions: Positions,
    /// Index into `old_positions` of the next occurrence eligible for
    /// leftover pairing. Only the resolver advances this.
    pub old_cursor: usize,
}

impl Entry {
    /// A value occurring exactly once in both sequences anchors the
    /// correspondence directly.
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.old_positions.len() == 1 && self.new_positions.len() == 1
    }

    /// Equal occurrence counts on both sides: no excess occurrence of this
    /// value exists in either sequence.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.old_positions.len() == self.new_positions.len()
    }
}

/// Occurrence table over both input sequences, keyed by element value.
pub(crate) struct SymbolTable<'a, T> {
    entries: FxHashMap<&'a T, Entry>,
}

impl<'a, T: Eq + Hash> SymbolTable<'a, T> {
    /// Scan the updated sequence, then the original, recording occurrence
    /// positions. An empty sequence contributes no entries from its pass.
    pub fn build(original: &'a [T], updated: &'a [T]) -> Self {
        let mut entries: FxHashMap<&'a T, Entry> = FxHashMap::default();
        entries.reserve(original.len().max(updated.len()));

        for (new_idx, value) in updated.iter().enumerate() {
            entries.entry(value).or_default().new_positions.push(new_idx);
        }
        for (old_idx, value) in original.iter().enumerate() {
            entries.entry(value).or_default().old_positions.push(old_idx);
        }

        Self { entries }
    }

    #[inline]
    pub fn get(&self, value: &T) -> Option<&Entry> {
        self.entries.get(value)
    }

    #[inline]
    pub fn get_mut(&mut self, value: &T) -> Option<&mut Entry> {
        self.entries.get_mut(value)
    }
}

// =============================================================================
// Tests
// =============================================================================
