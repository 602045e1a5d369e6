//! Reference resolver: occurrence statistics to index correspondence
//!
//! Second phase of the diff. Turns the symbol table into a partial
//! injective mapping between original and updated indices, meaning "this
//! occurrence in the old sequence is the same occurrence as that one in the
//! new sequence". A link, once made, is never revoked.
//!
//! # Resolution order
//!
//! 1. **Unique anchors**: a value occurring exactly once in both sequences
//!    links its sole old index to its sole new index. Anchors are planted
//!    in ascending old-index order.
//! 2. **Forward extension**: from each fresh anchor (j, i), link
//!    (j+1, i+1), (j+2, i+2), ... while both positions are in bounds, both
//!    are unlinked, and the elements are equal. Adjacency to a trusted link
//!    is enough evidence to carry a match through duplicated values.
//! 3. **Backward extension**: the same walk over (j-1, i-1), ... once
//!    forward is exhausted.
//! 4. **Leftover pairing**: remaining unlinked occurrences of a value pair
//!    in ascending order on both sides, so the trailing occurrences on the
//!    longer side are the ones left without a correspondent.
//!
//! This order is what makes duplicate alignment deterministic: ties between
//! equally plausible occurrence alignments go to the candidate nearest an
//! anchor, and only then to the earliest occurrence. Hash iteration order
//! never influences the result.
//!
//! # References
//!
//! - Heckel, P. "A Technique for Isolating Differences Between Files" (1978)
//!
//! # Complexity
//!
//! O(n + m) expected: each index is linked at most once, every extension
//! step either links or terminates, and leftover pairing advances a
//! per-value cursor monotonically.

use std::hash::Hash;

use super::table::SymbolTable;

/// Partial injective mapping between old and new indices.
///
/// Arena-style: one `Option<usize>` slot per input position, no linked
/// nodes.
#[derive(Debug)]
pub(crate) struct Correspondence {
    pub old_to_new: Vec<Option<usize>>,
    pub new_to_old: Vec<Option<usize>>,
}

impl Correspondence {
    fn new(old_len: usize, new_len: usize) -> Self {
        Self {
            old_to_new: vec![None; old_len],
            new_to_old: vec![None; new_len],
        }
    }

    /// Link old index `old_idx` to new index `new_idx`. Both slots must be
    /// free; links are never overwritten.
    fn link(&mut self, old_idx: usize, new_idx: usize) {
        debug_assert!(self.old_to_new[old_idx].is_none());
        debug_assert!(self.new_to_old[new_idx].is_none());
        self.old_to_new[old_idx] = Some(new_idx);
        self.new_to_old[new_idx] = Some(old_idx);
    }

    #[inline]
    fn old_free(&self, old_idx: usize) -> bool {
        self.old_to_new[old_idx].is_none()
    }

    #[inline]
    fn new_free(&self, new_idx: usize) -> bool {
        self.new_to_old[new_idx].is_none()
    }
}

/// Resolve both sequences against the symbol table.
///
/// Total over any pair of finite sequences; empty inputs resolve to an
/// empty correspondence.
pub(crate) fn resolve<'a, T: Eq + Hash>(
    original: &'a [T],
    updated: &'a [T],
    table: &mut SymbolTable<'a, T>,
) -> Correspondence {
    let mut links = Correspondence::new(original.len(), updated.len());

    // Unique anchors in ascending old order, each extended forward then
    // backward before the next anchor is planted. An anchor whose side was
    // already claimed by an earlier extension is skipped, not relinked.
    for old_idx in 0..original.len() {
        let Some(entry) = table.get(&original[old_idx]) else {
            continue;
        };
        if !entry.is_unique() {
            continue;
        }
        let new_idx = entry.new_positions[0];
        if !links.old_free(old_idx) || !links.new_free(new_idx) {
            continue;
        }
        links.link(old_idx, new_idx);
        extend_forward(original, updated, &mut links, old_idx, new_idx);
        extend_backward(original, updated, &mut links, old_idx, new_idx);
    }

    // Leftover pairing: each still-unlinked new occurrence takes the
    // smallest still-unlinked old occurrence of the same value. The cursor
    // skips occurrences claimed by extension, so the whole pass is linear.
    for new_idx in 0..updated.len() {
        if !links.new_free(new_idx) {
            continue;
        }
        let Some(entry) = table.get_mut(&updated[new_idx]) else {
            continue;
        };
        while entry.old_cursor < entry.old_positions.len() {
            let old_idx = entry.old_positions[entry.old_cursor];
            entry.old_cursor += 1;
            if links.old_free(old_idx) {
                links.link(old_idx, new_idx);
                break;
            }
        }
    }

    links
}

/// Extend a link run towards the end of both sequences.
fn extend_forward<T: Eq>(
    original: &[T],
    updated: &[T],
    links: &mut Correspondence,
    anchor_old: usize,
    anchor_new: usize,
) {
    let mut old_idx = anchor_old + 1;
    let mut new_idx = anchor_new + 1;
    while old_idx < original.len()
        && new_idx < updated.len()
        && links.old_free(old_idx)
        && links.new_free(new_idx)
        && original[old_idx] == updated[new_idx]
    {
        links.link(old_idx, new_idx);
        old_idx += 1;
        new_idx += 1;
    }
}

/// Extend a link run towards the start of both sequences.
fn extend_backward<T: Eq>(
    original: &[T],
    updated: &[T],
    links: &mut Correspondence,
    anchor_old: usize,
    anchor_new: usize,
) {
    let mut prev = (anchor_old.checked_sub(1), anchor_new.checked_sub(1));
    while let (Some(old_idx), Some(new_idx)) = prev {
        if !links.old_free(old_idx)
            || !links.new_free(new_idx)
            || original[old_idx] != updated[new_idx]
        {
            break;
        }
        links.link(old_idx, new_idx);
        prev = (old_idx.checked_sub(1), new_idx.checked_sub(1));
    }
}

// =============================================================================
// Tests
// =============================================================================
