//! Algorithm implementations for sequence diffing.
//!
//! - `table`: symbol table over both sequences (occurrence bookkeeping)
//! - `resolve`: Heckel's correspondence rules (anchors + adjacency)
//! - `heckel`: classifier and the public diff entry points

mod heckel;
mod resolve;
mod table;

pub use heckel::{Diff, DiffStats, Edit, diff, diff_indices};

#[cfg(feature = "parallel")]
pub use heckel::diff_batch;
