//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_seqdiff::prelude::*;
//! ```

// Algorithms
pub use crate::algo::{Diff, DiffStats, Edit, diff, diff_indices};

#[cfg(feature = "parallel")]
pub use crate::algo::diff_batch;

// Tokenization
pub use crate::token::split_on_delimiter;
