//! Tokenization helpers for producing diffable sequences.
//!
//! The diff consumes already-constructed sequences; these helpers exist to
//! turn raw text into one for tests and demos. They are deliberately
//! trivial and carry no diff semantics.

use compact_str::CompactString;

/// Split `text` into the substrings separated by `delimiter`.
///
/// Empty segments between consecutive delimiters are preserved, so the
/// result always joins back to the input.
///
/// # Example
///
/// ```
/// use tola_seqdiff::token::split_on_delimiter;
///
/// let tokens = split_on_delimiter("a mass of words", ' ');
/// assert_eq!(tokens, ["a", "mass", "of", "words"]);
/// ```
pub fn split_on_delimiter(text: &str, delimiter: char) -> Vec<CompactString> {
    text.split(delimiter).map(CompactString::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_delimiter() {
        let tokens = split_on_delimiter("much writing is like snow", ' ');
        assert_eq!(tokens, ["much", "writing", "is", "like", "snow"]);
    }

    #[test]
    fn test_preserves_empty_segments() {
        let tokens = split_on_delimiter("a,,b,", ',');
        assert_eq!(tokens, ["a", "", "b", ""]);
    }

    #[test]
    fn test_no_delimiter_yields_whole_text() {
        let tokens = split_on_delimiter("whole", ' ');
        assert_eq!(tokens, ["whole"]);
    }

    #[test]
    fn test_tokens_feed_the_diff() {
        let original = split_on_delimiter("the quick brown fox", ' ');
        let updated = split_on_delimiter("the slow brown fox", ' ');

        let result = crate::diff(&original, &updated);
        assert_eq!(result.inserted, ["slow"]);
        assert_eq!(result.deleted, ["quick"]);
    }
}
