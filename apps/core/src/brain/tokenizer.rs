//! Tokenizer - normalizes raw text into comparable units.
//!
//! Lowercases the input and splits on runs of whitespace and the
//! punctuation set `, ; ? ! . -`. Punctuation is consumed, never kept as a
//! token. Pure function, no state.

use regex::Regex;
use std::sync::LazyLock;

// Compile the split pattern once at startup
static SPLIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,;?!.\-]+").expect("Invalid regex: token split pattern"));

/// Split `text` into lowercase tokens, dropping empty fragments.
pub fn tokenize(text: &str) -> Vec<String> {
    SPLIT_PATTERN
        .split(&text.to_lowercase())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_and_punctuation() {
        assert_eq!(
            tokenize("Hello, world!  Foo-bar"),
            vec!["hello", "world", "foo", "bar"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("?!.,;-").is_empty());
    }

    #[test]
    fn test_idempotent_on_single_lowercase_word() {
        assert_eq!(tokenize("milk"), vec!["milk"]);
        assert_eq!(tokenize(&tokenize("milk").join(" ")), vec!["milk"]);
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(tokenize("WHERE Is The MILK?"), vec!["where", "is", "the", "milk"]);
    }
}
