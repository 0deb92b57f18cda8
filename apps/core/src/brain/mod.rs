//! # Brain Module
//!
//! Rule-based matching core for ShelfBot.
//! Turns raw user text into a reply from the intent catalog, with no ML
//! model involved - pure token overlap.
//!
//! ## Components
//! - `tokenizer`: lowercase, punctuation-splitting tokenization
//! - `scorer`: per-pattern overlap scoring with a required-word gate
//! - `matcher`: best-tag selection, confidence threshold, refinement pass

pub mod matcher;
pub mod scorer;
pub mod tokenizer;

// Re-export main types for convenience
pub use matcher::{MatchResult, Matcher, FALLBACK_RESPONSE};
pub use scorer::score;
pub use tokenizer::tokenize;
