//! Pattern Scorer - token-overlap scoring with a required-word gate.
//!
//! Scores how well a user's tokens cover a single pattern's tokens, as an
//! integer percentage. No ML, no weights - pure membership counting.

/// Score user tokens against one pattern's tokens, in `[0, 100]`.
///
/// Each user token present in `pattern_tokens` counts once (duplicates in
/// the user tokens each count if the word appears in the pattern at all);
/// the score is the floored percentage of the pattern covered, clamped to
/// 100. A pattern with no tokens scores 0.
///
/// If `required_words` is non-empty, the score is forced to 0 unless every
/// required word appears among the user tokens.
pub fn score(user_tokens: &[String], pattern_tokens: &[String], required_words: &[String]) -> u8 {
    if pattern_tokens.is_empty() {
        return 0;
    }

    let gate_passes = required_words
        .iter()
        .all(|required| user_tokens.iter().any(|token| token == required));
    if !gate_passes {
        return 0;
    }

    let overlap = user_tokens
        .iter()
        .filter(|token| pattern_tokens.contains(token))
        .count();

    ((overlap * 100) / pattern_tokens.len()).min(100) as u8
}
