//! Intent Matcher - selects the best intent for a user message.
//!
//! For every intent the matcher takes the maximum pattern score, picks the
//! highest-scoring tag (first seen wins on ties, in catalog order), applies
//! the confidence threshold, draws a random response from the winner, and
//! finally runs the response-refinement pass when the winning tag belongs to
//! the catalog's refinable group.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use tracing::debug;

use super::scorer::score;
use super::tokenizer::tokenize;
use crate::catalog::Catalog;
use crate::error::AppError;

/// Reply used when no intent reaches the confidence threshold.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I didn't understand that.";

/// Minimum winning score for an intent to be accepted.
const CONFIDENCE_THRESHOLD: u8 = 1;

/// Outcome of one matching call.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The selected reply text.
    pub response: String,
    /// Tag of the winning intent; `None` when input fell below the
    /// confidence threshold.
    pub tag: Option<String>,
    /// The winning intent's overall score (0 for the fallback path).
    pub score: u8,
}

/// Stateless-per-turn matcher over an immutable catalog.
///
/// The randomness source is injectable so tests can seed it and assert
/// deterministic output.
pub struct Matcher<R: Rng = StdRng> {
    catalog: Catalog,
    rng: R,
}

impl Matcher<StdRng> {
    /// Create a matcher with an entropy-seeded generator.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Create a matcher with a fixed seed, for deterministic replies.
    pub fn seeded(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Matcher<R> {
    /// Create a matcher with a caller-provided randomness source.
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// The single operation exposed to the presentation layer: raw text in,
    /// reply text out.
    pub fn get_response(&mut self, raw_text: &str) -> Result<String, AppError> {
        let user_tokens = tokenize(raw_text);
        let result = self.best_match(&user_tokens)?;
        debug!(tag = ?result.tag, score = result.score, "best match");

        if let Some(tag) = &result.tag {
            if let Some(refined) = self.refine(&user_tokens, tag) {
                debug!(tag, "response refined via disambiguation intent");
                return Ok(refined);
            }
        }

        Ok(result.response)
    }

    /// Score every intent and select the winner.
    ///
    /// The score table is rebuilt from scratch on every call; nothing is
    /// persisted between turns.
    pub fn best_match(&mut self, user_tokens: &[String]) -> Result<MatchResult, AppError> {
        let mut scores: HashMap<&str, u8> = HashMap::with_capacity(self.catalog.len());
        for intent in self.catalog.iter() {
            let mut best = 0;
            // An intent with no patterns keeps the default 0
            for pattern in &intent.patterns {
                let pattern_tokens = tokenize(pattern);
                best = best.max(score(user_tokens, &pattern_tokens, &intent.required_words));
            }
            scores.insert(intent.tag.as_str(), best);
        }
        debug!(?scores, "intent scores");

        // First seen wins on ties: only a strictly greater score replaces
        // the current winner as we walk the catalog in order.
        let mut winner = None;
        for intent in self.catalog.iter() {
            let intent_score = scores[intent.tag.as_str()];
            match winner {
                Some((_, best)) if intent_score <= best => {}
                _ => winner = Some((intent, intent_score)),
            }
        }
        let (intent, top_score) = winner.ok_or(AppError::EmptyCatalog)?;

        if top_score < CONFIDENCE_THRESHOLD {
            return Ok(MatchResult {
                response: FALLBACK_RESPONSE.to_string(),
                tag: None,
                score: top_score,
            });
        }

        let response = intent
            .responses
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| {
                AppError::Internal(format!("intent '{}' has no responses", intent.tag))
            })?;

        Ok(MatchResult {
            response,
            tag: Some(intent.tag.clone()),
            score: top_score,
        })
    }

    /// Response-refinement pass (category disambiguation).
    ///
    /// When the winning tag is in the refinable group, re-scan the
    /// disambiguation intent's patterns in order and return the response
    /// paired positionally with the first pattern sharing any token with
    /// the user's tokens. `None` keeps the generic response.
    fn refine(&self, user_tokens: &[String], winning_tag: &str) -> Option<String> {
        let rule = self.catalog.refinement()?;
        if !rule.group.iter().any(|tag| tag == winning_tag) {
            return None;
        }

        let intent = self.catalog.get(&rule.disambiguation)?;
        for (pattern, response) in intent.patterns.iter().zip(&intent.responses) {
            let pattern_tokens = tokenize(pattern);
            if pattern_tokens.iter().any(|word| user_tokens.contains(word)) {
                return Some(response.clone());
            }
        }

        None
    }
}
