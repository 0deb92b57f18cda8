//! Intent Catalog - definitions loaded once at startup.
//!
//! The catalog is the only external input of the matching core: a JSON
//! document listing intents (tag, trigger patterns, optional required words,
//! candidate responses) plus an optional refinement rule. It is validated
//! eagerly so malformed entries fail at load time, never during matching.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use validator::Validate;

use crate::error::AppError;

/// A single intent definition: a named category of user request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Intent {
    /// Unique identifier for the intent.
    #[validate(length(min = 1))]
    pub tag: String,
    /// Sample phrases representative of the intent, decomposed into tokens
    /// for matching.
    #[validate(length(min = 1))]
    pub patterns: Vec<String>,
    /// Tokens that must all appear in user input for this intent to be
    /// eligible, regardless of overlap score.
    #[serde(default)]
    pub required_words: Vec<String>,
    /// Candidate replies; one is picked at random when the intent wins.
    #[validate(length(min = 1))]
    pub responses: Vec<String>,
}

/// Configures the response-refinement pass: when the winning tag belongs to
/// `group`, the patterns of the `disambiguation` intent are re-scanned for a
/// positionally paired response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementRule {
    /// Tags whose wins trigger the refinement pass.
    pub group: Vec<String>,
    /// Tag of the intent whose patterns/responses are aligned by index.
    pub disambiguation: String,
}

/// On-disk shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    intents: Vec<Intent>,
    #[serde(default)]
    refinement: Option<RefinementRule>,
}

/// Immutable, validated collection of intents.
///
/// Keeps the original ordered sequence (tie-breaks during matching are
/// resolved by catalog order) alongside a tag index built once at load for
/// O(1) lookup by tag.
#[derive(Debug, Clone)]
pub struct Catalog {
    intents: Vec<Intent>,
    index: HashMap<String, usize>,
    refinement: Option<RefinementRule>,
}

impl Catalog {
    /// Build a catalog from already-parsed intents, validating every entry.
    pub fn new(
        intents: Vec<Intent>,
        refinement: Option<RefinementRule>,
    ) -> Result<Self, AppError> {
        if intents.is_empty() {
            return Err(AppError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(intents.len());
        for (position, intent) in intents.iter().enumerate() {
            intent.validate()?;
            if index.insert(intent.tag.clone(), position).is_some() {
                return Err(AppError::Validation(format!(
                    "duplicate intent tag '{}'",
                    intent.tag
                )));
            }
        }

        if let Some(rule) = &refinement {
            if !index.contains_key(&rule.disambiguation) {
                return Err(AppError::Config(format!(
                    "refinement disambiguation tag '{}' is not in the catalog",
                    rule.disambiguation
                )));
            }
            for tag in &rule.group {
                if !index.contains_key(tag) {
                    return Err(AppError::Config(format!(
                        "refinement group tag '{}' is not in the catalog",
                        tag
                    )));
                }
            }
        }

        debug!(intents = intents.len(), "intent catalog validated");

        Ok(Self {
            intents,
            index,
            refinement,
        })
    }

    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.intents, file.refinement)
    }

    /// Load and validate a catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Look up an intent by tag.
    pub fn get(&self, tag: &str) -> Option<&Intent> {
        self.index.get(tag).map(|&position| &self.intents[position])
    }

    /// Iterate intents in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.intents.iter()
    }

    /// Number of intents in the catalog.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// The configured refinement rule, if any.
    pub fn refinement(&self) -> Option<&RefinementRule> {
        self.refinement.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(tag: &str) -> Intent {
        Intent {
            tag: tag.to_string(),
            patterns: vec!["hello".to_string()],
            required_words: vec![],
            responses: vec!["hi".to_string()],
        }
    }

    #[test]
    fn test_tag_lookup() {
        let catalog = Catalog::new(vec![intent("greeting"), intent("farewell")], None)
            .expect("valid catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("farewell").map(|i| i.tag.as_str()), Some("farewell"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(vec![], None);
        assert!(matches!(result, Err(AppError::EmptyCatalog)));
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let result = Catalog::new(vec![intent("greeting"), intent("greeting")], None);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_refinement_must_reference_known_tags() {
        let rule = RefinementRule {
            group: vec!["greeting".to_string()],
            disambiguation: "missing".to_string(),
        };
        let result = Catalog::new(vec![intent("greeting")], Some(rule));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
