//! Common types for intent classification.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DeskbotError, Result};

/// A labeled category of user request.
///
/// `keywords` drive the keyword classifier, `patterns` drive the similarity
/// classifier. The fallback intent has neither and is the classification
/// floor: it only carries responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    /// Unique intent label.
    pub tag: String,
    /// Trigger keywords for keyword-mode matching.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// Example phrases for similarity-mode matching.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
    /// Candidate responses, never empty.
    pub responses: Vec<String>,
}

impl Intent {
    /// Whether this intent is the fallback (no trigger condition at all).
    pub fn is_fallback(&self) -> bool {
        self.keywords.is_empty() && self.patterns.is_empty()
    }
}

/// The ordered, validated set of intents for one session.
///
/// Catalog order is significant: the keyword classifier evaluates intents
/// first to last and stops at the first match.
///
/// # Examples
///
/// ```
/// use deskbot::intent::IntentCatalog;
///
/// let json = r#"{ "intents": [
///     { "tag": "greeting", "keywords": ["hi"], "responses": ["Hello!"] },
///     { "tag": "fallback", "responses": ["Sorry?"] }
/// ]}"#;
///
/// let catalog = IntentCatalog::from_json_str(json).unwrap();
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.fallback().tag, "fallback");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentCatalog {
    intents: Vec<Intent>,
}

impl IntentCatalog {
    /// Build a catalog from a list of intents, validating it.
    pub fn new(intents: Vec<Intent>) -> Result<Self> {
        let catalog = IntentCatalog { intents };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON document.
    ///
    /// The document has the shape `{ "intents": [ ... ] }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: IntentCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON file.
    ///
    /// A missing or malformed file is an error: a chat session without
    /// intents cannot classify anything.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DeskbotError::config(format!(
                "cannot read intents file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Validate catalog invariants.
    ///
    /// Every intent must have a unique, non-empty tag and at least one
    /// response; exactly one intent (the fallback) may have neither
    /// keywords nor patterns.
    pub fn validate(&self) -> Result<()> {
        if self.intents.is_empty() {
            return Err(DeskbotError::config("intents list is empty"));
        }

        let mut seen = std::collections::HashSet::new();
        let mut fallback_count = 0;

        for intent in &self.intents {
            if intent.tag.trim().is_empty() {
                return Err(DeskbotError::config("intent with empty tag"));
            }
            if !seen.insert(intent.tag.as_str()) {
                return Err(DeskbotError::config(format!(
                    "duplicate intent tag: {}",
                    intent.tag
                )));
            }
            if intent.responses.is_empty() {
                return Err(DeskbotError::config(format!(
                    "intent {} has no responses",
                    intent.tag
                )));
            }
            if intent.is_fallback() {
                fallback_count += 1;
            }
        }

        match fallback_count {
            0 => Err(DeskbotError::config(
                "no fallback intent (one intent must have no keywords and no patterns)",
            )),
            1 => Ok(()),
            n => Err(DeskbotError::config(format!(
                "{n} fallback intents found, expected exactly one"
            ))),
        }
    }

    /// Get the intents in priority order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Look up an intent by tag.
    pub fn get(&self, tag: &str) -> Option<&Intent> {
        self.intents.iter().find(|intent| intent.tag == tag)
    }

    /// Get the fallback intent.
    pub fn fallback(&self) -> &Intent {
        // Validation guarantees exactly one fallback intent exists.
        self.intents
            .iter()
            .find(|intent| intent.is_fallback())
            .expect("validated catalog has a fallback intent")
    }

    /// Number of intents in the catalog.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// The outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The matched intent tag, or `None` when nothing cleared the bar.
    pub tag: Option<String>,
    /// Similarity score in [0, 1]. Keyword matches report 1.0.
    pub confidence: f64,
}

impl Classification {
    /// A successful classification.
    pub fn matched<S: Into<String>>(tag: S, confidence: f64) -> Self {
        Classification {
            tag: Some(tag.into()),
            confidence,
        }
    }

    /// A failed classification, keeping the best score observed.
    pub fn no_match(confidence: f64) -> Self {
        Classification {
            tag: None,
            confidence,
        }
    }

    /// Whether a tag was resolved.
    pub fn is_match(&self) -> bool {
        self.tag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(tag: &str, keywords: &[&str], patterns: &[&str], responses: &[&str]) -> Intent {
        Intent {
            tag: tag.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_catalog_validation_ok() {
        let catalog = IntentCatalog::new(vec![
            intent("greeting", &["hi"], &["hello there"], &["Hello!"]),
            intent("fallback", &[], &[], &["Sorry, say that again?"]),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.fallback().tag, "fallback");
        assert!(catalog.get("greeting").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_catalog_requires_fallback() {
        let err = IntentCatalog::new(vec![intent("greeting", &["hi"], &[], &["Hello!"])])
            .unwrap_err();
        assert!(err.to_string().contains("fallback"));
    }

    #[test]
    fn test_catalog_rejects_empty_responses() {
        let err = IntentCatalog::new(vec![
            intent("greeting", &["hi"], &[], &[]),
            intent("fallback", &[], &[], &["Sorry"]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("no responses"));
    }

    #[test]
    fn test_catalog_rejects_duplicate_tags() {
        let err = IntentCatalog::new(vec![
            intent("greeting", &["hi"], &[], &["Hello!"]),
            intent("greeting", &["hey"], &[], &["Hi!"]),
            intent("fallback", &[], &[], &["Sorry"]),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(IntentCatalog::from_json_str("not json").is_err());
        assert!(IntentCatalog::from_json_str(r#"{"intents": []}"#).is_err());
    }
}
