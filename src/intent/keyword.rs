//! Keyword-based intent classifier.
//!
//! Matches each intent's keywords as whole words against the raw message,
//! in catalog order. Whole-word matching avoids false positives on
//! substrings ("hit" must not trigger the keyword "hi").

use regex::Regex;

use crate::error::{DeskbotError, Result};
use crate::intent::classifier::IntentClassifier;
use crate::intent::types::{Classification, IntentCatalog};

/// One intent's compiled keyword matchers.
#[derive(Debug)]
struct KeywordRule {
    tag: String,
    matchers: Vec<Regex>,
}

/// Keyword-based intent classifier.
///
/// Evaluation order is the catalog order and is part of the contract:
/// keyword sets may overlap, and the first intent with any keyword present
/// in the message wins. When no rule matches, the catalog's fallback tag is
/// returned.
///
/// # Examples
///
/// ```
/// use deskbot::intent::{IntentCatalog, IntentClassifier, KeywordClassifier};
///
/// let json = r#"{ "intents": [
///     { "tag": "greeting", "keywords": ["hi", "hello"], "responses": ["Hello!"] },
///     { "tag": "fallback", "responses": ["Sorry?"] }
/// ]}"#;
/// let catalog = IntentCatalog::from_json_str(json).unwrap();
/// let classifier = KeywordClassifier::from_catalog(&catalog).unwrap();
///
/// let result = classifier.classify("well hi there").unwrap();
/// assert_eq!(result.tag.as_deref(), Some("greeting"));
///
/// // "hit" does not contain "hi" as a whole word
/// let result = classifier.classify("that was a hit").unwrap();
/// assert_eq!(result.tag.as_deref(), Some("fallback"));
/// ```
#[derive(Debug)]
pub struct KeywordClassifier {
    rules: Vec<KeywordRule>,
    fallback_tag: String,
}

impl KeywordClassifier {
    /// Build a classifier from the catalog's keyword lists.
    ///
    /// Intents without keywords (including the fallback) contribute no rule.
    pub fn from_catalog(catalog: &IntentCatalog) -> Result<Self> {
        let mut rules = Vec::new();

        for intent in catalog.intents() {
            if intent.keywords.is_empty() {
                continue;
            }

            let mut matchers = Vec::with_capacity(intent.keywords.len());
            for keyword in &intent.keywords {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                let matcher = Regex::new(&pattern).map_err(|e| {
                    DeskbotError::classification(format!(
                        "bad keyword {keyword:?} for intent {}: {e}",
                        intent.tag
                    ))
                })?;
                matchers.push(matcher);
            }

            rules.push(KeywordRule {
                tag: intent.tag.clone(),
                matchers,
            });
        }

        Ok(KeywordClassifier {
            rules,
            fallback_tag: catalog.fallback().tag.clone(),
        })
    }

    /// The tag returned when no keyword matches.
    pub fn fallback_tag(&self) -> &str {
        &self.fallback_tag
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Result<Classification> {
        for rule in &self.rules {
            if rule.matchers.iter().any(|matcher| matcher.is_match(text)) {
                return Ok(Classification::matched(rule.tag.clone(), 1.0));
            }
        }

        Ok(Classification::matched(self.fallback_tag.clone(), 0.0))
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
