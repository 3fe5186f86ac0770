//! Similarity-based intent classifier using TF-IDF and cosine similarity.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::{DeskbotError, Result};
use crate::intent::classifier::IntentClassifier;
use crate::intent::tfidf::TfIdfVectorizer;
use crate::intent::types::{Classification, IntentCatalog};

/// Default similarity threshold for a confident match.
pub const DEFAULT_THRESHOLD: f64 = 0.35;

/// Default threshold for the second, more permissive retry pass.
pub const DEFAULT_RETRY_THRESHOLD: f64 = 0.15;

/// One example phrase's fitted vector and owning intent.
struct PatternVector {
    tag: String,
    vector: Vec<f64>,
}

/// Similarity-based intent classifier.
///
/// At build time, every example pattern across the catalog is vectorized
/// into a shared TF-IDF space. A query is vectorized into the same space
/// and scored with cosine similarity against every pattern vector; the
/// owning tag of the best-scoring pattern is returned iff the score clears
/// the threshold. Ties keep the first pattern in corpus order, so results
/// are deterministic.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use deskbot::analysis::StandardAnalyzer;
/// use deskbot::intent::{IntentCatalog, IntentClassifier, SimilarityClassifier};
///
/// let json = r#"{ "intents": [
///     { "tag": "refund", "patterns": ["I want a refund", "give me my money back"],
///       "responses": ["Refunds take 3-5 days."] },
///     { "tag": "fallback", "responses": ["Sorry?"] }
/// ]}"#;
/// let catalog = IntentCatalog::from_json_str(json).unwrap();
/// let classifier =
///     SimilarityClassifier::from_catalog(&catalog, Arc::new(StandardAnalyzer::new()), 0.35)
///         .unwrap();
///
/// let result = classifier.classify("I want a refund").unwrap();
/// assert_eq!(result.tag.as_deref(), Some("refund"));
/// assert!(result.confidence > 0.99);
/// ```
pub struct SimilarityClassifier {
    vectorizer: TfIdfVectorizer,
    corpus: Vec<PatternVector>,
    analyzer: Arc<dyn Analyzer>,
    threshold: f64,
}

impl std::fmt::Debug for SimilarityClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityClassifier")
            .field("corpus_size", &self.corpus.len())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl SimilarityClassifier {
    /// Build a classifier from the catalog's example patterns.
    ///
    /// Patterns are collected in catalog order; intents without patterns
    /// (including the fallback) contribute nothing. A catalog with no
    /// patterns at all cannot support similarity mode and is rejected.
    pub fn from_catalog(
        catalog: &IntentCatalog,
        analyzer: Arc<dyn Analyzer>,
        threshold: f64,
    ) -> Result<Self> {
        let mut documents = Vec::new();
        let mut tags = Vec::new();

        for intent in catalog.intents() {
            for pattern in &intent.patterns {
                documents.push(pattern.clone());
                tags.push(intent.tag.clone());
            }
        }

        if documents.is_empty() {
            return Err(DeskbotError::classification(
                "no intent has example patterns; similarity mode needs at least one",
            ));
        }

        let mut vectorizer = TfIdfVectorizer::new(Arc::clone(&analyzer));
        vectorizer.fit(&documents)?;

        let mut corpus = Vec::with_capacity(documents.len());
        for (document, tag) in documents.iter().zip(tags) {
            let vector = vectorizer.transform(document)?;
            corpus.push(PatternVector { tag, vector });
        }

        Ok(SimilarityClassifier {
            vectorizer,
            corpus,
            analyzer,
            threshold,
        })
    }

    /// The threshold used by [`IntentClassifier::classify`].
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classify against an explicit threshold.
    ///
    /// If normalization leaves no tokens, returns no-match with confidence
    /// 0.0 without vectorizing. Otherwise the best cosine score is always
    /// reported, whether or not it clears the threshold.
    pub fn classify_with_threshold(&self, text: &str, threshold: f64) -> Result<Classification> {
        let normalized = self.analyzer.normalize(text)?;
        if normalized.is_empty() {
            return Ok(Classification::no_match(0.0));
        }

        let query = self.vectorizer.transform(&normalized)?;

        let mut best_score = 0.0;
        let mut best_tag: Option<&str> = None;
        for pattern in &self.corpus {
            // Strict comparison keeps the first pattern on ties.
            let score = cosine_similarity(&query, &pattern.vector);
            if score > best_score {
                best_score = score;
                best_tag = Some(&pattern.tag);
            }
        }

        match best_tag {
            Some(tag) if best_score >= threshold => {
                Ok(Classification::matched(tag.to_string(), best_score))
            }
            _ => Ok(Classification::no_match(best_score)),
        }
    }
}

impl IntentClassifier for SimilarityClassifier {
    fn classify(&self, text: &str) -> Result<Classification> {
        self.classify_with_threshold(text, self.threshold)
    }

    fn name(&self) -> &str {
        "similarity"
    }
}

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 for mismatched lengths or zero-magnitude vectors. TF-IDF
/// vectors are non-negative, so the result lies in [0, 1].
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot_product / (magnitude_a * magnitude_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;
    use crate::intent::types::Intent;

    fn catalog() -> IntentCatalog {
        let make = |tag: &str, patterns: &[&str]| Intent {
            tag: tag.to_string(),
            keywords: Vec::new(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            responses: vec![format!("{tag} response")],
        };

        IntentCatalog::new(vec![
            make("greeting", &["hi", "hello there", "hey bot"]),
            make(
                "refund",
                &["I want a refund", "give me my money back", "refund please"],
            ),
            make(
                "shipping",
                &["how long does shipping take", "when will it arrive"],
            ),
            Intent {
                tag: "fallback".to_string(),
                keywords: Vec::new(),
                patterns: Vec::new(),
                responses: vec!["Sorry?".to_string()],
            },
        ])
        .unwrap()
    }

    fn classifier() -> SimilarityClassifier {
        SimilarityClassifier::from_catalog(
            &catalog(),
            Arc::new(StandardAnalyzer::new()),
            DEFAULT_THRESHOLD,
        )
        .unwrap()
    }

    #[test]
    fn test_self_similarity_is_one() {
        let classifier = classifier();
        let result = classifier.classify("I want a refund").unwrap();
        assert_eq!(result.tag.as_deref(), Some("refund"));
        assert!((result.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let classifier = classifier();
        for input in ["", "   ", "?!?!", "... !!!"] {
            let result = classifier.classify(input).unwrap();
            assert!(result.tag.is_none(), "input {input:?} should not match");
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let classifier = classifier();
        let result = classifier.classify("xyzzy plugh").unwrap();
        assert!(result.tag.is_none());
        assert_eq!(result.confidence, 0.0);

        // Still no match at the permissive retry threshold.
        let result = classifier
            .classify_with_threshold("xyzzy plugh", DEFAULT_RETRY_THRESHOLD)
            .unwrap();
        assert!(result.tag.is_none());
    }

    #[test]
    fn test_threshold_monotonicity() {
        let classifier = classifier();
        let strict = classifier
            .classify_with_threshold("refund my money", 0.8)
            .unwrap();
        let loose = classifier
            .classify_with_threshold("refund my money", 0.1)
            .unwrap();

        // Lowering the threshold never changes the winning intent or the
        // score, only whether the score clears the bar.
        assert_eq!(strict.confidence, loose.confidence);
        if let Some(tag) = &strict.tag {
            assert_eq!(loose.tag.as_deref(), Some(tag.as_str()));
        }
        if strict.confidence >= 0.1 {
            assert!(loose.is_match());
        }
    }

    #[test]
    fn test_tie_break_is_first_in_corpus_order() {
        let make = |tag: &str, patterns: &[&str]| Intent {
            tag: tag.to_string(),
            keywords: Vec::new(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            responses: vec!["r".to_string()],
        };
        // Two intents share an identical pattern; the earlier one wins.
        let catalog = IntentCatalog::new(vec![
            make("first", &["duplicate phrase"]),
            make("second", &["duplicate phrase"]),
            Intent {
                tag: "fallback".to_string(),
                keywords: Vec::new(),
                patterns: Vec::new(),
                responses: vec!["Sorry?".to_string()],
            },
        ])
        .unwrap();

        let classifier =
            SimilarityClassifier::from_catalog(&catalog, Arc::new(StandardAnalyzer::new()), 0.35)
                .unwrap();
        let result = classifier.classify("duplicate phrase").unwrap();
        assert_eq!(result.tag.as_deref(), Some("first"));
    }

    #[test]
    fn test_rejects_catalog_without_patterns() {
        let catalog = IntentCatalog::new(vec![
            Intent {
                tag: "greeting".to_string(),
                keywords: vec!["hi".to_string()],
                patterns: Vec::new(),
                responses: vec!["Hello!".to_string()],
            },
            Intent {
                tag: "fallback".to_string(),
                keywords: Vec::new(),
                patterns: Vec::new(),
                responses: vec!["Sorry?".to_string()],
            },
        ])
        .unwrap();

        let result =
            SimilarityClassifier::from_catalog(&catalog, Arc::new(StandardAnalyzer::new()), 0.35);
        assert!(result.is_err());
    }

    #[test]
    fn test_cosine_similarity_edge_cases() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        let v = [0.3, 0.7, 0.1];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }
}
