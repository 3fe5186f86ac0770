//! Intent classification for support chat messages.
//!
//! Two classifier implementations share the [`IntentClassifier`] trait:
//!
//! - [`KeywordClassifier`]: whole-word keyword matching in a fixed priority
//!   order, first match wins
//! - [`SimilarityClassifier`]: TF-IDF vectorization of example phrases with
//!   cosine similarity scoring against the incoming message
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use deskbot::analysis::StandardAnalyzer;
//! use deskbot::intent::{IntentCatalog, IntentClassifier, SimilarityClassifier};
//!
//! # fn main() -> deskbot::error::Result<()> {
//! let catalog = IntentCatalog::load_from_file("data/intents.json")?;
//! let analyzer = Arc::new(StandardAnalyzer::new());
//! let classifier = SimilarityClassifier::from_catalog(&catalog, analyzer, 0.35)?;
//!
//! let result = classifier.classify("where is my order")?;
//! println!("{:?} (conf={:.2})", result.tag, result.confidence);
//! # Ok(())
//! # }
//! ```

mod classifier;
mod keyword;
mod similarity;
mod tfidf;
mod types;

// Public exports
pub use classifier::IntentClassifier;
pub use keyword::KeywordClassifier;
pub use similarity::{SimilarityClassifier, DEFAULT_RETRY_THRESHOLD, DEFAULT_THRESHOLD};
pub use tfidf::TfIdfVectorizer;
pub use types::{Classification, Intent, IntentCatalog};
