//! Core analyzer trait definition.
//!
//! Analyzers are the complete text processing pipeline, from raw text to a
//! stream of normalized tokens:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use deskbot::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so analyzers can be shared behind an `Arc`
/// between classifiers.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// Empty input yields an empty stream, never an error.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the given text and join the surviving tokens with spaces.
    ///
    /// This is the normalized form the similarity classifier operates on.
    ///
    /// # Examples
    ///
    /// ```
    /// use deskbot::analysis::analyzer::{Analyzer, StandardAnalyzer};
    ///
    /// let analyzer = StandardAnalyzer::new();
    /// let normalized = analyzer.normalize("Where is my ORDER?!").unwrap();
    /// assert_eq!(normalized, "order");
    /// ```
    fn normalize(&self, text: &str) -> Result<String> {
        let terms: Vec<String> = self.analyze(text)?.map(|token| token.text).collect();
        Ok(terms.join(" "))
    }
}
