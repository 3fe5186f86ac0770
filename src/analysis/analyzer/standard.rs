//! Standard analyzer with good defaults for chat text.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{AlphanumFilter, LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::UnicodeWordTokenizer;
use crate::error::Result;

/// The default analysis pipeline for user messages and example phrases.
///
/// Applies, in order: Unicode word tokenization, lowercasing, removal of
/// non-alphanumeric tokens, and English stopword removal.
///
/// # Examples
///
/// ```
/// use deskbot::analysis::analyzer::{Analyzer, StandardAnalyzer};
///
/// let analyzer = StandardAnalyzer::new();
/// let tokens: Vec<_> = analyzer.analyze("Where is my order OD1001?").unwrap().collect();
///
/// // "where", "is", "my" are stop words; punctuation never tokenizes
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "order");
/// assert_eq!(tokens[1].text, "od1001");
/// ```
#[derive(Clone)]
pub struct StandardAnalyzer {
    pipeline: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create a standard analyzer with a custom stop filter.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let pipeline = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphanumFilter::new()))
            .add_filter(Arc::new(stop_filter));

        StandardAnalyzer { pipeline }
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
