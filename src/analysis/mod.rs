//! Text analysis module for Deskbot.
//!
//! This module provides the text normalization pipeline used by the
//! similarity classifier: tokenization, filtering, and analyzer pipelines.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
