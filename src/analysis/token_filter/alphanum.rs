//! Alphanumeric filter implementation.
//!
//! Removes tokens that contain any non-alphanumeric character, so that
//! contractions and symbol-bearing fragments never reach the vectorizer.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only purely alphanumeric tokens.
///
/// A token survives iff every character satisfies
/// [`char::is_alphanumeric`]. Empty tokens are removed as well.
///
/// # Examples
///
/// ```
/// use deskbot::analysis::token_filter::Filter;
/// use deskbot::analysis::token_filter::alphanum::AlphanumFilter;
/// use deskbot::analysis::token::Token;
///
/// let filter = AlphanumFilter::new();
/// let tokens = vec![Token::new("don't", 0), Token::new("panic", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "panic");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AlphanumFilter;

impl AlphanumFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumFilter
    }
}

impl Filter for AlphanumFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| {
                !token.text.is_empty() && token.text.chars().all(|c| c.is_alphanumeric())
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanum"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_alphanum_filter() {
        let filter = AlphanumFilter::new();
        let tokens = vec![
            Token::new("od1001", 0),
            Token::new("can't", 1),
            Token::new("", 2),
            Token::new("refund", 3),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "od1001");
        assert_eq!(result[1].text, "refund");
    }
}
