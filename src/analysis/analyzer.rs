//! Core analyzer trait definition and the standard analyzer.
//!
//! Analyzers combine a tokenizer with normalization to transform raw fragment
//! text into the token stream consumed by feature extraction:
//!
//! ```text
//! Raw Text → Tokenizer → Normalization → Token Stream → Vectorizer
//! ```
//!
//! # Examples
//!
//! ```
//! use umbra::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hurry Up").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hurry");
//! assert_eq!(tokens[1].text, "up");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of processed tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer for debugging and logging.
    fn name(&self) -> &'static str;
}

/// The standard analyzer: Unicode word tokenization plus lowercasing.
///
/// Good defaults for short UI copy in any language with case distinctions.
#[derive(Clone, Debug, Default)]
pub struct StandardAnalyzer {
    tokenizer: UnicodeWordTokenizer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer.
    pub fn new() -> Self {
        StandardAnalyzer {
            tokenizer: UnicodeWordTokenizer::new(),
        }
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .tokenizer
            .tokenize(text)?
            .map(|token| Token::new(token.text.to_lowercase(), token.position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_analyzer_lowercases() {
        let analyzer = StandardAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("Hello World").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(StandardAnalyzer::new().name(), "standard");
    }
}
