//! Token types for text analysis.

/// A single token produced by a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text.
    pub text: String,
    /// Position of the token in the source text (0-based, by token).
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// A stream of tokens produced by analysis.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
