//! Text analysis for Umbra.
//!
//! This module provides the tokenization pipeline that feeds feature
//! extraction: raw fragment text is split into word tokens, normalized, and
//! handed to a vectorizer.

pub mod analyzer;
pub mod token;
pub mod tokenizer;

pub use analyzer::{Analyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use tokenizer::{Tokenizer, UnicodeWordTokenizer};
