//! Syntax highlighting
//!
//! This module provides the lexical scanner used for:
//! - Token classification (keyword, string, comment, number, punctuation)
//! - Distinguishing real brackets from quoted ones for layout
//! - Terminal styles per token category

mod builtin;
mod language;
mod manager;
mod rules;
mod style;
mod tokens;

pub use builtin::{default_language, DEFAULT_LANGUAGE};
pub use language::{
    is_word_char, LanguageDefinition, LanguageFile, DEFAULT_NUMBER_PATTERN, DEFAULT_PUNCTUATION,
    DEFAULT_QUOTES, DEFAULT_WORD_PATTERN,
};
pub use manager::SyntaxManager;
pub use rules::{CommentMarkers, HighlightResult, PatternRule, ScanState};
pub use style::{Color, Style};
pub use tokens::{Span, TokenType};
