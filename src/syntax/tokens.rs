//! Token types for syntax highlighting
//!
//! This module defines the lexical categories a scanned character can
//! fall into, their markup classes and their default terminal styles,
//! plus the [`Span`] type that ties a category to a range of a line.

use serde::Serialize;

use super::style::{Color, Style};

/// Lexical token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Line and block comments, including their markers
    Comment,
    /// String literals, including their quotes
    String,
    /// Words found in the language's keyword set
    Keyword,
    /// Numeric literals
    Number,
    /// Brackets, separators and operators
    Punctuation,
    /// Identifiers, whitespace and anything unclassified
    Plain,
}

impl TokenType {
    /// Get the default terminal style for this token type
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenType::String => Style::fg(Color::Green),
            TokenType::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenType::Number => Style::fg(Color::Cyan),
            TokenType::Punctuation => Style::fg(Color::BrightWhite),
            TokenType::Plain => Style::default(),
        }
    }

    /// Class name used when wrapping spans in markup
    pub fn class_name(&self) -> &'static str {
        match self {
            TokenType::Comment => "cmt",
            TokenType::String => "str",
            TokenType::Keyword => "key",
            TokenType::Number => "num",
            TokenType::Punctuation => "pun",
            TokenType::Plain => "pln",
        }
    }
}

/// A classified run of text within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Category of every character in the span
    pub token: TokenType,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, token: TokenType) -> Self {
        Self { start, end, token }
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The slice of `line` covered by this span
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}
