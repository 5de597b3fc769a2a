//! Scanning rules for syntax highlighting
//!
//! This module defines the pieces a [`LanguageDefinition`] is built
//! from: comment markers, regex-backed word/number rules, and the
//! [`ScanState`] threaded from one line to the next.
//!
//! [`LanguageDefinition`]: super::LanguageDefinition

use regex::Regex;
use serde::Deserialize;

use super::tokens::{Span, TokenType};
use crate::error::{PrettifyError, Result};

/// Lexical mode of the scanner
///
/// Only [`ScanState::InBlockComment`] survives the end of a line; every
/// other mode is closed implicitly when the line runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    #[default]
    Normal,
    InSingleQuoteString,
    InDoubleQuoteString,
    InLineComment,
    InBlockComment,
}

impl ScanState {
    /// String state opened by a quote character
    pub fn for_quote(quote: char) -> Option<Self> {
        match quote {
            '\'' => Some(ScanState::InSingleQuoteString),
            '"' => Some(ScanState::InDoubleQuoteString),
            _ => None,
        }
    }

    /// Quote character that closes this state, if it is a string state
    pub fn quote_char(&self) -> Option<char> {
        match self {
            ScanState::InSingleQuoteString => Some('\''),
            ScanState::InDoubleQuoteString => Some('"'),
            _ => None,
        }
    }

    /// State handed to the next line
    pub fn at_line_end(self) -> Self {
        match self {
            ScanState::InBlockComment => ScanState::InBlockComment,
            _ => ScanState::Normal,
        }
    }

    /// Check if we're in normal state
    pub fn is_normal(&self) -> bool {
        *self == ScanState::Normal
    }
}

/// Comment delimiters for a language
///
/// An empty marker disables that kind of comment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CommentMarkers {
    pub line: String,
    pub block_open: String,
    pub block_close: String,
}

impl Default for CommentMarkers {
    fn default() -> Self {
        Self {
            line: "//".to_string(),
            block_open: "/*".to_string(),
            block_close: "*/".to_string(),
        }
    }
}

impl CommentMarkers {
    /// Markers for languages with only line comments
    pub fn line_only(line: &str) -> Self {
        Self {
            line: line.to_string(),
            block_open: String::new(),
            block_close: String::new(),
        }
    }

    /// Markers with no comments at all
    pub fn none() -> Self {
        Self::line_only("")
    }

    /// Check if line comments are enabled
    pub fn has_line(&self) -> bool {
        !self.line.is_empty()
    }

    /// Check if block comments are enabled
    pub fn has_block(&self) -> bool {
        !self.block_open.is_empty() && !self.block_close.is_empty()
    }

    /// Find the end of a block comment, searching from `start`
    ///
    /// Returns the byte offset just past the close marker.
    pub fn find_block_close(&self, text: &str, start: usize) -> Option<usize> {
        if !self.has_block() || start > text.len() {
            return None;
        }
        text[start..]
            .find(self.block_close.as_str())
            .map(|offset| start + offset + self.block_close.len())
    }
}

/// A regex rule anchored at the scan position
///
/// Rules never match the empty string, so a scanner driven by them
/// always makes progress.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled pattern, anchored at the start
    pub pattern: Regex,
    /// Token type to assign to matches
    pub token_type: TokenType,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, token_type: TokenType) -> Result<Self> {
        let anchored = format!("^(?:{pattern})");
        let regex = Regex::new(&anchored).map_err(|source| PrettifyError::InvalidPattern {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            token_type,
        })
    }

    /// Match at exactly `start`, returning the end offset
    pub fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        if start >= text.len() {
            return None;
        }
        self.pattern
            .find(&text[start..])
            .filter(|m| m.start() == 0 && m.end() > 0)
            .map(|m| start + m.end())
    }
}

/// Result of highlighting a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightResult {
    /// Classified spans covering the whole line, in order
    pub spans: Vec<Span>,
    /// State at end of line (for next line)
    pub end_state: ScanState,
}

/// Accumulates spans, merging adjacent runs of the same token type
#[derive(Debug, Default)]
pub(crate) struct SpanBuilder {
    spans: Vec<Span>,
}

impl SpanBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, start: usize, end: usize, token: TokenType) {
        if start >= end {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.token == token && last.end == start => last.end = end,
            _ => self.spans.push(Span::new(start, end, token)),
        }
    }

    pub(crate) fn finish(self) -> Vec<Span> {
        self.spans
    }
}
