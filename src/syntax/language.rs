//! Language definitions for syntax highlighting
//!
//! A [`LanguageDefinition`] bundles everything the scanner needs to know
//! about one source language: keywords, comment markers, quote and
//! punctuation characters, bracket pairs and the word/number rules.
//! Definitions are plain data, so the same scanner serves any language
//! that can be described this way, including ones loaded from TOML.

use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

use super::rules::{CommentMarkers, HighlightResult, PatternRule, ScanState, SpanBuilder};
use super::tokens::TokenType;
use crate::error::{PrettifyError, Result};

/// Brackets, separators and operators recognized by default
pub const DEFAULT_PUNCTUATION: &str = "{}[]();,.:?+-*/%=<>!&|^~";

/// Characters that open strings by default
pub const DEFAULT_QUOTES: &str = "\"'";

/// Default identifier rule
pub const DEFAULT_WORD_PATTERN: &str = r"[_$\p{L}][_$\p{L}\p{Nd}]*";

/// Default numeric literal rule: digits with at most one decimal point
pub const DEFAULT_NUMBER_PATTERN: &str = r"\d+(?:\.\d+)?";

fn default_word_rule() -> &'static PatternRule {
    static RULE: OnceLock<PatternRule> = OnceLock::new();
    RULE.get_or_init(|| {
        PatternRule::new("word", DEFAULT_WORD_PATTERN, TokenType::Plain)
            .expect("default word pattern is valid")
    })
}

fn default_number_rule() -> &'static PatternRule {
    static RULE: OnceLock<PatternRule> = OnceLock::new();
    RULE.get_or_init(|| {
        PatternRule::new("number", DEFAULT_NUMBER_PATTERN, TokenType::Number)
            .expect("default number pattern is valid")
    })
}

/// Characters that bind words together for keyword boundary checks
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// A complete language definition for highlighting and layout
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name (e.g., "rust", "python")
    pub name: String,
    /// File extensions (e.g., ["rs"], ["py", "pyw"])
    pub extensions: Vec<String>,
    /// Reserved words, matched exactly
    pub keywords: HashSet<String>,
    /// Comment delimiters
    pub comments: CommentMarkers,
    /// Characters classified as punctuation
    pub punctuation: HashSet<char>,
    /// Characters that open and close strings
    pub quotes: Vec<char>,
    /// Opening/closing bracket pairs that drive indentation depth
    pub brackets: Vec<(char, char)>,
    /// Identifier rule
    pub word_rule: PatternRule,
    /// Numeric literal rule
    pub number_rule: PatternRule,
    /// Character literal rule, for languages where `'` is not a string quote
    pub char_rule: Option<PatternRule>,
}

impl LanguageDefinition {
    /// Create a language with C-family defaults and no keywords
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            keywords: HashSet::new(),
            comments: CommentMarkers::default(),
            punctuation: DEFAULT_PUNCTUATION.chars().collect(),
            quotes: DEFAULT_QUOTES.chars().collect(),
            brackets: vec![('{', '}'), ('(', ')'), ('[', ']')],
            word_rule: default_word_rule().clone(),
            number_rule: default_number_rule().clone(),
            char_rule: None,
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Add reserved words
    pub fn add_keywords(&mut self, words: &[&str]) {
        self.keywords.extend(words.iter().map(|w| w.to_string()));
    }

    /// Replace the keyword set
    pub fn set_keywords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = words.into_iter().map(Into::into).collect();
    }

    /// Replace the punctuation set
    pub fn set_punctuation(&mut self, chars: &str) {
        self.punctuation = chars.chars().collect();
    }

    /// Replace the string delimiters
    ///
    /// Only `'` and `"` can open strings; other characters are ignored.
    pub fn set_quotes(&mut self, chars: &str) {
        self.quotes.clear();
        for ch in chars.chars() {
            if ScanState::for_quote(ch).is_some() {
                if !self.quotes.contains(&ch) {
                    self.quotes.push(ch);
                }
            } else {
                log::warn!("{}: '{}' cannot delimit strings, ignoring", self.name, ch);
            }
        }
    }

    /// Check if a word is reserved
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Keywords in sorted order
    pub fn sorted_keywords(&self) -> Vec<&str> {
        let sorted: BTreeSet<&str> = self.keywords.iter().map(|s| s.as_str()).collect();
        sorted.into_iter().collect()
    }

    /// Check if a character opens a nesting level
    pub fn is_opener(&self, ch: char) -> bool {
        self.brackets.iter().any(|&(open, _)| open == ch)
    }

    /// Check if a character closes a nesting level
    pub fn is_closer(&self, ch: char) -> bool {
        self.brackets.iter().any(|&(_, close)| close == ch)
    }

    /// Highlight a single line of text
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns spans covering the whole line and the state for the next line.
    pub fn highlight_line(&self, text: &str, prev_state: ScanState) -> HighlightResult {
        let mut spans = SpanBuilder::new();
        let mut pos = 0;
        let mut state = prev_state;

        while pos < text.len() {
            if state == ScanState::InBlockComment {
                match self.comments.find_block_close(text, pos) {
                    Some(end) => {
                        spans.push(pos, end, TokenType::Comment);
                        pos = end;
                        state = ScanState::Normal;
                    }
                    None => {
                        spans.push(pos, text.len(), TokenType::Comment);
                        pos = text.len();
                    }
                }
                continue;
            }

            if state == ScanState::InLineComment {
                spans.push(pos, text.len(), TokenType::Comment);
                pos = text.len();
                continue;
            }

            if let Some(quote) = state.quote_char() {
                let (end, closed) = scan_string_body(text, pos, quote);
                spans.push(pos, end, TokenType::String);
                pos = end;
                if closed {
                    state = ScanState::Normal;
                }
                continue;
            }

            let (end, token, next_state) = self.scan_normal(text, pos);
            spans.push(pos, end, token);
            pos = end;
            state = next_state;
        }

        let end_state = state.at_line_end();
        if end_state != prev_state {
            log::trace!("{}: scan state {:?} -> {:?}", self.name, prev_state, end_state);
        }

        HighlightResult {
            spans: spans.finish(),
            end_state,
        }
    }

    /// Classify the token starting at `pos` in normal state
    ///
    /// Returns the end of the token, its type, and the state after it.
    fn scan_normal(&self, text: &str, pos: usize) -> (usize, TokenType, ScanState) {
        let rest = &text[pos..];

        if let Some(comment) = self.comment_opening(rest) {
            return match comment {
                ScanState::InBlockComment => {
                    let body = pos + self.comments.block_open.len();
                    match self.comments.find_block_close(text, body) {
                        Some(end) => (end, TokenType::Comment, ScanState::Normal),
                        None => (text.len(), TokenType::Comment, ScanState::InBlockComment),
                    }
                }
                _ => (text.len(), TokenType::Comment, ScanState::InLineComment),
            };
        }

        let Some(ch) = rest.chars().next() else {
            return (text.len(), TokenType::Plain, ScanState::Normal);
        };
        let char_end = pos + ch.len_utf8();

        if let Some(end) = self.char_rule.as_ref().and_then(|rule| rule.match_at(text, pos)) {
            return (end, TokenType::String, ScanState::Normal);
        }

        if self.quotes.contains(&ch) {
            if let Some(string_state) = ScanState::for_quote(ch) {
                let (end, closed) = scan_string_body(text, char_end, ch);
                let next = if closed { ScanState::Normal } else { string_state };
                return (end, TokenType::String, next);
            }
        }

        let bounded_left = text[..pos].chars().next_back().map_or(true, |c| !is_word_char(c));

        if let Some(end) = self.word_rule.match_at(text, pos) {
            let bounded_right = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
            let token = if bounded_left && bounded_right && self.is_keyword(&text[pos..end]) {
                TokenType::Keyword
            } else {
                TokenType::Plain
            };
            return (end, token, ScanState::Normal);
        }

        if bounded_left {
            if let Some(end) = self.number_rule.match_at(text, pos) {
                return (end, TokenType::Number, ScanState::Normal);
            }
        }

        if self.punctuation.contains(&ch) {
            return (char_end, TokenType::Punctuation, ScanState::Normal);
        }

        (char_end, TokenType::Plain, ScanState::Normal)
    }

    /// Comment state opened at the start of `rest`, if any
    ///
    /// When both markers match, the longer one wins (e.g. `#|` over `#`).
    fn comment_opening(&self, rest: &str) -> Option<ScanState> {
        let block = self.comments.has_block() && rest.starts_with(self.comments.block_open.as_str());
        let line = self.comments.has_line() && rest.starts_with(self.comments.line.as_str());
        match (block, line) {
            (true, true) if self.comments.line.len() > self.comments.block_open.len() => {
                Some(ScanState::InLineComment)
            }
            (true, _) => Some(ScanState::InBlockComment),
            (false, true) => Some(ScanState::InLineComment),
            (false, false) => None,
        }
    }

    /// Build a definition from a TOML language file
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: LanguageFile = toml::from_str(contents).map_err(|source| {
            PrettifyError::ConfigParse {
                path: "<language>".into(),
                source,
            }
        })?;
        file.into_definition()
    }
}

/// Scan string content starting just after the opening quote
///
/// Returns the end offset and whether the closing quote was found.
fn scan_string_body(text: &str, start: usize, quote: char) -> (usize, bool) {
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return (start + offset + ch.len_utf8(), true);
        }
    }
    (text.len(), false)
}

/// On-disk form of a language definition
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LanguageFile {
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub comment_markers: Option<CommentMarkers>,
    pub punctuation: Option<String>,
    pub quotes: Option<String>,
    pub brackets: Option<Vec<String>>,
    pub word_pattern: Option<String>,
    pub number_pattern: Option<String>,
    pub char_pattern: Option<String>,
}

impl LanguageFile {
    /// Convert into a definition, validating brackets and patterns
    pub fn into_definition(self) -> Result<LanguageDefinition> {
        let mut lang = LanguageDefinition::new(&self.name);
        for ext in &self.extensions {
            lang.add_extension(ext);
        }
        lang.set_keywords(self.keywords);
        if let Some(markers) = self.comment_markers {
            lang.comments = markers;
        }
        if let Some(punctuation) = &self.punctuation {
            lang.set_punctuation(punctuation);
        }
        if let Some(quotes) = &self.quotes {
            lang.set_quotes(quotes);
        }
        if let Some(brackets) = &self.brackets {
            lang.brackets = brackets
                .iter()
                .map(|pair| parse_bracket_pair(&self.name, pair))
                .collect::<Result<_>>()?;
        }
        if let Some(pattern) = &self.word_pattern {
            lang.word_rule = PatternRule::new("word", pattern, TokenType::Plain)?;
        }
        if let Some(pattern) = &self.number_pattern {
            lang.number_rule = PatternRule::new("number", pattern, TokenType::Number)?;
        }
        if let Some(pattern) = &self.char_pattern {
            lang.char_rule = Some(PatternRule::new("char", pattern, TokenType::String)?);
        }
        Ok(lang)
    }
}

fn parse_bracket_pair(language: &str, pair: &str) -> Result<(char, char)> {
    let mut chars = pair.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(open), Some(close), None) => Ok((open, close)),
        _ => Err(PrettifyError::Message(format!(
            "{language}: bracket pair '{pair}' must be exactly two characters"
        ))),
    }
}
