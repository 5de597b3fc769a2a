//! Layout: nesting depth per line
//!
//! Depth is inferred from bracket balance. Each line is highlighted
//! first so brackets inside strings and comments can be ignored; the
//! scan state is threaded from line to line so block comments spanning
//! several lines are skipped too.

use serde::Serialize;

use crate::prepare::RawLine;
use crate::syntax::{LanguageDefinition, ScanState, Span, TokenType};

/// A formatted output line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// 0-based position in the input
    pub index: usize,
    /// Inferred nesting level
    pub depth: usize,
    /// Prepared line content, without markup
    pub text: String,
    /// `text` with every span wrapped for display
    pub markup: String,
    /// Classified spans covering `text`
    pub spans: Vec<Span>,
}

/// Bracket counts of one line, outside strings and comments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BracketCounts {
    /// Closers before any other code on the line; comments do not count as code
    pub leading_closers: usize,
    /// All opening brackets
    pub openers: usize,
    /// All closing brackets, including the leading ones
    pub closers: usize,
}

impl BracketCounts {
    /// Count the brackets of a highlighted line
    pub fn measure(text: &str, spans: &[Span], language: &LanguageDefinition) -> Self {
        let mut counts = Self::default();
        let mut leading = true;

        for span in spans {
            match span.token {
                TokenType::Comment => continue,
                TokenType::String => {
                    leading = false;
                    continue;
                }
                _ => {}
            }
            for ch in span.text(text).chars() {
                if language.is_closer(ch) {
                    counts.closers += 1;
                    if leading {
                        counts.leading_closers += 1;
                    }
                } else if language.is_opener(ch) {
                    counts.openers += 1;
                    leading = false;
                } else if !ch.is_whitespace() {
                    leading = false;
                }
            }
        }

        counts
    }
}

/// Running depth across the lines of one document
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthTracker {
    current: usize,
}

impl DepthTracker {
    /// Start at depth 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a depth to a line and advance past it
    ///
    /// Leading closers dedent the line itself; the net balance of the
    /// whole line moves the running depth. Neither goes below zero.
    pub fn advance(&mut self, counts: BracketCounts) -> usize {
        let depth = self.current.saturating_sub(counts.leading_closers);
        self.current = (self.current + counts.openers).saturating_sub(counts.closers);
        depth
    }
}

/// Assign depths to prepared lines
///
/// The returned lines carry spans but no markup yet.
pub fn format(raw_lines: &[RawLine], language: &LanguageDefinition) -> Vec<Line> {
    format_with(raw_lines, language, |_, _, _| {})
}

/// Like [`format`], calling `visit` with each line and the scan states
/// entering and leaving it
pub fn format_with<F>(
    raw_lines: &[RawLine],
    language: &LanguageDefinition,
    mut visit: F,
) -> Vec<Line>
where
    F: FnMut(&Line, ScanState, ScanState),
{
    let mut tracker = DepthTracker::new();
    let mut state = ScanState::Normal;

    raw_lines
        .iter()
        .map(|raw| {
            let incoming = state;
            let result = language.highlight_line(&raw.text, incoming);
            state = result.end_state;
            let counts = BracketCounts::measure(&raw.text, &result.spans, language);
            let line = Line {
                index: raw.index,
                depth: tracker.advance(counts),
                text: raw.text.clone(),
                markup: String::new(),
                spans: result.spans,
            };
            visit(&line, incoming, state);
            line
        })
        .collect()
}
