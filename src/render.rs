//! Output renderers for prettified documents
//!
//! The engine stops at [`PrettifyResult`]; these turn it into something
//! a person can look at: an HTML list, colored terminal output, JSON or
//! plain re-indented text.

use std::fmt::Write as _;
use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthChar;

use crate::engine::PrettifyResult;
use crate::error::Result;
use crate::layout::Line;
use crate::syntax::TokenType;

/// Presentation options shared by the text renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix each line with its 1-based number
    pub line_numbers: bool,
    /// Replace each line's own indentation with `depth * width` spaces
    pub reindent: Option<usize>,
    /// Clip content to this many display columns
    pub max_width: Option<usize>,
}

/// Render as an HTML ordered list
pub fn html(result: &PrettifyResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<ol class=\"prettify\" data-line-count=\"{}\">",
        result.line_count
    );
    for line in &result.lines {
        let _ = writeln!(out, "<li data-depth=\"{}\">{}</li>", line.depth, line.markup);
    }
    out.push_str("</ol>\n");
    out
}

/// Render as pretty-printed JSON
pub fn json(result: &PrettifyResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render as plain text
pub fn text(result: &PrettifyResult, options: &RenderOptions) -> String {
    let gutter = gutter_width(result, options);
    let mut out = String::new();
    for line in &result.lines {
        if let Some(width) = gutter {
            let _ = write!(out, "{:>width$} ", line.index + 1, width = width);
        }
        let (indent, segments) = segments(line, options);
        out.push_str(&indent);
        for (_, segment) in segments {
            out.push_str(segment);
        }
        out.push('\n');
    }
    out
}

/// Render with terminal colors
pub fn ansi<W: Write>(out: &mut W, result: &PrettifyResult, options: &RenderOptions) -> Result<()> {
    let gutter = gutter_width(result, options);

    for line in &result.lines {
        if let Some(width) = gutter {
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                Print(format!("{:>width$} ", line.index + 1, width = width)),
                SetAttribute(Attribute::NormalIntensity)
            )?;
        }

        let (indent, segments) = segments(line, options);
        let mut budget = options.max_width.unwrap_or(usize::MAX);
        let indent = clip(&indent, &mut budget);
        queue!(out, Print(indent))?;

        for (token, segment) in segments {
            let segment = clip(segment, &mut budget);
            if segment.is_empty() {
                break;
            }
            let style = token.default_style();
            if style.is_default() {
                queue!(out, Print(segment))?;
                continue;
            }
            queue!(out, SetForegroundColor(style.fg.into()))?;
            for attr in style.attributes() {
                queue!(out, SetAttribute(attr))?;
            }
            queue!(out, Print(segment), SetAttribute(Attribute::Reset), ResetColor)?;
        }

        queue!(out, Print("\n"))?;
    }

    out.flush()?;
    Ok(())
}

fn gutter_width(result: &PrettifyResult, options: &RenderOptions) -> Option<usize> {
    options
        .line_numbers
        .then(|| result.line_count.to_string().len())
}

/// Indentation prefix and the styled pieces of a line
fn segments<'a>(line: &'a Line, options: &RenderOptions) -> (String, Vec<(TokenType, &'a str)>) {
    let Some(width) = options.reindent else {
        let pieces = line
            .spans
            .iter()
            .map(|span| (span.token, span.text(&line.text)))
            .collect();
        return (String::new(), pieces);
    };

    let skip = line.text.len() - line.text.trim_start().len();
    if skip == line.text.len() {
        return (String::new(), Vec::new());
    }
    let pieces = line
        .spans
        .iter()
        .filter(|span| span.end > skip)
        .map(|span| (span.token, &line.text[span.start.max(skip)..span.end]))
        .collect();
    (" ".repeat(line.depth * width), pieces)
}

/// Truncate to the remaining display-column budget
fn clip<'a>(s: &'a str, budget: &mut usize) -> &'a str {
    for (idx, ch) in s.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if ch_width > *budget {
            *budget = 0;
            return &s[..idx];
        }
        *budget -= ch_width;
    }
    s
}
