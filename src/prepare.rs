//! Line preparation
//!
//! Turns a raw solution string into [`RawLine`]s: line endings are
//! normalized, tabs expanded, and the margin shared by every non-blank
//! line is removed so pasted snippets keep only their relative indentation.

/// Default number of spaces a tab expands to
pub const DEFAULT_TAB_WIDTH: usize = 2;

/// Largest accepted tab width
pub const MAX_TAB_WIDTH: usize = 16;

/// A single prepared line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 0-based position in the input
    pub index: usize,
    /// Line content with tabs expanded and the common margin removed
    pub text: String,
}

/// Clamp a requested tab width into the supported range
pub fn clamp_tab_width(tab_width: usize) -> usize {
    let clamped = tab_width.clamp(1, MAX_TAB_WIDTH);
    if clamped != tab_width {
        log::warn!("tab width {} out of range, using {}", tab_width, clamped);
    }
    clamped
}

/// Split a solution into prepared lines
///
/// Always yields at least one line, and keeps trailing blank lines.
pub fn prepare(solution: &str, tab_width: usize) -> Vec<RawLine> {
    let tab = " ".repeat(clamp_tab_width(tab_width));
    let normalized = normalize_line_endings(solution);

    let expanded: Vec<String> = normalized
        .split('\n')
        .map(|line| line.replace('\t', &tab))
        .collect();

    let margin = common_margin(&expanded);

    expanded
        .into_iter()
        .enumerate()
        .map(|(index, line)| RawLine {
            index,
            text: strip_margin(&line, margin).to_string(),
        })
        .collect()
}

/// Convert all line endings (CRLF, CR) to LF
pub fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Number of leading whitespace characters in a line
fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Smallest indentation among non-blank lines (0 if all are blank)
fn common_margin(lines: &[String]) -> usize {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0)
}

/// Drop up to `margin` leading whitespace characters
fn strip_margin(line: &str, margin: usize) -> &str {
    let cut = line
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .nth(margin)
        .map_or_else(
            || {
                // Fewer than `margin + 1` whitespace chars: strip all of them
                line.len() - line.trim_start().len()
            },
            |(byte, _)| byte,
        );
    &line[cut..]
}
