//! Property-based tests for the prettify pipeline.
//!
//! Inputs are drawn from a small alphabet heavy in brackets, quotes and
//! comment markers so the scanner's state transitions get exercised.

use proptest::prelude::*;

use prettify::markup::plain_text;
use prettify::{prettify, Prettifier, ScanState};

/// Source-like text without tabs or carriage returns.
fn source() -> impl Strategy<Value = String> {
    "[a-z0-9 {}()\\[\\];,.\"'/*\\\\\n]{0,160}"
}

/// A shared margin plus lines of extra indentation and code.
///
/// Every line has code after its indentation, so none is blank, and the
/// first line has no extra indentation, so the margin is exactly what
/// gets stripped.
fn indented_source() -> impl Strategy<Value = (String, Vec<(String, String)>)> {
    let line = ("[ \t]{0,3}", "[a-z{}();\"'/*][a-z0-9 {}();\"'/*]{0,24}");
    ("[ \t]{0,4}", prop::collection::vec(line, 1..8)).prop_map(|(margin, mut lines)| {
        lines[0].0.clear();
        (margin, lines)
    })
}

fn bracket_count(text: &str) -> usize {
    text.chars().filter(|ch| "{}()[]".contains(*ch)).count()
}

proptest! {
    /// Property: span texts concatenate back to each line, and markup
    /// strips back to the same text.
    #[test]
    fn spans_cover_every_line(s in source()) {
        let result = prettify(&s);
        for line in &result.lines {
            let joined: String = line.spans.iter().map(|span| span.text(&line.text)).collect();
            prop_assert_eq!(&joined, &line.text);
            prop_assert_eq!(plain_text(&line.markup), line.text.clone());
        }
    }

    /// Property: with no margin to strip, the lines rebuild the input exactly.
    #[test]
    fn unindented_input_round_trips(body in source()) {
        let s = format!("x{}", body);
        let result = prettify(&s);
        let texts: Vec<&str> = result.lines.iter().map(|line| line.text.as_str()).collect();
        prop_assert_eq!(texts.join("\n"), s);
    }

    /// Property: lines come back with tabs expanded and the shared margin
    /// removed, and nothing else changed.
    #[test]
    fn margin_and_tabs_are_normalized((margin, lines) in indented_source()) {
        let s = lines
            .iter()
            .map(|(indent, code)| format!("{}{}{}", margin, indent, code))
            .collect::<Vec<_>>()
            .join("\n");
        let result = prettify(&s);
        prop_assert_eq!(result.line_count, lines.len());
        for (line, (indent, code)) in result.lines.iter().zip(&lines) {
            let expected = format!("{}{}", indent.replace('\t', "  "), code);
            prop_assert_eq!(&line.text, &expected);
            let joined: String = line.spans.iter().map(|span| span.text(&line.text)).collect();
            prop_assert_eq!(joined, expected);
        }
    }

    /// Property: one line per newline-separated segment.
    #[test]
    fn line_count_matches_segments(s in source()) {
        let result = prettify(&s);
        prop_assert_eq!(result.line_count, s.split('\n').count());
        prop_assert_eq!(result.line_count, result.lines.len());
        for (i, line) in result.lines.iter().enumerate() {
            prop_assert_eq!(line.index, i);
        }
    }

    /// Property: spans are non-empty, contiguous and never split a run
    /// of the same token type.
    #[test]
    fn spans_are_coalesced(s in source()) {
        for line in prettify(&s).lines {
            let mut pos = 0;
            for (i, span) in line.spans.iter().enumerate() {
                prop_assert!(!span.is_empty());
                prop_assert_eq!(span.start, pos);
                if i > 0 {
                    prop_assert_ne!(line.spans[i - 1].token, span.token);
                }
                pos = span.end;
            }
            prop_assert_eq!(pos, line.text.len());
        }
    }

    /// Property: a line's depth moves by at most the brackets on the two
    /// lines involved.
    #[test]
    fn depth_step_is_bounded(s in source()) {
        let result = prettify(&s);
        for pair in result.lines.windows(2) {
            let step = pair[0].depth.abs_diff(pair[1].depth);
            let bound = bracket_count(&pair[0].text) + bracket_count(&pair[1].text);
            prop_assert!(step <= bound, "step {} exceeds bound {}", step, bound);
        }
    }

    /// Property: only block comments carry across a line boundary.
    #[test]
    fn only_block_comments_carry(s in source()) {
        let prettifier = Prettifier::default();
        let mut state = ScanState::Normal;
        for line in s.split('\n') {
            state = prettifier.highlight(line, state).outgoing;
            prop_assert!(matches!(state, ScanState::Normal | ScanState::InBlockComment));
        }
    }

    /// Property: prettifying is deterministic and shares nothing between calls.
    #[test]
    fn repeated_calls_agree(a in source(), b in source()) {
        let prettifier = Prettifier::default();
        let first = prettifier.prettify(&a);
        prettifier.prettify(&b);
        prop_assert_eq!(first, prettifier.prettify(&a));
    }
}
