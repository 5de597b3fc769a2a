//! The prettify pipeline
//!
//! [`Prettifier`] runs preparation, highlighting, layout and markup over
//! a whole solution. It holds only configuration, so one instance can
//! serve many documents, including from several threads at once.

use std::fmt;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::layout::{self, Line};
use crate::markup;
use crate::prepare::{clamp_tab_width, prepare, DEFAULT_TAB_WIDTH};
use crate::syntax::{default_language, LanguageDefinition, ScanState, SyntaxManager};

/// Output of a prettify call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettifyResult {
    /// One entry per input line, in order
    pub lines: Vec<Line>,
    /// Always `lines.len()`
    pub line_count: usize,
}

impl PrettifyResult {
    fn new(lines: Vec<Line>) -> Self {
        let line_count = lines.len();
        Self { lines, line_count }
    }
}

/// Markup for one line and the state to carry into the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// The line with every span wrapped
    pub markup: String,
    /// State the next line starts in
    pub outgoing: ScanState,
}

/// What the line hook sees after each line is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEvent<'a> {
    /// 0-based line number
    pub index: usize,
    /// Depth assigned to the line
    pub depth: usize,
    /// Prepared line content
    pub text: &'a str,
    /// State the line started in
    pub incoming: ScanState,
    /// State handed to the next line
    pub outgoing: ScanState,
    /// Number of spans the line was split into
    pub span_count: usize,
}

type LineHook = Box<dyn Fn(&LineEvent<'_>) + Send + Sync>;

/// Prettifies solutions for one language
pub struct Prettifier {
    language: LanguageDefinition,
    tab_width: usize,
    hook: Option<LineHook>,
}

impl Prettifier {
    /// Create a prettifier for a language
    pub fn new(language: LanguageDefinition) -> Self {
        Self {
            language,
            tab_width: DEFAULT_TAB_WIDTH,
            hook: None,
        }
    }

    /// Build from configuration, resolving the language in `manager`
    pub fn from_config(config: &Config, manager: &SyntaxManager) -> Result<Self> {
        let mut language = manager.require_language(&config.language)?.clone();
        config.apply_to(&mut language);
        Ok(Self::new(language).with_tab_width(config.tab_width))
    }

    /// Builder: set the tab expansion width
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = clamp_tab_width(tab_width);
        self
    }

    /// Builder: install a hook called once per scanned line
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&LineEvent<'_>) + Send + Sync + 'static,
    {
        self.hook = Some(Box::new(hook));
        self
    }

    /// The language this prettifier highlights
    pub fn language(&self) -> &LanguageDefinition {
        &self.language
    }

    /// Configured tab width
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Prettify a solution
    pub fn prettify(&self, solution: &str) -> PrettifyResult {
        let raw_lines = prepare(solution, self.tab_width);
        let mut end_state = ScanState::Normal;

        let mut lines = layout::format_with(&raw_lines, &self.language, |line, incoming, outgoing| {
            end_state = outgoing;
            if let Some(hook) = &self.hook {
                hook(&LineEvent {
                    index: line.index,
                    depth: line.depth,
                    text: &line.text,
                    incoming,
                    outgoing,
                    span_count: line.spans.len(),
                });
            }
        });

        for line in &mut lines {
            line.markup = markup::render(&line.text, &line.spans);
        }

        if end_state == ScanState::InBlockComment {
            log::debug!("{}: block comment still open at end of input", self.language.name);
        }
        log::debug!("{}: prettified {} lines", self.language.name, lines.len());

        PrettifyResult::new(lines)
    }

    /// Prettify raw bytes, which must be UTF-8
    pub fn prettify_bytes(&self, bytes: &[u8]) -> Result<PrettifyResult> {
        let solution = std::str::from_utf8(bytes)?;
        Ok(self.prettify(solution))
    }

    /// Highlight a single line given the state left by the previous one
    pub fn highlight(&self, text: &str, incoming: ScanState) -> Highlight {
        let result = self.language.highlight_line(text, incoming);
        Highlight {
            markup: markup::render(text, &result.spans),
            outgoing: result.end_state,
        }
    }
}

impl Default for Prettifier {
    fn default() -> Self {
        Self::new(default_language())
    }
}

impl fmt::Debug for Prettifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prettifier")
            .field("language", &self.language.name)
            .field("tab_width", &self.tab_width)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

/// Prettify a solution with the default language and tab width
pub fn prettify(solution: &str) -> PrettifyResult {
    Prettifier::default().prettify(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_empty_input() {
        let result = prettify("");
        assert_eq!(result.line_count, 1);
        assert_eq!(result.lines.len(), 1);
        let line = &result.lines[0];
        assert_eq!(line.index, 0);
        assert_eq!(line.depth, 0);
        assert!(line.text.is_empty());
        assert!(line.markup.is_empty());
    }

    #[test]
    fn test_markup_filled() {
        let result = prettify("return 1;");
        assert_eq!(
            result.lines[0].markup,
            "<span class=\"key\">return</span><span class=\"pln\"> </span>\
             <span class=\"num\">1</span><span class=\"pun\">;</span>"
        );
    }

    #[test]
    fn test_cross_line_block_comment() {
        let result = prettify("/* start\nstill comment\nend */ code");
        assert_eq!(result.lines[0].markup, "<span class=\"cmt\">/* start</span>");
        assert_eq!(result.lines[1].markup, "<span class=\"cmt\">still comment</span>");
        assert_eq!(
            result.lines[2].markup,
            "<span class=\"cmt\">end */</span><span class=\"pln\"> code</span>"
        );
    }

    #[test]
    fn test_highlight_threads_state() {
        let prettifier = Prettifier::default();
        let first = prettifier.highlight("x /* a", ScanState::Normal);
        assert_eq!(first.outgoing, ScanState::InBlockComment);
        let second = prettifier.highlight("b */ y", first.outgoing);
        assert_eq!(second.outgoing, ScanState::Normal);
        assert!(second.markup.starts_with("<span class=\"cmt\">b */</span>"));
    }

    #[test]
    fn test_prettify_bytes_rejects_invalid_utf8() {
        let prettifier = Prettifier::default();
        assert!(prettifier.prettify_bytes(&[0x66, 0xff, 0x0a]).is_err());
        let ok = prettifier.prettify_bytes(b"a\nb").unwrap();
        assert_eq!(ok.line_count, 2);
    }

    #[test]
    fn test_hook_sees_every_line() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let prettifier = Prettifier::default().with_hook(move |event| {
            sink.lock()
                .unwrap()
                .push((event.index, event.depth, event.incoming, event.outgoing));
        });

        prettifier.prettify("f() {\n/* a\nb */ }");

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                (0, 0, ScanState::Normal, ScanState::Normal),
                (1, 1, ScanState::Normal, ScanState::InBlockComment),
                (2, 0, ScanState::InBlockComment, ScanState::Normal),
            ]
        );
    }

    #[test]
    fn test_from_config() {
        let manager = SyntaxManager::new();
        let config = Config {
            language: "python".to_string(),
            tab_width: 4,
            ..Config::default()
        };
        let prettifier = Prettifier::from_config(&config, &manager).unwrap();
        assert_eq!(prettifier.language().name, "python");
        assert_eq!(prettifier.tab_width(), 4);

        let unknown = Config {
            language: "cobol".to_string(),
            ..Config::default()
        };
        assert!(Prettifier::from_config(&unknown, &manager).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let prettifier = Prettifier::default();
        let shared = &prettifier;
        let inputs = ["a {\nb\n}", "x", "/* c\nd */"];
        std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|&input| scope.spawn(move || shared.prettify(input)))
                .collect();
            for (handle, input) in handles.into_iter().zip(inputs) {
                let result = handle.join().unwrap();
                assert_eq!(result, prettifier.prettify(input));
            }
        });
    }
}
