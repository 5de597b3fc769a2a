//! Markup for highlighted lines
//!
//! Each span is wrapped as `<span class="CLASS">TEXT</span>` with the
//! token's class name; `&`, `<` and `>` in the text are escaped.

use std::sync::OnceLock;

use regex::Regex;

use crate::syntax::Span;

/// Wrap every span of `text` in markup
pub fn render(text: &str, spans: &[Span]) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for span in spans {
        out.push_str("<span class=\"");
        out.push_str(span.token.class_name());
        out.push_str("\">");
        push_escaped(&mut out, span.text(text));
        out.push_str("</span>");
    }
    out
}

/// Append `text` with markup-significant characters escaped
fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?span[^>]*>").expect("tag pattern is valid"))
}

/// Recover the displayed text from markup produced by [`render`]
pub fn plain_text(markup: &str) -> String {
    tag_regex()
        .replace_all(markup, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
