//! Rust language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Create Rust language definition
pub fn rust_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("rust");
    lang.add_extension("rs");

    lang.add_keywords(&[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
        "type", "unsafe", "use", "where", "while",
    ]);

    // Lifetimes ('a) would otherwise open a string that swallows brackets,
    // so only complete char literals are quoted
    lang.set_quotes("\"");
    lang.char_rule = Some(
        PatternRule::new(
            "char",
            r"'(?:\\(?:u\{[0-9a-fA-F]{1,6}\}|x[0-9a-fA-F]{2}|.)|[^'\\])'",
            TokenType::String,
        )
        .expect("rust char pattern is valid"),
    );
    lang.punctuation.insert('#');
    lang.punctuation.insert('@');

    lang.number_rule = PatternRule::new(
        "number",
        r"0[xob][0-9a-fA-F_]+|\d[\d_]*(?:\.\d[\d_]*)?",
        TokenType::Number,
    )
    .expect("rust number pattern is valid");

    lang
}
