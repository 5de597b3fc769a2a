//! C/C++ language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenType;

/// Create C language definition (also works for C++, Java and C#)
pub fn c_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("c");
    for ext in ["c", "h", "cpp", "hpp", "cc", "cxx", "java", "cs"] {
        lang.add_extension(ext);
    }

    // Keywords
    lang.add_keywords(&[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
        "union", "unsigned", "void", "volatile", "while",
    ]);

    // C++ / Java keywords
    lang.add_keywords(&[
        "bool", "catch", "class", "constexpr", "delete", "explicit", "extends", "false", "final",
        "friend", "implements", "import", "interface", "namespace", "new", "nullptr", "operator",
        "package", "private", "protected", "public", "template", "this", "throw", "throws", "true",
        "try", "typename", "using", "virtual",
    ]);

    // Preprocessor lines read as punctuation-led code
    lang.punctuation.insert('#');

    // Hex and suffixed literals
    lang.number_rule = PatternRule::new(
        "number",
        r"0[xX][0-9a-fA-F]+[uUlL]*|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?[fFuUlL]*",
        TokenType::Number,
    )
    .expect("c number pattern is valid");

    lang
}
