//! JavaScript/TypeScript language definition

use crate::syntax::language::LanguageDefinition;

/// Create JavaScript language definition (also used for TypeScript)
pub fn javascript_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("javascript");
    for ext in ["js", "mjs", "cjs", "jsx", "ts", "tsx"] {
        lang.add_extension(ext);
    }

    lang.add_keywords(&[
        "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
        "default", "delete", "do", "else", "export", "extends", "false", "finally", "for",
        "function", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
        "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
        "void", "while", "with", "yield",
    ]);

    lang
}
