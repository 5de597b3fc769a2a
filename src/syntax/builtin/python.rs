//! Python language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::CommentMarkers;

/// Create Python language definition
pub fn python_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("python");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");

    // Comments: '#' to end of line, no block comments
    lang.comments = CommentMarkers::line_only("#");

    lang.add_keywords(&[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ]);

    lang.punctuation.insert('@');

    lang
}
