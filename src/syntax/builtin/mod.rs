//! Built-in language definitions
//!
//! This module provides highlighting definitions for common
//! languages. JavaScript doubles as the C-family default.

mod c;
mod javascript;
mod python;
mod rust;

use super::language::LanguageDefinition;

/// Name of the language used when none is requested
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        javascript::javascript_language(),
        c::c_language(),
        rust::rust_language(),
        python::python_language(),
    ]
}

/// Get the default language definition
pub fn default_language() -> LanguageDefinition {
    javascript::javascript_language()
}
