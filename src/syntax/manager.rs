//! Language registry
//!
//! The [`SyntaxManager`] owns the known language definitions and maps
//! names and file extensions to them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::builtin;
use super::language::LanguageDefinition;
use crate::error::{PrettifyError, Result};

/// Registry of language definitions
pub struct SyntaxManager {
    /// Loaded language definitions, keyed by lowercase name
    languages: HashMap<String, LanguageDefinition>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
}

impl SyntaxManager {
    /// Create a new syntax manager with built-in languages
    pub fn new() -> Self {
        let mut manager = Self::empty();
        for lang in builtin::all_languages() {
            manager.add_language(lang);
        }
        manager
    }

    /// Create a manager with no languages registered
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Add a language definition, replacing any with the same name
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.to_lowercase();
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        log::debug!("Registered language {} ({} keywords)", name, lang.keywords.len());
        self.languages.insert(name, lang);
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// Get a language definition by name (case-insensitive)
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(&name.to_lowercase())
    }

    /// Get a language definition by name, failing for unknown names
    pub fn require_language(&self, name: &str) -> Result<&LanguageDefinition> {
        self.get_language(name)
            .ok_or_else(|| PrettifyError::UnknownLanguage(name.to_string()))
    }

    /// Load every `*.toml` language file in a directory
    ///
    /// Returns the number of languages loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().map_or(false, |ext| ext == "toml"))
            .collect();
        paths.sort();

        for path in &paths {
            let contents = fs::read_to_string(path)?;
            let lang = LanguageDefinition::from_toml(&contents).map_err(|err| match err {
                PrettifyError::ConfigParse { source, .. } => PrettifyError::ConfigParse {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?;
            self.add_language(lang);
        }

        log::debug!("Loaded {} language files from {}", paths.len(), dir.display());
        Ok(paths.len())
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_language() {
        let manager = SyntaxManager::new();

        assert_eq!(manager.detect_language(Path::new("main.rs")), Some("rust"));
        assert_eq!(manager.detect_language(Path::new("test.py")), Some("python"));
        assert_eq!(manager.detect_language(Path::new("app.JS")), Some("javascript"));
        assert_eq!(manager.detect_language(Path::new("main.c")), Some("c"));
        assert_eq!(manager.detect_language(Path::new("Main.java")), Some("c"));
        assert_eq!(manager.detect_language(Path::new("no_extension")), None);
        assert_eq!(manager.detect_language(&PathBuf::from("notes.txt")), None);
    }

    #[test]
    fn test_get_language_case_insensitive() {
        let manager = SyntaxManager::new();
        assert!(manager.get_language("Rust").is_some());
        assert!(manager.get_language("PYTHON").is_some());
        assert!(manager.get_language("cobol").is_none());
    }

    #[test]
    fn test_require_unknown_language() {
        let manager = SyntaxManager::new();
        let err = manager.require_language("cobol").err().unwrap();
        assert!(matches!(err, PrettifyError::UnknownLanguage(ref name) if name == "cobol"));
    }

    #[test]
    fn test_list_languages() {
        let manager = SyntaxManager::new();
        assert_eq!(manager.list_languages(), vec!["c", "javascript", "python", "rust"]);
        assert!(SyntaxManager::empty().list_languages().is_empty());
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("shell.toml"),
            "name = \"Shell\"\nextensions = [\"sh\"]\nkeywords = [\"fi\"]\n\n[comment-markers]\nline = \"#\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "not a language").unwrap();

        let mut manager = SyntaxManager::new();
        assert_eq!(manager.load_dir(dir.path()).unwrap(), 1);
        assert_eq!(manager.detect_language(Path::new("run.sh")), Some("shell"));
        assert!(manager.get_language("shell").unwrap().is_keyword("fi"));
    }

    #[test]
    fn test_load_dir_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "name = ").unwrap();

        let mut manager = SyntaxManager::new();
        match manager.load_dir(dir.path()) {
            Err(PrettifyError::ConfigParse { path, .. }) => assert_eq!(path, bad),
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }
}
