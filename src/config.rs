//! Configuration file support
//!
//! Loads settings from ~/.prettify.toml (or %USERPROFILE%\.prettify.toml on Windows)
//!
//! Example:
//! ```text
//! # prettify configuration
//! tab-width = 4
//! language = "rust"
//! extra-keywords = ["union"]
//! languages-dir = "/home/me/.prettify/languages"
//!
//! [comment-markers]
//! line = "//"
//! block-open = "/*"
//! block-close = "*/"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PrettifyError, Result};
use crate::prepare::{clamp_tab_width, DEFAULT_TAB_WIDTH};
use crate::syntax::{CommentMarkers, LanguageDefinition, SyntaxManager, DEFAULT_LANGUAGE};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Spaces per tab when preparing lines
    pub tab_width: usize,
    /// Language used when none is given or detected
    pub language: String,
    /// Replaces the language's keyword set
    pub keywords: Option<Vec<String>>,
    /// Added to the language's keyword set
    pub extra_keywords: Vec<String>,
    /// Replaces the language's comment markers
    pub comment_markers: Option<CommentMarkers>,
    /// Replaces the language's punctuation characters
    pub punctuation: Option<String>,
    /// Directory of extra `*.toml` language definitions
    pub languages_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            language: DEFAULT_LANGUAGE.to_string(),
            keywords: None,
            extra_keywords: Vec::new(),
            comment_markers: None,
            punctuation: None,
            languages_dir: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".prettify.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".prettify.toml"))
        }
    }

    /// Load configuration from the default file, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring {}: {}", path.display(), err);
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents).map_err(|source| PrettifyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(contents)?;
        config.tab_width = clamp_tab_width(config.tab_width);
        Ok(config)
    }

    /// Built-in languages plus any found in `languages-dir`
    pub fn syntax_manager(&self) -> Result<SyntaxManager> {
        let mut manager = SyntaxManager::new();
        if let Some(dir) = &self.languages_dir {
            manager.load_dir(dir)?;
        }
        Ok(manager)
    }

    /// Apply keyword, comment and punctuation overrides to a language
    pub fn apply_to(&self, language: &mut LanguageDefinition) {
        if let Some(keywords) = &self.keywords {
            language.set_keywords(keywords.iter().cloned());
        }
        language.keywords.extend(self.extra_keywords.iter().cloned());
        if let Some(markers) = &self.comment_markers {
            language.comments = markers.clone();
        }
        if let Some(punctuation) = &self.punctuation {
            language.set_punctuation(punctuation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::default_language;

    #[test]
    fn test_parse_config() {
        let contents = r##"
# Comment
tab-width = 4
language = "rust"
extra-keywords = ["union"]

[comment-markers]
line = "#"
"##;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.tab_width, 4);
        assert_eq!(config.language, "rust");
        assert_eq!(config.extra_keywords, vec!["union".to_string()]);
        let markers = config.comment_markers.unwrap();
        assert_eq!(markers.line, "#");
        // Unset marker fields keep their C-family defaults
        assert_eq!(markers.block_open, "/*");
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_tab_width_clamped() {
        assert_eq!(Config::parse("tab-width = 0").unwrap().tab_width, 1);
        assert_eq!(Config::parse("tab-width = 64").unwrap().tab_width, 16);
    }

    #[test]
    fn test_parse_error() {
        assert!(Config::parse("tab-width = \"wide\"").is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let config = Config {
            keywords: Some(vec!["alpha".to_string()]),
            extra_keywords: vec!["beta".to_string()],
            comment_markers: Some(CommentMarkers::line_only(";")),
            punctuation: Some("()".to_string()),
            ..Config::default()
        };
        let mut language = default_language();
        config.apply_to(&mut language);

        assert_eq!(language.sorted_keywords(), vec!["alpha", "beta"]);
        assert_eq!(language.comments.line, ";");
        assert!(!language.comments.has_block());
        assert!(language.punctuation.contains(&'(') && !language.punctuation.contains(&';'));
    }

    #[test]
    fn test_empty_keyword_set_is_allowed() {
        let config = Config::parse("keywords = []").unwrap();
        let mut language = default_language();
        config.apply_to(&mut language);
        assert!(language.keywords.is_empty());
    }

    #[test]
    fn test_syntax_manager_loads_languages_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sql.toml"), "name = \"sql\"\nkeywords = [\"select\"]\n").unwrap();
        let config = Config {
            languages_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let manager = config.syntax_manager().unwrap();
        assert!(manager.get_language("sql").is_some());
        assert!(manager.get_language("rust").is_some());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prettify.toml");
        fs::write(&path, "language = \"c\"\n").unwrap();
        assert_eq!(Config::from_file(&path).unwrap().language, "c");

        fs::write(&path, "language = [").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(PrettifyError::ConfigParse { .. })
        ));
        assert!(matches!(
            Config::from_file(&dir.path().join("missing.toml")),
            Err(PrettifyError::Io(_))
        ));
    }
}
