//! Configuration file parsing.
//!
//! Parses individual `.klev.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Expansion settings section.
    pub expand: Option<RawExpandSettings>,
    /// Lexicon settings section.
    pub lexicon: Option<RawLexiconSettings>,
    /// Corpus section.
    pub corpus: Option<RawCorpusSettings>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Maximum documents fetched per kind.
    pub candidate_limit: Option<usize>,
    /// Maximum results returned per kind.
    pub result_limit: Option<usize>,
    /// Title window in characters.
    pub title_window: Option<usize>,
    /// Timeout in milliseconds.
    pub timeout_ms: Option<u64>,
}

/// Raw expansion settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExpandSettings {
    /// Cap on generated variants.
    pub max_variants: Option<usize>,
}

/// Raw lexicon settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLexiconSettings {
    /// Minimum keyword length in characters.
    pub min_keyword_len: Option<usize>,
    /// Whether to use the extended stopword lists.
    pub extended_stopwords: Option<bool>,
}

/// Raw corpus section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCorpusSettings {
    /// Corpus file path(s), relative to the config file.
    /// Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub path: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> RawConfig {
        parse_config_str(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse("");
        assert!(config.root.is_none());
        assert!(config.search.is_none());
        assert!(config.expand.is_none());
        assert!(config.lexicon.is_none());
        assert!(config.corpus.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
[search]
candidate_limit = 50
result_limit = 10
title_window = 80
timeout_ms = 1500

[expand]
max_variants = 32

[lexicon]
min_keyword_len = 3
extended_stopwords = true

[corpus]
path = "corpus.json"
"#,
        );

        let search = config.search.unwrap();
        assert_eq!(search.candidate_limit, Some(50));
        assert_eq!(search.result_limit, Some(10));
        assert_eq!(search.title_window, Some(80));
        assert_eq!(search.timeout_ms, Some(1500));
        assert_eq!(config.expand.unwrap().max_variants, Some(32));
        let lexicon = config.lexicon.unwrap();
        assert_eq!(lexicon.min_keyword_len, Some(3));
        assert_eq!(lexicon.extended_stopwords, Some(true));
        assert_eq!(
            config.corpus.unwrap().path,
            Some(vec!["corpus.json".to_string()])
        );
    }

    #[test]
    fn test_parse_partial_section() {
        let config = parse("[search]\nresult_limit = 3\n");
        let search = config.search.unwrap();
        assert_eq!(search.result_limit, Some(3));
        assert!(search.candidate_limit.is_none());
        assert!(search.timeout_ms.is_none());
    }

    #[test]
    fn test_parse_corpus_list() {
        let config = parse("[corpus]\npath = [\"reports.json\", \"~/shared/competitions.json\"]\n");
        assert_eq!(
            config.corpus.unwrap().path,
            Some(vec![
                "reports.json".to_string(),
                "~/shared/competitions.json".to_string()
            ])
        );
    }

    #[test]
    fn test_parse_corpus_section_without_path() {
        let config = parse("[corpus]\n");
        assert!(config.corpus.unwrap().path.is_none());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config_str("this is not valid toml [[[", Path::new("test.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_unknown_fields_ignored() {
        let config = parse(
            "[search]\nresult_limit = 5\nstemmer = \"russian\"\n\n[tree.docs]\npath = \".\"\n",
        );
        assert_eq!(config.search.unwrap().result_limit, Some(5));
    }

    #[test]
    fn test_parse_wrong_type_error() {
        let result = parse_config_str(
            "[search]\nresult_limit = \"five\"\n",
            Path::new("test.toml"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_file_not_found() {
        let result = parse_config_file(Path::new("/nonexistent/path/.klev.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_parse_root_flag() {
        assert_eq!(parse("root = true\n").root, Some(true));
        assert_eq!(parse("root = false\n").root, Some(false));
        assert_eq!(parse("[search]\nresult_limit = 5\n").root, None);
    }

    #[test]
    fn test_is_root_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".klev.toml");

        fs::write(&config_path, "root = true\n").unwrap();
        assert!(is_root_config(&config_path));

        fs::write(&config_path, "root = false\n").unwrap();
        assert!(!is_root_config(&config_path));

        fs::write(&config_path, "[search]\nresult_limit = 5\n").unwrap();
        assert!(!is_root_config(&config_path));

        assert!(!is_root_config(Path::new("/nonexistent/.klev.toml")));
    }
}
