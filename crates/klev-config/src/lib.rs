//! Configuration system for klev.
//!
//! klev uses TOML configuration files named `.klev.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.klev.toml` files
//! found, then loading `~/.klev.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_ENV, CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config,
};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusSettings, RawExpandSettings, RawLexiconSettings, RawSearchSettings,
    parse_config_file, parse_config_str,
};
pub use resolve::resolve_corpus_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for klev.
///
/// This represents the fully resolved configuration after merging all discovered `.klev.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Retrieval and ranking settings.
    pub search: SearchSettings,
    /// Query expansion settings.
    pub expand: ExpandSettings,
    /// Keyword extraction settings.
    pub lexicon: LexiconSettings,
    /// Resolved absolute paths of the JSON corpus files.
    pub corpus: Vec<PathBuf>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.klev.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.klev.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.klev.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - No corpus configured
    /// - Corpus paths that don't exist or aren't files
    /// - Limits set to zero
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.klev.toml` file, with corpus paths resolved.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            search: &self.search,
            expand: &self.expand,
            lexicon: &self.lexicon,
            corpus: SerializableCorpus {
                path: self
                    .corpus
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect(),
            },
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Retrieval and ranking settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum documents fetched from the store per document kind.
    pub candidate_limit: usize,
    /// Maximum results returned per document kind.
    pub result_limit: usize,
    /// Leading characters of a document treated as its title.
    pub title_window: usize,
    /// Search timeout in milliseconds (0 disables it).
    pub timeout_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            candidate_limit: 20,
            result_limit: 5,
            title_window: 100,
            timeout_ms: 0,
        }
    }
}

/// Query expansion settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExpandSettings {
    /// Cap on generated query variants.
    pub max_variants: usize,
}

impl Default for ExpandSettings {
    fn default() -> Self {
        Self { max_variants: 256 }
    }
}

/// Keyword extraction settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LexiconSettings {
    /// Tokens shorter than this many characters are not keywords.
    pub min_keyword_len: usize,
    /// Whether to add the full Russian, Romanian and English stopword lists.
    pub extended_stopwords: bool,
}

impl Default for LexiconSettings {
    fn default() -> Self {
        Self {
            min_keyword_len: 2,
            extended_stopwords: false,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Retrieval and ranking settings.
    search: &'a SearchSettings,
    /// Query expansion settings.
    expand: &'a ExpandSettings,
    /// Keyword extraction settings.
    lexicon: &'a LexiconSettings,
    /// Corpus section.
    corpus: SerializableCorpus,
}

/// Corpus section with resolved paths rendered as strings.
#[derive(Serialize)]
struct SerializableCorpus {
    /// Resolved corpus paths.
    path: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_settings_defaults() {
        let search = SearchSettings::default();
        assert_eq!(search.candidate_limit, 20);
        assert_eq!(search.result_limit, 5);
        assert_eq!(search.title_window, 100);
        assert_eq!(search.timeout_ms, 0);
    }

    #[test]
    fn test_expand_and_lexicon_defaults() {
        assert_eq!(ExpandSettings::default().max_variants, 256);
        let lexicon = LexiconSettings::default();
        assert_eq!(lexicon.min_keyword_len, 2);
        assert!(!lexicon.extended_stopwords);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.corpus.is_empty());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config {
            corpus: vec![PathBuf::from("/data/corpus.json")],
            ..Config::default()
        };
        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[search]"));
        assert!(toml.contains("[expand]"));
        assert!(toml.contains("[lexicon]"));
        assert!(toml.contains("[corpus]"));
        assert!(toml.contains("candidate_limit = 20"));
        assert!(toml.contains("max_variants = 256"));
        assert!(toml.contains("/data/corpus.json"));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("search").is_some());
        assert!(parsed.get("lexicon").is_some());
    }

    #[test]
    fn test_settings_to_toml_round_trips_through_parser() {
        let toml = Config::default().settings_to_toml().unwrap();
        let raw = parse_config_str(&toml, Path::new("effective.toml")).unwrap();
        assert_eq!(raw.search.unwrap().title_window, Some(100));
        assert_eq!(raw.corpus.unwrap().path, Some(Vec::<String>::new()));
    }
}
