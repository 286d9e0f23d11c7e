//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, ExpandSettings, LexiconSettings, SearchSettings,
    parse::{RawConfig, RawExpandSettings, RawLexiconSettings, RawSearchSettings},
    resolve::resolve_corpus_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> Result<&Path, ConfigError> {
        self.path
            .parent()
            .ok_or_else(|| ConfigError::NoConfigDirectory {
                path: self.path.clone(),
            })
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins
/// - Corpus: the first config that sets `corpus.path` defines the whole list, resolved
///   relative to that config's directory
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let search = merge_search_settings(configs);
    let expand = merge_expand_settings(configs);
    let lexicon = merge_lexicon_settings(configs);
    let corpus = merge_corpus(configs)?;
    let config_root = configs
        .first()
        .map(ParsedConfig::dir)
        .transpose()?
        .map(Path::to_path_buf);

    Ok(Config {
        search,
        expand,
        lexicon,
        corpus,
        config_root,
    })
}

/// Merges search settings, taking the first defined value for each field.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.candidate_limit {
        result.candidate_limit = v;
    }
    if let Some(v) = raw.result_limit {
        result.result_limit = v;
    }
    if let Some(v) = raw.title_window {
        result.title_window = v;
    }
    if let Some(v) = raw.timeout_ms {
        result.timeout_ms = v;
    }
}

/// Merges expansion settings.
fn merge_expand_settings(configs: &[ParsedConfig]) -> ExpandSettings {
    let mut result = ExpandSettings::default();
    for parsed in configs.iter().rev() {
        if let Some(ref expand) = parsed.config.expand {
            apply_raw_expand(&mut result, expand);
        }
    }
    result
}

/// Applies raw expansion settings to result.
fn apply_raw_expand(result: &mut ExpandSettings, raw: &RawExpandSettings) {
    if let Some(v) = raw.max_variants {
        result.max_variants = v;
    }
}

/// Merges lexicon settings.
fn merge_lexicon_settings(configs: &[ParsedConfig]) -> LexiconSettings {
    let mut result = LexiconSettings::default();
    for parsed in configs.iter().rev() {
        if let Some(ref lexicon) = parsed.config.lexicon {
            apply_raw_lexicon(&mut result, lexicon);
        }
    }
    result
}

/// Applies raw lexicon settings to result.
fn apply_raw_lexicon(result: &mut LexiconSettings, raw: &RawLexiconSettings) {
    if let Some(v) = raw.min_keyword_len {
        result.min_keyword_len = v;
    }
    if let Some(v) = raw.extended_stopwords {
        result.extended_stopwords = v;
    }
}

/// Resolves the corpus list from the highest-precedence config that defines one.
fn merge_corpus(configs: &[ParsedConfig]) -> Result<Vec<PathBuf>, ConfigError> {
    for parsed in configs {
        let Some(paths) = parsed
            .config
            .corpus
            .as_ref()
            .and_then(|c| c.path.as_ref())
        else {
            continue;
        };

        let config_dir = parsed.dir()?;
        return paths
            .iter()
            .map(|p| resolve_corpus_path(p, config_dir))
            .collect();
    }

    Ok(Vec::new())
}
