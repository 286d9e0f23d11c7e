//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No corpus file is configured.
    NoCorpus,
    /// A corpus path does not exist.
    CorpusPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// A corpus path exists but is not a file.
    CorpusPathNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// A limit is set to zero, so searches can never return anything.
    ZeroLimit {
        /// Dotted name of the setting.
        setting: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCorpus => write!(f, "no corpus is configured"),
            Self::CorpusPathMissing { path } => {
                write!(f, "corpus path does not exist: {path}")
            }
            Self::CorpusPathNotFile { path } => {
                write!(f, "corpus path is not a file: {path}")
            }
            Self::ZeroLimit { setting } => {
                write!(f, "{setting} is 0, searches will return nothing")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.corpus.is_empty() {
        warnings.push(ConfigWarning::NoCorpus);
    }

    for path in &config.corpus {
        if !path.exists() {
            warnings.push(ConfigWarning::CorpusPathMissing {
                path: path.display().to_string(),
            });
        } else if !path.is_file() {
            warnings.push(ConfigWarning::CorpusPathNotFile {
                path: path.display().to_string(),
            });
        }
    }

    let limits = [
        ("search.candidate_limit", config.search.candidate_limit),
        ("search.result_limit", config.search.result_limit),
        ("expand.max_variants", config.expand.max_variants),
    ];
    for (setting, value) in limits {
        if value == 0 {
            warnings.push(ConfigWarning::ZeroLimit { setting });
        }
    }

    warnings
}
