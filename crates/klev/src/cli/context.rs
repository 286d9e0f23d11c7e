//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use klev_config::Config;
use klev_search::{MemoryStore, SearchParams, Searcher};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file
    /// is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Search parameters from the loaded configuration.
    pub fn search_params(&self) -> SearchParams {
        SearchParams::from(&self.config)
    }

    /// Returns the corpus files to search.
    ///
    /// Paths given on the command line are resolved against the working
    /// directory and replace the configured corpus.
    pub fn corpus_paths(&self, overrides: &[PathBuf]) -> Vec<PathBuf> {
        if overrides.is_empty() {
            self.config.corpus.clone()
        } else {
            overrides.iter().map(|p| self.cwd.join(p)).collect()
        }
    }

    /// Loads the corpus and builds a searcher over it.
    pub fn searcher(
        &self,
        corpus_overrides: &[PathBuf],
        params: SearchParams,
    ) -> Result<Searcher<MemoryStore>, ExitCode> {
        let paths = self.corpus_paths(corpus_overrides);
        if paths.is_empty() {
            eprintln!("error: no corpus configured");
            eprintln!("Pass --corpus PATH or add a [corpus] section to .klev.toml ('klev init').");
            return Err(ExitCode::FAILURE);
        }

        let store = MemoryStore::load_files(&paths).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        debug!(files = paths.len(), "corpus loaded");
        Ok(Searcher::with_params(store, params))
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
