//! Path resolution for corpus files.
//!
//! Resolves relative and tilde-prefixed corpus paths to absolute paths.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a corpus path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/corpus.json`) are expanded to the home directory
/// - Relative paths (`./corpus.json`, `../shared/corpus.json`) are resolved against
///   `config_dir`
/// - Absolute paths are returned with `.` and `..` components folded
///
/// The file does not need to exist; missing corpus files are reported by validation.
pub fn resolve_corpus_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    Ok(normalize_lexically(&absolute))
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Folds `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_corpus_path("./corpus.json", Path::new("/srv/klev")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/klev/corpus.json"));

        let resolved = resolve_corpus_path("data/corpus.json", Path::new("/srv/klev")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/klev/data/corpus.json"));
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let resolved =
            resolve_corpus_path("../shared/corpus.json", Path::new("/srv/klev/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/klev/shared/corpus.json"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_corpus_path("/data/corpus.json", Path::new("/other")).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/corpus.json"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let Some(dirs) = BaseDirs::new() else {
            return;
        };
        let resolved = resolve_corpus_path("~/corpus.json", Path::new("/other")).unwrap();
        assert_eq!(resolved, dirs.home_dir().join("corpus.json"));
    }

    #[test]
    fn test_tilde_in_middle_is_literal() {
        let resolved = resolve_corpus_path("data/~/corpus.json", Path::new("/srv")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/data/~/corpus.json"));
    }
}
