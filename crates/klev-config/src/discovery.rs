//! Locating the `.klev.toml` files that apply to a directory.
//!
//! Project files are found by climbing from the working directory towards the
//! filesystem root. The global file comes last. It lives in the home directory
//! unless `KLEV_CONFIG` names another file.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".klev.toml";

/// Environment variable overriding the global configuration file.
pub const CONFIG_ENV: &str = "KLEV_CONFIG";

/// Lists configuration files for `cwd`, nearest first.
///
/// Every ancestor of `cwd` (itself included) contributes its `.klev.toml`. A
/// file with `root = true` ends the climb and also excludes the global file.
/// Otherwise the global file is appended when it exists and was not already
/// reached on the way up.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            continue;
        }
        let is_root = is_root_config(&path);
        configs.push(path);
        if is_root {
            return configs;
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// Returns the global configuration file.
///
/// This is `$KLEV_CONFIG` when set and non-empty, else `~/.klev.toml`. `None`
/// means there is no override and no home directory.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_path_from(env::var_os(CONFIG_ENV))
}

/// Resolves the global configuration file from an optional override.
fn global_config_path_from(override_path: Option<OsString>) -> Option<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME)),
    }
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
