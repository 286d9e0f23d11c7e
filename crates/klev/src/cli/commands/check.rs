//! Implementation of `klev check`.

use std::process::ExitCode;

use klev_config::{ConfigWarning, discover_config_files};
use klev_search::MemoryStore;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files and corpus status, and reports warnings.
///
/// Exits with failure when there are warnings or the corpus cannot be read.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!("Run {} to create a configuration file.", subheader("klev init"));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let config = &ctx.config;
    let mut healthy = true;

    println!("{}", subheader("Corpus:"));
    if config.corpus.is_empty() {
        println!("   {}", dim("(none configured)"));
    }
    for path in &config.corpus {
        if !path.is_file() {
            println!("   {} {}", path.display(), warning("[missing]"));
            continue;
        }
        match MemoryStore::load_file(path) {
            Ok(store) => println!(
                "   {} {}",
                path.display(),
                dim(&format!(
                    "({} reports, {} competitions)",
                    store.len("reports"),
                    store.len("competitions")
                ))
            ),
            Err(e) => {
                healthy = false;
                println!("   {} {}", path.display(), warning(&format!("[{e}]")));
            }
        }
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() && healthy {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    if !warnings.is_empty() {
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("   {}", warning(&w.to_string()));
        }
        println!();
        print_hints(&warnings);
    }

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::NoCorpus => "Hint: add a [corpus] section with path = \"corpus.json\"",
            ConfigWarning::CorpusPathMissing { .. } => {
                "Hint: create the corpus file or fix [corpus] path"
            }
            ConfigWarning::CorpusPathNotFile { .. } => {
                "Hint: [corpus] path must name a JSON file, not a directory"
            }
            ConfigWarning::ZeroLimit { .. } => "Hint: limits must be at least 1",
        })
        .collect();
    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(hint));
    }
}
