//! Terminal styling, result rendering and JSON output.

use std::process::ExitCode;

use klev_search::{DocumentKind, SearchReport, SearchResult};
use serde::Serialize;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow foreground.
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Message printed when a search matches nothing.
pub const NO_RESULTS: &str = "No results found.";

/// Longest report excerpt shown in text output, in characters.
const EXCERPT_CHARS: usize = 160;

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints results grouped by kind, reports first.
pub fn print_results(results: &[SearchResult]) {
    if results.is_empty() {
        println!("{NO_RESULTS}");
        return;
    }

    for kind in DocumentKind::ALL {
        let group: Vec<&SearchResult> = results.iter().filter(|r| r.kind == kind).collect();
        if group.is_empty() {
            continue;
        }
        let label = match kind {
            DocumentKind::Report => "Reports",
            DocumentKind::Competition => "Competitions",
        };
        println!("{}", header(&format!("{label} ({})", group.len())));
        for (i, result) in group.iter().enumerate() {
            print_result(i + 1, result);
        }
        println!();
    }
}

/// Prints one numbered result.
fn print_result(n: usize, result: &SearchResult) {
    println!(
        "{:>3}. {} {}",
        n,
        subheader(&result.title),
        dim(&format!("[{}]", result.id))
    );
    if let Some(location) = &result.location {
        println!("     {location}");
    }
    if let Some(text) = result.text.as_deref().filter(|t| !t.trim().is_empty()) {
        println!("     {}", excerpt(text, EXCERPT_CHARS));
    }
    if let Some(count) = result.photos_count.filter(|c| *c > 0) {
        println!("     {}", dim(&format!("photos: {count}")));
    }
}

/// Collapses whitespace and shortens text to `max` characters.
fn excerpt(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let mut short: String = flat.chars().take(max).collect();
    short.push('…');
    short
}

/// Prints how a search reached its results.
pub fn print_report(query: &str, report: &SearchReport) {
    println!("{}", subheader("Query:"));
    println!("   {query}");
    println!();

    println!("{}", subheader("Keywords:"));
    if report.keywords.is_empty() {
        println!("   {}", dim("(none)"));
    } else {
        println!("   {}", report.keywords.join(", "));
    }
    println!();

    println!("{}", subheader("Matched by:"));
    match &report.source {
        Some(source) => println!("   {source}"),
        None => println!("   {}", dim("(nothing matched)")),
    }
    println!("   {}", dim(&format!("variants tried: {}", report.variants_tried)));
    println!();
}
