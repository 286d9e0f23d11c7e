//! Implementation of `klev search`.

use std::{process::ExitCode, time::Duration};

use klev_search::{SearchReport, SearchResult};
use serde::Serialize;

use crate::cli::{
    args::{SearchCommand, join_words},
    context::CommandContext,
    output::{print_json, print_report, print_results},
};

/// JSON output for `klev search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as given.
    query: &'a str,
    /// Ranked results, reports first.
    results: &'a [SearchResult],
    /// How the results were found, with `--explain`.
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a SearchReport>,
}

/// Searches the corpus and prints ranked results.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = join_words(&cmd.query);

    let mut params = ctx.search_params();
    if let Some(limit) = cmd.limit {
        params.result_limit = limit;
    }
    if let Some(ms) = cmd.timeout_ms {
        params.timeout = (ms > 0).then(|| Duration::from_millis(ms));
    }

    let searcher = match ctx.searcher(&cmd.corpus.paths, params) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let (results, report) = match searcher.search_all_with_report(&query) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.output.json {
        return print_json(&JsonSearchOutput {
            query: &query,
            results: &results,
            report: cmd.explain.explain.then_some(&report),
        });
    }

    if cmd.explain.explain {
        print_report(&query, &report);
    }
    print_results(&results);
    ExitCode::SUCCESS
}
