//! Implementation of `klev keywords`.

use std::process::ExitCode;

use klev_lexicon::{KeywordExtractor, Stopwords, detect_date_tokens, split_words};
use serde::Serialize;

use crate::cli::{
    args::{KeywordsCommand, join_words},
    context::CommandContext,
    output::{dim, print_json},
};

/// JSON output for `klev keywords`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonKeywords<'a> {
    /// The query as given.
    query: &'a str,
    /// Every keyword, date tokens first.
    keywords: &'a [String],
    /// The synthesized date tokens alone.
    date_tokens: Vec<String>,
}

/// Prints the keywords a query reduces to.
pub fn run(ctx: &CommandContext, cmd: &KeywordsCommand) -> ExitCode {
    let query = join_words(&cmd.query);
    let lexicon = &ctx.config.lexicon;
    let stopwords = if lexicon.extended_stopwords {
        Stopwords::extended()
    } else {
        Stopwords::new()
    };
    let keywords = KeywordExtractor::new(stopwords, lexicon.min_keyword_len).extract(&query);

    if cmd.output.json {
        return print_json(&JsonKeywords {
            query: &query,
            keywords: keywords.as_slice(),
            date_tokens: detect_date_tokens(&split_words(&query)),
        });
    }

    if keywords.is_empty() {
        println!("{}", dim("(no keywords)"));
    }
    for keyword in &keywords {
        println!("{keyword}");
    }
    ExitCode::SUCCESS
}
