//! Implementation of `klev ask`.
//!
//! Small talk gets a fixed reply; any other message is searched like
//! `klev search`.

use std::process::ExitCode;

use klev_lexicon::{Intent, detect_intent};
use klev_search::SearchResult;
use serde::Serialize;
use tracing::debug;

use crate::cli::{
    args::{AskCommand, join_words},
    context::CommandContext,
    output::{NO_RESULTS, dim, print_json, print_results},
};

/// Example queries offered alongside replies.
const EXAMPLE_QUERIES: &[&str] = &[
    "Отчет о Днестре",
    "соревнования в Данченах",
    "дамба озера Данчены",
    "рыбалка на Ţipala",
    "отчеты Hîrjauca",
];

/// JSON output for `klev ask`.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonAnswer<'a> {
    /// A small-talk reply.
    Reply {
        /// Detected intent.
        intent: Intent,
        /// Reply text.
        reply: &'static str,
    },
    /// Search results for the message.
    Results {
        /// Ranked results, reports first.
        results: &'a [SearchResult],
    },
}

/// Returns the fixed reply for a small-talk intent.
fn reply(intent: Intent) -> &'static str {
    match intent {
        Intent::Greet => "Привет! Я помогу найти отчеты о рыбалке и соревнования.",
        Intent::Status => "Все отлично, готов искать отчеты и соревнования.",
        Intent::WhoAmI => {
            "Я помощник сайта о рыбалке: ищу отчеты и соревнования по вашему запросу."
        }
        Intent::Capabilities => {
            "Ищу отчеты и соревнования, понимаю русский и румынский, транслит и даты вроде \
             «18 января»."
        }
        Intent::HowTo | Intent::Help => {
            "Напишите место, водоем или дату. Если ничего не найдется, попробую перевод и \
             транслит запроса."
        }
        Intent::Thanks => "Пожалуйста! Удачной рыбалки.",
        Intent::Bye => "До встречи! Ни хвоста, ни чешуи.",
        Intent::SmallTalk => "Я лучше всего умею искать отчеты и соревнования.",
    }
}

/// Returns true if the reply should be followed by example queries.
fn offers_examples(intent: Intent) -> bool {
    !matches!(intent, Intent::Thanks | Intent::Bye)
}

/// Answers a chat message.
pub fn run(ctx: &CommandContext, cmd: &AskCommand) -> ExitCode {
    let message = join_words(&cmd.message);

    if let Some(intent) = detect_intent(&message) {
        debug!(%intent, "small talk");
        let text = reply(intent);
        if cmd.output.json {
            return print_json(&JsonAnswer::Reply {
                intent,
                reply: text,
            });
        }
        println!("{text}");
        if offers_examples(intent) {
            print_examples();
        }
        return ExitCode::SUCCESS;
    }

    let searcher = match ctx.searcher(&cmd.corpus.paths, ctx.search_params()) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let results = match searcher.search_all(&message) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.output.json {
        return print_json(&JsonAnswer::Results { results: &results });
    }
    if results.is_empty() {
        println!("{NO_RESULTS}");
        print_examples();
    } else {
        print_results(&results);
    }
    ExitCode::SUCCESS
}

/// Prints example queries.
fn print_examples() {
    println!();
    println!("{}", dim("Try for example:"));
    for example in EXAMPLE_QUERIES {
        println!("   {example}");
    }
}
