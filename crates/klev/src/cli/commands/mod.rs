//! Command implementations and dispatch.

pub mod ask;
pub mod check;
pub mod config;
pub mod expand;
pub mod init;
pub mod keywords;
pub mod search;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Expand(cmd) => expand::run(ctx, &cmd),
        Commands::Keywords(cmd) => keywords::run(ctx, &cmd),
        Commands::Ask(cmd) => ask::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
