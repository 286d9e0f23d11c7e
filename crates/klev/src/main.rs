//! Command-line interface for `klev`.

use std::process::ExitCode;

use clap::Parser;
use klev::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, init_tracing,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
