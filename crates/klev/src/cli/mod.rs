//! CLI support for the `klev` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;

use std::io;

pub use context::CommandContext;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` sets the filter, defaulting to `warn`. Each `-v` raises the
/// level to `debug` and then `trace`, overriding `RUST_LOG`.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("warning: logging disabled: {e}");
    }
}
