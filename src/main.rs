use clap::Parser;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use patchver::cli;
use patchver::cli::commands::Cli;

fn main() {
    let cli_args = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli_args.verbose { "debug" } else { "error" })
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    process::exit(cli::run::run(&cli_args));
}
