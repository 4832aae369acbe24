//! bark CLI entry point

use std::process::ExitCode;

use clap::Parser;

use bark::cli::{app::run, args::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(cli.args)
}
