//! Entry point of the `acceptlang` command.

use acceptlang_cli::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match Cli::parse().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("fail to resolve the preferred language: {err}");
            ExitCode::FAILURE
        }
    }
}
