//! Ticketgen: templated algebra exam ticket generator.
//!
//! This is the entry point for the `ticketgen` CLI. It parses arguments,
//! runs generation, and reports failures on stderr with a non-zero exit
//! status.

mod cli;
mod commands;

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse_args();

    match commands::cmd_generate(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
