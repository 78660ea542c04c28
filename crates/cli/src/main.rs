//! `stockform` command-line entry point.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod terminal;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    stockform_observability::init(cli.log_format());

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
