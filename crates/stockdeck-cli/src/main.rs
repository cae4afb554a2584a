mod cli;
mod commands;
mod sink;

use clap::Parser;
use std::process::ExitCode;

use stockdeck_core::ResultKind;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("command line input recorded: {cli:?}");

    match commands::run(&cli).await {
        // Handler failures are already rendered into their region; the
        // exit code just mirrors the final display state.
        ResultKind::Error => ExitCode::from(3),
        ResultKind::Success | ResultKind::Info => ExitCode::SUCCESS,
    }
}
