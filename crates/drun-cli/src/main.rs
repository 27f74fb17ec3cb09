//! # drun
//!
//! Recreates a container from its live configuration: stops and removes
//! it, pulls the latest image, and runs an equivalent container after
//! confirmation.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

mod commands;
mod output;
mod prompt;

use std::process::ExitCode;

use clap::Parser;
use drun_runtime::event::{EventSink, PipelineEvent};

use crate::commands::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let program = cli.docker.display().to_string();
    match commands::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::TerminalSink::new(program).emit(&PipelineEvent::Failed {
                message: format!("{e:#}"),
            });
            ExitCode::FAILURE
        }
    }
}
