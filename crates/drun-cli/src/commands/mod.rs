//! CLI definition and dispatch.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use drun_common::config::DrunConfig;
use drun_common::constants::{BIN_NAME, DEFAULT_DOCKER_BINARY, DOCKER_BINARY_ENV};
use drun_runtime::engine::{Engine, Outcome};
use drun_runtime::event::{EventSink, TracingSink};

use crate::output::TerminalSink;
use crate::prompt::StdinConfirm;

/// Recreate a container with the latest version of its image.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Name of the container to recreate.
    pub container: String,

    /// Show the command that would be run without stopping or removing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the command as a JSON array of arguments.
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Container CLI used to talk to the daemon.
    #[arg(long, env = DOCKER_BINARY_ENV, default_value = DEFAULT_DOCKER_BINARY)]
    pub docker: PathBuf,
}

impl Cli {
    /// Builds the runtime configuration from the parsed arguments.
    pub fn config(&self) -> DrunConfig {
        DrunConfig {
            docker_binary: self.docker.clone(),
            dry_run: self.dry_run,
        }
    }
}

/// Runs the recreate pipeline for the parsed CLI.
///
/// A declined confirmation is not an error.
///
/// # Errors
///
/// Returns an error if any pipeline step fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let program = config.docker_binary.display().to_string();
    let sink: Box<dyn EventSink> = if cli.json {
        Box::new(TracingSink)
    } else {
        Box::new(TerminalSink::new(program.clone()))
    };

    let engine = Engine::new(&config, sink);
    if !engine.is_available() {
        tracing::warn!(binary = %program, "container CLI not found in PATH");
    }

    let outcome = engine.recreate(&cli.container, &StdinConfirm)?;
    tracing::debug!(?outcome, "pipeline finished");

    if let Outcome::Planned(command) = outcome {
        if cli.json {
            let json = serde_json::to_string(&command).context("failed to encode command")?;
            #[allow(clippy::print_stdout)]
            {
                println!("{json}");
            }
        } else {
            crate::output::print_dry_run_notice();
        }
    }
    Ok(())
}
