//! Daemon backend that shells out to the `docker` CLI.
//!
//! Any CLI with the same `inspect`/`stop`/`rm`/`pull`/`run` surface works,
//! e.g. `podman`.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output, Stdio};

use drun_common::error::{DrunError, Result};
use drun_common::types::ImageRef;
use drun_core::command::RunCommand;

use super::ContainerDaemon;

/// Backend driving the daemon through its command-line client.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: PathBuf,
}

impl DockerCli {
    /// Creates a backend for the given client binary name or path.
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Returns the configured client binary.
    #[must_use]
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Resolves the binary through `PATH`, falling back to the configured value.
    fn program(&self) -> PathBuf {
        which::which(&self.binary).unwrap_or_else(|_| self.binary.clone())
    }

    fn command(&self) -> Command {
        Command::new(self.program())
    }

    /// Runs a lifecycle subcommand, capturing its output for error reporting.
    fn lifecycle(&self, action: &'static str, subcommand: &str, name: &str) -> Result<()> {
        tracing::info!(name, action, "container lifecycle call");
        let failed = |message: String| DrunError::LifecycleFailed {
            action,
            name: name.to_owned(),
            message,
        };
        let output = self
            .command()
            .args([subcommand, name])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| failed(e.to_string()))?;
        if output.status.success() {
            Ok(())
        } else {
            Err(failed(failure_message(&output)))
        }
    }
}

impl ContainerDaemon for DockerCli {
    fn inspect(&self, name: &str) -> Result<Vec<u8>> {
        tracing::info!(name, binary = %self.binary.display(), "inspecting container");
        let output = self
            .command()
            .args(["inspect", "--type", "container", name])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| DrunError::QueryFailed {
                name: name.to_owned(),
                message: e.to_string(),
            })?;

        // The client prints `[]` on every failure; only a missing container
        // is reported back as an empty match.
        if output.status.success() || (is_empty_array(&output.stdout) && is_missing(&output)) {
            return Ok(output.stdout);
        }
        Err(DrunError::QueryFailed {
            name: name.to_owned(),
            message: failure_message(&output),
        })
    }

    fn stop(&self, name: &str) -> Result<()> {
        self.lifecycle("stop", "stop", name)
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.lifecycle("remove", "rm", name)
    }

    fn pull(&self, image: &ImageRef) -> Result<()> {
        tracing::info!(image = %image, "pulling image");
        let failed = |message: String| DrunError::PullFailed {
            image: image.to_string(),
            message,
        };
        let status = self
            .command()
            .args(["pull", image.as_str()])
            .status()
            .map_err(|e| failed(e.to_string()))?;
        check_status(status).map_err(failed)
    }

    fn run(&self, command: &RunCommand) -> Result<()> {
        tracing::info!(args = ?command.tokens(), "launching container");
        let status = self
            .command()
            .args(command.argv())
            .status()
            .map_err(|e| DrunError::ExecutionFailed {
                message: e.to_string(),
            })?;
        check_status(status).map_err(|message| DrunError::ExecutionFailed { message })
    }

    fn is_available(&self) -> bool {
        which::which(&self.binary).is_ok()
    }
}

fn check_status(status: ExitStatus) -> std::result::Result<(), String> {
    if status.success() {
        Ok(())
    } else {
        Err(status.to_string())
    }
}

/// Prefers the client's stderr, falling back to the exit status.
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr.to_owned()
    }
}

/// Stderr fragments the client uses when no container matched.
const MISSING_MARKERS: [&str; 2] = ["No such container", "No such object"];

fn is_missing(output: &Output) -> bool {
    let stderr = String::from_utf8_lossy(&output.stderr);
    MISSING_MARKERS.iter().any(|marker| stderr.contains(marker))
}

fn is_empty_array(stdout: &[u8]) -> bool {
    let text = String::from_utf8_lossy(stdout);
    let text = text.trim();
    text.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|inner| inner.trim().is_empty())
}
