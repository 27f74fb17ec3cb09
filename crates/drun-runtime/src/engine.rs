//! Recreate pipeline: load, stop, remove, pull, synthesize, confirm, run.
//!
//! Every step blocks and every failure ends the run. There is no rollback:
//! once the container has been stopped and removed, a failing pull or run
//! leaves it gone. Use dry-run mode to inspect the command first.

use drun_common::config::DrunConfig;
use drun_common::error::Result;
use drun_core::command::RunCommand;
use drun_core::synthesizer::synthesize;

use crate::backend::{self, ContainerDaemon};
use crate::event::{EventSink, PipelineEvent};
use crate::loader::load_descriptor;

/// Operator approval of the synthesized command.
pub trait Confirm {
    /// Returns `true` if the command may be executed.
    fn confirm(&self, command: &RunCommand) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&RunCommand) -> bool,
{
    fn confirm(&self, command: &RunCommand) -> bool {
        self(command)
    }
}

/// How a successful pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The container was recreated with this command.
    Recreated(RunCommand),
    /// The operator declined; the old container is already removed.
    Declined(RunCommand),
    /// Dry run; nothing was touched.
    Planned(RunCommand),
}

impl Outcome {
    /// Returns the synthesized command.
    #[must_use]
    pub const fn command(&self) -> &RunCommand {
        match self {
            Self::Recreated(c) | Self::Declined(c) | Self::Planned(c) => c,
        }
    }
}

/// Drives one recreate invocation against a daemon.
pub struct Engine {
    daemon: Box<dyn ContainerDaemon>,
    sink: Box<dyn EventSink>,
    dry_run: bool,
}

impl Engine {
    /// Creates an engine for the daemon and mode described by the configuration.
    #[must_use]
    pub fn new(config: &DrunConfig, sink: Box<dyn EventSink>) -> Self {
        Self {
            daemon: backend::from_config(config),
            sink,
            dry_run: config.dry_run,
        }
    }

    /// Creates an engine around an existing daemon client.
    #[must_use]
    pub fn with_daemon(daemon: Box<dyn ContainerDaemon>, sink: Box<dyn EventSink>) -> Self {
        Self {
            daemon,
            sink,
            dry_run: false,
        }
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns whether the daemon client can be invoked.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.daemon.is_available()
    }

    /// Recreates the named container from its current configuration.
    ///
    /// In dry-run mode only the descriptor is loaded and the command
    /// synthesized.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step. Steps already done are
    /// not undone.
    pub fn recreate(&self, name: &str, confirm: &dyn Confirm) -> Result<Outcome> {
        self.sink.emit(&PipelineEvent::Processing {
            name: name.to_owned(),
        });
        let descriptor = load_descriptor(self.daemon.as_ref(), name)?;
        self.sink.emit(&PipelineEvent::ImageResolved {
            image: descriptor.image.clone(),
        });

        if self.dry_run {
            let command = synthesize(&descriptor);
            self.sink.emit(&PipelineEvent::CommandReady {
                command: command.clone(),
            });
            tracing::info!(name, "dry run, container left untouched");
            return Ok(Outcome::Planned(command));
        }

        self.sink.emit(&PipelineEvent::Stopping {
            name: name.to_owned(),
        });
        self.daemon.stop(name)?;
        self.sink.emit(&PipelineEvent::Removing {
            name: name.to_owned(),
        });
        self.daemon.remove(name)?;

        self.sink.emit(&PipelineEvent::Pulling {
            image: descriptor.image.clone(),
        });
        self.daemon.pull(&descriptor.image)?;

        let command = synthesize(&descriptor);
        self.sink.emit(&PipelineEvent::CommandReady {
            command: command.clone(),
        });

        if !confirm.confirm(&command) {
            self.sink.emit(&PipelineEvent::Cancelled);
            return Ok(Outcome::Declined(command));
        }

        self.daemon.run(&command)?;
        self.sink.emit(&PipelineEvent::Recreated {
            name: name.to_owned(),
        });
        Ok(Outcome::Recreated(command))
    }
}
