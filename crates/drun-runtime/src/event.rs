//! Pipeline progress events.
//!
//! The engine never prints. It reports progress as [`PipelineEvent`]s to an
//! injected [`EventSink`]; the CLI renders them on the terminal, library
//! users can forward them anywhere.

use std::fmt;

use drun_common::types::ImageRef;
use drun_core::command::RunCommand;

/// How an event should be presented to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Routine progress.
    Info,
    /// The pipeline finished its job.
    Success,
    /// Something the operator should notice, not a failure.
    Warning,
    /// A fatal failure.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Success => write!(f, "SUCCESS"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A step of the recreate pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Started processing a container.
    Processing {
        /// Name given by the operator.
        name: String,
    },
    /// The container's image is known.
    ImageResolved {
        /// Image the container runs.
        image: ImageRef,
    },
    /// About to stop the container.
    Stopping {
        /// Container being stopped.
        name: String,
    },
    /// About to remove the container.
    Removing {
        /// Container being removed.
        name: String,
    },
    /// About to pull the latest image.
    Pulling {
        /// Image being pulled.
        image: ImageRef,
    },
    /// The replacement command has been synthesized.
    CommandReady {
        /// Synthesized command.
        command: RunCommand,
    },
    /// The operator declined to run the command.
    Cancelled,
    /// The container was recreated.
    Recreated {
        /// Name given by the operator.
        name: String,
    },
    /// The pipeline failed.
    Failed {
        /// Rendered error chain.
        message: String,
    },
}

impl PipelineEvent {
    /// Returns the presentation severity of the event.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Processing { .. }
            | Self::ImageResolved { .. }
            | Self::Stopping { .. }
            | Self::Removing { .. }
            | Self::Pulling { .. }
            | Self::CommandReady { .. } => Severity::Info,
            Self::Cancelled => Severity::Warning,
            Self::Recreated { .. } => Severity::Success,
            Self::Failed { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing { name } => write!(f, "Processing container: {name}"),
            Self::ImageResolved { image } => write!(f, "Container image: {image}"),
            Self::Stopping { name } => write!(f, "Stopping container {name}..."),
            Self::Removing { name } => write!(f, "Removing container {name}..."),
            Self::Pulling { image } => write!(f, "Pulling latest image {image}..."),
            Self::CommandReady { command } => write!(f, "Generated command: {command}"),
            Self::Cancelled => write!(f, "Operation cancelled by user."),
            Self::Recreated { name } => write!(
                f,
                "Container {name} has been successfully restarted with latest image"
            ),
            Self::Failed { message } => write!(f, "{message}"),
        }
    }
}

/// Consumer of pipeline events.
pub trait EventSink {
    /// Receives one event.
    fn emit(&self, event: &PipelineEvent);
}

/// Sink that forwards events to `tracing` at a level matching their severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &PipelineEvent) {
        match event.severity() {
            Severity::Info | Severity::Success => tracing::info!(%event, "pipeline"),
            Severity::Warning => tracing::warn!(%event, "pipeline"),
            Severity::Error => tracing::error!(%event, "pipeline"),
        }
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &PipelineEvent) {}
}
