//! Unified error types for the drun workspace.
//!
//! Every external call in the recreate pipeline maps its failure to exactly
//! one variant. None of them is retried; each one ends the invocation.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DrunError {
    /// The daemon reported zero containers matching the name.
    #[error("container not found: {name}")]
    NotFound {
        /// Name that was looked up.
        name: String,
    },

    /// The inspect query itself failed (daemon unreachable, permission
    /// denied, malformed name, missing binary).
    #[error("failed to inspect container {name}: {message}")]
    QueryFailed {
        /// Name that was looked up.
        name: String,
        /// Message reported by the daemon or the OS.
        message: String,
    },

    /// The inspect response could not be decoded into a descriptor.
    #[error("failed to parse container info: {source}")]
    DecodeFailed {
        /// Underlying decode error.
        #[from]
        source: serde_json::Error,
    },

    /// Stopping or removing the existing container failed.
    #[error("failed to {action} container {name}: {message}")]
    LifecycleFailed {
        /// Lifecycle action that failed (`stop` or `remove`).
        action: &'static str,
        /// Container the action was applied to.
        name: String,
        /// Message reported by the daemon or the OS.
        message: String,
    },

    /// Pulling the image failed.
    #[error("failed to pull image {image}: {message}")]
    PullFailed {
        /// Image reference that was pulled.
        image: String,
        /// Message reported by the daemon or the OS.
        message: String,
    },

    /// The final run invocation failed.
    #[error("failed to run container: {message}")]
    ExecutionFailed {
        /// Message reported by the daemon or the OS.
        message: String,
    },
}

impl DrunError {
    /// Short machine-friendly label for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::QueryFailed { .. } => "query_failed",
            Self::DecodeFailed { .. } => "decode_failed",
            Self::LifecycleFailed { .. } => "lifecycle_failed",
            Self::PullFailed { .. } => "pull_failed",
            Self::ExecutionFailed { .. } => "execution_failed",
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DrunError>;
