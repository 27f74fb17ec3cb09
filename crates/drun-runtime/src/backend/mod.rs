//! Container daemon abstraction.
//!
//! The daemon is a black box reached through five blocking calls. Every
//! call either succeeds or returns the error variant that belongs to it.

pub mod docker;

use drun_common::config::DrunConfig;
use drun_common::error::Result;
use drun_common::types::ImageRef;
use drun_core::command::RunCommand;

/// Blocking interface to a container-management daemon.
///
/// Implementors map their failures to the matching
/// [`DrunError`](drun_common::error::DrunError) variant.
pub trait ContainerDaemon {
    /// Returns the raw JSON `inspect` output for a container name.
    ///
    /// An empty JSON array means no container matched.
    ///
    /// # Errors
    ///
    /// Returns `QueryFailed` if the daemon invocation fails.
    fn inspect(&self, name: &str) -> Result<Vec<u8>>;

    /// Stops a container.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleFailed` if the container cannot be stopped.
    fn stop(&self, name: &str) -> Result<()>;

    /// Removes a stopped container.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleFailed` if the container cannot be removed.
    fn remove(&self, name: &str) -> Result<()>;

    /// Pulls the latest version of an image, streaming progress to the terminal.
    ///
    /// # Errors
    ///
    /// Returns `PullFailed` if the pull fails.
    fn pull(&self, image: &ImageRef) -> Result<()>;

    /// Launches a container with the synthesized arguments.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionFailed` if the launch fails.
    fn run(&self, command: &RunCommand) -> Result<()>;

    /// Returns whether the daemon client can be invoked at all.
    fn is_available(&self) -> bool;
}

/// Creates the daemon client described by the configuration.
#[must_use]
pub fn from_config(config: &DrunConfig) -> Box<dyn ContainerDaemon> {
    Box::new(docker::DockerCli::new(config.docker_binary.clone()))
}
