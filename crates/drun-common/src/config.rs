//! Per-invocation configuration for drun.
//!
//! Nothing here is persisted. The CLI builds a [`DrunConfig`] from its
//! flags and environment and hands it to the runtime.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for a single drun invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrunConfig {
    /// Daemon CLI binary, either a bare name looked up in `PATH` or a path.
    pub docker_binary: PathBuf,
    /// Compute and show the command without touching the container.
    pub dry_run: bool,
}

impl Default for DrunConfig {
    fn default() -> Self {
        Self {
            docker_binary: PathBuf::from(crate::constants::DEFAULT_DOCKER_BINARY),
            dry_run: false,
        }
    }
}
