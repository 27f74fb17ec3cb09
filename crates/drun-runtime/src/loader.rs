//! Descriptor loading from the container daemon.

use drun_common::error::{DrunError, Result};
use drun_core::descriptor::ContainerDescriptor;
use drun_core::inspect::decode_inspect;

use crate::backend::ContainerDaemon;

/// Loads the launch configuration of a named container.
///
/// When the daemon returns several matches only the first one is used.
///
/// # Errors
///
/// - `QueryFailed` if the name is empty or the inspect call fails.
/// - `DecodeFailed` if the inspect output cannot be decoded.
/// - `NotFound` if no container matched.
pub fn load_descriptor(daemon: &dyn ContainerDaemon, name: &str) -> Result<ContainerDescriptor> {
    if name.is_empty() {
        return Err(DrunError::QueryFailed {
            name: String::new(),
            message: "container name is empty".into(),
        });
    }

    let raw = daemon.inspect(name)?;
    let mut matches = decode_inspect(&raw)?;
    if matches.len() > 1 {
        tracing::warn!(name, count = matches.len(), "several containers matched, using the first");
    }
    if matches.is_empty() {
        return Err(DrunError::NotFound {
            name: name.to_owned(),
        });
    }
    Ok(matches.swap_remove(0))
}
