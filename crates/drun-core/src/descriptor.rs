//! Point-in-time snapshot of a container's launch configuration.
//!
//! A [`ContainerDescriptor`] is built once by the loader and then only
//! ever borrowed. Synthesis reads it and never changes it.

use std::collections::BTreeMap;

use drun_common::types::{ContainerName, ImageRef};

/// Host side of a published container port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortBinding {
    /// Host interface address; empty means all interfaces.
    pub host_interface: String,
    /// Host port; empty means a dynamically assigned port.
    pub host_port: String,
}

impl PortBinding {
    /// Creates a binding on all host interfaces.
    #[must_use]
    pub fn on_port(host_port: impl Into<String>) -> Self {
        Self {
            host_interface: String::new(),
            host_port: host_port.into(),
        }
    }

    /// Returns whether the host port was fixed when the container was created.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.host_port.is_empty()
    }
}

/// Port bindings keyed by container port spec (`80/tcp`).
///
/// Keys iterate in lexical order.
pub type PortBindings = BTreeMap<String, Vec<PortBinding>>;

/// Restart policy of a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestartPolicy {
    /// Policy name (`always`, `unless-stopped`, `on-failure`); empty means none.
    pub name: String,
    /// Maximum retry count reported by the daemon.
    pub max_retries: i64,
}

impl RestartPolicy {
    /// Creates a policy with the given name and no retry limit.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_retries: 0,
        }
    }
}

/// Launch configuration of a container as reported by the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDescriptor {
    /// Raw container name, possibly prefixed with `/`.
    pub name: ContainerName,
    /// Image the container was created from.
    pub image: ImageRef,
    /// Command override; empty means the image default.
    pub command: Vec<String>,
    /// `KEY=VALUE` environment entries in daemon order.
    pub environment: Vec<String>,
    /// Raw `source:target[:mode]` bind specifications.
    pub volume_binds: Vec<String>,
    /// Published ports.
    pub port_bindings: PortBindings,
    /// Restart policy.
    pub restart_policy: RestartPolicy,
    /// Network mode; empty or `default` means no explicit network.
    pub network_mode: String,
    /// Whether the container runs privileged.
    pub privileged: bool,
    /// Whether every exposed port is published.
    pub publish_all_ports: bool,
}

impl ContainerDescriptor {
    /// Creates a descriptor with only a name and an image set.
    #[must_use]
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: ContainerName::new(name),
            image: ImageRef::new(image),
            command: Vec::new(),
            environment: Vec::new(),
            volume_binds: Vec::new(),
            port_bindings: PortBindings::new(),
            restart_policy: RestartPolicy::default(),
            network_mode: String::new(),
            privileged: false,
            publish_all_ports: false,
        }
    }
}
