//! Decoding of the daemon's container `inspect` output.
//!
//! The daemon prints a JSON array of container records with PascalCase
//! keys. Only the fields a descriptor needs are read; unknown fields are
//! ignored and list/map fields may be `null` or missing. `Name` and
//! `Config.Image` are required.

use std::collections::BTreeMap;

use drun_common::error::Result;
use drun_common::types::{ContainerName, ImageRef};
use serde::Deserialize;

use crate::descriptor::{ContainerDescriptor, PortBinding, PortBindings, RestartPolicy};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectRecord {
    name: String,
    config: InspectConfig,
    host_config: Option<InspectHostConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectConfig {
    image: String,
    cmd: Option<Vec<String>>,
    env: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectHostConfig {
    binds: Option<Vec<String>>,
    port_bindings: Option<BTreeMap<String, Option<Vec<InspectPortBinding>>>>,
    restart_policy: Option<InspectRestartPolicy>,
    network_mode: Option<String>,
    privileged: Option<bool>,
    publish_all_ports: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectPortBinding {
    host_ip: Option<String>,
    host_port: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InspectRestartPolicy {
    name: Option<String>,
    maximum_retry_count: Option<i64>,
}

impl From<InspectRecord> for ContainerDescriptor {
    fn from(record: InspectRecord) -> Self {
        let host = record.host_config.unwrap_or_default();

        let port_bindings: PortBindings = host
            .port_bindings
            .unwrap_or_default()
            .into_iter()
            .map(|(port, bindings)| {
                let bindings = bindings
                    .unwrap_or_default()
                    .into_iter()
                    .map(|b| PortBinding {
                        host_interface: b.host_ip.unwrap_or_default(),
                        host_port: b.host_port.unwrap_or_default(),
                    })
                    .collect();
                (port, bindings)
            })
            .collect();

        let restart_policy = host.restart_policy.map_or_else(RestartPolicy::default, |p| {
            RestartPolicy {
                name: p.name.unwrap_or_default(),
                max_retries: p.maximum_retry_count.unwrap_or_default(),
            }
        });

        Self {
            name: ContainerName::new(record.name),
            image: ImageRef::new(record.config.image),
            command: record.config.cmd.unwrap_or_default(),
            environment: record.config.env.unwrap_or_default(),
            volume_binds: host.binds.unwrap_or_default(),
            port_bindings,
            restart_policy,
            network_mode: host.network_mode.unwrap_or_default(),
            privileged: host.privileged.unwrap_or(false),
            publish_all_ports: host.publish_all_ports.unwrap_or(false),
        }
    }
}

/// Decodes raw `inspect` output into descriptors, in daemon order.
///
/// # Errors
///
/// Returns [`DrunError::DecodeFailed`](drun_common::error::DrunError::DecodeFailed)
/// if the output is not a JSON array of container records.
pub fn decode_inspect(raw: &[u8]) -> Result<Vec<ContainerDescriptor>> {
    let records: Vec<InspectRecord> = serde_json::from_slice(raw)?;
    tracing::debug!(count = records.len(), "decoded inspect output");
    Ok(records.into_iter().map(ContainerDescriptor::from).collect())
}
