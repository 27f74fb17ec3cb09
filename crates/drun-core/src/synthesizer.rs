//! Mapping from a container descriptor to an equivalent `run` command.
//!
//! Token order is fixed: detach marker, name, restart policy, binds,
//! published ports, environment, privileged, publish-all, network, image,
//! then the command override. Fields not listed there never reach the
//! output.

use drun_common::constants::{
    DEFAULT_NETWORK_MODE, DETACH_FLAG, ENV_DENY_LIST, ENV_FLAG, NAME_FLAG, NETWORK_FLAG,
    PRIVILEGED_FLAG, PUBLISH_ALL_FLAG, PUBLISH_FLAG, RESTART_FLAG, VOLUME_FLAG,
};

use crate::command::RunCommand;
use crate::descriptor::{ContainerDescriptor, PortBindings};

/// Builds the `run` tokens that recreate the described container.
///
/// Pure and deterministic: the same descriptor always yields the same
/// tokens. Container ports are visited in lexical order.
#[must_use]
pub fn synthesize(descriptor: &ContainerDescriptor) -> RunCommand {
    let mut tokens = vec![DETACH_FLAG.to_owned()];

    push_flag(&mut tokens, NAME_FLAG, descriptor.name.normalized());

    if !descriptor.restart_policy.name.is_empty() {
        push_flag(&mut tokens, RESTART_FLAG, &descriptor.restart_policy.name);
    }

    for bind in &descriptor.volume_binds {
        push_flag(&mut tokens, VOLUME_FLAG, bind);
    }

    for publish in published_ports(&descriptor.port_bindings) {
        push_flag(&mut tokens, PUBLISH_FLAG, &publish);
    }

    for entry in descriptor.environment.iter().filter(|e| !is_denied_env(e)) {
        push_flag(&mut tokens, ENV_FLAG, entry);
    }

    if descriptor.privileged {
        tokens.push(PRIVILEGED_FLAG.to_owned());
    }

    if descriptor.publish_all_ports {
        tokens.push(PUBLISH_ALL_FLAG.to_owned());
    }

    if let Some(network) = explicit_network(&descriptor.network_mode) {
        push_flag(&mut tokens, NETWORK_FLAG, network);
    }

    tokens.push(descriptor.image.as_str().to_owned());
    tokens.extend(descriptor.command.iter().cloned());

    tracing::debug!(
        name = %descriptor.name,
        tokens = tokens.len(),
        "synthesized run command"
    );
    RunCommand::new(tokens)
}

fn push_flag(tokens: &mut Vec<String>, flag: &str, value: &str) {
    tokens.push(flag.to_owned());
    tokens.push(value.to_owned());
}

/// Returns `hostPort:containerPortSpec` for every binding with a fixed host port.
///
/// Bindings with an empty host port were assigned by the daemon at start
/// and cannot be replayed, so they are skipped.
pub fn published_ports(bindings: &PortBindings) -> impl Iterator<Item = String> + '_ {
    bindings.iter().flat_map(|(container_port, hosts)| {
        hosts
            .iter()
            .filter(|b| b.is_bound())
            .map(move |b| format!("{}:{container_port}", b.host_port))
    })
}

/// Returns whether an environment entry was injected by the daemon or image.
#[must_use]
pub fn is_denied_env(entry: &str) -> bool {
    ENV_DENY_LIST.iter().any(|prefix| entry.starts_with(prefix))
}

/// Returns the network mode if it differs from the daemon default.
#[must_use]
pub fn explicit_network(mode: &str) -> Option<&str> {
    (!mode.is_empty() && mode != DEFAULT_NETWORK_MODE).then_some(mode)
}
