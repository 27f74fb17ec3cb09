//! # drun-core
//!
//! The decision logic of drun, free of any I/O:
//! - **Descriptor**: immutable snapshot of a container's launch configuration.
//! - **Inspect**: decoding of the daemon's `inspect` JSON into descriptors.
//! - **Synthesizer**: pure mapping from a descriptor to `run` tokens.
//! - **Command**: the synthesized token list and its shell rendering.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod command;
pub mod descriptor;
pub mod inspect;
pub mod synthesizer;
