//! Container recreation pipeline for drun.
//!
//! Talks to the container daemon through the [`backend::ContainerDaemon`]
//! trait, loads descriptors, and drives the strictly sequential
//! load, stop, remove, pull, synthesize, confirm, run pipeline.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used, clippy::panic))]

pub mod backend;
pub mod engine;
pub mod event;
pub mod loader;
