//! File-based tracing for the plugin.
//!
//! This module wires the `tracing` instrumentation used across the crate to a
//! rotating log file in the plugin data directory. The plugin runs inside
//! Zellij's WASM sandbox with no terminal of its own, so a file is the only
//! practical log destination.
//!
//! # Configuration
//!
//! Trace level is controlled via the `trace_level` plugin config option
//! (default `"info"`).
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
