//! HS tariff upload processor CLI library.
//!
//! The binary in `main.rs` is a thin shell; the pipeline stages and command
//! drivers live here so integration tests can run a full batch without
//! spawning a process.

pub mod cli;
pub mod commands;
pub mod config_file;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
