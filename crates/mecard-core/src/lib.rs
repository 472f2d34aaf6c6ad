//! Shared building blocks for the MECARD workspace.
//!
//! - [`config`] - settings loaded from the environment and `mecard.toml`
//! - [`constants`] - schema tag and reserved separator bytes
//! - [`error`] - the core error type
//! - [`logging`] - `tracing` subscriber bootstrap for embedders

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
