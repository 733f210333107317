//! HTTP client for the Reaper repair-orchestration REST API.
//!
//! This crate owns everything network-facing: the request plumbing, the
//! per-resource operation functions, the clap command surface, and the
//! `reaperctl` binary. Record types, filters and errors live in the core
//! `reaperctl` crate.

pub mod http;

pub use http::combined_cli;
pub use http::combined_cli::{Cli, Commands, HOST_ENV_VAR, handle_cli_command, resolve_host};
pub use http::common::ReaperApi;
