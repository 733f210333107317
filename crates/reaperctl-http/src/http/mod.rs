//! HTTP components of the reaperctl client.
//!
//! One module per resource of the Reaper API, each split into a `cli` half
//! (flag definitions, validation, printing) and a `client` half (request
//! building and response decoding):
//! - `cluster`, `repair`, `schedule` — the three resources
//! - `common` — shared request execution
//! - `combined_cli` — the top-level command surface
//! - `render` — terminal output helpers

pub mod cluster;
pub mod combined_cli;
pub mod common;
pub mod render;
pub mod repair;
pub mod schedule;
