//! Core types for the reaperctl client.
//!
//! This crate holds everything that does not touch the network: the wire
//! record types, the enum-like flag value types, the error taxonomy, and the
//! client-side filtering and sorting applied to decoded listings. The HTTP
//! surface lives in the `reaperctl-http` crate.

pub mod error;
pub mod filter;
pub mod records;
pub mod types;

pub use error::ReaperError;
pub use filter::{ClusterViewFilter, RunFilter, ScheduleFilter, any_shared, sort_by_next_activation};
pub use records::{Cluster, RepairRun, RepairSchedule};
pub use types::{Parallelism, RunState, ScheduleState, ScheduleSortKey, parse_date};
