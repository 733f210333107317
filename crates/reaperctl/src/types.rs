//! Enum-like value types shared between flag parsing and the wire format.
//!
//! Each type parses case-insensitively from user input and serializes to the
//! canonical uppercase wire form, both in query strings and in JSON.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a repair run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunState {
    NotStarted,
    Running,
    Error,
    Done,
    Paused,
    Aborted,
    Deleted,
}

impl RunState {
    pub const ALL: [RunState; 7] = [
        RunState::NotStarted,
        RunState::Running,
        RunState::Error,
        RunState::Done,
        RunState::Paused,
        RunState::Aborted,
        RunState::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::NotStarted => "NOT_STARTED",
            RunState::Running => "RUNNING",
            RunState::Error => "ERROR",
            RunState::Done => "DONE",
            RunState::Paused => "PAUSED",
            RunState::Aborted => "ABORTED",
            RunState::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for state in RunState::ALL {
            if s.eq_ignore_ascii_case(state.as_str()) {
                return Ok(state);
            }
        }
        Err(format!("invalid run state {s:?}"))
    }
}

/// Lifecycle state of a repair schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleState {
    Active,
    Paused,
    Deleted,
}

impl ScheduleState {
    pub const ALL: [ScheduleState; 3] = [
        ScheduleState::Active,
        ScheduleState::Paused,
        ScheduleState::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleState::Active => "ACTIVE",
            ScheduleState::Paused => "PAUSED",
            ScheduleState::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for ScheduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for state in ScheduleState::ALL {
            if s.eq_ignore_ascii_case(state.as_str()) {
                return Ok(state);
            }
        }
        Err(format!("invalid schedule state {s:?}"))
    }
}

/// Concurrency strategy the service uses when executing a repair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Parallelism {
    #[default]
    Sequential,
    Parallel,
    DatacenterAware,
}

impl Parallelism {
    pub const ALL: [Parallelism; 3] = [
        Parallelism::Sequential,
        Parallelism::Parallel,
        Parallelism::DatacenterAware,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parallelism::Sequential => "SEQUENTIAL",
            Parallelism::Parallel => "PARALLEL",
            Parallelism::DatacenterAware => "DATACENTER_AWARE",
        }
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parallelism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for par in Parallelism::ALL {
            if s.eq_ignore_ascii_case(par.as_str()) {
                return Ok(par);
            }
        }
        Err(format!("invalid parallelism {s:?}"))
    }
}

/// Sort key for schedule listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSortKey {
    NextActivation,
}

impl ScheduleSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleSortKey::NextActivation => "next-activation",
        }
    }
}

impl fmt::Display for ScheduleSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("next-activation") {
            Ok(ScheduleSortKey::NextActivation)
        } else {
            Err(format!("invalid sort key {s:?}"))
        }
    }
}

/// Parses a calendar date flag value, accepting exactly `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10 && bytes[4] == b'-' && bytes[7] == b'-';
    if !shape_ok {
        return Err(format!("invalid date {s:?}, expected YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}
