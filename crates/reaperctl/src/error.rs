//! Error types for client operations.

use std::fmt;

/// Main error type for reaperctl operations.
///
/// Every variant except `Config` carries the name of the operation that
/// failed. `Rejected` keeps the full response body verbatim so the service's
/// own message reaches the user unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum ReaperError {
    /// Missing host, missing required flag, invalid flag value. Raised
    /// before any network call.
    Config {
        message: String,
    },
    /// Connection, DNS or timeout failure, or a failure reading the body.
    Transport {
        op: String,
        reason: String,
    },
    /// The service answered with an unexpected HTTP status.
    Rejected {
        op: String,
        status: u16,
        body: String,
    },
    /// A success response carried a body that does not decode.
    Decode {
        op: String,
        reason: String,
    },
}

impl fmt::Display for ReaperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaperError::Config { message } => write!(f, "{message}"),
            ReaperError::Transport { op, reason } => {
                write!(f, "Transport error in {op}: {reason}")
            }
            ReaperError::Rejected { op, status, body } => {
                if body.is_empty() {
                    write!(f, "Server rejected {op} (HTTP {status})")
                } else {
                    write!(f, "Server rejected {op} (HTTP {status}): {body}")
                }
            }
            ReaperError::Decode { op, reason } => {
                write!(f, "Invalid response in {op}: {reason}")
            }
        }
    }
}

impl std::error::Error for ReaperError {}

impl ReaperError {
    pub fn config(message: impl Into<String>) -> Self {
        ReaperError::Config {
            message: message.into(),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, ReaperError::Config { .. })
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ReaperError::Rejected { .. })
    }

    /// Operation that triggered the error, when one exists.
    pub fn op(&self) -> Option<&str> {
        match self {
            ReaperError::Config { .. } => None,
            ReaperError::Transport { op, .. }
            | ReaperError::Rejected { op, .. }
            | ReaperError::Decode { op, .. } => Some(op),
        }
    }

    pub fn from_transport_error(e: impl fmt::Display, op: &str) -> Self {
        ReaperError::Transport {
            op: op.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_decode_error(e: impl fmt::Display, op: &str) -> Self {
        ReaperError::Decode {
            op: op.to_string(),
            reason: e.to_string(),
        }
    }
}
