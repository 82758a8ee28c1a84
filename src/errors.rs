//! Error types
//!
//! Trace generation itself never fails. Errors come from the two places
//! around it: navigating or filling a [`TraceHistory`], and turning
//! command-line input into an array to sort.
//!
//! [`TraceHistory`]: crate::snapshot::TraceHistory

use thiserror::Error;

/// Errors raised by the playback history
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Recording another event would exceed the snapshot memory limit
    #[error("snapshot memory limit exceeded: {current} + {requested} > {limit}")]
    SnapshotLimitExceeded {
        current: usize,
        requested: usize,
        limit: usize,
    },

    #[error("history is empty")]
    Empty,

    #[error("already at the first step")]
    AtStart,

    #[error("no more steps (trace finished)")]
    AtEnd,

    #[error("step {index} is out of range (history has {len} steps)")]
    OutOfRange { index: usize, len: usize },
}

/// Errors raised while building the input array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("n must be > 0")]
    EmptyCount,

    #[error("invalid value '{0}' (expected a non-negative integer)")]
    InvalidValue(String),

    #[error("n = {0} is too large for values in 1..=n*4")]
    CountTooLarge(usize),
}

pub type HistoryResult<T> = Result<T, HistoryError>;
