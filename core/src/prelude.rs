use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the two matrix slots a session holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::A => write!(f, "A"),
            Slot::B => write!(f, "B"),
        }
    }
}

/// Common error type for engine operations.
///
/// Every variant is recoverable at the menu level; nothing here aborts
/// the process, and the engine never retries on its own.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("malformed row: {0}")]
    MalformedRow(String),
    #[error("matrix {0} has not been input")]
    UnsetMatrix(Slot),
    #[error("cannot multiply a {0}x{1} matrix by a {2}x{3} matrix")]
    DimensionMismatch(usize, usize, usize, usize),
}

pub type EngineResult<T> = Result<T, EngineError>;
