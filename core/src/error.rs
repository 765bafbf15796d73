use std::time::Duration;
use thiserror::Error;

use crate::graph::LocationId;

#[derive(Debug, Error, PartialEq)]
pub enum PathfindingError {
    #[error("location '{0}' not found in store graph")]
    NodeNotFound(LocationId),
    #[error("invalid weight {weight} for path {from} - {to}: weight must be finite")]
    InvalidWeight {
        from: LocationId,
        to: LocationId,
        weight: f64,
    },
    #[error("path from '{0}' to itself is not allowed")]
    SelfLoop(LocationId),
    #[error("negative traversal cost {weight} on {from} -> {to}")]
    NegativeWeight {
        from: LocationId,
        to: LocationId,
        weight: f64,
    },
    #[error("boost factor must be finite and >= 0, got {0}")]
    InvalidBoost(f64),
    #[error("search deadline exceeded after {elapsed:?}")]
    DeadlineExceeded { elapsed: Duration },
}

pub type Result<T> = std::result::Result<T, PathfindingError>;
