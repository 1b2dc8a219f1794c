//! Error types for collider construction, record streams and collision tests.

use thiserror::Error;

/// Errors raised while reading a segment definition from a record stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StreamError {
    #[error("record stream ended while reading {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("invalid token {token:?}, expected {expected}")]
    InvalidToken {
        token: String,
        expected: &'static str,
    },

    #[error("segment count cannot be negative: {0}")]
    NegativeCount(i64),
}

/// Errors raised by the segment collider store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColliderError {
    #[error("segment collider is full ({capacity} segments)")]
    CapacityExceeded { capacity: usize },

    #[error("cannot add {requested} segments, only {remaining} slots remain")]
    NotEnoughCapacity { requested: usize, remaining: usize },

    #[error("failed to allocate segment storage")]
    Allocation,

    #[error("failed to read segment definition: {0}")]
    Stream(#[from] StreamError),
}

/// Errors raised at the detect-then-resolve boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    #[error("collision test not applicable: expected {expected} collider, found {found}")]
    NotApplicable {
        expected: &'static str,
        found: &'static str,
    },

    #[error("object has no {0} facet")]
    MissingFacet(&'static str),
}
