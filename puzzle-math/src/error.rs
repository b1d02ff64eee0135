//! Error types for the numeric library

use thiserror::Error;

/// Error type for precondition violations on numeric inputs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Factoring zero is undefined: every prime divides it
    #[error("cannot factor 0: every prime divides it")]
    FactorOfZero,
}

/// Error type for graph queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The target node cannot be reached from the start node
    #[error("no path from {0} to {1}")]
    NoPath(String, String),
}

/// Error type for parsing interval strings such as `"7"` or `"3-9"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalParseError {
    /// The string is neither a single integer nor a `start-end` pair
    #[error("expected a number or a 'start-end' range, got {0:?}")]
    InvalidFormat(String),
    /// One of the interval bounds is not a valid integer
    #[error("invalid interval bound: {0}")]
    InvalidBound(#[from] std::num::ParseIntError),
}
