//! Recoverable construction failures.

use std::fmt;

use crate::types::Dimension;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolkaError {
    /// The box is empty: after integer tightening, some dimension has `lower > upper`.
    InfeasibleBox { dim: usize },
    /// The number of intervals does not match the dimension descriptor.
    DimensionMismatch { expected: usize, found: usize },
    /// The dimension descriptor exceeds the configured limit.
    TooManyDimensions { max: usize, dim: Dimension },
}

impl fmt::Display for PolkaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolkaError::InfeasibleBox { dim } => {
                write!(f, "infeasible box: empty interval for dimension {}", dim)
            }
            PolkaError::DimensionMismatch { expected, found } => {
                write!(f, "expected {} intervals, found {}", expected, found)
            }
            PolkaError::TooManyDimensions { max, dim } => {
                write!(f, "dimension {} exceeds the limit of {}", dim, max)
            }
        }
    }
}

impl std::error::Error for PolkaError {}
