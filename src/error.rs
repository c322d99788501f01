use std::{
    error::Error,
    fmt::{self, Display},
};

use rand_distr::uniform::Error as UniformError;

/// The result type used across the numeric primitives.
pub type Result<T> = std::result::Result<T, NumErr>;

/// The numeric primitives' error type.
#[derive(Debug, Clone, PartialEq)]
pub enum NumErr {
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
    Domain {
        index: usize,
        value: f64,
    },
    RaggedMatrix {
        row: usize,
        got: usize,
        expected: usize,
    },
    EmptyMatrix,
    InvalidDistribution(String),
    InvalidEpsilon(f64),
}

impl From<UniformError> for NumErr {
    fn from(value: UniformError) -> Self {
        Self::InvalidDistribution(value.to_string())
    }
}

impl Display for NumErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumErr::DimensionMismatch { left, right } => write!(
                f,
                "cannot multiply a {}x{} matrix by a {}x{} matrix",
                left.0, left.1, right.0, right.1
            ),
            NumErr::LengthMismatch { expected, actual } => write!(
                f,
                "length mismatch between expected and actual outputs, got {expected} and {actual}"
            ),
            NumErr::Domain { index, value } => write!(
                f,
                "value {value} at index {index} is outside the open interval (0, 1)"
            ),
            NumErr::RaggedMatrix { row, got, expected } => write!(
                f,
                "row {row} has {got} columns, expected {expected}"
            ),
            NumErr::EmptyMatrix => f.write_str("a matrix needs at least one row and one column"),
            NumErr::InvalidDistribution(e) => write!(f, "invalid distribution: {e}"),
            NumErr::InvalidEpsilon(eps) => {
                write!(f, "clamp epsilon must lie in (0, 0.5), got {eps}")
            }
        }
    }
}

impl Error for NumErr {}
