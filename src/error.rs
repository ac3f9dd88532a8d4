use std::fmt;

/// Precondition violations reported before the solver runs.
#[derive(Clone, Debug, PartialEq)]
pub enum DetectorError {
    /// The grid has no rows or no columns.
    EmptyGrid,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat buffer does not hold `width * height` cells.
    SizeMismatch { expected: usize, actual: usize },
    /// A detector parameter is non-finite or out of range.
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorError::EmptyGrid => write!(f, "invalid input: grid has no rows or no columns"),
            DetectorError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid input: row {row} has {found} columns, expected {expected}"
            ),
            DetectorError::SizeMismatch { expected, actual } => write!(
                f,
                "invalid input: buffer holds {actual} cells, expected {expected}"
            ),
            DetectorError::InvalidParameter { name, value } => {
                write!(f, "invalid input: parameter `{name}` = {value}")
            }
        }
    }
}

impl std::error::Error for DetectorError {}
