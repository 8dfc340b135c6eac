//! Error types for puzzle construction and GA operations.

use std::fmt;

/// Main error type for the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A puzzle was requested with zero rows or zero columns.
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// The distance table has no row for a piece identity that gap filling
    /// asked about. The table does not describe the puzzle being repaired.
    MissingDistanceRow {
        /// Identity that was looked up
        num: usize,
    },

    /// Two puzzles that must share a shape do not.
    DimensionMismatch {
        /// Shape of the first puzzle (rows, cols)
        expected: (usize, usize),
        /// Shape of the second puzzle (rows, cols)
        found: (usize, usize),
    },

    /// A flat cell or piece list does not fill the requested grid.
    PieceCountMismatch {
        /// `rows * cols` of the requested grid
        expected: usize,
        /// Number of cells or pieces supplied
        found: usize,
    },

    /// Gap filling ran out of unused pieces before the grid was complete.
    NoCandidates {
        /// Row of the cell left empty
        row: usize,
        /// Column of the cell left empty
        col: usize,
    },

    /// Configuration validation failed.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An operation that needs at least one individual received none.
    EmptyPopulation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Puzzle dimensions must be positive, got {rows}x{cols}")
            }
            Self::MissingDistanceRow { num } => {
                write!(f, "Distance table has no entry for piece {num}")
            }
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "Puzzle shape mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::PieceCountMismatch { expected, found } => {
                write!(f, "Expected {expected} pieces, found {found}")
            }
            Self::NoCandidates { row, col } => {
                write!(f, "No unused piece left to fill cell ({row}, {col})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyPopulation => write!(f, "Population must not be empty"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type alias for crate results.
pub type Result<T> = std::result::Result<T, Error>;

/// Create an invalid parameter error.
pub(crate) fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> Error {
    Error::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidDimensions { rows: 0, cols: 3 };
        assert_eq!(err.to_string(), "Puzzle dimensions must be positive, got 0x3");

        let err = Error::MissingDistanceRow { num: 7 };
        assert_eq!(err.to_string(), "Distance table has no entry for piece 7");

        let err = Error::DimensionMismatch {
            expected: (3, 3),
            found: (2, 4),
        };
        assert_eq!(err.to_string(), "Puzzle shape mismatch: expected 3x3, found 2x4");

        let err = Error::PieceCountMismatch {
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "Expected 4 pieces, found 3");
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("retain", &1.5, &"must be within [0, 1]");
        assert_eq!(
            err,
            Error::InvalidParameter {
                parameter: "retain",
                value: "1.5".into(),
                reason: "must be within [0, 1]".into(),
            }
        );
    }
}
