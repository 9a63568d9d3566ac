//! Error types for board contract violations.
//!
//! Rejected moves are not errors: the movement validator answers with a plain
//! `bool`. Everything here is a broken caller contract.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Column index outside `[0, columns)`
    OutOfRange { column: i8 },
    /// `lock` called with a row other than the column's landing row
    InvariantViolation { column: u8, expected: i8, actual: i8 },
    /// The column has no free row left to lock into
    ColumnFull { column: u8 },
}

impl BoardError {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardError::OutOfRange { .. } => "out_of_range",
            BoardError::InvariantViolation { .. } => "invariant_violation",
            BoardError::ColumnFull { .. } => "column_full",
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { column } => {
                write!(f, "column {} is outside the board", column)
            }
            BoardError::InvariantViolation {
                column,
                expected,
                actual,
            } => write!(
                f,
                "lock into column {} at row {} but its landing row is {}",
                column, actual, expected
            ),
            BoardError::ColumnFull { column } => write!(f, "column {} is full", column),
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_column() {
        let e = BoardError::InvariantViolation {
            column: 3,
            expected: 9,
            actual: 11,
        };
        assert_eq!(
            e.to_string(),
            "lock into column 3 at row 11 but its landing row is 9"
        );
        assert_eq!(e.as_str(), "invariant_violation");
        assert_eq!(
            BoardError::OutOfRange { column: -1 }.to_string(),
            "column -1 is outside the board"
        );
    }
}
