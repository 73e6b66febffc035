//! Errors raised by matrix and vector operations.

use exalin_fields::FieldError;
use thiserror::Error;

/// Errors that can occur in linear algebra operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operand shapes do not fit together.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The size the operation required.
        expected: usize,
        /// The size that was supplied.
        found: usize,
    },

    /// Field arithmetic failed (mixed characteristics or division by zero).
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A row or column index outside the matrix.
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows of the matrix.
        rows: usize,
        /// Number of columns of the matrix.
        cols: usize,
    },

    /// The operation is only defined for square matrices.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// An elementary operation that is not invertible: a scale by zero or
    /// a row added to itself.
    #[error("elementary operation on row {row} is not invertible")]
    DegenerateOperation {
        /// The row the operation would collapse.
        row: usize,
    },

    /// The matrix has no inverse.
    #[error("matrix is singular")]
    Singular,

    /// The linear system has no solution.
    #[error("linear system is inconsistent")]
    Inconsistent,

    /// Matrices and vectors need at least one entry.
    #[error("matrices and vectors must not be empty")]
    Empty,
}

/// Result type for linear algebra operations.
pub type Result<T> = std::result::Result<T, LinalgError>;
