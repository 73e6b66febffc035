//! Elementary row operations.
//!
//! Every operation is invertible and acts on whole rows, so applying an
//! operation to a matrix is the same as multiplying it from the left by
//! the operation's [matrix form](ElementaryOperation::as_matrix).

use std::fmt;

use exalin_fields::Field;

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// One of the elementary row transforms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementaryOperation<F> {
    /// Leaves every row unchanged.
    Identity,
    /// `row ← factor · row`.
    Scale {
        /// The scaled row.
        row: usize,
        /// The non-zero scale factor.
        factor: F,
    },
    /// `target ← target + factor · source`.
    Add {
        /// The row that is read.
        source: usize,
        /// The row that is modified.
        target: usize,
        /// Multiple of `source` added to `target`.
        factor: F,
    },
    /// Exchanges two rows.
    Switch {
        /// One of the exchanged rows.
        first: usize,
        /// The other exchanged row.
        second: usize,
    },
}

impl<F: Field> ElementaryOperation<F> {
    /// Checks that the operation is invertible.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DegenerateOperation`] for a scale by zero or
    /// an `Add` whose source and target coincide.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Scale { row, factor } if factor.is_zero() => {
                Err(LinalgError::DegenerateOperation { row: *row })
            }
            Self::Add { source, target, .. } if source == target => {
                Err(LinalgError::DegenerateOperation { row: *target })
            }
            _ => Ok(()),
        }
    }

    /// The operation that undoes this one.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DegenerateOperation`] if the operation is not
    /// invertible.
    pub fn inverse(&self) -> Result<Self> {
        self.validate()?;
        Ok(match self {
            Self::Identity => Self::Identity,
            Self::Scale { row, factor } => Self::Scale {
                row: *row,
                factor: factor.inv()?,
            },
            Self::Add {
                source,
                target,
                factor,
            } => Self::Add {
                source: *source,
                target: *target,
                factor: factor.negate(),
            },
            Self::Switch { first, second } => Self::Switch {
                first: *first,
                second: *second,
            },
        })
    }

    /// The `size × size` matrix whose left multiplication performs this
    /// operation, built from the field's `unit`.
    ///
    /// # Errors
    ///
    /// Fails if `size` is zero, if a row index does not fit, if the
    /// operation is degenerate, or if the factor and `unit` come from
    /// different fields.
    pub fn as_matrix(&self, size: usize, unit: &F) -> Result<Matrix<F>> {
        let mut matrix = Matrix::identity(size, unit)?;
        matrix.apply(self)?;
        Ok(matrix)
    }

    /// Determinant of the matrix form.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DegenerateOperation`] if the operation is not
    /// invertible.
    pub fn determinant(&self, unit: &F) -> Result<F> {
        self.validate()?;
        Ok(match self {
            Self::Scale { factor, .. } => factor.clone(),
            Self::Switch { first, second } if first != second => unit.one().negate(),
            Self::Identity | Self::Add { .. } | Self::Switch { .. } => unit.one(),
        })
    }

    /// The largest row index the operation touches.
    #[must_use]
    pub fn max_row(&self) -> Option<usize> {
        match self {
            Self::Identity => None,
            Self::Scale { row, .. } => Some(*row),
            Self::Add { source, target, .. } => Some(*source.max(target)),
            Self::Switch { first, second } => Some(*first.max(second)),
        }
    }

    /// The scalar carried by the operation, if any.
    #[must_use]
    pub fn factor(&self) -> Option<&F> {
        match self {
            Self::Scale { factor, .. } | Self::Add { factor, .. } => Some(factor),
            Self::Identity | Self::Switch { .. } => None,
        }
    }

    /// Applies the operation to a column of values, one per row.
    ///
    /// Indices must already be validated against `values.len()`.
    pub(crate) fn apply_to_slice(&self, values: &mut [F]) {
        match self {
            Self::Identity => {}
            Self::Scale { row, factor } => {
                values[*row] = factor.clone() * values[*row].clone();
            }
            Self::Add {
                source,
                target,
                factor,
            } => {
                let addend = factor.clone() * values[*source].clone();
                values[*target] = values[*target].clone() + addend;
            }
            Self::Switch { first, second } => values.swap(*first, *second),
        }
    }
}

impl<F: fmt::Display> fmt::Display for ElementaryOperation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "Identity"),
            Self::Scale { row, factor } => write!(f, "Row({row}) -> {factor} * Row({row})"),
            Self::Add {
                source,
                target,
                factor,
            } => write!(f, "Row({target}) -> Row({target}) + {factor} * Row({source})"),
            Self::Switch { first, second } => write!(f, "Row({first}) <-> Row({second})"),
        }
    }
}
