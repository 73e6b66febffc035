//! Forward Gaussian elimination with an operation log.
//!
//! Elimination works on a private copy of the input. Every row transform
//! it performs is recorded as an [`ElementaryOperation`], so the reduction
//! can later be replayed on another matrix (to invert) or on a right-hand
//! side (to solve), or folded into an LU decomposition.
//!
//! # Algorithm
//!
//! Columns are scanned left to right while unreduced rows remain. In each
//! column the first non-zero entry at or below the current row becomes the
//! pivot; it is switched into place if needed and every non-zero entry
//! below it is cleared with an `Add` of factor `-pivot⁻¹ · entry`. A column
//! without a candidate is skipped and the current row stays put.

use std::fmt::Write as _;

use exalin_fields::Field;
use log::{debug, trace};

use crate::elementary::ElementaryOperation;
use crate::error::Result;
use crate::matrix::Matrix;

/// Position of a leading non-zero entry in the echelon matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pivot {
    /// Row of the pivot.
    pub row: usize,
    /// Column of the pivot.
    pub col: usize,
}

/// The outcome of forward elimination.
#[derive(Clone, Debug)]
pub struct GaussElimination<F> {
    source: Matrix<F>,
    echelon: Matrix<F>,
    operations: Vec<ElementaryOperation<F>>,
    pivots: Vec<Pivot>,
    switches: usize,
}

impl<F: Field> GaussElimination<F> {
    /// Reduces a copy of `matrix` to row-echelon form.
    ///
    /// # Errors
    ///
    /// Propagates a field error if a pivot cannot be inverted, which a
    /// lawful [`Field`] never produces.
    pub fn new(matrix: &Matrix<F>) -> Result<Self> {
        let (rows, cols) = matrix.shape();
        let mut echelon = matrix.clone();
        let mut operations = Vec::new();
        let mut pivots = Vec::new();
        let mut switches = 0;
        let mut current = 0;

        for col in 0..cols {
            if current == rows {
                break;
            }
            let Some(found) = (current..rows).find(|&r| echelon[(r, col)].is_nonzero()) else {
                continue;
            };

            if found != current {
                let op = ElementaryOperation::Switch {
                    first: current,
                    second: found,
                };
                trace!("{op}");
                echelon.apply_unchecked(&op);
                operations.push(op);
                switches += 1;
            }
            pivots.push(Pivot { row: current, col });

            let pivot_inv = echelon[(current, col)].inv()?;
            for target in current + 1..rows {
                let entry = &echelon[(target, col)];
                if entry.is_zero() {
                    continue;
                }
                let op = ElementaryOperation::Add {
                    source: current,
                    target,
                    factor: -(pivot_inv.clone() * entry.clone()),
                };
                trace!("{op}");
                echelon.apply_unchecked(&op);
                operations.push(op);
            }

            current += 1;
        }

        debug!(
            "eliminated {rows}x{cols} matrix: rank {}, {} operations, {switches} row switches",
            pivots.len(),
            operations.len()
        );

        Ok(Self {
            source: matrix.clone(),
            echelon,
            operations,
            pivots,
            switches,
        })
    }

    /// The matrix elimination started from.
    #[must_use]
    pub fn source(&self) -> &Matrix<F> {
        &self.source
    }

    /// The row-echelon matrix.
    #[must_use]
    pub fn echelon(&self) -> &Matrix<F> {
        &self.echelon
    }

    /// Recorded operations, in application order.
    #[must_use]
    pub fn operations(&self) -> &[ElementaryOperation<F>] {
        &self.operations
    }

    /// Pivots ordered by increasing row.
    #[must_use]
    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    /// Columns holding a pivot, increasing.
    #[must_use]
    pub fn pivot_columns(&self) -> Vec<usize> {
        self.pivots.iter().map(|p| p.col).collect()
    }

    /// Number of pivots.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Number of row switches performed.
    #[must_use]
    pub fn switches(&self) -> usize {
        self.switches
    }

    /// Returns true if the rank equals `min(rows, cols)`.
    #[must_use]
    pub fn is_full_rank(&self) -> bool {
        let (rows, cols) = self.source.shape();
        self.rank() == rows.min(cols)
    }

    /// Determinant of the source matrix.
    ///
    /// The product of the echelon diagonal, negated once per row switch;
    /// zero when the rank is deficient.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LinalgError::NotSquare`] for a rectangular source.
    pub fn determinant(&self) -> Result<F> {
        let n = self.source.ensure_square()?;
        let zero = self.echelon.zero().clone();
        if self.rank() < n {
            return Ok(zero);
        }
        let product = (0..n).fold(self.echelon.one().clone(), |acc, i| {
            acc * self.echelon[(i, i)].clone()
        });
        Ok(if self.switches % 2 == 0 {
            product
        } else {
            -product
        })
    }

    /// Folds the operation log into `P · A = L · U`.
    ///
    /// # Errors
    ///
    /// Only fails if the identity factors cannot be built, which never
    /// happens for a non-empty source.
    pub fn lu(&self) -> Result<LuDecomposition<F>> {
        let rows = self.source.num_rows();
        let one = self.echelon.one();
        let mut permutation = Matrix::identity(rows, one)?;
        let mut lower = Matrix::identity(rows, one)?;

        for op in &self.operations {
            match op {
                ElementaryOperation::Switch { first, second } => {
                    permutation.swap_rows(*first, *second);
                    // Multipliers already stored for the two rows move with them.
                    for col in 0..(*first).min(*second) {
                        let a = lower[(*first, col)].clone();
                        let b = lower[(*second, col)].clone();
                        lower.set(*first, col, b)?;
                        lower.set(*second, col, a)?;
                    }
                }
                ElementaryOperation::Add {
                    source,
                    target,
                    factor,
                } => lower.set(*target, *source, factor.negate())?,
                ElementaryOperation::Identity | ElementaryOperation::Scale { .. } => {}
            }
        }

        Ok(LuDecomposition {
            permutation,
            lower,
            upper: self.echelon.clone(),
        })
    }

    /// One line per recorded operation.
    #[must_use]
    pub fn computation(&self) -> String {
        render_operations(&self.operations)
    }

    /// The source matrix followed by each operation and the matrix it
    /// produced.
    #[must_use]
    pub fn detailed_computation(&self) -> String {
        render_replay(&self.source, &self.operations)
    }
}

/// One line per operation.
pub(crate) fn render_operations<F: Field>(operations: &[ElementaryOperation<F>]) -> String {
    let mut out = String::new();
    for op in operations {
        let _ = writeln!(out, "{op}");
    }
    out
}

/// Replays `operations` on a copy of `source`, dumping every intermediate
/// matrix.
pub(crate) fn render_replay<F: Field>(
    source: &Matrix<F>,
    operations: &[ElementaryOperation<F>],
) -> String {
    let mut out = String::new();
    let mut current = source.clone();
    let _ = write!(out, "{current}");
    for op in operations {
        current.apply_unchecked(op);
        let _ = write!(out, "\n{op}\n{current}");
    }
    out
}

/// `P · A = L · U` with `P` a permutation matrix, `L` unit lower
/// triangular and `U` the row-echelon form of `A`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LuDecomposition<F> {
    /// Row permutation, `rows × rows`.
    pub permutation: Matrix<F>,
    /// Unit lower triangular factor, `rows × rows`.
    pub lower: Matrix<F>,
    /// Row-echelon factor, same shape as `A`.
    pub upper: Matrix<F>,
}
