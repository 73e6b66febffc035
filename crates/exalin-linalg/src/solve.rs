//! Linear systems `A · x = b` and null spaces.
//!
//! Both solvers run forward elimination once and back-substitute against
//! the echelon matrix. The inhomogeneous solver replays the elimination log
//! on `b` first and rejects the system if a row without a pivot ends up
//! with a non-zero right-hand side.

use exalin_fields::Field;
use log::debug;

use crate::error::{LinalgError, Result};
use crate::gauss::GaussElimination;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// The affine solution space `particular + span(kernel)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffineSolution<F> {
    particular: Vector<F>,
    kernel: Vec<Vector<F>>,
}

impl<F: Field> AffineSolution<F> {
    /// The solution with every free variable set to zero.
    #[must_use]
    pub fn particular(&self) -> &Vector<F> {
        &self.particular
    }

    /// A basis of the homogeneous solutions.
    #[must_use]
    pub fn kernel(&self) -> &[Vector<F>] {
        &self.kernel
    }

    /// Dimension of the solution space.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.kernel.len()
    }

    /// Returns true if the particular solution is the only one.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.kernel.is_empty()
    }

    /// The particular solution followed by `particular + v` for each
    /// kernel basis vector `v`.
    #[must_use]
    pub fn solutions(&self) -> Vec<Vector<F>> {
        std::iter::once(self.particular.clone())
            .chain(self.kernel.iter().map(|v| {
                Vector::from_entries(
                    self.particular
                        .iter()
                        .zip(v)
                        .map(|(p, k)| p.clone() + k.clone())
                        .collect(),
                )
            }))
            .collect()
    }

    /// Evaluates `particular + Σ coefficients[i] · kernel[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless there is one
    /// coefficient per kernel vector, and [`LinalgError::Field`] for
    /// coefficients from another field.
    pub fn point(&self, coefficients: &[F]) -> Result<Vector<F>> {
        if coefficients.len() != self.kernel.len() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.kernel.len(),
                found: coefficients.len(),
            });
        }
        let mut point = self.particular.clone();
        for (c, v) in coefficients.iter().zip(&self.kernel) {
            point = point.add(&v.scale(c)?)?;
        }
        Ok(point)
    }
}

/// A basis of `{x : A · x = 0}`, one vector per non-pivot column.
///
/// An empty result means the kernel is trivial.
///
/// # Errors
///
/// Propagates a field error if a pivot cannot be inverted.
pub fn solve_homogeneous<F: Field>(matrix: &Matrix<F>) -> Result<Vec<Vector<F>>> {
    let gauss = GaussElimination::new(matrix)?;
    kernel_basis(&gauss)
}

/// Every solution of `A · x = b`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] unless `b` has one entry per
/// row, [`LinalgError::Field`] if `b` is over another field, and
/// [`LinalgError::Inconsistent`] if the system has no solution.
pub fn solve<F: Field>(matrix: &Matrix<F>, b: &Vector<F>) -> Result<AffineSolution<F>> {
    let (rows, cols) = matrix.shape();
    if b.len() != rows {
        return Err(LinalgError::DimensionMismatch {
            expected: rows,
            found: b.len(),
        });
    }
    matrix.zero().ensure_compatible(&b[0])?;

    let gauss = GaussElimination::new(matrix)?;
    let mut rhs = b.as_slice().to_vec();
    for op in gauss.operations() {
        op.apply_to_slice(&mut rhs);
    }

    if let Some(row) = (gauss.rank()..rows).find(|&r| rhs[r].is_nonzero()) {
        debug!("system is inconsistent: row {row} reduces to 0 = {}", rhs[row]);
        return Err(LinalgError::Inconsistent);
    }

    let mut x = vec![matrix.zero().clone(); cols];
    back_substitute(&gauss, &mut x, Some(&rhs))?;
    let kernel = kernel_basis(&gauss)?;
    debug!("solution space of dimension {}", kernel.len());

    Ok(AffineSolution {
        particular: Vector::from_entries(x),
        kernel,
    })
}

fn kernel_basis<F: Field>(gauss: &GaussElimination<F>) -> Result<Vec<Vector<F>>> {
    let echelon = gauss.echelon();
    let cols = echelon.num_cols();
    let mut is_pivot = vec![false; cols];
    for pivot in gauss.pivots() {
        is_pivot[pivot.col] = true;
    }

    let mut basis = Vec::with_capacity(cols - gauss.rank());
    for free in (0..cols).filter(|&c| !is_pivot[c]) {
        let mut x = vec![echelon.zero().clone(); cols];
        x[free] = echelon.one().clone();
        back_substitute(gauss, &mut x, None)?;
        basis.push(Vector::from_entries(x));
    }
    Ok(basis)
}

/// Solves for the pivot variables from the last pivot row up, with the
/// free variables already set in `x`.
fn back_substitute<F: Field>(
    gauss: &GaussElimination<F>,
    x: &mut [F],
    rhs: Option<&[F]>,
) -> Result<()> {
    let echelon = gauss.echelon();
    for pivot in gauss.pivots().iter().rev() {
        let mut acc = rhs.map_or_else(|| echelon.zero().clone(), |b| b[pivot.row].clone());
        for (j, known) in x.iter().enumerate().skip(pivot.col + 1) {
            let coefficient = &echelon[(pivot.row, j)];
            if coefficient.is_nonzero() && known.is_nonzero() {
                acc = acc - coefficient.clone() * known.clone();
            }
        }
        x[pivot.col] = echelon[(pivot.row, pivot.col)].inv()? * acc;
    }
    Ok(())
}
