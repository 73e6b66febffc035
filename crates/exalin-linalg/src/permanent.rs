//! Matrix permanents.
//!
//! The permanent of an `n × n` matrix is `Σ_π Π_i A[i, π(i)]` over all
//! permutations π. Two algorithms are provided: the direct sum over the n!
//! permutations, and Ryser's inclusion-exclusion formula
//!
//! ```text
//! perm(A) = Σ_{S ⊆ cols} (-1)^(n - |S|) Π_i Σ_{j ∈ S} A[i, j]
//! ```
//!
//! evaluated along a Gray-code walk so each subset differs from the last
//! by one column and the row sums update in O(n).

use exalin_combinatorics::{GrayCodeFlips, Permutations};
use exalin_fields::Field;
use log::debug;

use crate::error::Result;
use crate::matrix::Matrix;

/// Algorithm used by [`Matrix::permanent_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PermanentAlgorithm {
    /// Sum over all n! permutations, O(n · n!).
    Naive,
    /// Ryser's formula over a Gray-code walk, O(n · 2ⁿ).
    #[default]
    Ryser,
}

/// Sums the products `Π_i A[i, π(i)]` over every permutation π.
///
/// # Errors
///
/// Returns [`crate::LinalgError::NotSquare`] for a rectangular matrix.
pub fn permanent_naive<F: Field>(matrix: &Matrix<F>) -> Result<F> {
    let n = matrix.ensure_square()?;
    debug!("naive permanent of {n}x{n} matrix");

    let zero = matrix.zero();
    let mut total = zero.clone();
    for permutation in Permutations::new(n) {
        let mut product = matrix.one().clone();
        for (row, &col) in permutation.images().iter().enumerate() {
            let entry = &matrix[(row, col)];
            if entry.is_zero() {
                product = zero.clone();
                break;
            }
            product = product * entry.clone();
        }
        total = total + product;
    }
    Ok(total)
}

/// Ryser's formula with incremental row sums.
///
/// # Errors
///
/// Returns [`crate::LinalgError::NotSquare`] for a rectangular matrix.
///
/// # Panics
///
/// Panics for `n >= 64`, far beyond what the 2ⁿ walk can finish.
pub fn permanent_ryser<F: Field>(matrix: &Matrix<F>) -> Result<F> {
    let n = matrix.ensure_square()?;
    debug!("Ryser permanent of {n}x{n} matrix");

    let bits = u32::try_from(n).unwrap_or(u32::MAX);
    let mut row_sums = vec![matrix.zero().clone(); n];
    let mut in_subset = vec![false; n];
    let mut subset_size = 0;
    let mut total = matrix.zero().clone();

    for col in GrayCodeFlips::new(bits) {
        if in_subset[col] {
            for (row, sum) in row_sums.iter_mut().enumerate() {
                *sum = sum.clone() - matrix[(row, col)].clone();
            }
            subset_size -= 1;
        } else {
            for (row, sum) in row_sums.iter_mut().enumerate() {
                *sum = sum.clone() + matrix[(row, col)].clone();
            }
            subset_size += 1;
        }
        in_subset[col] = !in_subset[col];

        let Some(product) = row_product(&row_sums, matrix.one()) else {
            continue;
        };
        total = if (n - subset_size) % 2 == 0 {
            total + product
        } else {
            total - product
        };
    }
    Ok(total)
}

/// Product of the row sums, or `None` as soon as one of them is zero.
fn row_product<F: Field>(row_sums: &[F], one: &F) -> Option<F> {
    let mut product = one.clone();
    for sum in row_sums {
        if sum.is_zero() {
            return None;
        }
        product = product * sum.clone();
    }
    Some(product)
}
