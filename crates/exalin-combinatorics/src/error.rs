//! Errors raised when building or combining permutations.

use thiserror::Error;

/// Errors for [`crate::Permutation`] construction and composition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermutationError {
    /// The images are not a bijection on `{0..n-1}`.
    #[error("images {0:?} are not a permutation of 0..{}", .0.len())]
    NotAPermutation(Vec<usize>),

    /// Composition of permutations acting on sets of different size.
    #[error("cannot compose permutations of length {left} and {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}
