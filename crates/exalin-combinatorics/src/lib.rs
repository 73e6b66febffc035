//! # exalin-combinatorics
//!
//! Pure sequence producers consumed by the linear algebra core.
//!
//! This crate provides:
//! - Validated permutations of `{0..n-1}` with composition, cycles and sign
//! - Enumeration of all n! permutations in Steinhaus-Johnson-Trotter order
//! - The Gray-code walk over all subsets of an n-element set, as a
//!   sequence of single-bit flips

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod gray_code;
pub mod permutation;

#[cfg(test)]
mod proptests;

pub use error::PermutationError;
pub use gray_code::{from_gray, to_gray, GrayCodeFlips};
pub use permutation::{Permutation, Permutations};
