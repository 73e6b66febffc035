//! # exalin-linalg
//!
//! Exact dense linear algebra over any [`Field`](exalin_fields::Field).
//!
//! This crate provides:
//! - Vectors and row-major dense matrices with validated construction
//! - Elementary row operations as a tagged enum with inverses
//! - Gaussian elimination that records every operation it applies
//! - LU decomposition, reduced row-echelon form and matrix inversion
//! - Null spaces and affine solution spaces of linear systems
//! - Permanents via Ryser's formula over a Gray-code walk
//!
//! ## Operation logs
//!
//! Elimination never mutates the caller's matrix. It reduces a private
//! copy and keeps the list of operations it applied, so the same
//! reduction can be replayed on the identity (to invert) or on a
//! right-hand side (to solve) without eliminating again.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod echelon;
pub mod elementary;
pub mod error;
pub mod gauss;
pub mod matrix;
pub mod permanent;
pub mod solve;
pub mod vector;

pub use echelon::EchelonForm;
pub use elementary::ElementaryOperation;
pub use error::{LinalgError, Result};
pub use gauss::{GaussElimination, LuDecomposition, Pivot};
pub use matrix::Matrix;
pub use permanent::{permanent_naive, permanent_ryser, PermanentAlgorithm};
pub use solve::{solve, solve_homogeneous, AffineSolution};
pub use vector::{is_linearly_independent, Vector};

#[cfg(test)]
mod proptests;
