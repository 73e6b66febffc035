//! # Exalin
//!
//! Exact linear algebra over arbitrary fields.
//!
//! Every computation is carried out in the field the entries live in, so
//! ranks, determinants, inverses and solutions are exact: no rounding and
//! no tolerance thresholds.
//!
//! ## Features
//!
//! - **Fields**: prime fields with a compile-time or runtime modulus, and
//!   arbitrary precision rationals
//! - **Elimination with a log**: every row operation is recorded and can be
//!   replayed, which drives inversion, solving and LU decomposition
//! - **Solving**: null-space bases and full affine solution spaces, with
//!   inconsistent systems reported as errors
//! - **Permanents**: Ryser's formula over a Gray-code walk
//!
//! ## Quick Start
//!
//! ```rust
//! use exalin::prelude::*;
//!
//! let q = Rational::from_integer;
//! let m = Matrix::from_rows(vec![vec![q(1), q(2)], vec![q(3), q(4)]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), q(-2));
//!
//! let b = Vector::new(vec![q(5), q(11)]).unwrap();
//! let x = m.solve(&b).unwrap();
//! assert_eq!(x.particular(), &Vector::new(vec![q(1), q(2)]).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exalin_combinatorics as combinatorics;
pub use exalin_fields as fields;
pub use exalin_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exalin_combinatorics::{GrayCodeFlips, Permutation, Permutations};
    pub use exalin_fields::{Field, FieldError, ModInt, ModularNumber, Rational};
    pub use exalin_linalg::{
        AffineSolution, EchelonForm, ElementaryOperation, GaussElimination, LinalgError,
        LuDecomposition, Matrix, PermanentAlgorithm, Vector,
    };
}
