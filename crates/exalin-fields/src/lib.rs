//! # exalin-fields
//!
//! Field elements for exact linear algebra.
//!
//! This crate provides:
//! - The [`Field`] trait every scalar type implements
//! - Prime fields with a compile-time modulus (`ModInt<P>`)
//! - Prime fields with a modulus chosen at runtime (`ModularNumber`)
//! - Arbitrary precision rationals (`Rational`), the characteristic-zero field
//!
//! ## Characteristic
//!
//! Every element reports the characteristic of the field it lives in:
//! `p` for the prime field of order `p`, `0` for the rationals. Elements
//! of different characteristic never combine; the checked operations on
//! [`Field`] report this as [`FieldError::IncompatibleField`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod euclid;
pub mod modular;
pub mod rational;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::FieldError;
pub use euclid::{extended_gcd, is_prime, mod_inverse};
pub use modular::{ModInt, ModularNumber};
pub use rational::Rational;
pub use traits::Field;
