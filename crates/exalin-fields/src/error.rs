//! Errors raised by field arithmetic.

use thiserror::Error;

/// Errors that can occur when combining or inverting field elements.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The operands live in fields of different characteristic.
    #[error("cannot combine elements of characteristic {left} and {right}")]
    IncompatibleField {
        /// Characteristic of the left operand.
        left: u64,
        /// Characteristic of the right operand.
        right: u64,
    },

    /// The additive identity has no multiplicative inverse.
    #[error("division by zero")]
    DivisionByZero,

    /// A runtime modulus that does not define a field.
    #[error("modulus {0} is not prime")]
    NotPrime(u64),
}
