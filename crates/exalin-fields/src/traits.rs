//! The field element contract.
//!
//! Every scalar type used by the linear algebra crates implements [`Field`].
//! Dispatch is resolved at compile time through this bound; containers are
//! generic over a single element type and never inspect concrete types.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::FieldError;

/// A commutative field.
///
/// # Laws
///
/// - Addition and multiplication are associative and commutative
/// - `zero()` and `one()` are the additive and multiplicative identities
/// - Multiplication distributes over addition
/// - Every element has an additive inverse, every non-zero element a
///   multiplicative inverse
///
/// The identities are instance methods: a field whose modulus is only known
/// at runtime cannot produce them from the type alone, so `x.zero()` returns
/// the zero of the field `x` belongs to.
///
/// The operator traits are the unchecked fast path. They assume both
/// operands share a field, which containers establish once at construction.
/// The `try_*` methods check the characteristic first.
pub trait Field:
    Clone
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The characteristic: `p` for a prime field of order `p`, `0` for an
    /// infinite field.
    fn characteristic(&self) -> u64;

    /// The additive identity of this element's field.
    #[must_use]
    fn zero(&self) -> Self;

    /// The multiplicative identity of this element's field.
    #[must_use]
    fn one(&self) -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is not the additive identity.
    fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == self.one()
    }

    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if the element is zero.
    fn inv(&self) -> Result<Self, FieldError>;

    /// Returns the additive inverse.
    #[must_use]
    fn negate(&self) -> Self {
        -self.clone()
    }

    /// Returns true if both elements live in a field of the same characteristic.
    fn is_compatible(&self, other: &Self) -> bool {
        self.characteristic() == other.characteristic()
    }

    /// Fails unless both elements share a characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::IncompatibleField`] on mismatch.
    fn ensure_compatible(&self, other: &Self) -> Result<(), FieldError> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(FieldError::IncompatibleField {
                left: self.characteristic(),
                right: other.characteristic(),
            })
        }
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::IncompatibleField`] on characteristic mismatch.
    fn try_add(&self, other: &Self) -> Result<Self, FieldError> {
        self.ensure_compatible(other)?;
        Ok(self.clone() + other.clone())
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::IncompatibleField`] on characteristic mismatch.
    fn try_sub(&self, other: &Self) -> Result<Self, FieldError> {
        self.ensure_compatible(other)?;
        Ok(self.clone() - other.clone())
    }

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::IncompatibleField`] on characteristic mismatch.
    fn try_mul(&self, other: &Self) -> Result<Self, FieldError> {
        self.ensure_compatible(other)?;
        Ok(self.clone() * other.clone())
    }

    /// Checked division, computed as `other⁻¹ · self`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::IncompatibleField`] on characteristic mismatch
    /// and [`FieldError::DivisionByZero`] if `other` is zero.
    fn try_div(&self, other: &Self) -> Result<Self, FieldError> {
        self.ensure_compatible(other)?;
        Ok(other.inv()? * self.clone())
    }

    /// Computes self^n for non-negative n.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        let mut result = self.one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}
