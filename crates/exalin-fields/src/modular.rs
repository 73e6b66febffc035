//! Prime fields Z_p.
//!
//! Two representations are provided:
//! - [`ModInt<P>`] fixes the prime at compile time, so elements of
//!   different fields are different types and can never be mixed.
//! - [`ModularNumber`] carries its prime at runtime. Mixing primes is
//!   detected by the checked operations of [`Field`].

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::FieldError;
use crate::euclid::{is_prime, mod_inverse};
use crate::traits::Field;

/// An element of Z_P with a compile-time prime modulus.
///
/// All operations are performed modulo P. A composite `P` is rejected when
/// the type is first used.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModInt<const P: u64>(u64);

impl<const P: u64> ModInt<P> {
    const PRIME_MODULUS: () = assert!(is_prime(P), "ModInt modulus must be prime");

    /// Creates a new element, reducing `value` modulo P.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        let () = Self::PRIME_MODULUS;
        Self(value % P)
    }

    /// Creates an element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self::new(reduce_signed(value, P))
    }

    /// Returns the canonical representative in `[0, P)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }
}

impl<const P: u64> Field for ModInt<P> {
    fn characteristic(&self) -> u64 {
        P
    }

    fn zero(&self) -> Self {
        Self(0)
    }

    fn one(&self) -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn inv(&self) -> Result<Self, FieldError> {
        mod_inverse(self.0, P)
            .map(Self)
            .ok_or(FieldError::DivisionByZero)
    }
}

impl<const P: u64> Zero for ModInt<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for ModInt<P> {
    fn one() -> Self {
        Self::new(1)
    }
}

impl<const P: u64> fmt::Debug for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> Add for ModInt<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(add_mod(self.0, rhs.0, P))
    }
}

impl<const P: u64> Sub for ModInt<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(sub_mod(self.0, rhs.0, P))
    }
}

impl<const P: u64> Mul for ModInt<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(mul_mod(self.0, rhs.0, P))
    }
}

impl<const P: u64> Neg for ModInt<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(sub_mod(0, self.0, P))
    }
}

impl<const P: u64> From<u64> for ModInt<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for ModInt<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

/// An element of Z_p whose prime is chosen at runtime.
///
/// The arithmetic operators panic when the operands carry different
/// moduli; use [`Field::try_add`] and friends to get
/// [`FieldError::IncompatibleField`] instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModularNumber {
    value: u64,
    modulus: u64,
}

impl ModularNumber {
    /// Creates `value mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NotPrime`] if `modulus` is not prime.
    pub fn new(value: i64, modulus: u64) -> Result<Self, FieldError> {
        if !is_prime(modulus) {
            return Err(FieldError::NotPrime(modulus));
        }
        Ok(Self {
            value: reduce_signed(value, modulus),
            modulus,
        })
    }

    /// Returns the canonical representative in `[0, modulus)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus(self) -> u64 {
        self.modulus
    }

    fn with_value(self, value: u64) -> Self {
        Self {
            value,
            modulus: self.modulus,
        }
    }

    fn assert_same_field(self, rhs: Self) {
        assert_eq!(
            self.modulus, rhs.modulus,
            "operands belong to different prime fields"
        );
    }
}

impl Field for ModularNumber {
    fn characteristic(&self) -> u64 {
        self.modulus
    }

    fn zero(&self) -> Self {
        self.with_value(0)
    }

    fn one(&self) -> Self {
        self.with_value(1)
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn inv(&self) -> Result<Self, FieldError> {
        mod_inverse(self.value, self.modulus)
            .map(|inv| self.with_value(inv))
            .ok_or(FieldError::DivisionByZero)
    }
}

impl fmt::Debug for ModularNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl fmt::Display for ModularNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Add for ModularNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        self.with_value(add_mod(self.value, rhs.value, self.modulus))
    }
}

impl Sub for ModularNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        self.with_value(sub_mod(self.value, rhs.value, self.modulus))
    }
}

impl Mul for ModularNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_field(rhs);
        self.with_value(mul_mod(self.value, rhs.value, self.modulus))
    }
}

impl Neg for ModularNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.with_value(sub_mod(0, self.value, self.modulus))
    }
}

fn reduce_signed(value: i64, modulus: u64) -> u64 {
    // rem_euclid is always in [0, modulus), so the narrowing cast is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let reduced = i128::from(value).rem_euclid(i128::from(modulus)) as u64;
    reduced
}

fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    #[allow(clippy::cast_possible_truncation)]
    let sum = ((u128::from(a) + u128::from(b)) % u128::from(m)) as u64;
    sum
}

fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    // Use u128 to avoid overflow
    #[allow(clippy::cast_possible_truncation)]
    let product = ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64;
    product
}

/// Common prime moduli.
pub mod primes {
    /// 2^23 * 7 * 17 + 1 = 998244353
    pub const P998244353: u64 = 998_244_353;

    /// Large prime for general use: 2^61 - 1 (Mersenne prime)
    pub const MERSENNE_61: u64 = (1 << 61) - 1;
}

/// The field with two elements.
pub type GF2 = ModInt<2>;

/// Type alias for the common NTT prime field.
pub type GF998244353 = ModInt<{ primes::P998244353 }>;
