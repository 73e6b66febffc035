//! Fixed-length vectors over a field.

use std::fmt;
use std::ops::Index;

use exalin_fields::Field;

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;

/// An ordered, non-empty sequence of elements of one field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<F> {
    entries: Vec<F>,
}

impl<F: Field> Vector<F> {
    /// Creates a vector from its entries.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] for no entries and
    /// [`LinalgError::Field`] if the entries come from different fields.
    pub fn new(entries: Vec<F>) -> Result<Self> {
        let first = entries.first().ok_or(LinalgError::Empty)?;
        for entry in &entries[1..] {
            first.ensure_compatible(entry)?;
        }
        Ok(Self { entries })
    }

    /// Creates a vector of `len` copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if `len` is zero.
    pub fn filled(len: usize, value: F) -> Result<Self> {
        if len == 0 {
            return Err(LinalgError::Empty);
        }
        Ok(Self {
            entries: vec![value; len],
        })
    }

    /// The zero vector of length `len` over the field of `like`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if `len` is zero.
    pub fn zeros(len: usize, like: &F) -> Result<Self> {
        Self::filled(len, like.zero())
    }

    /// The `index`-th standard basis vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if `len` is zero and
    /// [`LinalgError::DimensionMismatch`] if `index >= len`.
    pub fn unit(len: usize, index: usize, like: &F) -> Result<Self> {
        let mut v = Self::zeros(len, like)?;
        if index >= len {
            return Err(LinalgError::DimensionMismatch {
                expected: len,
                found: index + 1,
            });
        }
        v.entries[index] = like.one();
        Ok(v)
    }

    /// Wraps entries already known to be non-empty and from one field.
    pub(crate) fn from_entries(entries: Vec<F>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: vectors have at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&F> {
        self.entries.get(index)
    }

    /// The entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[F] {
        &self.entries
    }

    /// Consumes the vector, returning its entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<F> {
        self.entries
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.entries.iter()
    }

    /// The zero of this vector's field.
    #[must_use]
    pub fn field_zero(&self) -> F {
        self.entries[0].zero()
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(Field::is_zero)
    }

    fn ensure_same_shape(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }
        self.entries[0].ensure_compatible(&other.entries[0])?;
        Ok(())
    }

    /// Entry-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] for different lengths and
    /// [`LinalgError::Field`] for different fields.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other)?;
        Ok(Self::from_entries(
            self.entries
                .iter()
                .zip(&other.entries)
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        ))
    }

    /// Entry-wise difference.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::add`].
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other)?;
        Ok(Self::from_entries(
            self.entries
                .iter()
                .zip(&other.entries)
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        ))
    }

    /// Sum of pairwise products.
    ///
    /// # Errors
    ///
    /// Same as [`Vector::add`].
    pub fn dot(&self, other: &Self) -> Result<F> {
        self.ensure_same_shape(other)?;
        Ok(self
            .entries
            .iter()
            .zip(&other.entries)
            .fold(self.field_zero(), |acc, (a, b)| acc + a.clone() * b.clone()))
    }

    /// The additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_entries(self.entries.iter().map(Field::negate).collect())
    }

    /// Multiplies every entry by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Field`] if `scalar` is from another field.
    pub fn scale(&self, scalar: &F) -> Result<Self> {
        self.entries[0].ensure_compatible(scalar)?;
        Ok(Self::from_entries(
            self.entries
                .iter()
                .map(|a| scalar.clone() * a.clone())
                .collect(),
        ))
    }
}

/// Reports whether `vectors` are linearly independent.
///
/// The vectors become the columns of a matrix whose column rank is
/// compared to their number. Once the shapes check out, more vectors than
/// the common dimension are dependent without any elimination. The empty set is independent.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if the vectors differ in
/// length and [`LinalgError::Field`] if they come from different fields.
pub fn is_linearly_independent<F: Field>(vectors: &[Vector<F>]) -> Result<bool> {
    let Some(first) = vectors.first() else {
        return Ok(true);
    };
    let matrix = Matrix::from_columns(vectors)?;
    if vectors.len() > first.len() {
        return Ok(false);
    }
    Ok(matrix.rank()? == vectors.len())
}

impl<F> Index<usize> for Vector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.entries[index]
    }
}

impl<'a, F> IntoIterator for &'a Vector<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<F> From<Vector<F>> for Vec<F> {
    fn from(v: Vector<F>) -> Self {
        v.entries
    }
}

impl<F: fmt::Display> fmt::Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, ")")
    }
}
