//! Dense matrices over a field.
//!
//! Entries are stored in row-major order. Every constructor validates that
//! all cells share one field, so the arithmetic below can use the
//! unchecked operators of [`Field`].

use std::fmt;
use std::ops::Index;

use exalin_fields::Field;
use log::debug;

use crate::echelon::EchelonForm;
use crate::elementary::ElementaryOperation;
use crate::error::{LinalgError, Result};
use crate::gauss::{GaussElimination, LuDecomposition};
use crate::permanent::{permanent_naive, permanent_ryser, PermanentAlgorithm};
use crate::solve::{self, AffineSolution};
use crate::vector::Vector;

/// Dense matrix stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<F> {
    /// Matrix entries in row-major order.
    data: Vec<F>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
    /// The additive identity of the entries' field.
    zero: F,
    /// The multiplicative identity of the entries' field.
    one: F,
}

impl<F: Field> Matrix<F> {
    /// Creates a `num_rows × num_cols` matrix with every entry `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if either dimension is zero.
    pub fn filled(num_rows: usize, num_cols: usize, value: F) -> Result<Self> {
        if num_rows == 0 || num_cols == 0 {
            return Err(LinalgError::Empty);
        }
        Ok(Self {
            zero: value.zero(),
            one: value.one(),
            data: vec![value; num_rows * num_cols],
            num_rows,
            num_cols,
        })
    }

    /// Creates a zero matrix over the field of `like`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if either dimension is zero.
    pub fn zeros(num_rows: usize, num_cols: usize, like: &F) -> Result<Self> {
        Self::filled(num_rows, num_cols, like.zero())
    }

    /// Creates the `n × n` identity over the field of `like`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] if `n` is zero.
    pub fn identity(n: usize, like: &F) -> Result<Self> {
        let mut m = Self::zeros(n, n, like)?;
        for i in 0..n {
            m.data[i * n + i] = like.one();
        }
        Ok(m)
    }

    /// Creates a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] for no rows or empty rows,
    /// [`LinalgError::DimensionMismatch`] if the rows differ in length, and
    /// [`LinalgError::Field`] if entries come from different fields.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(LinalgError::Empty);
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != num_cols) {
            return Err(LinalgError::DimensionMismatch {
                expected: num_cols,
                found: bad.len(),
            });
        }
        let data: Vec<F> = rows.into_iter().flatten().collect();
        Self::from_data(data, num_rows, num_cols)
    }

    /// Creates a matrix whose columns are `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Empty`] for no columns,
    /// [`LinalgError::DimensionMismatch`] if the columns differ in length,
    /// and [`LinalgError::Field`] if they come from different fields.
    pub fn from_columns(columns: &[Vector<F>]) -> Result<Self> {
        let first = columns.first().ok_or(LinalgError::Empty)?;
        let num_rows = first.len();
        let num_cols = columns.len();
        if let Some(bad) = columns.iter().find(|c| c.len() != num_rows) {
            return Err(LinalgError::DimensionMismatch {
                expected: num_rows,
                found: bad.len(),
            });
        }
        let data = (0..num_rows)
            .flat_map(|row| columns.iter().map(move |c| c[row].clone()))
            .collect();
        Self::from_data(data, num_rows, num_cols)
    }

    fn from_data(data: Vec<F>, num_rows: usize, num_cols: usize) -> Result<Self> {
        let first = &data[0];
        for entry in &data[1..] {
            first.ensure_compatible(entry)?;
        }
        Ok(Self {
            zero: first.zero(),
            one: first.one(),
            data,
            num_rows,
            num_cols,
        })
    }

    /// Appends `rhs` as an extra right-most column.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `rhs` does not have one
    /// entry per row and [`LinalgError::Field`] for another field.
    pub fn augmented(&self, rhs: &Vector<F>) -> Result<Self> {
        if rhs.len() != self.num_rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_rows,
                found: rhs.len(),
            });
        }
        self.zero.ensure_compatible(&rhs[0])?;
        let num_cols = self.num_cols + 1;
        let mut data = Vec::with_capacity(self.num_rows * num_cols);
        for row in 0..self.num_rows {
            data.extend_from_slice(self.row_slice(row));
            data.push(rhs[row].clone());
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols,
            zero: self.zero.clone(),
            one: self.one.clone(),
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// The additive identity of the entries' field.
    #[must_use]
    pub fn zero(&self) -> &F {
        &self.zero
    }

    /// The multiplicative identity of the entries' field.
    #[must_use]
    pub fn one(&self) -> &F {
        &self.one
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row < self.num_rows && col < self.num_cols {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange {
                row,
                col,
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    pub(crate) fn ensure_square(&self) -> Result<usize> {
        if self.is_square() {
            Ok(self.num_rows)
        } else {
            Err(LinalgError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    /// Returns the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<&F> {
        self.check_index(row, col)?;
        Ok(&self.data[row * self.num_cols + col])
    }

    /// Overwrites the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] outside the matrix and
    /// [`LinalgError::Field`] if `value` is from another field.
    pub fn set(&mut self, row: usize, col: usize, value: F) -> Result<()> {
        self.check_index(row, col)?;
        self.zero.ensure_compatible(&value)?;
        self.data[row * self.num_cols + col] = value;
        Ok(())
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[F] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a copy of a row.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if `row` does not exist.
    pub fn row(&self, row: usize) -> Result<Vector<F>> {
        self.check_index(row, 0)?;
        Ok(Vector::from_entries(self.row_slice(row).to_vec()))
    }

    /// Returns a copy of a column.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if `col` does not exist.
    pub fn column(&self, col: usize) -> Result<Vector<F>> {
        self.check_index(0, col)?;
        Ok(Vector::from_entries(
            (0..self.num_rows)
                .map(|row| self[(row, col)].clone())
                .collect(),
        ))
    }

    /// Applies an elementary row operation in place, over all columns.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if the operation names a
    /// missing row, [`LinalgError::DegenerateOperation`] if it is not
    /// invertible and [`LinalgError::Field`] if its factor is from another
    /// field. The matrix is left untouched on error.
    pub fn apply(&mut self, op: &ElementaryOperation<F>) -> Result<()> {
        op.validate()?;
        if let Some(row) = op.max_row() {
            self.check_index(row, 0)?;
        }
        if let Some(factor) = op.factor() {
            self.zero.ensure_compatible(factor)?;
        }
        self.apply_unchecked(op);
        Ok(())
    }

    /// Applies an operation produced by elimination on a matrix of the
    /// same height, skipping validation.
    pub(crate) fn apply_unchecked(&mut self, op: &ElementaryOperation<F>) {
        match op {
            ElementaryOperation::Identity => {}
            ElementaryOperation::Scale { row, factor } => self.scale_row(*row, factor),
            ElementaryOperation::Add {
                source,
                target,
                factor,
            } => self.add_scaled_row(*target, *source, factor),
            ElementaryOperation::Switch { first, second } => self.swap_rows(*first, *second),
        }
    }

    /// Swaps two rows in-place.
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    fn add_scaled_row(&mut self, target: usize, source: usize, scale: &F) {
        let cols = self.num_cols;
        for k in 0..cols {
            let src = &self.data[source * cols + k];
            if src.is_zero() {
                continue;
            }
            let val = scale.clone() * src.clone();
            let dst = &mut self.data[target * cols + k];
            *dst = dst.clone() + val;
        }
    }

    /// Scales a row by a scalar.
    fn scale_row(&mut self, row: usize, scale: &F) {
        for entry in &mut self.data[row * self.num_cols..(row + 1) * self.num_cols] {
            *entry = scale.clone() * entry.clone();
        }
    }

    fn ensure_same_field(&self, other: &Self) -> Result<()> {
        self.zero.ensure_compatible(&other.zero)?;
        Ok(())
    }

    /// Entry-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless the shapes agree
    /// and [`LinalgError::Field`] for another field.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.num_rows != other.num_rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_rows,
                found: other.num_rows,
            });
        }
        if self.num_cols != other.num_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                found: other.num_cols,
            });
        }
        self.ensure_same_field(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            ..self.clone_shape()
        })
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless `other` has one row
    /// per column of `self`, and [`LinalgError::Field`] for another field.
    pub fn multiply_right(&self, other: &Self) -> Result<Self> {
        if self.num_cols != other.num_rows {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                found: other.num_rows,
            });
        }
        self.ensure_same_field(other)?;

        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = self.zero.clone();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                data.push(sum);
            }
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
            zero: self.zero.clone(),
            one: self.one.clone(),
        })
    }

    /// Matrix-vector product `self · x`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] unless `x` has one entry
    /// per column, and [`LinalgError::Field`] for another field.
    pub fn mul_vector(&self, x: &Vector<F>) -> Result<Vector<F>> {
        if x.len() != self.num_cols {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_cols,
                found: x.len(),
            });
        }
        self.zero.ensure_compatible(&x[0])?;
        Ok(Vector::from_entries(
            (0..self.num_rows)
                .map(|row| {
                    self.row_slice(row)
                        .iter()
                        .zip(x)
                        .fold(self.zero.clone(), |acc, (a, b)| acc + a.clone() * b.clone())
                })
                .collect(),
        ))
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = (0..self.num_cols)
            .flat_map(|col| (0..self.num_rows).map(move |row| self[(row, col)].clone()))
            .collect();
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
            zero: self.zero.clone(),
            one: self.one.clone(),
        }
    }

    /// Multiplies every entry by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Field`] if `scalar` is from another field.
    pub fn scale(&self, scalar: &F) -> Result<Self> {
        self.zero.ensure_compatible(scalar)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .map(|v| scalar.clone() * v.clone())
                .collect(),
            ..self.clone_shape()
        })
    }

    fn clone_shape(&self) -> Self {
        Self {
            data: Vec::new(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            zero: self.zero.clone(),
            one: self.one.clone(),
        }
    }

    /// Runs Gaussian elimination on a copy of this matrix.
    ///
    /// # Errors
    ///
    /// Propagates field errors from pivot inversion.
    pub fn gauss(&self) -> Result<GaussElimination<F>> {
        GaussElimination::new(self)
    }

    /// Reduced row-echelon form together with the full operation log.
    ///
    /// # Errors
    ///
    /// Propagates field errors from pivot inversion.
    pub fn echelon(&self) -> Result<EchelonForm<F>> {
        EchelonForm::new(&self.gauss()?)
    }

    /// `P · A = L · U` decomposition.
    ///
    /// # Errors
    ///
    /// Propagates field errors from pivot inversion.
    pub fn lu(&self) -> Result<LuDecomposition<F>> {
        self.gauss()?.lu()
    }

    /// Number of pivots found by elimination.
    ///
    /// # Errors
    ///
    /// Propagates field errors from pivot inversion.
    pub fn rank(&self) -> Result<usize> {
        Ok(self.gauss()?.rank())
    }

    /// Returns true if the rank equals `min(rows, cols)`.
    ///
    /// # Errors
    ///
    /// Propagates field errors from pivot inversion.
    pub fn is_full_rank(&self) -> Result<bool> {
        Ok(self.gauss()?.is_full_rank())
    }

    /// Returns true if the square matrix has no inverse.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for a rectangular matrix.
    pub fn is_singular(&self) -> Result<bool> {
        self.ensure_square()?;
        Ok(!self.is_full_rank()?)
    }

    /// The determinant, with one sign flip per row switch of elimination.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for a rectangular matrix.
    pub fn determinant(&self) -> Result<F> {
        self.ensure_square()?;
        self.gauss()?.determinant()
    }

    /// The inverse, obtained by replaying the reduction log on the identity.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for a rectangular matrix and
    /// [`LinalgError::Singular`] if the rank is deficient.
    pub fn inverse(&self) -> Result<Self> {
        let n = self.ensure_square()?;
        let gauss = self.gauss()?;
        if gauss.rank() < n {
            debug!("inverse requested for singular {n}x{n} matrix (rank {})", gauss.rank());
            return Err(LinalgError::Singular);
        }
        let form = EchelonForm::new(&gauss)?;
        let mut inverse = Self::identity(n, &self.one)?;
        for op in form.operations() {
            inverse.apply_unchecked(op);
        }
        Ok(inverse)
    }

    /// The permanent, computed with Ryser's formula.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for a rectangular matrix.
    pub fn permanent(&self) -> Result<F> {
        self.permanent_with(PermanentAlgorithm::default())
    }

    /// The permanent, computed with the given algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NotSquare`] for a rectangular matrix.
    pub fn permanent_with(&self, algorithm: PermanentAlgorithm) -> Result<F> {
        match algorithm {
            PermanentAlgorithm::Naive => permanent_naive(self),
            PermanentAlgorithm::Ryser => permanent_ryser(self),
        }
    }

    /// A basis of the null space, one vector per non-pivot column.
    ///
    /// # Errors
    ///
    /// Propagates field errors from pivot inversion.
    pub fn solve_homogeneous(&self) -> Result<Vec<Vector<F>>> {
        solve::solve_homogeneous(self)
    }

    /// All solutions of `self · x = b`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::Inconsistent`] if there are none.
    pub fn solve(&self, b: &Vector<F>) -> Result<AffineSolution<F>> {
        solve::solve(self, b)
    }
}

impl<F> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

/// Row-major dump: entries separated by spaces, one line per row.
impl<F: fmt::Display> fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.num_cols) {
            for (k, entry) in row.iter().enumerate() {
                if k > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{entry}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
