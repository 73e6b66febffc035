//! Backward elimination to reduced row-echelon form.

use exalin_fields::Field;
use log::{debug, trace};

use crate::elementary::ElementaryOperation;
use crate::error::Result;
use crate::gauss::{render_operations, render_replay, GaussElimination, Pivot};
use crate::matrix::Matrix;

/// Reduced row-echelon form and the complete forward plus backward log.
#[derive(Clone, Debug)]
pub struct EchelonForm<F> {
    source: Matrix<F>,
    reduced: Matrix<F>,
    operations: Vec<ElementaryOperation<F>>,
    pivots: Vec<Pivot>,
}

impl<F: Field> EchelonForm<F> {
    /// Continues a forward elimination until every pivot is one and the
    /// only non-zero entry of its column.
    ///
    /// Pivots are processed from the last to the first. A pivot row is
    /// scaled unless the pivot already is one.
    ///
    /// # Errors
    ///
    /// Propagates a field error if a pivot cannot be inverted.
    pub fn new(gauss: &GaussElimination<F>) -> Result<Self> {
        let mut reduced = gauss.echelon().clone();
        let mut operations = gauss.operations().to_vec();
        let forward = operations.len();

        for pivot in gauss.pivots().iter().rev() {
            let entry = &reduced[(pivot.row, pivot.col)];
            if !entry.is_one() {
                let op = ElementaryOperation::Scale {
                    row: pivot.row,
                    factor: entry.inv()?,
                };
                trace!("{op}");
                reduced.apply_unchecked(&op);
                operations.push(op);
            }

            for target in 0..pivot.row {
                let above = &reduced[(target, pivot.col)];
                if above.is_zero() {
                    continue;
                }
                let op = ElementaryOperation::Add {
                    source: pivot.row,
                    target,
                    factor: above.negate(),
                };
                trace!("{op}");
                reduced.apply_unchecked(&op);
                operations.push(op);
            }
        }

        debug!(
            "backward elimination added {} operations to {forward}",
            operations.len() - forward
        );

        Ok(Self {
            source: gauss.source().clone(),
            reduced,
            operations,
            pivots: gauss.pivots().to_vec(),
        })
    }

    /// The reduced row-echelon matrix.
    #[must_use]
    pub fn reduced(&self) -> &Matrix<F> {
        &self.reduced
    }

    /// Forward and backward operations, in application order.
    #[must_use]
    pub fn operations(&self) -> &[ElementaryOperation<F>] {
        &self.operations
    }

    /// Pivots ordered by increasing row.
    #[must_use]
    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    /// Number of pivots.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// One line per operation of the full log.
    #[must_use]
    pub fn computation(&self) -> String {
        render_operations(&self.operations)
    }

    /// The source matrix followed by each forward and backward operation
    /// and the matrix it produced.
    #[must_use]
    pub fn detailed_computation(&self) -> String {
        render_replay(&self.source, &self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exalin_fields::{ModInt, Rational};

    fn q(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    fn mq(rows: &[&[i64]]) -> Matrix<Rational> {
        Matrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| q(v)).collect()).collect())
            .unwrap()
    }

    #[test]
    fn test_rref() {
        let m = mq(&[&[1, 2, 1], &[2, 4, 2], &[1, 3, 1]]);
        let form = m.echelon().unwrap();
        assert_eq!(form.rank(), 2);
        assert_eq!(form.reduced(), &mq(&[&[1, 0, 1], &[0, 1, 0], &[0, 0, 0]]));
    }

    #[test]
    fn test_log_replays_to_reduced_form() {
        let m = mq(&[&[0, 2, 4], &[3, 1, 1], &[1, 1, 2]]);
        let form = m.echelon().unwrap();
        let mut replay = m.clone();
        for op in form.operations() {
            replay.apply(op).unwrap();
        }
        assert_eq!(&replay, form.reduced());
        assert_eq!(form.reduced(), &Matrix::identity(3, &q(1)).unwrap());
    }

    #[test]
    fn test_pivots_are_unit_and_alone() {
        type F7 = ModInt<7>;
        let m = Matrix::from_rows(vec![
            vec![F7::new(3), F7::new(1), F7::new(4), F7::new(1)],
            vec![F7::new(5), F7::new(2), F7::new(6), F7::new(5)],
        ])
        .unwrap();
        let form = m.echelon().unwrap();
        for pivot in form.pivots() {
            for row in 0..m.num_rows() {
                let expected = if row == pivot.row { 1 } else { 0 };
                assert_eq!(form.reduced()[(row, pivot.col)], F7::new(expected));
            }
        }
    }

    #[test]
    fn test_computation_traces() {
        type F5 = ModInt<5>;
        let m = Matrix::from_rows(vec![
            vec![F5::new(0), F5::new(1)],
            vec![F5::new(1), F5::new(1)],
        ])
        .unwrap();
        let form = m.echelon().unwrap();
        assert_eq!(
            form.computation(),
            "Row(0) <-> Row(1)\nRow(0) -> Row(0) + 4 * Row(1)\n"
        );
        assert_eq!(
            form.detailed_computation(),
            "0 1\n1 1\n\nRow(0) <-> Row(1)\n1 1\n0 1\n\nRow(0) -> Row(0) + 4 * Row(1)\n1 0\n0 1\n"
        );
    }
}
