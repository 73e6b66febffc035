//! Property-based tests for elimination, inversion, solving and permanents.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use exalin_combinatorics::Permutations;
    use exalin_fields::{Field, ModInt, Rational};

    use crate::{
        permanent_naive, permanent_ryser, ElementaryOperation, LinalgError, Matrix, Vector,
    };

    type F7 = ModInt<7>;
    type F101 = ModInt<101>;

    fn entries<S: Strategy>(
        rows: usize,
        cols: usize,
        element: S,
    ) -> impl Strategy<Value = Vec<Vec<S::Value>>> {
        prop::collection::vec(prop::collection::vec(element, cols), rows)
    }

    fn to_f7(rows: Vec<Vec<u64>>) -> Matrix<F7> {
        Matrix::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(F7::new).collect())
                .collect(),
        )
        .unwrap()
    }

    fn to_f101(rows: Vec<Vec<u64>>) -> Matrix<F101> {
        Matrix::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(F101::new).collect())
                .collect(),
        )
        .unwrap()
    }

    fn to_q(rows: Vec<Vec<i64>>) -> Matrix<Rational> {
        Matrix::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(Rational::from_integer).collect())
                .collect(),
        )
        .unwrap()
    }

    fn matrix_f7(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Matrix<F7>> {
        (1..=max_rows, 1..=max_cols)
            .prop_flat_map(|(r, c)| entries(r, c, 0u64..7))
            .prop_map(to_f7)
    }

    fn square_f7(max_n: usize) -> impl Strategy<Value = Matrix<F7>> {
        (1..=max_n)
            .prop_flat_map(|n| entries(n, n, 0u64..7))
            .prop_map(to_f7)
    }

    fn square_f101(max_n: usize) -> impl Strategy<Value = Matrix<F101>> {
        (1..=max_n)
            .prop_flat_map(|n| entries(n, n, 0u64..101))
            .prop_map(to_f101)
    }

    fn square_pair_f101(max_n: usize) -> impl Strategy<Value = (Matrix<F101>, Matrix<F101>)> {
        (1..=max_n)
            .prop_flat_map(|n| (entries(n, n, 0u64..101), entries(n, n, 0u64..101)))
            .prop_map(|(a, b)| (to_f101(a), to_f101(b)))
    }

    fn matrix_q(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Matrix<Rational>> {
        (1..=max_rows, 1..=max_cols)
            .prop_flat_map(|(r, c)| entries(r, c, -3i64..=3))
            .prop_map(to_q)
    }

    fn square_q(max_n: usize) -> impl Strategy<Value = Matrix<Rational>> {
        (1..=max_n)
            .prop_flat_map(|n| entries(n, n, -3i64..=3))
            .prop_map(to_q)
    }

    /// A matrix together with a vector of matching width.
    fn system_q(
        max_rows: usize,
        max_cols: usize,
    ) -> impl Strategy<Value = (Matrix<Rational>, Vector<Rational>)> {
        matrix_q(max_rows, max_cols).prop_flat_map(|m| {
            let cols = m.num_cols();
            (
                Just(m),
                prop::collection::vec(-3i64..=3, cols).prop_map(|xs| {
                    Vector::new(xs.into_iter().map(Rational::from_integer).collect()).unwrap()
                }),
            )
        })
    }

    /// A matrix together with an elementary operation on its rows,
    /// degenerate ones included.
    fn matrix_and_op() -> impl Strategy<Value = (Matrix<F7>, ElementaryOperation<F7>)> {
        matrix_f7(5, 5).prop_flat_map(|m| {
            let rows = m.num_rows();
            let op = prop_oneof![
                Just(ElementaryOperation::Identity),
                (0..rows, 0u64..7).prop_map(|(row, f)| ElementaryOperation::Scale {
                    row,
                    factor: F7::new(f),
                }),
                (0..rows, 0..rows, 0u64..7).prop_map(|(source, target, f)| {
                    ElementaryOperation::Add {
                        source,
                        target,
                        factor: F7::new(f),
                    }
                }),
                (0..rows, 0..rows)
                    .prop_map(|(first, second)| ElementaryOperation::Switch { first, second }),
            ];
            (Just(m), op)
        })
    }

    fn leibniz<F: Field>(m: &Matrix<F>) -> F {
        let n = m.num_rows();
        Permutations::new(n).fold(m.zero().clone(), |acc, p| {
            let term = (0..n).fold(m.one().clone(), |t, i| t * m[(i, p.image(i))].clone());
            if p.sign() > 0 {
                acc + term
            } else {
                acc - term
            }
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn inverse_is_two_sided_f7(m in square_f7(4)) {
            let id = Matrix::identity(m.num_rows(), &F7::new(1)).unwrap();
            if m.is_full_rank().unwrap() {
                let inv = m.inverse().unwrap();
                prop_assert_eq!(inv.multiply_right(&m).unwrap(), id.clone());
                prop_assert_eq!(m.multiply_right(&inv).unwrap(), id);
            } else {
                prop_assert_eq!(m.inverse(), Err(LinalgError::Singular));
            }
        }

        #[test]
        fn inverse_is_two_sided_q(m in square_q(4)) {
            if m.is_full_rank().unwrap() {
                let id = Matrix::identity(m.num_rows(), m.one()).unwrap();
                let inv = m.inverse().unwrap();
                prop_assert_eq!(inv.multiply_right(&m).unwrap(), id.clone());
                prop_assert_eq!(m.multiply_right(&inv).unwrap(), id);
            }
        }

        #[test]
        fn rank_matches_pivots(m in matrix_f7(6, 6)) {
            let gauss = m.gauss().unwrap();
            prop_assert_eq!(m.rank().unwrap(), gauss.pivots().len());
            prop_assert!(gauss.rank() <= m.num_rows().min(m.num_cols()));
            prop_assert_eq!(gauss.rank(), m.transpose().rank().unwrap());
        }

        #[test]
        fn pivots_strictly_increase(m in matrix_f7(6, 6)) {
            let gauss = m.gauss().unwrap();
            for (i, pivot) in gauss.pivots().iter().enumerate() {
                prop_assert_eq!(pivot.row, i);
                prop_assert!(gauss.echelon()[(pivot.row, pivot.col)].is_nonzero());
                for row in pivot.row + 1..m.num_rows() {
                    prop_assert!(gauss.echelon()[(row, pivot.col)].is_zero());
                }
            }
            for pair in gauss.pivots().windows(2) {
                prop_assert!(pair[0].col < pair[1].col);
            }
        }

        #[test]
        fn permanent_algorithms_agree_f101(m in square_f101(5)) {
            prop_assert_eq!(permanent_naive(&m).unwrap(), permanent_ryser(&m).unwrap());
        }

        #[test]
        fn permanent_algorithms_agree_q(m in square_q(4)) {
            prop_assert_eq!(permanent_naive(&m).unwrap(), permanent_ryser(&m).unwrap());
        }

        #[test]
        fn determinant_matches_leibniz_f101(m in square_f101(5)) {
            prop_assert_eq!(m.determinant().unwrap(), leibniz(&m));
        }

        #[test]
        fn determinant_matches_leibniz_q(m in square_q(4)) {
            prop_assert_eq!(m.determinant().unwrap(), leibniz(&m));
        }

        #[test]
        fn determinant_is_multiplicative((a, b) in square_pair_f101(4)) {
            let ab = a.multiply_right(&b).unwrap();
            prop_assert_eq!(
                ab.determinant().unwrap(),
                a.determinant().unwrap() * b.determinant().unwrap()
            );
        }

        #[test]
        fn lu_reconstructs_permuted_matrix(m in matrix_f7(5, 5)) {
            let lu = m.lu().unwrap();
            prop_assert_eq!(
                lu.permutation.multiply_right(&m).unwrap(),
                lu.lower.multiply_right(&lu.upper).unwrap()
            );
        }

        #[test]
        fn consistent_systems_are_solved_exactly((a, x0) in system_q(4, 4)) {
            let b = a.mul_vector(&x0).unwrap();
            let solution = a.solve(&b).unwrap();
            for x in solution.solutions() {
                prop_assert_eq!(a.mul_vector(&x).unwrap(), b.clone());
            }
            prop_assert_eq!(solution.dimension(), a.num_cols() - a.rank().unwrap());
        }

        #[test]
        fn inconsistency_means_rank_grows(m in matrix_f7(4, 4), rhs in prop::collection::vec(0u64..7, 4)) {
            let b = Vector::new(rhs[..m.num_rows()].iter().map(|&v| F7::new(v)).collect()).unwrap();
            let augmented_rank = m.augmented(&b).unwrap().rank().unwrap();
            match m.solve(&b) {
                Ok(solution) => {
                    prop_assert_eq!(augmented_rank, m.rank().unwrap());
                    prop_assert_eq!(m.mul_vector(solution.particular()).unwrap(), b);
                }
                Err(err) => {
                    prop_assert_eq!(err, LinalgError::Inconsistent);
                    prop_assert_eq!(augmented_rank, m.rank().unwrap() + 1);
                }
            }
        }

        #[test]
        fn kernel_basis_spans_null_space(m in matrix_f7(5, 6)) {
            let kernel = m.solve_homogeneous().unwrap();
            prop_assert_eq!(kernel.len(), m.num_cols() - m.rank().unwrap());
            for v in &kernel {
                prop_assert!(m.mul_vector(v).unwrap().is_zero());
            }
            if !kernel.is_empty() {
                prop_assert!(crate::is_linearly_independent(&kernel).unwrap());
            }
        }

        #[test]
        fn elementary_operation_roundtrip((m, op) in matrix_and_op()) {
            let mut changed = m.clone();
            match op.inverse() {
                Ok(inverse) => {
                    changed.apply(&op).unwrap();
                    changed.apply(&inverse).unwrap();
                }
                Err(err) => {
                    let is_degenerate = matches!(err, LinalgError::DegenerateOperation { .. });
                    prop_assert!(is_degenerate);
                    prop_assert_eq!(changed.apply(&op), Err(err));
                }
            }
            prop_assert_eq!(changed, m);
        }

        #[test]
        fn elementary_matrix_determinant((m, op) in matrix_and_op()) {
            let unit = F7::new(1);
            match op.determinant(&unit) {
                Ok(det) => {
                    let e = op.as_matrix(m.num_rows(), &unit).unwrap();
                    prop_assert_eq!(e.determinant().unwrap(), det);
                }
                Err(err) => prop_assert_eq!(op.as_matrix(m.num_rows(), &unit), Err(err)),
            }
        }
    }
}
