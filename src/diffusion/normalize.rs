//! Dual (row and column) degree normalization.
//!
//! A row of an adjacency matrix belongs to a target node and sums to its
//! in-degree; a column belongs to a source node and sums to its
//! out-degree. Damping scales each row by `row_sum^-row_damping` and each
//! column by `column_sum^-column_damping`. A damping of 1 on a 0/1 matrix
//! makes every nonzero row (or column) sum to 1; a damping of 0 leaves
//! that axis alone.

use ndarray::{Array2, Axis};
use tracing::trace;

/// Row and column normalize `matrix`, taking ownership and returning it.
pub fn dual_normalize(mut matrix: Array2<f64>, row_damping: f64, column_damping: f64) -> Array2<f64> {
    dual_normalize_in_place(&mut matrix, row_damping, column_damping);
    matrix
}

/// Row and column normalize `matrix` in place.
///
/// Both row and column sums are taken from the matrix as passed in, so
/// column scaling never sees the effect of row scaling. Rows or columns
/// summing to zero are left untouched.
pub fn dual_normalize_in_place(matrix: &mut Array2<f64>, row_damping: f64, column_damping: f64) {
    let row_sums = matrix.sum_axis(Axis(1));
    let column_sums = matrix.sum_axis(Axis(0));

    if row_damping != 0.0 {
        for (mut row, &row_sum) in matrix.axis_iter_mut(Axis(0)).zip(row_sums.iter()) {
            if row_sum == 0.0 {
                continue;
            }
            row *= row_sum.powf(-row_damping);
        }
    } else {
        trace!("row damping is 0, skipping row normalization");
    }

    if column_damping != 0.0 {
        for (mut column, &column_sum) in matrix.axis_iter_mut(Axis(1)).zip(column_sums.iter()) {
            if column_sum == 0.0 {
                continue;
            }
            column *= column_sum.powf(-column_damping);
        }
    } else {
        trace!("column damping is 0, skipping column normalization");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use proptest::prelude::*;

    const EPS: f64 = 10.0 * f64::EPSILON;

    fn toy() -> Array2<f64> {
        array![[1.0, 1.0, 1.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]]
    }

    fn abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
        (a - b).mapv(f64::abs).sum()
    }

    #[test]
    fn test_zero_damping_is_identity() {
        assert_eq!(dual_normalize(toy(), 0.0, 0.0), toy());
    }

    #[test]
    fn test_row_damping_half() {
        let e = 0.5f64;
        let expected = array![
            [3f64.powf(-e), 3f64.powf(-e), 3f64.powf(-e)],
            [2f64.powf(-e), 2f64.powf(-e), 0.0],
            [1.0, 0.0, 0.0],
        ];
        let result = dual_normalize(toy(), e, 0.0);
        assert!(abs_diff(&result, &expected) < EPS);
    }

    #[test]
    fn test_column_damping_is_transposed_row_case() {
        let e = 0.3f64;
        let expected = array![
            [3f64.powf(-e), 3f64.powf(-e), 3f64.powf(-e)],
            [2f64.powf(-e), 2f64.powf(-e), 0.0],
            [1.0, 0.0, 0.0],
        ]
        .t()
        .to_owned();
        let result = dual_normalize(toy(), 0.0, e);
        assert!(abs_diff(&result, &expected) < EPS);
    }

    #[test]
    fn test_full_damping_rows_and_zero_rows() {
        let m = array![[1.0, 1.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 1.0]];
        let result = dual_normalize(m, 1.0, 0.0);
        let sums = result.sum_axis(Axis(1));
        assert!((sums[0] - 1.0).abs() < EPS);
        assert_eq!(sums[1], 0.0);
        assert!((sums[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_full_damping_columns_and_zero_columns() {
        let m = array![[1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]];
        let result = dual_normalize(m, 0.0, 1.0);
        let sums = result.sum_axis(Axis(0));
        assert!((sums[0] - 1.0).abs() < EPS);
        assert_eq!(sums[1], 0.0);
        assert!((sums[2] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_column_sums_taken_before_row_scaling() {
        let (r, c) = (0.5, 0.7);
        let combined = dual_normalize(toy(), r, c);

        // Rows first, then columns by the original column sums.
        let original_columns = toy().sum_axis(Axis(0));
        let mut sequential = dual_normalize(toy(), r, 0.0);
        for (mut column, &sum) in sequential.axis_iter_mut(Axis(1)).zip(original_columns.iter()) {
            column *= sum.powf(-c);
        }
        assert!(abs_diff(&combined, &sequential) < EPS);

        // Chaining two calls would use the row-scaled column sums instead.
        let chained = dual_normalize(dual_normalize(toy(), r, 0.0), 0.0, c);
        assert!(abs_diff(&combined, &chained) > 1e-6);
    }

    #[test]
    fn test_negative_and_large_exponents() {
        let result = dual_normalize(toy(), -1.0, 0.0);
        assert_eq!(result.row(0).to_vec(), vec![3.0, 3.0, 3.0]);

        let result = dual_normalize(toy(), 0.0, 2.0);
        assert!((result[[0, 0]] - 1.0 / 9.0).abs() < EPS);
    }

    #[test]
    fn test_empty_matrix() {
        let m = Array2::<f64>::zeros((0, 4));
        assert_eq!(dual_normalize(m, 1.0, 1.0).dim(), (0, 4));
    }

    fn binary_matrix() -> impl Strategy<Value = Array2<f64>> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(prop::bool::ANY, rows * cols).prop_map(move |bits| {
                Array2::from_shape_vec(
                    (rows, cols),
                    bits.into_iter().map(|b| if b { 1.0 } else { 0.0 }).collect(),
                )
                .unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn prop_zero_damping_noop(m in binary_matrix()) {
            prop_assert_eq!(dual_normalize(m.clone(), 0.0, 0.0), m);
        }

        #[test]
        fn prop_row_stochastic(m in binary_matrix()) {
            let before = m.sum_axis(Axis(1));
            let after = dual_normalize(m, 1.0, 0.0).sum_axis(Axis(1));
            for (b, a) in before.iter().zip(after.iter()) {
                if *b == 0.0 {
                    prop_assert_eq!(*a, 0.0);
                } else {
                    prop_assert!((a - 1.0).abs() < 1e-12);
                }
            }
        }

        #[test]
        fn prop_column_stochastic(m in binary_matrix()) {
            let before = m.sum_axis(Axis(0));
            let after = dual_normalize(m, 0.0, 1.0).sum_axis(Axis(0));
            for (b, a) in before.iter().zip(after.iter()) {
                if *b == 0.0 {
                    prop_assert_eq!(*a, 0.0);
                } else {
                    prop_assert!((a - 1.0).abs() < 1e-12);
                }
            }
        }

        #[test]
        fn prop_shape_preserved(m in binary_matrix(), r in -2.0f64..2.0, c in -2.0f64..2.0) {
            let dim = m.dim();
            prop_assert_eq!(dual_normalize(m, r, c).dim(), dim);
        }
    }
}
