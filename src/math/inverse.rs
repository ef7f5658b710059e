//! Gauss–Jordan matrix inversion with partial pivoting.
//!
//! The normal-equation matrix `XᵗX` is small (features + 1 square), so a dense
//! elimination over the augmented matrix `[A | I]` is fast and easy to audit.
//! Partial pivoting keeps round-off bounded: at each step the largest-magnitude
//! candidate in the pivot column is swapped into place.
//!
//! Cost is O(n³); this is not intended for high-dimensional feature spaces,
//! which would call for a QR or SVD based solver instead.

use log::debug;

use crate::domain::Matrix;
use crate::error::{RegressionError, RegressionResult};
use crate::math::matrix::{identity, shape};

/// Pivots with magnitude below this are treated as zero.
pub const PIVOT_EPS: f64 = 1e-12;

/// Invert a square matrix.
///
/// Fails with `DimensionMismatch` for non-square input and `SingularMatrix`
/// (carrying the column index) when no usable pivot exists.
pub fn invert(a: &[Vec<f64>]) -> RegressionResult<Matrix> {
    let (rows, cols) = shape(a, "invert")?;
    if rows != cols {
        return Err(RegressionError::dimension(
            "invert",
            "a square matrix",
            format!("{rows}x{cols}"),
        ));
    }
    let n = rows;

    let mut aug: Matrix = a
        .iter()
        .zip(identity(n))
        .map(|(row, id_row)| {
            let mut r = Vec::with_capacity(2 * n);
            r.extend_from_slice(row);
            r.extend(id_row);
            r
        })
        .collect();

    for i in 0..n {
        let pivot_row = (i..n)
            .max_by(|&p, &q| aug[p][i].abs().total_cmp(&aug[q][i].abs()))
            .unwrap_or(i);
        aug.swap(i, pivot_row);

        let pivot = aug[i][i];
        if !(pivot.abs() >= PIVOT_EPS) {
            debug!("invert: pivot {pivot:e} in column {i} below {PIVOT_EPS:e}");
            return Err(RegressionError::SingularMatrix { pivot_index: i });
        }

        let inv_pivot = 1.0 / pivot;
        for v in aug[i].iter_mut() {
            *v *= inv_pivot;
        }

        let pivot_vals = aug[i].clone();
        for (j, row) in aug.iter_mut().enumerate() {
            if j == i {
                continue;
            }
            let factor = row[i];
            if factor == 0.0 {
                continue;
            }
            for (v, &p) in row.iter_mut().zip(&pivot_vals) {
                *v -= factor * p;
            }
        }
    }

    Ok(aug.into_iter().map(|row| row[n..].to_vec()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::multiply;

    fn assert_identity(m: &[Vec<f64>], tol: f64) {
        let n = m.len();
        let id = identity(n);
        for i in 0..n {
            for j in 0..n {
                assert!(
                    (m[i][j] - id[i][j]).abs() < tol,
                    "entry ({i},{j}) = {} not within {tol} of identity",
                    m[i][j]
                );
            }
        }
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let a = vec![
            vec![4.0, 7.0, 2.0],
            vec![3.0, 6.0, 1.0],
            vec![2.0, 5.0, 3.0],
        ];
        let inv = invert(&a).unwrap();
        assert_identity(&multiply(&a, &inv).unwrap(), 1e-9);
        assert_identity(&multiply(&inv, &a).unwrap(), 1e-9);
    }

    #[test]
    fn requires_pivoting_for_zero_leading_entry() {
        // Naive elimination would divide by a[0][0] = 0.
        let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let inv = invert(&a).unwrap();
        assert_identity(&multiply(&a, &inv).unwrap(), 1e-12);
    }

    #[test]
    fn zero_row_is_singular() {
        let a = vec![vec![1.0, 2.0], vec![0.0, 0.0]];
        assert!(matches!(invert(&a), Err(RegressionError::SingularMatrix { .. })));
    }

    #[test]
    fn collinear_columns_report_pivot_index() {
        let a = vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
            vec![1.0, 0.0, 1.0],
        ];
        match invert(&a) {
            Err(RegressionError::SingularMatrix { pivot_index }) => assert!(pivot_index < 3),
            other => panic!("expected singular matrix, got {other:?}"),
        }
    }

    #[test]
    fn non_square_is_dimension_error() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert!(matches!(invert(&a), Err(RegressionError::DimensionMismatch { .. })));
    }

    #[test]
    fn input_is_left_untouched() {
        let a = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
        let before = a.clone();
        let _ = invert(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn matches_nalgebra_inverse() {
        let a = vec![
            vec![10.0, -2.0, 3.5, 0.25],
            vec![-2.0, 8.0, 1.0, -1.5],
            vec![3.5, 1.0, 12.0, 2.0],
            vec![0.25, -1.5, 2.0, 6.0],
        ];
        let inv = invert(&a).unwrap();

        let flat: Vec<f64> = a.iter().flatten().copied().collect();
        let reference = nalgebra::DMatrix::from_row_slice(4, 4, &flat)
            .try_inverse()
            .unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert!((inv[i][j] - reference[(i, j)]).abs() < 1e-10);
            }
        }
    }
}
