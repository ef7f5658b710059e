//! Dense matrix primitives used by the normal-equation solver.
//!
//! All functions take their inputs by reference and return freshly allocated
//! results. Shapes are validated up front so a mismatch is reported with the
//! offending dimensions instead of panicking on an out-of-bounds index.

use log::debug;

use crate::domain::{Matrix, Vector};
use crate::error::{RegressionError, RegressionResult};

/// Return `(rows, cols)` of a non-empty rectangular matrix.
pub fn shape(a: &[Vec<f64>], context: &'static str) -> RegressionResult<(usize, usize)> {
    let rows = a.len();
    let cols = a.first().map(Vec::len).unwrap_or(0);
    if rows == 0 || cols == 0 {
        return Err(RegressionError::dimension(
            context,
            "a non-empty matrix",
            format!("{rows}x{cols}"),
        ));
    }
    if let Some((i, row)) = a.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(RegressionError::dimension(
            context,
            format!("{cols} columns in every row"),
            format!("{} columns in row {i}", row.len()),
        ));
    }
    Ok((rows, cols))
}

/// `B[j][i] = A[i][j]`.
pub fn transpose(a: &[Vec<f64>]) -> RegressionResult<Matrix> {
    let (rows, cols) = shape(a, "transpose")?;
    let mut out = vec![vec![0.0; rows]; cols];
    for (i, row) in a.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out[j][i] = v;
        }
    }
    Ok(out)
}

/// Matrix product `A · B`; requires `cols(A) == rows(B)`.
pub fn multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> RegressionResult<Matrix> {
    let (a_rows, a_cols) = shape(a, "multiply")?;
    let (b_rows, b_cols) = shape(b, "multiply")?;
    if a_cols != b_rows {
        return Err(RegressionError::dimension(
            "multiply",
            format!("right operand with {a_cols} rows"),
            format!("{b_rows}x{b_cols}"),
        ));
    }
    debug!("multiply {a_rows}x{a_cols} by {b_rows}x{b_cols}");

    let mut out = vec![vec![0.0; b_cols]; a_rows];
    for (out_row, a_row) in out.iter_mut().zip(a) {
        // i-k-j order walks both operands row-wise.
        for (k, &a_ik) in a_row.iter().enumerate() {
            for (acc, &b_kj) in out_row.iter_mut().zip(&b[k]) {
                *acc += a_ik * b_kj;
            }
        }
    }
    Ok(out)
}

/// Matrix-vector product `A · v`; requires `cols(A) == len(v)`.
pub fn multiply_vector(a: &[Vec<f64>], v: &[f64]) -> RegressionResult<Vector> {
    let (_, cols) = shape(a, "multiply_vector")?;
    if cols != v.len() {
        return Err(RegressionError::dimension(
            "multiply_vector",
            format!("vector of length {cols}"),
            format!("length {}", v.len()),
        ));
    }
    Ok(a.iter().map(|row| dot(row, v)).collect())
}

/// Dot product of two equal-length slices.
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// `n × n` identity.
pub fn identity(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_swaps_indices() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let t = transpose(&a).unwrap();
        assert_eq!(t, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn transpose_rejects_ragged_rows() {
        let a = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            transpose(&a),
            Err(RegressionError::DimensionMismatch { context: "transpose", .. })
        ));
    }

    #[test]
    fn transpose_rejects_empty() {
        let a: Matrix = Vec::new();
        assert!(transpose(&a).is_err());
    }

    #[test]
    fn multiply_known_product() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
        assert_eq!(
            multiply(&a, &b).unwrap(),
            vec![vec![19.0, 22.0], vec![43.0, 50.0]]
        );
    }

    #[test]
    fn multiply_non_square_shapes() {
        let a = vec![vec![1.0, 0.0, 2.0]];
        let b = vec![vec![1.0], vec![5.0], vec![3.0]];
        assert_eq!(multiply(&a, &b).unwrap(), vec![vec![7.0]]);
    }

    #[test]
    fn multiply_rejects_inner_dimension_mismatch() {
        let a = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let b = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let err = multiply(&a, &b).unwrap_err();
        assert!(matches!(err, RegressionError::DimensionMismatch { context: "multiply", .. }));
    }

    #[test]
    fn multiply_vector_known_product() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        assert_eq!(multiply_vector(&a, &[1.0, -1.0]).unwrap(), vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn multiply_vector_rejects_length_mismatch() {
        let a = vec![vec![1.0, 2.0]];
        assert!(multiply_vector(&a, &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let before = a.clone();
        let _ = multiply(&a, &a).unwrap();
        let _ = transpose(&a).unwrap();
        assert_eq!(a, before);
    }
}
