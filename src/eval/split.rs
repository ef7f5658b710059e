//! Randomized train/test partitioning.
//!
//! Indices `[0, n)` are permuted with an unbiased Fisher–Yates shuffle driven
//! by a caller-supplied RNG; the first `floor(n · test_fraction)` permuted
//! indices form the test partition and the rest the training partition.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::{Matrix, Vector};
use crate::error::{RegressionError, RegressionResult};

/// Output of [`split`]. Rows keep the permuted order within each partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub x_train: Matrix,
    pub x_test: Matrix,
    pub y_train: Vector,
    pub y_test: Vector,
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
}

/// Partition `(x, y)` using `rng` as the only source of randomness.
pub fn split<R: Rng + ?Sized>(
    x: &[Vec<f64>],
    y: &[f64],
    test_fraction: f64,
    rng: &mut R,
) -> RegressionResult<Split> {
    let n = x.len();
    if n == 0 || !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(RegressionError::InvalidSplitFraction {
            fraction: test_fraction,
            n,
        });
    }
    if y.len() != n {
        return Err(RegressionError::dimension(
            "split",
            format!("{n} targets (one per row)"),
            y.len(),
        ));
    }

    let indices = shuffled_indices(n, rng);
    let n_test = (n as f64 * test_fraction).floor() as usize;
    let (test, train) = indices.split_at(n_test);

    Ok(Split {
        x_train: train.iter().map(|&i| x[i].clone()).collect(),
        x_test: test.iter().map(|&i| x[i].clone()).collect(),
        y_train: train.iter().map(|&i| y[i]).collect(),
        y_test: test.iter().map(|&i| y[i]).collect(),
        train_indices: train.to_vec(),
        test_indices: test.to_vec(),
    })
}

/// Reproducible split seeded through `StdRng`.
pub fn split_seeded(
    x: &[Vec<f64>],
    y: &[f64],
    test_fraction: f64,
    seed: u64,
) -> RegressionResult<Split> {
    let mut rng = StdRng::seed_from_u64(seed);
    split(x, y, test_fraction, &mut rng)
}

fn shuffled_indices<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        indices.swap(i, j);
    }
    indices
}
