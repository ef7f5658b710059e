//! Export test-partition predictions to CSV.
//!
//! One row per held-out observation: original row index, truth, prediction
//! and residual (`y_true - y_pred`).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;

pub fn write_predictions_csv(
    path: &Path,
    indices: &[usize],
    y_true: &[f64],
    y_pred: &[f64],
) -> Result<(), AppError> {
    if indices.len() != y_true.len() || y_true.len() != y_pred.len() {
        return Err(AppError::new(
            4,
            "Prediction export received columns of different lengths.",
        ));
    }

    let mut file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "row,y_true,y_pred,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for ((row, t), p) in indices.iter().zip(y_true).zip(y_pred) {
        writeln!(file, "{row},{t:.6},{p:.6},{:.6}", t - p)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
