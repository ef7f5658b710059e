//! Per-column summary statistics for a dataset.

use serde::{Deserialize, Serialize};

use crate::domain::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for a single value.
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_rows: usize,
    pub features: Vec<(String, ColumnStats)>,
    pub target: ColumnStats,
}

/// Summarize a column. Returns `None` for an empty slice.
pub fn summarize(values: &[f64]) -> Option<ColumnStats> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if values.len() > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        var.sqrt()
    } else {
        0.0
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(ColumnStats { mean, std, min, max })
}

pub fn dataset_stats(data: &Dataset) -> Option<DatasetStats> {
    let target = summarize(&data.targets)?;
    let mut features = Vec::with_capacity(data.n_features());
    for (j, name) in data.feature_names.iter().enumerate() {
        let column: Vec<f64> = data.features.iter().filter_map(|row| row.get(j).copied()).collect();
        features.push((name.clone(), summarize(&column)?));
    }
    Some(DatasetStats {
        n_rows: data.len(),
        features,
        target,
    })
}
