//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::TrainRun;
use crate::domain::Metrics;
use crate::eval::DatasetStats;

/// Format the full training summary (sample counts + metrics + parameters).
pub fn format_train_report(run: &TrainRun, feature_names: &[String], source: &str) -> String {
    let mut out = String::new();

    out.push_str("=== hreg - OLS Regression (normal equation) ===\n");
    out.push_str(&format!("Source: {source}\n"));
    out.push_str(&format!(
        "Samples: train={} | test={}\n",
        run.split.train_indices.len(),
        run.split.test_indices.len()
    ));

    out.push_str("\nHeld-out metrics:\n");
    match &run.metrics {
        Some(m) => out.push_str(&format_metrics(m)),
        None => out.push_str("  (test partition is empty; no metrics)\n"),
    }

    out.push_str(&format!("\nIntercept: {:.4}\n", run.model.intercept));
    out.push_str("Coefficients:\n");
    out.push_str(&format_coefficients(feature_names, &run.model.coefficients));

    out
}

pub fn format_metrics(m: &Metrics) -> String {
    let mut out = String::new();
    out.push_str(&format!("  R²   {:>12}", fmt_r2(m.r2)));
    if m.r2.is_finite() {
        out.push_str(&format!("   (explains {:.2}% of variance)", m.r2 * 100.0));
    }
    out.push('\n');
    out.push_str(&format!("  RMSE {:>12.4}\n", m.rmse));
    out.push_str(&format!("  MAE  {:>12.4}\n", m.mae));
    out.push_str(&format!("  MSE  {:>12.4}\n", m.mse));
    out
}

fn format_coefficients(names: &[String], coefficients: &[f64]) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {:<14} {:>12} {:>4}\n", "feature", "coef", "sign"));
    out.push_str(&format!("  {:-<14} {:->12} {:->4}\n", "", "", ""));
    for (name, c) in names.iter().zip(coefficients) {
        let sign = if *c > 0.0 {
            "+"
        } else if *c < 0.0 {
            "-"
        } else {
            "0"
        };
        out.push_str(&format!("  {:<14} {:>12.4} {:>4}\n", truncate(name, 14), c, sign));
    }
    out
}

/// Format per-column summary statistics.
pub fn format_stats(stats: &DatasetStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Rows: {}\n", stats.n_rows));
    out.push_str(&format!(
        "{:<14} {:>12} {:>12} {:>12} {:>12}\n",
        "column", "mean", "std", "min", "max"
    ));
    out.push_str(&format!(
        "{:-<14} {:->12} {:->12} {:->12} {:->12}\n",
        "", "", "", "", ""
    ));
    let rows = stats
        .features
        .iter()
        .map(|(name, s)| (name.as_str(), s))
        .chain(std::iter::once(("target", &stats.target)));
    for (name, s) in rows {
        out.push_str(&format!(
            "{:<14} {:>12.4} {:>12.4} {:>12.4} {:>12.4}\n",
            truncate(name, 14),
            s.mean,
            s.std,
            s.min,
            s.max
        ));
    }
    out
}

/// Format a single prediction in model units and, for housing models, dollars.
pub fn format_prediction(value: f64, scale: Option<f64>) -> String {
    match scale {
        Some(scale) => format!(
            "Predicted value: {value:.4} (${})",
            fmt_dollars(value * scale)
        ),
        None => format!("Predicted value: {value:.4}"),
    }
}

fn fmt_r2(r2: f64) -> String {
    if r2.is_nan() {
        "n/a".to_string()
    } else {
        format!("{r2:.4}")
    }
}

fn fmt_dollars(v: f64) -> String {
    let negative = v < 0.0;
    let cents = format!("{:.2}", v.abs());
    let (int_part, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{grouped}.{frac}", if negative { "-" } else { "" })
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
