//! California-housing CSV ingest.
//!
//! Turns the raw block-level census CSV into the eight derived features the
//! model is trained on, plus the target in units of $100,000:
//!
//! | feature     | source                          |
//! |-------------|---------------------------------|
//! | MedInc      | `median_income`                 |
//! | HouseAge    | `housing_median_age`            |
//! | AveRooms    | `total_rooms / households`      |
//! | AveBedrms   | `total_bedrooms / households`   |
//! | Population  | `population`                    |
//! | AveOccup    | `population / households`       |
//! | Latitude    | `latitude`                      |
//! | Longitude   | `longitude`                     |
//!
//! Rows with missing or non-numeric fields (the published file has blank
//! `total_bedrooms` entries) are skipped and reported, so downstream code only
//! ever sees a rectangular, fully populated matrix.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use log::{info, warn};
use reqwest::blocking::Client;

use crate::domain::{Dataset, FeatureName};
use crate::error::AppError;

/// Public mirror of the dataset used when nothing else is configured.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/ageron/handson-ml2/master/datasets/housing/housing.csv";

/// Environment variable (also read from `.env`) overriding the download URL.
pub const URL_ENV: &str = "HOUSING_CSV_URL";

/// Target values are divided by this to express prices in $100k.
pub const TARGET_SCALE: f64 = 100_000.0;

const REQUIRED_COLUMNS: [&str; 9] = [
    "longitude",
    "latitude",
    "housing_median_age",
    "total_rooms",
    "total_bedrooms",
    "population",
    "households",
    "median_income",
    "median_house_value",
];

/// Where to read the CSV from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HousingSource {
    File(PathBuf),
    Url(String),
}

impl HousingSource {
    /// Resolve the source: an explicit path wins, then `HOUSING_CSV_URL`
    /// (environment or `.env`), then [`DEFAULT_URL`].
    pub fn resolve(csv_path: Option<&Path>) -> Self {
        if let Some(path) = csv_path {
            return HousingSource::File(path.to_path_buf());
        }
        dotenvy::dotenv().ok();
        match std::env::var(URL_ENV) {
            Ok(url) if !url.trim().is_empty() => HousingSource::Url(url.trim().to_string()),
            _ => HousingSource::Url(DEFAULT_URL.to_string()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            HousingSource::File(path) => path.display().to_string(),
            HousingSource::Url(url) => url.clone(),
        }
    }
}

/// A skipped input row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: the clean dataset plus bookkeeping about skipped rows.
#[derive(Debug, Clone)]
pub struct HousingData {
    pub dataset: Dataset,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

pub fn load(source: &HousingSource) -> Result<HousingData, AppError> {
    info!("loading housing data from {}", source.describe());
    match source {
        HousingSource::File(path) => {
            let file = File::open(path).map_err(|e| {
                AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display()))
            })?;
            parse_csv(file)
        }
        HousingSource::Url(url) => {
            let body = fetch_text(url)?;
            parse_csv(body.as_bytes())
        }
    }
}

fn fetch_text(url: &str) -> Result<String, AppError> {
    let resp = Client::new()
        .get(url)
        .send()
        .map_err(|e| AppError::new(4, format!("Dataset request failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::new(
            4,
            format!("Dataset request failed with status {}.", resp.status()),
        ));
    }

    resp.text()
        .map_err(|e| AppError::new(4, format!("Failed to read dataset response: {e}")))
}

/// Parse housing CSV from any reader.
pub fn parse_csv<R: Read>(reader: R) -> Result<HousingData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !header_map.contains_key(*c))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::new(
            2,
            format!("CSV is missing required columns: {}.", missing.join(", ")),
        ));
    }

    let mut features = Vec::new();
    let mut targets = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        if record.len() != headers.len() {
            row_errors.push(RowError {
                line,
                message: format!("expected {} fields, found {}", headers.len(), record.len()),
            });
            continue;
        }

        match parse_row(&record, &header_map) {
            Ok((row, target)) => {
                features.push(row);
                targets.push(target);
            }
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if !row_errors.is_empty() {
        warn!(
            "skipped {} of {rows_read} rows with missing or invalid values",
            row_errors.len()
        );
    }
    if features.is_empty() {
        return Err(AppError::new(3, "No valid rows remain after parsing the dataset."));
    }

    Ok(HousingData {
        dataset: Dataset {
            feature_names: FeatureName::names(),
            features,
            targets,
        },
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let name = name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase();
            (name, idx)
        })
        .collect()
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<(Vec<f64>, f64), String> {
    let field = |name: &str| -> Result<f64, String> {
        let raw = header_map
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("");
        if raw.is_empty() {
            return Err(format!("missing value for '{name}'"));
        }
        let v: f64 = raw
            .parse()
            .map_err(|_| format!("invalid number '{raw}' for '{name}'"))?;
        if v.is_finite() {
            Ok(v)
        } else {
            Err(format!("non-finite value for '{name}'"))
        }
    };

    let longitude = field("longitude")?;
    let latitude = field("latitude")?;
    let house_age = field("housing_median_age")?;
    let total_rooms = field("total_rooms")?;
    let total_bedrooms = field("total_bedrooms")?;
    let population = field("population")?;
    let households = field("households")?;
    let median_income = field("median_income")?;
    let median_house_value = field("median_house_value")?;

    if households <= 0.0 {
        return Err(format!("households must be > 0, got {households}"));
    }

    let row = vec![
        median_income,
        house_age,
        total_rooms / households,
        total_bedrooms / households,
        population,
        population / households,
        latitude,
        longitude,
    ];
    Ok((row, median_house_value / TARGET_SCALE))
}
