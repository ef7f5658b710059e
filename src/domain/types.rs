//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting and evaluation
//! - exported to JSON/CSV
//! - reloaded later for predictions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Row-major dense matrix. Non-empty and rectangular wherever the core accepts one.
pub type Matrix = Vec<Vec<f64>>;

/// Dense vector of doubles.
pub type Vector = Vec<f64>;

/// A design matrix paired with its target vector.
///
/// Loaders guarantee `features` is rectangular, fully populated, and has one row
/// per entry of `targets`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub feature_names: Vec<String>,
    pub features: Matrix,
    pub targets: Vector,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }
}

/// Accuracy metrics derived from a true/predicted vector pair.
///
/// `r2` is `NaN` when the true values have zero variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    #[serde(with = "nan_as_null")]
    pub r2: f64,
}

/// JSON has no NaN; an undefined R² round-trips through `null`.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        if v.is_nan() {
            s.serialize_none()
        } else {
            s.serialize_some(v)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
    }
}

/// The eight California-housing features, in design-matrix column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureName {
    MedInc,
    HouseAge,
    AveRooms,
    AveBedrms,
    Population,
    AveOccup,
    Latitude,
    Longitude,
}

impl FeatureName {
    pub const ALL: [FeatureName; 8] = [
        FeatureName::MedInc,
        FeatureName::HouseAge,
        FeatureName::AveRooms,
        FeatureName::AveBedrms,
        FeatureName::Population,
        FeatureName::AveOccup,
        FeatureName::Latitude,
        FeatureName::Longitude,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureName::MedInc => "MedInc",
            FeatureName::HouseAge => "HouseAge",
            FeatureName::AveRooms => "AveRooms",
            FeatureName::AveBedrms => "AveBedrms",
            FeatureName::Population => "Population",
            FeatureName::AveOccup => "AveOccup",
            FeatureName::Latitude => "Latitude",
            FeatureName::Longitude => "Longitude",
        }
    }

    /// Default input value used when a prediction request omits this feature.
    pub fn default_value(self) -> f64 {
        match self {
            FeatureName::MedInc => 3.5,
            FeatureName::HouseAge => 25.0,
            FeatureName::AveRooms => 5.5,
            FeatureName::AveBedrms => 1.2,
            FeatureName::Population => 1500.0,
            FeatureName::AveOccup => 3.0,
            FeatureName::Latitude => 37.5,
            FeatureName::Longitude => -122.0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FeatureName::MedInc => "Median income in block (3.5 = $35,000)",
            FeatureName::HouseAge => "Average age of houses in block",
            FeatureName::AveRooms => "Average number of rooms per house",
            FeatureName::AveBedrms => "Average bedrooms per house",
            FeatureName::Population => "Block population",
            FeatureName::AveOccup => "Average household members",
            FeatureName::Latitude => "Geographic coordinate",
            FeatureName::Longitude => "Geographic coordinate",
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|f| f.as_str().to_string()).collect()
    }
}

impl fmt::Display for FeatureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FeatureName::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                format!(
                    "Unknown feature '{needle}' (expected one of: {}).",
                    FeatureName::names().join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_name_parses_case_insensitively() {
        assert_eq!("medinc".parse::<FeatureName>().unwrap(), FeatureName::MedInc);
        assert_eq!(" Longitude ".parse::<FeatureName>().unwrap(), FeatureName::Longitude);
        assert!("rooms".parse::<FeatureName>().is_err());
    }

    #[test]
    fn undefined_r2_round_trips_through_null() {
        let m = Metrics {
            mse: 1.0,
            rmse: 1.0,
            mae: 1.0,
            r2: f64::NAN,
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"r2\":null"));
        let back: Metrics = serde_json::from_str(&json).unwrap();
        assert!(back.r2.is_nan());
    }

    #[test]
    fn feature_catalogue_is_ordered() {
        let names = FeatureName::names();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "MedInc");
        assert_eq!(names[7], "Longitude");
    }
}
