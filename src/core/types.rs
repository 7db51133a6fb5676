use serde::{Deserialize, Serialize};
use std::fmt;

use super::feature::Feature;

/// Raw clinical measurements for a single request.
///
/// Values are expected to be non-negative but are not rejected when they are
/// not; the scoring math saturates instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PatientMeasurement {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: f64,
}

impl PatientMeasurement {
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Pregnancies => self.pregnancies,
            Feature::Glucose => self.glucose,
            Feature::BloodPressure => self.blood_pressure,
            Feature::SkinThickness => self.skin_thickness,
            Feature::Insulin => self.insulin,
            Feature::Bmi => self.bmi,
            Feature::DiabetesPedigree => self.diabetes_pedigree,
            Feature::Age => self.age,
        }
    }

    /// First feature holding a NaN or infinite value, if any.
    pub fn first_non_finite(&self) -> Option<Feature> {
        Feature::ALL
            .into_iter()
            .find(|&feature| !self.value(feature).is_finite())
    }
}

/// Raw values divided by their reference maxima. Not capped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFeatures {
    values: [f64; Feature::COUNT],
}

impl NormalizedFeatures {
    pub fn from_fn(mut f: impl FnMut(Feature) -> f64) -> Self {
        let mut values = [0.0; Feature::COUNT];
        for feature in Feature::ALL {
            values[feature.index()] = f(feature);
        }
        Self { values }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().map(|f| (f, self.values[f.index()]))
    }
}

/// Ordinal risk tier derived from the ensemble probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scorer's independent estimate as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub name: String,
    pub probability: f64,
    /// Fixed per-scorer constant, not computed.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Complete outcome of a single prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub risk_level: RiskLevel,
    pub probability: f64,
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub models: Vec<ModelPrediction>,
    pub feature_importance: Vec<FeatureImportance>,
}

impl PredictionResult {
    /// True when every numeric field is a finite real.
    pub fn is_finite(&self) -> bool {
        self.probability.is_finite()
            && self.confidence.is_finite()
            && self.models.iter().all(|m| m.probability.is_finite())
            && self
                .feature_importance
                .iter()
                .all(|f| f.importance.is_finite())
    }
}
