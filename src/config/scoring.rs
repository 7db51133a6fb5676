//! Scoring configuration: reference maxima, scorer tables and ensemble blend.
//!
//! Defaults reproduce the fixed design constants of the three hand-weighted
//! scorers. They are plain data so a test or a config file can substitute
//! any of them.

use serde::{Deserialize, Serialize};

use crate::core::Feature;

/// Per-feature linear weights of one scorer.
///
/// A feature omitted from a config file gets weight 0 and so contributes
/// nothing to the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureWeights {
    #[serde(default)]
    pub pregnancies: f64,
    #[serde(default)]
    pub glucose: f64,
    #[serde(default)]
    pub blood_pressure: f64,
    #[serde(default)]
    pub skin_thickness: f64,
    #[serde(default)]
    pub insulin: f64,
    #[serde(default)]
    pub bmi: f64,
    #[serde(default)]
    pub diabetes_pedigree: f64,
    #[serde(default)]
    pub age: f64,
}

impl FeatureWeights {
    pub fn get(&self, feature: Feature) -> f64 {
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

    pub fn total(&self) -> f64 {
        Feature::ALL.iter().map(|&f| self.get(f)).sum()
    }

    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }
}

/// Divisors that bring each raw measurement onto a roughly [0, 1] scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceMaxima {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub age: f64,
}

impl Default for ReferenceMaxima {
    fn default() -> Self {
        Self {
            pregnancies: 17.0,
            glucose: 199.0,
            blood_pressure: 122.0,
            skin_thickness: 99.0,
            insulin: 846.0,
            bmi: 67.1,
            diabetes_pedigree: 2.42,
            age: 81.0,
        }
    }
}

impl ReferenceMaxima {
    pub fn get(&self, feature: Feature) -> f64 {
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
}

/// One weighted-sum-plus-logistic scorer.
///
/// `score = logistic(steepness * (sum(weight * normalized) - midpoint))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerSpec {
    pub name: String,
    pub steepness: f64,
    pub midpoint: f64,
    /// Share of this scorer in the ensemble blend
    pub blend_weight: f64,
    /// Fixed confidence reported alongside this scorer's probability
    pub reported_confidence: f64,
    pub weights: FeatureWeights,
}

impl ScorerSpec {
    pub fn random_forest() -> Self {
        Self {
            name: "Random Forest".to_string(),
            steepness: 5.0,
            midpoint: 0.45,
            blend_weight: 0.35,
            reported_confidence: 0.78,
            weights: FeatureWeights {
                glucose: 0.28,
                bmi: 0.22,
                age: 0.19,
                insulin: 0.15,
                diabetes_pedigree: 0.10,
                blood_pressure: 0.04,
                skin_thickness: 0.01,
                pregnancies: 0.01,
            },
        }
    }

    pub fn logistic_regression() -> Self {
        Self {
            name: "Logistic Regression".to_string(),
            steepness: 4.5,
            midpoint: 0.35,
            blend_weight: 0.25,
            reported_confidence: 0.72,
            weights: FeatureWeights {
                glucose: 0.35,
                bmi: 0.18,
                age: 0.12,
                diabetes_pedigree: 0.08,
                insulin: 0.10,
                blood_pressure: 0.02,
                skin_thickness: 0.01,
                pregnancies: 0.01,
            },
        }
    }

    pub fn xgboost() -> Self {
        Self {
            name: "XGBoost".to_string(),
            steepness: 5.5,
            midpoint: 0.42,
            blend_weight: 0.40,
            reported_confidence: 0.81,
            weights: FeatureWeights {
                glucose: 0.32,
                bmi: 0.25,
                age: 0.20,
                insulin: 0.12,
                diabetes_pedigree: 0.06,
                blood_pressure: 0.03,
                skin_thickness: 0.01,
                pregnancies: 0.01,
            },
        }
    }
}

pub fn default_scorers() -> Vec<ScorerSpec> {
    vec![
        ScorerSpec::random_forest(),
        ScorerSpec::logistic_regression(),
        ScorerSpec::xgboost(),
    ]
}

/// How scorer outputs are folded into one probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnsembleConfig {
    /// The blended sum is divided by this value after weighting.
    ///
    /// The blend weights already sum to 1.0, so the default of 3.0 caps the
    /// probability at 1/3. Kept for compatibility with published scores.
    #[serde(default = "default_post_blend_divisor")]
    pub post_blend_divisor: f64,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            post_blend_divisor: default_post_blend_divisor(),
        }
    }
}

pub fn default_post_blend_divisor() -> f64 {
    3.0
}
