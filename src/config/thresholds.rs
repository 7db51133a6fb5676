use serde::{Deserialize, Serialize};

use crate::core::Feature;

/// Probability cut points between risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskTiers {
    /// Lowest probability classified as medium
    #[serde(default = "default_medium_cutoff")]
    pub medium: f64,
    /// Lowest probability classified as high
    #[serde(default = "default_high_cutoff")]
    pub high: f64,
}

impl Default for RiskTiers {
    fn default() -> Self {
        Self {
            medium: default_medium_cutoff(),
            high: default_high_cutoff(),
        }
    }
}

fn default_medium_cutoff() -> f64 {
    0.33
}
fn default_high_cutoff() -> f64 {
    0.67
}

/// Clinical threshold for one raw measurement and the attribution weight
/// used on either side of it. Values strictly above `threshold` take
/// `weight_above`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributionRule {
    pub feature: Feature,
    pub threshold: f64,
    pub weight_above: f64,
    pub weight_at_or_below: f64,
}

impl AttributionRule {
    const fn new(feature: Feature, threshold: f64, above: f64, at_or_below: f64) -> Self {
        Self {
            feature,
            threshold,
            weight_above: above,
            weight_at_or_below: at_or_below,
        }
    }
}

/// Rule table for feature attribution. Rule order breaks importance ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionConfig {
    /// Number of entries kept in the reported ranking
    #[serde(default = "default_top_features")]
    pub top_features: usize,

    #[serde(default = "default_attribution_rules")]
    pub rules: Vec<AttributionRule>,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            top_features: default_top_features(),
            rules: default_attribution_rules(),
        }
    }
}

fn default_top_features() -> usize {
    4
}

pub fn default_attribution_rules() -> Vec<AttributionRule> {
    vec![
        AttributionRule::new(Feature::Glucose, 126.0, 0.28, 0.15),
        AttributionRule::new(Feature::Bmi, 30.0, 0.25, 0.18),
        AttributionRule::new(Feature::Age, 45.0, 0.22, 0.12),
        AttributionRule::new(Feature::Insulin, 100.0, 0.18, 0.08),
        AttributionRule::new(Feature::DiabetesPedigree, 0.5, 0.12, 0.05),
        AttributionRule::new(Feature::BloodPressure, 90.0, 0.08, 0.02),
        AttributionRule::new(Feature::SkinThickness, 25.0, 0.04, 0.01),
        AttributionRule::new(Feature::Pregnancies, 3.0, 0.05, 0.01),
    ]
}

/// Raw-value triggers for the conditional advisory lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Upper bound on the number of advisory lines returned
    pub max_items: usize,
    /// High tier: weight loss program when bmi is above this
    pub high_tier_bmi: f64,
    /// High tier: daily glucose monitoring when glucose is above this
    pub high_tier_glucose: f64,
    /// Medium tier: weight reduction target when bmi is above this
    pub medium_tier_bmi: f64,
    /// Medium tier: more frequent screening when age is above this
    pub medium_tier_age: f64,
    /// Low tier: keep-BMI advice when bmi is below this
    pub healthy_bmi: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            max_items: 4,
            high_tier_bmi: 30.0,
            high_tier_glucose: 126.0,
            medium_tier_bmi: 27.0,
            medium_tier_age: 45.0,
            healthy_bmi: 25.0,
        }
    }
}
