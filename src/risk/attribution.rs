//! Threshold-based feature attribution.
//!
//! Independent of the scorer bank: each rule picks one of two fixed weights
//! depending on whether the raw value is strictly above its clinical
//! threshold, and the chosen weights are normalized to fractions of their
//! total.

use std::cmp::Ordering;

use crate::config::{AttributionConfig, AttributionRule};
use crate::core::{FeatureImportance, PatientMeasurement};

pub fn chosen_weight(rule: &AttributionRule, measurement: &PatientMeasurement) -> f64 {
    if measurement.value(rule.feature) > rule.threshold {
        rule.weight_above
    } else {
        rule.weight_at_or_below
    }
}

/// Full ranking over every rule, most important first. Equal importances
/// keep rule-table order.
pub fn rank_features(
    measurement: &PatientMeasurement,
    config: &AttributionConfig,
) -> Vec<FeatureImportance> {
    let weights: Vec<f64> = config
        .rules
        .iter()
        .map(|rule| chosen_weight(rule, measurement))
        .collect();
    let total: f64 = weights.iter().sum();

    let mut ranked: Vec<FeatureImportance> = config
        .rules
        .iter()
        .zip(&weights)
        .map(|(rule, weight)| FeatureImportance {
            feature: rule.feature.display_name(),
            importance: weight / total,
        })
        .collect();

    // sort_by is stable, so ties keep declaration order
    ranked.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// The leading `config.top_features` entries of [`rank_features`].
pub fn top_features(
    measurement: &PatientMeasurement,
    config: &AttributionConfig,
) -> Vec<FeatureImportance> {
    let mut ranked = rank_features(measurement, config);
    ranked.truncate(config.top_features);
    ranked
}
