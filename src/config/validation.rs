//! Configuration validation that reports every issue at once.
//!
//! Each check is a pure function returning the list of problems it found;
//! `validate_config` concatenates them so a user sees all issues in one run.

use super::scoring::{FeatureWeights, ScorerSpec};
use super::thresholds::{AttributionConfig, RecommendationThresholds, RiskTiers};
use super::EngineConfig;
use crate::core::Feature;
use crate::errors::{Error, Result};

/// Validate entire config, accumulating ALL errors.
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    let errors = collect_config_errors(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::ConfigValidation(errors))
    }
}

pub fn collect_config_errors(config: &EngineConfig) -> Vec<String> {
    let mut errors = Vec::new();
    errors.extend(validate_reference_maxima(config));
    errors.extend(validate_scorers(&config.scorers));
    errors.extend(validate_ensemble(config));
    errors.extend(validate_tiers(&config.tiers));
    errors.extend(validate_attribution(&config.attribution));
    errors.extend(validate_recommendations(&config.recommendations));
    errors
}

fn validate_reference_maxima(config: &EngineConfig) -> Vec<String> {
    Feature::ALL
        .iter()
        .filter_map(|&feature| {
            let max = config.reference_maxima.get(feature);
            (!(max.is_finite() && max > 0.0)).then(|| {
                format!("reference_maxima.{feature} must be a positive number, got {max}")
            })
        })
        .collect()
}

fn validate_scorers(scorers: &[ScorerSpec]) -> Vec<String> {
    if scorers.is_empty() {
        return vec!["at least one scorer must be configured".to_string()];
    }

    let mut errors = Vec::new();
    for scorer in scorers {
        errors.extend(validate_scorer(scorer));
    }

    let blend_total: f64 = scorers.iter().map(|s| s.blend_weight).sum();
    if !(blend_total.is_finite() && blend_total > 0.0) {
        errors.push(format!(
            "scorer blend weights must have a positive sum, got {blend_total}"
        ));
    }
    errors
}

fn validate_scorer(scorer: &ScorerSpec) -> Vec<String> {
    let name = &scorer.name;
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push("scorer name must not be empty".to_string());
    }
    if !(scorer.steepness.is_finite() && scorer.steepness > 0.0) {
        errors.push(format!(
            "scorer '{name}': steepness must be a positive number, got {}",
            scorer.steepness
        ));
    }
    if !scorer.midpoint.is_finite() {
        errors.push(format!("scorer '{name}': midpoint must be finite"));
    }
    if !(scorer.blend_weight.is_finite() && scorer.blend_weight >= 0.0) {
        errors.push(format!(
            "scorer '{name}': blend_weight must be non-negative, got {}",
            scorer.blend_weight
        ));
    }
    if !(0.0..=1.0).contains(&scorer.reported_confidence) {
        errors.push(format!(
            "scorer '{name}': reported_confidence must be between 0.0 and 1.0, got {}",
            scorer.reported_confidence
        ));
    }

    for feature in Feature::ALL {
        let weight = scorer.weights.get(feature);
        if !FeatureWeights::is_valid_weight(weight) {
            errors.push(format!(
                "scorer '{name}': {feature} weight out of range: {weight} (must be 0.0-1.0)"
            ));
        }
    }

    let total = scorer.weights.total();
    if total.is_nan() || total <= 0.0 {
        errors.push(format!(
            "scorer '{name}': feature weights must have a positive total, got {total}"
        ));
    }
    errors
}

fn validate_ensemble(config: &EngineConfig) -> Vec<String> {
    let divisor = config.ensemble.post_blend_divisor;
    if divisor.is_finite() && divisor > 0.0 {
        Vec::new()
    } else {
        vec![format!(
            "ensemble.post_blend_divisor must be a positive number, got {divisor}"
        )]
    }
}

fn validate_tiers(tiers: &RiskTiers) -> Vec<String> {
    let ordered = 0.0 < tiers.medium && tiers.medium <= tiers.high && tiers.high < 1.0;
    if ordered {
        Vec::new()
    } else {
        vec![format!(
            "tiers must satisfy 0 < medium <= high < 1, got medium={} high={}",
            tiers.medium, tiers.high
        )]
    }
}

fn validate_attribution(attribution: &AttributionConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if attribution.top_features == 0 {
        errors.push("attribution.top_features must be at least 1".to_string());
    }
    if attribution.rules.is_empty() {
        errors.push("attribution.rules must not be empty".to_string());
    }

    for rule in &attribution.rules {
        let weights_ok = [rule.weight_above, rule.weight_at_or_below]
            .iter()
            .all(|w| w.is_finite() && *w > 0.0);
        if !weights_ok {
            errors.push(format!(
                "attribution rule for {}: weights must be positive numbers",
                rule.feature
            ));
        }
        if !rule.threshold.is_finite() {
            errors.push(format!(
                "attribution rule for {}: threshold must be finite",
                rule.feature
            ));
        }
    }

    for feature in Feature::ALL {
        let count = attribution
            .rules
            .iter()
            .filter(|r| r.feature == feature)
            .count();
        if count > 1 {
            errors.push(format!(
                "attribution rules list {feature} {count} times (at most once)"
            ));
        }
    }
    errors
}

fn validate_recommendations(thresholds: &RecommendationThresholds) -> Vec<String> {
    let mut errors = Vec::new();
    if thresholds.max_items == 0 {
        errors.push("recommendations.max_items must be at least 1".to_string());
    }
    let values = [
        ("high_tier_bmi", thresholds.high_tier_bmi),
        ("high_tier_glucose", thresholds.high_tier_glucose),
        ("medium_tier_bmi", thresholds.medium_tier_bmi),
        ("medium_tier_age", thresholds.medium_tier_age),
        ("healthy_bmi", thresholds.healthy_bmi),
    ];
    for (name, value) in values {
        if !value.is_finite() {
            errors.push(format!("recommendations.{name} must be finite"));
        }
    }
    errors
}
