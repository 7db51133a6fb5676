//! Ensemble combination of scorer outputs.
//!
//! Probability is the blend-weighted sum of the scorer outputs divided by the
//! configured post-blend divisor. Confidence measures agreement between the
//! scorers: `max(0, 1 - population_std_dev)`, so identical outputs give 1.0.

use crate::config::{EnsembleConfig, ScorerSpec};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleOutcome {
    pub probability: f64,
    pub confidence: f64,
}

pub fn blend_probability(scorers: &[ScorerSpec], scores: &[f64], config: &EnsembleConfig) -> f64 {
    let blended: f64 = scorers
        .iter()
        .zip(scores)
        .map(|(scorer, score)| score * scorer.blend_weight)
        .sum();
    blended / config.post_blend_divisor
}

/// Population variance of `values`; 0.0 for an empty slice.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

pub fn agreement_confidence(scores: &[f64]) -> f64 {
    (1.0 - population_variance(scores).sqrt()).max(0.0)
}

pub fn combine(scorers: &[ScorerSpec], scores: &[f64], config: &EnsembleConfig) -> EnsembleOutcome {
    EnsembleOutcome {
        probability: blend_probability(scorers, scores, config),
        confidence: agreement_confidence(scores),
    }
}
