//! End-to-end risk prediction.
//!
//! `predict` runs the whole pipeline for one measurement: normalize, score
//! with every scorer, blend, classify, attribute and recommend. It is pure
//! and never fails; `predict_checked` adds the boundary checks a
//! request-handling layer needs.

use rayon::prelude::*;

use crate::config::{default_config, EngineConfig};
use crate::core::{ModelPrediction, PatientMeasurement, PredictionResult};
use crate::errors::{Error, Result};
use crate::risk::{classify, recommend, top_features};
use crate::scoring::{combine, normalize, score_bank};

pub fn predict(measurement: &PatientMeasurement, config: &EngineConfig) -> PredictionResult {
    let features = normalize(measurement, &config.reference_maxima);
    let scores = score_bank(&config.scorers, &features);
    let outcome = combine(&config.scorers, &scores, &config.ensemble);
    let risk_level = classify(outcome.probability, &config.tiers);

    log::debug!(
        "scores={:?} probability={:.4} confidence={:.4} tier={}",
        scores,
        outcome.probability,
        outcome.confidence,
        risk_level
    );

    let models = config
        .scorers
        .iter()
        .zip(&scores)
        .map(|(scorer, &probability)| ModelPrediction {
            name: scorer.name.clone(),
            probability,
            confidence: scorer.reported_confidence,
        })
        .collect();

    PredictionResult {
        risk_level,
        probability: outcome.probability,
        confidence: outcome.confidence,
        recommendations: recommend(risk_level, measurement, &config.recommendations),
        models,
        feature_importance: top_features(measurement, &config.attribution),
    }
}

/// [`predict`] with the built-in configuration.
pub fn predict_default(measurement: &PatientMeasurement) -> PredictionResult {
    predict(measurement, default_config())
}

/// Reject non-finite input and non-finite output.
///
/// Extreme but finite values pass through; they saturate the scorers
/// rather than break them.
pub fn predict_checked(
    measurement: &PatientMeasurement,
    config: &EngineConfig,
) -> Result<PredictionResult> {
    if let Some(feature) = measurement.first_non_finite() {
        return Err(Error::invalid_input(
            feature.key(),
            format!("expected a finite number, got {}", measurement.value(feature)),
        ));
    }

    let result = predict(measurement, config);
    if !result.is_finite() {
        return Err(Error::Prediction(format!(
            "non-finite result (probability={}, confidence={})",
            result.probability, result.confidence
        )));
    }
    Ok(result)
}

/// Predict many measurements in parallel. Output order matches input order.
pub fn predict_batch(
    measurements: &[PatientMeasurement],
    config: &EngineConfig,
) -> Vec<PredictionResult> {
    measurements
        .par_iter()
        .map(|m| predict(m, config))
        .collect()
}
