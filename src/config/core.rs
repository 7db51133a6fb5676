use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::scoring::{default_scorers, EnsembleConfig, ReferenceMaxima, ScorerSpec};
use super::thresholds::{AttributionConfig, RecommendationThresholds, RiskTiers};

/// Every constant table the engine consults, as one injectable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Divisors used by the normalizer
    #[serde(default)]
    pub reference_maxima: ReferenceMaxima,

    /// Ensemble blend settings
    #[serde(default)]
    pub ensemble: EnsembleConfig,

    /// Probability cut points for the risk tiers
    #[serde(default)]
    pub tiers: RiskTiers,

    /// Threshold rules for feature attribution
    #[serde(default)]
    pub attribution: AttributionConfig,

    /// Triggers for conditional recommendations
    #[serde(default)]
    pub recommendations: RecommendationThresholds,

    /// Scorer bank, reported in this order
    #[serde(default = "default_scorers")]
    pub scorers: Vec<ScorerSpec>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_maxima: ReferenceMaxima::default(),
            ensemble: EnsembleConfig::default(),
            tiers: RiskTiers::default(),
            attribution: AttributionConfig::default(),
            recommendations: RecommendationThresholds::default(),
            scorers: default_scorers(),
        }
    }
}

static DEFAULT_CONFIG: Lazy<EngineConfig> = Lazy::new(EngineConfig::default);

/// Built-in configuration, constructed once per process.
pub fn default_config() -> &'static EngineConfig {
    &DEFAULT_CONFIG
}
