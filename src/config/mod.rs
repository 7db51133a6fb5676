// Sub-modules
mod core;
mod loader;
pub mod presets;
mod scoring;
mod thresholds;
pub mod validation;

pub use self::core::{default_config, EngineConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use presets::ScalingPreset;
pub use scoring::{
    default_post_blend_divisor, default_scorers, EnsembleConfig, FeatureWeights, ReferenceMaxima,
    ScorerSpec,
};
pub use thresholds::{
    default_attribution_rules, AttributionConfig, AttributionRule, RecommendationThresholds,
    RiskTiers,
};
pub use validation::validate_config;
