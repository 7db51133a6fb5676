//! Ensemble scaling presets.
//!
//! - **Compatible**: divides the blended score by 3, matching previously
//!   published probabilities (capped at 1/3)
//! - **UnitScaled**: uses the blend as-is, so the full tier range is reachable

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::core::EngineConfig;
use super::scoring::EnsembleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScalingPreset {
    /// Blend divided by 3 (default)
    #[default]
    Compatible,
    /// Blend used without the extra division
    UnitScaled,
}

impl ScalingPreset {
    pub fn ensemble(self) -> EnsembleConfig {
        match self {
            ScalingPreset::Compatible => EnsembleConfig::default(),
            ScalingPreset::UnitScaled => EnsembleConfig {
                post_blend_divisor: 1.0,
            },
        }
    }

    /// Replace the ensemble section of `config`, keeping everything else.
    pub fn apply(self, mut config: EngineConfig) -> EngineConfig {
        config.ensemble = self.ensemble();
        config
    }

    pub fn to_config(self) -> EngineConfig {
        self.apply(EngineConfig::default())
    }
}
