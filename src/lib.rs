// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod io;
pub mod risk;
pub mod samples;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Feature, FeatureImportance, ModelPrediction, NormalizedFeatures, PatientMeasurement,
    PredictionResult, RiskLevel,
};

pub use crate::config::{default_config, EngineConfig, ScalingPreset};

pub use crate::engine::{predict, predict_batch, predict_checked, predict_default};

pub use crate::errors::{Error, ErrorResponse, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::io::request::{parse_batch, parse_request};

pub use crate::samples::SampleProfile;
