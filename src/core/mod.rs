pub mod feature;
pub mod types;

pub use feature::{humanize_key, Feature};
pub use types::{
    FeatureImportance, ModelPrediction, NormalizedFeatures, PatientMeasurement, PredictionResult,
    RiskLevel,
};
