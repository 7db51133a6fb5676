pub mod ensemble;
pub mod normalizer;
pub mod scorer;

pub use ensemble::{agreement_confidence, combine, EnsembleOutcome};
pub use normalizer::normalize;
pub use scorer::{logistic, score, score_bank, weighted_sum};
