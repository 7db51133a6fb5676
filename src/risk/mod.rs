pub mod attribution;
pub mod recommendations;

use crate::config::RiskTiers;
use crate::core::RiskLevel;

pub use attribution::{rank_features, top_features};
pub use recommendations::recommend;

/// Map an ensemble probability to its tier. Cut points are inclusive on
/// the lower edge of each higher tier.
pub fn classify(probability: f64, tiers: &RiskTiers) -> RiskLevel {
    if probability < tiers.medium {
        RiskLevel::Low
    } else if probability < tiers.high {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let tiers = RiskTiers::default();
        assert_eq!(classify(0.0, &tiers), RiskLevel::Low);
        assert_eq!(classify(0.3299, &tiers), RiskLevel::Low);
        assert_eq!(classify(0.33, &tiers), RiskLevel::Medium);
        assert_eq!(classify(0.6699, &tiers), RiskLevel::Medium);
        assert_eq!(classify(0.67, &tiers), RiskLevel::High);
        assert_eq!(classify(0.99, &tiers), RiskLevel::High);
    }
}
