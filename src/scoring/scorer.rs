use crate::config::ScorerSpec;
use crate::core::NormalizedFeatures;

/// Standard logistic function `1 / (1 + e^-x)`.
///
/// Evaluated so the exponent is never positive, which keeps large
/// magnitudes from overflowing; the result saturates toward 0 or 1.
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Linear combination of normalized features with a scorer's weights.
pub fn weighted_sum(scorer: &ScorerSpec, features: &NormalizedFeatures) -> f64 {
    features
        .iter()
        .map(|(feature, value)| scorer.weights.get(feature) * value)
        .sum()
}

/// Independent probability estimate of one scorer.
pub fn score(scorer: &ScorerSpec, features: &NormalizedFeatures) -> f64 {
    let sum = weighted_sum(scorer, features);
    logistic(scorer.steepness * (sum - scorer.midpoint))
}

/// Run every scorer in the bank, in configuration order.
pub fn score_bank(scorers: &[ScorerSpec], features: &NormalizedFeatures) -> Vec<f64> {
    scorers
        .iter()
        .map(|scorer| {
            let p = score(scorer, features);
            log::trace!("{} -> {:.6}", scorer.name, p);
            p
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_scorers;
    use proptest::prelude::*;

    fn zeros() -> NormalizedFeatures {
        NormalizedFeatures::from_fn(|_| 0.0)
    }

    #[test]
    fn test_logistic_midpoint() {
        assert_eq!(logistic(0.0), 0.5);
    }

    #[test]
    fn test_logistic_saturates_without_overflow() {
        assert_eq!(logistic(1000.0), 1.0);
        assert_eq!(logistic(-1000.0), 0.0);
        assert!(logistic(-1000.0).is_finite());
    }

    #[test]
    fn test_zero_features_score_below_half() {
        for scorer in default_scorers() {
            let expected = logistic(scorer.steepness * -scorer.midpoint);
            let p = score(&scorer, &zeros());
            assert!((p - expected).abs() < 1e-15);
            assert!(p < 0.5, "{} scored {p}", scorer.name);
        }
    }

    #[test]
    fn test_random_forest_known_value() {
        // weighted sum of 0.45 sits exactly on the midpoint
        let scorer = &default_scorers()[0];
        let features = NormalizedFeatures::from_fn(|_| 0.45);
        assert!((score(scorer, &features) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_score_bank_preserves_order() {
        let scores = score_bank(&default_scorers(), &zeros());
        assert_eq!(scores.len(), 3);
        assert!((scores[0] - logistic(-2.25)).abs() < 1e-15);
        assert!((scores[1] - logistic(-1.575)).abs() < 1e-15);
        assert!((scores[2] - logistic(-2.31)).abs() < 1e-15);
    }

    proptest! {
        #[test]
        fn logistic_is_monotonic(a in -50.0..50.0f64, b in -50.0..50.0f64) {
            if a < b {
                prop_assert!(logistic(a) <= logistic(b));
            }
        }

        #[test]
        fn logistic_stays_in_open_unit_interval(x in -30.0..30.0f64) {
            let y = logistic(x);
            prop_assert!(y > 0.0 && y < 1.0);
        }
    }
}
