use crate::config::RecommendationThresholds;
use crate::core::{PatientMeasurement, RiskLevel};

pub const IMMEDIATE_CONSULTATION: &str = "Schedule immediate consultation with healthcare provider";
pub const SCREENING_TESTS: &str = "Complete diabetes screening tests (HbA1c, fasting glucose)";
pub const WEIGHT_LOSS_PROGRAM: &str = "Implement structured weight loss program";
pub const DAILY_GLUCOSE_MONITORING: &str = "Monitor glucose levels daily";

pub const PREVENTIVE_CHECKUP: &str = "Schedule preventive health check-up within 2-4 weeks";
pub const LIFESTYLE_MODIFICATIONS: &str = "Focus on lifestyle modifications (diet & exercise)";
pub const WEIGHT_REDUCTION: &str = "Aim for 5-10% weight reduction";
pub const SCREENING_FREQUENCY: &str = "Increase health screening frequency";

pub const MAINTAIN_LIFESTYLE: &str = "Maintain current healthy lifestyle";
pub const PHYSICAL_ACTIVITY: &str = "Continue regular physical activity (150 min/week)";
pub const KEEP_HEALTHY_BMI: &str = "Keep BMI in healthy range";
pub const ANNUAL_CHECKUPS: &str = "Annual preventive check-ups recommended";

fn high_tier(m: &PatientMeasurement, t: &RecommendationThresholds) -> Vec<&'static str> {
    let mut lines = vec![IMMEDIATE_CONSULTATION, SCREENING_TESTS];
    if m.bmi > t.high_tier_bmi {
        lines.push(WEIGHT_LOSS_PROGRAM);
    }
    if m.glucose > t.high_tier_glucose {
        lines.push(DAILY_GLUCOSE_MONITORING);
    }
    lines
}

fn medium_tier(m: &PatientMeasurement, t: &RecommendationThresholds) -> Vec<&'static str> {
    let mut lines = vec![PREVENTIVE_CHECKUP, LIFESTYLE_MODIFICATIONS];
    if m.bmi > t.medium_tier_bmi {
        lines.push(WEIGHT_REDUCTION);
    }
    if m.age > t.medium_tier_age {
        lines.push(SCREENING_FREQUENCY);
    }
    lines
}

fn low_tier(m: &PatientMeasurement, t: &RecommendationThresholds) -> Vec<&'static str> {
    let mut lines = vec![MAINTAIN_LIFESTYLE, PHYSICAL_ACTIVITY];
    if m.bmi < t.healthy_bmi {
        lines.push(KEEP_HEALTHY_BMI);
    }
    lines.push(ANNUAL_CHECKUPS);
    lines
}

/// Ordered advisory lines for a tier, most important first, capped at
/// `thresholds.max_items`.
pub fn recommend(
    level: RiskLevel,
    measurement: &PatientMeasurement,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let lines = match level {
        RiskLevel::High => high_tier(measurement, thresholds),
        RiskLevel::Medium => medium_tier(measurement, thresholds),
        RiskLevel::Low => low_tier(measurement, thresholds),
    };

    lines
        .into_iter()
        .take(thresholds.max_items)
        .map(str::to_string)
        .collect()
}
