use healthpredict::config::{
    discover_config, load_config_from_path, EngineConfig, ScalingPreset, CONFIG_FILE_NAME,
};
use healthpredict::core::{PatientMeasurement, RiskLevel};
use healthpredict::engine::predict;
use healthpredict::Error;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

const UNIT_SCALED: &str = indoc! {"
    [ensemble]
    post_blend_divisor = 1.0
"};

#[test]
fn test_discovers_config_in_ancestor_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), UNIT_SCALED).unwrap();
    let nested = temp_dir.path().join("clinic").join("reports");
    fs::create_dir_all(&nested).unwrap();

    let config = discover_config(nested);
    assert_eq!(config, ScalingPreset::UnitScaled.to_config());
}

#[test]
fn test_invalid_discovered_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        indoc! {"
            [tiers]
            medium = 0.9
            high = 0.1
        "},
    )
    .unwrap();

    let config = discover_config(temp_dir.path().to_path_buf());
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_explicit_path_reports_every_issue() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(
        &path,
        indoc! {"
            [ensemble]
            post_blend_divisor = -1.0

            [recommendations]
            max_items = 0
        "},
    )
    .unwrap();

    match load_config_from_path(&path) {
        Err(Error::ConfigValidation(issues)) => {
            assert_eq!(issues.len(), 2, "{issues:#?}");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");
    match load_config_from_path(&path) {
        Err(Error::Configuration { path: Some(p), .. }) => assert_eq!(p, path),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_custom_tiers_change_classification() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tiers.toml");
    fs::write(
        &path,
        indoc! {"
            [tiers]
            medium = 0.02
            high = 0.03
        "},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    let result = predict(&PatientMeasurement::default(), &config);
    // all-zero input blends to about 0.037 under the default divisor
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn test_partial_scorer_table_replaces_bank() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("single.toml");
    fs::write(
        &path,
        indoc! {r#"
            [[scorers]]
            name = "Glucose Only"
            steepness = 4.0
            midpoint = 0.5
            blend_weight = 1.0
            reported_confidence = 0.5

            [scorers.weights]
            glucose = 1.0
        "#},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    let result = predict(&PatientMeasurement::default(), &config);
    assert_eq!(result.models.len(), 1);
    assert_eq!(result.models[0].name, "Glucose Only");
}
